use uuid::Uuid;

use kernel::prelude::entity::{
    CustomerId, DestructOrder, DestructOrderLineItem, Order, OrderId, OrderLineItem,
    OrderLineItemId, ProductId, ProductPrice, ProductQuantity,
};

pub struct CreateOrderDto {
    pub customer_id: Uuid,
    pub products: Vec<OrderProductDto>,
}

/// One requested line: which product and how many of it.
pub struct OrderProductDto {
    pub id: Uuid,
    pub quantity: i32,
}

pub struct GetOrderDto {
    pub id: Uuid,
}

pub struct OrderDto {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub products: Vec<OrderLineItemDto>,
}

pub struct OrderLineItemDto {
    pub id: OrderLineItemId,
    pub product_id: ProductId,
    pub quantity: ProductQuantity,
    pub price: ProductPrice,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        let DestructOrder {
            id,
            customer_id,
            items,
        } = order.into_destruct();
        Self {
            id,
            customer_id,
            products: items.into_iter().map(OrderLineItemDto::from).collect(),
        }
    }
}

impl From<OrderLineItem> for OrderLineItemDto {
    fn from(item: OrderLineItem) -> Self {
        let DestructOrderLineItem {
            id,
            product_id,
            quantity,
            price,
        } = item.into_destruct();
        Self {
            id,
            product_id,
            quantity,
            price,
        }
    }
}
