use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use application::transfer::{OrderDto, OrderLineItemDto};
use kernel::prelude::entity::{
    CustomerId, OrderId, OrderLineItemId, ProductId, ProductPrice, ProductQuantity,
};

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    id: OrderId,
    customer_id: CustomerId,
    products: Vec<OrderLineItemResponse>,
}

#[derive(Debug, Serialize)]
pub struct OrderLineItemResponse {
    id: OrderLineItemId,
    product_id: ProductId,
    quantity: ProductQuantity,
    price: ProductPrice,
}

impl From<OrderDto> for OrderResponse {
    fn from(dto: OrderDto) -> Self {
        Self {
            id: dto.id,
            customer_id: dto.customer_id,
            products: dto
                .products
                .into_iter()
                .map(OrderLineItemResponse::from)
                .collect(),
        }
    }
}

impl From<OrderLineItemDto> for OrderLineItemResponse {
    fn from(dto: OrderLineItemDto) -> Self {
        Self {
            id: dto.id,
            product_id: dto.product_id,
            quantity: dto.quantity,
            price: dto.price,
        }
    }
}

impl IntoResponse for OrderResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug)]
pub struct CreatedOrderResponse(OrderResponse);

impl From<OrderDto> for CreatedOrderResponse {
    fn from(dto: OrderDto) -> Self {
        Self(OrderResponse::from(dto))
    }
}

impl IntoResponse for CreatedOrderResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self.0)).into_response()
    }
}
