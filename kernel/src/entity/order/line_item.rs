use destructure::Destructure;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln, References};

use crate::entity::{ProductId, ProductPrice, ProductQuantity};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct OrderLineItemId(Uuid);

impl OrderLineItemId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}

/// One product-and-quantity entry within an order. `price` is the unit price
/// captured when the order was placed, independent of later product changes.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct OrderLineItem {
    id: OrderLineItemId,
    product_id: ProductId,
    quantity: ProductQuantity,
    price: ProductPrice,
}

impl OrderLineItem {
    pub fn new(
        id: OrderLineItemId,
        product_id: ProductId,
        quantity: ProductQuantity,
        price: ProductPrice,
    ) -> Self {
        Self {
            id,
            product_id,
            quantity,
            price,
        }
    }
}
