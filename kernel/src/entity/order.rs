mod id;
mod line_item;

pub use self::{id::*, line_item::*};
use destructure::Destructure;
use vodca::References;

use crate::entity::CustomerId;

/// Created once by order placement and never mutated afterward. Line items
/// keep the price snapshot taken at placement time.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderLineItem>,
}

impl Order {
    pub fn new(id: OrderId, customer_id: CustomerId, items: Vec<OrderLineItem>) -> Self {
        Self {
            id,
            customer_id,
            items,
        }
    }
}
