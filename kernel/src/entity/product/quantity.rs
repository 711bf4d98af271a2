use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Stock count. Only order placement decrements this.
#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ProductQuantity(i32);

impl ProductQuantity {
    pub fn new(quantity: impl Into<i32>) -> Self {
        Self(quantity.into())
    }
}
