mod id;
mod name;
mod price;
mod quantity;

pub use self::{id::*, name::*, price::*, quantity::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    price: ProductPrice,
    quantity: ProductQuantity,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: ProductName,
        price: ProductPrice,
        quantity: ProductQuantity,
    ) -> Self {
        Self {
            id,
            name,
            price,
            quantity,
        }
    }
}
