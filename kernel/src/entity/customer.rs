mod email;
mod id;
mod name;

pub use self::{email::*, id::*, name::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct Customer {
    id: CustomerId,
    name: CustomerName,
    email: CustomerEmail,
}

impl Customer {
    pub fn new(id: CustomerId, name: CustomerName, email: CustomerEmail) -> Self {
        Self { id, name, email }
    }
}
