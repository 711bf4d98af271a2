use std::fmt::Display;

use error_stack::Context;

use crate::entity::ProductId;

#[derive(Debug)]
pub enum KernelError {
    DuplicateEmail,
    DuplicateProduct,
    CustomerNotFound,
    EmptyProducts,
    InexistentProduct(ProductId),
    UnavailableQuantity(ProductId),
    Concurrency,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::DuplicateEmail => write!(f, "Email already used"),
            KernelError::DuplicateProduct => write!(f, "Product name already used"),
            KernelError::CustomerNotFound => write!(f, "Customer not found"),
            KernelError::EmptyProducts => write!(f, "None of the requested products exist"),
            KernelError::InexistentProduct(id) => {
                write!(f, "Inexistent product id {}", id.as_ref())
            }
            KernelError::UnavailableQuantity(id) => {
                write!(f, "Unavailable quantity for product id {}", id.as_ref())
            }
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
