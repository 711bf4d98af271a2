mod customer;
mod order;
mod product;

pub use self::{customer::*, order::*, product::*};
