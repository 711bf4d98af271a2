pub use self::{customer::*, order::*, product::*};

mod customer;
mod order;
mod product;
