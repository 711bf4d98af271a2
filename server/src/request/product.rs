use rust_decimal::Decimal;
use serde::Deserialize;

use application::transfer::CreateProductDto;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    name: String,
    price: Decimal,
    quantity: i32,
}

impl From<CreateProductRequest> for CreateProductDto {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            quantity: request.quantity,
        }
    }
}
