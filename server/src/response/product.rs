use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use application::transfer::ProductDto;
use kernel::prelude::entity::{ProductId, ProductName, ProductPrice, ProductQuantity};

#[derive(Debug, Serialize)]
pub struct CreatedProductResponse {
    id: ProductId,
    name: ProductName,
    price: ProductPrice,
    quantity: ProductQuantity,
}

impl From<ProductDto> for CreatedProductResponse {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            price: dto.price,
            quantity: dto.quantity,
        }
    }
}

impl IntoResponse for CreatedProductResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}
