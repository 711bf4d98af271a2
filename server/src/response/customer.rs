use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use application::transfer::CustomerDto;
use kernel::prelude::entity::{CustomerEmail, CustomerId, CustomerName};

#[derive(Debug, Serialize)]
pub struct CreatedCustomerResponse {
    id: CustomerId,
    name: CustomerName,
    email: CustomerEmail,
}

impl From<CustomerDto> for CreatedCustomerResponse {
    fn from(dto: CustomerDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            email: dto.email,
        }
    }
}

impl IntoResponse for CreatedCustomerResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}
