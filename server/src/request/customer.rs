use serde::Deserialize;

use application::transfer::CreateCustomerDto;

#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    name: String,
    email: String,
}

impl From<CreateCustomerRequest> for CreateCustomerDto {
    fn from(request: CreateCustomerRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
        }
    }
}
