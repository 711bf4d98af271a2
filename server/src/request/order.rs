use serde::Deserialize;
use uuid::Uuid;

use application::transfer::{CreateOrderDto, OrderProductDto};

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    customer_id: Uuid,
    products: Vec<OrderProductRequest>,
}

#[derive(Debug, Deserialize)]
pub struct OrderProductRequest {
    id: Uuid,
    quantity: i32,
}

impl From<CreateOrderRequest> for CreateOrderDto {
    fn from(request: CreateOrderRequest) -> Self {
        Self {
            customer_id: request.customer_id,
            products: request
                .products
                .into_iter()
                .map(|product| OrderProductDto {
                    id: product.id,
                    quantity: product.quantity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use application::transfer::CreateOrderDto;

    use crate::request::order::CreateOrderRequest;

    #[test]
    fn request_body_maps_to_dto() {
        let customer_id = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let body = format!(
            r#"{{"customer_id":"{customer_id}","products":[{{"id":"{product_id}","quantity":3}}]}}"#
        );

        let request = serde_json::from_str::<CreateOrderRequest>(&body).unwrap();
        let dto = CreateOrderDto::from(request);

        assert_eq!(dto.customer_id, customer_id);
        assert_eq!(dto.products.len(), 1);
        assert_eq!(dto.products[0].id, product_id);
        assert_eq!(dto.products[0].quantity, 3);
    }
}
