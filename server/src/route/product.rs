use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use application::service::CreateProductService;

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::CreateProductRequest;
use crate::response::CreatedProductResponse;

pub trait ProductRouter {
    fn route_product(self) -> Self;
}

impl ProductRouter for Router<AppModule> {
    fn route_product(self) -> Self {
        self.route(
            "/products",
            post(
                |State(handler): State<AppModule>,
                 Json(req): Json<CreateProductRequest>| async move {
                    handler
                        .pgpool()
                        .create_product(req.into())
                        .await
                        .map(CreatedProductResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
