use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use application::service::CreateCustomerService;

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::CreateCustomerRequest;
use crate::response::CreatedCustomerResponse;

pub trait CustomerRouter {
    fn route_customer(self) -> Self;
}

impl CustomerRouter for Router<AppModule> {
    fn route_customer(self) -> Self {
        self.route(
            "/customers",
            post(
                |State(handler): State<AppModule>,
                 Json(req): Json<CreateCustomerRequest>| async move {
                    handler
                        .pgpool()
                        .create_customer(req.into())
                        .await
                        .map(CreatedCustomerResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
