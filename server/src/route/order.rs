use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use application::service::{GetOrderService, PlaceOrderService};
use application::transfer::GetOrderDto;

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::CreateOrderRequest;
use crate::response::{CreatedOrderResponse, OrderResponse};

pub trait OrderRouter {
    fn route_order(self) -> Self;
}

impl OrderRouter for Router<AppModule> {
    fn route_order(self) -> Self {
        self.route(
            "/orders",
            post(
                |State(handler): State<AppModule>, Json(req): Json<CreateOrderRequest>| async move {
                    handler
                        .pgpool()
                        .place_order(req.into())
                        .await
                        .map(CreatedOrderResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/orders/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    handler
                        .pgpool()
                        .get_order(GetOrderDto { id })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|order| {
                            order
                                .map(OrderResponse::from)
                                .map(IntoResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            ),
        )
    }
}
