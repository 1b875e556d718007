use crate::{
    abstract_trait::DynOrderService,
    domain::{
        requests::PlaceOrderRequest,
        responses::{ApiResponse, OrderPlacedResponse},
    },
    errors::HttpError,
    middleware::SimpleValidatedJson,
    state::AppState,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::post};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/order",
    tag = "Order",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Order placed, stock decremented", body = ApiResponse<OrderPlacedResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "A referenced product does not exist"),
        (status = 500, description = "Datastore error")
    )
)]
pub async fn place_order(
    Extension(service): Extension<DynOrderService>,
    SimpleValidatedJson(body): SimpleValidatedJson<PlaceOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.place_order(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

// Deliberately unauthenticated, matching the observed surface.
pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/order", post(place_order))
        .layer(Extension(app_state.di_container.order_service.clone()))
}
