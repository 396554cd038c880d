use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::order::{self, ORDER_TAG},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Storefront Order API"),
    tags((name = ORDER_TAG, description = "Order placement, lookup and lifecycle"))
)]
struct ApiDoc;

/// Builds the order API router with Swagger UI served at `/api/docs`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(order::create_order))
        .routes(routes!(order::get_order_info))
        .routes(routes!(order::get_user_orders))
        .routes(routes!(order::get_order_id))
        .routes(routes!(order::pay_order))
        .routes(routes!(order::consign_order))
        .routes(routes!(order::update_order_status))
        .with_state(state)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
