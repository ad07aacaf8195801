/**
 * Router Configuration
 *
 * Combines the API route table with the cross-cutting layers (CORS) and
 * binds the application state. Kept separate from `api_routes` so tests
 * can assemble the exact production router around a test state.
 */

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::api_routes::api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes and layers configured
pub fn create_router(app_state: AppState) -> Router<()> {
    api_routes(app_state.clone())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
