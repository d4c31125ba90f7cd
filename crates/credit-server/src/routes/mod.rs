//! Credit API Routes
//!
//! - /api/customers - Customer management
//! - /api/credits - Credit applications

pub mod credits;
pub mod customers;
pub mod error;
pub mod swagger;

use axum::Router;

use crate::AppState;

/// All API routes
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(customers::router())
        .merge(credits::router())
}
