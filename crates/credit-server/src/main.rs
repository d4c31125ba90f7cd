use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod password;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{PgCreditRepository, PgCustomerRepository, SystemClock};
use application::{CreditService, CustomerService};
use config::ServerConfig;
use credit::{Clock, CreditRepository, CustomerRepository};

/// Type aliases for application services behind repository trait objects
pub type AppCustomerService = CustomerService<dyn CustomerRepository>;
pub type AppCreditService = CreditService<dyn CreditRepository, dyn CustomerRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<AppCustomerService>,
    pub credit_service: Arc<AppCreditService>,
    pub clock: Arc<dyn Clock>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Credit Application API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("💳 Credit API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key));
    let policy = config.credit_policy();
    tracing::info!(
        "📅 First installment window: {} month(s), {} upper bound; installments {}..={}",
        policy.first_installment.max_months_ahead,
        policy.first_installment.upper_bound,
        policy.min_installments,
        policy.max_installments
    );

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    // Initialize application services
    let customer_repo: Arc<dyn CustomerRepository> =
        Arc::new(PgCustomerRepository::new(pool.clone()));
    let credit_repo: Arc<dyn CreditRepository> = Arc::new(PgCreditRepository::new(pool));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let customer_service = Arc::new(CustomerService::new(customer_repo));
    let credit_service = Arc::new(CreditService::new(
        credit_repo,
        customer_service.clone(),
        clock.clone(),
        policy,
    ));

    // Create application state
    let state = AppState {
        customer_service,
        credit_service,
        clock,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::api_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Credit API ready");

    Ok(router.into())
}
