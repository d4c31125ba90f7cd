//! Customer Routes
//!
//! HTTP handlers that delegate to CustomerService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::models::{CustomerDto, CustomerIdQuery, CustomerUpdateDto, CustomerView};
use crate::routes::error::{ApiError, ProblemDetails};
use crate::AppState;

/// Create new Customer
#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CustomerDto,
    responses(
        (status = 201, description = "Customer created", body = String),
        (status = 400, description = "Invalid request", body = ProblemDetails),
        (status = 409, description = "Tax id already registered", body = ProblemDetails)
    ),
    tag = "Customer"
)]
pub async fn save_customer(
    State(state): State<AppState>,
    Json(payload): Json<CustomerDto>,
) -> Result<(StatusCode, String), ApiError> {
    payload.validate().map_err(ApiError::InvalidRequest)?;

    let customer = payload
        .into_entity()
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))?;
    let saved = state.customer_service.save(&customer).await?;

    Ok((
        StatusCode::CREATED,
        format!("Customer {} saved!", saved.email),
    ))
}

/// Get Customer by ID
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = CustomerView),
        (status = 404, description = "Customer not found", body = ProblemDetails)
    ),
    tag = "Customer"
)]
pub async fn find_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerView>, ApiError> {
    let customer = state.customer_service.find_by_id(id).await?;
    Ok(Json(customer.into()))
}

/// Delete Customer
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found", body = ProblemDetails)
    ),
    tag = "Customer"
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.customer_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Update Customer
#[utoipa::path(
    patch,
    path = "/api/customers",
    params(CustomerIdQuery),
    request_body = CustomerUpdateDto,
    responses(
        (status = 200, description = "Customer updated", body = CustomerView),
        (status = 400, description = "Invalid request", body = ProblemDetails),
        (status = 404, description = "Customer not found", body = ProblemDetails)
    ),
    tag = "Customer"
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Query(query): Query<CustomerIdQuery>,
    Json(payload): Json<CustomerUpdateDto>,
) -> Result<Json<CustomerView>, ApiError> {
    payload.validate().map_err(ApiError::InvalidRequest)?;

    let updated = state
        .customer_service
        .update(query.customer_id, payload.into())
        .await?;

    Ok(Json(updated.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/customers",
            post(save_customer).patch(update_customer),
        )
        .route(
            "/api/customers/:id",
            get(find_customer).delete(delete_customer),
        )
}
