//! Credit Routes
//!
//! HTTP handlers that delegate to CreditService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::models::{CreditDto, CreditView, CreditViewList, CustomerIdQuery};
use crate::routes::error::{ApiError, ProblemDetails};
use crate::AppState;

/// Create new Credit
#[utoipa::path(
    post,
    path = "/api/credits",
    request_body = CreditDto,
    responses(
        (status = 201, description = "Credit created", body = CreditView),
        (status = 400, description = "Invalid application", body = ProblemDetails),
        (status = 404, description = "Customer not found", body = ProblemDetails)
    ),
    tag = "Credit"
)]
pub async fn save_credit(
    State(state): State<AppState>,
    Json(payload): Json<CreditDto>,
) -> Result<(StatusCode, Json<CreditView>), ApiError> {
    payload
        .validate(state.credit_service.policy(), state.clock.today())
        .map_err(ApiError::InvalidRequest)?;

    let credit = state.credit_service.save(payload.into()).await?;
    let owner = state.customer_service.find_by_id(credit.customer_id).await?;

    Ok((StatusCode::CREATED, Json(CreditView::new(credit, &owner))))
}

/// List Credits of a Customer
#[utoipa::path(
    get,
    path = "/api/credits",
    params(CustomerIdQuery),
    responses(
        (status = 200, description = "Credits of the customer (possibly empty)", body = Vec<CreditViewList>)
    ),
    tag = "Credit"
)]
pub async fn list_credits(
    State(state): State<AppState>,
    Query(query): Query<CustomerIdQuery>,
) -> Result<Json<Vec<CreditViewList>>, ApiError> {
    let credits = state
        .credit_service
        .find_all_by_customer(query.customer_id)
        .await?;

    Ok(Json(credits.into_iter().map(Into::into).collect()))
}

/// Get Credit by code
#[utoipa::path(
    get,
    path = "/api/credits/{credit_code}",
    params(
        ("credit_code" = Uuid, Path, description = "Credit code"),
        CustomerIdQuery
    ),
    responses(
        (status = 200, description = "Credit found", body = CreditView),
        (status = 400, description = "Credit belongs to another customer", body = ProblemDetails),
        (status = 404, description = "Credit not found", body = ProblemDetails)
    ),
    tag = "Credit"
)]
pub async fn find_credit(
    State(state): State<AppState>,
    Path(credit_code): Path<Uuid>,
    Query(query): Query<CustomerIdQuery>,
) -> Result<Json<CreditView>, ApiError> {
    let credit = state
        .credit_service
        .find_by_credit_code(query.customer_id, credit_code)
        .await?;
    let owner = state.customer_service.find_by_id(credit.customer_id).await?;

    Ok(Json(CreditView::new(credit, &owner)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/credits", get(list_credits).post(save_credit))
        .route("/api/credits/:credit_code", get(find_credit))
}
