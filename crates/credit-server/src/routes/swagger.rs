//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // Credit models
    CreditDto,
    CreditView,
    CreditViewList,
    // Customer models
    CustomerDto,
    CustomerUpdateDto,
    CustomerView,
};

use super::error::ProblemDetails;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Customer endpoints
        super::customers::save_customer,
        super::customers::find_customer,
        super::customers::delete_customer,
        super::customers::update_customer,
        // Credit endpoints
        super::credits::save_credit,
        super::credits::list_credits,
        super::credits::find_credit,
    ),
    info(
        title = "Credit Application System API",
        version = "0.1.0",
        description = "Customers and the credit applications they submit.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Customer", description = "Customer registration and maintenance"),
        (name = "Credit", description = "Credit applications"),
    ),
    components(
        schemas(
            // Customer
            CustomerDto,
            CustomerUpdateDto,
            CustomerView,
            // Credit
            CreditDto,
            CreditView,
            CreditViewList,
            // Errors
            ProblemDetails,
        )
    ),
)]
pub struct ApiDoc;
