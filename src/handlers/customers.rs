//! Customer handlers: get by id, create.

use crate::error::{AppError, ErrorBody};
use crate::model::{Customer, CustomerRequest, CustomerResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetCustomerParams {
    /// Deprecated: accepted for older clients and ignored. The data-access path is
    /// fixed at startup by `CUSTOMERS_DATA_ACCESS`.
    #[serde(rename = "useAltPath")]
    pub use_alt_path: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(("id" = i64, Path, description = "Customer id"), GetCustomerParams),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "No customer with this id", body = ErrorBody)
    ),
    tag = "customers"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<GetCustomerParams>,
) -> Result<Json<Customer>, AppError> {
    if let Some(flag) = params.use_alt_path {
        tracing::debug!(use_alt_path = flag, "ignoring per-request data-access flag");
    }
    let customer = state
        .customers
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {}", id)))?;
    Ok(Json(customer))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Customer created", body = CustomerResponse),
        (status = 422, description = "Payload failed validation", body = ErrorBody)
    ),
    tag = "customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(body): Json<CustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    let id = state.customers.create(body.into()).await?;
    Ok(Json(CustomerResponse { id }))
}
