use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::application::LedgerService;
use crate::domain::cents_to_units;

use super::dto::{
    AmountRequest, BalanceResponse, CreateAccountRequest, ErrorResponse, MessageResponse,
    TransactionResponse,
};
use super::error::ApiError;

type ApiResult<T> = Result<T, ApiError>;

/// `POST /accounts`
pub async fn create_account(
    State(service): State<Arc<LedgerService>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(req) = payload?;
    service
        .create_account(req.account_id_str(), req.balance.as_ref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Account created successfully".to_string(),
        }),
    ))
}

/// `GET /accounts/:account_id`
pub async fn get_balance(
    State(service): State<Arc<LedgerService>>,
    Path(account_id): Path<String>,
) -> ApiResult<Json<BalanceResponse>> {
    let balance = service.get_balance(&account_id).await?;
    Ok(Json(BalanceResponse {
        balance: cents_to_units(balance),
    }))
}

/// `POST /accounts/:account_id/deposit`
pub async fn deposit(
    State(service): State<Arc<LedgerService>>,
    Path(account_id): Path<String>,
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> ApiResult<Json<TransactionResponse>> {
    let req = amount_request(&service, &account_id, payload).await?;
    let balance = service.deposit(&account_id, req.amount.as_ref()).await?;
    Ok(Json(TransactionResponse {
        message: "Deposit successful".to_string(),
        balance: cents_to_units(balance),
    }))
}

/// `POST /accounts/:account_id/withdraw`
pub async fn withdraw(
    State(service): State<Arc<LedgerService>>,
    Path(account_id): Path<String>,
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> ApiResult<Json<TransactionResponse>> {
    let req = amount_request(&service, &account_id, payload).await?;
    let balance = service.withdraw(&account_id, req.amount.as_ref()).await?;
    Ok(Json(TransactionResponse {
        message: "Withdrawal successful".to_string(),
        balance: cents_to_units(balance),
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}

/// Fallback for known routes hit with the wrong method.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
}

// An unknown account answers 404 before the body is looked at. Accounts are
// never deleted, so the existence check cannot go stale.
async fn amount_request(
    service: &LedgerService,
    account_id: &str,
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> ApiResult<AmountRequest> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            service.get_balance(account_id).await?;
            Err(rejection.into())
        }
    }
}
