//! Payment handlers and the admin finance view.
//!
//! ```text
//! POST /api/payments {"studentId":3,"amount":4500.0,"dueDate":"2024-07-01"}
//! GET  /api/payments
//! GET  /api/student/payments
//! PUT  /api/payments/{id}/status {"status":"Paid"}
//! GET  /api/admin/finance
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Error, FinanceSummary, NewPayment, PaymentStatus, Role, StatusUpdate, UserId,
};

use super::ApiResult;
use super::authorize::Authorize;
use super::schemas::{MessageResponse, PaymentCreated, PaymentsResponse, StatusRequest};
use super::session::SessionContext;
use super::state::HttpState;

/// Payment record body. Status defaults to `Pending`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub student_id: UserId,
    #[schema(example = 4500.0)]
    pub amount: f64,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<PaymentStatus>,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

/// Record a payment owed by a student.
#[utoipa::path(
    post,
    path = "/api/payments",
    request_body = PaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentCreated),
        (status = 400, description = "Invalid amount or unknown student", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["payments"],
    operation_id = "createPayment"
)]
#[post("/payments", wrap = "Authorize::roles(&[Role::Admin])")]
pub async fn create_payment(
    state: web::Data<HttpState>,
    payload: web::Json<PaymentRequest>,
) -> ApiResult<HttpResponse> {
    let PaymentRequest {
        student_id,
        amount,
        due_date,
        status,
        transaction_id,
    } = payload.into_inner();
    let payment = NewPayment::try_new(student_id, amount, due_date, status, transaction_id)?;
    let payment = state.payments.create(payment).await?;
    Ok(HttpResponse::Created().json(PaymentCreated {
        message: "Payment recorded".to_owned(),
        payment,
    }))
}

/// Payments visible to the caller.
#[utoipa::path(
    get,
    path = "/api/payments",
    responses(
        (status = 200, description = "Own payments for students, all for staff", body = PaymentsResponse),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["payments"],
    operation_id = "listPayments"
)]
#[get("/payments", wrap = "Authorize::authenticated()")]
pub async fn list_payments(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<PaymentsResponse>> {
    let payments = state.payments_query.list(session.user()).await?;
    Ok(web::Json(PaymentsResponse { payments }))
}

/// The calling student's payments.
#[utoipa::path(
    get,
    path = "/api/student/payments",
    responses(
        (status = 200, description = "Own payments", body = PaymentsResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["payments"],
    operation_id = "listOwnPayments"
)]
#[get("/student/payments", wrap = "Authorize::roles(&[Role::Student])")]
pub async fn student_payments(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<PaymentsResponse>> {
    let payments = state.payments_query.list(session.user()).await?;
    Ok(web::Json(PaymentsResponse { payments }))
}

/// Set a payment's status. `Paid` stamps the paid date.
#[utoipa::path(
    put,
    path = "/api/payments/{id}/status",
    params(("id" = i32, Path, description = "Payment id")),
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Unknown payment", body = Error),
        (status = 500, description = "Status rejected by storage", body = Error)
    ),
    tags = ["payments"],
    operation_id = "updatePaymentStatus"
)]
#[put("/payments/{id}/status", wrap = "Authorize::roles(&[Role::Admin])")]
pub async fn update_payment_status(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    payload: web::Json<StatusRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    let update = StatusUpdate::new(path.into_inner(), payload.into_inner().status, session.id());
    state.payments.update_status(update).await?;
    Ok(web::Json(MessageResponse::new(
        "Payment status updated successfully",
    )))
}

/// Every payment with student names, plus revenue and pending totals.
#[utoipa::path(
    get,
    path = "/api/admin/finance",
    responses(
        (status = 200, description = "Finance view", body = FinanceSummary),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["payments"],
    operation_id = "financeSummary"
)]
#[get("/admin/finance", wrap = "Authorize::roles(&[Role::Admin])")]
pub async fn finance(state: web::Data<HttpState>) -> ApiResult<web::Json<FinanceSummary>> {
    Ok(web::Json(state.payments_query.finance().await?))
}
