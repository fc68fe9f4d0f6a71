//! Roll-call handlers.
//!
//! ```text
//! POST /api/warden/attendance {"date":"2024-06-01","records":[{"studentId":3,"status":"Present"}]}
//! GET  /api/warden/attendance?date=2024-06-01
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::validation::FieldError;
use crate::domain::{AttendanceRecord, Error, NewAttendanceSheet, Role, STAFF};

use super::ApiResult;
use super::authorize::Authorize;
use super::schemas::{AttendanceCreated, AttendanceResponse};
use super::session::SessionContext;
use super::state::HttpState;

/// Attendance sheet body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub hostel_id: Option<i32>,
    pub records: Vec<AttendanceRecord>,
}

/// Query string for reading a day's sheets.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AttendanceParams {
    /// Calendar date as `YYYY-MM-DD`.
    #[param(example = "2024-06-01")]
    pub date: Option<String>,
}

impl AttendanceParams {
    // Parsed here so a bad date gets the JSON envelope instead of the
    // extractor's plain-text rejection.
    fn date(&self) -> Result<NaiveDate, FieldError> {
        let raw = self
            .date
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or(FieldError::empty("date"))?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| FieldError::invalid("date", "must be a YYYY-MM-DD date"))
    }
}

/// Record the marks for one day.
#[utoipa::path(
    post,
    path = "/api/warden/attendance",
    request_body = AttendanceRequest,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceCreated),
        (status = 400, description = "No records, duplicate students or unknown student", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["attendance"],
    operation_id = "recordAttendance"
)]
#[post("/warden/attendance", wrap = "Authorize::roles(&[Role::Warden])")]
pub async fn record_attendance(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<AttendanceRequest>,
) -> ApiResult<HttpResponse> {
    let AttendanceRequest {
        date,
        hostel_id,
        records,
    } = payload.into_inner();
    let sheet = NewAttendanceSheet::try_new(date, hostel_id, session.id(), records)?;
    let attendance = state.attendance.record(sheet).await?;
    Ok(HttpResponse::Created().json(AttendanceCreated {
        message: "Attendance recorded".to_owned(),
        attendance,
    }))
}

/// Sheets recorded for a date.
#[utoipa::path(
    get,
    path = "/api/warden/attendance",
    params(AttendanceParams),
    responses(
        (status = 200, description = "Sheets for the date", body = AttendanceResponse),
        (status = 400, description = "Missing or malformed date", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["attendance"],
    operation_id = "attendanceForDate"
)]
#[get("/warden/attendance", wrap = "Authorize::roles(STAFF)")]
pub async fn attendance_for_date(
    state: web::Data<HttpState>,
    params: web::Query<AttendanceParams>,
) -> ApiResult<web::Json<AttendanceResponse>> {
    let date = params.date()?;
    let attendance = state.attendance_query.for_date(date).await?;
    Ok(web::Json(AttendanceResponse { attendance }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockAttendanceCommand, MockAttendanceQuery};
    use crate::domain::{AttendanceMark, AttendanceSheet, UserId};
    use crate::inbound::http::test_utils::{call_api, role_cookie, unused_ports};
    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, read_body_json};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn register(cfg: &mut web::ServiceConfig) {
        cfg.service(record_attendance).service(attendance_for_date);
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    }

    fn sheet() -> AttendanceSheet {
        AttendanceSheet {
            id: 9,
            date: day(),
            hostel_id: None,
            marked_by: UserId::new(2),
            records: vec![AttendanceRecord {
                student_id: UserId::new(3),
                status: AttendanceMark::OnLeave,
                time: None,
            }],
        }
    }

    #[rstest]
    #[case(None, "date")]
    #[case(Some("yesterday"), "date")]
    #[case(Some("  "), "date")]
    fn params_require_an_iso_date(#[case] raw: Option<&str>, #[case] field: &str) {
        let params = AttendanceParams {
            date: raw.map(str::to_owned),
        };
        let err = params.date().expect_err("date should be rejected");
        assert_eq!(err.field(), field);
    }

    #[actix_web::test]
    async fn warden_records_sheet() {
        let mut commands = MockAttendanceCommand::new();
        commands
            .expect_record()
            .withf(|sheet| sheet.marked_by() == UserId::new(2) && sheet.records().len() == 1)
            .times(1)
            .returning(|_| Ok(sheet()));
        let mut ports = unused_ports();
        ports.attendance = Arc::new(commands);

        let res = call_api(
            ports,
            register,
            TestRequest::post()
                .uri("/api/warden/attendance")
                .cookie(role_cookie(Role::Warden))
                .set_json(json!({
                    "date": "2024-06-01",
                    "records": [{ "studentId": 3, "status": "Leave" }],
                })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = read_body_json(res).await;
        assert_eq!(body["message"], "Attendance recorded");
        assert_eq!(body["attendance"]["records"][0]["status"], "Leave");
    }

    #[actix_web::test]
    async fn duplicate_students_are_rejected() {
        let res = call_api(
            unused_ports(),
            register,
            TestRequest::post()
                .uri("/api/warden/attendance")
                .cookie(role_cookie(Role::Warden))
                .set_json(json!({
                    "date": "2024-06-01",
                    "records": [
                        { "studentId": 3, "status": "Present" },
                        { "studentId": 3, "status": "Absent" },
                    ],
                })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = read_body_json(res).await;
        assert_eq!(body["details"]["field"], "records");
    }

    #[actix_web::test]
    async fn admins_cannot_record() {
        let res = call_api(
            unused_ports(),
            register,
            TestRequest::post()
                .uri("/api/warden/attendance")
                .cookie(role_cookie(Role::Admin))
                .set_json(json!({ "date": "2024-06-01", "records": [] })),
        )
        .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[rstest]
    #[case(Role::Warden)]
    #[case(Role::Admin)]
    #[actix_web::test]
    async fn staff_read_sheets_by_date(#[case] role: Role) {
        let mut query = MockAttendanceQuery::new();
        query
            .expect_for_date()
            .withf(|date| *date == day())
            .returning(|_| Ok(vec![sheet()]));
        let mut ports = unused_ports();
        ports.attendance_query = Arc::new(query);

        let res = call_api(
            ports,
            register,
            TestRequest::get()
                .uri("/api/warden/attendance?date=2024-06-01")
                .cookie(role_cookie(role)),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = read_body_json(res).await;
        assert_eq!(body["attendance"][0]["id"], 9);
    }

    #[actix_web::test]
    async fn malformed_date_uses_error_envelope() {
        let res = call_api(
            unused_ports(),
            register,
            TestRequest::get()
                .uri("/api/warden/attendance?date=06-01-2024")
                .cookie(role_cookie(Role::Warden)),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = read_body_json(res).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], "date");
    }
}
