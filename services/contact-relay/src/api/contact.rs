//! `POST /api/contact`

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use folio_common::{ContactSubmission, RelayResponse};
use folio_telemetry::{SubmissionOutcome, record_submission};
use tracing::{error, warn};

use super::AppState;

/// 接收一次联系表单提交
///
/// - 200 `{success: true}`：邮件已交给服务商
/// - 400 `{success: false}`：请求体不是合法 JSON，或字段缺失/为空
/// - 500 `{success: false}`：渲染或发送失败，具体原因只写日志
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> (StatusCode, Json<RelayResponse>) {
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected contact payload");
            record_submission(SubmissionOutcome::Rejected);
            return (StatusCode::BAD_REQUEST, Json(RelayResponse::invalid()));
        }
    };

    let e = match state.relay.relay(&submission).await {
        Ok(()) => {
            record_submission(SubmissionOutcome::Sent);
            return (StatusCode::OK, Json(RelayResponse::sent()));
        }
        Err(e) => e,
    };

    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if e.is_validation() {
        warn!(error = %e, "Rejected contact submission");
        record_submission(SubmissionOutcome::Rejected);
        (status, Json(RelayResponse::invalid()))
    } else {
        error!(error = %e, "Error sending email");
        record_submission(SubmissionOutcome::Failed);
        (status, Json(RelayResponse::failed()))
    }
}
