use serde_json::Value;

use crate::api::{ApiClient, ApiEnvelope, ApiError, AttendanceRecord};

/// Today's record for `user_id`. A `success: false` envelope means "no record".
pub async fn fetch_today(
    api: &ApiClient,
    user_id: &str,
) -> Result<Option<AttendanceRecord>, ApiError> {
    let envelope = api.get_today_attendance(user_id).await?;
    Ok(if envelope.success { envelope.data } else { None })
}

pub async fn submit_tap(api: &ApiClient, user_id: &str) -> Result<ApiEnvelope<Value>, ApiError> {
    api.tap_in_tap_out(user_id).await
}
