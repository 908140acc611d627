use chrono::NaiveDate;

use crate::api::{ApiClient, ApiEnvelope, ApiError, AttendanceRecord};

pub async fn fetch_summary(
    api: &ApiClient,
    user_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<ApiEnvelope<Vec<AttendanceRecord>>, ApiError> {
    api.get_attendance_summary(user_id, start, end).await
}
