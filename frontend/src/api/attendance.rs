use chrono::NaiveDate;
use serde_json::Value;

use super::{
    client::{build_query, encode_component, ApiClient},
    types::{ApiEnvelope, ApiError, AttendanceRecord, TapRequest},
};
use crate::utils::time::format_input_date;

impl ApiClient {
    pub async fn get_today_attendance(
        &self,
        user_id: &str,
    ) -> Result<ApiEnvelope<AttendanceRecord>, ApiError> {
        let url = format!(
            "/attendance/today?{}",
            build_query(&[("user_id", user_id)])
        );
        self.get_json(&url).await
    }

    /// The backend decides whether this is a tap in or a tap out.
    pub async fn tap_in_tap_out(&self, user_id: &str) -> Result<ApiEnvelope<Value>, ApiError> {
        let request = TapRequest {
            user_id: user_id.to_string(),
        };
        self.post_envelope("/attendance/absence", &request).await
    }

    pub async fn get_attendance_summary(
        &self,
        user_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<ApiEnvelope<Vec<AttendanceRecord>>, ApiError> {
        let start = format_input_date(start_date);
        let end = format_input_date(end_date);
        let url = format!(
            "/attendance/user/{}?{}",
            encode_component(user_id),
            build_query(&[("start_date", &start), ("end_date", &end)])
        );
        self.get_json(&url).await
    }
}
