use super::{
    repository,
    utils::{classify_tap, TapOutcome, LOAD_FAILED, TAP_FAILED},
};
use crate::api::{ApiClient, ApiClients, AttendanceRecord};
use crate::state::{
    attendance::{resolve_status, StatusView},
    auth::{use_auth, AuthSession},
};
use leptos::*;
use log::error;

#[derive(Clone, Copy)]
pub struct AttendancePageState {
    pub record: RwSignal<Option<AttendanceRecord>>,
    pub loading: RwSignal<bool>,
    pub processing: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl AttendancePageState {
    pub fn new() -> Self {
        Self {
            record: create_rw_signal(None),
            loading: create_rw_signal(false),
            processing: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }

    pub fn status(&self) -> StatusView {
        self.record.with(|record| resolve_status(record.as_ref()))
    }

    pub fn busy(&self) -> bool {
        self.processing.get() || self.loading.get()
    }
}

impl Default for AttendancePageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads today's record into `page`. Does nothing until the session knows
/// the user id.
pub async fn refresh_today(session: &AuthSession, api: &ApiClient, page: AttendancePageState) {
    let Some(user_id) = session.user_id() else {
        return;
    };
    page.loading.set(true);
    page.error.set(None);
    match repository::fetch_today(api, &user_id).await {
        Ok(record) => page.record.set(record),
        Err(err) => {
            error!("Failed to load today's attendance: {}", err);
            session.handle_api_error(&err);
            page.record.set(None);
            page.error.set(Some(LOAD_FAILED.to_string()));
        }
    }
    page.loading.set(false);
}

/// Taps in or out; the backend decides which.
pub async fn tap(session: &AuthSession, api: &ApiClient, page: AttendancePageState) {
    let Some(user_id) = session.user_id() else {
        return;
    };
    page.processing.set(true);
    page.error.set(None);
    match repository::submit_tap(api, &user_id).await {
        Ok(envelope) => match classify_tap(&envelope) {
            TapOutcome::Refetch { notice } => {
                refresh_today(session, api, page).await;
                if notice.is_some() {
                    page.error.set(notice);
                }
            }
            TapOutcome::Rejected(message) => page.error.set(Some(message)),
        },
        Err(err) => {
            error!("Tap request failed: {}", err);
            session.handle_api_error(&err);
            page.error.set(Some(TAP_FAILED.to_string()));
        }
    }
    page.processing.set(false);
}

#[derive(Clone)]
pub struct AttendanceViewModel {
    pub page: AttendancePageState,
    pub today_resource: Resource<Option<String>, ()>,
    pub tap_action: Action<(), ()>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let session = use_auth();
        let api = use_context::<ApiClients>()
            .map(|clients| clients.attendance)
            .unwrap_or_else(|| {
                ApiClients::new(session.auth_api().storage().clone()).attendance
            });
        let page = AttendancePageState::new();
        let auth = session.state();

        let session_for_fetch = session.clone();
        let api_for_fetch = api.clone();
        let today_resource = create_resource(
            move || auth.with(|state| state.user_id()),
            move |_| {
                let session = session_for_fetch.clone();
                let api = api_for_fetch.clone();
                async move { refresh_today(&session, &api, page).await }
            },
        );

        let tap_action = create_action(move |_: &()| {
            let session = session.clone();
            let api = api.clone();
            async move { tap(&session, &api, page).await }
        });

        Self {
            page,
            today_resource,
            tap_action,
        }
    }

    pub fn on_tap(&self) -> impl Fn(ev::MouseEvent) {
        let page = self.page;
        let tap_action = self.tap_action;
        move |_| {
            if page.busy() || !page.status().enabled {
                return;
            }
            tap_action.dispatch(());
        }
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ALREADY_COMPLETED_MESSAGE;
    use crate::state::attendance::AttendanceStatus;
    use crate::test_support::helpers::{record_json, TestHarness};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn unauthorized_fetch_clears_session_and_redirects() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/attendance/today");
                then.status(401).json_body(json!({ "message": "jwt expired" }));
            })
            .await;

        let harness = TestHarness::signed_in(&server.base_url());
        let page = AttendancePageState::new();
        refresh_today(&harness.session, &harness.api.attendance, page).await;

        assert!(harness.memory.is_empty());
        assert_eq!(harness.navigator.visited(), vec!["/login"]);
        assert!(!harness.session.snapshot().is_authenticated());
        assert!(page.record.get_untracked().is_none());
        assert!(!page.loading.get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn checked_in_record_resolves_to_tap_out() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/attendance/today")
                    .query_param("user_id", "u1");
                then.status(200).json_body(json!({
                    "success": true,
                    "data": record_json("r1", Some("2024-01-01T09:00:00Z"), None)
                }));
            })
            .await;

        let harness = TestHarness::signed_in(&server.base_url());
        let page = AttendancePageState::new();
        refresh_today(&harness.session, &harness.api.attendance, page).await;

        let status = page.status();
        assert_eq!(status.status, AttendanceStatus::CheckedIn);
        assert_eq!(status.label, "Checked In");
        assert_eq!(status.action, "Tap Out");
        assert!(status.enabled);
        assert!(page.error.get_untracked().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn unsuccessful_fetch_clears_record_without_error() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/attendance/today");
                then.status(200)
                    .json_body(json!({ "success": false, "message": "No record" }));
            })
            .await;

        let harness = TestHarness::signed_in(&server.base_url());
        let page = AttendancePageState::new();
        refresh_today(&harness.session, &harness.api.attendance, page).await;

        assert!(page.record.get_untracked().is_none());
        assert!(page.error.get_untracked().is_none());
        assert_eq!(page.status().action, "Tap In");
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_fetch_shows_load_error() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/attendance/today");
                then.status(500);
            })
            .await;

        let harness = TestHarness::signed_in(&server.base_url());
        let page = AttendancePageState::new();
        refresh_today(&harness.session, &harness.api.attendance, page).await;

        assert_eq!(page.error.get_untracked().as_deref(), Some(LOAD_FAILED));
        assert!(harness.navigator.visited().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn successful_reload_clears_earlier_load_error() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let failing = server
            .mock_async(|when, then| {
                when.method(GET).path("/attendance/today");
                then.status(500);
            })
            .await;

        let harness = TestHarness::signed_in(&server.base_url());
        let page = AttendancePageState::new();
        refresh_today(&harness.session, &harness.api.attendance, page).await;
        assert_eq!(page.error.get_untracked().as_deref(), Some(LOAD_FAILED));

        failing.delete_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/attendance/today");
                then.status(200).json_body(json!({
                    "success": true,
                    "data": record_json("r1", Some("2024-01-01T09:00:00Z"), None)
                }));
            })
            .await;
        refresh_today(&harness.session, &harness.api.attendance, page).await;

        assert!(page.record.get_untracked().is_some());
        assert!(page.error.get_untracked().is_none());
        assert_eq!(page.status().status, AttendanceStatus::CheckedIn);
        runtime.dispose();
    }

    #[tokio::test]
    async fn already_completed_tap_keeps_message_after_refetch() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let tap_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/attendance/absence")
                    .json_body(json!({ "user_id": "u1" }));
                then.status(400).json_body(json!({
                    "success": false,
                    "statusCode": 400,
                    "message": ALREADY_COMPLETED_MESSAGE
                }));
            })
            .await;
        let today_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/attendance/today");
                then.status(200).json_body(json!({
                    "success": true,
                    "data": record_json(
                        "r1",
                        Some("2024-01-01T09:00:00Z"),
                        Some("2024-01-01T17:00:00Z")
                    )
                }));
            })
            .await;

        let harness = TestHarness::signed_in(&server.base_url());
        let page = AttendancePageState::new();
        tap(&harness.session, &harness.api.attendance, page).await;

        tap_mock.assert_async().await;
        today_mock.assert_async().await;
        assert_eq!(
            page.error.get_untracked().as_deref(),
            Some(ALREADY_COMPLETED_MESSAGE)
        );
        assert_eq!(page.status().status, AttendanceStatus::Completed);
        assert!(!page.status().enabled);
        assert!(!page.processing.get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn successful_tap_refetches_record() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/attendance/absence");
                then.status(200)
                    .json_body(json!({ "success": true, "statusCode": 200, "message": "ok" }));
            })
            .await;
        let today_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/attendance/today");
                then.status(200).json_body(json!({
                    "success": true,
                    "data": record_json("r1", Some("2024-01-01T09:00:00Z"), None)
                }));
            })
            .await;

        let harness = TestHarness::signed_in(&server.base_url());
        let page = AttendancePageState::new();
        tap(&harness.session, &harness.api.attendance, page).await;

        assert_eq!(today_mock.hits_async().await, 1);
        assert!(page.error.get_untracked().is_none());
        assert_eq!(page.status().status, AttendanceStatus::CheckedIn);
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_tap_shows_message_without_refetch() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/attendance/absence");
                then.status(200)
                    .json_body(json!({ "success": false, "message": "Outside working hours" }));
            })
            .await;
        let today_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/attendance/today");
                then.status(200).json_body(json!({ "success": true, "data": null }));
            })
            .await;

        let harness = TestHarness::signed_in(&server.base_url());
        let page = AttendancePageState::new();
        tap(&harness.session, &harness.api.attendance, page).await;

        assert_eq!(
            page.error.get_untracked().as_deref(),
            Some("Outside working hours")
        );
        assert_eq!(today_mock.hits_async().await, 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn transport_failure_on_tap_keeps_record() {
        let runtime = create_runtime();
        // Nothing listens on the discard port.
        let harness = TestHarness::signed_in("http://127.0.0.1:9");
        let page = AttendancePageState::new();
        let existing: AttendanceRecord = serde_json::from_value(record_json(
            "r1",
            Some("2024-01-01T09:00:00Z"),
            None,
        ))
        .unwrap();
        page.record.set(Some(existing.clone()));

        tap(&harness.session, &harness.api.attendance, page).await;

        assert_eq!(page.error.get_untracked().as_deref(), Some(TAP_FAILED));
        assert_eq!(page.record.get_untracked(), Some(existing));
        runtime.dispose();
    }

    #[tokio::test]
    async fn missing_user_id_is_a_silent_no_op() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let tap_mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/attendance/absence");
                then.status(200).json_body(json!({ "success": true }));
            })
            .await;

        let harness = TestHarness::new(&server.base_url(), Some("tok"));
        let page = AttendancePageState::new();
        tap(&harness.session, &harness.api.attendance, page).await;
        refresh_today(&harness.session, &harness.api.attendance, page).await;

        assert_eq!(tap_mock.hits_async().await, 0);
        assert!(page.error.get_untracked().is_none());
        assert!(!page.processing.get_untracked());
        runtime.dispose();
    }
}
