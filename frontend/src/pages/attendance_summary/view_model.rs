use super::{
    repository,
    utils::{SummaryFormState, LOAD_FAILED},
};
use crate::api::{ApiClient, ApiClients, AttendanceRecord};
use crate::state::auth::{use_auth, AuthSession};
use crate::utils::time::today_in_display_tz;
use chrono::NaiveDate;
use leptos::*;
use log::{debug, error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub token: u32,
}

#[derive(Clone, Copy)]
pub struct SummaryPageState {
    pub form: SummaryFormState,
    pub records: RwSignal<Vec<AttendanceRecord>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    latest_token: RwSignal<u32>,
}

impl SummaryPageState {
    pub fn new() -> Self {
        Self {
            form: SummaryFormState::new(),
            records: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            latest_token: create_rw_signal(0),
        }
    }

    /// Resolves the inputs into a new query that supersedes any in flight.
    pub fn next_query(&self, today: NaiveDate) -> SummaryQuery {
        let (start, end) = self.form.resolve(today);
        let token = self.latest_token.get_untracked().wrapping_add(1);
        self.latest_token.set(token);
        SummaryQuery { start, end, token }
    }

    fn is_current(&self, query: &SummaryQuery) -> bool {
        self.latest_token.get_untracked() == query.token
    }
}

impl Default for SummaryPageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches records for `query`. Results of a superseded query are dropped.
pub async fn load_summary(
    session: &AuthSession,
    api: &ApiClient,
    page: SummaryPageState,
    query: SummaryQuery,
) {
    let Some(user_id) = session.user_id() else {
        return;
    };
    page.loading.set(true);
    page.error.set(None);
    let result = repository::fetch_summary(api, &user_id, query.start, query.end).await;
    if !page.is_current(&query) {
        debug!("Discarding stale summary response (token {})", query.token);
        return;
    }
    match result {
        Ok(envelope) if envelope.success => {
            page.records.set(envelope.data.unwrap_or_default());
        }
        Ok(envelope) => {
            error!(
                "Summary request rejected: {}",
                envelope.message.unwrap_or_default()
            );
            page.records.set(Vec::new());
            page.error.set(Some(LOAD_FAILED.to_string()));
        }
        Err(err) => {
            error!("Failed to load attendance summary: {}", err);
            session.handle_api_error(&err);
            page.records.set(Vec::new());
            page.error.set(Some(LOAD_FAILED.to_string()));
        }
    }
    page.loading.set(false);
}

#[derive(Clone)]
pub struct SummaryViewModel {
    pub page: SummaryPageState,
    pub query: RwSignal<SummaryQuery>,
    pub summary_resource: Resource<(Option<String>, SummaryQuery), ()>,
}

impl SummaryViewModel {
    pub fn new() -> Self {
        let session = use_auth();
        let api = use_context::<ApiClients>()
            .map(|clients| clients.attendance)
            .unwrap_or_else(|| {
                ApiClients::new(session.auth_api().storage().clone()).attendance
            });
        let page = SummaryPageState::new();
        let query = create_rw_signal(page.next_query(today_in_display_tz()));
        let auth = session.state();

        let summary_resource = create_resource(
            move || (auth.with(|state| state.user_id()), query.get()),
            move |(_, current)| {
                let session = session.clone();
                let api = api.clone();
                async move { load_summary(&session, &api, page, current).await }
            },
        );

        Self {
            page,
            query,
            summary_resource,
        }
    }

    pub fn on_filter(&self) -> impl Fn(ev::MouseEvent) {
        let page = self.page;
        let query = self.query;
        move |_| query.set(page.next_query(today_in_display_tz()))
    }
}

pub fn use_summary_view_model() -> SummaryViewModel {
    match use_context::<SummaryViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = SummaryViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
