use super::repository;
use super::utils::validate_credentials;
use crate::api::{ApiClient, ApiError, LoginRequest};
use crate::state::auth::{use_auth, AuthSession};
use crate::utils::navigation::DASHBOARD_ROUTE;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

/// Requests a token and signs the session in with it.
pub async fn perform_login(
    session: &AuthSession,
    api: &ApiClient,
    request: LoginRequest,
) -> Result<(), ApiError> {
    let token = repository::request_token(api, &request).await?;
    session.login(token).await;
    Ok(())
}

impl LoginViewModel {
    /// Validates the form and dispatches the login; returns whether a
    /// request was started.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        match validate_credentials(
            &self.form.email.get_untracked(),
            &self.form.password.get_untracked(),
        ) {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
                true
            }
            Err(err) => {
                self.error.set(Some(err));
                false
            }
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let session = use_auth();
    let api = session.auth_api().clone();
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);

    let session_for_action = session.clone();
    let login_action = create_action(move |request: &LoginRequest| {
        let session = session_for_action.clone();
        let api = api.clone();
        let request = request.clone();
        async move { perform_login(&session, &api, request).await }
    });

    create_effect(move |_| {
        if let Some(Err(err)) = login_action.value().get() {
            error.set(Some(err));
        }
    });

    // Covers both an already signed-in visitor and a completed login.
    let auth = session.state();
    create_effect(move |_| {
        if auth.get().is_authenticated() {
            session.navigate(DASHBOARD_ROUTE);
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
