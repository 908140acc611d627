use std::rc::Rc;

use leptos::*;
use log::{error, info, warn};

use crate::{
    api::{ApiClient, ApiClients, ApiError, User},
    utils::{
        navigation::{BrowserNavigator, Navigator, LOGIN_ROUTE},
        storage::SessionStorage,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unresolved,
    Authenticated,
    Anonymous,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
    pub phase: SessionPhase,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
            phase: SessionPhase::Unresolved,
        }
    }
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self {
            token: None,
            user: None,
            loading: false,
            phase: SessionPhase::Anonymous,
        }
    }

    pub fn authenticated(token: impl Into<String>, user: Option<User>) -> Self {
        Self {
            token: Some(token.into()),
            user,
            loading: false,
            phase: SessionPhase::Authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    pub fn user_id(&self) -> Option<String> {
        self.user
            .as_ref()
            .map(|user| user.id.clone())
            .filter(|id| !id.is_empty())
    }
}

/// Client-side session: token, cached user and the single place that reacts
/// to an unauthorized response.
#[derive(Clone)]
pub struct AuthSession {
    state: RwSignal<AuthState>,
    storage: SessionStorage,
    auth_api: ApiClient,
    navigator: Rc<dyn Navigator>,
}

impl AuthSession {
    pub fn new(auth_api: ApiClient, storage: SessionStorage, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            state: create_rw_signal(AuthState::default()),
            storage,
            auth_api,
            navigator,
        }
    }

    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.with_untracked(|state| state.user.clone())
    }

    pub fn user_id(&self) -> Option<String> {
        self.state.with_untracked(AuthState::user_id)
    }

    pub fn auth_api(&self) -> &ApiClient {
        &self.auth_api
    }

    pub fn navigate(&self, path: &str) {
        self.navigator.navigate(path);
    }

    #[cfg(test)]
    pub(crate) fn overwrite_state_for_test(&self, state: AuthState) {
        self.state.set(state);
    }

    /// Resolves the start-up session from the stored token.
    pub async fn bootstrap(&self) -> SessionPhase {
        let Some(token) = self.storage.token() else {
            info!("No stored token; starting anonymous");
            self.state.set(AuthState::anonymous());
            return SessionPhase::Anonymous;
        };

        match self.auth_api.check_token().await {
            Ok(user) => {
                self.persist_user(&user);
                self.state.set(AuthState::authenticated(token, Some(user)));
                info!("Stored token validated");
                SessionPhase::Authenticated
            }
            Err(err) => {
                warn!("Stored token rejected: {}", err);
                self.handle_api_error(&err);
                self.storage.clear();
                self.state.set(AuthState::anonymous());
                SessionPhase::Anonymous
            }
        }
    }

    /// Stores the token and marks the session authenticated, then fetches the
    /// profile. The session stays authenticated if that fetch fails.
    pub async fn login(&self, token: String) -> Option<User> {
        self.begin_login(&token);
        self.load_profile().await
    }

    fn begin_login(&self, token: &str) {
        if let Err(err) = self.storage.set_token(token) {
            warn!("Failed to persist token: {}", err);
        }
        self.state.update(|state| {
            state.token = Some(token.to_string());
            state.loading = false;
            state.phase = SessionPhase::Authenticated;
        });
    }

    /// Fetches the current user. Failure leaves the session authenticated
    /// without a user.
    pub async fn load_profile(&self) -> Option<User> {
        match self.auth_api.check_token().await {
            Ok(user) => {
                self.set_user(user.clone());
                Some(user)
            }
            Err(err) => {
                error!("Failed to fetch user data after login: {}", err);
                self.handle_api_error(&err);
                None
            }
        }
    }

    pub fn set_user(&self, user: User) {
        self.persist_user(&user);
        self.state.update(|state| state.user = Some(user));
    }

    fn persist_user(&self, user: &User) {
        if let Err(err) = self.storage.set_user(user) {
            warn!("Failed to cache user profile: {}", err);
        }
    }

    pub fn logout(&self) {
        self.storage.clear();
        self.state.set(AuthState::anonymous());
        info!("Logged out");
    }

    /// Top-level reaction to API errors. Only `UNAUTHORIZED` has an effect:
    /// the session is cleared and the browser is sent to the login route.
    pub fn handle_api_error(&self, err: &ApiError) {
        if !err.is_unauthorized() {
            return;
        }
        warn!("Unauthorized response; clearing session");
        self.storage.clear();
        self.state.set(AuthState::anonymous());
        self.navigator.navigate(LOGIN_ROUTE);
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let clients = use_context::<ApiClients>()
        .unwrap_or_else(|| ApiClients::new(SessionStorage::browser()));
    let navigator =
        use_context::<Rc<dyn Navigator>>().unwrap_or_else(|| Rc::new(BrowserNavigator));
    let session = AuthSession::new(
        clients.auth.clone(),
        clients.auth.storage().clone(),
        navigator,
    );
    provide_context(session.clone());
    spawn_local(async move {
        session.bootstrap().await;
    });
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthSession {
    use_context::<AuthSession>().unwrap_or_else(|| {
        let clients = use_context::<ApiClients>()
            .unwrap_or_else(|| ApiClients::new(SessionStorage::browser()));
        let session = AuthSession::new(
            clients.auth.clone(),
            clients.auth.storage().clone(),
            Rc::new(BrowserNavigator),
        );
        provide_context(session.clone());
        session
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_user;

    #[test]
    fn default_state_is_unresolved_and_loading() {
        let state = AuthState::default();
        assert_eq!(state.phase, SessionPhase::Unresolved);
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn user_id_requires_a_user() {
        assert!(AuthState::authenticated("t", None).user_id().is_none());
        let state = AuthState::authenticated("t", Some(sample_user()));
        assert_eq!(state.user_id().as_deref(), Some("u1"));
    }
}
