use super::{repository, utils::LOAD_FAILED};
use crate::api::User;
use crate::state::auth::{use_auth, AuthSession};
use leptos::*;
use log::error;

#[derive(Clone, Copy)]
pub struct ProfilePageState {
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ProfilePageState {
    pub fn new() -> Self {
        Self {
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }
}

impl Default for ProfilePageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Makes sure the session holds the current user, fetching it when the
/// cache is empty.
pub async fn ensure_profile(session: &AuthSession, page: ProfilePageState) -> Option<User> {
    if let Some(user) = session.current_user() {
        return Some(user);
    }
    page.loading.set(true);
    let result = repository::fetch_current_user(session.auth_api()).await;
    page.loading.set(false);
    match result {
        Ok(user) => {
            session.set_user(user.clone());
            Some(user)
        }
        Err(err) => {
            error!("Failed to load profile: {}", err);
            session.handle_api_error(&err);
            page.error.set(Some(LOAD_FAILED.to_string()));
            None
        }
    }
}

#[derive(Clone)]
pub struct ProfileViewModel {
    pub page: ProfilePageState,
    pub user: Signal<Option<User>>,
    pub profile_resource: Resource<bool, ()>,
}

impl ProfileViewModel {
    pub fn new() -> Self {
        let session = use_auth();
        let auth = session.state();
        let page = ProfilePageState::new();
        let user = Signal::derive(move || auth.with(|state| state.user.clone()));

        let profile_resource = create_resource(
            move || auth.with(|state| state.is_authenticated()),
            move |authenticated| {
                let session = session.clone();
                async move {
                    if authenticated {
                        ensure_profile(&session, page).await;
                    }
                }
            },
        );

        Self {
            page,
            user,
            profile_resource,
        }
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    match use_context::<ProfileViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ProfileViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
