use crate::{
    components::layout::LoadingSpinner, state::auth::use_auth, utils::navigation::LOGIN_ROUTE,
};
use leptos::*;

/// Renders children only for an authenticated session; sends anonymous
/// visitors to the login page once the session has resolved.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_auth();
    let auth = session.state();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated());
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        if should_redirect(is_authenticated.get(), is_loading.get()) {
            session.navigate(LOGIN_ROUTE);
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

fn should_redirect(is_authenticated: bool, is_loading: bool) -> bool {
    !is_authenticated && !is_loading
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireAuth;
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{sample_user, TestHarness};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    fn provide_state(state: AuthState) {
        let harness = TestHarness::new("http://unused.invalid", None);
        harness.session.overwrite_state_for_test(state);
        harness.provide();
    }

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_state(AuthState::authenticated("tok", Some(sample_user())));
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_anonymous() {
        let html = render_to_string(move || {
            provide_state(AuthState::anonymous());
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_loading_spinner_while_unresolved() {
        let html = render_to_string(move || {
            provide_state(AuthState::default());
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }
}
