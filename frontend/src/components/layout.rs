use crate::{
    components::common::{Button, ButtonVariant},
    state::auth::use_auth,
    utils::navigation::LOGIN_ROUTE,
};
use leptos::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_auth();
    let on_logout = move |_| {
        session.logout();
        session.navigate(LOGIN_ROUTE);
    };
    view! {
        <nav class="bg-blue-600 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/dashboard" class="text-xl font-semibold text-white">
                        "WFH Management"
                    </a>
                    <Button variant=ButtonVariant::Secondary on:click=on_logout>
                        "Logout"
                    </Button>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Navbar/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::TestHarness;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn layout_renders_navbar_and_children() {
        let html = render_to_string(move || {
            TestHarness::signed_in("http://unused.invalid").provide();
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("WFH Management"));
        assert!(html.contains("Logout"));
        assert!(html.contains(ButtonVariant::Secondary.classes()));
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="Failed to load attendance data" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Failed to load attendance data"));
    }
}
