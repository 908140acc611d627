use crate::pages::dashboard::{components::MenuSection, layout::DashboardFrame, utils::greeting};
use crate::state::auth::use_auth;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth().state();
    let greeting_text = move || auth.with(|state| greeting(state.user.as_ref()));

    view! {
        <DashboardFrame>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{"Dashboard"}</h1>
                    <p class="mt-1 text-sm text-gray-600">
                        {"Welcome to your WFH Management System"}
                    </p>
                    {move || greeting_text().map(|text| view! {
                        <p class="mt-2 text-lg text-gray-800">{text}</p>
                    })}
                </div>
                <MenuSection />
            </div>
        </DashboardFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::TestHarness;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_renders_greeting_and_menu() {
        let html = render_to_string(move || {
            TestHarness::signed_in("http://unused.invalid").provide();
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Welcome to your WFH Management System"));
        assert!(html.contains("Hello, Jane Doe!"));
        assert!(html.contains("Employee Profile"));
        assert!(html.contains("href=\"/attendance-summary\""));
    }
}
