use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AttendanceFrame(children: Children) -> impl IntoView {
    view! { <Layout>{children()}</Layout> }
}

#[component]
pub fn BackToDashboard() -> impl IntoView {
    view! {
        <a href="/dashboard" class="inline-flex items-center text-sm text-blue-600 hover:text-blue-800">
            {"← Back to Dashboard"}
        </a>
    }
}
