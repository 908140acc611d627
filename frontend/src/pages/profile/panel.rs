use super::{components::ProfileDetails, view_model::use_profile_view_model};
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use leptos::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let vm = use_profile_view_model();
    let page = vm.page;

    view! {
        <Layout>
            <div class="max-w-4xl mx-auto space-y-6">
                {move || page.error.get().map(|message| view! { <ErrorMessage message=message /> })}
                <Show
                    when=move || !page.loading.get()
                    fallback=|| view! {
                        <div class="bg-white rounded-lg shadow p-8">
                            <LoadingSpinner />
                            <p class="text-center text-gray-600">{"Loading profile..."}</p>
                        </div>
                    }
                >
                    <ProfileDetails user=vm.user />
                </Show>
                <div class="flex justify-center">
                    <a
                        href="/dashboard"
                        class="px-4 py-2 rounded-md text-sm font-semibold bg-blue-600 hover:bg-blue-700 text-white"
                    >
                        {"Back to Dashboard"}
                    </a>
                </div>
            </div>
        </Layout>
    }
}
