use crate::components::common::Button;
use leptos::{ev::MouseEvent, *};

#[component]
pub fn FilterSection(
    start_input: RwSignal<String>,
    end_input: RwSignal<String>,
    loading: Signal<bool>,
    on_filter: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Filter by Date Range"}</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end">
                <div>
                    <label for="start-date" class="block text-sm font-medium text-gray-700 mb-1">
                        {"Start Date"}
                    </label>
                    <input
                        id="start-date"
                        type="date"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        prop:value=move || start_input.get()
                        on:input=move |ev| start_input.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="end-date" class="block text-sm font-medium text-gray-700 mb-1">
                        {"End Date"}
                    </label>
                    <input
                        id="end-date"
                        type="date"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        prop:value=move || end_input.get()
                        on:input=move |ev| end_input.set(event_target_value(&ev))
                    />
                </div>
                <Button class="w-full" loading=loading on:click=move |ev| on_filter.call(ev)>
                    {move || if loading.get() { "Loading..." } else { "Filter" }}
                </Button>
            </div>
        </div>
    }
}
