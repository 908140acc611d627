use crate::{pages::attendance::utils::PROCESSING, state::attendance::StatusView};
use leptos::{ev::MouseEvent, *};

#[component]
pub fn ActionCard(
    status: Signal<StatusView>,
    busy: Signal<bool>,
    on_tap: Callback<MouseEvent>,
) -> impl IntoView {
    let label = move || {
        if busy.get() {
            PROCESSING
        } else {
            status.get().action
        }
    };

    view! {
        <div class="bg-white overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6 space-y-4 text-center">
                <button
                    class=move || {
                        format!(
                            "w-full sm:w-auto px-8 py-3 rounded-md text-base font-semibold disabled:opacity-60 {}",
                            status.get().button_class()
                        )
                    }
                    disabled=move || busy.get() || !status.get().enabled
                    on:click=move |ev| on_tap.call(ev)
                >
                    {label}
                </button>
                <p class="text-sm text-gray-600">{move || status.get().hint()}</p>
                <div class="text-left text-sm text-gray-600">
                    <h4 class="font-medium text-gray-900">{"Instructions"}</h4>
                    <ul class="mt-2 list-disc list-inside space-y-1">
                        <li>{"Tap in when you start working from home."}</li>
                        <li>{"Tap out when you finish for the day."}</li>
                        <li>{"Attendance can be recorded once per day."}</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
