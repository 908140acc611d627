use crate::{
    api::AttendanceRecord,
    state::attendance::StatusView,
    utils::time::display_time,
};
use leptos::*;

#[component]
pub fn StatusCard(
    record: Signal<Option<AttendanceRecord>>,
    status: Signal<StatusView>,
) -> impl IntoView {
    let tap_in = move || record.with(|r| display_time(r.as_ref().and_then(|r| r.tap_in.as_ref())));
    let tap_out =
        move || record.with(|r| display_time(r.as_ref().and_then(|r| r.tap_out.as_ref())));
    let updated =
        move || record.with(|r| display_time(r.as_ref().and_then(|r| r.updated_at.as_ref())));

    view! {
        <div class="bg-white overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h3 class="text-lg leading-6 font-medium text-gray-900">{"Today's Status"}</h3>
                    <span class=move || {
                        format!(
                            "px-3 py-1 rounded-full text-sm font-medium {}",
                            status.get().badge_class()
                        )
                    }>
                        {move || status.get().label}
                    </span>
                </div>
                <dl class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <div>
                        <dt class="text-sm font-medium text-gray-500">{"Tap In"}</dt>
                        <dd class="mt-1 text-sm text-gray-900">{tap_in}</dd>
                    </div>
                    <div>
                        <dt class="text-sm font-medium text-gray-500">{"Tap Out"}</dt>
                        <dd class="mt-1 text-sm text-gray-900">{tap_out}</dd>
                    </div>
                    <div>
                        <dt class="text-sm font-medium text-gray-500">{"Last Updated"}</dt>
                        <dd class="mt-1 text-sm text-gray-900">{updated}</dd>
                    </div>
                </dl>
            </div>
        </div>
    }
}
