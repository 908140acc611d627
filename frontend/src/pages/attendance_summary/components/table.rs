use crate::{
    api::AttendanceRecord,
    pages::attendance_summary::utils::{record_count_text, EMPTY_RESULT},
    state::attendance::{summary_badge_class, summary_status},
    utils::time::{display_short_date, display_time},
};
use leptos::*;

#[component]
pub fn RecordsTable(records: Signal<Vec<AttendanceRecord>>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow overflow-hidden">
            <div class="px-6 py-4 border-b border-gray-200">
                <h2 class="text-lg font-semibold text-gray-900">{"Attendance Records"}</h2>
                <p class="text-sm text-gray-600 mt-1">
                    {move || record_count_text(records.with(Vec::len))}
                </p>
            </div>
            <Show
                when=move || records.with(|r| !r.is_empty())
                fallback=|| view! {
                    <div class="p-8 text-center">
                        <div class="text-gray-500 text-lg mb-2">{EMPTY_RESULT}</div>
                        <p class="text-gray-400">{"for the selected date range"}</p>
                    </div>
                }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                {["No", "Date", "Tap In", "Tap Out", "Status"]
                                    .into_iter()
                                    .map(|heading| view! {
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                            {heading}
                                        </th>
                                    })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {move || records
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, record)| view! { <RecordRow index=index record=record /> })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn RecordRow(index: usize, record: AttendanceRecord) -> impl IntoView {
    let badge = format!(
        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
        summary_badge_class(&record)
    );
    view! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{index + 1}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                {display_short_date(record.tap_in.as_ref())}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                {display_time(record.tap_in.as_ref())}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                {display_time(record.tap_out.as_ref())}
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=badge>{summary_status(&record)}</span>
            </td>
        </tr>
    }
}
