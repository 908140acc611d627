use super::{
    components::{FilterSection, RecordsTable},
    view_model::use_summary_view_model,
};
use crate::components::layout::{ErrorMessage, Layout};
use leptos::*;

#[component]
pub fn AttendanceSummaryPage() -> impl IntoView {
    let vm = use_summary_view_model();
    let page = vm.page;
    let records = Signal::derive(move || page.records.get());
    let loading = Signal::derive(move || page.loading.get());

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-gray-900">{"Attendance Summary"}</h1>
                    <p class="mt-2 text-gray-600">{"View your attendance records by date range"}</p>
                </div>
                {move || page.error.get().map(|message| view! { <ErrorMessage message=message /> })}
                <FilterSection
                    start_input=page.form.start_date_signal()
                    end_input=page.form.end_date_signal()
                    loading=loading
                    on_filter=Callback::new(vm.on_filter())
                />
                <RecordsTable records=records />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::parse_timestamp;
    use crate::api::AttendanceRecord;
    use crate::pages::attendance_summary::view_model::SummaryViewModel;
    use crate::test_support::helpers::TestHarness;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_summary_shows_placeholder() {
        let html = render_to_string(move || {
            TestHarness::signed_in("http://unused.invalid").provide();
            view! { <AttendanceSummaryPage /> }
        });
        assert!(html.contains("Attendance Summary"));
        assert!(html.contains("No attendance records found"));
        assert!(html.contains("Showing 0 record(s) for the selected date range"));
    }

    #[test]
    fn records_render_as_numbered_rows() {
        let html = render_to_string(move || {
            TestHarness::signed_in("http://unused.invalid").provide();
            let vm = SummaryViewModel::new();
            vm.page.records.set(vec![
                AttendanceRecord {
                    id: "r1".into(),
                    tap_in: parse_timestamp("2024-01-02T09:00:00Z"),
                    tap_out: parse_timestamp("2024-01-02T17:00:00Z"),
                    updated_at: None,
                },
                AttendanceRecord {
                    id: "r2".into(),
                    tap_in: parse_timestamp("2024-01-03T09:00:00Z"),
                    tap_out: None,
                    updated_at: None,
                },
            ]);
            provide_context(vm);
            view! { <AttendanceSummaryPage /> }
        });
        assert!(html.contains("Showing 2 record(s) for the selected date range"));
        assert!(html.contains("Completed"));
        assert!(html.contains("Checked In Only"));
        assert!(!html.contains("No attendance records found"));
    }
}
