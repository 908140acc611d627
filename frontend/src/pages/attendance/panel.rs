use super::{
    components::{ActionCard, StatusCard},
    layout::{AttendanceFrame, BackToDashboard},
    view_model::use_attendance_view_model,
};
use crate::{
    components::layout::ErrorMessage,
    utils::time::{format_long_date, today_in_display_tz},
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! { <AttendancePanel /> }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    let page = vm.page;
    let record = Signal::derive(move || page.record.get());
    let status = Signal::derive(move || page.status());
    let busy = Signal::derive(move || page.busy());
    let today = format_long_date(today_in_display_tz());

    view! {
        <AttendanceFrame>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{"Daily Attendance"}</h1>
                    <p class="mt-1 text-sm text-gray-600">{format!("Today's date: {}", today)}</p>
                </div>
                {move || page.error.get().map(|message| view! { <ErrorMessage message=message /> })}
                <StatusCard record=record status=status />
                <ActionCard status=status busy=busy on_tap=Callback::new(vm.on_tap()) />
                <BackToDashboard />
            </div>
        </AttendanceFrame>
    }
}
