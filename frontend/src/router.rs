use std::rc::Rc;

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClients,
    components::guard::RequireAuth,
    pages::{AttendancePage, AttendanceSummaryPage, DashboardPage, LoginPage, ProfilePage},
    state::auth::AuthProvider,
    utils::{
        navigation::{BrowserNavigator, Navigator, DASHBOARD_ROUTE, LOGIN_ROUTE},
        storage::SessionStorage,
    },
};

pub const ROOT_ROUTE: &str = "/";
pub const PROFILE_ROUTE: &str = "/profile";
pub const ATTENDANCE_ROUTE: &str = "/attendance";
pub const ATTENDANCE_SUMMARY_ROUTE: &str = "/attendance-summary";

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClients::new(SessionStorage::browser()));
    let navigator: Rc<dyn Navigator> = Rc::new(BrowserNavigator);
    provide_context(navigator);
    provide_meta_context();
    view! {
        <Title text="WFH Management"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=ROOT_ROUTE view=|| view! { <Redirect path=DASHBOARD_ROUTE/> }/>
                    <Route path=LOGIN_ROUTE view=LoginPage/>
                    <Route path=DASHBOARD_ROUTE view=ProtectedDashboard/>
                    <Route path=PROFILE_ROUTE view=ProtectedProfile/>
                    <Route path=ATTENDANCE_ROUTE view=ProtectedAttendance/>
                    <Route path=ATTENDANCE_SUMMARY_ROUTE view=ProtectedAttendanceSummary/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><ProfilePage/></RequireAuth> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <RequireAuth><AttendancePage/></RequireAuth> }
}

#[component]
fn ProtectedAttendanceSummary() -> impl IntoView {
    view! { <RequireAuth><AttendanceSummaryPage/></RequireAuth> }
}
