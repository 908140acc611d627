use crate::api::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const MENU_ITEMS: [MenuItem; 3] = [
    MenuItem {
        title: "Employee Profile",
        description: "View your personal and employment details",
        href: "/profile",
    },
    MenuItem {
        title: "Attendance",
        description: "Tap in and tap out for today",
        href: "/attendance",
    },
    MenuItem {
        title: "Attendance Summary",
        description: "Review your attendance over a date range",
        href: "/attendance-summary",
    },
];

pub fn greeting(user: Option<&User>) -> Option<String> {
    let name = user?.fullname.as_deref()?.trim();
    if name.is_empty() {
        None
    } else {
        Some(format!("Hello, {}!", name))
    }
}
