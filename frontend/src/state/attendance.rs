use crate::api::AttendanceRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    NotCheckedIn,
    CheckedIn,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionVariant {
    Primary,
    Secondary,
    Disabled,
}

/// What the attendance card shows for today's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub status: AttendanceStatus,
    pub label: &'static str,
    pub action: &'static str,
    pub enabled: bool,
}

impl StatusView {
    pub fn variant(&self) -> ActionVariant {
        match self.status {
            AttendanceStatus::NotCheckedIn => ActionVariant::Primary,
            AttendanceStatus::CheckedIn => ActionVariant::Secondary,
            AttendanceStatus::Completed => ActionVariant::Disabled,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self.status {
            AttendanceStatus::NotCheckedIn => "bg-gray-100 text-gray-800",
            AttendanceStatus::CheckedIn => "bg-yellow-100 text-yellow-800",
            AttendanceStatus::Completed => "bg-green-100 text-green-800",
        }
    }

    pub fn button_class(&self) -> &'static str {
        match self.variant() {
            ActionVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white",
            ActionVariant::Secondary => "bg-orange-500 hover:bg-orange-600 text-white",
            ActionVariant::Disabled => "bg-gray-300 text-gray-500 cursor-not-allowed",
        }
    }

    /// "Click the button above to tap in for today."
    pub fn hint(&self) -> String {
        format!(
            "Click the button above to {} for today.",
            self.action.to_lowercase()
        )
    }
}

pub fn resolve_status(record: Option<&AttendanceRecord>) -> StatusView {
    let (tap_in, tap_out) = record
        .map(|r| (r.tap_in.is_some(), r.tap_out.is_some()))
        .unwrap_or((false, false));
    match (tap_in, tap_out) {
        (false, _) => StatusView {
            status: AttendanceStatus::NotCheckedIn,
            label: "Not Checked In",
            action: "Tap In",
            enabled: true,
        },
        (true, false) => StatusView {
            status: AttendanceStatus::CheckedIn,
            label: "Checked In",
            action: "Tap Out",
            enabled: true,
        },
        (true, true) => StatusView {
            status: AttendanceStatus::Completed,
            label: "Attendance Completed",
            action: "Attendance Completed",
            enabled: false,
        },
    }
}

/// Status column of the summary table.
pub fn summary_status(record: &AttendanceRecord) -> &'static str {
    match (record.tap_in.is_some(), record.tap_out.is_some()) {
        (true, true) => "Completed",
        (true, false) => "Checked In Only",
        _ => "No Data",
    }
}

pub fn summary_badge_class(record: &AttendanceRecord) -> &'static str {
    match summary_status(record) {
        "Completed" => "bg-green-100 text-green-800",
        "Checked In Only" => "bg-yellow-100 text-yellow-800",
        _ => "bg-gray-100 text-gray-800",
    }
}
