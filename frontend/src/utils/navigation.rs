use std::{cell::RefCell, rc::Rc};

use log::debug;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Full-page navigation. Kept behind a trait so redirects can be observed in tests.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if pathname == path {
                return;
            }
        }
        debug!("Navigating to {}", path);
        let _ = location.set_href(path);
    }
}

/// Records every requested path instead of touching `window.location`.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        let mut visited = self.visited.borrow_mut();
        if visited.last().map(String::as_str) == Some(path) {
            return;
        }
        visited.push(path.to_string());
    }
}
