//! `uniknow-routing` — route table and navigation guard.
//!
//! Routes are static data (a tree sharing one layout shell); the guard is a
//! pure per-transition decision over the session store, with navigation and
//! notification side effects left to the host shell.

pub mod guard;
pub mod navigator;
pub mod route;

pub use guard::{GuardDecision, NavigationGuard};
pub use navigator::{Navigator, RecordingNavigator};
pub use route::{
    page_title, route_table, RouteDescriptor, RouteTable, APP_NAME, DEFAULT_LANDING_PATH,
    LOGIN_PATH, SUITE_NAME,
};
