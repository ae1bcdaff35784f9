//! Navigation guard.
//!
//! Evaluated fresh for every attempted transition, in order:
//!
//! 1. Target is the login route: an authenticated user is bounced to the
//!    default landing route, everyone else proceeds.
//! 2. Target is explicitly public: proceed.
//! 3. Otherwise the target is protected (the default): without a token the
//!    user is told to log in and bounced to the login route.
//!
//! Every proceed carries the page title to display. Redirect targets are
//! re-evaluated by the caller; the two redirect rules point at each other's
//! terminal case, so the depth is bounded at one.

use std::sync::Arc;

use uniknow_core::Notifier;
use uniknow_session::SessionStore;

use crate::route::{page_title, RouteTable, DEFAULT_LANDING_PATH, LOGIN_PATH};

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the target; `title` is the document title to display.
    Proceed { title: String },
    /// Enter the guard again for `to` instead of rendering the target.
    Redirect { to: &'static str },
}

/// Per-transition auth gate over the session store.
pub struct NavigationGuard {
    table: RouteTable,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
}

impl NavigationGuard {
    pub fn new(table: RouteTable, session: Arc<SessionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            table,
            session,
            notifier,
        }
    }

    /// Evaluate a single attempted transition to `target`.
    pub fn check(&self, target: &str) -> GuardDecision {
        let route = self.table.resolve(target);
        let logged_in = self.session.is_logged_in();

        if target == LOGIN_PATH {
            if logged_in {
                tracing::debug!("already authenticated, bouncing /login to landing");
                return GuardDecision::Redirect {
                    to: DEFAULT_LANDING_PATH,
                };
            }
            return GuardDecision::Proceed {
                title: page_title(route),
            };
        }

        // Unknown routes are treated as protected: requires_auth defaults
        // to true unless a route explicitly opts out.
        let requires_auth = route.map(|r| r.requires_auth).unwrap_or(true);
        if !requires_auth {
            return GuardDecision::Proceed {
                title: page_title(route),
            };
        }

        if !logged_in {
            self.notifier.error("Please log in first");
            return GuardDecision::Redirect { to: LOGIN_PATH };
        }

        GuardDecision::Proceed {
            title: page_title(route),
        }
    }

    /// Evaluate `target` and follow at most one redirect.
    ///
    /// Returns the path that will actually render and its title.
    pub fn settle(&self, target: &str) -> (String, String) {
        match self.check(target) {
            GuardDecision::Proceed { title } => (target.to_owned(), title),
            GuardDecision::Redirect { to } => match self.check(to) {
                GuardDecision::Proceed { title } => (to.to_owned(), title),
                // Mutually exclusive redirect rules make this unreachable;
                // degrade to the redirect target rather than recursing.
                GuardDecision::Redirect { to: next } => {
                    tracing::warn!("guard redirected twice ({target} -> {to} -> {next})");
                    (next.to_owned(), page_title(self.table.resolve(next)))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::route_table;
    use std::sync::Mutex;
    use uniknow_core::UserProfilePatch;
    use uniknow_session::{MemoryStorage, SessionStore};

    #[derive(Default)]
    struct RecordingNotifier {
        errors: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_owned());
        }
    }

    fn guard() -> (NavigationGuard, Arc<SessionStore>, Arc<RecordingNotifier>) {
        let session = Arc::new(SessionStore::new(Box::new(MemoryStorage::new())));
        let notifier = Arc::new(RecordingNotifier::default());
        let guard = NavigationGuard::new(
            route_table(),
            Arc::clone(&session),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        );
        (guard, session, notifier)
    }

    #[test]
    fn protected_route_without_token_redirects_to_login_with_one_notice() {
        let (guard, _session, notifier) = guard();
        assert_eq!(
            guard.check("/cases"),
            GuardDecision::Redirect { to: LOGIN_PATH }
        );
        assert_eq!(
            notifier.errors.lock().unwrap().as_slice(),
            ["Please log in first"]
        );
    }

    #[test]
    fn login_with_token_redirects_to_landing() {
        let (guard, session, notifier) = guard();
        session.set_token("jwt");
        assert_eq!(
            guard.check(LOGIN_PATH),
            GuardDecision::Redirect {
                to: DEFAULT_LANDING_PATH
            }
        );
        assert!(notifier.errors.lock().unwrap().is_empty());
    }

    #[test]
    fn login_without_token_proceeds() {
        let (guard, _session, _notifier) = guard();
        assert_eq!(
            guard.check(LOGIN_PATH),
            GuardDecision::Proceed {
                title: "Login - Case Management".to_owned()
            }
        );
    }

    #[test]
    fn protected_route_with_token_proceeds_with_title() {
        let (guard, session, _notifier) = guard();
        session.set_token("jwt");
        session.set_user_info(UserProfilePatch {
            name: Some("Alice".into()),
            ..Default::default()
        });
        assert_eq!(
            guard.check("/cases"),
            GuardDecision::Proceed {
                title: "Cases - Case Management".to_owned()
            }
        );
        assert_eq!(
            guard.check("/cases/42"),
            GuardDecision::Proceed {
                title: "Case Detail - Case Management".to_owned()
            }
        );
    }

    #[test]
    fn unknown_routes_default_to_protected() {
        let (guard, session, _notifier) = guard();
        assert_eq!(
            guard.check("/does-not-exist"),
            GuardDecision::Redirect { to: LOGIN_PATH }
        );
        session.set_token("jwt");
        assert_eq!(
            guard.check("/does-not-exist"),
            GuardDecision::Proceed {
                title: "UniKnow - Case Management".to_owned()
            }
        );
    }

    #[test]
    fn settle_terminates_after_one_redirect() {
        let (guard, _session, _notifier) = guard();
        let (path, title) = guard.settle("/approvals");
        assert_eq!(path, LOGIN_PATH);
        assert_eq!(title, "Login - Case Management");

        let (guard, session, _notifier) = guard_with_token();
        let (path, _) = guard.settle(LOGIN_PATH);
        assert_eq!(path, DEFAULT_LANDING_PATH);
        drop(session);
    }

    fn guard_with_token() -> (NavigationGuard, Arc<SessionStore>, Arc<RecordingNotifier>) {
        let (guard, session, notifier) = guard();
        session.set_token("jwt");
        (guard, session, notifier)
    }
}
