//! Static route table.
//!
//! The table mirrors the served views: `/login` is the only public route;
//! everything else hangs off the layout shell at `/` and requires
//! authentication by default.

/// Default document title when a route carries none.
pub const APP_NAME: &str = "UniKnow";
/// Suffix appended to every page title.
pub const SUITE_NAME: &str = "Case Management";
/// The one public route.
pub const LOGIN_PATH: &str = "/login";
/// Where authenticated users land by default.
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";

/// One route, immutable after startup.
///
/// `requires_auth` is explicit rather than inferred from a dynamic `meta`
/// bag: the default for a protected application is `true`, and only
/// routes that opt out (the login view) carry `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern; `:name` segments match any single non-empty segment.
    pub path: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub icon: Option<&'static str>,
    pub requires_auth: bool,
    /// Nested children share this route's layout shell.
    pub children: &'static [RouteDescriptor],
}

impl RouteDescriptor {
    const fn protected(
        path: &'static str,
        name: &'static str,
        title: &'static str,
        icon: Option<&'static str>,
    ) -> Self {
        Self {
            path,
            name,
            title,
            icon,
            requires_auth: true,
            children: &[],
        }
    }
}

const LAYOUT_CHILDREN: &[RouteDescriptor] = &[
    RouteDescriptor::protected("dashboard", "Dashboard", "Dashboard", Some("DataLine")),
    RouteDescriptor::protected("cases", "CaseList", "Cases", Some("Document")),
    RouteDescriptor::protected("cases/create", "CaseCreate", "Create Case", Some("Plus")),
    RouteDescriptor::protected("cases/:id", "CaseDetail", "Case Detail", None),
    RouteDescriptor::protected("search", "Search", "Case Search", Some("Search")),
    RouteDescriptor::protected("qa", "QA", "Smart Q&A", Some("ChatDotRound")),
    RouteDescriptor::protected("approvals", "Approvals", "Approvals", Some("CircleCheck")),
    RouteDescriptor::protected("operation", "Operation", "Operations", Some("TrendCharts")),
];

const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/login",
        name: "Login",
        title: "Login",
        icon: None,
        requires_auth: false,
        children: &[],
    },
    RouteDescriptor {
        path: "/",
        name: "Layout",
        title: "",
        icon: None,
        requires_auth: true,
        children: LAYOUT_CHILDREN,
    },
];

/// The application's routes; resolution handles `:param` segments.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [RouteDescriptor],
}

/// The full static route table.
pub fn route_table() -> RouteTable {
    RouteTable { routes: ROUTES }
}

impl RouteTable {
    /// Resolve a concrete path to its route descriptor.
    ///
    /// Children are matched against their parent-joined path; the layout
    /// shell itself (bare `/`) resolves to the shell route.
    pub fn resolve(&self, path: &str) -> Option<&'static RouteDescriptor> {
        for route in self.routes {
            if pattern_matches(route.path, path) {
                return Some(route);
            }
            for child in route.children {
                let joined = join(route.path, child.path);
                if pattern_matches(&joined, path) {
                    return Some(child);
                }
            }
        }
        None
    }

    /// Top-level routes (used by the shell to build its menu).
    pub fn top_level(&self) -> &'static [RouteDescriptor] {
        self.routes
    }
}

/// Title shown for a proceeding navigation:
/// `"{route title | app name} - {suite name}"`.
pub fn page_title(route: Option<&RouteDescriptor>) -> String {
    let title = route
        .map(|r| r.title)
        .filter(|t| !t.is_empty())
        .unwrap_or(APP_NAME);
    format!("{title} - {SUITE_NAME}")
}

fn join(parent: &str, child: &str) -> String {
    if parent.ends_with('/') {
        format!("{parent}{child}")
    } else {
        format!("{parent}/{child}")
    }
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.trim_matches('/').split('/');
    let mut path_segments = path.trim_matches('/').split('/');
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) => {
                if p.starts_with(':') {
                    if s.is_empty() {
                        return false;
                    }
                } else if p != s {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_static_and_param_paths() {
        let table = route_table();
        assert_eq!(table.resolve("/login").unwrap().name, "Login");
        assert_eq!(table.resolve("/dashboard").unwrap().name, "Dashboard");
        assert_eq!(table.resolve("/cases").unwrap().name, "CaseList");
        assert_eq!(table.resolve("/cases/create").unwrap().name, "CaseCreate");
        assert_eq!(table.resolve("/cases/42").unwrap().name, "CaseDetail");
        assert_eq!(table.resolve("/").unwrap().name, "Layout");
        assert!(table.resolve("/nope").is_none());
        assert!(table.resolve("/cases/42/extra").is_none());
    }

    #[test]
    fn static_children_win_over_param_siblings() {
        // "/cases/create" must hit CaseCreate, not CaseDetail with id "create".
        let table = route_table();
        assert_eq!(table.resolve("/cases/create").unwrap().name, "CaseCreate");
    }

    #[test]
    fn only_login_is_public() {
        let table = route_table();
        for path in [
            "/dashboard",
            "/cases",
            "/cases/create",
            "/cases/9",
            "/search",
            "/qa",
            "/approvals",
            "/operation",
        ] {
            assert!(table.resolve(path).unwrap().requires_auth, "{path}");
        }
        assert!(!table.resolve("/login").unwrap().requires_auth);
    }

    #[test]
    fn titles_fall_back_to_the_app_name() {
        let table = route_table();
        assert_eq!(
            page_title(table.resolve("/cases")),
            "Cases - Case Management"
        );
        assert_eq!(page_title(None), "UniKnow - Case Management");
    }
}
