//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are addressed by path. Every route except `/login` requires an
//! authenticated session; [`guard`] is the single place that decision is
//! made and [`router::Router`] applies it before each navigation.

pub mod router;


pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

/// Pages the console can display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
    Logs,
    Models,
    DataSources,
    NewDataSource,
    LokiConfig,
    ElasticsearchConfig,
    VictoriaLogsConfig,
    Monitors,
    Channels,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    /// Localization key for the page title.
    pub title_key: &'static str,
    pub subtitle_key: Option<&'static str>,
    /// Reachable without a session.
    pub public: bool,
}

impl RouteMeta {
    const fn private(title_key: &'static str) -> Self {
        Self { title_key, subtitle_key: None, public: false }
    }

    const fn with_subtitle(mut self, subtitle_key: &'static str) -> Self {
        self.subtitle_key = Some(subtitle_key);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
    pub meta: RouteMeta,
}

pub static ROUTES: &[Route] = &[
    Route {
        path: LOGIN_PATH,
        page: Page::Login,
        meta: RouteMeta { title_key: "route.login", subtitle_key: None, public: true },
    },
    Route { path: HOME_PATH, page: Page::Dashboard, meta: RouteMeta::private("route.dashboard") },
    Route {
        path: "/logs",
        page: Page::Logs,
        meta: RouteMeta::private("route.logs").with_subtitle("route.logs.subtitle"),
    },
    Route {
        path: "/models",
        page: Page::Models,
        meta: RouteMeta::private("route.models").with_subtitle("route.models.subtitle"),
    },
    Route { path: "/datasources", page: Page::DataSources, meta: RouteMeta::private("route.datasources") },
    Route {
        path: "/datasources/new",
        page: Page::NewDataSource,
        meta: RouteMeta::private("route.datasources.new"),
    },
    Route {
        path: "/datasources/new/loki",
        page: Page::LokiConfig,
        meta: RouteMeta::private("route.datasources.loki"),
    },
    Route {
        path: "/datasources/new/elasticsearch",
        page: Page::ElasticsearchConfig,
        meta: RouteMeta::private("route.datasources.elasticsearch"),
    },
    Route {
        path: "/datasources/new/victorialogs",
        page: Page::VictoriaLogsConfig,
        meta: RouteMeta::private("route.datasources.victorialogs"),
    },
    Route { path: "/monitors", page: Page::Monitors, meta: RouteMeta::private("route.monitors") },
    Route { path: "/channels", page: Page::Channels, meta: RouteMeta::private("route.channels") },
];

/// Static path aliases: (from, to).
pub static REDIRECTS: &[(&str, &str)] = &[("/", HOME_PATH)];

/// Outcome of the navigation guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

/// Strip query/fragment and trailing slashes; the root stays `/`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Follow static redirects for `path`.
#[must_use]
pub fn redirect_target(path: &str) -> Option<&'static str> {
    let path = normalize_path(path);
    REDIRECTS.iter().find(|(from, _)| *from == path).map(|(_, to)| *to)
}

/// Look up the route for `path`.
#[must_use]
pub fn resolve(path: &str) -> Option<&'static Route> {
    let path = normalize_path(path);
    ROUTES.iter().find(|r| r.path == path)
}

/// Decide whether a navigation to a route with `meta` may proceed.
///
/// Routes without metadata (unknown paths) are treated as non-public.
#[must_use]
pub fn guard(meta: Option<&RouteMeta>, authenticated: bool) -> Navigation {
    let public = meta.is_some_and(|m| m.public);
    if !public && !authenticated {
        Navigation::Redirect(LOGIN_PATH)
    } else {
        Navigation::Proceed
    }
}
