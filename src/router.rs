//! Static route table mapping URL-style paths to screens.

use crate::ui::app::Screen;

pub(crate) struct Route {
    pub(crate) path: &'static str,
    pub(crate) screen: Screen,
}

/// The first entry is the root route; anything unmatched redirects to it.
pub(crate) const ROUTES: &[Route] = &[
    Route {
        path: "/",
        screen: Screen::Budgets,
    },
    Route {
        path: "/menu",
        screen: Screen::Menu,
    },
];

/// Resolve a path to its screen. No parameters, no guards; unknown paths
/// land on the root route.
pub(crate) fn resolve(path: &str) -> Screen {
    let trimmed = path.trim_end_matches('/');
    ROUTES
        .iter()
        .find(|route| route.path == path || (!trimmed.is_empty() && route.path == trimmed))
        .map_or(ROUTES[0].screen, |route| route.screen)
}

/// The path a screen is reachable under, for display.
pub(crate) fn path_of(screen: Screen) -> &'static str {
    ROUTES
        .iter()
        .find(|route| route.screen == screen)
        .map_or("/", |route| route.path)
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
