//! Route table for the site shell.
//!
//! Defines [`Route`], a Bevy [`States`] enum mapping each navigable page to a
//! canonical path string. The path doubles as the **route key** the
//! transition coordinator and welcome modal use to detect "this is a
//! different page than before". The state lives here (in the `site` crate)
//! so UI crates can gate systems on it without circular dependencies.
//!
//! Navigation is performed by whoever writes [`NextState<Route>`]; the
//! transition coordinator only reacts to the resulting state transitions.

use bevy::prelude::*;

/// The navigable pages of the site.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Landing page with the hero banner and next-events strip.
    #[default]
    Home,
    /// Group mission and the leadership carousel.
    About,
    /// Full upcoming-events listing.
    Events,
    /// Member showcase carousel.
    Community,
    /// Community job board.
    Jobs,
    /// Contact / signup form.
    Contact,
}

impl Route {
    /// All routes in navigation-bar order.
    pub const ALL: &'static [Route] = &[
        Route::Home,
        Route::About,
        Route::Events,
        Route::Community,
        Route::Jobs,
        Route::Contact,
    ];

    /// Canonical path string, used as the route key.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Events => "/events",
            Route::Community => "/community",
            Route::Jobs => "/jobs",
            Route::Contact => "/contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Events => "Events",
            Route::Community => "Community",
            Route::Jobs => "Jobs",
            Route::Contact => "Contact",
        }
    }
}
