//! Integration tests for the site shell wiring.
//!
//! Builds a headless Bevy app with the full [`SitePlugin`] and drives route
//! changes through `NextState`, exactly as the navigation bar does. Timing
//! assertions tick the coordinator resources directly with fixed
//! `Duration`s so they stay deterministic; real frame deltas from
//! `app.update()` are microseconds and the checkpoints leave 100 ms margins.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::boot::BootSplash;
use crate::route::Route;
use crate::toasts::{ToastEvent, ToastLog};
use crate::transition::PageTransition;
use crate::welcome::WelcomeModal;

fn build_site_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.add_plugins(crate::SitePlugin);
    // First update runs Startup plus the initial state transition.
    app.update();
    app
}

fn navigate(app: &mut App, route: Route) {
    app.world_mut().resource_mut::<NextState<Route>>().set(route);
    app.update();
}

fn advance_transition(app: &mut App, ms: u64) {
    app.world_mut()
        .resource_mut::<PageTransition>()
        .advance(Duration::from_millis(ms));
}

#[test]
fn test_initial_route_mounts_behind_loader() {
    let app = build_site_app();

    let transition = app.world().resource::<PageTransition>();
    assert!(transition.is_loading(), "first mount starts in the loading phase");
    assert_eq!(transition.route_key(), Route::Home.path());
    assert_eq!(*app.world().resource::<State<Route>>().get(), Route::Home);
}

#[test]
fn test_navigation_restarts_the_dwell() {
    let mut app = build_site_app();

    advance_transition(&mut app, 1300);
    assert!(!app.world().resource::<PageTransition>().is_loading());

    navigate(&mut app, Route::About);
    let transition = app.world().resource::<PageTransition>();
    assert!(transition.is_loading(), "navigation must re-enter loading");
    assert_eq!(transition.route_key(), "/about");

    advance_transition(&mut app, 1100);
    assert!(app.world().resource::<PageTransition>().is_loading());

    advance_transition(&mut app, 200);
    assert!(!app.world().resource::<PageTransition>().is_loading());
}

#[test]
fn test_rapid_renavigation_supersedes_first_reveal() {
    let mut app = build_site_app();
    advance_transition(&mut app, 1300);

    // /about at T=0, /events at T=300.
    navigate(&mut app, Route::About);
    advance_transition(&mut app, 300);
    navigate(&mut app, Route::Events);

    // T≈1200: the first route's deadline. Still loading.
    advance_transition(&mut app, 900);
    let transition = app.world().resource::<PageTransition>();
    assert!(transition.is_loading(), "the /about deadline must not reveal /events");
    assert_eq!(transition.route_key(), "/events");

    // T≈1500: 1200 ms after the last change.
    advance_transition(&mut app, 300);
    assert!(!app.world().resource::<PageTransition>().is_loading());
}

#[test]
fn test_navigation_after_teardown_does_not_panic() {
    let mut app = build_site_app();

    app.world_mut().remove_resource::<PageTransition>();
    app.world_mut().remove_resource::<WelcomeModal>();

    // Route changes and further frames must be harmless with the
    // coordinator gone; nothing may fire against a torn-down target.
    navigate(&mut app, Route::Jobs);
    app.update();
    assert_eq!(*app.world().resource::<State<Route>>().get(), Route::Jobs);
}

#[test]
fn test_welcome_modal_opens_for_navigated_route() {
    let mut app = build_site_app();

    navigate(&mut app, Route::About);
    {
        let modal = app.world().resource::<WelcomeModal>();
        assert!(!modal.is_open(), "modal waits out its delay");
    }

    app.world_mut()
        .resource_mut::<WelcomeModal>()
        .advance(Duration::from_millis(500));
    let modal = app.world().resource::<WelcomeModal>();
    assert!(modal.is_open());
    assert_eq!(modal.shown_for(), Some("/about"));
}

#[test]
fn test_toast_events_collect_into_log() {
    let mut app = build_site_app();

    app.world_mut().send_event(ToastEvent::info("saved"));
    app.update();
    assert_eq!(app.world().resource::<ToastLog>().len(), 1);
}

#[test]
fn test_boot_splash_is_independent_of_route_loading() {
    let mut app = build_site_app();

    assert!(app.world().resource::<BootSplash>().active());

    // Finishing the splash leaves the route transition untouched.
    app.world_mut()
        .resource_mut::<BootSplash>()
        .advance(Duration::from_millis(2000));
    assert!(!app.world().resource::<BootSplash>().active());
    assert!(app.world().resource::<PageTransition>().is_loading());
}
