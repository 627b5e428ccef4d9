//! Welcome / interstitial modal controller.
//!
//! After a qualifying route change the modal arms a short delay timer and
//! auto-opens exactly once per route key. Other systems read
//! [`WelcomeModal::is_open`] to render it; dismissal never reopens until
//! the next qualifying key change. The frequency mode is fixed at
//! integration time; the plugin installs [`ShowFrequency::OnRouteChange`].

use std::time::Duration;

use bevy::prelude::*;

use crate::config;
use crate::route::Route;

// =============================================================================
// Controller
// =============================================================================

/// How often the modal is eligible to auto-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFrequency {
    /// Only on the very first mount of the application.
    OnFirstVisit,
    /// Eligible again after every navigation.
    OnRouteChange,
}

#[derive(Resource)]
pub struct WelcomeModal {
    mode: ShowFrequency,
    is_open: bool,
    /// Route key the modal last auto-opened for. At most one open per key.
    shown_for: Option<String>,
    /// Route key with a pending (armed) auto-open.
    armed_for: Option<String>,
    delay: Timer,
}

impl WelcomeModal {
    pub fn new(mode: ShowFrequency) -> Self {
        Self {
            mode,
            is_open: false,
            shown_for: None,
            armed_for: None,
            delay: Timer::new(
                Duration::from_millis(config::WELCOME_DELAY_MS),
                TimerMode::Once,
            ),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn shown_for(&self) -> Option<&str> {
        self.shown_for.as_deref()
    }

    /// Arm the auto-open delay for `key` if the mode allows another show.
    ///
    /// Every qualifying change either re-arms for the new key or cancels a
    /// pending arm for the route just left; an open armed for one route
    /// never fires on another.
    pub fn on_route_changed(&mut self, key: &str) {
        match self.mode {
            ShowFrequency::OnFirstVisit => {
                // One show for the whole application lifetime.
                if self.shown_for.is_some() {
                    return;
                }
            }
            ShowFrequency::OnRouteChange => {
                if self.shown_for.as_deref() == Some(key) {
                    self.armed_for = None;
                    return;
                }
            }
        }
        self.armed_for = Some(key.to_string());
        self.delay.reset();
    }

    /// Advance the arming delay; opens once it elapses.
    pub fn advance(&mut self, delta: Duration) {
        if self.armed_for.is_none() {
            return;
        }
        self.delay.tick(delta);
        if self.delay.finished() {
            self.shown_for = self.armed_for.take();
            self.is_open = true;
        }
    }

    /// Close the modal. Also swallows a pending auto-open so nothing pops
    /// back up until the next qualifying route change.
    pub fn dismiss(&mut self) {
        self.is_open = false;
        self.armed_for = None;
    }
}

// =============================================================================
// Systems
// =============================================================================

fn watch_route_changes(
    mut transitions: EventReader<StateTransitionEvent<Route>>,
    modal: Option<ResMut<WelcomeModal>>,
) {
    let Some(mut modal) = modal else {
        return;
    };
    for event in transitions.read() {
        if event.exited == event.entered {
            continue;
        }
        if let Some(entered) = event.entered {
            modal.on_route_changed(entered.path());
        }
    }
}

fn advance_welcome_modal(time: Res<Time>, modal: Option<ResMut<WelcomeModal>>) {
    let Some(mut modal) = modal else {
        return;
    };
    modal.advance(time.delta());
}

// =============================================================================
// Plugin
// =============================================================================

pub struct WelcomeModalPlugin;

impl Plugin for WelcomeModalPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(WelcomeModal::new(ShowFrequency::OnRouteChange));
        app.add_systems(Update, (watch_route_changes, advance_welcome_modal).chain());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    const DELAY: u64 = config::WELCOME_DELAY_MS;

    #[test]
    fn test_opens_after_delay_not_before() {
        let mut modal = WelcomeModal::new(ShowFrequency::OnRouteChange);
        modal.on_route_changed("/");

        modal.advance(ms(DELAY - 1));
        assert!(!modal.is_open());

        modal.advance(ms(1));
        assert!(modal.is_open());
        assert_eq!(modal.shown_for(), Some("/"));
    }

    #[test]
    fn test_at_most_once_per_key() {
        let mut modal = WelcomeModal::new(ShowFrequency::OnRouteChange);
        modal.on_route_changed("/about");
        modal.advance(ms(DELAY));
        assert!(modal.is_open());

        modal.dismiss();
        modal.on_route_changed("/about");
        modal.advance(ms(DELAY * 4));
        assert!(!modal.is_open(), "same key must not reopen the modal");
    }

    #[test]
    fn test_key_change_restores_eligibility_in_route_change_mode() {
        let mut modal = WelcomeModal::new(ShowFrequency::OnRouteChange);
        modal.on_route_changed("/about");
        modal.advance(ms(DELAY));
        modal.dismiss();

        modal.on_route_changed("/events");
        modal.advance(ms(DELAY));
        assert!(modal.is_open());
        assert_eq!(modal.shown_for(), Some("/events"));
    }

    #[test]
    fn test_first_visit_mode_shows_only_once_ever() {
        let mut modal = WelcomeModal::new(ShowFrequency::OnFirstVisit);
        modal.on_route_changed("/");
        modal.advance(ms(DELAY));
        assert!(modal.is_open());
        modal.dismiss();

        modal.on_route_changed("/events");
        modal.advance(ms(DELAY * 4));
        assert!(!modal.is_open(), "OnFirstVisit never shows a second time");
    }

    #[test]
    fn test_returning_to_shown_key_cancels_pending_open() {
        let mut modal = WelcomeModal::new(ShowFrequency::OnRouteChange);
        modal.on_route_changed("/about");
        modal.advance(ms(DELAY));
        modal.dismiss();

        // Arm for /events, then return to the already-shown /about before
        // the delay fires.
        modal.on_route_changed("/events");
        modal.advance(ms(DELAY / 2));
        modal.on_route_changed("/about");

        modal.advance(ms(DELAY * 2));
        assert!(!modal.is_open(), "the open armed for /events must not fire on /about");
        assert_eq!(modal.shown_for(), Some("/about"));
    }

    #[test]
    fn test_first_visit_arming_follows_navigation() {
        let mut modal = WelcomeModal::new(ShowFrequency::OnFirstVisit);
        modal.on_route_changed("/");
        modal.advance(ms(DELAY / 2));

        // Navigating mid-delay retargets the pending open to the route the
        // user is actually on.
        modal.on_route_changed("/events");
        modal.advance(ms(DELAY));
        assert!(modal.is_open());
        assert_eq!(modal.shown_for(), Some("/events"));
    }

    #[test]
    fn test_dismiss_swallows_pending_open() {
        let mut modal = WelcomeModal::new(ShowFrequency::OnRouteChange);
        modal.on_route_changed("/jobs");
        modal.advance(ms(DELAY / 2));

        modal.dismiss();
        modal.advance(ms(DELAY * 2));
        assert!(!modal.is_open(), "dismissal must cancel the armed open");

        // The key was never shown, so a later navigation to it re-arms.
        modal.on_route_changed("/jobs");
        modal.advance(ms(DELAY));
        assert!(modal.is_open());
    }
}
