//! Route-transition coordinator.
//!
//! Every route change hides the incoming page behind a full-screen loader
//! for at least [`config::MIN_DISPLAY_MS`], then reveals it with a short
//! fade. The coordinator owns a single one-shot [`Timer`]; `schedule`
//! resets it, so a second navigation inside the dwell window always
//! supersedes the pending reveal of the first. There is no separate timer
//! handle per navigation that could fire late for a stale route.
//!
//! The UI contract: while [`TransitionPhase::Loading`] the page is not
//! rendered at all and the overlay claims all pointer input; once revealed,
//! [`PageTransition::reveal_progress`] drives the fade-in opacity.

use std::time::Duration;

use bevy::prelude::*;

use crate::config;
use crate::route::Route;

// =============================================================================
// State
// =============================================================================

/// The two phases of a routed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Loader visible, page hidden and non-interactive.
    Loading,
    /// Page visible and interactive, fading in.
    Revealed,
}

/// Per-route-change transition state.
///
/// Initial state is `Loading`: the very first mount of the routed view goes
/// through the same dwell as every later navigation (the initial state
/// transition event schedules it).
#[derive(Resource)]
pub struct PageTransition {
    phase: TransitionPhase,
    route_key: String,
    timer: Timer,
    fade: Timer,
    generation: u64,
}

impl Default for PageTransition {
    fn default() -> Self {
        Self {
            phase: TransitionPhase::Loading,
            route_key: Route::default().path().to_string(),
            timer: Timer::new(
                Duration::from_millis(config::MIN_DISPLAY_MS),
                TimerMode::Once,
            ),
            fade: Timer::new(Duration::from_millis(config::REVEAL_FADE_MS), TimerMode::Once),
            generation: 0,
        }
    }
}

impl PageTransition {
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == TransitionPhase::Loading
    }

    /// Route key of the page currently behind the transition.
    pub fn route_key(&self) -> &str {
        &self.route_key
    }

    /// Monotonic counter bumped by every [`schedule`](Self::schedule).
    ///
    /// Only observable state, never branched on: with a single owned timer
    /// the newest schedule is always the one that reveals. Tests assert
    /// that property through this counter.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin a new loading dwell for `key`.
    ///
    /// Cancels any pending reveal by resetting the owned timer. A change
    /// back to the previous key restarts the dwell like any other change.
    pub fn schedule(&mut self, key: &str) {
        self.phase = TransitionPhase::Loading;
        self.route_key.clear();
        self.route_key.push_str(key);
        self.timer.reset();
        self.fade.reset();
        self.generation += 1;
    }

    /// Advance time. Flips to `Revealed` once the dwell elapses, then
    /// drives the fade-in timer. Idempotent after the fade completes.
    pub fn advance(&mut self, delta: Duration) {
        match self.phase {
            TransitionPhase::Loading => {
                self.timer.tick(delta);
                if self.timer.finished() {
                    self.phase = TransitionPhase::Revealed;
                }
            }
            TransitionPhase::Revealed => {
                self.fade.tick(delta);
            }
        }
    }

    /// Fade-in progress in `0.0..=1.0`. Zero for the whole loading phase.
    pub fn reveal_progress(&self) -> f32 {
        match self.phase {
            TransitionPhase::Loading => 0.0,
            TransitionPhase::Revealed => self.fade.fraction(),
        }
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Reschedules the loader whenever the active route actually changes.
///
/// Identity transitions (re-entering the current state) are not
/// navigations and are ignored. The initial state transition on app start
/// does schedule, so the first page also sits behind the loader.
fn watch_route_changes(
    mut transitions: EventReader<StateTransitionEvent<Route>>,
    transition: Option<ResMut<PageTransition>>,
) {
    let Some(mut transition) = transition else {
        return;
    };
    for event in transitions.read() {
        if event.exited == event.entered {
            continue;
        }
        if let Some(entered) = event.entered {
            info!("navigating to {}", entered.path());
            transition.schedule(entered.path());
        }
    }
}

fn advance_transition(time: Res<Time>, transition: Option<ResMut<PageTransition>>) {
    let Some(mut transition) = transition else {
        return;
    };
    transition.advance(time.delta());
}

// =============================================================================
// Plugin
// =============================================================================

pub struct PageTransitionPlugin;

impl Plugin for PageTransitionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PageTransition>();
        app.add_systems(Update, (watch_route_changes, advance_transition).chain());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MS: u64 = config::MIN_DISPLAY_MS;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_initial_phase_is_loading() {
        let transition = PageTransition::default();
        assert!(transition.is_loading());
        assert_eq!(transition.route_key(), "/");
        assert_eq!(transition.reveal_progress(), 0.0);
    }

    #[test]
    fn test_minimum_dwell_holds_until_deadline() {
        let mut transition = PageTransition::default();
        transition.schedule("/about");

        transition.advance(ms(MS - 1));
        assert!(transition.is_loading(), "must stay loading before the dwell elapses");

        transition.advance(ms(1));
        assert_eq!(transition.phase(), TransitionPhase::Revealed);
    }

    #[test]
    fn test_rapid_changes_supersede_pending_reveal() {
        let mut transition = PageTransition::default();

        // T=0: navigate. T=300: navigate again.
        transition.schedule("/about");
        transition.advance(ms(300));
        transition.schedule("/events");

        // T=1200: the first deadline. Still loading, since the second navigation
        // superseded it.
        transition.advance(ms(MS - 300));
        assert!(transition.is_loading(), "first deadline must not reveal the second route");
        assert_eq!(transition.route_key(), "/events");

        // T=1500: 1200 ms after the *last* change.
        transition.advance(ms(300));
        assert_eq!(transition.phase(), TransitionPhase::Revealed);
    }

    #[test]
    fn test_change_back_to_original_key_restarts_dwell() {
        let mut transition = PageTransition::default();

        transition.schedule("/about");
        transition.advance(ms(800));
        transition.schedule("/events");
        transition.advance(ms(200));
        transition.schedule("/about");

        // 1000 ms of the original dwell already passed, but the return to
        // "/about" restarted it.
        transition.advance(ms(MS - 1));
        assert!(transition.is_loading());
        transition.advance(ms(1));
        assert_eq!(transition.phase(), TransitionPhase::Revealed);
    }

    #[test]
    fn test_generation_tracks_latest_schedule() {
        let mut transition = PageTransition::default();
        assert_eq!(transition.generation(), 0);

        transition.schedule("/about");
        transition.schedule("/events");
        assert_eq!(transition.generation(), 2);

        // Only the latest schedule's dwell leads to the reveal.
        transition.advance(ms(MS));
        assert_eq!(transition.phase(), TransitionPhase::Revealed);
        assert_eq!(transition.generation(), 2);
        assert_eq!(transition.route_key(), "/events");
    }

    #[test]
    fn test_reveal_progress_fades_in() {
        let mut transition = PageTransition::default();
        transition.schedule("/jobs");

        transition.advance(ms(600));
        assert_eq!(transition.reveal_progress(), 0.0, "hidden for the whole dwell");

        transition.advance(ms(MS - 600));
        assert_eq!(transition.reveal_progress(), 0.0, "fade starts from zero");

        transition.advance(ms(config::REVEAL_FADE_MS / 2));
        let mid = transition.reveal_progress();
        assert!(mid > 0.4 && mid < 0.6, "mid-fade progress was {mid}");

        transition.advance(ms(config::REVEAL_FADE_MS));
        assert_eq!(transition.reveal_progress(), 1.0);

        // Idempotent once fully revealed.
        transition.advance(ms(5000));
        assert_eq!(transition.phase(), TransitionPhase::Revealed);
        assert_eq!(transition.reveal_progress(), 1.0);
    }
}
