//! One-shot boot splash timer.
//!
//! Shown once at application start for [`config::BOOT_SPLASH_MS`], then
//! gone for good. There is no retrigger path, so unlike the route
//! transition no cancellation handling is needed. The UI renders it above
//! everything else while active; nothing blocks on it, the rest of the app
//! initializes underneath.

use std::time::Duration;

use bevy::prelude::*;

use crate::config;

#[derive(Resource)]
pub struct BootSplash {
    timer: Timer,
    done: bool,
}

impl Default for BootSplash {
    fn default() -> Self {
        Self {
            timer: Timer::new(
                Duration::from_millis(config::BOOT_SPLASH_MS),
                TimerMode::Once,
            ),
            done: false,
        }
    }
}

impl BootSplash {
    /// Whether the splash is still covering the screen.
    pub fn active(&self) -> bool {
        !self.done
    }

    pub fn advance(&mut self, delta: Duration) {
        if self.done {
            return;
        }
        self.timer.tick(delta);
        if self.timer.finished() {
            self.done = true;
        }
    }
}

fn advance_boot_splash(time: Res<Time>, splash: Option<ResMut<BootSplash>>) {
    let Some(mut splash) = splash else {
        return;
    };
    splash.advance(time.delta());
}

pub struct BootSplashPlugin;

impl Plugin for BootSplashPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BootSplash>();
        app.add_systems(Update, advance_boot_splash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_until_timer_elapses() {
        let mut splash = BootSplash::default();
        assert!(splash.active());

        splash.advance(Duration::from_millis(config::BOOT_SPLASH_MS - 1));
        assert!(splash.active());

        splash.advance(Duration::from_millis(1));
        assert!(!splash.active());
    }

    #[test]
    fn test_never_reactivates() {
        let mut splash = BootSplash::default();
        splash.advance(Duration::from_millis(config::BOOT_SPLASH_MS));
        assert!(!splash.active());

        // Further time never brings it back.
        splash.advance(Duration::from_secs(60));
        assert!(!splash.active());
    }
}
