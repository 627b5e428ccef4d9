//! Loading and boot splash overlays.
//!
//! Two full-screen layers driven by the `site` timers: the route-transition
//! loader covers the page for the whole dwell and swallows all pointer
//! input, and the one-shot boot splash paints opaquely above everything
//! (including the loader) until its timer runs out. An animated dots
//! effect shows the application has not frozen.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use site::boot::BootSplash;
use site::transition::PageTransition;

use crate::theme;

// =============================================================================
// Resources
// =============================================================================

/// Tracks the animated dots shared by both overlays.
#[derive(Resource)]
pub struct LoadingDots {
    /// Number of dots currently shown (cycles 1 -> 2 -> 3 -> 1 ...).
    pub dots: usize,
    /// Timer controlling the animation speed.
    pub timer: Timer,
}

impl Default for LoadingDots {
    fn default() -> Self {
        Self {
            dots: 1,
            timer: Timer::from_seconds(0.4, TimerMode::Repeating),
        }
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Renders the transition loader and/or boot splash when active.
pub fn loading_overlay_ui(
    mut contexts: EguiContexts,
    transition: Option<Res<PageTransition>>,
    boot: Option<Res<BootSplash>>,
    time: Res<Time>,
    mut animation: ResMut<LoadingDots>,
) {
    let route_loading = transition.as_ref().map_or(false, |t| t.is_loading());
    let boot_active = boot.as_ref().map_or(false, |b| b.active());

    if !route_loading && !boot_active {
        // Reset so the animation starts fresh next time.
        animation.dots = 1;
        animation.timer.reset();
        return;
    }

    animation.timer.tick(time.delta());
    if animation.timer.just_finished() {
        animation.dots = animation.dots % 3 + 1;
    }
    let dots_str = ".".repeat(animation.dots);

    let ctx = contexts.ctx_mut();
    let screen_rect = ctx.screen_rect();

    if route_loading {
        // Full-screen overlay that consumes input; the page underneath
        // must not receive pointer events during the dwell.
        egui::Area::new(egui::Id::new("route_loading_overlay"))
            .fixed_pos(screen_rect.min)
            .order(egui::Order::Foreground)
            .interactable(true)
            .show(ctx, |ui| {
                let painter = ui.painter();
                painter.rect_filled(
                    screen_rect,
                    egui::CornerRadius::ZERO,
                    egui::Color32::from_black_alpha(220),
                );
                ui.allocate_rect(screen_rect, egui::Sense::click_and_drag());
            });

        egui::Window::new("route_loading_window")
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .default_width(240.0)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(14.0);
                    ui.label(
                        egui::RichText::new(format!("Loading{dots_str}"))
                            .size(theme::FONT_HEADING)
                            .color(theme::TEXT_HEADING),
                    );
                    ui.add_space(14.0);
                });
            });
    }

    if boot_active {
        // Topmost layer: the splash sits above the loader too.
        egui::Area::new(egui::Id::new("boot_splash"))
            .fixed_pos(screen_rect.min)
            .order(egui::Order::Tooltip)
            .interactable(true)
            .show(ctx, |ui| {
                let painter = ui.painter();
                painter.rect_filled(
                    screen_rect,
                    egui::CornerRadius::ZERO,
                    theme::SPLASH_BACKGROUND,
                );
                ui.allocate_rect(screen_rect, egui::Sense::click_and_drag());
            });

        egui::Area::new(egui::Id::new("boot_splash_wordmark"))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .order(egui::Order::Tooltip)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("DevMeet")
                            .size(56.0)
                            .strong()
                            .color(theme::ACCENT),
                    );
                    ui.label(
                        egui::RichText::new(format!("warming up{dots_str}"))
                            .size(16.0)
                            .color(theme::TEXT_MUTED),
                    );
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots_cycle_one_to_three() {
        let mut dots = 1;
        let mut seen = vec![dots];
        for _ in 0..5 {
            dots = dots % 3 + 1;
            seen.push(dots);
        }
        assert_eq!(seen, vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_dots_default_starts_at_one() {
        let animation = LoadingDots::default();
        assert_eq!(animation.dots, 1);
    }
}
