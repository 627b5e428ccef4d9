//! Auto-scrolling marquee carousels.
//!
//! [`AutoScroll`] advances a horizontal scroll offset every frame to create
//! a marquee, pauses while the pointer hovers the strip, and hard-wraps to
//! zero at the end of one content copy. The strip renders its cards twice
//! so the wrap point is visually seamless. Hovering a specific card starts
//! a short eased animation that centers it in the viewport.
//!
//! The step systems only run while the owning page's route is active, and
//! leaving the page resets the state, so no frame callback ever mutates a
//! carousel the user can no longer see.

use std::time::Duration;

use bevy::prelude::*;
use bevy_egui::egui;

use site::catalog::MemberRoster;
use site::config;
use site::route::Route;

// =============================================================================
// Layout constants
// =============================================================================

pub const CARD_GAP: f32 = 12.0;
pub const MEMBER_CARD_WIDTH: f32 = 220.0;
pub const MEMBER_CARD_HEIGHT: f32 = 120.0;
pub const LEADER_CARD_WIDTH: f32 = 280.0;
pub const LEADER_CARD_HEIGHT: f32 = 110.0;

// =============================================================================
// Scroll state
// =============================================================================

/// An in-flight hover-centering animation.
struct Centering {
    from: f32,
    to: f32,
    elapsed: Duration,
}

/// Marquee scroll state for one carousel strip.
pub struct AutoScroll {
    offset: f32,
    hovering: bool,
    speed: f32,
    centering: Option<Centering>,
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

impl AutoScroll {
    pub fn new(speed: f32) -> Self {
        Self {
            offset: 0.0,
            hovering: false,
            speed,
            centering: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Hover pauses the marquee.
    pub fn is_paused(&self) -> bool {
        self.hovering
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
        if !hovering {
            self.centering = None;
        }
    }

    /// Begin easing toward `target` (clamped to the scrollable range),
    /// unless an animation toward the same target is already running.
    pub fn center_on(&mut self, target: f32, max_scroll: f32) {
        let to = target.clamp(0.0, max_scroll);
        if let Some(centering) = &self.centering {
            if (centering.to - to).abs() < 0.5 {
                return;
            }
        }
        self.centering = Some(Centering {
            from: self.offset,
            to,
            elapsed: Duration::ZERO,
        });
    }

    /// Advance one frame.
    ///
    /// While hovered only a pending centering animation moves the offset;
    /// otherwise the marquee advances by `speed * dt` and wraps to exactly
    /// zero at `max_scroll`.
    pub fn step(&mut self, delta: Duration, max_scroll: f32) {
        if max_scroll <= 0.0 {
            self.offset = 0.0;
            return;
        }
        if self.hovering {
            if let Some(centering) = &mut self.centering {
                centering.elapsed += delta;
                let t = (centering.elapsed.as_secs_f32()
                    / Duration::from_millis(config::CENTERING_MS).as_secs_f32())
                .min(1.0);
                self.offset = centering.from + (centering.to - centering.from) * ease_out_cubic(t);
                if t >= 1.0 {
                    self.centering = None;
                }
            }
            return;
        }
        self.offset += self.speed * delta.as_secs_f32();
        if self.offset >= max_scroll {
            self.offset = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.hovering = false;
        self.centering = None;
    }
}

// =============================================================================
// Resources
// =============================================================================

/// Scroll state for the community member strip.
#[derive(Resource)]
pub struct MemberCarousel(pub AutoScroll);

impl Default for MemberCarousel {
    fn default() -> Self {
        Self(AutoScroll::new(config::MEMBER_MARQUEE_SPEED))
    }
}

/// Scroll state for the leadership strip on the About page.
#[derive(Resource)]
pub struct LeaderCarousel(pub AutoScroll);

impl Default for LeaderCarousel {
    fn default() -> Self {
        Self(AutoScroll::new(config::LEADER_MARQUEE_SPEED))
    }
}

fn member_max_scroll(count: usize) -> f32 {
    (MEMBER_CARD_WIDTH + CARD_GAP) * count as f32
}

fn leader_max_scroll(count: usize) -> f32 {
    (LEADER_CARD_WIDTH + CARD_GAP) * count as f32
}

// =============================================================================
// Systems
// =============================================================================

fn step_member_carousel(
    time: Res<Time>,
    roster: Res<MemberRoster>,
    mut carousel: ResMut<MemberCarousel>,
) {
    let max_scroll = member_max_scroll(roster.members.len());
    carousel.0.step(time.delta(), max_scroll);
}

fn step_leader_carousel(
    time: Res<Time>,
    roster: Res<MemberRoster>,
    mut carousel: ResMut<LeaderCarousel>,
) {
    let max_scroll = leader_max_scroll(roster.leaders.len());
    carousel.0.step(time.delta(), max_scroll);
}

fn reset_member_carousel(mut carousel: ResMut<MemberCarousel>) {
    carousel.0.reset();
}

fn reset_leader_carousel(mut carousel: ResMut<LeaderCarousel>) {
    carousel.0.reset();
}

// =============================================================================
// Widgets
// =============================================================================

/// Render a marquee strip of `card_count` cards of `card_width`, duplicated
/// once so the wrap to zero is seamless. `draw_card` draws card `index` and
/// returns its response; hovering a card in the first copy centers it.
pub fn carousel_strip(
    ui: &mut egui::Ui,
    id: &str,
    scroll: &mut AutoScroll,
    card_count: usize,
    card_width: f32,
    mut draw_card: impl FnMut(&mut egui::Ui, usize) -> egui::Response,
) {
    if card_count == 0 {
        return;
    }
    let stride = card_width + CARD_GAP;
    let max_scroll = stride * card_count as f32;
    let viewport_width = ui.available_width();

    let output = egui::ScrollArea::horizontal()
        .id_salt(id)
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .scroll_offset(egui::vec2(scroll.offset(), 0.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for copy in 0..2 {
                    for index in 0..card_count {
                        let response = draw_card(ui, index);
                        if copy == 0 && response.hovered() {
                            let target = (index as f32 + 0.5) * stride - viewport_width / 2.0;
                            scroll.center_on(target, max_scroll);
                        }
                        ui.add_space(CARD_GAP);
                    }
                }
            });
        });

    scroll.set_hovering(ui.rect_contains_pointer(output.inner_rect));
}

/// A fixed-size card that senses hover and brightens under the pointer.
pub fn hover_card(
    ui: &mut egui::Ui,
    width: f32,
    height: f32,
    draw: impl FnOnce(&mut egui::Ui),
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let fill = if response.hovered() {
        egui::Color32::from_rgb(56, 62, 78)
    } else {
        egui::Color32::from_rgb(44, 48, 60)
    };
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(8), fill);
    let mut content = ui.new_child(egui::UiBuilder::new().max_rect(rect.shrink(12.0)));
    draw(&mut content);
    response
}

// =============================================================================
// Plugin
// =============================================================================

pub struct CarouselPlugin;

impl Plugin for CarouselPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MemberCarousel>();
        app.init_resource::<LeaderCarousel>();
        app.add_systems(
            Update,
            (
                step_member_carousel.run_if(in_state(Route::Community)),
                step_leader_carousel.run_if(in_state(Route::About)),
            ),
        );
        // Leaving the page must stop and clear the strip.
        app.add_systems(OnExit(Route::Community), reset_member_carousel);
        app.add_systems(OnExit(Route::About), reset_leader_carousel);
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

    #[test]
    fn test_marquee_is_monotone_then_wraps_to_exactly_zero() {
        let mut scroll = AutoScroll::new(100.0);
        let max = 250.0;

        let mut last = 0.0;
        let mut wrapped = false;
        for _ in 0..10 {
            scroll.step(ms(500), max);
            let offset = scroll.offset();
            assert!((0.0..max).contains(&offset), "offset {offset} out of range");
            if offset < last {
                assert_eq!(offset, 0.0, "wrap must land on exactly zero");
                wrapped = true;
            }
            last = offset;
        }
        assert!(wrapped, "ten half-second steps at 100 px/s must wrap a 250 px strip");
    }

    #[test]
    fn test_hover_pauses_the_marquee() {
        let mut scroll = AutoScroll::new(100.0);
        scroll.step(ms(500), 1000.0);
        let before = scroll.offset();

        scroll.set_hovering(true);
        assert!(scroll.is_paused());
        for _ in 0..5 {
            scroll.step(ms(500), 1000.0);
        }
        assert_eq!(scroll.offset(), before, "paused ticks must not move the offset");

        scroll.set_hovering(false);
        scroll.step(ms(500), 1000.0);
        assert!(scroll.offset() > before);
    }

    #[test]
    fn test_centering_eases_to_target_and_completes() {
        let mut scroll = AutoScroll::new(100.0);
        scroll.set_hovering(true);
        scroll.center_on(150.0, 1000.0);

        scroll.step(ms(config::CENTERING_MS / 2), 1000.0);
        let midway = scroll.offset();
        assert!(midway > 0.0 && midway < 150.0, "midway offset was {midway}");

        scroll.step(ms(config::CENTERING_MS), 1000.0);
        assert!((scroll.offset() - 150.0).abs() < 1e-3);

        // Finished animation stops moving the offset.
        scroll.step(ms(config::CENTERING_MS), 1000.0);
        assert!((scroll.offset() - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_centering_target_is_clamped() {
        let mut scroll = AutoScroll::new(100.0);
        scroll.set_hovering(true);

        scroll.center_on(-300.0, 500.0);
        scroll.step(ms(config::CENTERING_MS), 500.0);
        assert_eq!(scroll.offset(), 0.0);

        scroll.center_on(9999.0, 500.0);
        scroll.step(ms(config::CENTERING_MS), 500.0);
        assert!((scroll.offset() - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_leaving_hover_cancels_centering() {
        let mut scroll = AutoScroll::new(100.0);
        scroll.set_hovering(true);
        scroll.center_on(400.0, 1000.0);
        scroll.step(ms(100), 1000.0);
        let partway = scroll.offset();

        scroll.set_hovering(false);
        scroll.step(ms(100), 1000.0);
        // Marquee resumed from wherever the cancelled animation left off.
        assert!((scroll.offset() - (partway + 10.0)).abs() < 1e-3);
    }

    #[test]
    fn test_empty_strip_stays_at_zero() {
        let mut scroll = AutoScroll::new(100.0);
        scroll.step(ms(1000), 0.0);
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut scroll = AutoScroll::new(100.0);
        scroll.step(ms(500), 1000.0);
        scroll.set_hovering(true);
        scroll.center_on(200.0, 1000.0);

        scroll.reset();
        assert_eq!(scroll.offset(), 0.0);
        assert!(!scroll.is_paused());
    }
}
