use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::*;

/// Register all UI plugins and systems.
///
/// The Update systems are chained because egui panel order matters: the
/// nav bar claims the top strip, the page fills the remaining central
/// panel, and the floating layers (chat, modal, toasts, overlays) paint
/// over it, with the loading overlays last so they always win.
pub(crate) fn register_ui_systems(app: &mut App) {
    // Core egui
    app.add_plugins(EguiPlugin);

    // Feature plugins
    app.add_plugins(carousel::CarouselPlugin);

    // UI resources
    app.init_resource::<chat_widget::ChatWindow>();
    app.init_resource::<loading_overlay::LoadingDots>();

    // UI systems
    app.add_systems(Startup, theme::apply_site_theme);
    app.add_systems(
        Update,
        (
            nav_bar::nav_bar_ui,
            pages::page_ui,
            chat_widget::chat_widget_ui,
            welcome_modal::welcome_modal_ui,
            toast_ui::toast_ui,
            loading_overlay::loading_overlay_ui,
        )
            .chain(),
    );
}
