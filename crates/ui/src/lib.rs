use bevy::prelude::*;

pub mod carousel;
pub mod chat_widget;
pub mod loading_overlay;
pub mod nav_bar;
pub mod pages;
pub mod theme;
pub mod toast_ui;
pub mod welcome_modal;

mod plugin_registration;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        plugin_registration::register_ui_systems(app);
    }
}
