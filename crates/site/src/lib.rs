//! Domain crate for the DevMeet community app.
//!
//! Holds every piece of state the UI gates on: the route table, the
//! page-transition coordinator, the boot splash, the welcome modal
//! controller, toasts, content catalogs, the chatbot, and the contact
//! form. The presentation crates can depend on it without circular
//! dependencies. Keeping the timing logic here also keeps it testable
//! without pulling in any egui rendering.

use bevy::prelude::*;

pub mod boot;
pub mod catalog;
pub mod chatbot;
pub mod config;
pub mod contact;
pub mod route;
pub mod toasts;
pub mod transition;
pub mod welcome;

#[cfg(test)]
mod integration_tests;

pub struct SitePlugin;

impl Plugin for SitePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<route::Route>();
        app.add_plugins((
            transition::PageTransitionPlugin,
            boot::BootSplashPlugin,
            welcome::WelcomeModalPlugin,
            toasts::ToastPlugin,
            catalog::CatalogPlugin,
            chatbot::ChatbotPlugin,
            contact::ContactPlugin,
        ));
    }
}
