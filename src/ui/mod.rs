//! GUI host for the navigator.

pub mod app;
pub mod components;
pub mod host;
pub mod screens;

pub use app::App;
pub use host::{NavCommand, NavigatorHandle, ScreenView, UiEvent, spawn_navigator};
