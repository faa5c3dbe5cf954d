//! Session, screen, and action models shared by the navigator and the UI.

pub mod action;
pub mod screen;
pub mod session;

pub use action::{Action, ActionName, Control, Effect, IntentId};
pub use screen::{NavState, ScreenDescriptor, ScreenHandle, ScreenType};
pub use session::{Role, Session, UserId};
