//! Navigation and session lifecycle.
//!
//! A screen reports a control activation as an [`IntentId`]. The
//! [`NavigationTable`] resolves it to an [`Action`] for the active screen.
//! Destructive actions go through the [`ConfirmationGate`], and the
//! [`NavigationController`] then performs the transition against the host's
//! [`ScreenFactory`] and [`Presenter`].
//!
//! [`IntentId`]: crate::models::IntentId
//! [`Action`]: crate::models::Action

pub mod controller;
pub mod gate;
pub mod surface;
pub mod table;


pub use controller::{NavigationController, Transition};
pub use gate::{ConfirmationGate, GateOutcome};
pub use surface::{Presenter, ScreenFactory};
pub use table::{NavigationTable, NavigationTableBuilder};
