//! Capabilities the host UI provides to the navigator.

use crate::models::{Control, ScreenDescriptor, ScreenHandle, Session};

/// Builds and releases top-level screens.
pub trait ScreenFactory {
    /// Create the screen described by `descriptor`.
    ///
    /// `controls` lists the only intents the screen may emit.
    fn create_screen(
        &mut self,
        descriptor: &ScreenDescriptor,
        session: Option<&Session>,
        controls: &[Control],
    ) -> ScreenHandle;

    /// Release a screen created earlier. Called once per handle.
    fn dispose(&mut self, handle: ScreenHandle);
}

/// Notices, alerts and yes/no prompts.
pub trait Presenter {
    /// Show an informational notice.
    fn notify(&mut self, message: &str);

    /// Ask a yes/no question and wait for the answer.
    ///
    /// Anything other than an explicit yes, dismissal included, is `false`.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Show an error the user has to act on.
    fn alert(&mut self, message: &str);
}
