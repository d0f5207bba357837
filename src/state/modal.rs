//! Modal dialog state for the UI.

/// Tagged union of the modal overlays; only one can be active at a time.
///
/// Mutated by event handlers, read by the renderer. While a modal is open it
/// consumes all key events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No modal is open.
    #[default]
    None,
    /// Informational alert with a non-interactive message.
    Alert {
        /// Message body shown in the dialog.
        message: String,
    },
    /// Overlay collecting the "select first N" count as free text.
    ///
    /// Stays open on validation failure so the user can correct the input.
    BulkSelect {
        /// Raw text typed so far (digits only by construction).
        input: String,
        /// Validation message from the last rejected submission, if any.
        error: Option<String>,
    },
    /// Help overlay with keybindings. Dismissed with Esc/Enter.
    Help,
}
