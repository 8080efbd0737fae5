//! Intent marker trait.

/// Marker for overlay actions: key presses routed to a dialog, or game
/// events such as the session reaching its terminal state.
pub trait Intent: Send + 'static {}
