//! State marker trait for overlays.

/// Marker for overlay state: cloneable, comparable, with a hidden default.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
