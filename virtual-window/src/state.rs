use crate::{Phase, Window, WindowRange};

/// A lightweight snapshot of the engine's window bookkeeping.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize` so hosts can ship
/// it across a message boundary (e.g. to a devtools panel).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    /// The most recently computed window.
    pub window: Window,
    /// Bounds of the last published window. `None` until the first publication.
    pub previous: Option<WindowRange>,
    pub phase: Phase,
}
