use crate::{ChildBox, Window};

/// The host's rendering surface.
///
/// The engine only reads geometry from it and tells it where the rendered block goes. Mounting
/// the items of the latest `update` payload is the host's job.
pub trait RenderSurface {
    /// Reports the bounding boxes of the currently mounted children, in render order.
    ///
    /// Surfaces that wrap their rows in a designated inner container report that container's
    /// children.
    fn for_each_child_box(&self, f: &mut dyn FnMut(ChildBox));

    /// Offset of the inner container from the component's own origin.
    fn container_offset(&self) -> f64 {
        0.0
    }

    /// Offset of the component inside an ancestor scroll container. Only used when the
    /// component does not scroll itself.
    fn offset_in_parent(&self) -> f64 {
        0.0
    }

    /// Applies the leading padding and total extent computed by the last pass.
    fn apply_layout(&mut self, window: &Window);
}
