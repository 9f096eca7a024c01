use virtual_window::{ChildBox, RenderSurface, Size, Window, WindowRange};

/// A render surface that lays mounted children out in wrapped rows of uniform cells, the
/// way a flex-wrap container would.
///
/// The host mounts a range after every pass (see [`Self::mount`]); the engine then measures
/// the mounted children on the next pass. Changing the cell size simulates content that
/// finishes loading after first paint.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSurface {
    cell: Size,
    width: f64,
    container_offset: f64,
    offset_in_parent: f64,
    mounted: WindowRange,
    layout: Window,
}

impl GridSurface {
    /// `width` is the inner width children wrap within.
    pub fn new(cell: Size, width: f64) -> Self {
        Self {
            cell,
            width,
            container_offset: 0.0,
            offset_in_parent: 0.0,
            mounted: WindowRange::default(),
            layout: Window::EMPTY,
        }
    }

    /// Offset of the designated inner content container within the component.
    pub fn with_container_offset(mut self, offset: f64) -> Self {
        self.container_offset = offset;
        self
    }

    /// Offset of the component within an external scroll container.
    pub fn with_offset_in_parent(mut self, offset: f64) -> Self {
        self.offset_in_parent = offset;
        self
    }

    pub fn set_offset_in_parent(&mut self, offset: f64) {
        self.offset_in_parent = offset;
    }

    pub fn cell(&self) -> Size {
        self.cell
    }

    pub fn set_cell(&mut self, cell: Size) {
        self.cell = cell;
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn mount(&mut self, range: WindowRange) {
        self.mounted = range;
    }

    pub fn mounted(&self) -> WindowRange {
        self.mounted
    }

    /// The window last applied by the engine.
    pub fn layout(&self) -> Window {
        self.layout
    }

    /// Cells per row, at least one.
    pub fn per_row(&self) -> usize {
        let per_row = (self.width / self.cell.width).floor();
        if per_row.is_finite() && per_row >= 1.0 {
            per_row as usize
        } else {
            1
        }
    }
}

impl RenderSurface for GridSurface {
    fn for_each_child_box(&self, f: &mut dyn FnMut(ChildBox)) {
        let per_row = self.per_row();
        for i in 0..self.mounted.len() {
            let row = (i / per_row) as f64;
            let col = (i % per_row) as f64;
            f(ChildBox {
                top: self.layout.leading_padding + row * self.cell.height,
                left: col * self.cell.width,
                width: self.cell.width,
                height: self.cell.height,
            });
        }
    }

    fn container_offset(&self) -> f64 {
        self.container_offset
    }

    fn offset_in_parent(&self) -> f64 {
        self.offset_in_parent
    }

    fn apply_layout(&mut self, window: &Window) {
        self.layout = *window;
    }
}
