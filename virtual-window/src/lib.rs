//! A headless viewport windowing engine for very large, uniformly sized lists and grids.
//!
//! For host-side helpers (in-memory scroll elements and surfaces, a frame-driving controller
//! with animated navigation), see the `virtual-window-adapter` crate.
//!
//! The engine renders nothing. Given the scroll offset of a container and the size of one item
//! (explicit, or measured from the first mounted child), it computes which `[start, end)` slice
//! of the collection the host should mount, how much padding to put above it, and how tall the
//! whole virtual content is. Rows are detected from mounted children, so wrapped grid layouts
//! work without configuration.
//!
//! A host is expected to provide:
//! - a [`ScrollElement`] for the component itself (and optionally an ancestor or the page
//!   viewport as the scroll container)
//! - a [`RenderSurface`] that reports mounted child geometry
//! - a paint-frame tick that calls [`VirtualWindow::on_frame`]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod calculator;
mod frame;
mod notifier;
mod options;
mod probe;
mod scroll_source;
mod stabilizer;
mod state;
mod surface;
mod types;
mod window;


pub use calculator::calculate;
pub use frame::{FrameRequest, Wake};
pub use notifier::{ListenerId, RangeListener, UpdateListener};
pub use options::WindowOptions;
pub use probe::{Dimensions, ProbeInput, count_items_per_row, probe};
pub use scroll_source::{ScrollContainer, ScrollElement, SharedElement, SubscriptionId};
pub use state::WindowState;
pub use surface::RenderSurface;
pub use types::{ChildBox, Phase, ScrollEventKind, Size, SourceKind, Window, WindowRange};
pub use window::VirtualWindow;
