//! Host-side helpers for the `virtual-window` crate.
//!
//! The `virtual-window` engine is headless: it talks to a scroll element and a render surface
//! through traits and never draws anything. This crate provides small, framework-neutral
//! implementations of both, plus a frame-driving controller:
//!
//! - [`SimScrollElement`]: an in-memory scroll element (offset, client size, listeners)
//! - [`GridSurface`]: a surface that lays mounted children out in wrapped rows
//! - [`Controller`]: owns the engine and the surface, runs one pass per `tick`, and drives
//!   animated navigation to an item whose position may still be settling
//!
//! They are useful for headless hosts, terminal front ends and tests.
#![forbid(unsafe_code)]

mod animation;
mod controller;
mod element;
mod surface;

#[cfg(test)]
mod tests;

pub use animation::{Easing, IndexAnimation};
pub use controller::{Controller, FRAME_MS};
pub use element::SimScrollElement;
pub use surface::GridSurface;
