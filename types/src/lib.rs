//! Core domain types for Embedscope.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies:
//! the animation [`Step`], the four [`Architecture`] presets with their static
//! diagram layouts, and the [`render`] function that turns a step into highlight flags.

mod architecture;
mod diagram;
mod step;
pub mod ui;

pub use architecture::{Architecture, ParseArchitectureError, StepInfo};
pub use diagram::{ArrowDirection, Diagram, Node, NodeKind, RenderedNode, render};
pub use step::{STEP_COUNT, Step, StepOutOfRange};
