//! Layout model orchestrator following the RSB module specification.
//!
//! Downstream code imports model types from here while the implementation
//! details live in the private `core` and `layout` modules.

mod core;
mod layout;

pub use core::{
    Column, Flexibility, HorizontalAlignment, Padding, PullBoundary, Row, RowPatch,
    VerticalAlignment,
};
pub use layout::Layout;
