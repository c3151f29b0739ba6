//! Markup generation orchestrator following the RSB module specification.

mod core;

pub use core::{Artifacts, MARKUP_FILE, STYLE_FILE, generate};
