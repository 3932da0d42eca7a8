//! Shared implementation of the `nbscript-convert` and `nbscript-run` binaries.

pub mod convert;
pub mod logging;
pub mod run;
