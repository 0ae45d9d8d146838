//! Aspect-preserving resize options for image dimensions.
pub mod cli;
pub mod logging;
pub mod report;
pub mod scaling;
