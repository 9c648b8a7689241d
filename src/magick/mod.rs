//! The ImageMagick process seam: command building, execution and output parsing.

pub mod command;
pub mod metrics;
pub mod runner;
