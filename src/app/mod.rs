// Application layer: output formats and the site pipeline built on the core.

pub mod formats;
pub mod pipelines;
