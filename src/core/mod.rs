pub mod catalog;
pub mod engine;
pub mod gate;
pub mod render;
pub mod resolver;

pub use crate::domain::model::{CourseModule, NotebookLink, RenderedCatalog, RenderedLink, RenderedModule, Resources};
pub use crate::domain::ports::{CatalogPipeline, CatalogSource, OutputFormat, Storage};
pub use crate::utils::error::Result;
