pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::site_pipeline::SitePipeline;
pub use config::{cli::LocalStorage, toml_config::CatalogConfig};
pub use crate::core::{
    catalog::Catalog,
    engine::CatalogEngine,
    gate::{AccessGate, EnrollmentGate},
    render::CatalogRenderer,
    resolver::LinkResolver,
};
pub use utils::error::{CatalogError, Result};
