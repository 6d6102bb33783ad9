pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "course-catalog")]
#[command(about = "Render the course catalog with gated resource links")]
pub struct CliConfig {
    /// Path to TOML catalog file (defaults to the built-in catalog)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the output directory from the config
    #[arg(long)]
    pub output_path: Option<String>,

    /// Override output formats (html, table, json, csv)
    #[arg(long, value_delimiter = ',')]
    pub formats: Vec<String>,

    /// Override the repository default branch
    #[arg(long)]
    pub branch: Option<String>,

    /// Print one format to stdout instead of writing files
    #[arg(long)]
    pub stdout: Option<String>,

    /// Resolve a repository-relative path and print its links
    #[arg(long)]
    pub resolve: Option<String>,

    /// Dry run - build and validate the catalog without writing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 將命令列覆蓋設定套用到目錄配置
    pub fn apply_overrides(&self, config: &mut toml_config::CatalogConfig) {
        if let Some(branch) = &self.branch {
            config.repository.default_branch = Some(branch.clone());
            tracing::info!("🔧 Default branch overridden to: {}", branch);
        }

        let render = config.render_mut();
        if let Some(path) = &self.output_path {
            render.output_path = Some(path.clone());
            tracing::info!("🔧 Output path overridden to: {}", path);
        }
        if !self.formats.is_empty() {
            render.output_formats = Some(self.formats.clone());
            tracing::info!("🔧 Output formats overridden to: {}", self.formats.join(", "));
        }
    }
}
