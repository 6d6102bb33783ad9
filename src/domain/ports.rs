use crate::core::catalog::Catalog;
use crate::domain::model::RenderedCatalog;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 提供建立目錄與輸出所需的設定
pub trait CatalogSource: Send + Sync {
    fn build_catalog(&self) -> Result<Catalog>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn gated_message(&self) -> &str;
    fn page_title(&self) -> Option<&str>;
    fn filename_for(&self, format: &str) -> String;
}

/// Encodes a rendered catalog into one output format.
pub trait OutputFormat: Send + Sync {
    fn name(&self) -> &'static str;
    fn render(&self, catalog: &RenderedCatalog) -> Result<String>;
}

#[async_trait]
pub trait CatalogPipeline: Send + Sync {
    async fn build(&self) -> Result<Catalog>;
    async fn render(&self, catalog: &Catalog) -> Result<RenderedCatalog>;
    async fn publish(&self, rendered: RenderedCatalog) -> Result<Vec<String>>;
}
