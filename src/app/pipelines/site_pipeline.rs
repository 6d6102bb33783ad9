use crate::app::formats::format_for;
use crate::core::catalog::Catalog;
use crate::core::render::CatalogRenderer;
use crate::core::{CatalogPipeline, CatalogSource, RenderedCatalog, Storage};
use crate::utils::error::Result;

/// Builds the catalog from a source, renders it and writes every configured format.
pub struct SitePipeline<S: Storage, C: CatalogSource> {
    storage: S,
    config: C,
    renderer: CatalogRenderer,
}

impl<S: Storage, C: CatalogSource> SitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let renderer = CatalogRenderer::new().with_gated_message(config.gated_message());
        Self {
            storage,
            config,
            renderer,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: CatalogSource> CatalogPipeline for SitePipeline<S, C> {
    async fn build(&self) -> Result<Catalog> {
        self.config.build_catalog()
    }

    async fn render(&self, catalog: &Catalog) -> Result<RenderedCatalog> {
        Ok(self.renderer.render(catalog))
    }

    async fn publish(&self, rendered: RenderedCatalog) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for name in self.config.output_formats() {
            let format = format_for(name, self.config.page_title())?;
            let body = format.render(&rendered)?;
            let filename = self.config.filename_for(name);

            tracing::debug!("Writing {} output ({} bytes) to {}", name, body.len(), filename);
            self.storage.write_file(&filename, body.as_bytes()).await?;

            written.push(
                std::path::Path::new(self.config.output_path())
                    .join(&filename)
                    .display()
                    .to_string(),
            );
        }

        Ok(written)
    }
}
