use crate::core::CatalogPipeline;
use crate::utils::error::Result;

pub struct CatalogEngine<P: CatalogPipeline> {
    pipeline: P,
}

impl<P: CatalogPipeline> CatalogEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Starting catalog build...");

        // Build
        let catalog = self.pipeline.build().await?;
        tracing::info!(
            "Loaded {} modules ({} gated)",
            catalog.len(),
            catalog.gated_count()
        );

        // Render
        let rendered = self.pipeline.render(&catalog).await?;
        tracing::info!("Rendered {} modules", rendered.modules.len());

        // Publish
        let written = self.pipeline.publish(rendered).await?;
        for path in &written {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(written)
    }
}
