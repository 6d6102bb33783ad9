use crate::core::{OutputFormat, RenderedCatalog};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl OutputFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, catalog: &RenderedCatalog) -> Result<String> {
        let mut json = serde_json::to_string_pretty(catalog)?;
        json.push('\n');
        Ok(json)
    }
}
