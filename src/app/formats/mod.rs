pub mod csv;
pub mod html;
pub mod json;
pub mod table;

use crate::core::OutputFormat;
use crate::utils::error::{CatalogError, Result};

pub use self::csv::CsvFormat;
pub use self::html::HtmlFormat;
pub use self::json::JsonFormat;
pub use self::table::TableFormat;

pub const SUPPORTED_FORMATS: [&str; 4] = ["html", "table", "json", "csv"];

pub fn default_filename(format: &str) -> String {
    match format {
        "html" => "index.html".to_string(),
        "table" => "catalog.txt".to_string(),
        other => format!("catalog.{}", other),
    }
}

/// 依名稱建立輸出格式
pub fn format_for(name: &str, page_title: Option<&str>) -> Result<Box<dyn OutputFormat>> {
    match name {
        "html" => Ok(Box::new(match page_title {
            Some(title) => HtmlFormat::with_page_title(title),
            None => HtmlFormat::new(),
        })),
        "table" => Ok(Box::new(TableFormat)),
        "json" => Ok(Box::new(JsonFormat)),
        "csv" => Ok(Box::new(CsvFormat)),
        other => Err(CatalogError::InvalidConfigValueError {
            field: "render.output_formats".to_string(),
            value: other.to_string(),
            reason: format!(
                "Unsupported format. Valid formats: {}",
                SUPPORTED_FORMATS.join(", ")
            ),
        }),
    }
}
