use crate::core::{OutputFormat, RenderedCatalog, RenderedLink};
use crate::utils::error::{CatalogError, Result};

/// One row per module; list cells are joined with `; `.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormat;

impl OutputFormat for CsvFormat {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn render(&self, catalog: &RenderedCatalog) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["id", "title", "icon", "topics", "code", "notebooks"])?;

        for module in &catalog.modules {
            let notebooks = module
                .notebooks
                .iter()
                .map(cell)
                .collect::<Vec<_>>()
                .join("; ");
            writer.write_record([
                module.id.to_string(),
                module.title.clone(),
                module.icon.clone(),
                module.topics.join("; "),
                cell(&module.code),
                notebooks,
            ])?;
        }

        let bytes = writer.into_inner().map_err(|e| CatalogError::RenderError {
            format: "csv".to_string(),
            message: e.to_string(),
        })?;
        String::from_utf8(bytes).map_err(|e| CatalogError::RenderError {
            format: "csv".to_string(),
            message: e.to_string(),
        })
    }
}

fn cell(link: &RenderedLink) -> String {
    match link {
        RenderedLink::Active { label, href } => format!("{} <{}>", label, href),
        RenderedLink::Disabled { label, message } => format!("{} [{}]", label, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RenderedModule;

    #[test]
    fn test_csv_header_and_rows() {
        let catalog = RenderedCatalog {
            modules: vec![RenderedModule {
                id: 3,
                title: "Properties, getters".to_string(),
                icon: "key".to_string(),
                topics: vec!["@property".to_string(), "setters".to_string()],
                code: RenderedLink::Active {
                    label: "Code".to_string(),
                    href: "https://github.com/o/r/tree/master/3".to_string(),
                },
                notebooks: vec![],
            }],
        };

        let csv = CsvFormat.render(&catalog).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("id,title,icon,topics,code,notebooks"));
        assert_eq!(
            lines.next(),
            Some("3,\"Properties, getters\",key,@property; setters,Code <https://github.com/o/r/tree/master/3>,")
        );
    }
}
