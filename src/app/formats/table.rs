use crate::core::{OutputFormat, RenderedCatalog, RenderedLink};
use crate::utils::error::Result;
use tabled::{settings::Style, Table, Tabled};

/// Table row for terminal output
#[derive(Tabled)]
struct ModuleRow {
    #[tabled(rename = "#")]
    id: u32,
    #[tabled(rename = "Module")]
    title: String,
    #[tabled(rename = "Topics")]
    topics: String,
    #[tabled(rename = "Resources")]
    resources: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableFormat;

impl OutputFormat for TableFormat {
    fn name(&self) -> &'static str {
        "table"
    }

    fn render(&self, catalog: &RenderedCatalog) -> Result<String> {
        let rows: Vec<ModuleRow> = catalog
            .modules
            .iter()
            .map(|m| ModuleRow {
                id: m.id,
                title: m.title.clone(),
                topics: m.topics.join("\n"),
                resources: std::iter::once(&m.code)
                    .chain(m.notebooks.iter())
                    .map(describe)
                    .collect::<Vec<_>>()
                    .join("\n"),
            })
            .collect();

        let mut table = Table::new(&rows).with(Style::rounded()).to_string();
        table.push('\n');
        Ok(table)
    }
}

fn describe(link: &RenderedLink) -> String {
    match link {
        RenderedLink::Active { label, href } => format!("{}: {}", label, href),
        RenderedLink::Disabled { label, message } => format!("{} (locked: {})", label, message),
    }
}
