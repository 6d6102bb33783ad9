use crate::core::{OutputFormat, RenderedCatalog, RenderedLink, RenderedModule};
use crate::utils::error::Result;
use std::fmt::Write;

/// Syllabus table markup. Styling is left to the host page.
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    page_title: Option<String>,
}

impl HtmlFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以最簡單的 HTML 文件包住表格
    pub fn with_page_title(title: impl Into<String>) -> Self {
        Self {
            page_title: Some(title.into()),
        }
    }

    fn render_table(&self, catalog: &RenderedCatalog) -> String {
        let mut out = String::new();
        out.push_str("<table class=\"syllabus\">\n");
        out.push_str("  <thead>\n    <tr><th>#</th><th>Module</th><th>Topics</th><th>Resources</th></tr>\n  </thead>\n");
        out.push_str("  <tbody>\n");
        for module in &catalog.modules {
            render_row(&mut out, module);
        }
        out.push_str("  </tbody>\n</table>\n");
        out
    }
}

impl OutputFormat for HtmlFormat {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, catalog: &RenderedCatalog) -> Result<String> {
        let table = self.render_table(catalog);
        let Some(title) = &self.page_title else {
            return Ok(table);
        };

        let title = escape(title);
        Ok(format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{table}</body>\n</html>\n"
        ))
    }
}

fn render_row(out: &mut String, module: &RenderedModule) {
    // String 寫入不會失敗
    let _ = writeln!(out, "    <tr data-module-id=\"{}\">", module.id);
    let _ = writeln!(out, "      <td>{}</td>", module.id);
    let _ = writeln!(
        out,
        "      <td><span class=\"icon\" data-icon=\"{}\"></span> {}</td>",
        escape(&module.icon),
        escape(&module.title)
    );

    out.push_str("      <td><ul class=\"topics\">");
    for topic in &module.topics {
        let _ = write!(out, "<li>{}</li>", escape(topic));
    }
    out.push_str("</ul></td>\n");

    out.push_str("      <td><ul class=\"resources\">");
    for link in std::iter::once(&module.code).chain(module.notebooks.iter()) {
        out.push_str("<li>");
        render_link(out, link);
        out.push_str("</li>");
    }
    out.push_str("</ul></td>\n");
    out.push_str("    </tr>\n");
}

fn render_link(out: &mut String, link: &RenderedLink) {
    match link {
        RenderedLink::Active { label, href } => {
            let _ = write!(
                out,
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                escape(href),
                escape(label)
            );
        }
        RenderedLink::Disabled { label, message } => {
            let _ = write!(
                out,
                "<span class=\"disabled\" aria-disabled=\"true\" tabindex=\"0\" title=\"{}\">{}</span>",
                escape(message),
                escape(label)
            );
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(gated: bool) -> RenderedCatalog {
        let code = if gated {
            RenderedLink::Disabled {
                label: "Code".to_string(),
                message: "Enroll to access this resource".to_string(),
            }
        } else {
            RenderedLink::Active {
                label: "Code".to_string(),
                href: "https://github.com/o/r/tree/master/x?a=1&b=2".to_string(),
            }
        };
        RenderedCatalog {
            modules: vec![RenderedModule {
                id: 7,
                title: "Magic <Methods>".to_string(),
                icon: "wand".to_string(),
                topics: vec!["__add__ & __mul__".to_string()],
                code,
                notebooks: vec![],
            }],
        }
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let html = HtmlFormat::new().render(&rendered(false)).unwrap();
        assert!(html.contains("Magic &lt;Methods&gt;"));
        assert!(html.contains("__add__ &amp; __mul__"));
        assert!(html.contains("href=\"https://github.com/o/r/tree/master/x?a=1&amp;b=2\""));
        assert!(html.starts_with("<table"));
    }

    #[test]
    fn test_disabled_link_markup() {
        let html = HtmlFormat::new().render(&rendered(true)).unwrap();
        assert!(html.contains("aria-disabled=\"true\""));
        assert!(html.contains("title=\"Enroll to access this resource\""));
        assert!(!html.contains("href="));
    }

    #[test]
    fn test_page_wrapper() {
        let html = HtmlFormat::with_page_title("Advanced Python")
            .render(&rendered(false))
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Advanced Python</h1>"));
        assert!(html.contains("<table class=\"syllabus\">"));
    }
}
