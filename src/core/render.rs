use crate::core::catalog::Catalog;
use crate::core::gate::{AccessGate, EnrollmentGate};
use crate::domain::model::{CourseModule, RenderedCatalog, RenderedLink, RenderedModule};

pub const DEFAULT_GATED_MESSAGE: &str = "Enroll to access this resource";
pub const CODE_LABEL: &str = "Code";

/// Projects a catalog into display structures, withholding gated links.
pub struct CatalogRenderer<G: AccessGate = EnrollmentGate> {
    gate: G,
    gated_message: String,
}

impl CatalogRenderer<EnrollmentGate> {
    pub fn new() -> Self {
        Self::with_gate(EnrollmentGate)
    }
}

impl Default for CatalogRenderer<EnrollmentGate> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: AccessGate> CatalogRenderer<G> {
    pub fn with_gate(gate: G) -> Self {
        Self {
            gate,
            gated_message: DEFAULT_GATED_MESSAGE.to_string(),
        }
    }

    pub fn with_gated_message(mut self, message: impl Into<String>) -> Self {
        self.gated_message = message.into();
        self
    }

    pub fn gated_message(&self) -> &str {
        &self.gated_message
    }

    pub fn render(&self, catalog: &Catalog) -> RenderedCatalog {
        RenderedCatalog {
            modules: catalog
                .modules()
                .iter()
                .map(|module| self.render_module(module))
                .collect(),
        }
    }

    pub fn render_module(&self, module: &CourseModule) -> RenderedModule {
        let gated = self.gate.is_gated(module);
        if gated {
            tracing::debug!("Module {} is gated, withholding its links", module.id);
        }

        let link = |label: &str, href: &url::Url| {
            if gated {
                RenderedLink::Disabled {
                    label: label.to_string(),
                    message: self.gated_message.clone(),
                }
            } else {
                RenderedLink::Active {
                    label: label.to_string(),
                    href: href.to_string(),
                }
            }
        };

        RenderedModule {
            id: module.id,
            title: module.title.clone(),
            icon: module.icon.clone(),
            topics: module.topics.clone(),
            code: link(CODE_LABEL, &module.resources.code),
            notebooks: module
                .resources
                .notebooks
                .iter()
                .map(|nb| link(&nb.name, &nb.url))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{NotebookLink, Resources};
    use url::Url;

    fn module(id: u32, enroll_needed: bool) -> CourseModule {
        CourseModule {
            id,
            title: format!("Module {}", id),
            icon: "star".to_string(),
            topics: vec!["first".to_string(), "second".to_string()],
            resources: Resources {
                enroll_needed,
                code: Url::parse(&format!("https://github.com/o/r/tree/master/{}", id)).unwrap(),
                notebooks: vec![
                    NotebookLink {
                        name: "Part A".to_string(),
                        url: Url::parse(&format!("https://nbviewer.org/github/o/r/tree/master/{}/a", id))
                            .unwrap(),
                    },
                    NotebookLink {
                        name: "Part B".to_string(),
                        url: Url::parse(&format!("https://nbviewer.org/github/o/r/tree/master/{}/b", id))
                            .unwrap(),
                    },
                ],
            },
        }
    }

    #[test]
    fn test_open_module_renders_active_links_in_order() {
        let catalog = Catalog::new(vec![module(1, false)]).unwrap();
        let rendered = CatalogRenderer::new().render(&catalog);
        let m = &rendered.modules[0];

        assert_eq!(m.topics, vec!["first", "second"]);
        assert_eq!(m.code.href(), Some("https://github.com/o/r/tree/master/1"));
        let labels: Vec<&str> = m.notebooks.iter().map(|l| l.label()).collect();
        assert_eq!(labels, vec!["Part A", "Part B"]);
        assert!(m.notebooks.iter().all(RenderedLink::is_active));
    }

    #[test]
    fn test_gated_module_hides_urls() {
        let catalog = Catalog::new(vec![module(2, true)]).unwrap();
        let rendered = CatalogRenderer::new()
            .with_gated_message("Sign up first")
            .render(&catalog);
        let m = &rendered.modules[0];

        assert_eq!(m.title, "Module 2");
        assert_eq!(m.topics.len(), 2);
        assert!(!m.code.is_active());
        assert_eq!(m.notebooks.len(), 2);
        for link in std::iter::once(&m.code).chain(m.notebooks.iter()) {
            assert_eq!(link.href(), None);
            match link {
                RenderedLink::Disabled { message, .. } => assert_eq!(message, "Sign up first"),
                RenderedLink::Active { .. } => panic!("gated link rendered as active"),
            }
        }
    }

    #[test]
    fn test_custom_gate_predicate() {
        let catalog = Catalog::new(vec![module(1, false), module(2, false)]).unwrap();
        let renderer = CatalogRenderer::with_gate(|m: &CourseModule| m.id > 1);
        let rendered = renderer.render(&catalog);
        assert!(rendered.modules[0].code.is_active());
        assert!(!rendered.modules[1].code.is_active());
    }

    #[test]
    fn test_render_is_idempotent() {
        let catalog = Catalog::new(vec![module(2, true), module(1, false)]).unwrap();
        let renderer = CatalogRenderer::new();
        assert_eq!(renderer.render(&catalog), renderer.render(&catalog));
    }
}
