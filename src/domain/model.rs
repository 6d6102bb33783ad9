use serde::{Deserialize, Serialize};
use url::Url;

/// 課程大綱中的一個單元
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub topics: Vec<String>,
    pub resources: Resources,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub enroll_needed: bool,
    pub code: Url,
    pub notebooks: Vec<NotebookLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookLink {
    pub name: String,
    pub url: Url,
}

/// Display-ready projection of a catalog. Gated links carry no URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCatalog {
    pub modules: Vec<RenderedModule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedModule {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub topics: Vec<String>,
    pub code: RenderedLink,
    pub notebooks: Vec<RenderedLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RenderedLink {
    Active { label: String, href: String },
    Disabled { label: String, message: String },
}

impl RenderedLink {
    pub fn label(&self) -> &str {
        match self {
            RenderedLink::Active { label, .. } | RenderedLink::Disabled { label, .. } => label,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            RenderedLink::Active { href, .. } => Some(href),
            RenderedLink::Disabled { .. } => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RenderedLink::Active { .. })
    }
}
