use crate::domain::model::CourseModule;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, validate_web_url};
use std::collections::HashSet;

/// Validated, id-ordered list of course modules. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    modules: Vec<CourseModule>,
}

impl Catalog {
    pub fn new(mut modules: Vec<CourseModule>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(modules.len());
        for module in &modules {
            validate_module(module)?;
            if !seen.insert(module.id) {
                return Err(CatalogError::DuplicateModuleError { id: module.id });
            }
        }

        modules.sort_by_key(|m| m.id);
        tracing::debug!("Catalog built with {} modules", modules.len());
        Ok(Self { modules })
    }

    pub fn modules(&self) -> &[CourseModule] {
        &self.modules
    }

    pub fn get(&self, id: u32) -> Option<&CourseModule> {
        self.modules
            .binary_search_by_key(&id, |m| m.id)
            .ok()
            .map(|idx| &self.modules[idx])
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn gated_count(&self) -> usize {
        self.modules
            .iter()
            .filter(|m| m.resources.enroll_needed)
            .count()
    }
}

fn validate_module(module: &CourseModule) -> Result<()> {
    let prefix = format!("modules[id={}]", module.id);

    validate_positive_number(&format!("{}.id", prefix), module.id, 1)?;
    validate_non_empty_string(&format!("{}.title", prefix), &module.title)?;
    validate_non_empty_string(&format!("{}.icon", prefix), &module.icon)?;

    for (idx, topic) in module.topics.iter().enumerate() {
        validate_non_empty_string(&format!("{}.topics[{}]", prefix, idx), topic)?;
    }

    validate_web_url(&format!("{}.resources.code", prefix), &module.resources.code)?;
    for (idx, notebook) in module.resources.notebooks.iter().enumerate() {
        let field = format!("{}.resources.notebooks[{}]", prefix, idx);
        validate_non_empty_string(&format!("{}.name", field), &notebook.name)?;
        validate_web_url(&format!("{}.url", field), &notebook.url)?;
    }

    Ok(())
}
