use crate::app::formats::{default_filename, SUPPORTED_FORMATS};
use crate::core::catalog::Catalog;
use crate::core::render::DEFAULT_GATED_MESSAGE;
use crate::core::resolver::{LinkResolver, DEFAULT_BRANCH, DEFAULT_VIEWER_BASE};
use crate::core::{CatalogSource, CourseModule, NotebookLink, Resources};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_required_field, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// 內建的課程目錄
pub const EMBEDDED_CATALOG: &str = include_str!("../../catalog.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    pub site: SiteConfig,
    pub repository: RepositoryConfig,
    pub render: Option<RenderConfig>,
    #[serde(default)]
    pub modules: Vec<ModuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    pub url: String,
    pub default_branch: Option<String>,
    pub viewer_base: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub output_path: Option<String>,
    pub output_formats: Option<Vec<String>>,
    pub gated_message: Option<String>,
    pub page_title: Option<String>,
    pub filenames: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    pub id: u32,
    pub title: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub resources: ResourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceConfig {
    // 必填：拼錯或漏寫時不可預設為公開
    pub enroll_needed: bool,
    pub code: String,
    pub branch: Option<String>,
    #[serde(default)]
    pub notebooks: Vec<NotebookConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotebookConfig {
    pub name: String,
    pub path: String,
    pub branch: Option<String>,
}

const DEFAULT_OUTPUT_PATH: &str = "./site";

impl CatalogConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: Self =
            toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        // 未指定輸出格式時只產生 HTML
        let formats = &mut config.render_mut().output_formats;
        if formats.as_ref().map_or(true, Vec::is_empty) {
            *formats = Some(vec!["html".to_string()]);
        }

        Ok(config)
    }

    /// 內建目錄
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CATALOG)
    }

    /// 替換環境變數 (例如 ${CATALOG_REPOSITORY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("site.name", &self.site.name)?;
        validate_url("repository.url", &self.repository.url)?;
        if let Some(viewer) = &self.repository.viewer_base {
            validate_url("repository.viewer_base", viewer)?;
        }
        validate_path("render.output_path", self.output_path())?;

        for format in self.output_formats() {
            if !SUPPORTED_FORMATS.contains(&format.as_str()) {
                return Err(CatalogError::InvalidConfigValueError {
                    field: "render.output_formats".to_string(),
                    value: format.clone(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        SUPPORTED_FORMATS.join(", ")
                    ),
                });
            }
        }

        // 路徑與欄位在建立目錄時一併檢查
        self.build_catalog().map(|_| ())
    }

    pub fn resolver(&self) -> Result<LinkResolver> {
        LinkResolver::new(
            &self.repository.url,
            self.repository
                .viewer_base
                .as_deref()
                .unwrap_or(DEFAULT_VIEWER_BASE),
        )
    }

    pub fn default_branch(&self) -> &str {
        self.repository
            .default_branch
            .as_deref()
            .unwrap_or(DEFAULT_BRANCH)
    }

    /// Resolves every module's paths and returns the validated catalog.
    pub fn build_catalog(&self) -> Result<Catalog> {
        let resolver = self.resolver()?;
        let modules = self
            .modules
            .iter()
            .map(|module| self.resolve_module(&resolver, module))
            .collect::<Result<Vec<_>>>()?;
        Catalog::new(modules)
    }

    fn resolve_module(&self, resolver: &LinkResolver, module: &ModuleConfig) -> Result<CourseModule> {
        let prefix = format!("modules[id={}]", module.id);
        let title = validate_required_field(&format!("{}.title", prefix), &module.title)?;
        let icon = validate_required_field(&format!("{}.icon", prefix), &module.icon)?;

        let resources = &module.resources;
        let branch = resources.branch.as_deref().unwrap_or(self.default_branch());
        let code = resolver.repo_path(&resources.code, branch)?;

        let notebooks = resources
            .notebooks
            .iter()
            .map(|nb| -> Result<NotebookLink> {
                let nb_branch = nb.branch.as_deref().unwrap_or(branch);
                Ok(NotebookLink {
                    name: nb.name.clone(),
                    url: resolver.notebook_path(&nb.path, nb_branch)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CourseModule {
            id: module.id,
            title: title.clone(),
            icon: icon.clone(),
            topics: module.topics.clone(),
            resources: Resources {
                enroll_needed: resources.enroll_needed,
                code,
                notebooks,
            },
        })
    }

    pub fn output_path(&self) -> &str {
        self.render
            .as_ref()
            .and_then(|r| r.output_path.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    pub fn output_formats(&self) -> &[String] {
        self.render
            .as_ref()
            .and_then(|r| r.output_formats.as_deref())
            .unwrap_or(&[])
    }

    /// 套用命令列覆蓋設定
    pub fn render_mut(&mut self) -> &mut RenderConfig {
        self.render.get_or_insert_with(|| RenderConfig {
            output_path: None,
            output_formats: None,
            gated_message: None,
            page_title: None,
            filenames: None,
        })
    }
}

impl CatalogSource for CatalogConfig {
    fn build_catalog(&self) -> Result<Catalog> {
        CatalogConfig::build_catalog(self)
    }

    fn output_path(&self) -> &str {
        CatalogConfig::output_path(self)
    }

    fn output_formats(&self) -> &[String] {
        CatalogConfig::output_formats(self)
    }

    fn gated_message(&self) -> &str {
        self.render
            .as_ref()
            .and_then(|r| r.gated_message.as_deref())
            .unwrap_or(DEFAULT_GATED_MESSAGE)
    }

    fn page_title(&self) -> Option<&str> {
        self.render.as_ref().and_then(|r| r.page_title.as_deref())
    }

    fn filename_for(&self, format: &str) -> String {
        self.render
            .as_ref()
            .and_then(|r| r.filenames.as_ref())
            .and_then(|names| names.get(format).cloned())
            .unwrap_or_else(|| default_filename(format))
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
