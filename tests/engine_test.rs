use anyhow::Result;
use course_catalog::{CatalogConfig, CatalogEngine, LocalStorage, SitePipeline};
use tempfile::TempDir;

fn config_for(output_path: &str) -> String {
    format!(
        r#"
[site]
name = "engine-test"
description = "Engine test"
version = "1.0.0"

[repository]
url = "https://github.com/pycourse/python-language-features"
default_branch = "main"

[render]
output_path = "{}"
output_formats = ["html", "table", "json", "csv"]
page_title = "Engine Test"

[render.filenames]
html = "syllabus.html"

[[modules]]
id = 5
title = "Typing Annotations"
icon = "type"
topics = ["typeguard"]

[modules.resources]
enroll_needed = true
code = "5-typing-annotations"

[[modules.resources.notebooks]]
name = "Typing"
path = "5-typing-annotations/typing.ipynb"

[[modules]]
id = 2
title = "Static and Class Methods"
icon = "layers"

[modules.resources]
enroll_needed = false
code = "2-python-static-class-methods"

[[modules.resources.notebooks]]
name = "Methods"
path = "2-python-static-class-methods/methods.ipynb"
"#,
        output_path
    )
}

#[tokio::test]
async fn test_end_to_end_writes_every_format() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let config = CatalogConfig::from_toml_str(&config_for(&output_path))?;
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = CatalogEngine::new(SitePipeline::new(storage, config));

    let written = engine.run().await?;
    assert_eq!(written.len(), 4);

    for name in ["syllabus.html", "catalog.txt", "catalog.json", "catalog.csv"] {
        let path = temp_dir.path().join(name);
        assert!(path.exists(), "{} was not written", name);

        let content = std::fs::read_to_string(&path)?;
        assert!(content.contains("Static and Class Methods"));
        assert!(
            content.contains("https://nbviewer.org/github/pycourse/python-language-features/tree/main/2-python-static-class-methods/methods.ipynb")
        );
        assert!(!content.contains("5-typing-annotations"));
    }

    let html = std::fs::read_to_string(temp_dir.path().join("syllabus.html"))?;
    assert!(html.contains("<title>Engine Test</title>"));
    assert!(html.contains("Enroll to access this resource"));

    Ok(())
}

#[tokio::test]
async fn test_invalid_path_aborts_before_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let content = config_for(&output_path).replace(
        "path = \"5-typing-annotations/typing.ipynb\"",
        "path = \"5-typing annotations/typing.ipynb\"",
    );
    let config = CatalogConfig::from_toml_str(&content)?;
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = CatalogEngine::new(SitePipeline::new(storage, config));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, course_catalog::CatalogError::InvalidPathError { .. }));
    assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_duplicate_ids_are_configuration_errors() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let content = config_for(&output_path).replace("id = 5", "id = 2");
    let config = CatalogConfig::from_toml_str(&content)?;
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = CatalogEngine::new(SitePipeline::new(storage, config));

    let err = engine.run().await.unwrap_err();
    assert!(err.is_configuration_error());
    assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 0);

    Ok(())
}
