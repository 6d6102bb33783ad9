use course_catalog::core::resolver::DEFAULT_BRANCH;
use course_catalog::{CatalogError, LinkResolver};

const REPOSITORY: &str = "https://github.com/pycourse/python-language-features";

#[test]
fn test_repo_path_uses_master_by_default() {
    let resolver = LinkResolver::with_default_viewer(REPOSITORY).unwrap();
    let url = resolver.repo_path_default("4-python-decorators").unwrap();

    assert_eq!(DEFAULT_BRANCH, "master");
    assert!(url.as_str().ends_with("/tree/master/4-python-decorators"));
}

#[test]
fn test_empty_path_is_rejected() {
    let resolver = LinkResolver::with_default_viewer(REPOSITORY).unwrap();
    let err = resolver.repo_path_default("").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPathError { .. }));

    let err = resolver.notebook_path_default("").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPathError { .. }));
}

#[test]
fn test_notebook_path_is_pure() {
    let resolver = LinkResolver::with_default_viewer(REPOSITORY).unwrap();
    for (path, branch) in [
        ("1-python-magic-methods", "master"),
        ("5-typing-annotations/assets", "main"),
        ("3-python-properties-abc/properties.ipynb", "release/2024"),
    ] {
        let first = resolver.notebook_path(path, branch).unwrap();
        let second = resolver.notebook_path(path, branch).unwrap();
        assert_eq!(first, second);
        assert!(first.as_str().starts_with("https://nbviewer.org/github/pycourse/"));
    }
}

#[test]
fn test_custom_viewer_base() {
    let resolver = LinkResolver::new(REPOSITORY, "https://viewer.example.org/gh/").unwrap();
    let url = resolver.notebook_path_default("2-python-static-class-methods").unwrap();
    assert_eq!(
        url.as_str(),
        "https://viewer.example.org/gh/pycourse/python-language-features/tree/master/2-python-static-class-methods"
    );
}

#[test]
fn test_viewer_url_derives_from_repo_url() {
    let resolver = LinkResolver::with_default_viewer(REPOSITORY).unwrap();
    let repo = resolver.repo_path("4-python-decorators", "dev").unwrap();
    let viewer = resolver.to_viewer_url(&repo).unwrap();
    assert_eq!(viewer, resolver.notebook_path("4-python-decorators", "dev").unwrap());
    assert_eq!(repo.path(), viewer.path().trim_start_matches("/github"));
}
