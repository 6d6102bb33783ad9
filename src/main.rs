use clap::Parser;
use course_catalog::app::formats::format_for;
use course_catalog::core::CatalogSource;
use course_catalog::utils::error::{CatalogError, ErrorSeverity};
use course_catalog::utils::{logger, validation::Validate};
use course_catalog::{
    CatalogConfig, CatalogEngine, CatalogRenderer, CliConfig, LocalStorage, SitePipeline,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose, args.log_json);

    tracing::info!("🚀 Starting course-catalog");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 載入目錄配置
    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    args.apply_overrides(&mut config);

    if let Some(path) = &args.resolve {
        if let Err(e) = print_resolved(&config, path) {
            fail(&e);
        }
        return Ok(());
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        display_config_summary(&config);
        return Ok(());
    }

    if let Some(format) = &args.stdout {
        match render_to_string(&config, format) {
            Ok(output) => print!("{}", output),
            Err(e) => fail(&e),
        }
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SitePipeline::new(storage, config);
    let engine = CatalogEngine::new(pipeline);

    match engine.run().await {
        Ok(written) => {
            tracing::info!("✅ Catalog rendered successfully!");
            for path in written {
                println!("📁 {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Catalog build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(&e);
        }
    }

    Ok(())
}

fn load_config(args: &CliConfig) -> course_catalog::Result<CatalogConfig> {
    match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path);
            CatalogConfig::from_file(path)
        }
        None => {
            tracing::info!("📁 Using built-in catalog");
            CatalogConfig::embedded()
        }
    }
}

fn print_resolved(config: &CatalogConfig, path: &str) -> course_catalog::Result<()> {
    let resolver = config.resolver()?;
    let branch = config.default_branch();
    println!("Repository: {}", resolver.repo_path(path, branch)?);
    println!("Notebook:   {}", resolver.notebook_path(path, branch)?);
    Ok(())
}

fn render_to_string(config: &CatalogConfig, format: &str) -> course_catalog::Result<String> {
    let catalog = config.build_catalog()?;
    let rendered = CatalogRenderer::new()
        .with_gated_message(config.gated_message())
        .render(&catalog);
    format_for(format, config.page_title())?.render(&rendered)
}

fn display_config_summary(config: &CatalogConfig) {
    println!("📋 Catalog Summary:");
    println!("  Site: {} v{}", config.site.name, config.site.version);
    println!("  Repository: {}", config.repository.url);
    println!("  Branch: {}", config.default_branch());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));

    // validate() 已建立過一次目錄
    if let Ok(catalog) = config.build_catalog() {
        println!("  Modules: {} ({} gated)", catalog.len(), catalog.gated_count());
        for module in catalog.modules() {
            let marker = if module.resources.enroll_needed { "🔒" } else { "  " };
            println!(
                "   {} {:>2}. {} ({} notebooks)",
                marker,
                module.id,
                module.title,
                module.resources.notebooks.len()
            );
        }
    }
    println!();
}

fn fail(e: &CatalogError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
