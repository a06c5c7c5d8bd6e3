use anyhow::{Context, Result};
use service_pages_core::parse_site_toml;
use service_pages_validator::{ValidationReport, validate_site};
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> Result<()> {
    println!("Validating site at: {}", path.display());

    let config_path = path.join("site.toml");
    let site = parse_site_toml(&config_path)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    println!("✓ site.toml valid");
    println!("  Site: {}", site.config.site_name);
    println!("  Pages: {}", site.page_paths().len());

    let report = validate_site(&site, &path.join("public"));
    print_report(&report);

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!("\n✅ Site is ready to build");
    Ok(())
}

fn print_report(report: &ValidationReport) {
    if !report.info.is_empty() {
        println!();
        for line in &report.info {
            println!("  ℹ {}", line);
        }
    }
    if !report.warnings.is_empty() {
        println!();
        for line in &report.warnings {
            println!("  ⚠ {}", line);
        }
    }
    if !report.errors.is_empty() {
        println!();
        for line in &report.errors {
            println!("  ✗ {}", line);
        }
    }
}
