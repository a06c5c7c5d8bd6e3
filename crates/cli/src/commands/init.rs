use anyhow::{Context, Result};
use service_pages_core::{SAMPLE_SITE_TOML, parse_site_toml};
use std::fs;
use std::path::{Path, PathBuf};

/// Initialize a site directory with a sample `site.toml` and an empty
/// `public/` for static assets.
///
/// The directory is created if needed. An existing `site.toml` is never
/// overwritten.
pub async fn run(path: PathBuf) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    let site_toml_path = path.join("site.toml");
    if site_toml_path.exists() {
        anyhow::bail!(
            "site.toml already exists at {}\nHint: Delete it first or use a different directory",
            site_toml_path.display()
        );
    }

    create_structure(&path)?;
    fs::write(&site_toml_path, SAMPLE_SITE_TOML)
        .with_context(|| format!("Failed to write {}", site_toml_path.display()))?;

    // The shipped sample must always load
    let site = parse_site_toml(&site_toml_path).context("Failed to parse generated site.toml")?;
    tracing::debug!(categories = site.categories.len(), "wrote sample site.toml");

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  ├── site.toml    ← Edit contact details, services and content");
    println!("  └── public/      ← Share image, brochure and other static files");

    println!("\nNext steps:");
    println!("  1. Edit site.toml (base_url, contact, categories)");
    println!(
        "  2. Add {} (1200x630) to public/",
        site.config.default_image.trim_start_matches('/')
    );
    println!("  3. Preview: service-pages preview {}", path.display());

    Ok(())
}

fn create_structure(base: &Path) -> Result<()> {
    fs::create_dir_all(base.join("public"))
        .with_context(|| format!("Failed to create {}", base.join("public").display()))?;
    Ok(())
}
