use anyhow::{Context, Result};
use futures::future::join_all;
use service_pages_core::{PageViewModel, parse_site_toml};
use service_pages_generator::{GeneratedSite, generate_site};
use service_pages_source::{resolve_page, source_from_site};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Build the static site for deployment
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    let site_toml_path = path.join("site.toml");
    if !site_toml_path.exists() {
        anyhow::bail!(
            "site.toml not found in {}\nRun 'service-pages init {}' first",
            path.display(),
            path.display()
        );
    }

    let site = parse_site_toml(&site_toml_path).context("Failed to parse site.toml")?;
    let source = source_from_site(&site).context("Failed to set up data source")?;

    println!("✓ Loaded: {}", site.config.site_name);
    for category in &site.categories {
        println!("  {}: {} services", category.name, category.registry.len());
    }
    println!();

    // Every page resolves independently against the same read-only site
    println!("🔎 Resolving pages...");
    let paths = site.page_paths();
    let resolved = join_all(
        paths
            .iter()
            .map(|p| resolve_page(&site, p.category, p.slug, source.as_ref())),
    )
    .await;
    let pages: Vec<PageViewModel<'_>> = resolved
        .into_iter()
        .collect::<service_pages_core::Result<Vec<_>>>()
        .context("Failed to resolve pages")?;
    let enriched = pages.iter().filter(|p| p.external.is_some()).count();
    println!(
        "   ✓ Resolved {} pages ({} with external data)",
        pages.len(),
        enriched
    );

    println!("📄 Rendering...");
    let generated = generate_site(&site, &pages);
    fs::create_dir_all(&output).context("Failed to create output directory")?;
    write_generated(&output, &generated)?;
    println!(
        "   ✓ Wrote {} pages and {} generated files",
        generated.pages.len(),
        generated.assets.len()
    );

    println!("📁 Copying public assets...");
    let copied = copy_public(&path.join("public"), &output)?;
    println!("   ✓ Copied {} files", copied);

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

fn write_generated(output: &Path, generated: &GeneratedSite) -> Result<()> {
    let files = generated
        .pages
        .iter()
        .map(|(rel, html)| (rel, html.as_bytes()))
        .chain(
            generated
                .assets
                .iter()
                .map(|(rel, data)| (rel, data.as_slice())),
        );

    for (rel, data) in files {
        let dst = output.join(rel);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&dst, data).with_context(|| format!("Failed to write {}", dst.display()))?;
    }
    Ok(())
}

/// Copy `public/` into the output root, preserving layout. Generated files
/// win over same-named public files.
fn copy_public(public_dir: &Path, output: &Path) -> Result<usize> {
    if !public_dir.exists() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(public_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let rel = entry
            .path()
            .strip_prefix(public_dir)
            .context("Public file outside public directory")?;
        let dst = output.join(rel);
        if dst.exists() {
            tracing::warn!(file = %rel.display(), "public file shadowed by generated output");
            continue;
        }
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dst)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }
    Ok(copied)
}
