// Static site generation with Leptos SSR

pub mod components;
mod document;
pub mod render;
pub mod sitemap;

pub use document::{html_escape, render_document};
pub use render::{render_category_page, render_not_found, render_service_page};
pub use sitemap::sitemap_xml;

use service_pages_core::{PageViewModel, Site};

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,   // (path, html)
    pub assets: Vec<(String, Vec<u8>)>, // (path, data)
}

/// Render already-resolved service pages plus category indexes, 404 page,
/// sitemap and robots.txt. Paths are relative to the output root.
pub fn generate_site(site: &Site, pages: &[PageViewModel<'_>]) -> GeneratedSite {
    let mut generated = GeneratedSite {
        pages: Vec::with_capacity(pages.len() + site.categories.len() + 1),
        assets: Vec::new(),
    };

    for page in pages {
        generated.pages.push((
            format!("{}/{}/index.html", page.category.slug, page.slug),
            render_service_page(site, page, false),
        ));
    }

    for category in &site.categories {
        generated.pages.push((
            format!("{}/index.html", category.slug),
            render_category_page(site, category, false),
        ));
    }

    generated
        .pages
        .push(("404.html".to_string(), render_not_found(site, false)));

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    generated.assets.push((
        "sitemap.xml".to_string(),
        sitemap_xml(site, &today).into_bytes(),
    ));
    generated.assets.push((
        "robots.txt".to_string(),
        format!(
            "User-agent: *\nAllow: /\n\nSitemap: {}\n",
            site.config.absolute_url("/sitemap.xml")
        )
        .into_bytes(),
    ));

    tracing::debug!(
        pages = generated.pages.len(),
        assets = generated.assets.len(),
        "generated site"
    );

    generated
}
