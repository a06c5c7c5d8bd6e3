use crate::document::html_escape;
use service_pages_core::Site;

/// sitemap.xml listing every category index and service page
pub fn sitemap_xml(site: &Site, lastmod: &str) -> String {
    let mut urls = Vec::new();
    for category in &site.categories {
        urls.push((site.config.absolute_url(&category.path()), "0.7"));
        for slug in category.registry.list_slugs() {
            urls.push((
                site.config.absolute_url(&category.service_path(slug)),
                "0.8",
            ));
        }
    }

    let entries: String = urls
        .iter()
        .map(|(loc, priority)| {
            format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <priority>{}</priority>\n  </url>\n",
                html_escape(loc),
                lastmod,
                priority
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}</urlset>\n",
        entries
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use service_pages_core::{SAMPLE_SITE_TOML, parse_site_toml_str};

    #[test]
    fn test_sitemap_lists_every_page() {
        let site = parse_site_toml_str(SAMPLE_SITE_TOML).unwrap();
        let xml = sitemap_xml(&site, "2025-01-01");

        let services = site.page_paths().len();
        assert_eq!(xml.matches("<url>").count(), services + site.categories.len());
        assert!(xml.contains(&format!(
            "<loc>{}/financial/term-loans</loc>",
            site.config.base_url
        )));
        assert!(xml.contains("<lastmod>2025-01-01</lastmod>"));
        assert!(xml.ends_with("</urlset>\n"));
    }
}
