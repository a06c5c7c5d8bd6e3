use crate::content::ContentTable;
use crate::error::{Error, Result};
use crate::registry::{SlugRegistry, is_valid_slug};
use crate::site::{Category, Site};
use crate::types::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use url::Url;

/// Starter site.toml, written by `service-pages init`
pub const SAMPLE_SITE_TOML: &str = include_str!("../assets/site.toml");

const DEFAULT_FEATURED_PER_CATEGORY: usize = 5;

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: SiteConfig,
    contact: ContactInfo,
    footer: RawFooter,
    #[serde(default)]
    data_source: Option<DataSourceConfig>,
    #[serde(default)]
    highlight: Vec<Highlight>,
    default_content: ContentRecord,
    #[serde(default)]
    category: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
struct RawFooter {
    tagline: String,
    #[serde(default)]
    service_area: String,
    #[serde(default)]
    quick_links: Vec<Link>,
    #[serde(default)]
    legal_links: Vec<Link>,
    #[serde(default)]
    social_links: Vec<Link>,
    brochure: Option<Link>,
    featured_per_category: Option<usize>,
    #[serde(default)]
    column_order: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    slug: String,
    name: String,
    label: String,
    #[serde(default)]
    service: Vec<SeoRecord>,
    #[serde(default)]
    content: HashMap<String, RawContent>,
}

/// Dedicated content; omitted fields are taken from `default_content`
#[derive(Debug, Deserialize)]
struct RawContent {
    intro: Option<String>,
    features: Option<Vec<String>>,
    benefits: Option<Vec<Benefit>>,
    faqs: Option<Vec<Faq>>,
}

impl RawContent {
    fn merge_with(self, default: &ContentRecord) -> ContentRecord {
        ContentRecord {
            intro: self.intro.unwrap_or_else(|| default.intro.clone()),
            features: self.features.unwrap_or_else(|| default.features.clone()),
            benefits: self.benefits.unwrap_or_else(|| default.benefits.clone()),
            faqs: self.faqs.unwrap_or_else(|| default.faqs.clone()),
        }
    }
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Site> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<Site> {
    let raw: RawConfig = toml::from_str(content)?;

    let config = SiteConfig {
        base_url: validate_base_url(&raw.site.base_url, "site.base_url")?,
        default_image: validate_site_path(&raw.site.default_image, "site.default_image")?,
        ..raw.site
    };

    let data_source = match raw.data_source {
        Some(source) => Some(DataSourceConfig {
            endpoint: validate_base_url(&source.endpoint, "data_source.endpoint")?,
            timeout_secs: source.timeout_secs,
        }),
        None => None,
    };

    let footer = FooterConfig {
        tagline: raw.footer.tagline,
        service_area: raw.footer.service_area,
        quick_links: raw.footer.quick_links,
        legal_links: raw.footer.legal_links,
        social_links: raw.footer.social_links,
        brochure: raw.footer.brochure,
        featured_per_category: raw
            .footer
            .featured_per_category
            .unwrap_or(DEFAULT_FEATURED_PER_CATEGORY),
        column_order: raw.footer.column_order,
    };

    let mut categories = Vec::with_capacity(raw.category.len());
    for raw_category in raw.category {
        if !is_valid_slug(&raw_category.slug) {
            return Err(Error::ConfigParse(format!(
                "Invalid category slug '{}': use lowercase letters, digits and hyphens",
                raw_category.slug
            )));
        }
        if categories
            .iter()
            .any(|c: &Category| c.slug == raw_category.slug)
        {
            return Err(Error::ConfigParse(format!(
                "Duplicate category '{}'",
                raw_category.slug
            )));
        }
        if raw_category.service.is_empty() {
            return Err(Error::ConfigParse(format!(
                "Category '{}' has no services",
                raw_category.slug
            )));
        }

        let registry = SlugRegistry::new(raw_category.service).map_err(|e| {
            Error::ConfigParse(format!("category '{}': {}", raw_category.slug, e))
        })?;

        let entries = raw_category
            .content
            .into_iter()
            .map(|(slug, entry)| (slug, entry.merge_with(&raw.default_content)))
            .collect();
        let content = ContentTable::new(entries, raw.default_content.clone()).map_err(|e| {
            Error::ConfigParse(format!("category '{}': {}", raw_category.slug, e))
        })?;

        categories.push(Category {
            slug: raw_category.slug,
            name: raw_category.name,
            label: raw_category.label,
            registry,
            content,
        });
    }

    if categories.is_empty() {
        return Err(Error::ConfigParse(
            "At least one [[category]] is required".to_string(),
        ));
    }

    for (i, slug) in footer.column_order.iter().enumerate() {
        if !categories.iter().any(|c| &c.slug == slug) {
            return Err(Error::ConfigParse(format!(
                "footer.column_order names unknown category '{}'",
                slug
            )));
        }
        if footer.column_order[..i].contains(slug) {
            return Err(Error::ConfigParse(format!(
                "footer.column_order lists '{}' twice",
                slug
            )));
        }
    }

    tracing::debug!(
        categories = categories.len(),
        pages = categories.iter().map(|c| c.registry.len()).sum::<usize>(),
        "parsed site config"
    );

    Ok(Site {
        config,
        contact: raw.contact,
        footer,
        highlights: raw.highlight,
        categories,
        data_source,
    })
}

/// Require an absolute http(s) URL with a host and no query or fragment.
/// The returned form is normalized and has no trailing slash.
fn validate_base_url(raw: &str, field_name: &str) -> Result<String> {
    let invalid = |reason: &str| {
        Error::ConfigParse(format!(
            "'{}' must be an absolute http(s) URL ({}), got '{}'",
            field_name, reason, raw
        ))
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed"));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Require a site-relative path such as "/og-image.jpg"
fn validate_site_path(path: &str, field_name: &str) -> Result<String> {
    if !path.starts_with('/') || path.contains("..") || path.contains(char::is_whitespace) {
        return Err(Error::ConfigParse(format!(
            "'{}' must be a site-relative path starting with '/', got '{}'",
            field_name, path
        )));
    }
    Ok(path.to_string())
}

#[cfg(test)]
pub(crate) fn sample_site() -> Site {
    parse_site_toml_str(SAMPLE_SITE_TOML).unwrap()
}
