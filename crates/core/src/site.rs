use crate::content::ContentTable;
use crate::error::{Error, Result};
use crate::registry::SlugRegistry;
use crate::types::*;

/// Fully loaded, immutable site definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub config: SiteConfig,
    pub contact: ContactInfo,
    pub footer: FooterConfig,
    pub highlights: Vec<Highlight>,
    pub categories: Vec<Category>,
    pub data_source: Option<DataSourceConfig>,
}

/// A service category served under `/{slug}/...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub slug: String,
    pub name: String,
    /// Hero badge text, e.g. "Financial Service · Nashik"
    pub label: String,
    pub registry: SlugRegistry,
    pub content: ContentTable,
}

/// One statically generated page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePath<'a> {
    pub category: &'a str,
    pub slug: &'a str,
}

impl PagePath<'_> {
    pub fn url_path(&self) -> String {
        format!("/{}/{}", self.category, self.slug)
    }
}

impl Site {
    pub fn category(&self, slug: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.slug == slug)
            .ok_or_else(|| Error::not_found(slug, ""))
    }

    /// Every page to pre-render, in config order
    pub fn page_paths(&self) -> Vec<PagePath<'_>> {
        self.categories
            .iter()
            .flat_map(|category| {
                category.registry.list_slugs().into_iter().map(|slug| PagePath {
                    category: category.slug.as_str(),
                    slug,
                })
            })
            .collect()
    }

    /// Categories in footer column order: `footer.column_order` first, then
    /// any category it leaves out, in config order
    pub fn footer_categories(&self) -> Vec<&Category> {
        let listed = self
            .footer
            .column_order
            .iter()
            .filter_map(|slug| self.categories.iter().find(|c| &c.slug == slug));
        let rest = self
            .categories
            .iter()
            .filter(|c| !self.footer.column_order.contains(&c.slug));
        listed.chain(rest).collect()
    }
}

impl Category {
    /// Registry lookup; an unknown slug is a terminal not-found
    pub fn lookup(&self, slug: &str) -> Result<&SeoRecord> {
        self.registry
            .lookup(slug)
            .ok_or_else(|| Error::not_found(&self.slug, slug))
    }

    pub fn resolve_content(&self, slug: &str) -> &ContentRecord {
        self.content.resolve(slug)
    }

    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }

    pub fn service_path(&self, slug: &str) -> String {
        format!("/{}/{}", self.slug, slug)
    }
}
