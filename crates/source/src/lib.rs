// External service data sources and the page resolution pipeline

pub mod http;

use async_trait::async_trait;
use service_pages_core::{ExternalServiceData, PageViewModel, Result, Site, assemble};
use std::sync::Arc;

pub use http::HttpSource;

/// Backend that may know a better name and description for a service.
///
/// Errors are never fatal: `resolve_page` treats any failure as "no data".
#[async_trait]
pub trait ServiceDataSource: Send + Sync {
    async fn fetch(&self, category: &str, slug: &str) -> Result<ExternalServiceData>;
}

/// Source used when no backend is configured
pub struct NullSource;

#[async_trait]
impl ServiceDataSource for NullSource {
    async fn fetch(&self, _category: &str, _slug: &str) -> Result<ExternalServiceData> {
        Ok(ExternalServiceData::default())
    }
}

/// Pick the data source described by `site.toml`
pub fn source_from_site(site: &Site) -> Result<Arc<dyn ServiceDataSource>> {
    match &site.data_source {
        Some(config) => Ok(Arc::new(HttpSource::new(config)?)),
        None => Ok(Arc::new(NullSource)),
    }
}

/// Resolve `/{category}/{slug}` into a page.
///
/// Only an unknown category or slug is an error (`Error::NotFound`). Content
/// falls back to the category default and a failed fetch is logged and
/// dropped.
pub async fn resolve_page<'a>(
    site: &'a Site,
    category: &str,
    slug: &str,
    source: &dyn ServiceDataSource,
) -> Result<PageViewModel<'a>> {
    let category = site.category(category)?;
    let seo = category.lookup(slug)?;
    let content = category.resolve_content(slug);

    let external = match source.fetch(&category.slug, slug).await {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::warn!(
                category = %category.slug,
                slug,
                error = %e,
                "external service data unavailable, using static fallbacks"
            );
            None
        }
    };

    tracing::debug!(
        category = %category.slug,
        slug,
        dedicated_content = category.content.has_entry(slug),
        external = external.is_some(),
        "resolved page"
    );

    Ok(assemble(&site.config, category, seo, content, external))
}
