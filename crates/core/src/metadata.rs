use crate::site::Category;
use crate::types::{SeoRecord, SiteConfig};
use serde::Serialize;

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

/// Head metadata for one rendered document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    /// Metadata for `/{category}/{slug}`
    pub fn for_service(site: &SiteConfig, category: &Category, seo: &SeoRecord) -> Self {
        let url = site.absolute_url(&category.service_path(&seo.slug));
        Self::shareable(site, &seo.title, &seo.description, seo.keywords.clone(), url)
    }

    /// Metadata for the `/{category}` index page
    pub fn for_category(site: &SiteConfig, category: &Category) -> Self {
        let title = format!("{} | {}", category.name, site.site_name);
        let description = format!(
            "{} offered by {}: {}.",
            category.name,
            site.site_name,
            category
                .registry
                .entries()
                .map(|(_, seo)| seo.breadcrumb.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        let url = site.absolute_url(&category.path());
        Self::shareable(site, &title, &description, Vec::new(), url)
    }

    /// Metadata for unknown routes; nothing is shareable or canonical
    pub fn not_found(site: &SiteConfig) -> Self {
        Self {
            title: format!("Service Not Found | {}", site.site_name),
            description: String::new(),
            keywords: Vec::new(),
            canonical: None,
            open_graph: None,
            twitter: None,
        }
    }

    fn shareable(
        site: &SiteConfig,
        title: &str,
        description: &str,
        keywords: Vec<String>,
        url: String,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            keywords,
            canonical: Some(url.clone()),
            open_graph: Some(OpenGraph {
                title: title.to_string(),
                description: description.to_string(),
                url,
                site_name: site.site_name.clone(),
                locale: site.locale.clone(),
                kind: "website".to_string(),
                images: vec![OgImage {
                    url: site.default_image_url(),
                    width: OG_IMAGE_WIDTH,
                    height: OG_IMAGE_HEIGHT,
                }],
            }),
            twitter: Some(TwitterCard {
                card: "summary_large_image".to_string(),
                title: title.to_string(),
                description: description.to_string(),
            }),
        }
    }
}
