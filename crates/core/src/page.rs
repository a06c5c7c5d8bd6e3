use crate::metadata::PageMetadata;
use crate::registry::SlugRegistry;
use crate::schema::{breadcrumb_schema, faq_schema, service_schema};
use crate::site::Category;
use crate::types::{ContentRecord, ExternalServiceData, Link, SeoRecord, SiteConfig};
use serde_json::Value;

/// Maximum number of cross-links shown on a service page
pub const RELATED_LIMIT: usize = 5;

/// Everything the renderer needs for one service page
#[derive(Debug, Clone, PartialEq)]
pub struct PageViewModel<'a> {
    pub category: &'a Category,
    pub slug: &'a str,
    pub seo: &'a SeoRecord,
    pub content: &'a ContentRecord,
    pub external: Option<ExternalServiceData>,
    pub service_name: String,
    pub detailed_description: String,
    pub related: Vec<RelatedService<'a>>,
    /// Home -> category -> current page
    pub breadcrumbs: Vec<Link>,
    pub metadata: PageMetadata,
    /// Service, BreadcrumbList and FAQPage JSON-LD, in that order
    pub schemas: Vec<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedService<'a> {
    pub slug: &'a str,
    pub seo: &'a SeoRecord,
}

impl PageViewModel<'_> {
    pub fn path(&self) -> String {
        self.category.service_path(self.slug)
    }
}

/// Combine looked-up records into a page. Pure; no I/O.
pub fn assemble<'a>(
    site: &SiteConfig,
    category: &'a Category,
    seo: &'a SeoRecord,
    content: &'a ContentRecord,
    external: Option<ExternalServiceData>,
) -> PageViewModel<'a> {
    let service_name = derive_service_name(seo, external.as_ref());
    let detailed_description = external
        .as_ref()
        .and_then(ExternalServiceData::detailed_desc)
        .unwrap_or(seo.description.as_str())
        .to_string();

    let breadcrumbs = vec![
        Link {
            name: "Home".to_string(),
            href: "/".to_string(),
        },
        Link {
            name: category.name.clone(),
            href: category.path(),
        },
        Link {
            name: seo.breadcrumb.clone(),
            href: category.service_path(&seo.slug),
        },
    ];

    let schemas = vec![
        service_schema(site, category, seo),
        breadcrumb_schema(site, &breadcrumbs),
        faq_schema(&content.faqs),
    ];

    PageViewModel {
        category,
        slug: &seo.slug,
        seo,
        content,
        related: related_services(&category.registry, &seo.slug, RELATED_LIMIT),
        external,
        service_name,
        detailed_description,
        breadcrumbs,
        metadata: PageMetadata::for_service(site, category, seo),
        schemas,
    }
}

/// External name when present, else the SEO title up to the first '|'
pub fn derive_service_name(seo: &SeoRecord, external: Option<&ExternalServiceData>) -> String {
    if let Some(name) = external.and_then(ExternalServiceData::name) {
        return name.to_string();
    }
    seo.title
        .split('|')
        .next()
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// First `limit` registry entries other than `current`, in registry order
pub fn related_services<'a>(
    registry: &'a SlugRegistry,
    current: &str,
    limit: usize,
) -> Vec<RelatedService<'a>> {
    registry
        .entries()
        .filter(|(slug, _)| *slug != current)
        .take(limit)
        .map(|(slug, seo)| RelatedService { slug, seo })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sample_site;

    fn external(name: Option<&str>, desc: Option<&str>) -> ExternalServiceData {
        ExternalServiceData {
            name: name.map(str::to_string),
            detailed_desc: desc.map(str::to_string),
        }
    }

    #[test]
    fn test_resolved_content_is_complete_for_every_registry_slug() {
        let site = sample_site();
        for category in &site.categories {
            for slug in category.registry.list_slugs() {
                let content = category.resolve_content(slug);
                assert!(!content.features.is_empty(), "{}", slug);
                assert!(!content.benefits.is_empty(), "{}", slug);
                assert!(!content.faqs.is_empty(), "{}", slug);
            }
        }
    }

    #[test]
    fn test_related_excludes_current_and_is_bounded() {
        let site = sample_site();
        for category in &site.categories {
            let expected = RELATED_LIMIT.min(category.registry.len() - 1);
            for slug in category.registry.list_slugs() {
                let seo = category.lookup(slug).unwrap();
                let page = assemble(
                    &site.config,
                    category,
                    seo,
                    category.resolve_content(slug),
                    None,
                );
                assert_eq!(page.related.len(), expected, "{}", slug);
                assert!(page.related.iter().all(|r| r.slug != slug));
            }
        }
    }

    #[test]
    fn test_related_keeps_registry_order() {
        let site = sample_site();
        let category = site.category("financial").unwrap();
        let slugs = category.registry.list_slugs();

        let related = related_services(&category.registry, slugs[1], RELATED_LIMIT);
        let related_slugs: Vec<&str> = related.iter().map(|r| r.slug).collect();
        let mut expected: Vec<&str> = slugs.iter().copied().filter(|s| *s != slugs[1]).collect();
        expected.truncate(RELATED_LIMIT);
        assert_eq!(related_slugs, expected);
    }

    #[test]
    fn test_related_for_slug_outside_registry() {
        let site = sample_site();
        let category = site.category("financial").unwrap();
        let related = related_services(&category.registry, "not-listed", 3);
        assert_eq!(related.len(), 3);
        assert_eq!(related[0].slug, category.registry.list_slugs()[0]);
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let site = sample_site();
        let category = site.category("financial").unwrap();
        let seo = category.lookup("term-loans").unwrap();
        let content = category.resolve_content("term-loans");
        let data = Some(external(Some("Term Loans"), Some("Detailed")));

        let first = assemble(&site.config, category, seo, content, data.clone());
        let second = assemble(&site.config, category, seo, content, data);
        assert_eq!(first, second);
    }

    #[test]
    fn test_term_loans_page() {
        let site = sample_site();
        let category = site.category("financial").unwrap();
        let seo = category.lookup("term-loans").unwrap();
        let content = category.resolve_content("term-loans");
        assert!(!std::ptr::eq(content, category.content.default_record()));

        let page = assemble(&site.config, category, seo, content, None);
        assert_eq!(page.service_name, "Term Loans for Industrial Projects in Nashik");
        assert_eq!(page.detailed_description, seo.description);
        assert_eq!(page.content.faqs.len(), 2);
        assert_eq!(page.path(), "/financial/term-loans");

        let page = assemble(
            &site.config,
            category,
            seo,
            content,
            Some(external(Some("Industrial Term Loans"), Some("From the backend"))),
        );
        assert_eq!(page.service_name, "Industrial Term Loans");
        assert_eq!(page.detailed_description, "From the backend");
    }

    #[test]
    fn test_subsidy_compliance_uses_default_content() {
        let site = sample_site();
        let category = site.category("financial").unwrap();
        let seo = category.lookup("subsidy-compliance").unwrap();
        let content = category.resolve_content("subsidy-compliance");
        assert!(std::ptr::eq(content, category.content.default_record()));

        let page = assemble(&site.config, category, seo, content, None);
        assert_eq!(page.content.faqs.len(), 2);
        assert_eq!(
            page.content.faqs[0].question,
            "Why choose Bhumi Industrial Consultant?"
        );
    }

    #[test]
    fn test_blank_external_name_falls_back_to_title() {
        let site = sample_site();
        let category = site.category("financial").unwrap();
        let seo = category.lookup("term-loans").unwrap();
        let name = derive_service_name(seo, Some(&external(Some("  "), None)));
        assert_eq!(name, "Term Loans for Industrial Projects in Nashik");
    }

    #[test]
    fn test_service_name_without_separator_uses_whole_title() {
        let seo = SeoRecord {
            slug: "plain".to_string(),
            title: "  Plain Title  ".to_string(),
            description: String::new(),
            keywords: vec![],
            breadcrumb: "Plain".to_string(),
        };
        assert_eq!(derive_service_name(&seo, None), "Plain Title");
    }

    #[test]
    fn test_schemas_and_breadcrumbs() {
        let site = sample_site();
        let category = site.category("financial").unwrap();
        let seo = category.lookup("term-loans").unwrap();
        let page = assemble(
            &site.config,
            category,
            seo,
            category.resolve_content("term-loans"),
            None,
        );

        let names: Vec<&str> = page.breadcrumbs.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Financial Services", seo.breadcrumb.as_str()]);

        assert_eq!(page.schemas.len(), 3);
        assert_eq!(page.schemas[0]["@type"], "Service");
        assert_eq!(page.schemas[1]["@type"], "BreadcrumbList");
        assert_eq!(page.schemas[2]["@type"], "FAQPage");
        assert_eq!(page.schemas[2]["mainEntity"].as_array().unwrap().len(), 2);
    }
}
