//! schema.org JSON-LD payloads emitted alongside each page.

use crate::site::Category;
use crate::types::{Faq, Link, SeoRecord, SiteConfig};
use serde_json::{Value, json};

pub fn service_schema(site: &SiteConfig, category: &Category, seo: &SeoRecord) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "name": seo.title,
        "description": seo.description,
        "serviceType": category.name,
        "url": site.absolute_url(&category.service_path(&seo.slug)),
        "keywords": seo.keywords.join(", "),
        "provider": {
            "@type": "ProfessionalService",
            "name": site.site_name,
            "url": site.base_url,
            "image": site.default_image_url(),
        },
    })
}

/// Breadcrumb trail; `href`s are site-relative and made absolute here
pub fn breadcrumb_schema(site: &SiteConfig, trail: &[Link]) -> Value {
    let items: Vec<Value> = trail
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.name,
                "item": site.absolute_url(&crumb.href),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

pub fn faq_schema(faqs: &[Faq]) -> Value {
    let questions: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig {
            base_url: "https://example.com".to_string(),
            site_name: "Example".to_string(),
            locale: "en_IN".to_string(),
            default_image: "/og.jpg".to_string(),
        }
    }

    #[test]
    fn test_breadcrumb_positions_and_absolute_urls() {
        let trail = vec![
            Link {
                name: "Home".to_string(),
                href: "/".to_string(),
            },
            Link {
                name: "Financial Services".to_string(),
                href: "/financial".to_string(),
            },
        ];
        let schema = breadcrumb_schema(&site(), &trail);
        let items = schema["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["item"], "https://example.com/");
        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["item"], "https://example.com/financial");
    }

    #[test]
    fn test_faq_schema() {
        let faqs = vec![Faq {
            question: "Is the first consultation free?".to_string(),
            answer: "Yes.".to_string(),
        }];
        let schema = faq_schema(&faqs);
        assert_eq!(schema["@type"], "FAQPage");
        assert_eq!(schema["mainEntity"][0]["name"], "Is the first consultation free?");
        assert_eq!(schema["mainEntity"][0]["acceptedAnswer"]["text"], "Yes.");
    }
}
