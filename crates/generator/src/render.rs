// Page renderers: compose components into full HTML documents

use crate::components::*;
use crate::document::render_document;
use chrono::Datelike;
use leptos::prelude::*;
use service_pages_core::{Category, Link, PageMetadata, PageViewModel, Site};

/// Footer contents for `site`, stamped with `year`
pub fn footer_data(site: &Site, year: i32) -> FooterData {
    let columns = site
        .footer_categories()
        .into_iter()
        .map(|category| FooterColumn {
            name: category.name.clone(),
            href: category.path(),
            links: category
                .registry
                .entries()
                .take(site.footer.featured_per_category)
                .map(|(slug, seo)| Link {
                    name: seo.breadcrumb.clone(),
                    href: category.service_path(slug),
                })
                .collect(),
            total: category.registry.len(),
        })
        .collect();

    FooterData {
        site_name: site.config.site_name.clone(),
        tagline: site.footer.tagline.clone(),
        service_area: site.footer.service_area.clone(),
        contact: site.contact.clone(),
        quick_links: site.footer.quick_links.clone(),
        columns,
        brochure: site.footer.brochure.clone(),
        social_links: site.footer.social_links.clone(),
        legal_links: site.footer.legal_links.clone(),
        year,
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Render `/{category}/{slug}`
pub fn render_service_page(site: &Site, page: &PageViewModel<'_>, is_preview: bool) -> String {
    let related: Vec<Link> = page
        .related
        .iter()
        .map(|r| Link {
            name: r.seo.breadcrumb.clone(),
            href: page.category.service_path(r.slug),
        })
        .collect();
    let footer = footer_data(site, current_year());

    let body = view! {
        <Hero
            trail=page.breadcrumbs.clone()
            label=page.category.label.clone()
            heading=page.service_name.clone()
            intro=page.content.intro.clone()
            contact=site.contact.clone()
        />
        <section>
            <div class="container layout">
                <ServiceDetails
                    service_name=page.service_name.clone()
                    description=page.detailed_description.clone()
                    features=page.content.features.clone()
                    benefits=page.content.benefits.clone()
                    quote=page.seo.description.clone()
                />
                <Sidebar
                    contact=site.contact.clone()
                    topic=page.seo.breadcrumb.clone()
                    category_href=page.category.path()
                    related=related.clone()
                />
            </div>
        </section>
        <WhyChoose site_name=site.config.site_name.clone() highlights=site.highlights.clone() />
        <FaqSection service_name=page.service_name.clone() faqs=page.content.faqs.clone() />
        <CallToAction service_name=page.service_name.clone() contact=site.contact.clone() />
        <ExploreMore
            category_name=page.category.name.clone()
            category_href=page.category.path()
            links=related
        />
        <Footer data=footer />
    }
    .to_html();

    render_document(
        &site.config.locale,
        &page.metadata,
        &page.schemas,
        &body,
        is_preview,
    )
}

/// Render `/{category}`: every service in registry order
pub fn render_category_page(site: &Site, category: &Category, is_preview: bool) -> String {
    let trail = vec![
        Link {
            name: "Home".to_string(),
            href: "/".to_string(),
        },
        Link {
            name: category.name.clone(),
            href: category.path(),
        },
    ];
    let services: Vec<(Link, String)> = category
        .registry
        .entries()
        .map(|(slug, seo)| {
            (
                Link {
                    name: seo.breadcrumb.clone(),
                    href: category.service_path(slug),
                },
                seo.description.clone(),
            )
        })
        .collect();
    let footer = footer_data(site, current_year());

    let body = view! {
        <CategoryListing
            trail=trail
            name=category.name.clone()
            label=category.label.clone()
            services=services
        />
        <Footer data=footer />
    }
    .to_html();

    let metadata = PageMetadata::for_category(&site.config, category);
    render_document(&site.config.locale, &metadata, &[], &body, is_preview)
}

/// Terminal page for unknown categories and slugs
pub fn render_not_found(site: &Site, is_preview: bool) -> String {
    let categories: Vec<Link> = site
        .categories
        .iter()
        .map(|category| Link {
            name: category.name.clone(),
            href: category.path(),
        })
        .collect();
    let footer = footer_data(site, current_year());

    let body = view! {
        <NotFound categories=categories />
        <Footer data=footer />
    }
    .to_html();

    let metadata = PageMetadata::not_found(&site.config);
    render_document(&site.config.locale, &metadata, &[], &body, is_preview)
}
