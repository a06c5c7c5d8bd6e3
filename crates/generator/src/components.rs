// Leptos SSR components for service pages and the shared footer

use leptos::prelude::*;
use service_pages_core::{Benefit, ContactInfo, Faq, Highlight, Link};

/// Everything the footer shows, detached from `Site` so it can be moved
/// into the component.
#[derive(Debug, Clone)]
pub struct FooterData {
    pub site_name: String,
    pub tagline: String,
    pub service_area: String,
    pub contact: ContactInfo,
    pub quick_links: Vec<Link>,
    pub columns: Vec<FooterColumn>,
    pub brochure: Option<Link>,
    pub social_links: Vec<Link>,
    pub legal_links: Vec<Link>,
    pub year: i32,
}

/// Featured services of one category
#[derive(Debug, Clone)]
pub struct FooterColumn {
    pub name: String,
    pub href: String,
    pub links: Vec<Link>,
    /// Size of the whole registry, for "View All (N Services)"
    pub total: usize,
}

#[component]
pub fn Breadcrumbs(trail: Vec<Link>) -> impl IntoView {
    let last = trail.len().saturating_sub(1);
    view! {
        <nav aria-label="Breadcrumb" class="breadcrumb">
            {trail
                .into_iter()
                .enumerate()
                .map(|(i, crumb)| {
                    if i == last {
                        view! { <span class="current">{crumb.name}</span> }.into_any()
                    } else {
                        view! {
                            <a href=crumb.href>{crumb.name}</a>
                            <span class="sep">"/"</span>
                        }
                            .into_any()
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn Hero(
    trail: Vec<Link>,
    label: String,
    heading: String,
    intro: String,
    contact: ContactInfo,
) -> impl IntoView {
    let tel = contact.tel_href();
    view! {
        <section class="hero">
            <div class="container">
                <Breadcrumbs trail=trail />
                <span class="badge">{label}</span>
                <h1>{heading}</h1>
                <p class="lead">{intro}</p>
                <div class="actions">
                    <a class="btn btn-primary" href="/contact">"Get Free Consultation"</a>
                    <a class="btn btn-ghost" href=tel>{contact.phone_display}</a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ServiceDetails(
    service_name: String,
    description: String,
    features: Vec<String>,
    benefits: Vec<Benefit>,
    quote: String,
) -> impl IntoView {
    view! {
        <div class="details">
            <h2>{format!("Complete {} Services", service_name)}</h2>
            <p class="description">{description}</p>

            <h3>"What We Offer"</h3>
            <ul class="features">
                {features
                    .into_iter()
                    .map(|feature| view! { <li class="feature">{feature}</li> })
                    .collect_view()}
            </ul>

            <h3>{format!("Why Choose Our {}?", service_name)}</h3>
            <div class="benefits">
                {benefits
                    .into_iter()
                    .enumerate()
                    .map(|(i, benefit)| {
                        view! {
                            <div class="benefit">
                                <div class="benefit-index">{(i + 1).to_string()}</div>
                                <div>
                                    <h4>{benefit.title}</h4>
                                    <p>{benefit.desc}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <blockquote class="quote">{format!("\"{}\"", quote)}</blockquote>
        </div>
    }
}

#[component]
pub fn Sidebar(
    contact: ContactInfo,
    topic: String,
    category_href: String,
    related: Vec<Link>,
) -> impl IntoView {
    let initial: String = contact.founder.chars().take(1).collect();
    let tel = contact.tel_href();
    let whatsapp = contact.whatsapp_href(&topic);
    view! {
        <aside class="sidebar">
            <div class="founder-card">
                <div class="founder-initial">{initial}</div>
                <p class="founder-name">{contact.founder}</p>
                <p class="founder-title">{contact.founder_title}</p>
                <p>
                    "Free first consultation. Direct access to the founder, no juniors and no callbacks."
                </p>
                <a class="btn btn-primary" href=tel>
                    {format!("Call Now: {}", contact.phone_display)}
                </a>
                <a class="btn btn-whatsapp" href=whatsapp target="_blank" rel="noopener noreferrer">
                    "WhatsApp Us"
                </a>
                <a class="btn btn-ghost" href="/contact">"Send Enquiry"</a>
            </div>
            <RelatedServices
                heading="Related Services".to_string()
                links=related
                all_href=category_href
                all_label="View All Services".to_string()
            />
        </aside>
    }
}

#[component]
pub fn RelatedServices(
    heading: String,
    links: Vec<Link>,
    all_href: String,
    all_label: String,
) -> impl IntoView {
    view! {
        <div class="related">
            <h3>{heading}</h3>
            <ul>
                {links
                    .into_iter()
                    .map(|link| view! { <li><a href=link.href>{link.name}</a></li> })
                    .collect_view()}
            </ul>
            <a class="view-all" href=all_href>{all_label}</a>
        </div>
    }
}

#[component]
pub fn WhyChoose(site_name: String, highlights: Vec<Highlight>) -> impl IntoView {
    view! {
        <section class="highlights">
            <div class="container">
                <h2 class="center">{format!("Why Choose {}?", site_name)}</h2>
                <div class="grid-3">
                    {highlights
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="highlight">
                                    <h3>{item.title}</h3>
                                    <p>{item.desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FaqSection(service_name: String, faqs: Vec<Faq>) -> impl IntoView {
    view! {
        <section class="faq-section">
            <div class="container narrow">
                <h2 class="center">"Frequently Asked Questions"</h2>
                <p class="center">
                    {format!("Get answers to common questions about {}", service_name)}
                </p>
                <div class="faqs">
                    {faqs
                        .into_iter()
                        .map(|faq| {
                            view! {
                                <div class="faq">
                                    <h3>{format!("Q: {}", faq.question)}</h3>
                                    <p>{format!("A: {}", faq.answer)}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CallToAction(service_name: String, contact: ContactInfo) -> impl IntoView {
    let tel = contact.tel_href();
    view! {
        <section class="cta">
            <div class="container center">
                <h2>{format!("Ready to Get Started with {}?", service_name)}</h2>
                <p class="lead">
                    "Get expert guidance from our team. We'll help you find the right solution for your industrial unit."
                </p>
                <div class="actions">
                    <a class="btn btn-primary" href="/contact">"Get Free Consultation"</a>
                    <a class="btn btn-ghost" href=tel>"Call Us Now"</a>
                </div>
            </div>
        </section>
    }
}

/// Cross-link strip at the bottom of a service page
#[component]
pub fn ExploreMore(
    category_name: String,
    category_href: String,
    links: Vec<Link>,
) -> impl IntoView {
    view! {
        <section class="explore">
            <div class="container center">
                <h2>{format!("Explore Other {}", category_name)}</h2>
                <div class="pills">
                    {links
                        .into_iter()
                        .map(|link| view! { <a class="pill" href=link.href>{link.name}</a> })
                        .collect_view()}
                    <a class="pill pill-strong" href=category_href>"View All Services"</a>
                </div>
            </div>
        </section>
    }
}

/// Full service listing for `/{category}`
#[component]
pub fn CategoryListing(
    trail: Vec<Link>,
    name: String,
    label: String,
    services: Vec<(Link, String)>,
) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <Breadcrumbs trail=trail />
                <span class="badge">{label}</span>
                <h1>{name}</h1>
            </div>
        </section>
        <section>
            <div class="container grid-3">
                {services
                    .into_iter()
                    .map(|(link, description)| {
                        view! {
                            <a class="highlight" href=link.href>
                                <h3>{link.name}</h3>
                                <p>{description}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn NotFound(categories: Vec<Link>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <h1>"Service Not Found"</h1>
                <p class="lead">"The service you are looking for does not exist or has moved."</p>
                <div class="actions">
                    {categories
                        .into_iter()
                        .map(|link| view! { <a class="btn btn-primary" href=link.href>{link.name}</a> })
                        .collect_view()}
                    <a class="btn btn-ghost" href="/">"Back to Home"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(data: FooterData) -> impl IntoView {
    let FooterData {
        site_name,
        tagline,
        service_area,
        contact,
        quick_links,
        columns,
        brochure,
        social_links,
        legal_links,
        year,
    } = data;
    let tel = contact.tel_href();
    let mailto = contact.mailto_href();
    let brochure_file = format!("{}-Brochure.pdf", site_name.replace(' ', "-"));
    let copyright = format!(
        "© {} {}. All rights reserved. | Since {}",
        year, site_name, contact.founded
    );

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="company">
                        <h4>{site_name}</h4>
                        <p>{tagline}</p>
                        <ul class="contact">
                            <li><a href=tel>{contact.phone_display}</a></li>
                            <li><a href=mailto>{contact.email}</a></li>
                            <li>
                                {contact
                                    .address
                                    .into_iter()
                                    .map(|line| view! { <span class="address-line">{line}</span> })
                                    .collect_view()}
                            </li>
                        </ul>
                    </div>

                    <div>
                        <h4>"Quick Links"</h4>
                        <ul>
                            {quick_links
                                .into_iter()
                                .map(|link| view! { <li><a href=link.href>{link.name}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>

                    {columns
                        .into_iter()
                        .map(|column| {
                            let view_all = format!("View All ({} Services)", column.total);
                            view! {
                                <div>
                                    <h4>{column.name}</h4>
                                    <ul>
                                        {column
                                            .links
                                            .into_iter()
                                            .map(|link| {
                                                view! { <li><a href=link.href>{link.name}</a></li> }
                                            })
                                            .collect_view()}
                                        <li><a class="view-all" href=column.href>{view_all}</a></li>
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                {brochure
                    .map(|link| {
                        view! {
                            <a class="btn btn-primary brochure" href=link.href download=brochure_file>
                                {link.name}
                            </a>
                        }
                    })}

                <div class="social">
                    {social_links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a class="pill" href=link.href target="_blank" rel="noopener noreferrer">
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer-bottom">
                    <p>{copyright}</p>
                    <div class="legal">
                        {legal_links
                            .into_iter()
                            .map(|link| view! { <a href=link.href>{link.name}</a> })
                            .collect_view()}
                    </div>
                </div>
                <p class="service-area">{service_area}</p>
            </div>
        </footer>
    }
}
