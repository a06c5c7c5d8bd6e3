use serde::{Deserialize, Serialize};
use url::Url;

/// Per-service SEO metadata, one per registry slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoRecord {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub breadcrumb: String,
}

/// Rich body content for a service page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub intro: String,
    pub features: Vec<String>,
    pub benefits: Vec<Benefit>,
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Optional data supplied by the external service backend.
///
/// Both fields may be missing; an empty string counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalServiceData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_desc: Option<String>,
}

impl ExternalServiceData {
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    pub fn detailed_desc(&self) -> Option<&str> {
        non_blank(self.detailed_desc.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Site-wide SEO configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute origin without trailing slash, e.g. "https://example.com"
    pub base_url: String,
    pub site_name: String,
    pub locale: String,
    /// Share image path relative to the site root, e.g. "/og-image.jpg"
    pub default_image: String,
}

impl SiteConfig {
    /// Join a site-relative path onto the base URL, keeping any base path
    /// prefix such as "https://example.com/services"
    pub fn absolute_url(&self, path: &str) -> String {
        let relative = path.trim_start_matches('/');
        match Url::parse(&format!("{}/", self.base_url)).and_then(|base| base.join(relative)) {
            Ok(url) => url.into(),
            // base_url is checked when site.toml loads; hand-built configs keep plain joining
            Err(_) => format!("{}/{}", self.base_url, relative),
        }
    }

    pub fn default_image_url(&self) -> String {
        self.absolute_url(&self.default_image)
    }
}

/// Business contact details shown in the sidebar and footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Dialable number, e.g. "+919822242170"
    pub phone: String,
    pub phone_display: String,
    pub email: String,
    /// WhatsApp number in international format without '+'
    pub whatsapp: String,
    pub address: Vec<String>,
    pub founder: String,
    pub founder_title: String,
    pub founded: u16,
}

impl ContactInfo {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// WhatsApp deep link with a prefilled enquiry about `topic`
    pub fn whatsapp_href(&self, topic: &str) -> String {
        let first_name = self.founder.split_whitespace().next().unwrap_or_default();
        let text = format!("Hi {} sir, I need help with {}", first_name, topic);
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp,
            urlencoding::encode(&text)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub href: String,
}

/// "Why choose us" grid entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub desc: String,
}

/// Shared footer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterConfig {
    pub tagline: String,
    pub service_area: String,
    pub quick_links: Vec<Link>,
    pub legal_links: Vec<Link>,
    pub social_links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brochure: Option<Link>,
    /// How many services of each category are listed in the footer
    pub featured_per_category: usize,
    /// Category slugs in footer column order; empty means config order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_order: Vec<String>,
}

/// External service data backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig {
            base_url: "https://example.com".to_string(),
            site_name: "Example".to_string(),
            locale: "en_IN".to_string(),
            default_image: "/og-image.jpg".to_string(),
        }
    }

    #[test]
    fn test_absolute_url() {
        let site = site();
        assert_eq!(
            site.absolute_url("/financial/term-loans"),
            "https://example.com/financial/term-loans"
        );
        assert_eq!(site.absolute_url("sitemap.xml"), "https://example.com/sitemap.xml");
        assert_eq!(site.default_image_url(), "https://example.com/og-image.jpg");
        assert_eq!(site.absolute_url("/"), "https://example.com/");
    }

    #[test]
    fn test_absolute_url_keeps_base_path() {
        let site = SiteConfig {
            base_url: "https://example.com/services".to_string(),
            ..site()
        };
        assert_eq!(
            site.absolute_url("/financial/term-loans"),
            "https://example.com/services/financial/term-loans"
        );
        assert_eq!(
            site.default_image_url(),
            "https://example.com/services/og-image.jpg"
        );
    }

    #[test]
    fn test_external_data_blank_fields_are_missing() {
        let data = ExternalServiceData {
            name: Some("   ".to_string()),
            detailed_desc: Some("".to_string()),
        };
        assert_eq!(data.name(), None);
        assert_eq!(data.detailed_desc(), None);

        let data = ExternalServiceData {
            name: Some(" Term Loans ".to_string()),
            detailed_desc: None,
        };
        assert_eq!(data.name(), Some("Term Loans"));
    }

    #[test]
    fn test_external_data_deserializes_camel_case() {
        let data: ExternalServiceData =
            serde_json::from_str(r#"{"name":"Term Loans","detailedDesc":"Long text"}"#).unwrap();
        assert_eq!(data.name.as_deref(), Some("Term Loans"));
        assert_eq!(data.detailed_desc.as_deref(), Some("Long text"));

        let empty: ExternalServiceData = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ExternalServiceData::default());
    }

    #[test]
    fn test_whatsapp_href_encodes_topic() {
        let contact = ContactInfo {
            phone: "+919822242170".to_string(),
            phone_display: "+91 9822242170".to_string(),
            email: "info@example.com".to_string(),
            whatsapp: "919822242170".to_string(),
            address: vec![],
            founder: "Milind Rajhans".to_string(),
            founder_title: "FI-ACC".to_string(),
            founded: 1999,
        };
        assert_eq!(
            contact.whatsapp_href("CMA/DPR Reports"),
            "https://wa.me/919822242170?text=Hi%20Milind%20sir%2C%20I%20need%20help%20with%20CMA%2FDPR%20Reports"
        );
        assert_eq!(
            contact.whatsapp_href("Subsidy & Compliance"),
            "https://wa.me/919822242170?text=Hi%20Milind%20sir%2C%20I%20need%20help%20with%20Subsidy%20%26%20Compliance"
        );
        assert_eq!(contact.tel_href(), "tel:+919822242170");
    }
}
