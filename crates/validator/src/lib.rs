// Site validation: config sanity, content coverage and public assets

use service_pages_core::metadata::{OG_IMAGE_HEIGHT, OG_IMAGE_WIDTH};
use service_pages_core::{Link, Site};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];
const MAX_IMAGE_BYTES: u64 = 1024 * 1024;
/// Written by `build`, so never expected in `public/`
const GENERATED_FILES: &[&str] = &["/sitemap.xml", "/robots.txt", "/404.html"];

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check a loaded site against its `public/` directory.
///
/// Parse-time problems never get here; `parse_site_toml` already rejected
/// them. Errors are things that would ship broken links.
pub fn validate_site(site: &Site, public_dir: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_contact(site, &mut report);
    check_categories(site, &mut report);
    check_share_image(site, public_dir, &mut report);
    check_local_links(site, public_dir, &mut report);
    scan_public_assets(public_dir, &mut report);

    report
}

fn check_contact(site: &Site, report: &mut ValidationReport) {
    let contact = &site.contact;
    if !is_valid_email(&contact.email) {
        report
            .errors
            .push(format!("contact.email '{}' is not a valid address", contact.email));
    }
    if contact.whatsapp.is_empty() || !contact.whatsapp.chars().all(|c| c.is_ascii_digit()) {
        report.errors.push(format!(
            "contact.whatsapp '{}' must be digits only (international format without '+')",
            contact.whatsapp
        ));
    }
    let phone_digits = contact.phone.strip_prefix('+').unwrap_or(&contact.phone);
    if phone_digits.is_empty() || !phone_digits.chars().all(|c| c.is_ascii_digit()) {
        report.errors.push(format!(
            "contact.phone '{}' is not dialable",
            contact.phone
        ));
    }
}

fn check_categories(site: &Site, report: &mut ValidationReport) {
    for category in &site.categories {
        for slug in category.content.slugs() {
            if !category.registry.contains(slug) {
                report.warnings.push(format!(
                    "{}: content for '{}' has no registry entry and will never be served",
                    category.slug, slug
                ));
            }
        }

        let mut defaulted = Vec::new();
        for (slug, seo) in category.registry.entries() {
            if !seo.title.contains('|') {
                report.warnings.push(format!(
                    "{}/{}: title has no '|' so the whole title becomes the service name",
                    category.slug, slug
                ));
            }
            if seo.keywords.is_empty() {
                report
                    .warnings
                    .push(format!("{}/{}: no keywords", category.slug, slug));
            }
            if !category.content.has_entry(slug) {
                defaulted.push(slug);
            }
        }

        report.info.push(format!(
            "{}: {} services, {} with dedicated content",
            category.slug,
            category.registry.len(),
            category.registry.len() - defaulted.len()
        ));
        if !defaulted.is_empty() {
            report.info.push(format!(
                "{}: default content used by {}",
                category.slug,
                defaulted.join(", ")
            ));
        }
    }
}

fn check_share_image(site: &Site, public_dir: &Path, report: &mut ValidationReport) {
    let image_path = public_path(public_dir, &site.config.default_image);
    if !image_path.exists() {
        report.warnings.push(format!(
            "Share image {} not found in {}",
            site.config.default_image,
            public_dir.display()
        ));
        return;
    }

    match image::image_dimensions(&image_path) {
        Ok((width, height)) if width == OG_IMAGE_WIDTH && height == OG_IMAGE_HEIGHT => {
            report.info.push(format!(
                "Share image {} is {}x{}",
                site.config.default_image, width, height
            ));
        }
        Ok((width, height)) => report.warnings.push(format!(
            "Share image {} is {}x{}, metadata advertises {}x{}",
            site.config.default_image, width, height, OG_IMAGE_WIDTH, OG_IMAGE_HEIGHT
        )),
        Err(e) => report.warnings.push(format!(
            "Share image {} could not be read: {}",
            site.config.default_image, e
        )),
    }
}

/// Site-relative links that point at files (brochure, legal pages with an
/// extension) must exist in `public/`
fn check_local_links(site: &Site, public_dir: &Path, report: &mut ValidationReport) {
    let footer = &site.footer;
    let links = footer
        .quick_links
        .iter()
        .chain(&footer.legal_links)
        .chain(footer.brochure.as_ref());

    for Link { name, href } in links {
        if href.is_empty() {
            report.errors.push(format!("Link '{}' has an empty href", name));
            continue;
        }
        if !href.starts_with('/')
            || !has_file_extension(href)
            || GENERATED_FILES.contains(&href.as_str())
        {
            continue;
        }
        if !public_path(public_dir, href).exists() {
            report.errors.push(format!(
                "Link '{}' points to {} which is missing from {}",
                name,
                href,
                public_dir.display()
            ));
        }
    }
}

fn scan_public_assets(public_dir: &Path, report: &mut ValidationReport) {
    if !public_dir.exists() {
        report
            .warnings
            .push(format!("No public directory at {}", public_dir.display()));
        return;
    }

    let mut count = 0;
    for entry in WalkDir::new(public_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        count += 1;
        let path = entry.path();
        let is_image = path
            .extension()
            .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_string_lossy().to_lowercase().as_str()))
            .unwrap_or(false);
        if is_image
            && let Ok(meta) = entry.metadata()
            && meta.len() > MAX_IMAGE_BYTES
        {
            report.warnings.push(format!(
                "{} is {} KB; large images slow down page loads",
                path.strip_prefix(public_dir).unwrap_or(path).display(),
                meta.len() / 1024
            ));
        }
    }
    report.info.push(format!("{} public asset(s)", count));
}

fn public_path(public_dir: &Path, href: &str) -> PathBuf {
    public_dir.join(href.trim_start_matches('/'))
}

fn has_file_extension(href: &str) -> bool {
    href.rsplit('/')
        .next()
        .map(|last| last.contains('.'))
        .unwrap_or(false)
}

/// Basic RFC 5322 shape check without a full regex
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    if local.is_empty() || local.len() > 64 {
        return false;
    }
    if domain.is_empty() || domain.len() > 255 || !domain.contains('.') {
        return false;
    }
    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
        || domain.contains("..")
    {
        return false;
    }
    domain
        .rsplit('.')
        .next()
        .map(|tld| tld.len() >= 2)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use service_pages_core::{SAMPLE_SITE_TOML, parse_site_toml_str};
    use std::fs;
    use tempfile::TempDir;

    fn site() -> Site {
        parse_site_toml_str(SAMPLE_SITE_TOML).unwrap()
    }

    /// public/ with a correctly sized share image and the brochure
    fn complete_public_dir(site: &Site) -> TempDir {
        let dir = TempDir::new().unwrap();
        write_image(&dir, &site.config.default_image, OG_IMAGE_WIDTH, OG_IMAGE_HEIGHT);
        if let Some(brochure) = &site.footer.brochure {
            fs::write(public_path(dir.path(), &brochure.href), b"%PDF-1.4").unwrap();
        }
        dir
    }

    fn write_image(dir: &TempDir, href: &str, width: u32, height: u32) {
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(width, height);
        img.save(public_path(dir.path(), href)).unwrap();
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("info@bhumiconsultancy.in"));
        assert!(is_valid_email("a.b@example.co"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@example.c"));
    }

    #[test]
    fn test_sample_site_with_assets_is_clean() {
        let site = site();
        let public = complete_public_dir(&site);
        let report = validate_site(&site, public.path());

        assert!(report.is_ok(), "{:?}", report.errors);
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        assert!(report.info.iter().any(|i| i.contains("1200x630")));
    }

    #[test]
    fn test_reports_default_content_usage() {
        let site = site();
        let public = complete_public_dir(&site);
        let report = validate_site(&site, public.path());

        let financial = report
            .info
            .iter()
            .find(|i| i.starts_with("financial: default content used by"))
            .unwrap();
        assert!(financial.contains("subsidy-compliance"));
        assert!(!financial.contains("term-loans"));
    }

    #[test]
    fn test_missing_public_assets() {
        let site = site();
        let public = TempDir::new().unwrap();
        let report = validate_site(&site, public.path());

        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains(&site.config.default_image))
        );
        // Brochure is a file link, so it must exist
        assert!(!report.is_ok());
        assert!(report.errors.iter().any(|e| e.contains("/brochure.pdf")));
    }

    #[test]
    fn test_wrong_share_image_size() {
        let site = site();
        let public = complete_public_dir(&site);
        write_image(&public, &site.config.default_image, 800, 600);

        let report = validate_site(&site, public.path());
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains("800x600") && w.contains("1200x630"))
        );
    }

    #[test]
    fn test_orphan_content_and_bad_titles() {
        let toml = SAMPLE_SITE_TOML
            .replace(
                "title = \"Term Loans for Industrial Projects in Nashik | Bhumi Industrial Consultant\"",
                "title = \"Term Loans for Industrial Projects in Nashik\"",
            )
            .replace(
                "[category.content.term-loans]",
                "[category.content.retired-service]\nintro = \"Gone\"\n\n[category.content.term-loans]",
            );
        let site = parse_site_toml_str(&toml).unwrap();
        let public = complete_public_dir(&site);
        let report = validate_site(&site, public.path());

        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.starts_with("financial/term-loans: title has no '|'"))
        );
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains("'retired-service' has no registry entry"))
        );
    }

    #[test]
    fn test_invalid_contact_details() {
        let mut site = site();
        site.contact.email = "not-an-email".to_string();
        site.contact.whatsapp = "+91 98222".to_string();
        let public = complete_public_dir(&site);

        let report = validate_site(&site, public.path());
        assert_eq!(report.errors.len(), 2, "{:?}", report.errors);
    }

    #[test]
    fn test_has_file_extension() {
        assert!(has_file_extension("/brochure.pdf"));
        assert!(!has_file_extension("/about"));
        assert!(!has_file_extension("/financial/term-loans"));
    }
}
