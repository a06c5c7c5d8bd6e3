use crate::error::{Error, Result};
use crate::types::SeoRecord;
use std::collections::HashMap;

/// Ordered slug -> SEO record mapping for one service category.
///
/// Insertion order is preserved; it drives static generation, footer
/// listings and the related-services list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugRegistry {
    records: Vec<SeoRecord>,
    index: HashMap<String, usize>,
}

impl SlugRegistry {
    /// Build a registry, rejecting duplicate or non URL-safe slugs
    pub fn new(records: Vec<SeoRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if !is_valid_slug(&record.slug) {
                return Err(Error::InvalidData(format!(
                    "Slug '{}' must be lowercase letters, digits and hyphens",
                    record.slug
                )));
            }
            if index.insert(record.slug.clone(), position).is_some() {
                return Err(Error::InvalidData(format!(
                    "Duplicate slug '{}'",
                    record.slug
                )));
            }
        }
        Ok(Self { records, index })
    }

    /// All slugs in registry order
    pub fn list_slugs(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.slug.as_str()).collect()
    }

    /// `None` means the slug is not served at all
    pub fn lookup(&self, slug: &str) -> Option<&SeoRecord> {
        self.index.get(slug).map(|&i| &self.records[i])
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &SeoRecord)> {
        self.records.iter().map(|r| (r.slug.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Slugs are path segments: `[a-z0-9-]+`, no leading or trailing hyphen
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
