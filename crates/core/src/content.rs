use crate::error::{Error, Result};
use crate::types::ContentRecord;
use std::collections::HashMap;

/// Slug-keyed page content with a shared default record.
///
/// Every record held here has non-empty features, benefits and faqs, so
/// `resolve` never needs to report a problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTable {
    entries: HashMap<String, ContentRecord>,
    default: ContentRecord,
}

impl ContentTable {
    pub fn new(entries: HashMap<String, ContentRecord>, default: ContentRecord) -> Result<Self> {
        ensure_complete(&default, "default content")?;
        for (slug, record) in &entries {
            ensure_complete(record, &format!("content for '{}'", slug))?;
        }
        Ok(Self { entries, default })
    }

    /// Dedicated record for `slug`, or the default record itself
    pub fn resolve(&self, slug: &str) -> &ContentRecord {
        self.entries.get(slug).unwrap_or(&self.default)
    }

    pub fn default_record(&self) -> &ContentRecord {
        &self.default
    }

    pub fn has_entry(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    /// Slugs with dedicated content, sorted
    pub fn slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        slugs.sort_unstable();
        slugs
    }
}

fn ensure_complete(record: &ContentRecord, what: &str) -> Result<()> {
    let missing = if record.features.is_empty() {
        Some("features")
    } else if record.benefits.is_empty() {
        Some("benefits")
    } else if record.faqs.is_empty() {
        Some("faqs")
    } else {
        None
    };

    match missing {
        Some(field) => Err(Error::InvalidData(format!(
            "{} must have at least one entry in '{}'",
            what, field
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Benefit, Faq};

    fn record(intro: &str) -> ContentRecord {
        ContentRecord {
            intro: intro.to_string(),
            features: vec!["Feature".to_string()],
            benefits: vec![Benefit {
                title: "Benefit".to_string(),
                desc: "Desc".to_string(),
            }],
            faqs: vec![Faq {
                question: "Q?".to_string(),
                answer: "A.".to_string(),
            }],
        }
    }

    fn table() -> ContentTable {
        let mut entries = HashMap::new();
        entries.insert("term-loans".to_string(), record("Term loans"));
        ContentTable::new(entries, record("Default")).unwrap()
    }

    #[test]
    fn test_resolve_dedicated_entry() {
        let table = table();
        assert_eq!(table.resolve("term-loans").intro, "Term loans");
        assert!(table.has_entry("term-loans"));
    }

    #[test]
    fn test_resolve_falls_back_to_default_identity() {
        let table = table();
        for slug in ["subsidy-compliance", "", "no/such/slug"] {
            assert!(std::ptr::eq(table.resolve(slug), table.default_record()));
        }
    }

    #[test]
    fn test_rejects_incomplete_default() {
        let mut default = record("Default");
        default.faqs.clear();
        let err = ContentTable::new(HashMap::new(), default).unwrap_err();
        assert!(err.to_string().contains("faqs"));
    }

    #[test]
    fn test_rejects_incomplete_entry() {
        let mut entry = record("Broken");
        entry.features.clear();
        let mut entries = HashMap::new();
        entries.insert("broken".to_string(), entry);
        let err = ContentTable::new(entries, record("Default")).unwrap_err();
        assert!(err.to_string().contains("'broken'"));
        assert!(err.to_string().contains("features"));
    }
}
