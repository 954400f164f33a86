//! Record of one field rewritten during a run

use serde::Serialize;

/// A field whose value changed, or that was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    /// Zero-based paragraph index; 0 is the source paragraph
    pub paragraph: usize,
    /// `Source` or `Package` value of the paragraph after rewriting
    pub name: String,
    /// Field name
    pub field: String,
    /// Previous value, `None` when the field was created
    pub old: Option<String>,
    /// Value after rewriting
    pub new: String,
}

impl FieldChange {
    /// A field whose existing value was replaced
    pub fn modified(
        paragraph: usize,
        field: impl Into<String>,
        old: impl Into<String>,
        new: impl Into<String>,
    ) -> Self {
        Self {
            paragraph,
            name: String::new(),
            field: field.into(),
            old: Some(old.into()),
            new: new.into(),
        }
    }

    /// A field that did not exist before
    pub fn created(paragraph: usize, field: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            paragraph,
            name: String::new(),
            field: field.into(),
            old: None,
            new: new.into(),
        }
    }

    /// Sets the paragraph name
    #[cfg(test)]
    pub(crate) fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns true if the field was added rather than modified
    pub fn is_created(&self) -> bool {
        self.old.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modified() {
        let change = FieldChange::modified(1, "Package", "libfoo1.0", "libfoo2.0")
            .with_name("libfoo2.0");
        assert!(!change.is_created());
        assert_eq!(change.old.as_deref(), Some("libfoo1.0"));
        assert_eq!(change.name, "libfoo2.0");
    }

    #[test]
    fn test_created_serializes_null_old() {
        let change = FieldChange::created(2, "Conflicts", "libfoo1.0-dev");
        assert!(change.is_created());

        let json = serde_json::to_value(&change).unwrap();
        assert!(json["old"].is_null());
        assert_eq!(json["field"], "Conflicts");
        assert_eq!(json["paragraph"], 2);
    }
}
