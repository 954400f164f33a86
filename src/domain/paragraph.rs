//! Ordered field mapping for one deb822 stanza

/// A single `Name: value` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name as spelled in the input
    pub name: String,
    /// Field value; continuation lines are joined with `\n` and keep their indentation
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One paragraph of a control file
///
/// Fields keep insertion order. Lookups compare names ASCII
/// case-insensitively, the way deb822 treats field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    fields: Vec<Field>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Returns true if the paragraph has a field with this name
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the value of a field
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.fields[i].value.as_str())
    }

    /// Sets a field value, keeping its position and spelling if it already exists
    ///
    /// New fields are appended. Returns the previous value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        match self.position(name) {
            Some(i) => Some(std::mem::replace(&mut self.fields[i].value, value)),
            None => {
                self.fields.push(Field::new(name, value));
                None
            }
        }
    }

    /// Mutable access to a field value
    pub(crate) fn value_mut(&mut self, name: &str) -> Option<&mut String> {
        self.position(name).map(|i| &mut self.fields[i].value)
    }

    /// Fields in paragraph order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The `Package` value, or `Source` for the source paragraph
    pub fn name(&self) -> Option<&str> {
        self.get("Package").or_else(|| self.get("Source"))
    }
}

impl FromIterator<Field> for Paragraph {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut paragraph = Paragraph::new();
        for field in iter {
            paragraph.set(&field.name, field.value);
        }
        paragraph
    }
}
