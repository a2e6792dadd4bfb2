use indexmap::IndexSet;

/// Ordered, duplicate-free union of column names across annotated records.
///
/// A name keeps the position of its first appearance; later occurrences are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputHeader {
    columns: IndexSet<String>,
}

impl OutputHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a declared header
    pub fn seeded<S: AsRef<str>>(declared: &[S]) -> Self {
        let mut header = Self::new();
        header.merge(declared.iter().map(|s| s.as_ref()));
        header
    }

    /// Fold a record's field names into the header, appending unseen names.
    pub fn merge<'a, I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for field in fields {
            if !self.columns.contains(field) {
                self.columns.insert(field.to_string());
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.columns.iter().cloned().collect()
    }

    /// Tab-joined header line without a newline
    pub fn to_line(&self) -> String {
        self.iter().collect::<Vec<_>>().join("\t")
    }
}
