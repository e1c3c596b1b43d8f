//! Ordered key/value storage for section content.
//!
//! A [`Fields`] value keeps keys and their display order in a single
//! sequence, so an entry can never be declared without a value (or the
//! other way around).

/// A single key/value entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Display key, unique within its [`Fields`].
    pub key: String,
    /// Display value.
    pub value: String,
    /// Whether the live refresh may overwrite this value.
    pub live: bool,
}

/// Ordered key/value pairs with unique keys.
///
/// Iteration order is insertion order and is the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<Field>,
}

impl Fields {
    /// Creates an empty set of fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a static field.
    ///
    /// If `key` is already present its value is replaced in place and its
    /// position is kept.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.upsert(key.into(), value.into(), false);
    }

    /// Appends a field the live refresh is allowed to overwrite.
    pub fn insert_live(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.upsert(key.into(), value.into(), true);
    }

    /// Builder form of [`Fields::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`Fields::insert_live`].
    pub fn with_live(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_live(key, value);
        self
    }

    fn upsert(&mut self, key: String, value: String, live: bool) {
        match self.entries.iter_mut().find(|f| f.key == key) {
            Some(existing) => {
                existing.value = value;
                existing.live = live;
            }
            None => self.entries.push(Field { key, value, live }),
        }
    }

    /// Overwrites the value of an existing field.
    ///
    /// Returns `false` and leaves the fields untouched when `key` is absent,
    /// so the key set and order can never change through this call.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|f| f.key == key) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    /// Returns true if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|f| f.key == key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over fields in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.entries.iter()
    }

    /// Keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|f| f.key.as_str())
    }

    /// Keys of fields flagged live, in display order.
    pub fn live_keys(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|f| f.live)
            .map(|f| f.key.clone())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}
