//! Ordered HTML attribute map.

use indexmap::IndexMap;

const CLASS_ATTRIBUTE: &str = "class";

/// Insertion-ordered `name -> value` map. A `None` value is a bare attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, Option<String>>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one attribute, appending instead of overwriting for `class`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if name == CLASS_ATTRIBUTE {
            self.add_class(&value);
        } else {
            self.entries.insert(name.to_string(), Some(value));
        }
    }

    /// Sets a valueless attribute, rendered as ` name`.
    pub fn set_bare(&mut self, name: &str) {
        self.entries.insert(name.to_string(), None);
    }

    /// Merges many attributes at once.
    ///
    /// `class` is appended to any existing class list. Every other incoming
    /// key only lands when the element does not carry it yet, so values that
    /// were already set win.
    pub fn merge<I, K, V>(&mut self, attrs: I)
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in attrs {
            let name = name.into();
            let value = value.map(Into::into);
            if name == CLASS_ATTRIBUTE {
                if let Some(class) = value {
                    self.add_class(&class);
                }
                continue;
            }
            self.entries.entry(name).or_insert(value);
        }
    }

    /// Adds `class` to the class list, creating the attribute if needed.
    pub fn add_class(&mut self, class: &str) {
        match self.entries.get_mut(CLASS_ATTRIBUTE) {
            Some(Some(existing)) => {
                existing.push(' ');
                existing.push_str(class);
            }
            Some(slot) => *slot = Some(class.to_string()),
            None => {
                self.entries
                    .insert(CLASS_ATTRIBUTE.to_string(), Some(class.to_string()));
            }
        }
    }

    /// Drops every occurrence of `class`. An emptied class list is removed.
    pub fn remove_class(&mut self, class: &str) {
        let Some(Some(existing)) = self.entries.get_mut(CLASS_ATTRIBUTE) else {
            return;
        };
        let kept: Vec<&str> = existing
            .split_whitespace()
            .filter(|item| *item != class)
            .collect();
        if kept.is_empty() {
            self.entries.shift_remove(CLASS_ATTRIBUTE);
        } else {
            *existing = kept.join(" ");
        }
    }

    /// Returns whether the class list contains `class` as a whole word.
    pub fn has_class(&self, class: &str) -> bool {
        self.value(CLASS_ATTRIBUTE)
            .is_some_and(|list| list.split_whitespace().any(|item| item == class))
    }

    /// Raw entry: `Some(None)` for a bare attribute, `None` when absent.
    pub fn get(&self, name: &str) -> Option<&Option<String>> {
        self.entries.get(name)
    }

    /// Value of an attribute that carries one.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(|value| value.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Option<String>> {
        self.entries.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Serializes to ` name="value"` pairs, each with a leading space.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.iter() {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&escape_html(value));
                out.push('"');
            }
        }
        out
    }
}

/// Escapes text for use in HTML content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}
