//! Declared scalar properties attached to an element by its owner.
//!
//! # Invariants
//! - Every element starts with `active = false`, `enabled = true`,
//!   `dimmed = false`.
//! - A property holds a scalar; there is no null state, so "declared" and
//!   "has a value" are the same thing.

use super::{ElementError, ElementResult};
use indexmap::IndexMap;
use serde_json::Value;

pub const PROPERTY_ACTIVE: &str = "active";
pub const PROPERTY_ENABLED: &str = "enabled";
pub const PROPERTY_DIMMED: &str = "dimmed";

/// Scalar value of one element property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl PropertyValue {
    /// Converts a dynamic JSON value, rejecting anything non-scalar.
    pub fn from_json(property: &str, value: &Value) -> ElementResult<Self> {
        let found = match value {
            Value::Bool(flag) => return Ok(Self::Bool(*flag)),
            Value::Number(number) => {
                return Ok(match number.as_i64() {
                    Some(int) => Self::Int(int),
                    None => Self::Float(number.as_f64().unwrap_or_default()),
                });
            }
            Value::String(text) => return Ok(Self::Text(text.clone())),
            Value::Null => "null",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        };
        Err(ElementError::NonScalarValue {
            property: property.to_string(),
            found,
        })
    }

    /// Empty means `false`, zero, `""` or `"0"`.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bool(flag) => !flag,
            Self::Int(int) => *int == 0,
            Self::Float(float) => *float == 0.0,
            Self::Text(text) => text.is_empty() || text == "0",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Property table of one element, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Properties {
    values: IndexMap<String, PropertyValue>,
}

impl Default for Properties {
    fn default() -> Self {
        let mut values = IndexMap::new();
        values.insert(PROPERTY_ACTIVE.to_string(), PropertyValue::Bool(false));
        values.insert(PROPERTY_ENABLED.to_string(), PropertyValue::Bool(true));
        values.insert(PROPERTY_DIMMED.to_string(), PropertyValue::Bool(false));
        Self { values }
    }
}

impl Properties {
    /// Declares `property`, or overwrites it when already declared.
    pub fn add(&mut self, property: &str, value: PropertyValue) {
        self.values.insert(property.to_string(), value);
    }

    /// Declares many properties. Keys that are not names (empty or a bare
    /// integer index) are skipped.
    pub fn add_all<I, K>(&mut self, properties: I)
    where
        I: IntoIterator<Item = (K, PropertyValue)>,
        K: AsRef<str>,
    {
        for (property, value) in properties {
            let property = property.as_ref();
            if is_property_name(property) {
                self.add(property, value);
            }
        }
    }

    /// Declares a property from dynamic JSON input.
    ///
    /// # Errors
    /// - `ElementError::NonScalarValue` for `null`, arrays and objects.
    pub fn add_json(&mut self, property: &str, value: &Value) -> ElementResult<()> {
        let value = PropertyValue::from_json(property, value)?;
        self.add(property, value);
        Ok(())
    }

    /// Changes an already declared property.
    ///
    /// # Errors
    /// - `ElementError::UndeclaredProperty` when `property` was never added.
    pub fn set(&mut self, property: &str, value: PropertyValue) -> ElementResult<()> {
        match self.values.get_mut(property) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ElementError::UndeclaredProperty(property.to_string())),
        }
    }

    /// Changes a declared property from dynamic JSON input.
    ///
    /// Declaration is checked before the value shape.
    pub fn set_json(&mut self, property: &str, value: &Value) -> ElementResult<()> {
        if !self.values.contains_key(property) {
            return Err(ElementError::UndeclaredProperty(property.to_string()));
        }
        let value = PropertyValue::from_json(property, value)?;
        self.set(property, value)
    }

    pub fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.values.get(property)
    }

    /// Returns the property value, or `default` when it is not declared.
    pub fn get_or<'a>(&'a self, property: &str, default: &'a PropertyValue) -> &'a PropertyValue {
        self.values.get(property).unwrap_or(default)
    }

    /// Returns whether `property` is declared and not empty.
    pub fn is(&self, property: &str) -> bool {
        self.values
            .get(property)
            .is_some_and(|value| !value.is_empty())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.values.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Empty keys and canonical integers (`"0"`, `"-3"`, not `"07"`) are
/// positional indexes, not names.
fn is_property_name(value: &str) -> bool {
    !value.is_empty()
        && !value
            .parse::<i64>()
            .is_ok_and(|index| index.to_string() == value)
}
