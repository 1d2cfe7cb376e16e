use std::collections::BTreeMap;
use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single parameter value.
///
/// The set of accepted kinds is closed: text, integers and id lists. Booleans are sent
/// the way TextMagic expects them (`1` / `0`).
pub enum ParamValue {
    Text(String),
    Integer(i64),
    IntegerList(Vec<u64>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::IntegerList(values) => {
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

macro_rules! integer_param_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_param_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<Vec<u64>> for ParamValue {
    fn from(value: Vec<u64>) -> Self {
        Self::IntegerList(value)
    }
}

impl From<&[u64]> for ParamValue {
    fn from(value: &[u64]) -> Self {
        Self::IntegerList(value.to_vec())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Flat key → value parameter set sent as a query string or form body.
///
/// Keys are unique; setting a key twice keeps the last value.
pub struct Params {
    entries: BTreeMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a parameter set with one entry.
    pub fn with(
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Result<Self, ValidationError> {
        let mut params = Self::new();
        params.set(key, value)?;
        Ok(params)
    }

    /// Insert or replace a value. Rejects empty (after trimming) keys.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Result<&mut Self, ValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "parameter name",
            });
        }
        self.entries.insert(key, value.into());
        Ok(self)
    }

    /// Builder-style [`Params::set`].
    pub fn and(
        mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Result<Self, ValidationError> {
        self.set(key, value)?;
        Ok(self)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key/value pairs in their wire (string) form, sorted by key.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect()
    }

    /// Encode as `application/x-www-form-urlencoded`. An empty set encodes to `""`.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            serializer.append_pair(key, &value.to_string());
        }
        serializer.finish()
    }

    /// Parse a form-urlencoded string. All values come back as [`ParamValue::Text`]; for
    /// repeated keys the last occurrence wins.
    pub fn decode(input: &str) -> Result<Self, ValidationError> {
        let mut params = Self::new();
        for (key, value) in url::form_urlencoded::parse(input.as_bytes()) {
            params.set(key.into_owned(), value.into_owned())?;
        }
        Ok(params)
    }
}
