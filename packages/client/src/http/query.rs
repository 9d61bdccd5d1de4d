//! Query-parameter storage with one level of nesting (`name[key]=value`).

use indexmap::IndexMap;
use url::form_urlencoded;

/// Value of a single top-level query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// `name=value`
    Scalar(String),
    /// `name[key]=value` for every entry, in insertion order
    Nested(IndexMap<String, String>),
}

impl QueryValue {
    /// Build a nested value from `(key, value)` pairs.
    pub fn nested<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        QueryValue::Nested(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            QueryValue::Scalar(value) => Some(value),
            QueryValue::Nested(_) => None,
        }
    }

    #[must_use]
    pub fn as_nested(&self) -> Option<&IndexMap<String, String>> {
        match self {
            QueryValue::Scalar(_) => None,
            QueryValue::Nested(entries) => Some(entries),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Scalar(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Scalar(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Scalar(if value { "1" } else { "0" }.to_owned())
    }
}

impl From<IndexMap<String, String>> for QueryValue {
    fn from(entries: IndexMap<String, String>) -> Self {
        QueryValue::Nested(entries)
    }
}

macro_rules! scalar_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    QueryValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(i32, i64, u16, u32, u64, usize, f64);

/// Insertion-ordered top-level query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: IndexMap<String, QueryValue>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole entry stored under `name`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        self.params.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.params.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<QueryValue> {
        self.params.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Flatten into an `application/x-www-form-urlencoded` query string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        for (name, value) in &self.params {
            match value {
                QueryValue::Scalar(scalar) => {
                    serializer.append_pair(name, scalar);
                }
                QueryValue::Nested(entries) => {
                    for (key, nested) in entries {
                        serializer.append_pair(&format!("{name}[{key}]"), nested);
                    }
                }
            }
        }

        serializer.finish()
    }

    /// Decode an encoded query string.
    ///
    /// `name[key]` keys become nested entries and `name[]` keys are numbered in
    /// order of appearance. A later scalar replaces an earlier nested entry of the
    /// same name and vice versa.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::new();

        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match split_nested_key(&key) {
                Some((name, sub_key)) => {
                    let entry = parsed
                        .params
                        .entry(name.to_owned())
                        .or_insert_with(|| QueryValue::Nested(IndexMap::new()));
                    if matches!(entry, QueryValue::Scalar(_)) {
                        *entry = QueryValue::Nested(IndexMap::new());
                    }
                    if let QueryValue::Nested(entries) = entry {
                        let sub_key = if sub_key.is_empty() {
                            entries.len().to_string()
                        } else {
                            sub_key.to_owned()
                        };
                        entries.insert(sub_key, value.into_owned());
                    }
                }
                None => {
                    parsed.set(key.to_string(), value.into_owned());
                }
            }
        }

        parsed
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a String, &'a QueryValue);
    type IntoIter = indexmap::map::Iter<'a, String, QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

/// Split `name[key]` into `("name", "key")`.
fn split_nested_key(key: &str) -> Option<(&str, &str)> {
    let (name, rest) = key.split_once('[')?;
    let sub_key = rest.strip_suffix(']')?;
    if name.is_empty() || sub_key.contains(['[', ']']) {
        return None;
    }
    Some((name, sub_key))
}
