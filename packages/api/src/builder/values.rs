//! Scalar-or-list inputs accepted by the composer's setters.

/// A single value or a list of values.
///
/// JSON:API query setters join lists with `,`; headers send each element as a
/// separate value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Join list elements with `,`; a single value is returned unchanged.
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            OneOrMany::One(value) => value.clone(),
            OneOrMany::Many(values) => values.join(","),
        }
    }

    #[must_use]
    pub fn to_values(&self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value.clone()],
            OneOrMany::Many(values) => values.clone(),
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_owned())
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<&String> for OneOrMany {
    fn from(value: &String) -> Self {
        OneOrMany::One(value.clone())
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for OneOrMany {
    fn from(values: &[&str]) -> Self {
        OneOrMany::Many(values.iter().map(|v| (*v).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany {
    fn from(values: [&str; N]) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_owned).collect())
    }
}

macro_rules! one_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for OneOrMany {
                fn from(value: $ty) -> Self {
                    OneOrMany::One(value.to_string())
                }
            }
        )*
    };
}

one_from_display!(i32, i64, u32, u64, usize);
