//! JSON:API query parameters
//!
//! Each setter owns one reserved parameter name and replaces its whole value on
//! every call:
//!
//! | setter                 | parameter | encoding                 |
//! |------------------------|-----------|--------------------------|
//! | `set_json_api_fields`  | `fields`  | `fields[type]=a,b`       |
//! | `set_json_api_sort`    | `sort`    | `sort=-created,title`    |
//! | `set_json_api_page`    | `page`    | `page[number]=2`         |
//! | `set_json_api_filter`  | `filter`  | `filter[tag]=rust`       |
//! | `set_json_api_includes`| `include` | `include=author,comments`|

use jsonapi_compose_client::{ImmutableRequest, QueryValue};

use crate::builder::core::RequestComposer;
use crate::builder::values::OneOrMany;

pub const FIELDS: &str = "fields";
pub const SORT: &str = "sort";
pub const PAGE: &str = "page";
pub const FILTER: &str = "filter";
pub const INCLUDE: &str = "include";

impl<R: ImmutableRequest> RequestComposer<R> {
    /// Sparse fieldsets, one entry per resource type
    ///
    /// # Examples
    /// ```
    /// use jsonapi_compose::JsonApi;
    ///
    /// let request = JsonApi::composer()
    ///     .set_json_api_fields([("articles", vec!["title", "body"]), ("people", vec!["name"])])
    ///     .build()
    ///     .unwrap_or_default();
    ///
    /// assert_eq!(
    ///     request.uri().query(),
    ///     "fields%5Barticles%5D=title%2Cbody&fields%5Bpeople%5D=name"
    /// );
    /// ```
    #[must_use]
    pub fn set_json_api_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OneOrMany>,
    {
        self.state.query.set(FIELDS, array_param(fields));
        self
    }

    /// Sort keys, `-` prefixed for descending order
    #[must_use]
    pub fn set_json_api_sort(mut self, sort: impl Into<OneOrMany>) -> Self {
        self.state.query.set(SORT, list_param(sort));
        self
    }

    /// Pagination parameters such as `number` and `size`
    #[must_use]
    pub fn set_json_api_page<I, K, V>(mut self, page: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OneOrMany>,
    {
        self.state.query.set(PAGE, array_param(page));
        self
    }

    /// Filter parameters
    #[must_use]
    pub fn set_json_api_filter<I, K, V>(mut self, filter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OneOrMany>,
    {
        self.state.query.set(FILTER, array_param(filter));
        self
    }

    /// Relationship paths to include, e.g. `["author", "comments.author"]`
    #[must_use]
    pub fn set_json_api_includes(mut self, includes: impl Into<OneOrMany>) -> Self {
        self.state.query.set(INCLUDE, list_param(includes));
        self
    }
}

/// `name[key]=value` parameters; list values are joined with `,`.
fn array_param<I, K, V>(entries: I) -> QueryValue
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<OneOrMany>,
{
    QueryValue::Nested(
        entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into().joined()))
            .collect(),
    )
}

/// `name=value` parameters; a list is joined with `,`.
fn list_param(value: impl Into<OneOrMany>) -> QueryValue {
    QueryValue::Scalar(value.into().joined())
}
