//! Query-string encoding for Content API requests.
//!
//! This module translates structured parameter objects into the query grammar
//! the Content API expects:
//!
//! - Field selections become `fields=id,name,slug` in the schema's declared
//!   order, whatever order the caller inserted them in
//! - Ordering becomes `order=name asc,slug desc` in the caller's order
//! - Pagination becomes `limit=N` / `limit=all` and `page=N`
//! - NQL filters are passed through verbatim
//!
//! Parameters are always emitted in the same sequence:
//! `include, fields, formats, filter, limit, page, order`. Unset options are
//! absent; no parameter is ever emitted with an empty value.
//!
//! # Example
//!
//! ```rust
//! use ghost_api::content::{QueryParameters, QueryParams, OrderDirection};
//! use ghost_api::content::resources::AuthorField;
//!
//! let params = QueryParams {
//!     fields: [AuthorField::Slug, AuthorField::Id].into_iter().collect(),
//!     limit: Some(5),
//!     order: vec![(AuthorField::Name, OrderDirection::Asc)],
//!     ..Default::default()
//! };
//!
//! assert_eq!(
//!     params.to_query_string(),
//!     "fields=id%2Cslug&limit=5&order=name%20asc"
//! );
//! ```

use std::collections::BTreeSet;
use std::fmt;

/// A named field of a Content API resource.
///
/// Implementors are fieldless enums whose derived `Ord` follows the remote
/// schema's declared order, so a `BTreeSet` of them iterates canonically.
/// Use the crate-internal `field_names!` macro to define one.
pub trait FieldName: Copy + Ord + fmt::Debug + Send + Sync + 'static {
    /// Every field, in schema order.
    const ALL: &'static [Self];

    /// Returns the wire name of the field (lowercase `snake_case`).
    fn as_str(self) -> &'static str;

    /// Looks a field up by its wire name.
    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.as_str() == name)
    }
}

/// Defines a fieldless enum implementing [`FieldName`].
///
/// Variants are listed in schema order together with their wire names.
macro_rules! field_names {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::content::FieldName for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::content::FieldName::as_str(*self))
            }
        }
    };
}

pub(crate) use field_names;

/// Sort direction for an `order` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl OrderDirection {
    /// Returns the wire form (`asc` or `desc`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encodes a field selection as a comma-separated list in schema order.
///
/// Returns `None` for an empty selection, meaning "all fields".
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeSet;
/// use ghost_api::content::encode_fields;
/// use ghost_api::content::resources::TagField;
///
/// let fields: BTreeSet<_> = [TagField::Slug, TagField::Id].into_iter().collect();
/// assert_eq!(encode_fields(&fields).as_deref(), Some("id,slug"));
/// assert_eq!(encode_fields::<TagField>(&BTreeSet::new()), None);
/// ```
#[must_use]
pub fn encode_fields<F: FieldName>(fields: &BTreeSet<F>) -> Option<String> {
    if fields.is_empty() {
        return None;
    }
    let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
    Some(names.join(","))
}

/// Decodes a comma-separated field list back into a selection.
///
/// Whitespace around names is ignored, as are unknown names.
#[must_use]
pub fn parse_fields<F: FieldName>(encoded: &str) -> BTreeSet<F> {
    encoded
        .split(',')
        .filter_map(|name| F::from_name(name.trim()))
        .collect()
}

/// Encodes an ordering as `field direction,field direction`, preserving the
/// caller's sequence.
///
/// Returns `None` for an empty list.
#[must_use]
pub fn encode_order<F: FieldName>(order: &[(F, OrderDirection)]) -> Option<String> {
    if order.is_empty() {
        return None;
    }
    let entries: Vec<String> = order
        .iter()
        .map(|(field, direction)| format!("{} {direction}", field.as_str()))
        .collect();
    Some(entries.join(","))
}

/// Renders query pairs as `name=value&...`, percent-encoding each part.
#[must_use]
pub fn render_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// A parameter object that can be rendered into Content API query pairs.
pub trait QueryParameters {
    /// Returns the query pairs in emission order.
    fn to_query_pairs(&self) -> Vec<(String, String)>;

    /// Returns the rendered, percent-encoded query string.
    fn to_query_string(&self) -> String {
        render_query(&self.to_query_pairs())
    }
}

impl QueryParameters for () {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// Appends the `filter`, `limit` and `page` pairs shared by every browse
/// parameter object.
pub(crate) fn push_window(
    pairs: &mut Vec<(String, String)>,
    filter: Option<&str>,
    limit: Option<u32>,
    no_limit: bool,
    page: Option<u32>,
) {
    if let Some(filter) = filter.filter(|f| !f.trim().is_empty()) {
        pairs.push(("filter".to_string(), filter.to_string()));
    }

    if no_limit {
        pairs.push(("limit".to_string(), "all".to_string()));
    } else if let Some(limit) = limit.filter(|&n| n > 0) {
        pairs.push(("limit".to_string(), limit.to_string()));
    }

    if let Some(page) = page.filter(|&n| n > 0) {
        pairs.push(("page".to_string(), page.to_string()));
    }
}

/// Query parameters for authors and tags.
///
/// # Fields
///
/// - `include_post_count` - Adds `include=count.posts`
/// - `fields` - Restricts the returned fields; empty means all fields
/// - `filter` - An NQL filter, passed through verbatim
/// - `limit` - Page size; ignored when `no_limit` is set
/// - `no_limit` - Requests every record (`limit=all`)
/// - `page` - Page number, starting at 1
/// - `order` - Sort entries, applied in sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams<F: FieldName> {
    /// Include the number of published posts for each record.
    pub include_post_count: bool,

    /// Fields to return.
    pub fields: BTreeSet<F>,

    /// NQL filter expression.
    pub filter: Option<String>,

    /// Maximum number of records per page.
    pub limit: Option<u32>,

    /// Return all records. Overrides `limit`.
    pub no_limit: bool,

    /// Which page of results to return.
    pub page: Option<u32>,

    /// Sort order.
    pub order: Vec<(F, OrderDirection)>,
}

impl<F: FieldName> Default for QueryParams<F> {
    fn default() -> Self {
        Self {
            include_post_count: false,
            fields: BTreeSet::new(),
            filter: None,
            limit: None,
            no_limit: false,
            page: None,
            order: Vec::new(),
        }
    }
}

impl<F: FieldName> QueryParameters for QueryParams<F> {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if self.include_post_count {
            pairs.push(("include".to_string(), "count.posts".to_string()));
        }

        if let Some(fields) = encode_fields(&self.fields) {
            pairs.push(("fields".to_string(), fields));
        }

        push_window(
            &mut pairs,
            self.filter.as_deref(),
            self.limit,
            self.no_limit,
            self.page,
        );

        if let Some(order) = encode_order(&self.order) {
            pairs.push(("order".to_string(), order));
        }

        pairs
    }
}
