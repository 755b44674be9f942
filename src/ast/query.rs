use indexmap::IndexMap;

/// Value collected for one filter keyword.
///
/// A keyword seen once holds a `Scalar`; a second occurrence promotes it to
/// `Multi`, keeping the earlier value first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Scalar(String),
    Multi(Vec<String>),
}

impl FilterValue {
    /// Record another occurrence of the keyword
    pub fn push(&mut self, value: String) {
        match self {
            FilterValue::Scalar(first) => {
                let first = std::mem::take(first);
                *self = FilterValue::Multi(vec![first, value]);
            }
            FilterValue::Multi(values) => values.push(value),
        }
    }

    /// All values in encounter order
    pub fn values(&self) -> Vec<&str> {
        match self {
            FilterValue::Scalar(v) => vec![v.as_str()],
            FilterValue::Multi(vs) => vs.iter().map(String::as_str).collect(),
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            FilterValue::Scalar(v) => vec![v],
            FilterValue::Multi(vs) => vs,
        }
    }
}

/// Resolved search query.
///
/// `filters` iterates in the order keywords were first seen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseResult {
    /// Free text, single-space separated
    pub text: String,

    /// Recognized keyword filters
    pub filters: IndexMap<String, FilterValue>,
}

impl ParseResult {
    pub fn filter(&self, keyword: &str) -> Option<&FilterValue> {
        self.filters.get(keyword)
    }
}

/// Note search in its structured form: free text plus book filters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Queries {
    pub q: String,
    pub book: Vec<String>,
}

/// Search state carried in a page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub queries: Queries,

    /// 1-based page number
    pub page: u32,
}

impl Default for Filters {
    fn default() -> Self {
        Filters {
            queries: Queries::default(),
            page: 1,
        }
    }
}
