/// A term of the search language, before keywords are resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// Free-standing term
    ///
    /// # Examples
    /// ```text
    /// rust
    /// "quux:fooz"
    /// ```
    Text { value: String },

    /// `keyword:value` pair
    ///
    /// Whether it is honoured as a filter depends on the keyword set it is
    /// interpreted against.
    ///
    /// # Examples
    /// ```text
    /// book:golang
    /// ```
    Filter { keyword: String, value: String },
}

impl SyntaxNode {
    pub fn text(value: impl Into<String>) -> Self {
        SyntaxNode::Text {
            value: value.into(),
        }
    }

    pub fn filter(keyword: impl Into<String>, value: impl Into<String>) -> Self {
        SyntaxNode::Filter {
            keyword: keyword.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxNode::Text { value } => write!(f, "{}", value),
            SyntaxNode::Filter { keyword, value } => write!(f, "{}:{}", keyword, value),
        }
    }
}
