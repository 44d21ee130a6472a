/// A parsed configuration expression.
///
/// The AST is transient: the builder consumes it immediately after parsing.
/// Each variant remembers where it started in the source so build errors can
/// point back at the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A bare identifier: a stepper-type name, a slot name, or a numeric
    /// literal kept as text and converted on demand.
    Leaf { text: String, index: usize },
    /// A parenthesized list of items. For stepper expressions the first item
    /// is conventionally the stepper-type name.
    List { items: Vec<Node>, index: usize },
}

impl Node {
    /// The 0-based source character index where this node started.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Leaf { index, .. } | Self::List { index, .. } => *index,
        }
    }

    /// The leaf text, or `None` for a list.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Leaf { text, .. } => Some(text),
            Self::List { .. } => None,
        }
    }

    /// Numeric value of a leaf. Non-numeric text and lists convert to zero;
    /// conversion never fails.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.as_text()
            .and_then(|text| text.parse().ok())
            .unwrap_or(0.0)
    }

    /// Integer value of a leaf, with the same zero fallback as
    /// [`as_f64`](Self::as_f64).
    #[must_use]
    pub fn as_usize(&self) -> usize {
        self.as_text()
            .and_then(|text| text.parse().ok())
            .unwrap_or(0)
    }

    /// Numeric values of a list's items, each converted leniently.
    /// A leaf converts as a single-element list of itself.
    #[must_use]
    pub fn as_f64_list(&self) -> Vec<f64> {
        match self {
            Self::List { items, .. } => items.iter().map(Node::as_f64).collect(),
            Self::Leaf { .. } => vec![self.as_f64()],
        }
    }
}
