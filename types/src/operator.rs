//! Operator registry
//!
//! Single source of truth for the PostgREST wire tokens of every filter
//! operator, sort direction and null placement.

/// Filter operator understood by PostgREST
///
/// Every variant maps to exactly one wire token through [`Operator::as_str`].
///
/// # Examples
///
/// ```
/// use pgrest_types::Operator;
///
/// assert_eq!(Operator::GreaterThanOrEqual.as_str(), "gte");
/// assert_eq!(Operator::parse("cs"), Some(Operator::Contains));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Like,
    ILike,
    Is,
    Not,
    Adjacent,
    In,
    Contains,
    ContainedIn,
    Overlap,
    StrictlyLeft,
    StrictlyRight,
    NotRightOf,
    NotLeftOf,
    /// `to_tsquery`
    FTS,
    /// `plainto_tsquery`
    PLFTS,
    /// `phraseto_tsquery`
    PHFTS,
    /// `websearch_to_tsquery`
    WFTS,
    And,
    Or,
}

impl Operator {
    /// Every operator, in declaration order
    pub const ALL: [Operator; 25] = [
        Operator::Equals,
        Operator::NotEqual,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::Like,
        Operator::ILike,
        Operator::Is,
        Operator::Not,
        Operator::Adjacent,
        Operator::In,
        Operator::Contains,
        Operator::ContainedIn,
        Operator::Overlap,
        Operator::StrictlyLeft,
        Operator::StrictlyRight,
        Operator::NotRightOf,
        Operator::NotLeftOf,
        Operator::FTS,
        Operator::PLFTS,
        Operator::PHFTS,
        Operator::WFTS,
        Operator::And,
        Operator::Or,
    ];

    /// The wire token PostgREST expects for this operator
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "eq",
            Operator::NotEqual => "neq",
            Operator::GreaterThan => "gt",
            Operator::GreaterThanOrEqual => "gte",
            Operator::LessThan => "lt",
            Operator::LessThanOrEqual => "lte",
            Operator::Like => "like",
            Operator::ILike => "ilike",
            Operator::Is => "is",
            Operator::Not => "not",
            Operator::Adjacent => "adj",
            Operator::In => "in",
            Operator::Contains => "cs",
            Operator::ContainedIn => "cd",
            Operator::Overlap => "ov",
            Operator::StrictlyLeft => "sl",
            Operator::StrictlyRight => "sr",
            Operator::NotRightOf => "nxr",
            Operator::NotLeftOf => "nxl",
            Operator::FTS => "fts",
            Operator::PLFTS => "plfts",
            Operator::PHFTS => "phfts",
            Operator::WFTS => "wfts",
            Operator::And => "and",
            Operator::Or => "or",
        }
    }

    /// Parse an operator from its wire token
    ///
    /// Tokens are matched exactly; PostgREST is case sensitive here.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == token)
    }

    /// Comparators, which accept a single scalar literal
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Operator::Equals
                | Operator::NotEqual
                | Operator::GreaterThan
                | Operator::GreaterThanOrEqual
                | Operator::LessThan
                | Operator::LessThanOrEqual
                | Operator::Like
                | Operator::ILike
                | Operator::Is
                | Operator::Not
                | Operator::Adjacent
        )
    }

    /// Operators accepting a list or a JSON mapping
    #[must_use]
    pub const fn is_membership(&self) -> bool {
        matches!(
            self,
            Operator::In | Operator::Contains | Operator::ContainedIn | Operator::Overlap
        )
    }

    /// Operators accepting an [`Interval`](crate::Interval)
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(
            self,
            Operator::Contains
                | Operator::ContainedIn
                | Operator::Overlap
                | Operator::StrictlyLeft
                | Operator::StrictlyRight
                | Operator::NotRightOf
                | Operator::NotLeftOf
                | Operator::Adjacent
        )
    }

    /// `sl`, `sr`, `nxr`, `nxl`: only meaningful against a range
    #[must_use]
    pub const fn is_range_position(&self) -> bool {
        matches!(
            self,
            Operator::StrictlyLeft
                | Operator::StrictlyRight
                | Operator::NotRightOf
                | Operator::NotLeftOf
        )
    }

    /// Full-text search operators
    #[must_use]
    pub const fn is_full_text(&self) -> bool {
        matches!(
            self,
            Operator::FTS | Operator::PLFTS | Operator::PHFTS | Operator::WFTS
        )
    }

    /// `and` / `or`
    #[must_use]
    pub const fn is_logical(&self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }
}

impl core::fmt::Display for Operator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Operator {
    type Err = OperatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::parse(s).ok_or(OperatorParseError)
    }
}

/// Error returned when parsing an unknown operator token
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator token")]
pub struct OperatorParseError;

/// Sort direction for `order`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ordering {
    #[default]
    Ascending,
    Descending,
}

impl Ordering {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Ordering::Ascending => "asc",
            Ordering::Descending => "desc",
        }
    }
}

impl core::fmt::Display for Ordering {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where NULLs sort relative to other values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NullPosition {
    #[default]
    First,
    Last,
}

impl NullPosition {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NullPosition::First => "nullsfirst",
            NullPosition::Last => "nullslast",
        }
    }
}

impl core::fmt::Display for NullPosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_tokens() {
        assert_eq!(Operator::Equals.as_str(), "eq");
        assert_eq!(Operator::NotEqual.as_str(), "neq");
        assert_eq!(Operator::GreaterThanOrEqual.as_str(), "gte");
        assert_eq!(Operator::ContainedIn.as_str(), "cd");
        assert_eq!(Operator::NotRightOf.as_str(), "nxr");
        assert_eq!(Operator::NotLeftOf.as_str(), "nxl");
        assert_eq!(Operator::PHFTS.as_str(), "phfts");
        assert_eq!(Operator::Or.as_str(), "or");
    }

    #[test]
    fn test_operator_tokens_are_unique() {
        for (i, a) in Operator::ALL.iter().enumerate() {
            for b in &Operator::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str(), "{a:?} and {b:?} share a token");
            }
        }
    }

    #[test]
    fn test_operator_parse() {
        for op in Operator::ALL {
            assert_eq!(Operator::parse(op.as_str()), Some(op));
            assert_eq!(op.as_str().parse::<Operator>(), Ok(op));
        }
        assert_eq!(Operator::parse("EQ"), None);
        assert_eq!(Operator::parse(""), None);
        assert!("between".parse::<Operator>().is_err());
    }

    #[test]
    fn test_operator_categories() {
        assert!(Operator::Like.is_comparison());
        assert!(!Operator::In.is_comparison());
        assert!(Operator::In.is_membership());
        assert!(!Operator::In.is_range());
        assert!(Operator::Contains.is_membership());
        assert!(Operator::Contains.is_range());
        assert!(Operator::Adjacent.is_range());
        assert!(Operator::WFTS.is_full_text());
        assert!(Operator::And.is_logical());
        assert!(!Operator::Not.is_logical());
        assert!(Operator::StrictlyLeft.is_range_position());
        assert!(!Operator::Adjacent.is_range_position());
    }

    #[test]
    fn test_comparators() {
        let comparators: Vec<_> = Operator::ALL
            .into_iter()
            .filter(Operator::is_comparison)
            .map(|op| op.as_str())
            .collect();
        assert_eq!(
            comparators,
            ["eq", "neq", "gt", "gte", "lt", "lte", "like", "ilike", "is", "not", "adj"]
        );
    }

    #[test]
    fn test_ordering_and_null_position_tokens() {
        assert_eq!(Ordering::Ascending.as_str(), "asc");
        assert_eq!(Ordering::Descending.as_str(), "desc");
        assert_eq!(NullPosition::First.as_str(), "nullsfirst");
        assert_eq!(NullPosition::Last.as_str(), "nullslast");
        assert_eq!(format!("{}", NullPosition::Last), "nullslast");
        assert_eq!(Ordering::default(), Ordering::Ascending);
        assert_eq!(NullPosition::default(), NullPosition::First);
    }
}
