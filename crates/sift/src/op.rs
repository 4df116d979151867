//! Comparison operators for query clauses.
//!
//! The [`Op`] enum defines all supported comparison operators, organized by
//! the types they apply to. Not all operators are valid for all types.

use std::cmp::Ordering;

/// Comparison operator for a query clause.
///
/// Operators are grouped by the types they support:
/// - **Universal**: `Eq`, `Ne`, `Present`
/// - **String**: `StartsWith`, `EndsWith`, `Contains`, `IContains`, `Regex`
/// - **Numeric**: `Gt`, `Gte`, `Lt`, `Lte` (also usable on strings for
///   lexicographic thresholds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    // Universal operators
    /// Equal (exact match).
    Eq,
    /// Not equal.
    Ne,
    /// Field presence test. The clause value is a bool: `true` matches any
    /// present value, `false` matches only an absent one.
    Present,

    // String operators
    /// String starts with prefix.
    StartsWith,
    /// String ends with suffix.
    EndsWith,
    /// String contains substring.
    Contains,
    /// String contains substring, ignoring case.
    IContains,
    /// String matches regular expression.
    Regex,

    // Ordering operators
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
}

impl Op {
    /// Returns `true` if this operator is valid for string comparisons.
    pub fn is_string_op(self) -> bool {
        matches!(
            self,
            Op::Eq
                | Op::Ne
                | Op::StartsWith
                | Op::EndsWith
                | Op::Contains
                | Op::IContains
                | Op::Regex
                | Op::Gt
                | Op::Gte
                | Op::Lt
                | Op::Lte
        )
    }

    /// Returns `true` if this operator is valid for numeric comparisons.
    pub fn is_number_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne | Op::Gt | Op::Gte | Op::Lt | Op::Lte)
    }

    /// Returns `true` if this operator is valid for boolean comparisons.
    pub fn is_bool_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne | Op::Present)
    }

    /// Returns `true` if this operator is decided by an [`Ordering`].
    pub fn is_ordering_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne | Op::Gt | Op::Gte | Op::Lt | Op::Lte)
    }

    /// Evaluates a comparison given an ordering result.
    ///
    /// The ordering is `field.cmp(clause_value)`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            _ => false,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Present => "present",
            Op::StartsWith => "startswith",
            Op::EndsWith => "endswith",
            Op::Contains => "contains",
            Op::IContains => "icontains",
            Op::Regex => "regex",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_type_checks() {
        // String ops
        assert!(Op::Eq.is_string_op());
        assert!(Op::Contains.is_string_op());
        assert!(Op::IContains.is_string_op());
        assert!(Op::Regex.is_string_op());
        assert!(Op::Gte.is_string_op());
        assert!(!Op::Present.is_string_op());

        // Number ops
        assert!(Op::Eq.is_number_op());
        assert!(Op::Gt.is_number_op());
        assert!(!Op::Contains.is_number_op());
        assert!(!Op::Present.is_number_op());

        // Bool ops
        assert!(Op::Eq.is_bool_op());
        assert!(Op::Present.is_bool_op());
        assert!(!Op::Gt.is_bool_op());
    }

    #[test]
    fn op_eval_ordering() {
        assert!(Op::Eq.eval_ordering(Ordering::Equal));
        assert!(!Op::Eq.eval_ordering(Ordering::Less));

        assert!(!Op::Ne.eval_ordering(Ordering::Equal));
        assert!(Op::Ne.eval_ordering(Ordering::Greater));

        assert!(Op::Gt.eval_ordering(Ordering::Greater));
        assert!(!Op::Gt.eval_ordering(Ordering::Equal));

        assert!(Op::Gte.eval_ordering(Ordering::Equal));
        assert!(!Op::Gte.eval_ordering(Ordering::Less));

        assert!(Op::Lt.eval_ordering(Ordering::Less));
        assert!(!Op::Lt.eval_ordering(Ordering::Greater));

        assert!(Op::Lte.eval_ordering(Ordering::Equal));
        assert!(!Op::Lte.eval_ordering(Ordering::Greater));

        // Non-ordering operators never match on an ordering alone
        assert!(!Op::Contains.eval_ordering(Ordering::Equal));
        assert!(!Op::Present.eval_ordering(Ordering::Equal));
    }

    #[test]
    fn op_display() {
        assert_eq!(Op::Eq.to_string(), "eq");
        assert_eq!(Op::IContains.to_string(), "icontains");
        assert_eq!(Op::Present.to_string(), "present");
    }
}
