//! Clause types for query predicates.
//!
//! A [`Clause`] represents a single filter predicate: a field name,
//! an operator, and a comparison value.

use regex::Regex;

use crate::error::{Result, SiftError};
use crate::op::Op;
use crate::value::{Number, Value};

/// A single filter predicate.
///
/// A clause consists of:
/// - A field name (the field to compare)
/// - An operator (how to compare)
/// - A value (what to compare against)
///
/// # Example
///
/// ```
/// use sift::{Clause, Op, ClauseValue};
///
/// let clause = Clause {
///     field: "email".to_string(),
///     op: Op::IContains,
///     value: ClauseValue::String("@gmail".to_string()),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Clause {
    /// The field name to compare.
    pub field: String,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: ClauseValue,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Checks that the operator makes sense for the clause value.
    ///
    /// Invalid combinations never match at execution time; this surfaces them
    /// as an error instead.
    pub fn validate(&self) -> Result<()> {
        let valid = match (&self.value, self.op) {
            (ClauseValue::Bool(_), Op::Present) => true,
            (_, Op::Present) => false,
            (ClauseValue::Regex(_), op) => op == Op::Regex,
            (_, Op::Regex) => false,
            (ClauseValue::String(_), op) => op.is_string_op(),
            (ClauseValue::Number(_), op) => op.is_number_op(),
            (ClauseValue::Bool(_), op) => op.is_bool_op(),
        };

        if valid {
            Ok(())
        } else {
            Err(SiftError::InvalidOperatorForType {
                op: self.op.as_str(),
                value_type: self.value.type_name(),
            })
        }
    }

    /// Evaluates this clause against a field value.
    ///
    /// Returns `true` if the value matches the clause's predicate.
    /// Returns `false` if the value doesn't match, if the types are
    /// incompatible, or if the field is absent. The only clause an absent
    /// field can satisfy is `Present(false)`.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        if self.op == Op::Present {
            return match self.value {
                ClauseValue::Bool(want_present) => want_present != field_value.is_none(),
                _ => false,
            };
        }

        match (&self.value, field_value) {
            // Absent field never satisfies a positive assertion, Ne included
            (_, Value::None) => false,

            (ClauseValue::String(pattern), Value::String(s)) => self.match_string(s, pattern),

            (ClauseValue::Regex(regex), Value::String(s)) => {
                self.op == Op::Regex && regex.is_match(s)
            }

            (ClauseValue::Number(clause_num), Value::Number(field_num)) => {
                self.match_number(*field_num, *clause_num)
            }

            (ClauseValue::Bool(clause_bool), Value::Bool(field_bool)) => {
                self.match_bool(*field_bool, *clause_bool)
            }

            // Type mismatch
            _ => false,
        }
    }

    fn match_string(&self, field: &str, pattern: &str) -> bool {
        match self.op {
            Op::StartsWith => field.starts_with(pattern),
            Op::EndsWith => field.ends_with(pattern),
            Op::Contains => field.contains(pattern),
            Op::IContains => field.to_lowercase().contains(&pattern.to_lowercase()),
            op if op.is_ordering_op() => op.eval_ordering(field.cmp(pattern)),
            _ => false,
        }
    }

    fn match_number(&self, field: Number, clause: Number) -> bool {
        if !self.op.is_number_op() {
            return false;
        }
        match field.compare(clause) {
            Some(ordering) => self.op.eval_ordering(ordering),
            None => false, // NaN comparison
        }
    }

    fn match_bool(&self, field: bool, clause: bool) -> bool {
        match self.op {
            Op::Eq => field == clause,
            Op::Ne => field != clause,
            _ => false,
        }
    }
}

/// Owned value for storage in a clause.
///
/// Unlike [`Value`], which borrows from the source record, `ClauseValue`
/// owns its data so it can be stored in query definitions.
#[derive(Debug, Clone)]
pub enum ClauseValue {
    /// String value.
    String(String),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Compiled regular expression.
    Regex(Regex),
}

impl ClauseValue {
    /// Compiles `pattern` into a regex clause value.
    pub fn regex(pattern: &str) -> Result<Self> {
        Ok(ClauseValue::Regex(Regex::new(pattern)?))
    }

    /// Short type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ClauseValue::String(_) => "string",
            ClauseValue::Number(_) => "number",
            ClauseValue::Bool(_) => "bool",
            ClauseValue::Regex(_) => "regex",
        }
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_string())
    }
}

impl From<Number> for ClauseValue {
    fn from(n: Number) -> Self {
        ClauseValue::Number(n)
    }
}

impl From<bool> for ClauseValue {
    fn from(b: bool) -> Self {
        ClauseValue::Bool(b)
    }
}

impl From<Regex> for ClauseValue {
    fn from(r: Regex) -> Self {
        ClauseValue::Regex(r)
    }
}

macro_rules! clause_value_from_number {
    ($($t:ty),+) => {
        $(
            impl From<$t> for ClauseValue {
                fn from(n: $t) -> Self {
                    ClauseValue::Number(Number::from(n))
                }
            }
        )+
    };
}

clause_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_eq() {
        let clause = Clause::new("name", Op::Eq, "hello");
        assert!(clause.matches(&Value::String("hello")));
        assert!(!clause.matches(&Value::String("world")));
        assert!(!clause.matches(&Value::String("Hello"))); // case sensitive
    }

    #[test]
    fn string_ne() {
        let clause = Clause::new("name", Op::Ne, "hello");
        assert!(!clause.matches(&Value::String("hello")));
        assert!(clause.matches(&Value::String("world")));
    }

    #[test]
    fn string_startswith_endswith() {
        let starts = Clause::new("name", Op::StartsWith, "hello");
        assert!(starts.matches(&Value::String("hello world")));
        assert!(!starts.matches(&Value::String("say hello")));

        let ends = Clause::new("name", Op::EndsWith, "world");
        assert!(ends.matches(&Value::String("hello world")));
        assert!(!ends.matches(&Value::String("world!")));
    }

    #[test]
    fn string_contains_and_icontains() {
        let clause = Clause::new("email", Op::Contains, "@gmail");
        assert!(clause.matches(&Value::String("someone@gmail.com")));
        assert!(!clause.matches(&Value::String("someone@GMAIL.com")));

        let clause = Clause::new("email", Op::IContains, "@gmail");
        assert!(clause.matches(&Value::String("someone@GMAIL.com")));
        assert!(!clause.matches(&Value::String("someone@aol.com")));
    }

    #[test]
    fn string_lexicographic_thresholds() {
        let clause = Clause::new("name", Op::Gt, "M");
        assert!(clause.matches(&Value::String("Tyrell")));
        assert!(!clause.matches(&Value::String("Alex")));
        // Lowercase letters sort after uppercase ones
        assert!(clause.matches(&Value::String("alex")));

        let clause = Clause::new("name", Op::Gte, "n");
        assert!(clause.matches(&Value::String("n")));
        assert!(!clause.matches(&Value::String("maddie")));
    }

    #[test]
    fn string_regex() {
        let regex = Regex::new(r"^\d{3}-\d{3}-\d{4}$").unwrap();
        let clause = Clause::new("phone", Op::Regex, regex);
        assert!(clause.matches(&Value::String("614-123-4567")));
        assert!(!clause.matches(&Value::String("11111")));
        assert!(!clause.matches(&Value::String("Frankfort, OH")));
    }

    #[test]
    fn number_comparisons() {
        let clause_eq = Clause::new("age", Op::Eq, 10i64);
        assert!(clause_eq.matches(&Value::Number(Number::I64(10))));
        assert!(!clause_eq.matches(&Value::Number(Number::I64(11))));

        let clause_gt = Clause::new("age", Op::Gt, 30i64);
        assert!(clause_gt.matches(&Value::Number(Number::I64(31))));
        assert!(!clause_gt.matches(&Value::Number(Number::I64(30))));

        let clause_lt = Clause::new("age", Op::Lt, 40i64);
        assert!(clause_lt.matches(&Value::Number(Number::I64(39))));
        assert!(!clause_lt.matches(&Value::Number(Number::I64(40))));

        let clause_lte = Clause::new("age", Op::Lte, 40i64);
        assert!(clause_lte.matches(&Value::Number(Number::I64(40))));
        assert!(!clause_lte.matches(&Value::Number(Number::I64(41))));
    }

    #[test]
    fn number_mixed_types() {
        let clause = Clause::new("count", Op::Eq, 10i64);
        assert!(clause.matches(&Value::Number(Number::U64(10))));
        assert!(clause.matches(&Value::Number(Number::F64(10.0))));
    }

    #[test]
    fn number_with_string_operator_never_matches() {
        let clause = Clause::new("count", Op::Contains, 10i64);
        assert!(!clause.matches(&Value::Number(Number::I64(10))));
    }

    #[test]
    fn bool_comparisons() {
        let clause = Clause::new("active", Op::Eq, true);
        assert!(clause.matches(&Value::Bool(true)));
        assert!(!clause.matches(&Value::Bool(false)));

        let clause = Clause::new("active", Op::Ne, true);
        assert!(clause.matches(&Value::Bool(false)));
    }

    #[test]
    fn none_value_never_matches() {
        let clause = Clause::new("email", Op::Eq, "test");
        assert!(!clause.matches(&Value::None));

        let clause_ne = Clause::new("email", Op::Ne, "test");
        assert!(!clause_ne.matches(&Value::None));

        let clause_icontains = Clause::new("email", Op::IContains, "@gmail");
        assert!(!clause_icontains.matches(&Value::None));
    }

    #[test]
    fn present_handles_absence_explicitly() {
        let present = Clause::new("email", Op::Present, true);
        assert!(present.matches(&Value::String("a@b.com")));
        assert!(present.matches(&Value::String("")));
        assert!(!present.matches(&Value::None));

        let absent = Clause::new("email", Op::Present, false);
        assert!(absent.matches(&Value::None));
        assert!(!absent.matches(&Value::String("a@b.com")));
    }

    #[test]
    fn type_mismatch_doesnt_match() {
        let clause = Clause::new("name", Op::Eq, "test");
        assert!(!clause.matches(&Value::Number(Number::I64(42))));
        assert!(!clause.matches(&Value::Bool(true)));
    }

    #[test]
    fn validate_accepts_sensible_combinations() {
        assert!(Clause::new("name", Op::Contains, "x").validate().is_ok());
        assert!(Clause::new("name", Op::Gte, "n").validate().is_ok());
        assert!(Clause::new("age", Op::Lt, 40).validate().is_ok());
        assert!(Clause::new("email", Op::Present, true).validate().is_ok());
        let regex = Regex::new("^a").unwrap();
        assert!(Clause::new("name", Op::Regex, regex).validate().is_ok());
    }

    #[test]
    fn validate_rejects_mismatched_operator() {
        let err = Clause::new("age", Op::Contains, 40).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "operator 'contains' is not valid for number values"
        );

        assert!(Clause::new("email", Op::Present, "yes").validate().is_err());
        assert!(Clause::new("name", Op::Regex, "^a").validate().is_err());
        assert!(Clause::new("active", Op::Gt, true).validate().is_err());
    }
}
