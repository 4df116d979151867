//! Ordering rules and field-based ordering.
//!
//! A [`Rule`] is a reusable three-way comparison over `T`. Rules come from
//! the natural order ([`Natural`]), from a derived key ([`by_key`]), from
//! text compared without regard to case ([`CaseInsensitive`]), from named
//! record fields ([`FieldRule`]), or from any `Fn(&T, &T) -> Ordering`.
//!
//! [`Dir`] and [`OrderBy`] describe field orderings used by
//! [`Query`](crate::Query) and [`FieldRule`].

use std::cmp::Ordering;

use crate::value::Value;

/// A three-way comparison over `T`.
///
/// Closures are rules too. Annotate their parameter types so the closure is
/// general over the borrow lifetimes:
///
/// ```
/// use std::cmp::Ordering;
///
/// use sift::{Reversed, Rule};
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
/// assert_eq!(Reversed(by_len).compare(&"abc", &"de"), Ordering::Less);
/// ```
pub trait Rule<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Rule<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural (`Ord`) order, ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Rule<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Another rule, reversed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<R>(pub R);

impl<T: ?Sized, R: Rule<T>> Rule<T> for Reversed<R> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

/// Two rules chained: the second breaks ties left by the first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThenWith<A, B>(pub A, pub B);

impl<T: ?Sized, A: Rule<T>, B: Rule<T>> Rule<T> for ThenWith<A, B> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).then_with(|| self.1.compare(a, b))
    }
}

/// Text order ignoring case.
///
/// Strings that differ only in case fall back to their natural order, so the
/// rule stays a total order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl<T: AsRef<str> + ?Sized> Rule<T> for CaseInsensitive {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let (a, b) = (a.as_ref(), b.as_ref());
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }
}

/// Builds a rule comparing the natural order of a derived key.
///
/// ```
/// use sift::{by_key, sorted_view};
///
/// let names = ["Mark Smith", "Simon Says", "Howard Brett"];
/// let by_surname = by_key(|name: &&str| name.rsplit(' ').next().map(str::to_string));
/// let sorted = sorted_view(&names, by_surname);
/// assert_eq!(sorted, vec![&"Howard Brett", &"Simon Says", &"Mark Smith"]);
/// ```
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| key(a).cmp(&key(b))
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ordering clause specifying a field and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub dir: Dir,
}

impl OrderBy {
    /// Creates a new ascending ordering for the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    /// Creates a new descending ordering for the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    /// Creates a new ordering with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    /// Compares two values according to this ordering.
    ///
    /// Returns `None` if the values cannot be compared (type mismatch or NaN).
    pub fn compare<'a>(&self, a: &Value<'a>, b: &Value<'a>) -> Option<Ordering> {
        let base_ordering = compare_values(a, b)?;
        Some(self.dir.apply(base_ordering))
    }
}

/// Compares two values of the same type.
///
/// Returns `None` if the types don't match or comparison is not possible (NaN).
pub fn compare_values<'a>(a: &Value<'a>, b: &Value<'a>) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),

        // None values sort last
        (Value::None, Value::None) => Some(Ordering::Equal),
        (Value::None, _) => Some(Ordering::Greater),
        (_, Value::None) => Some(Ordering::Less),

        // Type mismatch - cannot compare
        _ => None,
    }
}

/// Compares two items using a list of ordering clauses.
///
/// Uses the first clause as the primary sort key, the second to break ties, etc.
/// If all clauses compare equal, returns `Equal`.
pub fn compare_by_orderings<T, F>(a: &T, b: &T, orderings: &[OrderBy], accessor: &F) -> Ordering
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    for order_by in orderings {
        let val_a = accessor(a, &order_by.field);
        let val_b = accessor(b, &order_by.field);

        match order_by.compare(&val_a, &val_b) {
            Some(Ordering::Equal) => {}
            Some(ordering) => return ordering,
            None => log::debug!(
                "field '{}' is not comparable ({} vs {}), treating as equal",
                order_by.field,
                val_a.type_name(),
                val_b.type_name()
            ),
        }
    }
    Ordering::Equal
}

/// A [`Rule`] over records built from named field orderings.
///
/// ```
/// use sift::{Dir, FieldRule, Number, Rule, Value};
///
/// struct Row { age: i64 }
///
/// fn accessor<'a>(row: &'a Row, field: &str) -> Value<'a> {
///     match field {
///         "age" => Value::Number(Number::I64(row.age)),
///         _ => Value::None,
///     }
/// }
///
/// let oldest_first = FieldRule::new(accessor).order_by("age", Dir::Desc);
/// assert!(oldest_first.compare(&Row { age: 50 }, &Row { age: 20 }).is_lt());
/// ```
#[derive(Debug, Clone)]
pub struct FieldRule<F> {
    orderings: Vec<OrderBy>,
    accessor: F,
}

impl<F> FieldRule<F> {
    /// Creates a rule with no orderings; every pair compares equal until
    /// orderings are added.
    pub fn new(accessor: F) -> Self {
        FieldRule {
            orderings: Vec::new(),
            accessor,
        }
    }

    /// Creates a rule from existing orderings.
    pub fn with_orderings(accessor: F, orderings: Vec<OrderBy>) -> Self {
        FieldRule {
            orderings,
            accessor,
        }
    }

    /// Adds an ordering clause.
    pub fn order_by(mut self, field: &str, dir: Dir) -> Self {
        self.orderings.push(OrderBy::new(field, dir));
        self
    }

    /// Returns the ordering clauses.
    pub fn orderings(&self) -> &[OrderBy] {
        &self.orderings
    }
}

impl<T, F> Rule<T> for FieldRule<F>
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        compare_by_orderings(a, b, &self.orderings, &self.accessor)
    }
}
