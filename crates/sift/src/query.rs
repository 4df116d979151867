//! Query builder and executor.
//!
//! The [`Query`] struct provides a fluent builder API for constructing queries
//! over records and methods for executing them against collections.

use crate::clause::{Clause, ClauseValue};
use crate::error::Result;
use crate::op::Op;
use crate::ordering::{compare_by_orderings, Dir, FieldRule, OrderBy};
use crate::sequence::{extremum, Extreme};
use crate::value::Value;

/// A query for filtering and ordering collections.
///
/// Queries consist of three clause groups:
/// - **AND**: All clauses must match
/// - **OR**: At least one clause must match (or none if empty)
/// - **NOT**: No clause may match
///
/// The overall match logic is:
/// ```text
/// match = (all AND clauses match)
///       ∧ (at least one OR clause matches, OR no OR clauses exist)
///       ∧ (no NOT clause matches)
/// ```
///
/// A field the accessor reports as [`Value::None`] fails every clause except
/// `Present(false)`; in particular an absent field passes a NOT clause.
///
/// # Example
///
/// ```
/// use sift::{Dir, Op, Query};
///
/// let query = Query::new()
///     .and_present("email", true)
///     .and_icontains("email", "@gmail")
///     .and_lt("age", 40)
///     .or("name", Op::StartsWith, "S")
///     .or("name", Op::StartsWith, "M")
///     .order_by("age", Dir::Desc)
///     .limit(20)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    and_clauses: Vec<Clause>,
    or_clauses: Vec<Clause>,
    not_clauses: Vec<Clause>,
    orderings: Vec<OrderBy>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl Query {
    /// Creates a new empty query.
    ///
    /// An empty query matches all items.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Generic clause builders
    // ========================================================================

    /// Adds an AND clause.
    pub fn and(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.and_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an OR clause.
    pub fn or(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.or_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds a NOT clause.
    pub fn not(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.not_clauses.push(Clause::new(field, op, value));
        self
    }

    // ========================================================================
    // Shorthands
    // ========================================================================
    //
    // AND is where most clauses go, so it gets one method per operator.
    // OR and NOT take the generic form, e.g. `.or("name", Op::StartsWith, "S")`.

    pub fn and_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Eq, value)
    }

    pub fn and_ne(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Ne, value)
    }

    pub fn and_gt(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gt, value)
    }

    pub fn and_gte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gte, value)
    }

    pub fn and_lt(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Lt, value)
    }

    pub fn and_lte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Lte, value)
    }

    /// Substring match, case-sensitive.
    pub fn and_contains(self, field: &str, value: &str) -> Self {
        self.and(field, Op::Contains, value)
    }

    /// Substring match ignoring case. The usual way to test email domains.
    pub fn and_icontains(self, field: &str, value: &str) -> Self {
        self.and(field, Op::IContains, value)
    }

    /// Requires the field to be present (`true`) or absent (`false`).
    ///
    /// Put this ahead of clauses that read an optional field so the
    /// absence check is visible at the call site.
    pub fn and_present(self, field: &str, present: bool) -> Self {
        self.and(field, Op::Present, present)
    }

    /// Matches when the field is present (`true`) or absent (`false`),
    /// as one alternative among the OR clauses.
    pub fn or_present(self, field: &str, present: bool) -> Self {
        self.or(field, Op::Present, present)
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// Adds an ordering clause.
    pub fn order_by(mut self, field: &str, dir: Dir) -> Self {
        self.orderings.push(OrderBy::new(field, dir));
        self
    }

    /// Adds an ascending ordering clause.
    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, Dir::Asc)
    }

    /// Adds a descending ordering clause.
    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, Dir::Desc)
    }

    // ========================================================================
    // Limits
    // ========================================================================

    /// Sets the maximum number of results to return.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets the number of results to skip.
    pub fn offset(mut self, n: usize) -> Self {
        self.offset = Some(n);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Finalizes the query without validation.
    pub fn build(self) -> Self {
        self
    }

    /// Finalizes the query, rejecting clauses whose operator does not fit
    /// the clause value.
    pub fn try_build(self) -> Result<Self> {
        self.clauses().try_for_each(Clause::validate)?;
        Ok(self)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the AND clauses.
    pub fn and_clauses(&self) -> &[Clause] {
        &self.and_clauses
    }

    /// Returns the OR clauses.
    pub fn or_clauses(&self) -> &[Clause] {
        &self.or_clauses
    }

    /// Returns the NOT clauses.
    pub fn not_clauses(&self) -> &[Clause] {
        &self.not_clauses
    }

    /// Returns the ordering clauses.
    pub fn orderings(&self) -> &[OrderBy] {
        &self.orderings
    }

    /// Returns `true` if this query has no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.and_clauses.is_empty() && self.or_clauses.is_empty() && self.not_clauses.is_empty()
    }

    fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.and_clauses
            .iter()
            .chain(&self.or_clauses)
            .chain(&self.not_clauses)
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single item matches this query.
    ///
    /// The accessor function extracts field values from the item.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let and_pass = self
            .and_clauses
            .iter()
            .all(|clause| clause.matches(&accessor(item, &clause.field)));

        if !and_pass {
            return false;
        }

        let or_pass = self.or_clauses.is_empty()
            || self
                .or_clauses
                .iter()
                .any(|clause| clause.matches(&accessor(item, &clause.field)));

        if !or_pass {
            return false;
        }

        self.not_clauses
            .iter()
            .all(|clause| !clause.matches(&accessor(item, &clause.field)))
    }

    /// Filters a slice, returning references to matching items.
    ///
    /// Results are sorted according to the query's ordering clauses (stable,
    /// so ties keep their input order), then offset and limit are applied.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let mut results: Vec<&'a T> = items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect();

        log::trace!("query matched {} of {} items", results.len(), items.len());

        if !self.orderings.is_empty() {
            results.sort_by(|a, b| compare_by_orderings(*a, *b, &self.orderings, &accessor));
        }

        let offset = self.offset.unwrap_or(0);
        if offset > 0 {
            if offset >= results.len() {
                return Vec::new();
            }
            results.drain(..offset);
        }

        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        results
    }

    /// Filters and clones matching items.
    pub fn filter_cloned<T, F>(&self, items: &[T], accessor: F) -> Vec<T>
    where
        T: Clone,
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.filter(items, accessor).into_iter().cloned().collect()
    }

    /// Filters a vector in place, keeping only matching items.
    ///
    /// Note: This does not apply ordering, offset, or limit.
    /// Use `filter_cloned` if you need those features.
    pub fn filter_mut<T, F>(&self, items: &mut Vec<T>, accessor: F)
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.retain(|item| self.matches(item, &accessor));
    }

    /// Counts the number of matching items.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .count()
    }

    /// Returns `true` if any item matches.
    pub fn any<T, F>(&self, items: &[T], accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().any(|item| self.matches(item, &accessor))
    }

    /// Returns `true` if all items match.
    pub fn all<T, F>(&self, items: &[T], accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().all(|item| self.matches(item, &accessor))
    }

    /// Finds the first matching item.
    pub fn find<'a, T, F>(&self, items: &'a [T], accessor: F) -> Option<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        items.iter().find(|item| self.matches(*item, &accessor))
    }

    /// Finds the first matching item and returns its index.
    pub fn position<T, F>(&self, items: &[T], accessor: F) -> Option<usize>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().position(|item| self.matches(item, &accessor))
    }

    /// Returns the matching item with the smallest value of `field`.
    ///
    /// Ties keep the first match. An item whose field is absent is only
    /// returned when no matching item has the field.
    pub fn min_by_field<'a, T, F>(&self, items: &'a [T], field: &str, accessor: F) -> Option<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.extremum_by_field(items, field, Extreme::Min, accessor)
    }

    /// Returns the matching item with the largest value of `field`.
    ///
    /// Ties keep the first match. An item whose field is absent is only
    /// returned when no matching item has the field.
    pub fn max_by_field<'a, T, F>(&self, items: &'a [T], field: &str, accessor: F) -> Option<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.extremum_by_field(items, field, Extreme::Max, accessor)
    }

    fn extremum_by_field<'a, T, F>(
        &self,
        items: &'a [T],
        field: &str,
        direction: Extreme,
        accessor: F,
    ) -> Option<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let with_field = items.iter().filter(|item| {
            self.matches(*item, &accessor) && !accessor(*item, field).is_none()
        });
        let rule = FieldRule::new(&accessor).order_by(field, Dir::Asc);
        extremum(with_field, rule, direction).or_else(|| self.find(items, &accessor))
    }
}
