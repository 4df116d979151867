//! Sift - read-only queries over borrowed collections.
//!
//! Sift provides two layers that share one ordering vocabulary:
//!
//! - **Sequence operations** ([`extremum`], [`dedupe`], [`filter`], [`map`],
//!   [`sorted_view`], [`reverse`], [`keyed_extremum`], [`filter_entries`], ...)
//!   take any container by reference and return new views or scalars. The
//!   source is never modified.
//! - **Field queries** ([`Query`]) filter and order records through an
//!   accessor that maps a field name to a [`Value`], with AND/OR/NOT clause
//!   groups, limits, and offsets.
//!
//! # Quick Start
//!
//! ```rust
//! use sift::{extremum, Extreme, Natural, Number, Query, Value};
//!
//! struct Customer {
//!     name: String,
//!     age: i32,
//!     email: Option<String>,
//! }
//!
//! fn accessor<'a>(c: &'a Customer, field: &str) -> Value<'a> {
//!     match field {
//!         "name" => Value::String(&c.name),
//!         "age" => Value::Number(Number::from(c.age)),
//!         "email" => Value::from(c.email.as_deref()),
//!         _ => Value::None,
//!     }
//! }
//!
//! let customers = vec![
//!     Customer { name: "Simon Says".into(), age: 40, email: Some("SimonSays123@gmail.com".into()) },
//!     Customer { name: "Mark Smith".into(), age: 45, email: Some("mSmith565@gmail.com".into()) },
//!     Customer { name: "Gaia Sheppard".into(), age: 18, email: Some("gaiasheppard@aol.com".into()) },
//!     Customer { name: "Example null dude".into(), age: 35, email: None },
//! ];
//!
//! let query = Query::new()
//!     .and_present("email", true)
//!     .and_icontains("email", "@gmail")
//!     .and_gt("age", 30)
//!     .order_desc("age")
//!     .build();
//!
//! let results = query.filter(&customers, accessor);
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].name, "Mark Smith");
//!
//! let ages: Vec<i32> = customers.iter().map(|c| c.age).collect();
//! assert_eq!(extremum(&ages, Natural, Extreme::Min), Some(&18));
//! ```
//!
//! # Query Semantics
//!
//! Queries combine three clause groups with fixed logic:
//!
//! ```text
//! match = (all AND clauses match)
//!       ∧ (at least one OR clause matches, OR no OR clauses exist)
//!       ∧ (no NOT clause matches)
//! ```
//!
//! A field reported as [`Value::None`] fails every clause except
//! `Present(false)`. Use [`Query::and_present`] to make the absence check
//! explicit.
//!
//! # Field Types and Operators
//!
//! | Type | Operators |
//! |------|-----------|
//! | String | `Eq`, `Ne`, `StartsWith`, `EndsWith`, `Contains`, `IContains`, `Regex`, `Gt`, `Gte`, `Lt`, `Lte` |
//! | Number | `Eq`, `Ne`, `Gt`, `Gte`, `Lt`, `Lte` |
//! | Bool | `Eq`, `Ne` |
//! | Any | `Present` |
//!
//! # Ties
//!
//! [`extremum`] keeps the first of several equal elements.
//! [`keyed_extremum`] by value gives equal values to the smaller key, so its
//! answer does not depend on hash map iteration order.

mod clause;
mod error;
mod op;
mod ordering;
mod query;
mod sequence;
mod traits;
mod value;

// Re-export public API
pub use clause::{Clause, ClauseValue};
pub use error::{Result, SiftError};
pub use op::Op;
pub use ordering::{
    by_key, compare_by_orderings, compare_values, CaseInsensitive, Dir, FieldRule, Natural,
    OrderBy, Reversed, Rule, ThenWith,
};
pub use query::Query;
pub use sequence::{
    count, dedupe, extremum, extremum_key_of, extremum_value_of, filter, filter_entries,
    keyed_extremum, keyed_extremum_by, map, max, max_by, min, min_by, reverse, sorted_natural,
    sorted_view, sorted_view_stable, Extreme, Select,
};
pub use traits::Seekable;
pub use value::{Number, Value};
