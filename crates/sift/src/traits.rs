//! The [`Seekable`] trait for records that expose named fields.

use crate::value::Value;

/// Trait for types that can be queried by field name.
///
/// Implementors map a field name to a borrowed [`Value`]. Unknown fields and
/// fields that are genuinely missing on a record (an optional email, say)
/// map to [`Value::None`].
///
/// ```
/// use sift::{Number, Query, Seekable, Value};
///
/// struct Customer {
///     name: String,
///     age: i32,
///     email: Option<String>,
/// }
///
/// impl Seekable for Customer {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "age" => Value::Number(Number::from(self.age)),
///             "email" => Value::from(self.email.as_deref()),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let customers = vec![
///     Customer { name: "Simon Says".into(), age: 40, email: Some("SimonSays123@gmail.com".into()) },
///     Customer { name: "Example null dude".into(), age: 35, email: None },
/// ];
///
/// let query = Query::new().and_icontains("email", "@gmail").build();
/// let results = query.filter(&customers, Customer::accessor);
/// assert_eq!(results.len(), 1);
/// ```
pub trait Seekable {
    /// Returns the value of a field for query comparison.
    ///
    /// Returns [`Value::None`] if the field doesn't exist or is absent on
    /// this record.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Returns a static accessor function suitable for use with
    /// [`Query::filter`](crate::Query::filter) and [`FieldRule`](crate::FieldRule).
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}
