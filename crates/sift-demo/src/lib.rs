//! Worked examples of `sift` over fixed customer data.
//!
//! [`demos::run`] computes a [`Report`] for the requested sections;
//! [`output::render`] turns it into text, JSON, YAML, or CSV.

pub mod data;
pub mod demos;
pub mod output;
pub mod report;

pub use data::{list_of_records, table_of_records, Customer};
pub use demos::{run, run_all, Section};
pub use output::{render, serialize_structured, OutputDestination, OutputMode, SerializeError};
pub use report::{Entry, Report};
