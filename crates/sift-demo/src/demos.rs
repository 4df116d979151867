//! The demonstration catalogue.
//!
//! Each section runs a fixed set of queries over sample data and records the
//! results in a [`Report`]. Nothing here prints.

use std::collections::HashMap;

use clap::ValueEnum;
use serde::Serialize;
use serde_json::{json, Value as Json};
use sift::{
    by_key, count, dedupe, extremum, extremum_key_of, extremum_value_of, filter, filter_entries,
    keyed_extremum, map, max, max_by, min, min_by, reverse, sorted_natural, sorted_view,
    sorted_view_stable, CaseInsensitive, Extreme, Natural, Query, Reversed, Seekable, Select,
};

use crate::data::{list_of_records, table_of_records, Customer};
use crate::report::Report;

/// A group of related demonstrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Integer sequences
    Arrays,
    /// Text sequences
    Strings,
    /// The customer list
    Customers,
    /// A string to integer map
    Maps,
    /// The indexed customer table
    Table,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Arrays,
        Section::Strings,
        Section::Customers,
        Section::Maps,
        Section::Table,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Arrays => "arrays",
            Section::Strings => "strings",
            Section::Customers => "customers",
            Section::Maps => "maps",
            Section::Table => "table",
        }
    }

    /// Heading used in text output.
    pub fn title(self) -> &'static str {
        match self {
            Section::Arrays => "Arrays",
            Section::Strings => "Strings",
            Section::Customers => "Customers",
            Section::Maps => "Maps",
            Section::Table => "Customer table",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runs the requested sections in catalogue order, each at most once.
///
/// An empty request runs every section.
pub fn run(sections: &[Section]) -> Report {
    let mut report = Report::new();
    for section in Section::ALL {
        if !sections.is_empty() && !sections.contains(&section) {
            continue;
        }
        log::debug!("running section {}", section);
        match section {
            Section::Arrays => arrays(&mut report),
            Section::Strings => strings(&mut report),
            Section::Customers => customers(&mut report),
            Section::Maps => maps(&mut report),
            Section::Table => table(&mut report),
        }
    }
    log::info!("collected {} results", report.len());
    report
}

/// Runs every section.
pub fn run_all() -> Report {
    run(&Section::ALL)
}

fn arrays(report: &mut Report) {
    let s = Section::Arrays;

    let numbers = [
        100, 99, 98, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 1, 3, 5, 7, 9, 2, 4, 6, 8, 10, 97, 96,
    ];
    report.push(s, "count", json!(count(&numbers)));
    report.push(s, "min", json!(min(&numbers).copied().unwrap_or(-1)));
    report.push(s, "max", json!(max(&numbers).copied().unwrap_or(-1)));

    let empty: [i32; 0] = [];
    report.push(
        s,
        "min of an empty list, defaulted",
        json!(min(&empty).copied().unwrap_or(-1)),
    );

    let with_thousand = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 100, 1000];
    let descending = |a: &i32, b: &i32| b.cmp(a);
    report.push(
        s,
        "max under a reversed rule",
        json!(max_by(&with_thousand, descending).copied().unwrap_or(-1)),
    );
    report.push(
        s,
        "min under a reversed rule",
        json!(min_by(&with_thousand, descending).copied().unwrap_or(-1)),
    );

    let scattered = [5, 9, 100, 50, 6, 4, 5, 7, 2, 3, 5, 6, 4, 4, 5, 6, 433, 2];
    report.push(s, "max of a longer list", json!(max(&scattered).copied().unwrap_or(-1)));

    let paired = [1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
    report.push(s, "dedupe pairs", json!(dedupe(&paired)));
    let tripled = [1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5];
    report.push(s, "dedupe triples", json!(dedupe(&tripled)));
    let distinct = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 55, 57, 50, 100];
    report.push(s, "dedupe without repeats", json!(dedupe(&distinct)));
    report.push(s, "dedupe one to ten", json!(dedupe(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10])));

    let doubled = map(&[2, 3, 4, 5], |n: &i32| n * 2);
    report.push(s, "doubled", json!(doubled));
    report.push(s, "doubled again", json!(map(&[5, 10, 15, 20], |n: &i32| n * 2)));
    report.push(s, "threes doubled", json!(map(&[3, 6, 9, 12, 15], |n: &i32| n * 2)));
    report.push(s, "one to five doubled", json!(map(&[1, 2, 3, 4, 5], |n: &i32| n * 2)));

    let mixed = [1, 2, 4, 3, 11, 5, 7, 9, 12];
    report.push(s, "odd only", json!(filter(&mixed, |n: &i32| n % 2 == 1)));
    let mostly_even = [2, 4, 6, 8, 10, 11, 7, 5, 3, 1];
    report.push(s, "even only", json!(filter(&mostly_even, |n: &i32| n % 2 == 0)));
    let thirds = [2, 4, 6, 8, 10, 11, 15, 3, 1];
    report.push(s, "multiples of three", json!(filter(&thirds, |n: &i32| n % 3 == 0)));

    let unsorted = [5, 3, 8, 6, 1, 9, 100, 3, 7, 4, 30, 50];
    report.push(s, "sorted ascending", json!(sorted_natural(&unsorted)));
    let unsorted = [5, 1, 3, 100, 50, 30, 15, 25];
    report.push(
        s,
        "sorted descending",
        json!(sorted_view(&unsorted, Reversed(Natural))),
    );
    let with_repeats = [5, 4, 3, 2, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    report.push(
        s,
        "sorted descending with repeats",
        json!(sorted_view(&with_repeats, Reversed(Natural))),
    );

    let around_fifty = [51, 52, 53, 54, 55, 50, 49, 48, 47, 46, 45];
    report.push(s, "at least 50", json!(filter(&around_fifty, |n: &i32| *n >= 50)));
    let by_tens = [10, 20, 30, 35, 40, 45, 50, 55, 60];
    report.push(s, "below 40", json!(filter(&by_tens, |n: &i32| *n < 40)));

    let mixed: Vec<Json> = [5, 4, 3, 6, 5, 7, 8]
        .into_iter()
        .map(Json::from)
        .chain(std::iter::once(json!("exampleabnormality")))
        .chain([6, 4, 10, 3, 2, 3, 4, 5, 6, 5, 2].into_iter().map(Json::from))
        .collect();
    report.push(s, "mixed values", json!(map(&mixed, or_no_number)));
}

/// Stands in a marker for missing items in an untyped list.
fn or_no_number(item: &Json) -> Json {
    match item {
        Json::Null => json!("no number"),
        other => other.clone(),
    }
}

fn strings(report: &mut Report) {
    let s = Section::Strings;

    let names = ["Alex", "Jennifer", "Tyrell", "Abishek", "Chen", "Someone"];
    report.push(s, "after \"M\"", json!(filter(&names, |n: &&str| *n > "M")));
    report.push(
        s,
        "before \"m\" ignoring case",
        json!(filter(&names, |n: &&str| n.to_lowercase().as_str() < "m")),
    );

    let more_names = [
        "Alice", "N", "Nancy", "Betheny", "Christina", "Thomas", "Chris", "Frank", "Len", "Maddie",
        "Zelda",
    ];
    report.push(
        s,
        "from \"n\" on ignoring case",
        json!(filter(&more_names, |n: &&str| n.to_lowercase().as_str() >= "n")),
    );

    report.push(
        s,
        "sorted",
        json!(sorted_natural(&["def", "abc", "jik", "geh"])),
    );
    report.push(
        s,
        "sorted descending",
        json!(sorted_view(
            &["Timothy", "Michael", "Angela", "Suresh"],
            Reversed(Natural)
        )),
    );

    report.push(
        s,
        "sorted names",
        json!(sorted_natural(&["Mike", "Tyson", "Lesta", "Cynthia"])),
    );

    let letters = ["z", "z", "y", "y", "a", "a", "b", "b", "c", "c"];
    report.push(s, "dedupe", json!(dedupe(&letters)));
    report.push(s, "reversed", json!(reverse(&["Z", "Y", "X", "B", "A"])));

    let short_and_long = ["abc", "def", "gsd", "ZZZ", "sdf", "fhd", "wer", "re", "mo", "ve"];
    let long = filter(&short_and_long, |w: &&str| w.len() > 2);
    report.push(
        s,
        "longer than 2, sorted",
        json!(sorted_natural(long.iter().copied())),
    );
    report.push(
        s,
        "longer than 2, sorted ignoring case",
        json!(sorted_view_stable(long.iter().copied(), CaseInsensitive)),
    );
}

fn summary(customer: &Customer) -> Json {
    json!({ "name": customer.name(), "age": customer.age() })
}

fn customers(report: &mut Report) {
    let s = Section::Customers;
    let customers = list_of_records();
    let fallback = Customer::fallback();

    let oldest = max_by(&customers, by_key(Customer::age)).unwrap_or(&fallback);
    report.push(s, "oldest", summary(oldest));
    let youngest = min_by(&customers, by_key(Customer::age)).unwrap_or(&fallback);
    report.push(s, "youngest", summary(youngest));

    let everyone = Query::new().build();
    let last_name = everyone
        .max_by_field(&customers, "name", Customer::accessor)
        .unwrap_or(&fallback);
    report.push(s, "highest name", summary(last_name));
    let first_name = everyone
        .min_by_field(&customers, "name", Customer::accessor)
        .unwrap_or(&fallback);
    report.push(s, "lowest name", summary(first_name));

    let over_30 = Query::new().and_gt("age", 30).build();
    let ages = map(over_30.filter(&customers, Customer::accessor), |c: &Customer| c.age());
    report.push(s, "ages over 30", json!(ages));

    let gmail = Query::new()
        .and_present("email", true)
        .and_icontains("email", "@gmail")
        .build();
    let emails: Vec<&str> = gmail
        .filter(&customers, Customer::accessor)
        .into_iter()
        .filter_map(Customer::email)
        .collect();
    report.push(s, "gmail addresses", json!(emails));

    let late_surnames = filter(&customers, |c: &Customer| {
        c.surname_or_first().to_lowercase().as_str() >= "n"
    });
    report.push(
        s,
        "surnames from \"n\" on",
        json!(map(late_surnames, |c: &Customer| c.surname_or_first().to_string())),
    );

    let valid_phones = filter(&customers, Customer::has_valid_phone);
    report.push(
        s,
        "valid phones",
        json!(map(valid_phones, |c: &Customer| c.phone().to_string())),
    );
    let ten_digits = Query::new().and_eq("phone_digits", 10).build();
    report.push(
        s,
        "phones with ten digits",
        json!(ten_digits.count(&customers, Customer::accessor)),
    );

    let young_gmail = filter(&customers, |c: &Customer| {
        c.age() < 40 && c.has_email_domain("@gmail")
    });
    report.push(
        s,
        "under 40 with gmail",
        json!(map(young_gmail, |c: &Customer| {
            json!({ "age": c.age(), "email": c.email() })
        })),
    );

    report.push(
        s,
        "customers without email",
        json!(Query::new()
            .and_present("email", false)
            .count(&customers, Customer::accessor)),
    );

    let eldest = Query::new().order_desc("age").limit(3).build();
    report.push(
        s,
        "three oldest",
        json!(map(&eldest.filter_cloned(&customers, Customer::accessor), summary)),
    );

    let mut reachable = customers.clone();
    Query::new()
        .and_present("email", true)
        .build()
        .filter_mut(&mut reachable, Customer::accessor);
    report.push(s, "customers with email", json!(reachable.len()));

    report.push(s, "everyone", json!(map(&customers, summary)));
}

fn maps(report: &mut Report) {
    let s = Section::Maps;
    let letters: HashMap<&str, i32> =
        HashMap::from([("Z", 0), ("Y", 1), ("X", 2), ("W", 3), ("V", 4)]);

    report.push(s, "max value", json!(max(letters.values()).copied().unwrap_or(-1)));
    report.push(s, "max key", json!(max(letters.keys()).copied().unwrap_or("Default")));

    let entry = |found: Option<(&&str, &i32)>| match found {
        Some((key, value)) => json!({ "key": key, "value": value }),
        None => Json::Null,
    };
    report.push(
        s,
        "entry with max value",
        entry(keyed_extremum(&letters, Select::Value, Extreme::Max)),
    );
    report.push(
        s,
        "entry with max key",
        entry(keyed_extremum(&letters, Select::Key, Extreme::Max)),
    );
    report.push(
        s,
        "key of min value",
        json!(extremum_key_of(&letters, Select::Value, Extreme::Min)),
    );
    report.push(
        s,
        "value of min key",
        json!(extremum_value_of(&letters, Select::Key, Extreme::Min)),
    );
    report.push(
        s,
        "key of max value",
        json!(extremum_key_of(&letters, Select::Value, Extreme::Max)),
    );
}

fn table(report: &mut Report) {
    let s = Section::Table;
    let table = table_of_records();

    let rows = |entries: std::collections::BTreeMap<&u32, &Customer>| -> Json {
        entries
            .into_iter()
            .map(|(index, customer)| json!({ "index": index, "name": customer.name() }))
            .collect()
    };

    report.push(
        s,
        "index below 10",
        rows(filter_entries(&table, |index, _| *index < 10)),
    );
    report.push(
        s,
        "surname starting with \"s\"",
        rows(filter_entries(&table, |_, customer| {
            customer.surname_or_first().starts_with('s')
        })),
    );

    let oldest = extremum(table.values(), by_key(Customer::age), Extreme::Max);
    report.push(s, "oldest", summary(oldest.unwrap_or(&Customer::fallback())));
}
