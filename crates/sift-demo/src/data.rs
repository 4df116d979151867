//! Fixed customer records used by the demonstrations.

use std::collections::BTreeMap;

use serde::Serialize;
use sift::{Number, Seekable, Value};

/// A customer record.
///
/// Name, phone, and age are always populated. The phone is free-form text
/// and may be malformed. The email may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    name: String,
    phone: String,
    age: i32,
    email: Option<String>,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        age: i32,
        email: Option<&str>,
    ) -> Self {
        Customer {
            name: name.into(),
            phone: phone.into(),
            age,
            email: email.map(str::to_string),
        }
    }

    /// The record reported when an extremum query over customers is empty.
    pub fn fallback() -> Self {
        Customer::new(
            "Default Dude",
            "1234567890",
            -1,
            Some("DefaultDude@Default.com"),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// First whitespace-separated token of the name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// Second whitespace-separated token of the name, if there is one.
    pub fn last_name(&self) -> Option<&str> {
        self.name.split_whitespace().nth(1)
    }

    /// The last name, or the first name for single-token names.
    pub fn surname_or_first(&self) -> &str {
        self.last_name().unwrap_or_else(|| self.first_name())
    }

    /// Number of ASCII digits in the phone.
    pub fn phone_digits(&self) -> usize {
        self.phone.chars().filter(char::is_ascii_digit).count()
    }

    /// A phone is valid when it is exactly ten digits with nothing else.
    /// Dashed numbers and free text such as `"WeirdoCase"` are not valid.
    pub fn has_valid_phone(&self) -> bool {
        self.phone.len() == 10 && self.phone_digits() == 10
    }

    /// Returns `true` if the email contains `fragment`, ignoring case.
    /// A customer without an email has no domain.
    pub fn has_email_domain(&self, fragment: &str) -> bool {
        match self.email() {
            Some(email) => email.to_lowercase().contains(&fragment.to_lowercase()),
            None => false,
        }
    }
}

impl Seekable for Customer {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::String(&self.name),
            "phone" => Value::String(&self.phone),
            "age" => Value::Number(Number::from(self.age)),
            "email" => Value::from(self.email()),
            "last_name" => Value::String(self.surname_or_first()),
            "phone_len" => Value::Number(Number::from(self.phone.chars().count())),
            "phone_digits" => Value::Number(Number::from(self.phone_digits())),
            _ => Value::None,
        }
    }
}

/// The customer list. Exactly one record has no email.
pub fn list_of_records() -> Vec<Customer> {
    vec![
        Customer::new("Simon Says", "614-123-4567", 40, Some("SimonSays123@gmail.com")),
        Customer::new("Mark Smith", "614-456-2342", 45, Some("mSmith565@gmail.com")),
        Customer::new("Howard Stern", "844-123-4567", 67, Some("howard.stern@gmail.com")),
        Customer::new("Shelley Maldonado", "202-555-0117", 16, Some("shellymaldonado@gmail.com")),
        Customer::new("Gaia Sheppard", "654-321-4567", 18, Some("gaiasheppard@aol.com")),
        Customer::new("Kasper Conner", "11111", 27, Some("kasperconner@hotmail.com")),
        Customer::new("Alberto Fuentes", "22222", 35, Some("albertofuentes@verizon.com")),
        Customer::new("Cormac Tomiinson", "3216549874", 20, Some("cormactomiison@bing.com")),
        Customer::new("Milo Ratcliffe", "1234568521", 22, Some("milo.ratcliffe123@gmail.com")),
        Customer::new("Lewis Holmes", "123456789456123", 42, Some("lewis.holmes456@outlook.com")),
        Customer::new("Howard Brett", "1234567894", 44, Some("howard.brett383@protonmail.com")),
        Customer::new("Jarred Macias", "321-654-7894", 38, Some("jarred.macias834@outlook.com")),
        Customer::new("Ursula Blackmore", "1234568774", 29, Some("ursula.blackmore843@yahoo.com")),
        Customer::new("Julian Lowry", "654-123-9874", 25, Some("julian.lowry842@yahoo.com")),
        Customer::new(
            "Amelia-Grace Devila",
            "121-456-7894",
            40,
            Some("amelia.grace.devila345@gmail.com"),
        ),
        Customer::new(
            "Rosanna Jackson",
            "321-654-1345",
            35,
            Some("rosannajackson.forever@protonmail.com"),
        ),
        Customer::new("Hailey Morty", "615-485-4956", 23, Some("hailey.morty.osu@aol.com")),
        Customer::new("Falma Dunn", "614-425-8582", 18, Some("falma.dunn583@yahoo.com")),
        Customer::new("Ayah Underwood", "Frankfort, OH", 19, Some("ayah.underwood@aol.com")),
        Customer::new(
            "Lilliana Webber",
            "SomethingUnvalidated",
            52,
            Some("lilliana.iscool@gmail.com"),
        ),
        Customer::new("Example null dude", "WeirdoCase", 35, None),
    ]
}

/// The customer table, keyed by index. Index 12 is not assigned.
pub fn table_of_records() -> BTreeMap<u32, Customer> {
    let rows = [
        (0, "Just seeing", "987-654-3210", 29, "IfThisWorks@gmail.com"),
        (1, "Ecample dude", "555-555-5555", 24, "EcsKeyIsBroken@aol.com"),
        (2, "James Someone", "607-532-0952", 35, "James.Someone@yahoo.com"),
        (3, "Frankold Chesire", "645-843-1648", 45, "Frankold.Chesire@gmail.com"),
        (4, "Lisa Porridge", "654-156-0816", 19, "Lisa.Porridge@protonmail.com"),
        (5, "Michael Salton", "794-615-4982", 22, "Michael.Savant@gmail.com"),
        (6, "Whose This", "615-468-1865", 65, "Whose.This@bing.com"),
        (7, "OneHundred P. Effort", "740-456-1234", 53, "OneHundredPEffort@aol.com"),
        (8, "Someone Else", "530-948-8461", 15, "SomeoneElse@hotmail.com"),
        (9, "Michelle Obama", "123-456-9874", 70, "Michaelle.Obama567@gmail.com"),
        (10, "Barack Obama", "614-489-1684", 42, "Barack.Hussein.Obama@hotmail.com"),
        (11, "Donald Trump", "614-874-9843", 34, "DonaldPTrump@yahoo.com"),
        (13, "Joseph Biden", "051-465-4891", 25, "JoeBiden@outlook.com"),
        (14, "Hillary Clinton", "614-764-8531", 80, "HillaryClinton@gmail.com"),
        (15, "George W Bush", "316-145-6495", 40, "GeorgeWBush@outlook.com"),
        (16, "Saditya Patel", "974-851-4652", 61, "SadityaPatel@aol.com"),
        (17, "Meadow Tsunami", "614-486-4826", 23, "MeadowTsunamiSoftworksLLC@outlook.com"),
        (18, "Nancy Holson", "456-123-7894", 29, "NanyHolson@yahoo.com"),
        (19, "Veronica Williams", "321-654-9154", 32, "VeronicaWilliams@protonmail.com"),
        (20, "Frank Coolguy", "984-164-4653", 31, "FrankCoolguy@gmail.com"),
    ];

    rows.into_iter()
        .map(|(index, name, phone, age, email)| (index, Customer::new(name, phone, age, Some(email))))
        .collect()
}
