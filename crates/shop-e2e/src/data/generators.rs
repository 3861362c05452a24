// Random test data
//
// Every scenario registers or submits fresh data so runs never collide with
// leftovers from earlier runs on the shared public shop.

use super::records::{Address, BirthDate, ContactMessage, Payment, Review, User};
use chrono::{Datelike, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::atomic::{AtomicI64, Ordering};

const FIRST_NAMES: &[&str] = &[
    "Jane", "John", "Olivia", "Liam", "Emma", "Noah", "Ava", "Mason", "Sophia", "Lucas", "Mia",
    "Ethan", "Harper", "Logan", "Amelia", "Owen", "Chloe", "Caleb", "Grace", "Henry",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Wilson",
    "Anderson", "Taylor", "Thomas", "Moore", "Martin", "Clark", "Lewis", "Walker", "Hall",
];

const COMPANIES: &[&str] = &[
    "Acme Corp",
    "Globex LLC",
    "Initech",
    "Umbrella Group",
    "Stark Industries",
    "Wayne Enterprises",
    "Hooli Inc",
    "Vandelay Industries",
];

const STREETS: &[&str] = &[
    "Main Street",
    "Oak Avenue",
    "Pine Road",
    "Maple Drive",
    "Cedar Lane",
    "Elm Street",
    "Washington Boulevard",
    "Lakeview Court",
];

const SECONDARY_UNITS: &[&str] = &["Apt.", "Suite", "Unit"];

/// (state, city) pairs
const LOCATIONS: &[(&str, &str)] = &[
    ("California", "San Francisco"),
    ("Texas", "Austin"),
    ("New York", "Buffalo"),
    ("Oregon", "Portland"),
    ("Illinois", "Chicago"),
    ("Colorado", "Denver"),
    ("Washington", "Seattle"),
    ("Florida", "Orlando"),
];

const SUBJECTS: &[&str] = &[
    "Order question",
    "Delivery delay",
    "Product feedback",
    "Return request",
    "Invoice copy",
];

const SENTENCES: &[&str] = &[
    "The fabric feels great and the fit is true to size.",
    "Delivery took longer than expected but the package arrived intact.",
    "Please leave the parcel with the building concierge.",
    "Could you confirm the shipping date for my last order?",
    "Colours match the photos on the product page.",
    "I would like to know whether this item comes in other sizes.",
    "Great value for the price, would buy again.",
];

const PASSWORD_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

static LAST_TIMESTAMP: AtomicI64 = AtomicI64::new(0);

fn pick<'a>(items: &[&'a str]) -> &'a str {
    items.choose(&mut rand::thread_rng()).copied().unwrap_or_default()
}

fn sentence_block(count: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..count)
        .filter_map(|_| SENTENCES.choose(&mut rng).copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Random password of `length` characters from letters, digits and
/// punctuation.
pub fn generate_password(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect()
}

/// Unix timestamp in seconds, strictly increasing across calls in this
/// process.
///
/// Two calls within the same second get consecutive values, so emails built
/// from it stay unique for the lifetime of the process.
pub fn unique_timestamp() -> i64 {
    let now = Utc::now().timestamp();
    let mut last = LAST_TIMESTAMP.load(Ordering::SeqCst);
    loop {
        let next = now.max(last + 1);
        match LAST_TIMESTAMP.compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return next,
            Err(observed) => last = observed,
        }
    }
}

fn email_for(first_name: &str) -> String {
    format!(
        "{}.{}@example.com",
        first_name.to_lowercase(),
        unique_timestamp()
    )
}

/// Email address in the `{name}.{timestamp}@example.com` form.
pub fn generate_random_email() -> String {
    email_for(pick(FIRST_NAMES))
}

/// A fresh customer with account and address details.
pub fn generate_random_user() -> User {
    let mut rng = rand::thread_rng();
    let first_name = pick(FIRST_NAMES).to_string();
    let last_name = pick(LAST_NAMES).to_string();
    let (state, city) = LOCATIONS
        .choose(&mut rng)
        .copied()
        .unwrap_or(("California", "San Francisco"));

    let address = Address {
        first_name: first_name.clone(),
        last_name: last_name.clone(),
        company: pick(COMPANIES).to_string(),
        address1: format!("{} {}", rng.gen_range(1..=9999), pick(STREETS)),
        address2: format!("{} {}", pick(SECONDARY_UNITS), rng.gen_range(1..=999)),
        country: "United States".to_string(),
        state: state.to_string(),
        city: city.to_string(),
        zipcode: format!("{:05}", rng.gen_range(10000..=99999)),
        mobile_number: format!(
            "+1-{}-{}-{:04}",
            rng.gen_range(200..=999),
            rng.gen_range(200..=999),
            rng.gen_range(0..=9999)
        ),
    };

    User {
        email: email_for(&first_name),
        password: generate_password(10),
        birth_date: BirthDate {
            day: rng.gen_range(1..=28).to_string(),
            month: rng.gen_range(1..=12).to_string(),
            year: rng.gen_range(1970..=2005).to_string(),
        },
        first_name,
        last_name,
        address,
    }
}

/// Card details with an expiry date in the future.
pub fn generate_random_payment() -> Payment {
    let mut rng = rand::thread_rng();
    let current_year = Utc::now().year();

    Payment {
        name_on_card: format!("{} {}", pick(FIRST_NAMES), pick(LAST_NAMES)),
        card_number: rng
            .gen_range(4_000_000_000_000_000u64..=4_999_999_999_999_999u64)
            .to_string(),
        cvc: rng.gen_range(100..=999).to_string(),
        expiry_month: format!("{:02}", rng.gen_range(1..=12)),
        expiry_year: rng
            .gen_range(current_year + 1..=current_year + 5)
            .to_string(),
    }
}

pub fn generate_review() -> Review {
    let first_name = pick(FIRST_NAMES);
    Review {
        name: format!("{} {}", first_name, pick(LAST_NAMES)),
        email: email_for(first_name),
        review: sentence_block(2),
    }
}

pub fn generate_contact_message() -> ContactMessage {
    let first_name = pick(FIRST_NAMES);
    ContactMessage {
        name: format!("{} {}", first_name, pick(LAST_NAMES)),
        email: email_for(first_name),
        subject: pick(SUBJECTS).to_string(),
        message: sentence_block(3),
    }
}

/// Order comment for the checkout page.
pub fn generate_comment() -> String {
    sentence_block(2)
}
