// Test data records
//
// Plain values handed to page object verbs. Generated fresh per test case
// and never mutated afterwards.

use serde::Serialize;

/// Postal address entered on the signup form and echoed on checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub address1: String,
    pub address2: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub zipcode: String,
    pub mobile_number: String,
}

impl Address {
    /// Named address parts, in the order the checkout page lists them.
    ///
    /// Used to verify that every part appears in the rendered delivery and
    /// billing blocks.
    pub fn components(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("first_name", self.first_name.as_str()),
            ("last_name", self.last_name.as_str()),
            ("company", self.company.as_str()),
            ("address1", self.address1.as_str()),
            ("address2", self.address2.as_str()),
            ("city", self.city.as_str()),
            ("state", self.state.as_str()),
            ("zipcode", self.zipcode.as_str()),
            ("country", self.country.as_str()),
            ("mobile_number", self.mobile_number.as_str()),
        ]
    }
}

/// Day, month and year as the signup dropdowns expect them (`"7"`, not `"07"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

/// Account information section of the signup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    pub password: String,
    pub birth_date: BirthDate,
    pub newsletter: bool,
    pub special_offer: bool,
}

/// A shop customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub birth_date: BirthDate,
    pub address: Address,
}

impl User {
    /// Account section for this user with both opt-ins enabled.
    pub fn account_info(&self) -> AccountInfo {
        AccountInfo {
            password: self.password.clone(),
            birth_date: self.birth_date.clone(),
            newsletter: true,
            special_offer: true,
        }
    }
}

/// Card details for the payment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payment {
    pub name_on_card: String,
    pub card_number: String,
    pub cvc: String,
    /// Zero padded, `"01"` to `"12"`
    pub expiry_month: String,
    pub expiry_year: String,
}

/// Product review form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub name: String,
    pub email: String,
    pub review: String,
}

/// Contact form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Expected cart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartLine {
    /// Row id, e.g. `"product-1"`
    pub row_id: &'static str,
    pub price: &'static str,
    pub quantity: &'static str,
    pub total: &'static str,
}

/// Credentials of an account that already exists on the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: &'static str,
    pub password: &'static str,
    /// Name shown in the "Logged in as" banner
    pub username: &'static str,
}
