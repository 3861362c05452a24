// Test data: value records, random generators and static expectations

pub mod endpoints;
pub mod expected;
pub mod generators;
pub mod records;

pub use endpoints::Endpoint;
pub use generators::{
    generate_comment, generate_contact_message, generate_password, generate_random_email,
    generate_random_payment, generate_random_user, generate_review,
};
pub use records::{
    AccountInfo, Address, BirthDate, CartLine, ContactMessage, Credentials, Payment, Review, User,
};
