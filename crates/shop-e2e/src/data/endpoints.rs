// Endpoints of the shop under test

use std::fmt;

/// A page of the shop, addressed relative to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Home,
    Login,
    Signup,
    Logout,
    Products,
    ProductDetails(u32),
    ViewCart,
    Checkout,
    Payment,
    ContactUs,
    TestCases,
    DeleteAccount,
}

impl Endpoint {
    /// Path of this endpoint, always starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Home => "/".to_string(),
            Endpoint::Login => "/login".to_string(),
            Endpoint::Signup => "/signup".to_string(),
            Endpoint::Logout => "/logout".to_string(),
            Endpoint::Products => "/products".to_string(),
            Endpoint::ProductDetails(id) => format!("/product_details/{}", id),
            Endpoint::ViewCart => "/view_cart".to_string(),
            Endpoint::Checkout => "/checkout".to_string(),
            Endpoint::Payment => "/payment".to_string(),
            Endpoint::ContactUs => "/contact_us".to_string(),
            Endpoint::TestCases => "/test_cases".to_string(),
            Endpoint::DeleteAccount => "/delete_account".to_string(),
        }
    }

    /// Absolute URL of this endpoint under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        join_url(base_url, &self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Joins a base address and a path with exactly one `/` between them.
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.is_empty() {
        return format!("{}/", base);
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
