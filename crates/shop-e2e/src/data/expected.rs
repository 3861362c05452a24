// Expected texts and static catalogue data of the shop
//
// Headings read through `textContent` keep their DOM casing; headings read
// through `innerText` come back upper-cased by the site's CSS, which is why
// some constants below are in capitals.

use super::records::{CartLine, Credentials};

pub const HOME_TITLE: &str = "Automation Exercise";
pub const HEADER_CAROUSEL_TEXT: &str = "Full-Fledged practice website for Automation Engineers";
pub const SUBSCRIPTION_TITLE: &str = "Subscription";
pub const SUBSCRIPTION_SUCCESS: &str = "You have been successfully subscribed!";
pub const RECOMMENDED_ITEMS_TITLE: &str = "RECOMMENDED ITEMS";

pub const LOGIN_TITLE_TEXT: &str = "Login to your account";
pub const SIGN_UP_TITLE_TEXT: &str = "New User Signup!";
pub const EXPECTED_LOGIN_ERROR: &str = "Your email or password is incorrect!";
pub const ALREADY_EXIST_ERROR: &str = "Email Address already exist!";
pub const ACCOUNT_INFORMATION_TITLE: &str = "ENTER ACCOUNT INFORMATION";
pub const ACCOUNT_CREATED_TITLE: &str = "ACCOUNT CREATED!";
pub const ACCOUNT_DELETED_TITLE: &str = "ACCOUNT DELETED!";

/// Account that exists on the public shop.
pub const TEST_USER: Credentials = Credentials {
    email: "olhatest@gmail.com",
    password: "fg45E23@bn",
    username: "Olha",
};

/// Signup name/email already registered on the shop.
pub const EXISTING_SIGNUP_NAME: &str = "test";
pub const EXISTING_SIGNUP_EMAIL: &str = "test@gmail.com";

pub const ALL_PRODUCTS_TITLE: &str = "All Products";
pub const QUANTITY_VALUE: u32 = 4;
pub const REVIEW_TITLE: &str = "Write Your Review";
pub const REVIEW_SUCCESS_MESSAGE: &str = "Thank you for your review.";

/// The first two products of the catalogue, each added once.
pub const PRODUCTS_IN_CART: [CartLine; 2] = [
    CartLine {
        row_id: "product-1",
        price: "Rs. 500",
        quantity: "1",
        total: "Rs. 500",
    },
    CartLine {
        row_id: "product-2",
        price: "Rs. 400",
        quantity: "1",
        total: "Rs. 400",
    },
];

pub const CATEGORY_HEADER: &str = "Category";

/// Sidebar categories with their subcategories, in display order.
pub const CATEGORIES: [(&str, &[&str]); 3] = [
    ("Women", &["Dress", "Tops", "Saree"]),
    ("Men", &["Tshirts", "Jeans"]),
    ("Kids", &["Dress", "Tops & Shirts"]),
];

pub const WOMEN_DRESS_SUBCATEGORY: &str = "Women - Dress Products";
pub const KIDS_TOP_SUBCATEGORY: &str = "Kids - Tops & Shirts Products";

pub const BRANDS: [&str; 8] = [
    "Polo",
    "H&M",
    "Madame",
    "Mast & Harbour",
    "Babyhug",
    "Allen Solly Junior",
    "Kookie Kids",
    "Biba",
];

pub const POLO_BRAND_TITLE: &str = "Brand - Polo Products";
pub const HM_BRAND_TITLE: &str = "Brand - H&M Products";

pub const ORDER_PLACED_TITLE: &str = "ORDER PLACED!";

pub const GET_IN_TOUCH_TITLE: &str = "Get In Touch";
pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Success! Your details have been submitted successfully.";

pub const TEST_CASES_HEADING: &str = "Test Cases";
pub const TEST_CASES_TITLE: &str = "Automation Practice Website for UI Testing - Test Cases";

/// Category names in sidebar order.
pub fn category_names() -> Vec<&'static str> {
    CATEGORIES.iter().map(|(name, _)| *name).collect()
}

/// Subcategories listed under `category`, if it exists.
pub fn subcategories(category: &str) -> Option<&'static [&'static str]> {
    CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, subs)| *subs)
}
