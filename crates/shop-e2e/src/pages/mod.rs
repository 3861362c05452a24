// Page objects of the shop
//
// Each page object binds its locators once at construction; parameterized
// lookups (cart row, category panel, brand link) are built per call.

pub mod base;
pub mod cart;
pub mod checkout;
pub mod contact_us;
pub mod home;
pub mod login;
pub mod payment;
pub mod product_detail;
pub mod products;
pub mod test_cases;

pub use base::BasePage;
pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use contact_us::ContactUsPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use payment::PaymentPage;
pub use product_detail::ProductDetailPage;
pub use products::ProductsPage;
pub use test_cases::TestCasesPage;
