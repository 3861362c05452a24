// LoginPage - Login form, signup form and the account information wizard
//
// `/login` hosts both the login and the "New User Signup!" forms; a
// successful signup continues to `/signup` with the account information and
// address sections bound here as well.

use super::base::BasePage;
use crate::data::records::{AccountInfo, Address};
use crate::error::{Error, Result, ensure_contains, ensure_eq};
use crate::wait::ElementState;
use playwright_rs::{Locator, Page};
use std::time::Duration;

const ACCOUNT_CREATED_TIMEOUT: Duration = Duration::from_secs(10);
const FORM_ERROR_TIMEOUT: Duration = Duration::from_secs(5);

pub struct LoginPage {
    base: BasePage,

    new_user_signup_title: Locator,
    signup_name: Locator,
    signup_email: Locator,
    signup_button: Locator,
    signup_error: Locator,
    mrs_title_radio: Locator,

    account_info_title: Locator,
    name_field: Locator,
    email_field: Locator,
    password_field: Locator,
    day_dropdown: Locator,
    month_dropdown: Locator,
    year_dropdown: Locator,
    newsletter_checkbox: Locator,
    special_offer_checkbox: Locator,

    first_name: Locator,
    last_name: Locator,
    company: Locator,
    address1: Locator,
    address2: Locator,
    country: Locator,
    state: Locator,
    city: Locator,
    zipcode: Locator,
    mobile_number: Locator,

    create_account_button: Locator,
    account_created_title: Locator,
    continue_button: Locator,
    logged_in_user_item: Locator,
    delete_account_item: Locator,
    account_deleted_title: Locator,
    logout_item: Locator,

    login_title: Locator,
    login_email: Locator,
    login_password: Locator,
    login_button: Locator,
    login_error: Locator,
}

impl LoginPage {
    pub async fn new(page: Page, base_url: &str) -> Self {
        Self::from_base(BasePage::new(page, base_url)).await
    }

    pub async fn from_base(base: BasePage) -> Self {
        Self {
            new_user_signup_title: base.locator("div.signup-form h2").await,
            signup_name: base.locator(r#"[data-qa="signup-name"]"#).await,
            signup_email: base.locator(r#"[data-qa="signup-email"]"#).await,
            signup_button: base.locator(r#"[data-qa="signup-button"]"#).await,
            signup_error: base.locator("div.signup-form form p").await,
            mrs_title_radio: base.locator("#id_gender2").await,

            account_info_title: base.locator("h2.title").await.nth(0),
            name_field: base.locator("#name").await,
            email_field: base.locator("#email").await,
            password_field: base.locator(r#"input[name="password"]"#).await,
            day_dropdown: base.locator(r#"select[name="days"]"#).await,
            month_dropdown: base.locator(r#"select[name="months"]"#).await,
            year_dropdown: base.locator(r#"select[name="years"]"#).await,
            newsletter_checkbox: base.locator("#newsletter").await,
            special_offer_checkbox: base.locator("#optin").await,

            first_name: base.locator("#first_name").await,
            last_name: base.locator("#last_name").await,
            company: base.locator("#company").await,
            address1: base.locator("#address1").await,
            address2: base.locator("#address2").await,
            country: base.locator("#country").await,
            state: base.locator("#state").await,
            city: base.locator("#city").await,
            zipcode: base.locator("#zipcode").await,
            mobile_number: base.locator("#mobile_number").await,

            create_account_button: base.locator(r#"[data-qa="create-account"]"#).await,
            account_created_title: base.locator(r#"[data-qa="account-created"]"#).await,
            continue_button: base.locator(r#"[data-qa="continue-button"]"#).await,
            logged_in_user_item: base.locator("ul.nav li a:has-text('Logged in as')").await,
            delete_account_item: base.locator("ul.nav li a:has-text('Delete Account')").await,
            account_deleted_title: base.locator(r#"h2[data-qa="account-deleted"]"#).await,
            logout_item: base.locator("ul.nav li a:has-text('Logout')").await,

            login_title: base.locator("div.login-form h2").await,
            login_email: base.locator(r#"[data-qa="login-email"]"#).await,
            login_password: base.locator(r#"[data-qa="login-password"]"#).await,
            login_button: base.locator(r#"[data-qa="login-button"]"#).await,
            login_error: base.locator(r#"[action="/login"] p"#).await,
            base,
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    // Signup

    pub async fn verify_new_user_signup_text(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify '{}' text is visible", expected);
        let actual = self.base.read_text(&self.new_user_signup_title).await?;
        ensure_eq("Signup title", expected, actual.as_str())
    }

    pub async fn fill_name_email(&self, name: &str, email: &str) -> Result<()> {
        tracing::info!("Fill signup name: {} and email: {}", name, email);
        self.base.fill(&self.signup_name, name).await?;
        self.base.fill(&self.signup_email, email).await
    }

    pub async fn click_signup_button(&self) -> Result<()> {
        tracing::info!("Click Signup button");
        self.base.click(&self.signup_button).await
    }

    /// Exact match against the first `h2.title` of the account wizard.
    pub async fn verify_account_info_title_text(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify account information title text");
        let actual = self.base.read_text(&self.account_info_title).await?;
        ensure_eq(
            &format!("Title of '{}'", self.account_info_title.selector()),
            expected,
            actual.as_str(),
        )
    }

    pub async fn select_mrs_title(&self) -> Result<()> {
        tracing::info!("Select title 'Mrs.'");
        self.base.click(&self.mrs_title_radio).await
    }

    /// Fills password and birth date; opt-in boxes are only ever checked,
    /// never unchecked.
    pub async fn fill_account_information(&self, info: &AccountInfo) -> Result<()> {
        tracing::info!("Fill account information");
        self.base.fill(&self.password_field, &info.password).await?;
        self.base
            .select_option(&self.day_dropdown, &info.birth_date.day)
            .await?;
        self.base
            .select_option(&self.month_dropdown, &info.birth_date.month)
            .await?;
        self.base
            .select_option(&self.year_dropdown, &info.birth_date.year)
            .await?;

        if info.newsletter {
            self.base.check(&self.newsletter_checkbox).await?;
        }
        if info.special_offer {
            self.base.check(&self.special_offer_checkbox).await?;
        }
        Ok(())
    }

    /// Reads every account field back and compares it with what was entered.
    pub async fn verify_account_information(
        &self,
        name: &str,
        email: &str,
        info: &AccountInfo,
    ) -> Result<()> {
        tracing::info!("Verify account information is filled correctly");
        let actual_name = self.base.read_value(&self.name_field).await?;
        ensure_eq("Name", name, actual_name.as_str())?;

        let actual_email = self.base.read_value(&self.email_field).await?;
        ensure_eq("Email", email, actual_email.as_str())?;

        if self.base.read_value(&self.password_field).await?.is_empty() {
            return Err(Error::assertion("Password", "a non-empty value", ""));
        }

        let day = self.base.read_value(&self.day_dropdown).await?;
        ensure_eq("Birth day", info.birth_date.day.as_str(), day.as_str())?;
        let month = self.base.read_value(&self.month_dropdown).await?;
        ensure_eq("Birth month", info.birth_date.month.as_str(), month.as_str())?;
        let year = self.base.read_value(&self.year_dropdown).await?;
        ensure_eq("Birth year", info.birth_date.year.as_str(), year.as_str())?;

        let newsletter = self.base.is_checked(&self.newsletter_checkbox).await?;
        ensure_eq("Newsletter checkbox", &info.newsletter, &newsletter)?;
        let special_offer = self.base.is_checked(&self.special_offer_checkbox).await?;
        ensure_eq("Special offer checkbox", &info.special_offer, &special_offer)
    }

    /// Address inputs in form order; `Country` is the only dropdown.
    fn address_fields<'a>(&'a self, address: &'a Address) -> [AddressField<'a>; 10] {
        [
            AddressField::input("First name", &self.first_name, &address.first_name),
            AddressField::input("Last name", &self.last_name, &address.last_name),
            AddressField::input("Company", &self.company, &address.company),
            AddressField::input("Address", &self.address1, &address.address1),
            AddressField::input("Address 2", &self.address2, &address.address2),
            AddressField::dropdown("Country", &self.country, &address.country),
            AddressField::input("State", &self.state, &address.state),
            AddressField::input("City", &self.city, &address.city),
            AddressField::input("Zipcode", &self.zipcode, &address.zipcode),
            AddressField::input("Mobile number", &self.mobile_number, &address.mobile_number),
        ]
    }

    pub async fn fill_address_information(&self, address: &Address) -> Result<()> {
        tracing::info!("Fill address information");
        for field in self.address_fields(address) {
            if field.dropdown {
                self.base.select_option(field.locator, field.value).await?;
            } else {
                self.base.fill(field.locator, field.value).await?;
            }
        }
        Ok(())
    }

    pub async fn verify_address_information(&self, address: &Address) -> Result<()> {
        tracing::info!("Verify address information");
        for field in self.address_fields(address) {
            let actual = self.base.read_value(field.locator).await?;
            ensure_eq(field.what, field.value, actual.as_str())?;
        }
        Ok(())
    }

    pub async fn click_create_account_button(&self) -> Result<()> {
        tracing::info!("Click Create Account button");
        self.base.click(&self.create_account_button).await
    }

    pub async fn wait_for_account_created(&self) -> Result<()> {
        tracing::info!("Wait for Account Created text to be visible");
        self.base
            .wait_for(
                &self.account_created_title,
                ElementState::Visible,
                ACCOUNT_CREATED_TIMEOUT,
            )
            .await
    }

    pub async fn click_continue_button(&self) -> Result<()> {
        tracing::info!("Click Continue button");
        self.base.click(&self.continue_button).await
    }

    pub async fn verify_logged_in_user(&self, username: &str) -> Result<()> {
        tracing::info!("Verify user logged in as {}", username);
        let text = self.base.read_text(&self.logged_in_user_item).await?;
        ensure_contains("Logged in banner", username, &text)
    }

    /// Asserts no "Logged in as" banner is shown.
    pub async fn verify_not_logged_in(&self) -> Result<()> {
        tracing::info!("Verify no user is logged in");
        self.base.expect_count(&self.logged_in_user_item, 0).await
    }

    pub async fn click_delete_account_in_navbar(&self) -> Result<()> {
        tracing::info!("Click on Delete Account in the navbar");
        self.base.click(&self.delete_account_item).await
    }

    pub async fn verify_account_deleted(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify account deleted");
        let actual = self.base.read_text(&self.account_deleted_title).await?;
        ensure_contains("Account deleted title", expected, &actual)
    }

    pub async fn verify_existing_email_error(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify existing email error in the Sign up form");
        self.base
            .wait_for(&self.signup_error, ElementState::Visible, FORM_ERROR_TIMEOUT)
            .await?;
        let actual = self.base.read_text_content(&self.signup_error).await?;
        ensure_eq("Signup error", expected, actual.as_str())
    }

    // Login

    pub async fn verify_login_to_your_account_text(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify '{}' text is visible", expected);
        self.base
            .wait_for(&self.login_title, ElementState::Visible, FORM_ERROR_TIMEOUT)
            .await?;
        let actual = self.base.read_text_content(&self.login_title).await?;
        ensure_eq(
            &format!("Title of '{}'", self.login_title.selector()),
            expected,
            actual.as_str(),
        )
    }

    pub async fn fill_login_form(&self, email: &str, password: &str) -> Result<()> {
        tracing::info!("Fill login form: email: {}", email);
        self.base.fill(&self.login_email, email).await?;
        self.base.fill(&self.login_password, password).await
    }

    pub async fn click_login_button(&self) -> Result<()> {
        tracing::info!("Click Login button");
        self.base.click(&self.login_button).await
    }

    /// Exact match on the error paragraph inside the login form.
    pub async fn verify_incorrect_email_or_password_error(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify incorrect email or password error in the Login form");
        self.base
            .wait_for(&self.login_error, ElementState::Visible, FORM_ERROR_TIMEOUT)
            .await?;
        let actual = self.base.read_text_content(&self.login_error).await?;
        tracing::debug!("Error message displayed: {}", actual);
        ensure_eq("Login error", expected, actual.as_str())
    }

    pub async fn click_logout_button(&self) -> Result<()> {
        tracing::info!("Click Logout button");
        self.base.click(&self.logout_item).await
    }
}

struct AddressField<'a> {
    what: &'static str,
    locator: &'a Locator,
    value: &'a str,
    dropdown: bool,
}

impl<'a> AddressField<'a> {
    fn input(what: &'static str, locator: &'a Locator, value: &'a str) -> Self {
        Self {
            what,
            locator,
            value,
            dropdown: false,
        }
    }

    fn dropdown(what: &'static str, locator: &'a Locator, value: &'a str) -> Self {
        Self {
            what,
            locator,
            value,
            dropdown: true,
        }
    }
}
