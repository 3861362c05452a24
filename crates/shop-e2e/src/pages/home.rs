// HomePage - Header navigation, footer subscription and home-page widgets
//
// The header and footer are shared by every shop page, so these verbs also
// work after navigating away from `/` (e.g. subscribing from the cart).

use super::base::BasePage;
use crate::data::Endpoint;
use crate::error::{Result, ensure_contains, ensure_eq};
use crate::wait::{self, ElementState, TextMatch};
use playwright_rs::{Locator, Page};
use std::time::Duration;

const RECOMMENDED_ADD_TIMEOUT: Duration = Duration::from_secs(40);
const FOOTER_WIDGET_TIMEOUT: Duration = Duration::from_secs(10);
const CAROUSEL_SLIDE_TIMEOUT: Duration = Duration::from_secs(20);

pub struct HomePage {
    base: BasePage,
    signup_login_link: Locator,
    logged_in_user: Locator,
    home_slider: Locator,
    contact_us_link: Locator,
    test_cases_link: Locator,
    products_link: Locator,
    cart_link: Locator,
    footer: Locator,
    subscription_title: Locator,
    subscription_email: Locator,
    subscribe_button: Locator,
    subscription_success: Locator,
    recommended_items_title: Locator,
    recommended_add_to_cart: Locator,
    scroll_up_arrow: Locator,
    header_carousel_texts: Locator,
}

impl HomePage {
    pub async fn new(page: Page, base_url: &str) -> Self {
        Self::from_base(BasePage::new(page, base_url)).await
    }

    pub async fn from_base(base: BasePage) -> Self {
        Self {
            signup_login_link: base.locator(r#"ul.nav a[href="/login"]"#).await,
            logged_in_user: base.locator(r#"a:has-text("Logged in as")"#).await,
            home_slider: base.locator("#slider-carousel div.carousel-inner").await,
            contact_us_link: base.locator(r#"a:has-text("Contact us")"#).await,
            test_cases_link: base.locator(r#"ul.nav a[href="/test_cases"]"#).await,
            products_link: base.locator(r#"ul.nav a[href="/products"]"#).await,
            cart_link: base.locator("ul.nav li a[href='/view_cart']").await,
            footer: base.locator("#footer").await,
            subscription_title: base.locator("div.single-widget h2").await,
            subscription_email: base.locator("#susbscribe_email").await,
            subscribe_button: base.locator("#subscribe").await,
            subscription_success: base.locator("div.alert-success.alert").await,
            recommended_items_title: base
                .locator("div.recommended_items h2.title.text-center")
                .await,
            recommended_add_to_cart: base.locator("div.recommended_items .add-to-cart").await,
            scroll_up_arrow: base.locator("a#scrollUp").await,
            header_carousel_texts: base.locator("div#slider-carousel h2").await,
            base,
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    /// Opens `/` and waits for the home slider.
    pub async fn go_to_home(&self) -> Result<()> {
        tracing::info!("Go to Home Page");
        self.base.navigate(&Endpoint::Home.path()).await?;
        self.base
            .wait_for(
                &self.home_slider,
                ElementState::Visible,
                self.base.timeouts().visibility(),
            )
            .await
    }

    pub async fn go_to_signup_or_login(&self) -> Result<()> {
        tracing::info!("Click on Signup / Login button");
        self.base.click(&self.signup_login_link).await
    }

    /// Checks the "Logged in as" banner contains `username`.
    pub async fn verify_logged_in_user(&self, username: &str) -> Result<()> {
        tracing::info!("Verify user logged in as {}", username);
        let text = self.base.read_text(&self.logged_in_user).await?;
        ensure_contains("Logged in banner", username, &text)
    }

    pub async fn go_to_contact_us_form(&self) -> Result<()> {
        tracing::info!("Click on Contact us link in the header");
        self.base.click(&self.contact_us_link).await
    }

    pub async fn go_to_test_cases_page(&self) -> Result<()> {
        tracing::info!("Click on Test Cases link in the header");
        self.base.click(&self.test_cases_link).await
    }

    pub async fn go_to_products_page(&self) -> Result<()> {
        tracing::info!("Click on Products link in the header");
        self.base.click(&self.products_link).await
    }

    pub async fn go_to_cart_page(&self) -> Result<()> {
        tracing::info!("Click on Cart link in the header");
        self.base
            .click_within(&self.cart_link, FOOTER_WIDGET_TIMEOUT)
            .await
    }

    pub async fn scroll_to_footer(&self) -> Result<()> {
        tracing::info!("Scroll down to footer");
        self.base
            .wait_for(
                &self.footer,
                ElementState::Visible,
                self.base.timeouts().visibility(),
            )
            .await?;
        self.base.scroll_into_view("#footer").await
    }

    pub async fn verify_subscription_text(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify '{}' text is visible", expected);
        self.base
            .wait_for(
                &self.subscription_title,
                ElementState::Visible,
                FOOTER_WIDGET_TIMEOUT,
            )
            .await?;
        let actual = self.base.read_text_content(&self.subscription_title).await?;
        ensure_eq("Subscription title", expected, actual.as_str())
    }

    pub async fn fill_subscription_form(&self, email: &str) -> Result<()> {
        tracing::info!("Fill subscription form: email: {}", email);
        self.base
            .fill_within(&self.subscription_email, email, FOOTER_WIDGET_TIMEOUT)
            .await
    }

    pub async fn click_subscribe_button(&self) -> Result<()> {
        tracing::info!("Click on subscribe button");
        self.base.click(&self.subscribe_button).await
    }

    /// Checks the subscription confirmation contains `expected`.
    pub async fn verify_success_message(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify success message after subscription");
        self.base
            .expect_text(&self.subscription_success, TextMatch::Contains, expected)
            .await
    }

    /// Compares against the rendered (upper-cased) heading.
    pub async fn verify_recommended_items_text(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify Recommended items title");
        let actual = self.base.read_text(&self.recommended_items_title).await?;
        ensure_contains("Recommended items title", expected, &actual)
    }

    pub async fn click_first_add_to_cart(&self) -> Result<()> {
        tracing::info!("Click on the first 'Add to cart' button in the Recommended items");
        self.base
            .click_within(&self.recommended_add_to_cart.first(), RECOMMENDED_ADD_TIMEOUT)
            .await
    }

    pub async fn click_scroll_up_arrow_button(&self) -> Result<()> {
        tracing::info!("Click on scroll up arrow button");
        self.base.click(&self.scroll_up_arrow).await
    }

    /// Every carousel slide heading must read exactly `expected`.
    pub async fn verify_header_carousel_texts(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify all header carousel texts are the same");
        let count = wait::require_non_empty(
            &self.header_carousel_texts,
            "Header carousel",
            self.base.timeouts().assertion(),
        )
        .await?;

        for i in 0..count {
            let slide = self.header_carousel_texts.nth(i as i32);
            self.base
                .wait_for(&slide, ElementState::Visible, CAROUSEL_SLIDE_TIMEOUT)
                .await?;
            let actual = self.base.read_text_content(&slide).await?;
            ensure_eq(
                &format!("Header carousel text {}", i),
                expected,
                actual.as_str(),
            )?;
        }
        Ok(())
    }

    pub async fn scroll_to_top_with_keyboard(&self) -> Result<()> {
        tracing::info!("Scroll page to the top with keyboard");
        self.base.press_key("Home").await
    }
}
