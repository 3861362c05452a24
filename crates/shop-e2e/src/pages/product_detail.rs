// ProductDetailPage - Quantity, add-to-cart and the review form of `/product_details/{id}`

use super::base::BasePage;
use crate::data::records::Review;
use crate::error::Result;
use crate::wait::{ElementState, TextMatch};
use playwright_rs::{Locator, Page};
use std::time::Duration;

const DETAIL_TIMEOUT: Duration = Duration::from_secs(5);

pub struct ProductDetailPage {
    base: BasePage,
    quantity_input: Locator,
    add_to_cart_button: Locator,
    active_tab: Locator,
    review_name: Locator,
    review_email: Locator,
    review_text: Locator,
    review_submit: Locator,
    review_success: Locator,
}

impl ProductDetailPage {
    pub async fn new(page: Page, base_url: &str) -> Self {
        Self::from_base(BasePage::new(page, base_url)).await
    }

    pub async fn from_base(base: BasePage) -> Self {
        Self {
            quantity_input: base.locator("input#quantity").await,
            add_to_cart_button: base.locator("button.btn.btn-default.cart").await,
            active_tab: base.locator("li.active > a").await,
            review_name: base.locator(r#"[id="name"]"#).await,
            review_email: base.locator(r#"[id="email"]"#).await,
            review_text: base.locator(r#"[id="review"]"#).await,
            review_submit: base.locator(r#"[id="button-review"]"#).await,
            review_success: base.locator("div.alert-success.alert span").await,
            base,
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    /// Replaces the quantity by typing, the way a user would.
    pub async fn fill_quantity_field(&self, quantity: u32) -> Result<()> {
        tracing::info!("Fill quantity input field: quantity: {}", quantity);
        self.base
            .click_within(&self.quantity_input, DETAIL_TIMEOUT)
            .await?;
        self.quantity_input.press("Control+A", None).await?;
        self.quantity_input.press("Backspace", None).await?;
        self.base
            .page()
            .keyboard()
            .type_text(&quantity.to_string(), None)
            .await?;
        Ok(())
    }

    pub async fn click_add_to_cart_button(&self) -> Result<()> {
        tracing::info!("Click on 'Add to Cart' button");
        self.base
            .click_within(&self.add_to_cart_button, DETAIL_TIMEOUT)
            .await
    }

    pub async fn verify_active_tab_text(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify active tab contains text: {}", expected);
        self.base
            .expect_text(&self.active_tab, TextMatch::Contains, expected)
            .await
    }

    pub async fn fill_review_product_form(&self, review: &Review) -> Result<()> {
        tracing::info!("Fill review product form");
        self.base
            .fill_within(&self.review_name, &review.name, DETAIL_TIMEOUT)
            .await?;
        self.base
            .fill_within(&self.review_email, &review.email, DETAIL_TIMEOUT)
            .await?;
        self.base
            .fill_within(&self.review_text, &review.review, DETAIL_TIMEOUT)
            .await
    }

    pub async fn click_submit_button(&self) -> Result<()> {
        tracing::info!("Click on Submit button");
        self.base
            .click_within(&self.review_submit, DETAIL_TIMEOUT)
            .await
    }

    pub async fn verify_review_success_message(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify success message after submitting review");
        self.base
            .wait_for(&self.review_success, ElementState::Visible, DETAIL_TIMEOUT)
            .await?;
        self.base
            .expect_text(&self.review_success, TextMatch::Contains, expected)
            .await
    }
}
