// CheckoutPage - Address review, order review and order comment on `/checkout`

use super::base::BasePage;
use crate::data::records::Address;
use crate::error::{Error, Result};
use crate::wait::ElementState;
use playwright_rs::{Locator, Page};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

const REVIEW_TIMEOUT: Duration = Duration::from_secs(5);

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapses whitespace runs, trims and lower-cases address text.
pub(crate) fn normalize_address(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_lowercase()
}

/// Every address component must appear (case-insensitively) in the rendered
/// block.
fn ensure_address_contains(block: &str, rendered: &str, expected: &Address) -> Result<()> {
    let normalized = normalize_address(rendered);
    for (component, value) in expected.components() {
        if !normalized.contains(&normalize_address(value)) {
            return Err(Error::assertion(
                format!("{} address {}", block, component),
                value,
                normalized,
            ));
        }
    }
    Ok(())
}

pub struct CheckoutPage {
    base: BasePage,
    delivery_address: Locator,
    billing_address: Locator,
    product_name: Locator,
    product_category: Locator,
    product_price: Locator,
    product_quantity: Locator,
    product_total: Locator,
    comment_textarea: Locator,
    place_order_button: Locator,
}

impl CheckoutPage {
    pub async fn new(page: Page, base_url: &str) -> Self {
        Self::from_base(BasePage::new(page, base_url)).await
    }

    pub async fn from_base(base: BasePage) -> Self {
        Self {
            delivery_address: base.locator("#address_delivery").await,
            billing_address: base.locator("#address_invoice").await,
            product_name: base.locator(".cart_description h4 a").await.first(),
            product_category: base.locator(".cart_description p").await.first(),
            product_price: base.locator(".cart_price p").await.first(),
            product_quantity: base.locator(".cart_quantity button").await.first(),
            product_total: base.locator(".cart_total p").await.first(),
            comment_textarea: base.locator("textarea[name='message']").await,
            place_order_button: base
                .locator(r#"a[href="/payment"]:has-text("Place Order")"#)
                .await,
            base,
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    /// Checks that every component of each expected address appears in
    /// the corresponding rendered block.
    pub async fn verify_addresses(&self, delivery: &Address, billing: &Address) -> Result<()> {
        tracing::info!("Verify delivery and billing addresses");
        let delivery_text = self.base.read_text(&self.delivery_address).await?;
        let billing_text = self.base.read_text(&self.billing_address).await?;

        ensure_address_contains("Delivery", &delivery_text, delivery)?;
        ensure_address_contains("Billing", &billing_text, billing)
    }

    pub async fn verify_product_details_visible(&self) -> Result<()> {
        tracing::info!("Verify Review Your Order");
        let details = [
            (&self.product_name, "Product Name"),
            (&self.product_category, "Category"),
            (&self.product_price, "Price"),
            (&self.product_quantity, "Quantity"),
            (&self.product_total, "Total"),
        ];

        for (locator, name) in details {
            self.base
                .wait_for(locator, ElementState::Visible, REVIEW_TIMEOUT)
                .await?;
            if self.base.read_text_content(locator).await?.is_empty() {
                return Err(Error::assertion(name, "a non-empty value", ""));
            }
        }
        Ok(())
    }

    pub async fn fill_comment_input_field(&self, comment: &str) -> Result<()> {
        tracing::info!("Fill comment in the checkout");
        self.base.fill(&self.comment_textarea, comment).await
    }

    pub async fn click_place_order_button(&self) -> Result<()> {
        tracing::info!("Click on 'Place Order' button");
        self.base
            .click_within(&self.place_order_button, REVIEW_TIMEOUT)
            .await
    }
}
