// CartPage - Rows of `/view_cart` and the checkout entry points

use super::base::{BasePage, quoted};
use crate::data::records::CartLine;
use crate::error::{Error, Result};
use crate::wait::{self, ElementState, TextMatch};
use playwright_rs::{Locator, Page};
use std::time::Duration;

const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct CartPage {
    base: BasePage,
    product_rows: Locator,
    quantity_button: Locator,
    proceed_to_checkout_button: Locator,
    register_login_link: Locator,
}

/// Delete control of the row holding product `product_id` (e.g. `"1"`).
fn delete_selector(product_id: &str) -> String {
    format!(
        "a.cart_quantity_delete[data-product-id={}]",
        quoted(product_id)
    )
}

impl CartPage {
    pub async fn new(page: Page, base_url: &str) -> Self {
        Self::from_base(BasePage::new(page, base_url)).await
    }

    pub async fn from_base(base: BasePage) -> Self {
        Self {
            product_rows: base.locator("table#cart_info_table tbody tr").await,
            quantity_button: base.locator("td.cart_quantity button").await,
            proceed_to_checkout_button: base.locator("a.btn.btn-default.check_out").await,
            register_login_link: base
                .locator(r#"a[href="/login"]:has-text("Register / Login")"#)
                .await,
            base,
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    /// Checks price, quantity and total of the row with id `row_id`
    /// (e.g. `"product-1"`).
    pub async fn verify_product(
        &self,
        row_id: &str,
        expected_price: &str,
        expected_quantity: &str,
        expected_total: &str,
    ) -> Result<()> {
        tracing::info!("Verify product {} in cart", row_id);
        let row = self.base.locator(&format!("tr#{}", row_id)).await;
        wait::require_non_empty(
            &row,
            &format!("Cart row '{}'", row_id),
            self.base.timeouts().assertion(),
        )
        .await?;

        let cells = [
            (row.locator(".cart_price p"), expected_price),
            (row.locator(".cart_quantity button"), expected_quantity),
            (row.locator(".cart_total p"), expected_total),
        ];
        for (cell, expected) in &cells {
            self.base
                .expect_text(cell, TextMatch::Exact, expected)
                .await?;
        }
        Ok(())
    }

    /// [`Self::verify_product`] for a static cart line.
    pub async fn verify_line(&self, line: &CartLine) -> Result<()> {
        self.verify_product(line.row_id, line.price, line.quantity, line.total)
            .await
    }

    /// Counts the cart rows once the cart has been rendered.
    ///
    /// The checkout button follows the table in the document, so once it is
    /// attached every row has been parsed.
    pub async fn get_product_count(&self) -> Result<usize> {
        tracing::info!("Get number of products in cart");
        self.base
            .wait_for(
                &self.proceed_to_checkout_button,
                ElementState::Attached,
                self.base.timeouts().assertion(),
            )
            .await
            .map_err(|e| match e {
                Error::ElementNotInteractable { .. } => {
                    Error::Precondition("cart page was not rendered".to_string())
                }
                other => other,
            })?;
        Ok(self.product_rows.count().await?)
    }

    /// Compares the quantity of the (single) cart row with `expected`.
    pub async fn verify_quantity(&self, expected: u32) -> Result<()> {
        tracing::info!("Verify quantity of product is {}", expected);
        let text = self.base.read_text(&self.quantity_button).await?;
        let actual: u32 = text.parse().map_err(|_| {
            Error::assertion("Cart quantity", expected, format!("non-numeric '{}'", text))
        })?;

        if actual == expected {
            Ok(())
        } else {
            Err(Error::assertion("Cart quantity", expected, actual))
        }
    }

    pub async fn click_proceed_to_checkout_button(&self) -> Result<()> {
        tracing::info!("Click on 'Proceed to checkout' button in view cart page");
        self.base
            .click_within(&self.proceed_to_checkout_button, CHECKOUT_TIMEOUT)
            .await
    }

    /// Link shown in the checkout modal when nobody is logged in.
    pub async fn click_register_login_link(&self) -> Result<()> {
        tracing::info!("Click on 'Register/Login' link in Checkout");
        self.base
            .click_within(&self.register_login_link, CHECKOUT_TIMEOUT)
            .await
    }

    /// Deletes the row of `product_id` and waits until it is gone.
    pub async fn delete_product_by_id(&self, product_id: &str) -> Result<()> {
        tracing::info!("Delete product {} from cart", product_id);
        let delete = self.base.locator(&delete_selector(product_id)).await;
        self.base.click(&delete).await?;
        self.base.expect_hidden(&delete).await
    }

    pub async fn delete_multiple_products(&self, product_ids: &[&str]) -> Result<()> {
        for product_id in product_ids {
            self.delete_product_by_id(product_id).await?;
        }
        Ok(())
    }

    pub async fn verify_product_removed(&self, product_id: &str) -> Result<()> {
        tracing::info!("Verify product {} removed from cart", product_id);
        let delete = self.base.locator(&delete_selector(product_id)).await;
        self.base
            .wait_for(&delete, ElementState::Detached, self.base.timeouts().assertion())
            .await
            .map_err(|e| e.context(format!("Product {} still in cart", product_id)))
    }
}
