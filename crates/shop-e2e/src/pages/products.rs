// ProductsPage - Product listing, product details, cart modal and sidebar
//
// The category/brand sidebar is shared by the listing and the filtered
// category/brand pages, so the sidebar verbs work on all of them.

use super::base::{BasePage, quoted};
use crate::error::{Error, Result, ensure_eq};
use crate::wait::{self, ElementState, TextMatch};
use playwright_rs::{Locator, Page};
use std::time::Duration;

const LISTING_TIMEOUT: Duration = Duration::from_secs(5);
const TITLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Returns true when a Bootstrap collapse panel's class list marks it open.
pub(crate) fn panel_is_expanded(class_attr: &str) -> bool {
    class_attr
        .split_whitespace()
        .any(|class| class == "in" || class == "show")
}

pub struct ProductsPage {
    base: BasePage,
    all_products_title: Locator,
    products_list: Locator,
    first_product_view: Locator,
    first_product_add_to_cart: Locator,
    second_product_add_to_cart: Locator,

    product_name: Locator,
    product_category: Locator,
    product_price: Locator,
    product_availability: Locator,
    product_condition: Locator,
    product_brand: Locator,

    continue_shopping_button: Locator,
    view_cart_link: Locator,

    sidebar: Locator,
    category_header: Locator,
    category_links: Locator,
    brands_section: Locator,
    brand_links: Locator,
    page_header: Locator,
}

impl ProductsPage {
    pub async fn new(page: Page, base_url: &str) -> Self {
        Self::from_base(BasePage::new(page, base_url)).await
    }

    pub async fn from_base(base: BasePage) -> Self {
        let products_list = base.locator("div.features_items div.col-sm-4").await;
        let sidebar = base.locator("div.left-sidebar").await;
        let brands_section = base.locator("div.brands_products").await;

        Self {
            all_products_title: base.locator("h2.title.text-center").await,
            first_product_view: products_list
                .first()
                .locator(r#"a:has-text("View Product")"#),
            first_product_add_to_cart: products_list
                .first()
                .locator("a.btn.btn-default.add-to-cart")
                .nth(1),
            second_product_add_to_cart: products_list
                .nth(1)
                .locator("a.btn.btn-default.add-to-cart")
                .nth(1),
            products_list,

            product_name: base.locator("div.product-information h2").await,
            product_category: base
                .locator(r#"div.product-information p:has-text("Category")"#)
                .await,
            product_price: base.locator("div.product-information span span").await,
            product_availability: base
                .locator(r#"div.product-information p:has-text("Availability")"#)
                .await,
            product_condition: base
                .locator(r#"div.product-information p:has-text("Condition")"#)
                .await,
            product_brand: base
                .locator(r#"div.product-information p:has-text("Brand")"#)
                .await,

            continue_shopping_button: base
                .locator(r#"button:has-text("Continue Shopping")"#)
                .await,
            view_cart_link: base.locator("a:has-text('View Cart')").await,

            category_header: sidebar.locator("h2").nth(0),
            category_links: sidebar.locator(".panel-title a"),
            sidebar,
            brand_links: brands_section.locator("ul.nav li a"),
            brands_section,
            page_header: base.locator("h2.title").await,
            base,
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub async fn verify_all_products_text(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify '{}' text is visible", expected);
        self.base
            .wait_for(&self.all_products_title, ElementState::Visible, TITLE_TIMEOUT)
            .await?;
        let actual = self.base.read_text_content(&self.all_products_title).await?;
        ensure_eq("Products title", expected, actual.as_str())
    }

    /// Requires a non-empty listing, then every card to be visible.
    pub async fn verify_products_list_visible(&self) -> Result<()> {
        tracing::info!("Verify that products list is visible");
        let count = wait::require_non_empty(
            &self.products_list,
            "Products list",
            self.base.timeouts().assertion(),
        )
        .await?;

        for i in 0..count {
            self.base
                .wait_for(
                    &self.products_list.nth(i as i32),
                    ElementState::Visible,
                    LISTING_TIMEOUT,
                )
                .await?;
        }
        Ok(())
    }

    pub async fn click_first_product_view(&self) -> Result<()> {
        tracing::info!("Click on 'View Product' of the first product");
        self.base
            .click_within(&self.first_product_view, LISTING_TIMEOUT)
            .await
    }

    /// Every detail line (name, category, price, availability, condition,
    /// brand) must be visible and non-empty.
    pub async fn verify_product_details_visible(&self) -> Result<()> {
        tracing::info!("Verify product details are visible");
        let details = [
            (&self.product_name, "Product Name"),
            (&self.product_category, "Category"),
            (&self.product_price, "Price"),
            (&self.product_availability, "Availability"),
            (&self.product_condition, "Condition"),
            (&self.product_brand, "Brand"),
        ];

        for (locator, name) in details {
            self.base
                .wait_for(locator, ElementState::Visible, LISTING_TIMEOUT)
                .await?;
            let text = self.base.read_text_content(locator).await?;
            if text.is_empty() {
                return Err(Error::assertion(name, "a non-empty value", ""));
            }
        }
        Ok(())
    }

    async fn add_product_to_cart(&self, index: i32, add_button: &Locator) -> Result<()> {
        let card = self.products_list.nth(index);
        self.base
            .wait_for(&card, ElementState::Visible, LISTING_TIMEOUT)
            .await?;
        self.base.hover(&card).await?;
        self.base.click_within(add_button, LISTING_TIMEOUT).await
    }

    /// Hovers the first card and clicks its overlay "Add to cart".
    pub async fn add_first_product_to_cart(&self) -> Result<()> {
        tracing::info!("Hover over and click on 'Add to Cart' of the first product");
        self.add_product_to_cart(0, &self.first_product_add_to_cart)
            .await
    }

    pub async fn add_second_product_to_cart(&self) -> Result<()> {
        tracing::info!("Hover over and click on 'Add to Cart' of the second product");
        self.add_product_to_cart(1, &self.second_product_add_to_cart)
            .await
    }

    pub async fn click_continue_shopping_button(&self) -> Result<()> {
        tracing::info!("Click on 'Continue Shopping' button in cart modal");
        self.base
            .click_within(&self.continue_shopping_button, LISTING_TIMEOUT)
            .await?;
        self.base
            .wait_for(
                &self.continue_shopping_button,
                ElementState::Hidden,
                LISTING_TIMEOUT,
            )
            .await
    }

    pub async fn click_view_cart_button(&self) -> Result<()> {
        tracing::info!("Click on 'View Cart' button in cart modal");
        self.base
            .click_within(&self.view_cart_link, LISTING_TIMEOUT)
            .await
    }

    /// Sidebar header plus the category names, in order.
    pub async fn verify_categories_visible(
        &self,
        expected_header: &str,
        expected_categories: &[&str],
    ) -> Result<()> {
        tracing::info!("Verify categories are visible");
        self.base
            .expect_text(&self.category_header, TextMatch::Exact, expected_header)
            .await?;
        self.base
            .expect_count(&self.category_links, expected_categories.len())
            .await?;

        for (i, name) in expected_categories.iter().enumerate() {
            self.base
                .expect_text(&self.category_links.nth(i as i32), TextMatch::Exact, name)
                .await?;
        }
        Ok(())
    }

    /// Panel toggle of `category`, matched by its `#Name` anchor since the
    /// text "Men" is also contained in "Women".
    fn category_toggle(&self, category: &str) -> Locator {
        self.sidebar
            .locator(&format!(r##"h4.panel-title a[href="#{}"]"##, category))
    }

    pub async fn click_category(&self, category: &str) -> Result<()> {
        tracing::info!("Click on the category: {}", category);
        self.base.click(&self.category_toggle(category)).await
    }

    /// Opens `subcategory` under `category`, expanding the parent panel only
    /// when it is collapsed.
    pub async fn click_subcategory(&self, category: &str, subcategory: &str) -> Result<()> {
        tracing::info!(
            "Click on subcategory: {} under main category: {}",
            subcategory,
            category
        );
        let panel = self.base.locator(&format!("#{}", category)).await;
        wait::require_non_empty(
            &panel,
            &format!("Category panel '{}'", category),
            self.base.timeouts().assertion(),
        )
        .await?;

        let classes = panel.get_attribute("class").await?.unwrap_or_default();
        if panel_is_expanded(&classes) {
            tracing::debug!("Category '{}' already expanded", category);
        } else {
            self.base.click(&self.category_toggle(category)).await?;
        }

        let subcategory_link =
            panel.locator(&format!(".panel-body ul li a:has-text({})", quoted(subcategory)));
        self.base.click(&subcategory_link).await
    }

    pub async fn verify_category_page_header(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify category page header contains: {}", expected);
        self.base
            .expect_text(&self.page_header, TextMatch::Contains, expected)
            .await
    }

    pub async fn verify_brands_visible(&self, expected_brands: &[&str]) -> Result<()> {
        tracing::info!("Verify brands are visible on left sidebar");
        self.base
            .wait_for(
                &self.brands_section,
                ElementState::Visible,
                self.base.timeouts().assertion(),
            )
            .await?;
        self.base
            .expect_count(&self.brand_links, expected_brands.len())
            .await?;

        for (i, brand) in expected_brands.iter().enumerate() {
            self.base
                .expect_text(&self.brand_links.nth(i as i32), TextMatch::Contains, brand)
                .await?;
        }
        Ok(())
    }

    pub async fn click_brand(&self, brand: &str) -> Result<()> {
        tracing::info!("Click on brand: {}", brand);
        let link = self
            .brands_section
            .locator(&format!("ul.nav li a:has-text({})", quoted(brand)));
        self.base.click(&link).await
    }

    pub async fn verify_brand_page_header(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify brand page header contains: {}", expected);
        self.base
            .expect_text(&self.page_header, TextMatch::Contains, expected)
            .await
    }
}
