// Fixture - Browser session, per-case context and pre-positioned page objects
//
// A `Session` owns the Playwright server connection and one launched
// browser. Every test case gets its own `TestCase` (fresh context + page),
// so cookies and cart contents never leak between cases.

use crate::config::{BrowserKind, SuiteConfig};
use crate::data::expected::{ALL_PRODUCTS_TITLE, LOGIN_TITLE_TEXT};
use crate::error::Result;
use crate::pages::{
    BasePage, CartPage, CheckoutPage, ContactUsPage, HomePage, LoginPage, PaymentPage,
    ProductDetailPage, ProductsPage, TestCasesPage,
};
use playwright_rs::{
    Browser, BrowserContext, BrowserContextOptions, LaunchOptions, Page, Playwright, Viewport,
};

/// Playwright connection plus one launched browser.
pub struct Session {
    playwright: Playwright,
    browser: Browser,
    config: SuiteConfig,
}

impl Session {
    /// Starts Playwright and launches the configured browser.
    pub async fn launch(config: SuiteConfig) -> Result<Self> {
        tracing::info!(
            "Launching {} (headless: {}) against {}",
            config.browser.as_str(),
            config.headless,
            config.base_url
        );

        let playwright = Playwright::launch().await?;
        let browser_type = match config.browser {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let browser = browser_type
            .launch_with_options(LaunchOptions::new().headless(config.headless))
            .await?;

        Ok(Self {
            playwright,
            browser,
            config,
        })
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Opens a fresh context (configured viewport, downloads accepted) with
    /// one page.
    pub async fn new_case(&self) -> Result<TestCase> {
        let options = BrowserContextOptions::builder()
            .viewport(Viewport {
                width: self.config.viewport.width,
                height: self.config.viewport.height,
            })
            .accept_downloads(true)
            .build();

        let context = self.browser.new_context_with_options(options).await?;
        let page = context.new_page().await?;
        tracing::debug!(
            "Opened test case context ({}x{})",
            self.config.viewport.width,
            self.config.viewport.height
        );

        Ok(TestCase {
            context,
            page,
            config: self.config.clone(),
        })
    }

    /// Closes the browser, then the Playwright server.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        Ok(())
    }
}

/// One test case: an isolated browser context and its page.
pub struct TestCase {
    context: BrowserContext,
    page: Page,
    config: SuiteConfig,
}

impl TestCase {
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Primitives bound to this case's page and the configured timeouts.
    pub fn base_page(&self) -> BasePage {
        BasePage::new(self.page.clone(), self.config.base_url.as_str())
            .with_timeouts(self.config.timeouts)
    }

    pub async fn home_page(&self) -> HomePage {
        HomePage::from_base(self.base_page()).await
    }

    pub async fn login_page(&self) -> LoginPage {
        LoginPage::from_base(self.base_page()).await
    }

    pub async fn products(&self) -> ProductsPage {
        ProductsPage::from_base(self.base_page()).await
    }

    pub async fn product_detail_page(&self) -> ProductDetailPage {
        ProductDetailPage::from_base(self.base_page()).await
    }

    pub async fn cart_page(&self) -> CartPage {
        CartPage::from_base(self.base_page()).await
    }

    pub async fn checkout_page(&self) -> CheckoutPage {
        CheckoutPage::from_base(self.base_page()).await
    }

    pub async fn payment_page(&self) -> PaymentPage {
        PaymentPage::from_base(self.base_page()).await
    }

    pub async fn contact_us_page(&self) -> ContactUsPage {
        ContactUsPage::from_base(self.base_page()).await
    }

    pub async fn test_cases_page(&self) -> TestCasesPage {
        TestCasesPage::from_base(self.base_page()).await
    }

    /// Home page, opened and verified.
    pub async fn home(&self) -> Result<HomePage> {
        let home = self.home_page().await;
        home.go_to_home().await?;
        Ok(home)
    }

    /// Home → "Signup / Login", with the login heading verified.
    pub async fn login_signup_page(&self) -> Result<LoginPage> {
        let home = self.home().await?;
        home.go_to_signup_or_login().await?;

        let login = self.login_page().await;
        login
            .verify_login_to_your_account_text(LOGIN_TITLE_TEXT)
            .await?;
        Ok(login)
    }

    /// Home → "Products", with the "All Products" heading verified.
    pub async fn products_page(&self) -> Result<ProductsPage> {
        let home = self.home().await?;
        home.go_to_products_page().await?;

        let products = self.products().await;
        products.verify_all_products_text(ALL_PRODUCTS_TITLE).await?;
        Ok(products)
    }

    /// Logs in from the login page and verifies the "Logged in as" banner.
    pub async fn login_user(&self, email: &str, password: &str, username: &str) -> Result<LoginPage> {
        let login = self.login_signup_page().await?;
        login.fill_login_form(email, password).await?;
        login.click_login_button().await?;
        login.verify_logged_in_user(username).await?;
        Ok(login)
    }

    /// Closes the context and with it the page.
    pub async fn close(self) -> Result<()> {
        self.context.close().await?;
        Ok(())
    }
}
