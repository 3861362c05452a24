//! shop-e2e: End-to-end UI tests for the automationexercise.com demo shop
//!
//! A Page Object layer over [`playwright_rs`]: wait-then-act primitives,
//! one page object per shop page, randomized test data and fixtures that
//! pre-position the browser for each scenario.
//!
//! # Example
//!
//! ```ignore
//! use shop_e2e::data::expected::{SIGN_UP_TITLE_TEXT, TEST_USER};
//! use shop_e2e::{Session, SuiteConfig};
//!
//! #[tokio::test]
//! async fn login_with_valid_data() -> shop_e2e::Result<()> {
//!     shop_e2e::init_tracing();
//!     let session = Session::launch(SuiteConfig::from_env()?).await?;
//!     let case = session.new_case().await?;
//!
//!     let login = case
//!         .login_user(TEST_USER.email, TEST_USER.password, TEST_USER.username)
//!         .await?;
//!     login.click_logout_button().await?;
//!
//!     case.close().await?;
//!     session.close().await
//! }
//! ```

pub mod config;
pub mod data;
mod error;
pub mod fixture;
mod logging;
pub mod pages;
pub mod wait;

// Re-export error types
pub use error::{Error, Result};

// Re-export configuration
pub use config::{BrowserKind, SuiteConfig, SuiteConfigBuilder, Timeouts, ViewportSize};

// Re-export fixtures
pub use fixture::{Session, TestCase};

// Re-export logging setup
pub use logging::init_tracing;

// Re-export primitives
pub use wait::{ElementState, TextMatch};
