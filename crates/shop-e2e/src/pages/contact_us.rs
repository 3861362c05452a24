// ContactUsPage - "Get In Touch" form on `/contact_us`
//
// The submit control sits under an overlay on the live shop, so it is
// clicked with `force` once attached instead of waiting for actionability.

use super::base::BasePage;
use crate::data::records::ContactMessage;
use crate::error::{Error, Result, ensure_eq};
use crate::wait::{ElementState, TextMatch};
use playwright_rs::{Locator, Page};
use std::path::Path;
use std::time::Duration;

const FORM_TIMEOUT: Duration = Duration::from_secs(5);
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ContactUsPage {
    base: BasePage,
    get_in_touch_title: Locator,
    name_input: Locator,
    email_input: Locator,
    subject_input: Locator,
    message_input: Locator,
    upload_input: Locator,
    submit_button: Locator,
    success_message: Locator,
    home_link: Locator,
}

impl ContactUsPage {
    pub async fn new(page: Page, base_url: &str) -> Self {
        Self::from_base(BasePage::new(page, base_url)).await
    }

    pub async fn from_base(base: BasePage) -> Self {
        Self {
            get_in_touch_title: base.locator("div.contact-form h2.title").await,
            name_input: base.locator(r#"[data-qa="name"]"#).await,
            email_input: base.locator(r#"[data-qa="email"]"#).await,
            subject_input: base.locator(r#"[data-qa="subject"]"#).await,
            message_input: base.locator(r#"[data-qa="message"]"#).await,
            upload_input: base.locator(r#"input[name="upload_file"]"#).await,
            submit_button: base.locator(r#"input[data-qa="submit-button"]"#).await,
            success_message: base.locator("div.status.alert.alert-success").await,
            home_link: base.locator("a.btn-success").await,
            base,
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub async fn verify_get_in_touch_text(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify '{}' text is visible", expected);
        self.base
            .wait_for(&self.get_in_touch_title, ElementState::Visible, FORM_TIMEOUT)
            .await?;
        let actual = self.base.read_text_content(&self.get_in_touch_title).await?;
        ensure_eq("Contact form title", expected, actual.as_str())
    }

    pub async fn fill_contact_us_form(&self, message: &ContactMessage) -> Result<()> {
        tracing::info!("Fill Contact Us form");
        let fields = [
            (&self.name_input, message.name.as_str()),
            (&self.email_input, message.email.as_str()),
            (&self.subject_input, message.subject.as_str()),
            (&self.message_input, message.message.as_str()),
        ];
        for (locator, value) in fields {
            self.base.fill_within(locator, value, FORM_TIMEOUT).await?;
        }
        Ok(())
    }

    /// Attaches `path` to the form's file input.
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref().to_path_buf();
        tracing::info!("Upload file {}", path.display());
        self.base
            .wait_for(&self.upload_input, ElementState::Attached, FORM_TIMEOUT)
            .await?;
        self.upload_input.set_input_files(&path, None).await?;
        Ok(())
    }

    pub async fn click_submit_button(&self) -> Result<()> {
        tracing::info!("Click Submit button");
        self.base
            .force_click(&self.submit_button, SUBMIT_TIMEOUT)
            .await
    }

    /// After submission the form is rendered again with every field empty.
    pub async fn verify_form_after_submit(&self) -> Result<()> {
        tracing::info!("Verify form after submit");
        self.base
            .wait_for(&self.name_input, ElementState::Visible, SUBMIT_TIMEOUT)
            .await?;

        let fields = [
            (&self.name_input, "Name field"),
            (&self.email_input, "Email field"),
            (&self.subject_input, "Subject field"),
            (&self.message_input, "Message field"),
        ];
        for (locator, what) in fields {
            let value = locator.input_value(None).await?;
            if !value.is_empty() {
                return Err(Error::assertion(what, "", value));
            }
        }
        Ok(())
    }

    pub async fn verify_success_message(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify contact form success message");
        self.base
            .expect_text_within(
                &self.success_message,
                TextMatch::Contains,
                expected,
                SUBMIT_TIMEOUT,
            )
            .await
    }

    pub async fn click_home_button(&self) -> Result<()> {
        tracing::info!("Click Home button");
        self.base.click(&self.home_link).await
    }
}
