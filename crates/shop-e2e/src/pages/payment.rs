// PaymentPage - Card form, order confirmation and invoice download

use super::base::BasePage;
use crate::data::records::Payment;
use crate::error::{Error, Result, ensure_contains};
use crate::wait::ElementState;
use playwright_rs::protocol::Download;
use playwright_rs::{Locator, Page};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

const FORM_TIMEOUT: Duration = Duration::from_secs(5);
const ORDER_PLACED_TIMEOUT: Duration = Duration::from_secs(10);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

pub struct PaymentPage {
    base: BasePage,
    name_on_card: Locator,
    card_number: Locator,
    cvc: Locator,
    expiry_month: Locator,
    expiry_year: Locator,
    pay_button: Locator,
    order_placed_title: Locator,
    download_invoice_button: Locator,
}

impl PaymentPage {
    pub async fn new(page: Page, base_url: &str) -> Self {
        Self::from_base(BasePage::new(page, base_url)).await
    }

    pub async fn from_base(base: BasePage) -> Self {
        Self {
            name_on_card: base.locator(r#"[data-qa="name-on-card"]"#).await,
            card_number: base.locator(r#"[data-qa="card-number"]"#).await,
            cvc: base.locator(r#"[data-qa="cvc"]"#).await,
            expiry_month: base.locator(r#"[data-qa="expiry-month"]"#).await,
            expiry_year: base.locator(r#"[data-qa="expiry-year"]"#).await,
            pay_button: base.locator("button.submit-button").await,
            order_placed_title: base.locator(r#"[data-qa="order-placed"]"#).await,
            download_invoice_button: base.locator(r#"a:has-text("Download Invoice")"#).await,
            base,
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub async fn fill_payment(&self, payment: &Payment) -> Result<()> {
        tracing::info!("Fill payment information");
        let fields = [
            (&self.name_on_card, payment.name_on_card.as_str()),
            (&self.card_number, payment.card_number.as_str()),
            (&self.cvc, payment.cvc.as_str()),
            (&self.expiry_month, payment.expiry_month.as_str()),
            (&self.expiry_year, payment.expiry_year.as_str()),
        ];
        for (locator, value) in fields {
            self.base.fill_within(locator, value, FORM_TIMEOUT).await?;
        }
        Ok(())
    }

    pub async fn click_pay_button(&self) -> Result<()> {
        tracing::info!("Click on 'Pay' button");
        self.base
            .click_within(&self.pay_button, FORM_TIMEOUT)
            .await
    }

    pub async fn verify_order_placed_text(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify order placed message text");
        self.base
            .wait_for(
                &self.order_placed_title,
                ElementState::Visible,
                ORDER_PLACED_TIMEOUT,
            )
            .await?;
        let actual = self.base.read_text(&self.order_placed_title).await?;
        ensure_contains("Order placed title", expected, &actual)
    }

    /// Clicks "Download Invoice", saves the file to `save_path` and checks it
    /// is non-empty. Returns the saved path.
    pub async fn download_invoice(&self, save_path: impl AsRef<Path>) -> Result<PathBuf> {
        let save_path = save_path.as_ref().to_path_buf();
        tracing::info!("Download invoice to {}", save_path.display());

        self.base
            .wait_for(
                &self.download_invoice_button,
                ElementState::Visible,
                FORM_TIMEOUT,
            )
            .await?;

        let (tx, mut rx) = mpsc::unbounded_channel::<Download>();
        self.base
            .page()
            .on_download(move |download| {
                let tx = tx.clone();
                async move {
                    // Receiver gone means the wait below already gave up
                    let _ = tx.send(download);
                    Ok(())
                }
            })
            .await?;

        self.base.click(&self.download_invoice_button).await?;

        let download = tokio::time::timeout(DOWNLOAD_TIMEOUT, rx.recv())
            .await
            .map_err(|_| {
                Error::Download(format!(
                    "no download started within {}ms",
                    DOWNLOAD_TIMEOUT.as_millis()
                ))
            })?
            .ok_or_else(|| Error::Download("download listener closed".to_string()))?;

        tracing::debug!("Saving '{}' to {}", download.suggested_filename(), save_path.display());
        download.save_as(&save_path).await?;

        let size = tokio::fs::metadata(&save_path)
            .await
            .map_err(|e| Error::Download(format!("'{}' was not saved: {}", save_path.display(), e)))?
            .len();
        if size == 0 {
            return Err(Error::Download(format!(
                "'{}' is empty",
                save_path.display()
            )));
        }

        Ok(save_path)
    }
}
