// Site-wide scenarios: contact form, test cases page, subscription, scrolling
//
// Tests cover:
// - contact form with an uploaded file, success message, empty form after submit
// - header link to the test cases page
// - footer subscription from the home page and from the cart page
// - scroll up with the arrow button and with the keyboard

mod common;

use common::Harness;
use shop_e2e::data::expected::{
    CONTACT_SUCCESS_MESSAGE, GET_IN_TOUCH_TITLE, HEADER_CAROUSEL_TEXT, HOME_TITLE,
    SUBSCRIPTION_SUCCESS, SUBSCRIPTION_TITLE, TEST_CASES_HEADING, TEST_CASES_TITLE,
};
use shop_e2e::data::{Endpoint, generate_contact_message, generate_random_email};
use shop_e2e::wait::{self, DEFAULT_POLL_INTERVAL};
use std::io::Write;
use std::time::Duration;

#[tokio::test]
async fn test_contact_us_form() {
    let harness = Harness::start().await;

    let home = harness.case.home().await.expect("Failed to open home page");
    home.go_to_contact_us_form()
        .await
        .expect("Failed to open contact form");

    let contact = harness.case.contact_us_page().await;
    contact
        .verify_get_in_touch_text(GET_IN_TOUCH_TITLE)
        .await
        .expect("Contact title mismatch");
    contact
        .fill_contact_us_form(&generate_contact_message())
        .await
        .expect("Failed to fill contact form");

    let mut attachment = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("Failed to create attachment");
    writeln!(attachment, "Order 1042 arrived damaged").expect("Failed to write attachment");
    contact
        .upload_file(attachment.path())
        .await
        .expect("Failed to attach file");

    contact.click_submit_button().await.expect("Failed to submit");
    contact
        .verify_success_message(CONTACT_SUCCESS_MESSAGE)
        .await
        .expect("Success message missing");
    contact
        .verify_form_after_submit()
        .await
        .expect("Form not cleared after submit");
    contact
        .base()
        .verify_url(&Endpoint::ContactUs.path())
        .await
        .expect("Not on the contact page");

    contact.click_home_button().await.expect("Failed to go home");
    contact
        .base()
        .verify_url(&Endpoint::Home.path())
        .await
        .expect("Home button should lead home");

    harness.finish().await;
}

#[tokio::test]
async fn test_test_cases_page() {
    let harness = Harness::start().await;

    let home = harness.case.home().await.expect("Failed to open home page");
    home.base()
        .verify_title(HOME_TITLE)
        .await
        .expect("Home title mismatch");
    home.go_to_test_cases_page()
        .await
        .expect("Failed to open test cases");

    let test_cases = harness.case.test_cases_page().await;
    test_cases
        .verify_test_cases_text(TEST_CASES_HEADING)
        .await
        .expect("Test cases heading mismatch");
    test_cases
        .base()
        .verify_url(&Endpoint::TestCases.path())
        .await
        .expect("Not on the test cases page");
    test_cases
        .base()
        .verify_title(TEST_CASES_TITLE)
        .await
        .expect("Test cases title mismatch");

    harness.finish().await;
}

#[tokio::test]
async fn test_subscription_from_home_and_cart() {
    let harness = Harness::start().await;

    let home = harness.case.home().await.expect("Failed to open home page");
    home.scroll_to_footer().await.expect("Failed to scroll");
    home.verify_subscription_text(SUBSCRIPTION_TITLE)
        .await
        .expect("Subscription title mismatch");
    home.fill_subscription_form(&generate_random_email())
        .await
        .expect("Failed to fill email");
    home.click_subscribe_button()
        .await
        .expect("Failed to subscribe");
    home.verify_success_message(SUBSCRIPTION_SUCCESS)
        .await
        .expect("Subscription confirmation missing");

    // Same widget in the cart page footer
    home.go_to_cart_page().await.expect("Failed to open cart");
    home.scroll_to_footer().await.expect("Failed to scroll");
    home.verify_subscription_text(SUBSCRIPTION_TITLE)
        .await
        .expect("Subscription title mismatch on cart page");
    home.fill_subscription_form("jane.1700000000@example.com")
        .await
        .expect("Failed to fill email");
    home.click_subscribe_button()
        .await
        .expect("Failed to subscribe");
    home.verify_success_message(SUBSCRIPTION_SUCCESS)
        .await
        .expect("Subscription confirmation missing on cart page");

    harness.finish().await;
}

/// Polls the page scroll offset until it is back at the top.
async fn wait_for_top(home: &shop_e2e::pages::HomePage) -> bool {
    wait::poll_until(Duration::from_secs(5), DEFAULT_POLL_INTERVAL, || async {
        Ok(home.base().scroll_offset().await? < 1.0)
    })
    .await
    .expect("Failed to read scroll offset")
}

#[tokio::test]
async fn test_scroll_up_with_arrow_and_keyboard() {
    let harness = Harness::start().await;

    let home = harness.case.home().await.expect("Failed to open home page");

    // Arrow button
    home.scroll_to_footer().await.expect("Failed to scroll");
    home.verify_subscription_text(SUBSCRIPTION_TITLE)
        .await
        .expect("Subscription title mismatch");
    assert!(home.base().scroll_offset().await.expect("Failed to read offset") > 0.0);
    home.click_scroll_up_arrow_button()
        .await
        .expect("Failed to click scroll up arrow");
    assert!(wait_for_top(&home).await, "Arrow did not scroll to the top");
    home.verify_header_carousel_texts(HEADER_CAROUSEL_TEXT)
        .await
        .expect("Carousel texts mismatch");

    // Keyboard
    home.scroll_to_footer().await.expect("Failed to scroll");
    assert!(home.base().scroll_offset().await.expect("Failed to read offset") > 0.0);
    home.scroll_to_top_with_keyboard()
        .await
        .expect("Failed to press Home");
    assert!(wait_for_top(&home).await, "Home key did not scroll to the top");
    home.verify_header_carousel_texts(HEADER_CAROUSEL_TEXT)
        .await
        .expect("Carousel texts mismatch");

    harness.finish().await;
}
