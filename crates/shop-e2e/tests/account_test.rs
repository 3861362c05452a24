// Account scenarios: register, login, logout, duplicate signup
//
// Tests cover:
// - registering a fresh user end to end, then deleting the account
// - signup with an email that is already registered
// - login with valid credentials
// - login with a wrong password
// - login with an email that was never registered
// - form errors in an unexpected wording report the text shown
// - logout returns to the login page

mod common;

use common::Harness;
use shop_e2e::data::expected::{
    ACCOUNT_CREATED_TITLE, ACCOUNT_DELETED_TITLE, ACCOUNT_INFORMATION_TITLE,
    ALREADY_EXIST_ERROR, EXISTING_SIGNUP_EMAIL, EXISTING_SIGNUP_NAME, EXPECTED_LOGIN_ERROR,
    LOGIN_TITLE_TEXT, SIGN_UP_TITLE_TEXT, TEST_USER,
};
use shop_e2e::Error;
use shop_e2e::data::{generate_password, generate_random_email, generate_random_user};
use shop_e2e::pages::LoginPage;

/// Signup form through "Create Account", with every entered value read
/// back before submitting.
async fn register(login: &LoginPage, name: &str, user: &shop_e2e::data::User) {
    login
        .verify_new_user_signup_text(SIGN_UP_TITLE_TEXT)
        .await
        .expect("Signup title mismatch");
    login
        .fill_name_email(name, &user.email)
        .await
        .expect("Failed to fill signup form");
    login.click_signup_button().await.expect("Failed to sign up");

    login
        .verify_account_info_title_text(ACCOUNT_INFORMATION_TITLE)
        .await
        .expect("Account information title mismatch");
    login.select_mrs_title().await.expect("Failed to select title");

    let info = user.account_info();
    login
        .fill_account_information(&info)
        .await
        .expect("Failed to fill account information");
    login
        .verify_account_information(name, &user.email, &info)
        .await
        .expect("Account information not kept");

    login
        .fill_address_information(&user.address)
        .await
        .expect("Failed to fill address");
    login
        .verify_address_information(&user.address)
        .await
        .expect("Address not kept");

    login
        .click_create_account_button()
        .await
        .expect("Failed to create account");
    login
        .wait_for_account_created()
        .await
        .expect("Account created page missing");
}

#[tokio::test]
async fn test_register_user_and_delete_account() {
    let harness = Harness::start().await;
    let user = generate_random_user();

    let login = harness
        .case
        .login_signup_page()
        .await
        .expect("Failed to open login page");
    register(&login, &user.first_name, &user).await;

    login.click_continue_button().await.expect("Failed to continue");
    login
        .verify_logged_in_user(&user.first_name)
        .await
        .expect("Not logged in after signup");

    login
        .click_delete_account_in_navbar()
        .await
        .expect("Failed to delete account");
    login
        .verify_account_deleted(ACCOUNT_DELETED_TITLE)
        .await
        .expect("Account deleted title missing");
    login.click_continue_button().await.expect("Failed to continue");
    login
        .verify_not_logged_in()
        .await
        .expect("Still logged in after deletion");

    harness.finish().await;
}

#[tokio::test]
async fn test_account_created_title_is_uppercase() {
    let harness = Harness::start().await;
    let user = generate_random_user();

    let login = harness
        .case
        .login_signup_page()
        .await
        .expect("Failed to open login page");
    register(&login, &user.first_name, &user).await;

    let title = harness
        .case
        .base_page()
        .locator(r#"[data-qa="account-created"]"#)
        .await;
    let text = harness
        .case
        .base_page()
        .read_text(&title)
        .await
        .expect("Failed to read title");
    assert_eq!(text, ACCOUNT_CREATED_TITLE);

    harness.finish().await;
}

#[tokio::test]
async fn test_register_with_existing_email() {
    let harness = Harness::start().await;

    let login = harness
        .case
        .login_signup_page()
        .await
        .expect("Failed to open login page");
    login
        .fill_name_email(EXISTING_SIGNUP_NAME, EXISTING_SIGNUP_EMAIL)
        .await
        .expect("Failed to fill signup form");
    login.click_signup_button().await.expect("Failed to sign up");

    login
        .verify_existing_email_error(ALREADY_EXIST_ERROR)
        .await
        .expect("Duplicate email error missing");
    login
        .verify_not_logged_in()
        .await
        .expect("Duplicate signup must not log in");

    harness.finish().await;
}

#[tokio::test]
async fn test_login_with_valid_credentials() {
    let harness = Harness::start().await;

    harness
        .case
        .login_user(TEST_USER.email, TEST_USER.password, TEST_USER.username)
        .await
        .expect("Login with valid credentials failed");

    harness.finish().await;
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let harness = Harness::start().await;

    let login = harness
        .case
        .login_signup_page()
        .await
        .expect("Failed to open login page");
    login
        .fill_login_form(TEST_USER.email, "not-the-password")
        .await
        .expect("Failed to fill login form");
    login.click_login_button().await.expect("Failed to log in");

    login
        .verify_incorrect_email_or_password_error(EXPECTED_LOGIN_ERROR)
        .await
        .expect("Login error missing");
    login
        .base()
        .verify_url("/login")
        .await
        .expect("Should stay on the login page");
    login
        .verify_not_logged_in()
        .await
        .expect("Wrong password must not log in");

    harness.finish().await;
}

#[tokio::test]
async fn test_login_with_unregistered_email() {
    let harness = Harness::start().await;

    let login = harness
        .case
        .login_signup_page()
        .await
        .expect("Failed to open login page");
    login
        .fill_login_form(&generate_random_email(), &generate_password(10))
        .await
        .expect("Failed to fill login form");
    login.click_login_button().await.expect("Failed to log in");

    login
        .verify_incorrect_email_or_password_error(EXPECTED_LOGIN_ERROR)
        .await
        .expect("Login error missing");
    login
        .base()
        .verify_url("/login")
        .await
        .expect("Should stay on the login page");
    login
        .verify_not_logged_in()
        .await
        .expect("Unknown email must not log in");

    harness.finish().await;
}

#[tokio::test]
async fn test_form_errors_report_the_text_shown() {
    let harness = Harness::start().await;

    let login = harness.case.login_page().await;
    login
        .base()
        .navigate("/login_errors.html")
        .await
        .expect("Failed to open login page");

    let err = login
        .verify_incorrect_email_or_password_error(EXPECTED_LOGIN_ERROR)
        .await
        .expect_err("Different login error must fail");
    match err {
        Error::Assertion { expected, actual, .. } => {
            assert_eq!(expected, EXPECTED_LOGIN_ERROR);
            assert_eq!(actual, "Login failed, please try again.");
        }
        other => panic!("Expected Assertion, got {:?}", other),
    }

    let err = login
        .verify_existing_email_error(ALREADY_EXIST_ERROR)
        .await
        .expect_err("Different signup error must fail");
    match err {
        Error::Assertion { expected, actual, .. } => {
            assert_eq!(expected, ALREADY_EXIST_ERROR);
            assert_eq!(actual, "This email is already registered.");
        }
        other => panic!("Expected Assertion, got {:?}", other),
    }

    harness.finish().await;
}

#[tokio::test]
async fn test_logout() {
    let harness = Harness::start().await;

    let login = harness
        .case
        .login_user(TEST_USER.email, TEST_USER.password, TEST_USER.username)
        .await
        .expect("Login failed");
    login.click_logout_button().await.expect("Failed to log out");

    login
        .base()
        .verify_url("/login")
        .await
        .expect("Logout should land on the login page");
    login
        .verify_login_to_your_account_text(LOGIN_TITLE_TEXT)
        .await
        .expect("Login title missing after logout");
    login
        .verify_not_logged_in()
        .await
        .expect("Still logged in after logout");

    harness.finish().await;
}
