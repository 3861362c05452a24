// Shared setup for the scenario tests
//
// Every scenario runs against its own mock shop: start the server, launch a
// browser session pointed at it, open one test case.

#![allow(dead_code)]

use crate::test_server::TestServer;
use shop_e2e::config::{ENV_BROWSER, ENV_HEADED};
use shop_e2e::{Session, SuiteConfig, TestCase, Timeouts};

/// Initializes tracing once per test binary (honors `RUST_LOG`).
pub fn init_tracing() {
    shop_e2e::init_tracing();
}

/// Timeouts sized for a local server: failures surface in seconds, not
/// the half minute the live shop needs.
pub fn local_timeouts() -> Timeouts {
    Timeouts {
        navigation_ms: 10_000,
        click_ms: 5_000,
        visibility_ms: 5_000,
        assertion_ms: 3_000,
    }
}

/// Config targeting `base_url`; browser and headed mode still follow the
/// runner's environment.
pub fn config_for(base_url: &str) -> SuiteConfig {
    SuiteConfig::builder()
        .base_url(base_url)
        .timeouts(local_timeouts())
        .build()
        .and_then(|config| {
            config.with_overrides(|key| match key {
                ENV_BROWSER | ENV_HEADED => std::env::var(key).ok(),
                _ => None,
            })
        })
        .expect("Failed to build suite config")
}

/// Mock shop, browser session and one open test case.
pub struct Harness {
    pub server: TestServer,
    pub session: Session,
    pub case: TestCase,
}

impl Harness {
    pub async fn start() -> Self {
        init_tracing();

        let server = TestServer::start().await;
        let session = Session::launch(config_for(&server.url()))
            .await
            .expect("Failed to launch browser session");
        let case = session.new_case().await.expect("Failed to open test case");

        Harness {
            server,
            session,
            case,
        }
    }

    /// Closes the case, the browser and the server, in that order.
    pub async fn finish(self) {
        self.case.close().await.expect("Failed to close test case");
        self.session
            .close()
            .await
            .expect("Failed to close browser session");
        self.server.shutdown();
    }
}
