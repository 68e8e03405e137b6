//! Valid authentication journey: sign up a freshly generated user, then log
//! in with the same credentials. Both steps share one session and run in
//! order inside a single test body; the generated username keeps parallel
//! runs from colliding. Generated users are never cleaned up; the shop has
//! no deletion endpoint.

use demostore_e2e::flows::AuthFlow;
use demostore_e2e::{test_credentials, Fixture};

#[tokio::test]
#[ignore = "drives a live Chrome session against the demo shop"]
async fn sign_up_then_login_shows_welcome_banner() -> anyhow::Result<()> {
    let fixture = Fixture::launch().await?;
    let credentials = test_credentials(&fixture.settings().auth, "chrome");
    let flow = AuthFlow::new(fixture.session().clone());

    fixture
        .run_step("sign up with generated credentials", flow.sign_up(&credentials))
        .await?;

    let banner = fixture
        .run_step(
            "log in with the new user",
            flow.login_and_expect_welcome(&credentials),
        )
        .await?;
    assert!(banner.contains(&credentials.username));

    fixture.close().await?;
    Ok(())
}
