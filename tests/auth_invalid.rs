//! Invalid login attempts: a user that does not exist, and a real user with
//! the wrong password. The shop reports both through native alerts whose
//! exact wording the suite treats as contractual.

use demostore_e2e::flows::{messages, AuthFlow};
use demostore_e2e::Fixture;

#[tokio::test]
#[ignore = "drives a live Chrome session against the demo shop"]
async fn login_with_nonexistent_user_is_rejected() -> anyhow::Result<()> {
    let fixture = Fixture::launch().await?;
    let auth = fixture.settings().auth.clone();
    let flow = AuthFlow::new(fixture.session().clone());

    fixture
        .run_step(
            "login with non-existent user",
            flow.login_expecting_rejection(
                &auth.invalid_username,
                &auth.invalid_password,
                messages::USER_DOES_NOT_EXIST,
            ),
        )
        .await?;

    fixture.close().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "drives a live Chrome session against the demo shop"]
async fn login_with_wrong_password_is_rejected() -> anyhow::Result<()> {
    let fixture = Fixture::launch().await?;
    let auth = fixture.settings().auth.clone();
    let flow = AuthFlow::new(fixture.session().clone());

    fixture
        .run_step(
            "login with valid user and wrong password",
            flow.login_expecting_rejection(
                &auth.valid_username,
                &auth.wrong_password,
                messages::WRONG_PASSWORD,
            ),
        )
        .await?;

    fixture.close().await?;
    Ok(())
}
