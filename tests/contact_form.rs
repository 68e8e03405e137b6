//! Contact form journey: fill out the modal, send it through the guarded
//! submit, and check the thank-you alert.

use demostore_e2e::flows::ContactFlow;
use demostore_e2e::Fixture;

#[tokio::test]
#[ignore = "drives a live Chrome session against the demo shop"]
async fn contact_form_submission_is_acknowledged() -> anyhow::Result<()> {
    let fixture = Fixture::launch().await?;
    let flow = ContactFlow::new(fixture.session().clone());

    fixture
        .run_step(
            "submit contact form",
            flow.submit_message(
                "example@example.com",
                "Real Person",
                "Real message from real person",
            ),
        )
        .await?;

    fixture.close().await?;
    Ok(())
}
