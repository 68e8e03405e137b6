//! The full purchase journey: three products added (with one "Product added"
//! alert each), one deleted from the cart, the order form validated and
//! submitted, the confirmation checked, and the cart verified empty.
//!
//! Every step mutates state the next step depends on, so they run strictly
//! in order on one session inside a single test body.

use demostore_e2e::flows::PurchaseFlow;
use demostore_e2e::Fixture;

#[tokio::test]
#[ignore = "drives a live Chrome session against the demo shop"]
async fn purchase_journey_ends_with_an_empty_cart() -> anyhow::Result<()> {
    let fixture = Fixture::launch().await?;
    let flow = PurchaseFlow::new(fixture.session().clone());

    fixture
        .run_step("add a phone to cart", flow.add_phone_to_cart())
        .await?;
    fixture
        .run_step("add a laptop to cart", flow.add_laptop_to_cart())
        .await?;
    fixture
        .run_step("add a monitor to cart", flow.add_monitor_to_cart())
        .await?;
    fixture
        .run_step("check out cart", flow.review_cart())
        .await?;
    fixture
        .run_step(
            "reject submission without required fields",
            flow.reject_submission_without_required_fields(),
        )
        .await?;
    fixture
        .run_step("complete purchase", flow.complete_purchase())
        .await?;
    fixture
        .run_step("verify cart is empty", flow.verify_cart_is_empty())
        .await?;

    fixture.close().await?;
    Ok(())
}
