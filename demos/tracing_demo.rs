//! Demonstrates tracing integration with the async wrappers
//!
//! Run with: cargo run --example tracing_demo --features tracing

use placid::future::{FutureOptional, FutureOutcome};
use placid::{Optional, Outcome};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    let order = find_order(7)
        .chain(|id| charge(id).into_value())
        .instrument(tracing::info_span!("checkout", order_id = 7))
        .or_else(0)
        .await;
    tracing::info!("Charged amount: {}", order);

    let declined = charge(0)
        .if_fail(|reason| format!("declined: {}", reason))
        .instrument(tracing::debug_span!("charge", order_id = 0))
        .await;
    tracing::info!("Declined charge: {:?}", declined);

    // Contract violations are logged as warnings.
    let violation = Outcome::<String, u32>::try_fail(None);
    tracing::info!("Contract check: {:?}", violation);
}

fn find_order(id: u32) -> FutureOptional<u32> {
    FutureOptional::new(async move {
        tracing::debug!(id, "looking up order");
        if id > 0 {
            Optional::of(id)
        } else {
            Optional::empty()
        }
    })
}

fn charge(id: u32) -> FutureOutcome<&'static str, u32> {
    FutureOutcome::new(async move {
        tracing::debug!(id, "charging order");
        if id == 0 {
            Outcome::fail("no order")
        } else {
            Outcome::ok(id * 100)
        }
    })
}
