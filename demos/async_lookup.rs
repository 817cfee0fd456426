//! Async pipelines with FutureOptional and FutureOutcome
//!
//! Run with: cargo run --example async_lookup

use std::collections::HashMap;
use std::sync::Arc;

use placid::future::{FutureOptional, FutureOutcome};
use placid::{Optional, Outcome};

#[derive(Debug, Clone)]
struct Inventory {
    stock: Arc<HashMap<&'static str, u32>>,
}

impl Inventory {
    fn lookup(&self, sku: &'static str) -> FutureOptional<u32> {
        let stock = Arc::clone(&self.stock);
        FutureOptional::new(async move {
            tokio::task::yield_now().await;
            Optional::from(stock.get(sku).copied())
        })
    }
}

fn reserve(available: u32, wanted: u32) -> FutureOutcome<String, u32> {
    FutureOutcome::new(async move {
        if available >= wanted {
            Outcome::ok(available - wanted)
        } else {
            Outcome::fail(format!("only {} left", available))
        }
    })
}

#[tokio::main]
async fn main() {
    let inventory = Inventory {
        stock: Arc::new(HashMap::from([("apple", 5), ("pear", 1)])),
    };

    for sku in ["apple", "pear", "plum"] {
        let message = inventory
            .lookup(sku)
            .or_fail(format!("unknown sku {}", sku))
            .chain(|available| reserve(available, 2))
            .either(
                |reason| format!("{}: cannot reserve ({})", sku, reason),
                |left| format!("{}: reserved, {} left", sku, left),
            )
            .await;
        println!("{}", message);
    }
}
