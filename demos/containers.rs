//! Tour of the synchronous containers
//!
//! Run with: cargo run --example containers

use placid::{lift2, lift3, list, List, Optional, Outcome, IO};

#[derive(Debug, Clone)]
struct User {
    name: String,
    email: Option<String>,
}

fn find_user(id: u32) -> Optional<User> {
    match id {
        1 => Optional::of(User {
            name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
        }),
        2 => Optional::of(User {
            name: "Grace".to_string(),
            email: None,
        }),
        _ => Optional::empty(),
    }
}

fn parse_age(raw: &str) -> Outcome<String, u8> {
    raw.parse::<u8>()
        .map_err(|e| format!("{:?}: {}", raw, e))
        .into()
}

fn main() {
    println!("=== Optional ===");
    for id in [1, 2, 3] {
        let email = find_user(id)
            .chain(|user| Optional::from(user.email))
            .or_else("<no email>".to_string());
        println!("user {}: {}", id, email);
    }

    let found = Optional::fetch_filter(vec![1, 3, 2], |id| find_user(*id).map(|u| u.name));
    for entry in &found {
        println!("fetched {} -> {}", entry.src, entry.data);
    }

    println!("\n=== Outcome ===");
    for raw in ["42", "-1", "300"] {
        let message = parse_age(raw).either(
            |error| format!("rejected {}", error),
            |age| format!("accepted age {}", age),
        );
        println!("{}", message);
    }

    let all = Outcome::all_vec(vec![parse_age("1"), parse_age("x"), parse_age("3")]);
    println!("all: {:?}", all);

    println!("\n=== List ===");
    let words = list!["pure functions", "deferred effects"];
    let letters: List<usize> = words.chain(|s| s.split(' ')).map(str::len);
    println!("word lengths: {:?}", letters.into_vec());

    println!("\n=== IO ===");
    let greeting = IO::new(|| "hello".to_string()).map(|s| s.to_uppercase());
    let shout = greeting.clone().chain(|s| IO::new(move || format!("{}!", s)));
    println!("nothing has run yet; running twice: {} {}", shout.exec(), shout.exec());

    println!("\n=== Lifts ===");
    let label = lift2(
        |user: User, age: u8| format!("{} ({})", user.name, age),
        find_user(1),
        parse_age("36").into_value(),
    );
    println!("label: {:?}", label);

    let coords = lift3(
        |x: i32, y: i32, z: i32| (x, y, z),
        List::of([0, 1]),
        List::of([0]),
        List::of([5, 6]),
    );
    println!("coords: {:?}", coords.into_vec());
}
