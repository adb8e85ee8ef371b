//! Minimal fieldgate example: a club record with a guarded name.
//!
//! Run with:
//!   RUST_LOG=trace cargo run --example basic

use fieldgate::{Chain, Configuration, Record, validators, watch};
use serde_json::json;

fn main() {
    tracing_subscriber::fmt::init();

    let config = Configuration::new()
        .field(
            "name",
            Chain::new()
                .then(validators::is_string())
                .then(validators::trim())
                .then(validators::shorter_than(26))
                .then(validators::longer_than(2)),
        )
        .field(
            "motto",
            Chain::new().optional().then(validators::is_string()),
        )
        .field("members", Chain::new().then(validators::default_to(0)));

    let mut club = Record::new().with("name", "Needs a name");
    let mut view = watch(&mut club, config).expect("initial values are valid");

    // Absent optional field stays absent; absent required field got its default.
    println!("after watch: {}", view.record().clone().into_value());

    for name in ["Skydiving Scarf Knitters Association", "  Skydiving Rocks!  "] {
        match view.set("name", name) {
            Ok(())   => println!("stored name {:?}", view.get("name").unwrap_or(&json!(null))),
            Err(err) => println!("rejected {name:?}: {err}"),
        }
    }

    // Unconfigured fields are stored as given.
    view.set("founded", 1987).expect("unconfigured fields always accept");

    println!("final: {}", club.into_value());
}
