//! End-to-end behaviour of watched records through the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fieldgate::{Chain, ConfigError, Configuration, Error, Kind, Record, validators, watch};
use serde_json::{Value, json};

fn club_config() -> Configuration {
    Configuration::new().field(
        "name",
        Chain::new()
            .then(validators::is_string())
            .then(validators::shorter_than(26))
            .then(validators::longer_than(2)),
    )
}

#[test]
fn club_name_scenario() {
    let mut club = Record::new().with("name", "Needs a name");
    let mut view = watch(&mut club, club_config()).unwrap();

    let err = view.set("name", "Skydiving Scarf Knitters Association").unwrap_err();
    match err {
        Error::Validation(failure) => {
            assert_eq!(failure.field, "name");
            assert_eq!(failure.expected, "length below 26");
            assert_eq!(failure.value, json!("Skydiving Scarf Knitters Association"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(view.get("name"), Some(&json!("Needs a name")));

    view.set("name", "Skydiving Rocks!").unwrap();
    assert_eq!(view.get("name"), Some(&json!("Skydiving Rocks!")));
}

#[test]
fn invalid_initial_value_fails_watch() {
    let mut club = Record::new().with("name", 12);
    let err = watch(&mut club, club_config()).unwrap_err();
    assert!(matches!(err, Error::Validation(ref f) if f.actual == Kind::Number.as_str()));
    assert_eq!(club.get("name"), Some(&json!(12)));
}

#[test]
fn reads_never_invoke_middleware() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let config = Configuration::new().field(
        "n",
        Chain::new().then(move |value: Value, _: &str, _: &Record| {
            counter.fetch_add(1, Ordering::SeqCst);
            value
        }),
    );

    let mut record = Record::new().with("n", 1);
    let mut view = watch(&mut record, config).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    for _ in 0..10 {
        assert_eq!(view.get("n"), Some(&json!(1)));
        assert!(view.contains("n"));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    view.set("n", 2).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn pattern_and_default_from_json_record() {
    let config = Configuration::new()
        .field("zip", Chain::new().then(validators::trim()).then(validators::matches(r"^\d{4}$").unwrap()))
        .field("country", Chain::new().then(validators::default_to("NO")));

    let mut record = Record::try_from(json!({ "zip": " 0150 " })).unwrap();
    let mut view = watch(&mut record, config).unwrap();
    assert_eq!(view.get("zip"), Some(&json!("0150")));
    assert_eq!(view.get("country"), Some(&json!("NO")));

    assert!(view.set("zip", "oslo").is_err());
    view.set("country", Value::Null).unwrap();
    assert_eq!(view.get("country"), Some(&json!("NO")));
}

#[test]
fn configuration_errors_surface_from_watch() {
    let mut record = Record::new();
    let config = Configuration::new()
        .field("a", Chain::new().then(validators::trim()))
        .field("a", Chain::new().then(validators::trim()));
    let err = watch(&mut record, config).unwrap_err();
    assert!(matches!(err, Error::Configuration(ConfigError::DuplicateField(_))));
    assert!(record.is_empty());
}

#[test]
fn shared_configuration_across_threads() {
    let config = Arc::new(club_config());
    let handles: Vec<_> = ["Alpine Club", "no"]
        .into_iter()
        .map(|name| {
            let config = Arc::clone(&config);
            std::thread::spawn(move || {
                let mut record = Record::new().with("name", "Needs a name");
                let mut view = watch(&mut record, config).unwrap();
                view.set("name", name).is_ok()
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, [true, false]);
}
