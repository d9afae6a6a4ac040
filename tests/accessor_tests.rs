//! Integration tests for pluggable member access.

use fieldpath::value::{Key, Record, Value};
use fieldpath::{RegistryAccessor, Resolver};
use indexmap::IndexMap;

fn derived_record() -> Value {
    Value::Record(
        Record::new("Derived")
            .with_field("own", Value::from("own value"))
            .with_hidden_field("secret", Value::from("hidden"))
            .with_base(
                Record::new("Base")
                    .with_field("inherited", Value::from("base value"))
                    .with_base(Record::new("Root").with_field("deep", Value::from("root value"))),
            ),
    )
}

#[test]
fn test_resolves_field_declared_on_the_value_itself() {
    let root = derived_record();
    let found = Resolver::new().resolve(&root, &["own"]).unwrap();
    assert_eq!(found, &Value::from("own value"));
}

#[test]
fn test_resolves_field_from_base_record() {
    let root = derived_record();
    let found = Resolver::new().resolve(&root, &["inherited"]).unwrap();
    assert_eq!(found, &Value::from("base value"));
}

#[test]
fn test_resolves_field_from_deepest_base() {
    let root = derived_record();
    let found = Resolver::new().resolve(&root, &["deep"]).unwrap();
    assert_eq!(found, &Value::from("root value"));
}

#[test]
fn test_unreadable_field_is_not_accessible() {
    let root = derived_record();
    let err = Resolver::new().resolve(&root, &["secret"]).unwrap_err();
    assert_eq!(err.message(), "field 'secret' is not accessible");
}

#[test]
fn test_field_missing_everywhere_is_not_found() {
    let root = derived_record();
    let err = Resolver::new().resolve(&root, &["nowhere"]).unwrap_err();
    assert_eq!(err.message(), "field 'nowhere' does not exist");
}

#[test]
fn test_registry_projection_as_member_access() {
    // Expose a map entry as if it were a field named "version".
    let accessor = RegistryAccessor::new().register("map", "version", |value| {
        value.as_map().and_then(|map| map.get(&Key::from("version")))
    });

    let mut map = IndexMap::new();
    map.insert(Key::from("version"), Value::from(2_i64));
    let root = Value::Record(Record::new("Wrapper").with_field("meta", Value::Map(map)));

    let resolver = Resolver::new().accessor(&accessor);
    let found = resolver.resolve(&root, &["meta", "version"]).unwrap();
    assert_eq!(found, &Value::Int(2));
}

#[test]
fn test_registry_miss_falls_back_to_record_fields() {
    let accessor = RegistryAccessor::new();
    let root = derived_record();
    let resolver = Resolver::new().accessor(&accessor);
    let found = resolver.resolve(&root, &["own"]).unwrap();
    assert_eq!(found, &Value::from("own value"));
}

#[test]
fn test_registry_projection_returning_nothing_is_not_found() {
    let accessor = RegistryAccessor::new().register("seq", "first", |value| {
        value.as_seq().and_then(|items| items.first())
    });
    let root = Value::Record(Record::new("W").with_field("items", Value::Seq(vec![])));
    let resolver = Resolver::new().accessor(&accessor);
    let err = resolver.resolve(&root, &["items", "first"]).unwrap_err();
    assert!(err.message().contains("does not exist"));
}
