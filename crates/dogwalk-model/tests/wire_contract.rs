// SPDX-License-Identifier: Apache-2.0

use dogwalk_model::{City, CityId, Dog, DogId, DogView, WalkerId, WalkerView};
use serde_json::Value;

#[test]
fn dog_view_serializes_camel_case_with_explicit_nulls() {
    let view = DogView::new(
        DogId::new(2),
        "Max",
        CityId::new(2),
        None,
        Some(City::new(CityId::new(2), "Memphis")),
        None,
    );
    let value = serde_json::to_value(&view).expect("encode");
    assert_eq!(value["id"], 2);
    assert_eq!(value["name"], "Max");
    assert_eq!(value["cityId"], 2);
    assert_eq!(value["walkerId"], Value::Null);
    assert_eq!(value["city"]["name"], "Memphis");
    assert_eq!(value["walker"], Value::Null);
    let keys: Vec<&str> = value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert!(keys.contains(&"walkerId"), "unassigned walkerId must stay present");
    assert!(!keys.iter().any(|k| k.contains('_')), "wire keys are camelCase");
}

#[test]
fn walker_view_carries_joined_cities() {
    let view = WalkerView::new(
        WalkerId::new(1),
        "Sarah Johnson",
        vec![
            City::new(CityId::new(1), "Nashville"),
            City::new(CityId::new(2), "Memphis"),
        ],
    );
    let value = serde_json::to_value(&view).expect("encode");
    assert_eq!(value["cities"][0]["name"], "Nashville");
    assert_eq!(value["cities"][1]["id"], 2);
}

#[test]
fn views_reject_unknown_fields() {
    let raw = r#"{"id":1,"name":"Sarah Johnson","cities":[],"rating":5}"#;
    assert!(serde_json::from_str::<WalkerView>(raw).is_err());
    let raw = r#"{"id":1,"name":"Buddy","cityId":1,"walkerId":null,"city":null,"walker":null,"extra":1}"#;
    assert!(serde_json::from_str::<DogView>(raw).is_err());
}

#[test]
fn stored_dog_round_trips_through_camel_case() {
    let dog = Dog::new(DogId::new(1), "Buddy", CityId::new(1), Some(WalkerId::new(1)));
    let value = serde_json::to_value(&dog).expect("encode");
    assert_eq!(value["cityId"], 1);
    assert_eq!(value["walkerId"], 1);
    let decoded: Dog = serde_json::from_value(value).expect("decode");
    assert_eq!(dog, decoded);
}
