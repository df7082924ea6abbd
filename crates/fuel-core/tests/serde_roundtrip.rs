use fuel_core::errors::FuelError;
use fuel_core::provenance::{RunProvenance, SchemaVersion};
use fuel_core::serde::{from_json_slice, to_canonical_json_bytes};
use fuel_core::{catalog, catalog_hash, stable_hash_string, Specimen};

#[test]
fn provenance_round_trip_json() {
    let provenance = RunProvenance {
        input_hash: "input".into(),
        catalog_hash: "catalog".into(),
        created_at: "2025-01-01T00:00:00Z".into(),
        tool_versions: [("fuel-core".into(), "0.1.0".into())].into_iter().collect(),
    };
    let bytes = to_canonical_json_bytes(&provenance).expect("serialize");
    let decoded: RunProvenance = from_json_slice(&bytes).expect("deserialize");
    assert_eq!(decoded, provenance);
    assert_eq!(SchemaVersion::default(), SchemaVersion::new(1, 0, 0));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = FuelError::domain("non-positive-burnup", "burnup must be positive");
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "Domain");
    assert_eq!(json["detail"]["code"], "non-positive-burnup");
    let decoded: FuelError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn catalog_hash_is_stable_and_order_sensitive() {
    let specimens = catalog();
    let first = catalog_hash(&specimens).expect("hash");
    assert_eq!(first, catalog_hash(&catalog()).expect("hash again"));
    assert_eq!(first.len(), 64);

    let mut reversed: Vec<Specimen> = specimens.clone();
    reversed.reverse();
    assert_ne!(first, catalog_hash(&reversed).expect("hash reversed"));
}

#[test]
fn canonical_json_sorts_keys() {
    let value = serde_json::json!({"b": 1, "a": {"d": 2, "c": 3}});
    let bytes = to_canonical_json_bytes(&value).expect("serialize");
    assert_eq!(String::from_utf8(bytes).unwrap(), r#"{"a":{"c":3,"d":2},"b":1}"#);
    assert_eq!(
        stable_hash_string(&value).unwrap(),
        stable_hash_string(&serde_json::json!({"a": {"c": 3, "d": 2}, "b": 1})).unwrap()
    );
}

#[test]
fn canonical_json_sorts_struct_fields() {
    let specimen = &catalog()[0];
    let json = String::from_utf8(to_canonical_json_bytes(specimen).expect("serialize")).unwrap();
    assert_eq!(
        json,
        r#"{"burnup_fima":7.058,"density_td":92.89,"id":"RRN01-6","target":1,"temperature_k":1190.0}"#
    );
}
