use std::fs;

use fuel_core::InputVar;
use fuel_prop::{load_budget, InputUncertainty, UncertaintyBudget};

#[test]
fn budget_loads_from_yaml() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("budget.yaml");
    fs::write(
        &path,
        "temperature:\n  delta: 50.0\n  step: 2.0\nburnup:\n  delta: 0.25\n  step: 0.01\n",
    )
    .expect("write budget");

    let budget = load_budget(&path).expect("budget loads");
    assert_eq!(
        budget.get(InputVar::Temperature).unwrap(),
        InputUncertainty::new(50.0, 2.0)
    );
    assert!(budget.get(InputVar::Density).unwrap_err().is_config());
}

#[test]
fn default_budget_round_trips_yaml() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("budget.yaml");
    let yaml = UncertaintyBudget::default().to_yaml_string().expect("serialize");
    fs::write(&path, yaml).expect("write");
    assert_eq!(load_budget(&path).unwrap(), UncertaintyBudget::default());
}

#[test]
fn invalid_yaml_values_rejected() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("budget.yaml");
    fs::write(&path, "density:\n  delta: -1.0\n  step: 0.1\n").expect("write");
    let err = load_budget(&path).unwrap_err();
    assert!(err.is_config());
    assert_eq!(err.info().code, "invalid-uncertainty");

    let err = load_budget(dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.info().code, "budget_read");
}
