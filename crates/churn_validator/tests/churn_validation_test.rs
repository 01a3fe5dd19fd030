//! End-to-end validation scenarios for the churn dataset.
//!
//! Each test builds a small dataset around a realistic base row and checks the
//! exact ordered failure list the validator returns.

use churn_validator::{
    ChurnValidator, Column, DataRow, DataSet, DataValue, DatasetError, DiagnosticLevel,
    MemorySink, NullSink, ValidationResult,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn base_row(id: &str) -> DataRow {
    serde_json::from_value(json!({
        "customerID": id,
        "gender": "Female",
        "Partner": "Yes",
        "Dependents": "No",
        "PhoneService": "Yes",
        "InternetService": "Fiber optic",
        "Contract": "One year",
        "tenure": 24,
        "MonthlyCharges": 70.35,
        "TotalCharges": "1688.4",
        "Churn": "No"
    }))
    .unwrap()
}

fn all_columns() -> DataSet {
    DataSet::with_columns(Column::ALL.map(Column::name))
}

fn dataset(rows: Vec<DataRow>) -> DataSet {
    let mut dataset = all_columns();
    for row in rows {
        dataset.add_row(row);
    }
    dataset
}

fn quiet() -> ChurnValidator {
    ChurnValidator::with_sink(Arc::new(NullSink))
}

fn failures_of(dataset: &DataSet) -> Vec<String> {
    quiet().validate(dataset).unwrap().into_parts().1
}

#[test]
fn test_fully_valid_minimal_dataset() {
    let result = quiet().validate(&dataset(vec![base_row("7590-VHVEG")])).unwrap();
    assert!(result.is_valid());
    assert_eq!(result.into_parts(), (true, Vec::new()));
}

#[test]
fn test_missing_column_reports_only_schema_failure() {
    let mut row = base_row("A");
    row.remove("Contract");
    row.insert("tenure".into(), DataValue::Int(-5));
    row.insert("gender".into(), "male".into());

    let result = quiet().validate(&DataSet::from_rows(vec![row])).unwrap();
    assert!(!result.is_valid());
    assert_eq!(
        result.failures(),
        ["Missing required columns: [Contract]".to_string()]
    );
}

#[test]
fn test_missing_columns_listed_sorted() {
    let dataset = DataSet::with_columns(["gender", "Partner", "Dependents"]);
    assert_eq!(
        failures_of(&dataset),
        vec![
            "Missing required columns: [Churn, Contract, InternetService, MonthlyCharges, \
             PhoneService, TotalCharges, customerID, tenure]"
        ]
    );
}

#[test]
fn test_empty_dataset_with_all_columns() {
    let result = quiet().validate(&all_columns()).unwrap();
    assert!(!result.is_valid());
    assert_eq!(
        result.failures(),
        ["Not enough non-null rows to evaluate 'TotalCharges >= MonthlyCharges'".to_string()]
    );
}

#[test]
fn test_blank_total_charges_allowed_for_new_customers() {
    let sink = Arc::new(MemorySink::new());
    let validator = ChurnValidator::with_sink(sink.clone());

    let mut new_customer = base_row("B");
    new_customer.insert("tenure".into(), DataValue::Int(0));
    new_customer.insert("TotalCharges".into(), " ".into());

    let result = validator
        .validate(&dataset(vec![base_row("A"), new_customer]))
        .unwrap();

    assert_eq!(result, ValidationResult::passed());
    assert_eq!(
        sink.lines_at(DiagnosticLevel::Warning),
        vec!["1 non-numeric 'TotalCharges' for tenure==0; allowed"]
    );
}

#[test]
fn test_blank_total_charges_with_tenure_fails() {
    let sink = Arc::new(MemorySink::new());
    let validator = ChurnValidator::with_sink(sink.clone());

    let mut new_customer = base_row("A");
    new_customer.insert("tenure".into(), DataValue::Int(0));
    new_customer.insert("TotalCharges".into(), " ".into());
    let mut first = base_row("B");
    first.insert("TotalCharges".into(), " ".into());
    let mut second = base_row("C");
    second.insert("TotalCharges".into(), "n/a".into());

    let failures = validator
        .validate(&dataset(vec![new_customer, first, second, base_row("D")]))
        .unwrap()
        .into_parts()
        .1;

    assert_eq!(
        failures,
        vec!["'TotalCharges' has 2 non-numeric values where tenure > 0"]
    );
    // The failure replaces the tolerance notice
    assert!(sink.lines_at(DiagnosticLevel::Warning).is_empty());
}

#[test]
fn test_value_sets_are_case_sensitive() {
    let mut row = base_row("A");
    row.insert("gender".into(), "male".into());
    row.insert("InternetService".into(), "fiber optic".into());

    assert_eq!(
        failures_of(&dataset(vec![row])),
        vec![
            "Unexpected values in 'gender': [male]; allowed=[Female, Male]",
            "Unexpected values in 'InternetService': [fiber optic]; allowed=[DSL, Fiber optic, No]",
        ]
    );
}

#[test]
fn test_consistency_threshold() {
    let rows = |ok: usize, bad: usize| {
        let mut rows = Vec::new();
        for i in 0..ok + bad {
            let mut row = base_row(&format!("C-{i}"));
            if i >= ok {
                row.insert("TotalCharges".into(), "10.0".into());
            }
            rows.push(row);
        }
        rows
    };

    assert_eq!(
        failures_of(&dataset(rows(94, 6))),
        vec![
            "'TotalCharges >= MonthlyCharges' holds for 94.000% of rows; \
             expected >= 95% (violations=6/100)"
        ]
    );
    assert!(failures_of(&dataset(rows(95, 5))).is_empty());
}

#[test]
fn test_duplicate_customer_ids() {
    let rows = ["A", "B", "A", "C", "A"].into_iter().map(base_row).collect();
    assert_eq!(
        failures_of(&dataset(rows)),
        vec!["'customerID' has 2 duplicate values"]
    );
}

#[test]
fn test_failures_follow_check_order() {
    let mut first = base_row("A");
    first.insert("customerID".into(), DataValue::Null);
    first.insert("tenure".into(), DataValue::Null);
    first.insert("Partner".into(), "Maybe".into());

    let mut second = base_row("B");
    second.insert("tenure".into(), DataValue::Int(150));
    second.insert("MonthlyCharges".into(), DataValue::Float(-20.0));
    second.insert("Churn".into(), "Unknown".into());

    let mut third = base_row("B");
    third.insert("MonthlyCharges".into(), DataValue::Float(250.0));
    third.insert("TotalCharges".into(), "-1".into());

    assert_eq!(
        failures_of(&dataset(vec![first, second, third])),
        vec![
            "Column 'customerID' contains 1 nulls",
            "Column 'tenure' contains 1 nulls",
            "Unexpected values in 'Partner': [Maybe]; allowed=[No, Yes]",
            "'MonthlyCharges' contains 1 negative values",
            "'TotalCharges' contains 1 negative values",
            "'tenure' exceeds 120 months (10 years) in 1 rows",
            "'MonthlyCharges' exceeds 200 in 1 rows",
            "'tenure' has 1 nulls",
            "'TotalCharges >= MonthlyCharges' holds for 66.667% of rows; \
             expected >= 95% (violations=1/3)",
            "Unexpected values in 'Churn': [Unknown] (expected 'Yes'/'No')",
            "'customerID' has 1 duplicate values",
        ]
    );
}

#[test]
fn test_numeric_null_checks_report_twice() {
    let mut row = base_row("A");
    row.insert("MonthlyCharges".into(), DataValue::Null);

    assert_eq!(
        failures_of(&dataset(vec![row, base_row("B")])),
        vec![
            "Column 'MonthlyCharges' contains 1 nulls",
            "'MonthlyCharges' has 1 nulls",
        ]
    );
}

#[test]
fn test_no_comparable_rows() {
    let mut row = base_row("A");
    row.insert("tenure".into(), DataValue::Int(0));
    row.insert("TotalCharges".into(), DataValue::Null);

    assert_eq!(
        failures_of(&dataset(vec![row])),
        vec!["Not enough non-null rows to evaluate 'TotalCharges >= MonthlyCharges'"]
    );
}

#[test]
fn test_validation_is_idempotent() {
    let mut row = base_row("A");
    row.insert("gender".into(), "F".into());
    let dataset = dataset(vec![row, base_row("A")]);
    let validator = quiet();

    let first = validator.validate(&dataset).unwrap();
    let second = validator.validate(&dataset).unwrap();
    assert_eq!(first, second);
    assert!(!first.is_valid());
}

#[test]
fn test_positional_records() {
    let columns: Vec<String> = Column::ALL.iter().map(|c| c.name().to_string()).collect();
    let record = |id: &str| -> Vec<DataValue> {
        vec![
            id.into(),
            "Male".into(),
            "No".into(),
            "No".into(),
            "Yes".into(),
            "No".into(),
            "Two year".into(),
            DataValue::Int(72),
            DataValue::Float(19.65),
            "1400.55".into(),
            "No".into(),
        ]
    };

    let dataset = DataSet::from_records(columns, vec![record("X"), record("Y")]).unwrap();
    assert_eq!(failures_of(&dataset), Vec::<String>::new());
}

#[test]
fn test_text_in_tenure_is_fatal() {
    let mut row = base_row("A");
    row.insert("tenure".into(), "24".into());

    let err = quiet().validate(&dataset(vec![base_row("B"), row])).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::TypeMismatch {
            column: Column::Tenure,
            row: 1,
            expected: "number",
            actual: "string",
        }
    ));
}

#[test]
fn test_default_validator_runs() {
    let result = churn_validator::validate_churn_data(&dataset(vec![base_row("A")])).unwrap();
    assert!(result.is_valid());
}
