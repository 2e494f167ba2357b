//! Integration tests for loading datasets from disk.

use std::fs;

use pickleball_data_rs::{Dataset, DatasetError};
use tempfile::TempDir;

const SAMPLE: &str = r#"[
    {
        "Facility Name": "Lisboa Pickleball Club",
        "District": "Lisboa",
        "Full Address": "Av. da Liberdade 100, 1250-145 Lisboa",
        "Phone": "+351 210 000 000",
        "Email": "geral@lpc.pt",
        "Website": "https://lpc.pt",
        "Number of Courts": "6",
        "Latitude": "38.7223",
        "Longitude": "-9.1393",
        "Additional Information": "Aulas, Torneios; Loja",
        "Operating Hours": "{\"Monday\":\"9am-9pm\",\"Sunday\":\"Closed\"}"
    },
    {
        "Facility Name": "Faro Courts",
        "District": "Faro",
        "Full Address": "Rua de Santo António 5, Faro",
        "Phone": "289 000 000",
        "Number of Courts": "1",
        "Latitude": "",
        "Longitude": "",
        "Additional Information": "",
        "Operating Hours": ""
    }
]"#;

#[test]
fn test_load_dataset_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("facilities.json");
    fs::write(&path, SAMPLE).unwrap();

    let dataset = Dataset::load(&path).unwrap();

    assert_eq!(dataset.len(), 2);
    let lisboa = &dataset.facilities()[0];
    assert_eq!(lisboa.name, "Lisboa Pickleball Club");
    assert_eq!(lisboa.website(), Some("https://lpc.pt"));
    assert!(lisboa.coordinates().is_some());

    let faro = &dataset.facilities()[1];
    assert!(faro.email().is_none());
    assert!(faro.coordinates().is_none());
    assert_eq!(faro.operating_hours.as_deref(), Some(""));
    assert_eq!(dataset.districts(), vec!["Faro", "Lisboa"]);
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = Dataset::load(&path).unwrap_err();

    match &err {
        DatasetError::Read { path: failed, .. } => assert_eq!(failed, &path),
        other => panic!("expected read error, got {other:?}"),
    }
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_load_invalid_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"Facility Name\": ").unwrap();

    let err = Dataset::load(&path).unwrap_err();
    assert!(matches!(err, DatasetError::Json(_)));
}
