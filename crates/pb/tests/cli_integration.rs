//! End-to-end tests for the `pb` binary.
//!
//! Each test writes a small dataset and an isolated config path into a temp
//! directory, then runs the binary with a fixed `--at` so statuses are stable.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

/// 2025-01-06 is a Monday.
const MONDAY_MORNING: &str = "2025-01-06T10:30";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("facilities.json"), dataset().to_string())
            .expect("failed to write dataset");
        Self { dir }
    }

    fn data_path(&self) -> PathBuf {
        self.dir.path().join("facilities.json")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config").join("config.toml")
    }

    fn command(&self) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_pb"));
        command
            .env("PB_CONFIG", self.config_path())
            .env("PB_DATA", self.data_path())
            .env("RUST_LOG", "off")
            .current_dir(self.dir.path());
        command
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(["--at", MONDAY_MORNING])
            .args(args)
            .output()
            .expect("failed to run pb")
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let output = self.run(&[&["--json"][..], args].concat());
        assert!(
            output.status.success(),
            "pb {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}

fn dataset() -> Value {
    json!([
        {
            "Facility Name": "Lisboa Pickleball Club",
            "District": "Lisboa",
            "Full Address": "Av. da Liberdade 100, Lisboa",
            "Phone": "+351 210 000 000",
            "Website": "https://lpc.pt",
            "Number of Courts": "6",
            "Latitude": "38.7223",
            "Longitude": "-9.1393",
            "Additional Information": "Aulas; Torneios, Loja",
            "Operating Hours": "{\"Monday\":\"9am-12pm, 4pm-8pm\",\"Sunday\":\"Closed\"}"
        },
        {
            "Facility Name": "Porto Indoor",
            "District": "Porto",
            "Full Address": "Rua de Santa Catarina 10, Porto",
            "Phone": "220 000 000",
            "Number of Courts": 10,
            "Latitude": 41.1579,
            "Longitude": -8.6291,
            "Operating Hours": {"Monday": "Open 24 hours"}
        },
        {
            "Facility Name": "Faro Courts",
            "District": "Faro",
            "Full Address": "Rua de Santo António 5, Faro",
            "Phone": "289 000 000",
            "Number of Courts": "1",
            "Operating Hours": "{bad json"
        },
        {
            "Facility Name": "Lisboa Oeste",
            "District": "Lisboa",
            "Full Address": "Rua do Pickleball 3, Oeiras",
            "Phone": "210 111 111",
            "Number of Courts": "3",
            "Latitude": "38.6979",
            "Longitude": "-9.3017",
            "Operating Hours": "{\"Monday\":\"10pm-2am\"}"
        }
    ])
}

fn facility_names(value: &Value) -> Vec<String> {
    value["facilities"]
        .as_array()
        .expect("facilities array")
        .iter()
        .map(|f| f["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

fn stderr_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stderr).expect("stderr is not JSON")
}

#[test]
fn test_list_all_in_dataset_order() {
    let ws = Workspace::new();
    let value = ws.run_json(&["list"]);

    assert_eq!(value["count"], 4);
    assert_eq!(value["evaluated_at"], "2025-01-06T10:30:00");
    assert_eq!(
        facility_names(&value),
        vec![
            "Lisboa Pickleball Club",
            "Porto Indoor",
            "Faro Courts",
            "Lisboa Oeste"
        ]
    );
}

#[test]
fn test_list_statuses_at_fixed_time() {
    let ws = Workspace::new();
    let value = ws.run_json(&["list"]);
    let statuses: Vec<&str> = value["facilities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["status"].as_str().unwrap())
        .collect();

    // The overnight range never matches.
    assert_eq!(statuses, vec!["open", "open", "unknown", "closed"]);
}

#[test]
fn test_list_filters_combine() {
    let ws = Workspace::new();

    let value = ws.run_json(&["list", "--status", "open"]);
    assert_eq!(
        facility_names(&value),
        vec!["Lisboa Pickleball Club", "Porto Indoor"]
    );

    let value = ws.run_json(&["list", "--district", "Lisboa", "--status", "closed"]);
    assert_eq!(facility_names(&value), vec!["Lisboa Oeste"]);
    assert_eq!(value["criteria"]["district"], "Lisboa");

    let value = ws.run_json(&["list", "--search", "aulas"]);
    assert_eq!(facility_names(&value), vec!["Lisboa Pickleball Club"]);
}

#[test]
fn test_list_court_classes() {
    let ws = Workspace::new();

    let value = ws.run_json(&["list", "-c", "1"]);
    assert_eq!(facility_names(&value), vec!["Faro Courts"]);

    let value = ws.run_json(&["list", "-c", "8"]);
    assert_eq!(facility_names(&value), vec!["Porto Indoor"]);

    let value = ws.run_json(&["list", "-c", "2"]);
    assert_eq!(value["count"], 0);
}

#[test]
fn test_list_table_in_english() {
    let ws = Workspace::new();
    let output = ws.run(&["--no-color", "--locale", "en", "list", "-d", "Porto"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Porto Indoor"));
    assert!(stdout.contains("10 courts"));
    assert!(stdout.contains("Open"));
    assert!(stdout.ends_with("1 facility\n"));
}

#[test]
fn test_show_card_details() {
    let ws = Workspace::new();
    let output = ws.run(&["--no-color", "show", "lisboa pickleball"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Lisboa Pickleball Club\n"));
    assert!(stdout.contains("Número de Campos: 6 campos"));
    assert!(stdout.contains("Segunda-feira (hoje)"));
    assert!(stdout.contains("09:00-12:00, 16:00-20:00"));
    assert!(stdout.contains("Serviços Adicionais: Aulas, Torneios, Loja"));
}

#[test]
fn test_show_json_without_hours() {
    let ws = Workspace::new();
    let value = ws.run_json(&["show", "Faro Courts"]);

    assert_eq!(value["courts"], "1 campo");
    assert_eq!(value["status"], "unknown");
    assert!(value.get("hours").is_none());
}

#[test]
fn test_show_not_found_suggests_name() {
    let ws = Workspace::new();
    let output = ws.run(&["--json", "show", "Porto Indor"]);

    assert_eq!(output.status.code(), Some(1));
    let error = stderr_json(&output);
    assert_eq!(error["error"]["code"], "LOOKUP_ERROR");
    assert!(error["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Did you mean 'Porto Indoor'?"));
}

#[test]
fn test_show_ambiguous_name() {
    let ws = Workspace::new();
    let output = ws.run(&["show", "lisboa"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("matches several facilities"));
}

#[test]
fn test_map_markers_and_bounds() {
    let ws = Workspace::new();
    let value = ws.run_json(&["map"]);

    assert_eq!(value["count"], 4);
    assert_eq!(value["zoom"], 12);
    let markers = value["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 3);
    assert!(markers.iter().all(|m| m["name"] != "Faro Courts"));
    assert!(markers[0]["popup"]
        .as_str()
        .unwrap()
        .contains("tel:+351 210 000 000"));
}

#[test]
fn test_map_fallback_view() {
    let ws = Workspace::new();
    let output = ws.run(&["--no-color", "map", "-d", "Faro"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Default view 39.5000,-8.0000 zoom 7"));
}

#[test]
fn test_districts() {
    let ws = Workspace::new();
    let value = ws.run_json(&["districts"]);

    assert_eq!(
        value["districts"],
        json!([
            {"name": "Faro", "facilities": 1},
            {"name": "Lisboa", "facilities": 2},
            {"name": "Porto", "facilities": 1}
        ])
    );
}

#[test]
fn test_missing_dataset() {
    let ws = Workspace::new();
    let missing = ws.dir.path().join("missing.json");
    let output = ws
        .command()
        .args(["--json", "--data"])
        .arg(&missing)
        .arg("list")
        .output()
        .expect("failed to run pb");

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_json(&output)["error"]["code"], "DATASET_ERROR");
}

#[test]
fn test_malformed_dataset() {
    let ws = Workspace::new();
    let broken = ws.dir.path().join("broken.json");
    fs::write(&broken, "{\"not\": \"an array\"}").unwrap();

    let output = ws
        .command()
        .arg("--data")
        .arg(&broken)
        .arg("list")
        .output()
        .expect("failed to run pb");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: dataset error"));
}

#[test]
fn test_config_locale_applies_to_output() {
    let ws = Workspace::new();

    let output = ws.run(&["config", "set", "locale", "en"]);
    assert!(output.status.success());
    assert!(config_contains(&ws.config_path(), "locale = \"en\""));

    let value = ws.run_json(&["show", "Porto Indoor"]);
    assert_eq!(value["courts"], "10 courts");
    assert_eq!(value["status_badge"], "Open");
}

#[test]
fn test_config_rejects_invalid_timezone() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "set", "timezone", "Mars/Olympus"]);

    assert_eq!(output.status.code(), Some(5));
    assert!(!ws.config_path().exists());
}

fn config_contains(path: &Path, needle: &str) -> bool {
    fs::read_to_string(path)
        .map(|content| content.contains(needle))
        .unwrap_or(false)
}
