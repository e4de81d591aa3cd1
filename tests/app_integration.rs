use chrono::NaiveDate;
use hindsight::cli::show::{self, ShowOptions};
use hindsight::core::LoadError;
use std::path::PathBuf;
use tracing::info;

mod test_utils {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Writes a small BTC-like price history spanning a few years.
    pub fn write_price_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("bitcoin_data.csv");
        let content = "\
DATE~OPEN~HIGH~LOW~CLOSE~VOLUME
2017-12-15~17600~17900~17000~17706.90~1
2017-12-18~19100~19200~18500~18961.86~1
2018-12-15~3300~3350~3200~3236.76~1
2021-11-08~63000~67500~62900~67566.83~1
2026-01-02~88000~90000~87800~89500.00~1
";
        fs::write(&path, content).expect("Failed to write price file");
        path
    }

    pub fn write_config(dir: &TempDir, data_path: &std::path::Path) -> PathBuf {
        let path = dir.path().join("config.yaml");
        let content = format!(
            r#"
data_path: "{}"
asset:
  name: "Bitcoin"
  symbol: "BTC"
tail_rows: 3
chart:
  width: 30
  height: 6
"#,
            data_path.display()
        );
        fs::write(&path, content).expect("Failed to write config file");
        path
    }
}

#[test_log::test]
fn test_full_app_flow_with_config() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let data_path = test_utils::write_price_file(&dir);
    let config_path = test_utils::write_config(&dir, &data_path);

    let result = hindsight::run_command(
        hindsight::AppCommand::Show(ShowOptions::default()),
        Some(config_path.to_str().unwrap()),
    );
    assert!(
        result.is_ok(),
        "Main function failed with: {:?}",
        result.err()
    );
}

#[test_log::test]
fn test_missing_price_file_halts() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &dir.path().join("missing.csv"));

    let result = hindsight::run_command(
        hindsight::AppCommand::Show(ShowOptions::default()),
        Some(config_path.to_str().unwrap()),
    );
    let err = result.expect_err("Missing data should fail");
    info!("Reported error: {err}");
    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::DataUnavailable { .. })
    ));
    assert!(err.to_string().contains("missing.csv"));
}

#[test_log::test]
fn test_missing_config_file_is_error() {
    let result = hindsight::run_command(
        hindsight::AppCommand::Show(ShowOptions::default()),
        Some("/nonexistent/config.yaml"),
    );
    assert!(result.is_err());
}

#[test_log::test]
fn test_dashboard_for_default_purchase_date() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let data_path = test_utils::write_price_file(&dir);
    let config_path = test_utils::write_config(&dir, &data_path);
    let config = hindsight::load_config(Some(config_path.to_str().unwrap())).unwrap();

    let mut out = Vec::new();
    show::run(&config, &ShowOptions::default(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    info!("Rendered dashboard:\n{text}");

    // 2017-12-17 sits between the 15th (2 days) and the 18th (1 day).
    assert!(text.contains("Price on 2017-12-18"));
    assert!(text.contains("$18,961.86"));
    assert!(text.contains("Value on 2026-01-02"));
    assert!(text.contains("BTC You'd Own"));
    assert!(text.contains("Growth of $100.00 Investment Over Time"));
    assert!(text.contains("2021-11-08"));
    assert!(!text.contains("2017-12-15"));
}

#[test_log::test]
fn test_json_output_values() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let data_path = test_utils::write_price_file(&dir);
    let config = hindsight::load_config(Some(
        test_utils::write_config(&dir, &data_path).to_str().unwrap(),
    ))
    .unwrap();

    let options = ShowOptions {
        amount: Some(1000.0),
        date: NaiveDate::from_ymd_opt(2018, 12, 1),
        json: true,
        ..Default::default()
    };
    let mut out = Vec::new();
    show::run(&config, &options, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let result = &value["result"];
    assert_eq!(result["resolved_date"], "2018-12-15");
    assert_eq!(result["buy_price"], 3236.76);
    assert_eq!(result["current_price"], 89500.0);

    let units = result["units_owned"].as_f64().unwrap();
    assert!((units * 3236.76 - 1000.0).abs() < 1e-9);
    let roi = result["roi_percent"].as_f64().unwrap();
    assert!((roi - (89500.0 / 3236.76 - 1.0) * 100.0).abs() < 1e-9);

    let projection = value["projection"].as_array().unwrap();
    assert_eq!(projection.len(), 3);
    assert_eq!(projection[0]["date"], "2018-12-15");
    let first_value = projection[0]["portfolio_value"].as_f64().unwrap();
    assert!((first_value - 1000.0).abs() < 1e-9);

    assert_eq!(value["recent"].as_array().unwrap().len(), 3);
}

#[test_log::test]
fn test_data_flag_overrides_config() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let data_path = test_utils::write_price_file(&dir);
    let config_path = test_utils::write_config(&dir, &PathBuf::from("/nonexistent.csv"));
    let config = hindsight::load_config(Some(config_path.to_str().unwrap())).unwrap();

    let options = ShowOptions {
        data_path: Some(data_path),
        ..Default::default()
    };
    let mut out = Vec::new();
    assert!(show::run(&config, &options, &mut out).is_ok());
    assert!(!out.is_empty());
}
