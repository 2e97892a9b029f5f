#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;
use tavalendo::models::{RideInput, Settings};

pub fn tvl() -> Command {
    let mut cmd = cargo_bin_cmd!("tavalendo");
    // keep the theme independent from the terminal running the tests
    cmd.env_remove("COLORFGBG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tavalendo.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tavalendo_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh database initialized through the CLI.
pub fn init_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    tvl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

pub fn add_ride(db_path: &str, fare: &str, km: &str, minutes: &str) {
    tvl()
        .args(["--db", db_path, "add", fare, km, minutes])
        .assert()
        .success();
}

pub fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected ≈{expected}, got {actual}"
    );
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 16, 12, 0, 0).unwrap()
}

/// Costs switched off, so net per km equals fare / distance.
pub fn free_vehicle(target: f64) -> Settings {
    Settings {
        target_earnings_per_km: target,
        gas_price: 0.0,
        fuel_consumption: 0.0,
        other_vehicle_costs_per_km: 0.0,
        currency: "R$".to_string(),
    }
}

pub fn sample_ride() -> RideInput {
    RideInput::new(20.0, 10.0, 30.0)
}
