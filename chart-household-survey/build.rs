//! Build script for chart-household-survey.
//!
//! Copies the survey CSV to OUT_DIR so it can be embedded via `include_str!`
//! at compile time, after checking that its header row has the columns the
//! charts group by.

use std::env;
use std::fs;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 5] = ["survey", "ownrent", "electricity", "latrine", "hohreligion"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let src_path = "../fixtures/household_characteristics.csv";
    let src = Path::new(src_path);
    let dest = Path::new(&out_dir).join("household_characteristics.csv");

    if src.exists() {
        let mut rdr = csv::Reader::from_path(src)
            .unwrap_or_else(|e| panic!("Failed to open {}: {}", src_path, e));
        let headers = rdr
            .headers()
            .unwrap_or_else(|e| panic!("Failed to read headers of {}: {}", src_path, e))
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h.trim() == column) {
                println!(
                    "cargo:warning={} has no '{}' column; the app will report a load error",
                    src_path, column
                );
            }
        }
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
        });
    } else {
        // Header-only placeholder so include_str! doesn't fail
        fs::write(&dest, format!("{}\n", REQUIRED_COLUMNS.join(","))).unwrap();
        println!(
            "cargo:warning=Fixture file {} not found, using empty placeholder",
            src_path
        );
    }

    println!("cargo:rerun-if-changed={}", src_path);
    println!("cargo:rerun-if-changed=build.rs");
}
