#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::path::PathBuf;

use k6report::{run, ReportPaths};

/// Fresh scratch directory per test.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("k6report-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_summary(paths: &ReportPaths, value: serde_json::Value) {
    fs::write(&paths.summary, serde_json::to_vec(&value).unwrap()).unwrap();
}

#[test]
fn concrete_scenario() {
    let dir = scratch("scenario");
    let paths = ReportPaths::in_dir(&dir);
    write_summary(
        &paths,
        serde_json::json!({"metrics": {
            "http_req_duration": {"avg": 123.456, "p(90)": 200.1, "p(95)": 250.9},
            "http_reqs": {"rate": 42.789},
            "http_req_failed": {"rate": 0.0123}
        }}),
    );

    let mut stdout = Vec::new();
    let report = run(&paths, &mut stdout).expect("run");

    for needle in [
        "Requests/sec:** 42.79",
        "Failure rate:** 1.23%",
        "Average:** 123.46",
        "p90:** 200.10",
        "p95:** 250.90",
    ] {
        assert!(report.contains(needle), "missing {needle:?}");
    }
    assert_eq!(fs::read_to_string(&paths.output).unwrap(), report);
    assert_eq!(String::from_utf8(stdout).unwrap(), format!("{report}\n"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_metrics_key_renders_zeros() {
    let dir = scratch("no-metrics");
    let paths = ReportPaths::in_dir(&dir);
    write_summary(&paths, serde_json::json!({"state": {"testRunDurationMs": 30012.5}}));

    let report = run(&paths, &mut Vec::new()).expect("run");
    assert!(report.contains("- **Requests/sec:** 0.00\n"));
    assert!(report.contains("- **Failure rate:** 0.00%\n"));
    assert!(report.contains("- **Average:** 0.00\n"));
    assert!(report.contains("- **p90:** 0.00\n"));
    assert!(report.contains("- **p95:** 0.00\n"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn rerun_overwrites_byte_identical() {
    let dir = scratch("idempotent");
    let paths = ReportPaths::in_dir(&dir);
    write_summary(&paths, serde_json::json!({"metrics": {"http_reqs": {"rate": 10}}}));
    fs::write(&paths.output, "stale content that is longer than nothing\n".repeat(50)).unwrap();

    run(&paths, &mut Vec::new()).unwrap();
    let first = fs::read(&paths.output).unwrap();
    run(&paths, &mut Vec::new()).unwrap();
    let second = fs::read(&paths.output).unwrap();

    assert_eq!(first, second);
    assert!(!String::from_utf8(first).unwrap().contains("stale"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_summary_leaves_report_untouched() {
    let dir = scratch("missing");
    let paths = ReportPaths::in_dir(&dir);

    let mut stdout = Vec::new();
    let err = run(&paths, &mut stdout).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "READ_FAILED");
    assert!(!paths.output.exists());
    assert!(stdout.is_empty());

    fs::write(&paths.output, "previous report\n").unwrap();
    run(&paths, &mut stdout).expect_err("must fail");
    assert_eq!(fs::read_to_string(&paths.output).unwrap(), "previous report\n");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn malformed_summary_leaves_report_untouched() {
    let dir = scratch("malformed");
    let paths = ReportPaths::in_dir(&dir);
    fs::write(&paths.summary, "{\"metrics\": ").unwrap();

    let err = run(&paths, &mut Vec::new()).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "MALFORMED_SUMMARY");
    assert!(!paths.output.exists());
    fs::remove_dir_all(&dir).unwrap();
}
