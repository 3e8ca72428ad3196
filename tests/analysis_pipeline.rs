//! Summarize two raw latency tables, then compare them.

use status_gate::analysis::{compare_files, summarize_file};

fn raw_table(rows: usize, base: f64) -> String {
    let mut s = String::from("req,t1,t2,t3\n");
    for i in 1..=rows {
        let v = base * i as f64;
        s.push_str(&format!("{i},{},{},{}\n", v - 1.0, v, v + 1.0));
    }
    s
}

#[test]
fn test_summarize_then_compare() {
    let dir = tempfile::tempdir().unwrap();
    let app_raw = dir.path().join("app_raw.csv");
    let nginx_raw = dir.path().join("nginx_raw.csv");
    let app = dir.path().join("app.csv");
    let nginx = dir.path().join("nginx.csv");
    let combined = dir.path().join("combined.csv");

    std::fs::write(&app_raw, raw_table(12, 10.0)).unwrap();
    std::fs::write(&nginx_raw, raw_table(12, 5.0)).unwrap();

    assert_eq!(summarize_file(&app_raw, Some(&app)).unwrap(), 12);
    assert_eq!(summarize_file(&nginx_raw, Some(&nginx)).unwrap(), 12);

    let summary = std::fs::read_to_string(&app).unwrap();
    assert_eq!(
        summary.lines().nth(1).unwrap(),
        "1,9.000000,11.000000,2.000000,10.000000"
    );

    assert_eq!(compare_files(&app, &nginx, 10, Some(&combined)).unwrap(), 2);
    let combined = std::fs::read_to_string(&combined).unwrap();
    assert_eq!(
        combined,
        "req,baseline,candidate,fraction\n\
         1,10.000000,5.000000,0.500000\n\
         11,110.000000,55.000000,0.500000\n"
    );
}

#[test]
fn test_summarize_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.csv");
    let err = summarize_file(&missing, None).unwrap_err();
    assert!(format!("{err:#}").contains("missing.csv"));
}
