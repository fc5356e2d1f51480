// Shared helpers for covview integration tests
#![allow(dead_code)]

use std::path::PathBuf;

/// Path of a file under `tests/fixtures/coverage`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("coverage")
        .join(name)
}

pub fn fixture_bytes(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).expect("Failed to read fixture")
}

// Helper to create temporary report files
pub fn create_report_file(content: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("report.json");
    std::fs::write(&file_path, content).expect("Failed to write report file");
    (temp_dir, file_path)
}

/// A well-formed report with `targets` targets of `files` files each
pub fn generated_report(targets: usize, files: usize) -> String {
    let targets: Vec<String> = (0..targets)
        .map(|t| {
            let files: Vec<String> = (0..files)
                .map(|f| {
                    format!(
                        r#"{{"coveredLines":{c},"executableLines":100,"functions":[{{"coveredLines":1,"executableLines":1,"executionCount":2,"lineCoverage":1.0,"lineNumber":3,"name":"f{f}()"}}],"lineCoverage":{r},"name":"File{f}.swift","path":"/src/T{t}/File{f}.swift"}}"#,
                        c = f % 101,
                        r = (f % 101) as f64 / 100.0,
                    )
                })
                .collect();
            format!(
                r#"{{"buildProductPath":"/Build/T{t}.app","coveredLines":0,"executableLines":0,"files":[{}],"lineCoverage":0.0,"name":"T{t}.app"}}"#,
                files.join(",")
            )
        })
        .collect();

    format!(
        r#"{{"coveredLines":0,"executableLines":0,"lineCoverage":0.0,"targets":[{}]}}"#,
        targets.join(",")
    )
}
