use std::path::Path;

use super::*;

fn patterns(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn empty_filter_accepts_all() {
    let filter = GlobFilter::new(&[]).unwrap();

    assert!(filter.should_include(Path::new("main.rs")));
    assert!(filter.should_include(Path::new("deep/nested/readme.txt")));
}

#[test]
fn exclude_directory_patterns() {
    let filter = GlobFilter::new(&patterns(&["**/target/**", "vendor/**"])).unwrap();

    assert!(filter.should_include(Path::new("src/main.rs")));
    assert!(!filter.should_include(Path::new("target/debug/main.rs")));
    assert!(!filter.should_include(Path::new("crates/a/target/x.rs")));
    assert!(!filter.should_include(Path::new("vendor/lib.go")));
}

#[test]
fn exclude_file_patterns() {
    let filter = GlobFilter::new(&patterns(&["**/*.generated.rs"])).unwrap();

    assert!(filter.should_include(Path::new("src/code.rs")));
    assert!(!filter.should_include(Path::new("src/code.generated.rs")));
}

#[test]
fn invalid_pattern_names_the_pattern() {
    let err = GlobFilter::new(&patterns(&["ok/**", "[broken"])).err().unwrap();

    assert!(matches!(err, ToolshedError::InvalidPattern { ref pattern, .. } if pattern == "[broken"));
}
