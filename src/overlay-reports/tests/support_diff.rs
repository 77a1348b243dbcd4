use std::fs;
use std::path::PathBuf;

use overlay_reports::{compare_support_levels, write_support_diff, SupportDiffConfig};
use tempfile::TempDir;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/support-diff")
}

#[test]
fn compares_fixture_trees() {
    let comparison = compare_support_levels(&fixtures_root().join("new"), &fixtures_root().join("old"));

    let changed: Vec<(&str, &str, &str)> = comparison
        .changed
        .iter()
        .map(|c| (c.name.as_str(), c.old.as_str(), c.new.as_str()))
        .collect();
    assert_eq!(
        changed,
        vec![
            ("tekton", "tech-preview", "production"),
            ("topology", "production", "N/A"),
        ]
    );

    let added: Vec<&str> = comparison.added.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(added, vec!["3scale-backend"]);
}

#[test]
fn writes_asciidoc_with_labels() {
    let output = TempDir::new().unwrap();
    let config = SupportDiffConfig {
        new_root: fixtures_root().join("new"),
        old_root: fixtures_root().join("old"),
        old_label: "RHDH 1.7".to_string(),
        new_label: "RHDH 1.8".to_string(),
        output_path: output.path().join("support_tags_comparison.adoc"),
    };

    write_support_diff(&config).unwrap();

    let doc = fs::read_to_string(&config.output_path).unwrap();
    assert!(doc.contains("|Plugin Name |RHDH 1.7 Support Level |RHDH 1.8 Support Level"));
    assert!(doc.contains("|tekton |[.blue]#tech-preview# |[.green]#production#"));
    assert!(doc.contains("|topology |[.green]#production# |N/A"));
    assert!(doc.contains("|3scale-backend |community"));
    assert!(!doc.contains("tekton-common"));
}

#[test]
fn missing_new_tree_produces_empty_tables() {
    let output = TempDir::new().unwrap();
    let config = SupportDiffConfig {
        new_root: output.path().join("missing"),
        old_root: fixtures_root().join("old"),
        old_label: "RHDH 1.8".to_string(),
        new_label: "RHDH 1.9".to_string(),
        output_path: output.path().join("out.adoc"),
    };

    let comparison = write_support_diff(&config).unwrap();

    assert!(comparison.changed.is_empty());
    assert!(comparison.added.is_empty());
    assert!(config.output_path.exists());
}
