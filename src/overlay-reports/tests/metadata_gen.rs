use std::fs;
use std::path::PathBuf;

use overlay_reports::{generate_metadata, GeneratorConfig, GeneratorError};
use tempfile::TempDir;

fn input_list() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/downstream-plugins")
}

#[test]
fn generates_one_file_per_entry() {
    let output = TempDir::new().unwrap();
    let root = output.path().join("workspaces");
    let config = GeneratorConfig {
        input: input_list(),
        overlay_root: root.clone(),
        ..GeneratorConfig::default()
    };

    let written = generate_metadata(&config).unwrap();

    assert_eq!(
        written,
        vec![
            root.join("backstage/kubernetes/metadata.yaml"),
            root.join("backstage/scaffolder-backend-module-gitlab/metadata.yaml"),
            root.join("3scale/metadata.yaml"),
            root.join("tekton/metadata.yaml"),
        ]
    );

    let gitlab = fs::read_to_string(&written[1]).unwrap();
    assert!(gitlab.contains("type: backstage-backend-plugin-module"));
    assert!(gitlab.contains("/tree/main/workspaces/backstage/scaffolder-backend-module-gitlab\n"));

    let tekton = fs::read_to_string(&written[3]).unwrap();
    assert!(tekton.contains("name: rhdh-plugin-tekton\n"));
    assert!(tekton.contains("type: backstage-plugin\n"));
}

#[test]
fn missing_list_is_reported() {
    let output = TempDir::new().unwrap();
    let config = GeneratorConfig {
        input: output.path().join("downstream-plugins"),
        overlay_root: output.path().join("workspaces"),
        ..GeneratorConfig::default()
    };

    assert!(matches!(
        generate_metadata(&config),
        Err(GeneratorError::MissingInput { .. })
    ));
}
