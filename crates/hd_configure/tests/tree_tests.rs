// crates/hd_configure/tests/tree_tests.rs

//! HYDRAD 目录树写出测试

mod common;

use common::{fixed_date, full_config, minimal_config};
use hd_config::ConfigError;
use hd_configure::{Artifact, Configure, HydradTree};

#[test]
fn test_write_full_tree() {
    let dir = tempfile::tempdir().unwrap();
    let tree = HydradTree::new(dir.path());
    let configure = Configure::with_date(full_config(), fixed_date());

    let written = tree.write(&configure).unwrap();
    assert_eq!(written.len(), Artifact::ALL.len());

    for artifact in Artifact::ALL {
        let path = tree.path_of(artifact);
        assert!(written.contains(&path), "{artifact} 未写出");
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(Some(content), configure.render(artifact).unwrap());
    }
    assert!(dir.path().join("HYDRAD/source/collisions.h").is_file());
    assert!(dir.path().join("poly_fit.gravity").is_file());
}

#[test]
fn test_optional_artifacts_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let tree = HydradTree::new(dir.path());
    let mut config = full_config();
    config.general.poly_fit_gravity = None;
    config.general.poly_fit_magnetic_field = None;

    let written = tree.write(&Configure::with_date(config, fixed_date())).unwrap();
    assert_eq!(written.len(), Artifact::ALL.len() - 2);
    assert!(!tree.path_of(Artifact::PolyFitGravity).exists());
    assert!(!tree.path_of(Artifact::PolyFitMagneticField).exists());
}

#[test]
fn test_render_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let tree = HydradTree::new(dir.path().join("hydrad"));

    let err = tree
        .write(&Configure::with_date(minimal_config(), fixed_date()))
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingOption { .. }));
    assert!(!tree.root().exists());
}

#[test]
fn test_live_date_shared_across_tree() {
    let configure = Configure::new(full_config(), false);
    let rendered = HydradTree::render_all(&configure).unwrap();
    let dates: Vec<_> = rendered
        .iter()
        .map(|(_, text)| {
            let start = text.find("hydrad_tools on ").unwrap() + "hydrad_tools on ".len();
            text[start..start + "2024-01-02_03.04.05 UTC".len()].to_string()
        })
        .collect();
    assert!(dates.windows(2).all(|w| w[0] == w[1]));
}
