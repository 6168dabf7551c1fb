//! Dataset loading integration tests: match cache and pose join.

mod common;

use std::fs;

use common::DatasetFixture;
use kala_align::config::DatasetSection;
use kala_align::{AssociationConfig, Error, associate_cached, load_dataset, read_matches};

fn tolerance(ns: u64) -> AssociationConfig {
    AssociationConfig::new(0, ns)
}

#[test]
fn test_load_dataset_writes_cache() {
    let fixture = DatasetFixture::new(&[100, 200, 300], &[101, 199, 500]);

    let aligned =
        load_dataset(fixture.dir(), &DatasetSection::default(), &tolerance(5), false).unwrap();

    assert_eq!(aligned.t_es, vec![100, 200]);
    assert_eq!(aligned.t_gt, vec![101, 199]);
    assert_eq!(aligned.q_gt, vec![[0.0, 0.0, 0.0, 1.0]; 2]);

    let cached = fs::read_to_string(fixture.matches_path()).unwrap();
    assert_eq!(cached, "timestamp_es,timestamp_gt\n100,101\n200,199\n");
}

#[test]
fn test_cache_reused_after_series_change() {
    let fixture = DatasetFixture::new(&[100, 200, 300], &[101, 199, 500]);
    let files = DatasetSection::default();

    load_dataset(fixture.dir(), &files, &tolerance(5), false).unwrap();
    let first = read_matches(fixture.matches_path()).unwrap();

    // Ground truth now also covers 300, but the cache wins.
    fixture.write_ground_truth(&[101, 199, 300, 500]);
    let aligned = load_dataset(fixture.dir(), &files, &tolerance(5), false).unwrap();

    assert_eq!(read_matches(fixture.matches_path()).unwrap(), first);
    assert_eq!(aligned.t_es, vec![100, 200]);
}

#[test]
fn test_rematch_overwrites_cache() {
    let fixture = DatasetFixture::new(&[100, 200, 300], &[101, 199, 500]);
    let files = DatasetSection::default();

    load_dataset(fixture.dir(), &files, &tolerance(5), false).unwrap();
    fixture.write_ground_truth(&[101, 199, 300, 500]);

    let aligned = load_dataset(fixture.dir(), &files, &tolerance(5), true).unwrap();
    assert_eq!(aligned.t_es, vec![100, 200, 300]);
    assert_eq!(read_matches(fixture.matches_path()).unwrap().len(), 3);
}

#[test]
fn test_associate_cached_ignores_parameters_when_cached() {
    let fixture = DatasetFixture::empty();
    let path = fixture.matches_path();

    let first = associate_cached(&[50], &[60], &AssociationConfig::new(10, 0), &path, false).unwrap();
    assert_eq!(first.len(), 1);

    // Different offset, but the cached result is returned verbatim.
    let second = associate_cached(&[50], &[60], &AssociationConfig::new(0, 0), &path, false).unwrap();
    assert_eq!(second, first);

    let forced = associate_cached(&[50], &[60], &AssociationConfig::new(0, 0), &path, true).unwrap();
    assert!(forced.is_empty());
}

#[test]
fn test_failed_cache_write_is_not_reused() {
    let fixture = DatasetFixture::empty();
    let path = fixture.matches_path();
    let config = tolerance(5);

    // The cache path is occupied by a directory, so the rename cannot land.
    fs::create_dir(&path).unwrap();
    let err = associate_cached(&[100, 200], &[101, 199], &config, &path, true).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    fs::remove_dir(&path).unwrap();

    // Nothing partial was left behind, so the next run recomputes in full.
    assert!(!path.exists());
    let matches = associate_cached(&[100, 200], &[101, 199], &config, &path, false).unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(read_matches(&path).unwrap(), matches);
}

#[test]
fn test_missing_ground_truth_fails_before_matching() {
    let fixture = DatasetFixture::empty();
    fixture.write_estimate(&[100]);

    let err = load_dataset(fixture.dir(), &DatasetSection::default(), &tolerance(5), false)
        .unwrap_err();

    match err {
        Error::NotFound(path) => assert!(path.ends_with("traj_gt.csv")),
        other => panic!("expected NotFound, got {other}"),
    }
    assert!(!fixture.matches_path().exists());
}

#[test]
fn test_malformed_cache() {
    let fixture = DatasetFixture::new(&[100], &[100]);
    fs::write(fixture.matches_path(), "timestamp_es,timestamp_gt\n100\n").unwrap();

    let err = load_dataset(fixture.dir(), &DatasetSection::default(), &tolerance(5), false)
        .unwrap_err();
    assert!(matches!(err, Error::Parse { line: 2, .. }));

    // Forcing a rematch recovers.
    let aligned =
        load_dataset(fixture.dir(), &DatasetSection::default(), &tolerance(5), true).unwrap();
    assert_eq!(aligned.len(), 1);
}

#[test]
fn test_no_matches_is_not_an_error() {
    let fixture = DatasetFixture::new(&[0, 1_000], &[10_000, 20_000]);

    let aligned =
        load_dataset(fixture.dir(), &DatasetSection::default(), &tolerance(5), false).unwrap();

    assert!(aligned.is_empty());
    assert!(read_matches(fixture.matches_path()).unwrap().is_empty());
}

#[test]
fn test_custom_file_names() {
    let fixture = DatasetFixture::empty();
    fs::write(fixture.path("est.csv"), common::estimate_csv(&[1, 2])).unwrap();
    fs::write(fixture.path("gt.csv"), common::ground_truth_csv(&[1, 2])).unwrap();

    let files = DatasetSection {
        gt_file: "gt.csv".to_string(),
        es_file: "est.csv".to_string(),
        matches_file: "pairs.csv".to_string(),
    };
    let aligned = load_dataset(fixture.dir(), &files, &tolerance(0), false).unwrap();

    assert_eq!(aligned.len(), 2);
    assert!(fixture.path("pairs.csv").exists());
}
