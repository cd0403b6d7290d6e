//! End-to-end builds through `startup::run`.

use std::fs::{self, File};
use std::io::Read;

use compress::archive::{entries::archive_name, temp_path};
use compress::cli::Cli;
use compress::config::ConfigError;
use compress::lifecycle::startup;
use compress::Error;

mod common;

fn cli_for(path: std::path::PathBuf) -> Cli {
    Cli { config: Some(path), watch: false }
}

#[tokio::test]
async fn builds_gzip_tar_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = common::sample_tree(dir.path());
    let output = dir.path().join("out.tar.gz");
    let config = common::write_ini(dir.path(), &root.display().to_string(), &output, "tar.gz", 1);

    let report = startup::run(cli_for(config)).await.unwrap();
    assert_eq!(report.passes, 1);
    assert_eq!(report.entries, 4);

    let members = common::tar_members(flate2::read::GzDecoder::new(File::open(&output).unwrap()));
    let base = archive_name(&root).unwrap().to_string_lossy().into_owned();
    assert!(members.contains(&format!("{}/readme.txt", base)));
    assert!(members.contains(&format!("{}/nested/values.csv", base)));
}

#[tokio::test]
async fn gz_is_a_gzipped_tar() {
    let dir = tempfile::tempdir().unwrap();
    let root = common::sample_tree(dir.path());
    let input = root.join("readme.txt");
    let output = dir.path().join("single.gz");
    let config = common::write_ini(dir.path(), &input.display().to_string(), &output, "gz", 1);

    startup::run(cli_for(config)).await.unwrap();

    let members = common::tar_members(flate2::read::GzDecoder::new(File::open(&output).unwrap()));
    assert_eq!(members, vec![archive_name(&input).unwrap().to_string_lossy().into_owned()]);
}

#[tokio::test]
async fn level_three_nests_archive_twice() {
    let dir = tempfile::tempdir().unwrap();
    let root = common::sample_tree(dir.path());
    let output = dir.path().join("deep.tar.bz2");
    let config = common::write_ini(dir.path(), &root.display().to_string(), &output, "bz2", 3);

    let report = startup::run(cli_for(config)).await.unwrap();
    assert_eq!(report.passes, 3);
    assert!(!temp_path(&output).exists());

    let inner_name = archive_name(&output).unwrap();

    // Pass 3 wraps pass 2, which wraps pass 1.
    let mut outer = tar::Archive::new(bzip2::read::BzDecoder::new(File::open(&output).unwrap()));
    let mut level_two = Vec::new();
    {
        let mut entries = outer.entries().unwrap();
        let mut only = entries.next().unwrap().unwrap();
        assert_eq!(only.path().unwrap().into_owned(), inner_name);
        only.read_to_end(&mut level_two).unwrap();
        assert!(entries.next().is_none());
    }

    let mut middle = tar::Archive::new(bzip2::read::BzDecoder::new(level_two.as_slice()));
    let mut level_one = Vec::new();
    middle.entries().unwrap().next().unwrap().unwrap().read_to_end(&mut level_one).unwrap();

    let members = common::tar_members(bzip2::read::BzDecoder::new(level_one.as_slice()));
    assert_eq!(members.len(), 4);
}

#[tokio::test]
async fn zip_with_multiple_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let root = common::sample_tree(dir.path());
    let extra = dir.path().join("extra.log");
    fs::write(&extra, "log line").unwrap();
    let output = dir.path().join("bundle.zip");
    let inputs = format!("{} , {},", root.display(), extra.display());
    let config = common::write_ini(dir.path(), &inputs, &output, "zip", 2);

    startup::run(cli_for(config)).await.unwrap();

    let mut outer = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
    assert_eq!(outer.len(), 1);
    let mut inner_bytes = Vec::new();
    outer.by_index(0).unwrap().read_to_end(&mut inner_bytes).unwrap();

    let inner = zip::ZipArchive::new(std::io::Cursor::new(inner_bytes)).unwrap();
    // data/, data/nested/, two files under data, and extra.log.
    assert_eq!(inner.len(), 5);
}

#[tokio::test]
async fn xz_and_plain_tar_build() {
    for (kind, file) in [("xz", "out.tar.xz"), ("tar", "out.tar"), ("tgz", "out.tgz")] {
        let dir = tempfile::tempdir().unwrap();
        let root = common::sample_tree(dir.path());
        let output = dir.path().join(file);
        let config = common::write_ini(dir.path(), &root.display().to_string(), &output, kind, 1);

        let report = startup::run(cli_for(config)).await.unwrap();
        assert!(report.size_bytes > 0, "{} archive is empty", kind);
    }
}

#[tokio::test]
async fn invalid_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.rar");
    let config = common::write_ini(dir.path(), "a.txt", &output, "rar", 0);

    match startup::run(cli_for(config)).await {
        Err(Error::Config(ConfigError::Validation(errors))) => assert_eq!(errors.len(), 2),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn missing_input_fails_build() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.tar");
    let missing = dir.path().join("not-there.txt");
    let config = common::write_ini(dir.path(), &missing.display().to_string(), &output, "tar", 1);

    let err = startup::run(cli_for(config)).await.unwrap_err();
    assert!(matches!(err, Error::Archive(_)));
    assert!(!output.exists());
}
