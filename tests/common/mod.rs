//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Write an INI config for the given values and return its path.
pub fn write_ini(dir: &Path, inputs: &str, output: &Path, archive_type: &str, level: i64) -> PathBuf {
    let path = dir.join("config.ini");
    fs::write(
        &path,
        format!(
            "[app]\ninput_files = {}\noutput_file = {}\narchive_type = {}\ncompress_level = {}\n",
            inputs,
            output.display(),
            archive_type,
            level
        ),
    )
    .unwrap();
    path
}

/// Create `dir/data` with two files and a subdirectory.
pub fn sample_tree(dir: &Path) -> PathBuf {
    let root = dir.join("data");
    fs::create_dir_all(root.join("nested")).unwrap();
    fs::write(root.join("readme.txt"), "top level file").unwrap();
    fs::write(root.join("nested/values.csv"), "a,b,c\n1,2,3\n").unwrap();
    root
}

/// Every path in a tar stream, without trailing slashes.
#[allow(dead_code)]
pub fn tar_members<R: std::io::Read>(reader: R) -> Vec<String> {
    let mut archive = tar::Archive::new(reader);
    archive
        .entries()
        .unwrap()
        .map(|e| {
            let entry = e.unwrap();
            let path = entry.path().unwrap().to_string_lossy().into_owned();
            path.trim_end_matches('/').to_string()
        })
        .collect()
}
