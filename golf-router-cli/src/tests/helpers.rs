//! Test helpers for writing location datasets to a temporary workspace.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const STATIONS_CSV: &str = "\
station_code,station_name,station_lat,station_lon
1130101,Tokyo,35.6814,139.7661
1141101,Nagoya,35.1709,136.8816
1160214,Shin-Osaka,34.7228,135.4961
1130103,Shinagawa,35.6285,139.7387
";

pub(super) const GOLF_COURSES_CSV: &str = "\
id,golfCourseName,latitude,longitude
1,Tokyo Golf Club,35.6895,139.6917
42,Kobe Golf Club,34.7774,135.2105
";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary directory holding the station and golf course datasets.
#[derive(Debug)]
pub(super) struct Datasets {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Datasets {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        write_utf8(&root.join("stations.csv"), STATIONS_CSV.as_bytes());
        write_utf8(&root.join("golf_courses.csv"), GOLF_COURSES_CSV.as_bytes());
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn stations(&self) -> Utf8PathBuf {
        self.root.join("stations.csv")
    }

    pub(super) fn golf_courses(&self) -> Utf8PathBuf {
        self.root.join("golf_courses.csv")
    }
}
