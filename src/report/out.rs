// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Persistence of [`TestSuite`] documents as `TEST-*.xml` files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::error::{ConfigError, WriteError};

use super::suite::TestSuite;

/// Validated directory the report files are written into.
#[derive(Clone, Debug)]
pub struct ReportDir {
    /// Path of the directory.
    dir: PathBuf,
}

impl ReportDir {
    /// Creates a new [`ReportDir`] at the given `dir` path.
    ///
    /// # Errors
    ///
    /// If `dir` doesn't exist or is not a directory. The check is eager: it
    /// happens here, once, before any event is processed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(ConfigError::NotADirectory { path: dir });
        }
        Ok(Self { dir })
    }

    /// Returns the report file path for a feature loaded from the given
    /// `feature_path`: its file stem prefixed with `TEST-` and given an
    /// `.xml` extension, joined under this [`ReportDir`].
    #[must_use]
    pub fn report_path(&self, feature_path: &Path) -> PathBuf {
        let stem = feature_path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        self.dir.join(format!("TEST-{stem}.xml"))
    }

    /// Writes the given `suite` as the report of a feature loaded from
    /// `feature_path`, overwriting any existing file of the same name.
    ///
    /// Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// If the file cannot be created or the document cannot be serialized.
    pub fn write(
        &self,
        suite: &TestSuite,
        feature_path: &Path,
    ) -> Result<PathBuf, WriteError> {
        let path = self.report_path(feature_path);
        let file = fs::File::create(&path)?;
        suite.write_xml(io::BufWriter::new(file))?;
        tracing::debug!(
            report = %path.display(),
            tests = suite.tests,
            failures = suite.failures,
            "wrote JUnit XML report"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn empty_suite(name: &str) -> TestSuite {
        TestSuite {
            name: name.into(),
            tests: 0,
            failures: 0,
            errors: 0,
            time: Duration::ZERO,
            cases: vec![],
        }
    }

    #[test]
    fn rejects_missing_directory() {
        let err = ReportDir::new("no/such/directory").unwrap_err();

        assert!(matches!(err, ConfigError::NotADirectory { .. }));
    }

    #[test]
    fn rejects_regular_file_as_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("report.txt");
        fs::write(&file, "not a directory").unwrap();

        let err = ReportDir::new(&file).unwrap_err();

        assert!(matches!(err, ConfigError::NotADirectory { .. }));
    }

    #[test]
    fn derives_report_filename_from_feature_stem() {
        let dir = tempfile::tempdir().unwrap();
        let reports = ReportDir::new(dir.path()).unwrap();

        let path = reports.report_path(Path::new("features/checkout.feature"));

        assert_eq!(path, dir.path().join("TEST-checkout.xml"));
    }

    #[test]
    fn writes_and_overwrites_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let reports = ReportDir::new(dir.path()).unwrap();
        let feature = Path::new("features/checkout.feature");

        let first = reports.write(&empty_suite("First"), feature).unwrap();
        let second = reports.write(&empty_suite("Second"), feature).unwrap();

        assert_eq!(first, second);
        let contents = fs::read_to_string(second).unwrap();
        assert!(contents.contains("name=\"Second\""));
        assert!(!contents.contains("name=\"First\""));
    }
}
