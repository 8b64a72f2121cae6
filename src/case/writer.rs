use std::fs;
use std::path::{Path, PathBuf};

use crate::config::INDEX_PLACEHOLDER;
use crate::error::{GenError, Result};

/// Paths of one written test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasePaths {
    pub test: PathBuf,
    pub answer: PathBuf,
}

/// Writes test/answer file pairs into an output directory
#[derive(Debug, Clone)]
pub struct CaseWriter {
    output_dir: PathBuf,
    test_template: String,
    answer_template: String,
}

impl CaseWriter {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        test_template: impl Into<String>,
        answer_template: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            test_template: test_template.into(),
            answer_template: answer_template.into(),
        }
    }

    /// File paths for the given 1-based case index
    pub fn paths(&self, case_index: usize) -> CasePaths {
        CasePaths {
            test: self.output_dir.join(fill_template(&self.test_template, case_index)),
            answer: self
                .output_dir
                .join(fill_template(&self.answer_template, case_index)),
        }
    }

    /// Create or overwrite both files of a case. The test file is written
    /// first; an error on the answer file leaves it in place.
    pub fn persist(&self, test_text: &str, answer_text: &str, case_index: usize) -> Result<CasePaths> {
        let paths = self.paths(case_index);
        write_file(&paths.test, test_text)?;
        write_file(&paths.answer, answer_text)?;
        Ok(paths)
    }
}

fn fill_template(template: &str, case_index: usize) -> String {
    template.replace(INDEX_PLACEHOLDER, &case_index.to_string())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| GenError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn writer(dir: &Path) -> CaseWriter {
        CaseWriter::new(dir, "naive{index}.dat", "naive{index}.dat.ans")
    }

    #[test]
    fn test_persist_creates_pair() {
        let dir = tempdir().unwrap();
        let paths = writer(dir.path()).persist("1 2 3", "", 1).unwrap();

        assert_eq!(paths.test, dir.path().join("naive1.dat"));
        assert_eq!(paths.answer, dir.path().join("naive1.dat.ans"));

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["naive1.dat", "naive1.dat.ans"]);

        assert_eq!(fs::read_to_string(&paths.test).unwrap(), "1 2 3");
        assert_eq!(fs::read_to_string(&paths.answer).unwrap(), "");
    }

    #[test]
    fn test_persist_overwrites() {
        let dir = tempdir().unwrap();
        let w = writer(dir.path());
        w.persist("old contents", "old", 3).unwrap();
        let paths = w.persist("new", "", 3).unwrap();

        assert_eq!(fs::read_to_string(&paths.test).unwrap(), "new");
        assert_eq!(fs::read_to_string(&paths.answer).unwrap(), "");
    }

    #[test]
    fn test_custom_template() {
        let w = CaseWriter::new("out", "case_{index}.txt", "case_{index}.ans");
        let paths = w.paths(12);
        assert_eq!(paths.test, PathBuf::from("out").join("case_12.txt"));
        assert_eq!(paths.answer, PathBuf::from("out").join("case_12.ans"));
    }

    #[test]
    fn test_missing_directory_is_filesystem_error() {
        let dir = tempdir().unwrap();
        let w = writer(&dir.path().join("does").join("not").join("exist"));
        match w.persist("x", "", 1) {
            Err(GenError::Filesystem { path, .. }) => {
                assert!(path.ends_with("naive1.dat"));
            }
            other => panic!("expected Filesystem error, got {:?}", other),
        }
    }
}
