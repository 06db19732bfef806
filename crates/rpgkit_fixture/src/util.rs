use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};

use crate::spec::FixtureError;

////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

#[derive(Debug, Clone, Default)]
pub(crate) struct SpecFilePatterns {
    pub(crate) patterns_include: Option<Vec<GlobMatcher>>,
    pub(crate) patterns_exclude: Option<Vec<GlobMatcher>>,
}

impl SpecFilePatterns {
    pub(crate) fn from_raw(
        patterns_include: Option<&[String]>,
        patterns_exclude: Option<&[String]>,
    ) -> Result<Self, FixtureError> {
        Ok(Self {
            patterns_include: _compile(patterns_include)?,
            patterns_exclude: _compile(patterns_exclude)?,
        })
    }

    /// Include list must match (when present) and exclude list must not.
    pub(crate) fn is_selected(&self, name: &str) -> bool {
        let if_included = match &self.patterns_include {
            None => true,
            Some(l_glob) => l_glob.iter().any(|p| p.is_match(name)),
        };
        let if_excluded = match &self.patterns_exclude {
            None => false,
            Some(l_glob) => l_glob.iter().any(|p| p.is_match(name)),
        };
        if_included && !if_excluded
    }
}

fn _compile(patterns: Option<&[String]>) -> Result<Option<Vec<GlobMatcher>>, FixtureError> {
    let Some(patterns) = patterns else {
        return Ok(None);
    };
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut l_glob = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let matcher = Glob::new(pattern)
            .map_err(|e| FixtureError::InvalidPattern(format!("{pattern:?}: {e}")))?
            .compile_matcher();
        l_glob.push(matcher);
    }
    Ok(Some(l_glob))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PathUtilities

/// Regular files directly inside `dir`, sorted by file name.
///
/// Entries whose name is not valid UTF-8 are returned with a lossy name.
pub(crate) fn list_dir_files(dir: &Path) -> Result<Vec<(PathBuf, String)>, FixtureError> {
    if !dir.is_dir() {
        if dir.exists() {
            return Err(FixtureError::NotDirectory(dir.to_path_buf()));
        }
        return Err(FixtureError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "directory does not exist"),
        ));
    }

    let mut l_entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| FixtureError::io(dir, e))? {
        let entry = entry.map_err(|e| FixtureError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().to_string();
        l_entries.push((entry.path(), name));
    }
    l_entries.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(l_entries)
}

/// Ensure `dir` exists as a directory, creating it when `if_create` is set.
pub(crate) fn prepare_output_dir(dir: &Path, if_create: bool) -> Result<(), FixtureError> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(FixtureError::NotDirectory(dir.to_path_buf()));
    }
    if if_create {
        return fs::create_dir_all(dir).map_err(|e| FixtureError::io(dir, e));
    }
    Err(FixtureError::io(
        dir,
        std::io::Error::new(std::io::ErrorKind::NotFound, "directory does not exist"),
    ))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn to_strings(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_patterns_are_case_sensitive_suffix_matches() {
        let include = to_strings(&["*.xlsx"]);
        let pats = SpecFilePatterns::from_raw(Some(include.as_slice()), None).expect("compile");
        assert!(pats.is_selected("characters.xlsx"));
        assert!(!pats.is_selected("CHARACTERS.XLSX"));
        assert!(!pats.is_selected("notes.xlsx.bak"));
        assert!(!pats.is_selected("readme.txt"));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let include = to_strings(&["*.xlsx"]);
        let exclude = to_strings(&["~$*"]);
        let pats =
            SpecFilePatterns::from_raw(Some(include.as_slice()), Some(exclude.as_slice()))
                .expect("compile");
        assert!(pats.is_selected("items.xlsx"));
        assert!(!pats.is_selected("~$items.xlsx"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let include = to_strings(&["[unclosed"]);
        assert!(matches!(
            SpecFilePatterns::from_raw(Some(include.as_slice()), None),
            Err(FixtureError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_prepare_output_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path_nested = dir.path().join("a").join("b");
        assert!(prepare_output_dir(&path_nested, false).is_err());
        prepare_output_dir(&path_nested, true).expect("create");
        assert!(path_nested.is_dir());

        let path_file = dir.path().join("file.txt");
        std::fs::write(&path_file, "x").expect("write");
        assert!(matches!(
            prepare_output_dir(&path_file, true),
            Err(FixtureError::NotDirectory(_))
        ));
    }
}
