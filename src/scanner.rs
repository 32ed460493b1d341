//! Discovery of resource sets inside a project's `Resources` directory.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{error::Error, locales::is_known_locale};

/// Name of the directory under the project root that holds the resource files.
pub const RESOURCES_DIR_NAME: &str = "Resources";

/// Extension shared by all resource files, without the leading dot.
pub const RESOURCE_EXTENSION: &str = "resx";

/// Returns `<project>/Resources`, failing when the directory does not exist.
pub fn resources_dir<P: AsRef<Path>>(project: P) -> Result<PathBuf, Error> {
    let dir = project.as_ref().join(RESOURCES_DIR_NAME);
    if dir.is_dir() {
        Ok(dir)
    } else {
        Err(Error::not_found(format!(
            "{} directory in {}",
            RESOURCES_DIR_NAME,
            project.as_ref().display()
        )))
    }
}

/// Lists the base names of all resource sets in `dir`, sorted alphabetically.
///
/// Files whose stem ends in a known locale segment (`Strings.de-DE.resx`) are
/// variants of another set and are left out.
pub fn list_resource_sets<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, Error> {
    let dir = dir.as_ref();
    let mut names = BTreeSet::new();

    for stem in resource_file_stems(dir)? {
        if let Some(locale) = locale_suffix(&stem) {
            debug!(file = %stem, locale, "skipping locale variant");
            continue;
        }
        names.insert(stem);
    }

    info!(dir = %dir.display(), count = names.len(), "scanned resource sets");
    Ok(names.into_iter().collect())
}

/// Stems (file names without `.resx`) of all resource files directly inside `dir`.
pub(crate) fn resource_file_stems(dir: &Path) -> Result<Vec<String>, Error> {
    let mut stems = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some(RESOURCE_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            stems.push(stem.to_string());
        }
    }
    Ok(stems)
}

/// Returns the trailing locale segment of a file stem, if it is a known locale.
fn locale_suffix(stem: &str) -> Option<&str> {
    let (_, suffix) = stem.rsplit_once('.')?;
    is_known_locale(suffix).then_some(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "<root/>").unwrap();
    }

    #[test]
    fn test_variant_is_excluded() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "Strings.resx");
        touch(temp_dir.path(), "Strings.de-DE.resx");

        let sets = list_resource_sets(temp_dir.path()).unwrap();
        assert_eq!(sets, vec!["Strings"]);
    }

    #[test]
    fn test_sets_are_sorted_and_other_files_ignored() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "Menu.resx");
        touch(temp_dir.path(), "Errors.resx");
        touch(temp_dir.path(), "Errors.fr.resx");
        touch(temp_dir.path(), "Errors.ja-JP.resx");
        touch(temp_dir.path(), "Readme.txt");
        touch(temp_dir.path(), "Designer.cs");
        fs::create_dir(temp_dir.path().join("Nested.resx")).unwrap();

        let sets = list_resource_sets(temp_dir.path()).unwrap();
        assert_eq!(sets, vec!["Errors", "Menu"]);
    }

    #[test]
    fn test_locale_suffix_needs_dot_separator() {
        // "Code" ends in "de" but is not a variant of anything.
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "Code.resx");
        touch(temp_dir.path(), "Strings.xx-XX.resx");

        let sets = list_resource_sets(temp_dir.path()).unwrap();
        assert_eq!(sets, vec!["Code", "Strings.xx-XX"]);
    }

    #[test]
    fn test_locale_suffix_is_case_insensitive() {
        assert_eq!(locale_suffix("Strings.de-de"), Some("de-de"));
        assert_eq!(locale_suffix("Strings.Errors"), None);
        assert_eq!(locale_suffix("Strings"), None);
    }

    #[test]
    fn test_resources_dir_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = resources_dir(temp_dir.path());
        assert!(matches!(result, Err(Error::NotFound(_))));

        fs::create_dir(temp_dir.path().join(RESOURCES_DIR_NAME)).unwrap();
        let dir = resources_dir(temp_dir.path()).unwrap();
        assert!(dir.ends_with(RESOURCES_DIR_NAME));
    }
}
