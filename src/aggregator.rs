//! Merging a resource set's default file and its locale variants into one table.
//!
//! The default file is read first, then every variant ordered by increasing
//! file-name length (`Strings.de.resx` before `Strings.de-DE.resx`), ties
//! broken by name. Each pass upserts into the same [`LocalizationTable`].

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    error::Error,
    locales::{canonical_locale, looks_like_locale, normalize_dynamic_locale},
    parser::ResxDocument,
    scanner::{RESOURCE_EXTENSION, resource_file_stems},
    traits::Parser,
    types::LocalizationTable,
};

/// How locale identifiers missing from the locale table are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalePolicy {
    /// Fail with [`Error::UnsupportedLocale`].
    #[default]
    Strict,
    /// Store translations under the normalized identifier, as long as it is a
    /// well-formed language identifier.
    Permissive,
}

/// A locale variant file of a resource set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    /// Locale identifier as spelled in the file name.
    pub locale: String,
    pub path: PathBuf,
}

/// The files making up one resource set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSet {
    pub name: String,
    pub default_file: PathBuf,
    /// Variants in processing order.
    pub variants: Vec<LocaleFile>,
}

impl ResourceSet {
    /// Finds the default file and all locale variants of `name` inside `dir`.
    pub fn locate<P: AsRef<Path>>(dir: P, name: &str) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let default_file = dir.join(format!("{}.{}", name, RESOURCE_EXTENSION));
        if !default_file.is_file() {
            return Err(Error::not_found(format!(
                "default resource file {}",
                default_file.display()
            )));
        }

        let prefix = format!("{}.", name);
        let mut variants: Vec<LocaleFile> = resource_file_stems(dir)?
            .into_iter()
            .filter_map(|stem| {
                let locale = stem.strip_prefix(&prefix)?;
                // Deeper names such as `Strings.Errors.de-DE` belong to another set,
                // and so does `Strings.Errors` itself.
                if locale.is_empty() || locale.contains('.') || !looks_like_locale(locale) {
                    return None;
                }
                Some(LocaleFile {
                    locale: locale.to_string(),
                    path: dir.join(format!("{}.{}", stem, RESOURCE_EXTENSION)),
                })
            })
            .collect();

        variants.sort_by(|a, b| {
            file_name_len(&a.path)
                .cmp(&file_name_len(&b.path))
                .then_with(|| a.path.cmp(&b.path))
        });

        Ok(ResourceSet {
            name: name.to_string(),
            default_file,
            variants,
        })
    }

    /// Parses every file of the set and merges the results.
    pub fn aggregate(&self, policy: LocalePolicy) -> Result<LocalizationTable, Error> {
        let mut table = LocalizationTable::new();

        let document = ResxDocument::read_from(&self.default_file)?;
        debug!(file = %self.default_file.display(), pairs = document.pairs.len(), "parsed default file");
        for (key, value) in document.pairs {
            table.upsert(&key, None, value);
        }

        for variant in &self.variants {
            let locale = resolve_locale(&variant.locale, policy).ok_or_else(|| {
                Error::UnsupportedLocale {
                    locale: variant.locale.clone(),
                    file: variant.path.clone(),
                }
            })?;

            let document = ResxDocument::read_from(&variant.path)?;
            debug!(file = %variant.path.display(), %locale, pairs = document.pairs.len(), "parsed locale file");
            for (key, value) in document.pairs {
                table.upsert(&key, Some(locale.as_str()), value);
            }
        }

        info!(
            set = %self.name,
            keys = table.len(),
            locales = self.variants.len(),
            "aggregated resource set"
        );
        Ok(table)
    }
}

/// Builds the merged table for the resource set `name` in `dir`.
pub fn aggregate<P: AsRef<Path>>(
    dir: P,
    name: &str,
    policy: LocalePolicy,
) -> Result<LocalizationTable, Error> {
    ResourceSet::locate(dir, name)?.aggregate(policy)
}

/// Maps a file-name locale to the key its translations are stored under.
fn resolve_locale(locale: &str, policy: LocalePolicy) -> Option<String> {
    if let Some(known) = canonical_locale(locale) {
        return Some(known.to_string());
    }
    match policy {
        LocalePolicy::Strict => None,
        LocalePolicy::Permissive => normalize_dynamic_locale(locale),
    }
}

fn file_name_len(path: &Path) -> usize {
    path.file_name().map_or(0, |name| name.len())
}
