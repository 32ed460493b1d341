//! Persistent session settings.
//!
//! Stored as plain text, one `key = value` pair per line:
//!
//! ```text
//! project = /home/me/src/MyApp
//! dictionary = Strings
//! ```

use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{error::Error, traits::Parser};

/// Default settings file, relative to the working directory.
pub const SETTINGS_FILE_NAME: &str = ".settings";

const PROJECT_KEY: &str = "project";
const DICTIONARY_KEY: &str = "dictionary";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Root directory of the last opened project.
    pub project: Option<PathBuf>,
    /// Base name of the last selected resource set.
    pub dictionary: Option<String>,
}

impl Settings {
    /// Loads settings from `path`. A missing file yields empty settings.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Self::read_from(path)
    }

    /// Overwrites `path` with the current settings.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        debug!(path = %path.as_ref().display(), "saving settings");
        self.write_to(path)
    }

    pub fn set_project(&mut self, project: impl Into<PathBuf>) {
        self.project = Some(project.into());
    }

    pub fn set_dictionary(&mut self, dictionary: &str) -> Result<(), Error> {
        validate_dictionary(dictionary)?;
        self.dictionary = Some(dictionary.to_string());
        Ok(())
    }
}

impl Parser for Settings {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut settings = Settings::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let (key, value) = trimmed.split_once('=').ok_or_else(|| {
                Error::parse_error(format!(
                    "settings line {}: expected `key = value`, found `{}`",
                    index + 1,
                    trimmed
                ))
            })?;
            let (key, value) = (key.trim(), value.trim());

            match key {
                PROJECT_KEY => {
                    settings.project = (!value.is_empty()).then(|| PathBuf::from(value));
                }
                DICTIONARY_KEY => {
                    settings.dictionary = if value.is_empty() {
                        None
                    } else {
                        validate_dictionary(value)?;
                        Some(value.to_string())
                    };
                }
                _ => warn!(key, line = index + 1, "ignoring unknown settings key"),
            }
        }

        Ok(settings)
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        if let Some(project) = &self.project {
            writeln!(writer, "{} = {}", PROJECT_KEY, project.display())?;
        }
        if let Some(dictionary) = &self.dictionary {
            writeln!(writer, "{} = {}", DICTIONARY_KEY, dictionary)?;
        }
        Ok(())
    }
}

fn validate_dictionary(name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::InvalidSettings(
            "resource set name must not be empty".to_string(),
        ));
    }
    if name.contains(['/', '\\']) || name.contains('\n') {
        return Err(Error::InvalidSettings(format!(
            "resource set name `{}` must be a plain file base name",
            name
        )));
    }
    Ok(())
}
