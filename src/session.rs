//! Project/resource-set selection state.
//!
//! A [`Session`] ties the pieces together: it remembers the opened project and
//! the selected resource set in [`Settings`], and owns the aggregated table of
//! the current selection. Every state change is an explicit call:
//!
//! ```rust,no_run
//! use resxscan::{Session, Settings};
//!
//! let mut session = Session::new(Settings::load(".settings")?);
//! session.set_project("path/to/MyApp")?;
//! session.rescan()?;
//! for value in session.table() {
//!     println!("{}: {:?}", value.key, value.default);
//! }
//! session.save(".settings")?;
//! # Ok::<(), resxscan::Error>(())
//! ```

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    aggregator::{LocalePolicy, aggregate},
    error::Error,
    scanner::{list_resource_sets, resources_dir},
    settings::Settings,
    types::LocalizationTable,
};

#[derive(Debug, Default)]
pub struct Session {
    settings: Settings,
    policy: LocalePolicy,
    resources_dir: Option<PathBuf>,
    resource_sets: Vec<String>,
    selected: Option<String>,
    table: LocalizationTable,
}

impl Session {
    /// Creates a session without opening anything yet.
    pub fn new(settings: Settings) -> Self {
        Session {
            settings,
            ..Default::default()
        }
    }

    pub fn with_locale_policy(mut self, policy: LocalePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Creates a session and reopens the project recorded in `settings`, if any.
    pub fn restore(settings: Settings, policy: LocalePolicy) -> Result<Self, Error> {
        let mut session = Session::new(settings).with_locale_policy(policy);
        if let Some(project) = session.settings.project.clone() {
            session.set_project(project)?;
            session.rescan()?;
        }
        Ok(session)
    }

    /// Opens `project`. Its `Resources` directory must exist.
    ///
    /// Clears the resource-set list, the selection and the table; call
    /// [`Session::rescan`] to populate them.
    pub fn set_project<P: AsRef<Path>>(&mut self, project: P) -> Result<(), Error> {
        let project = std::path::absolute(project.as_ref())?;
        let dir = resources_dir(&project)?;

        info!(project = %project.display(), "opened project");
        self.settings.set_project(project);
        self.resources_dir = Some(dir);
        self.resource_sets.clear();
        self.selected = None;
        self.table = LocalizationTable::new();
        Ok(())
    }

    /// Lists the project's resource sets and selects one of them.
    ///
    /// The remembered selection is reused and must still exist; without one the
    /// first set is selected.
    pub fn rescan(&mut self) -> Result<&[String], Error> {
        let dir = self.require_resources_dir()?.to_path_buf();
        self.resource_sets = list_resource_sets(&dir)?;

        let selection = match (&self.settings.dictionary, self.resource_sets.first()) {
            (_, None) => None,
            (Some(cached), Some(_)) => Some(
                self.resource_sets
                    .iter()
                    .find(|name| *name == cached)
                    .cloned()
                    .ok_or_else(|| {
                        Error::not_found(format!(
                            "resource set `{}` in {}",
                            cached,
                            dir.display()
                        ))
                    })?,
            ),
            (None, Some(first)) => Some(first.clone()),
        };

        match selection {
            Some(name) => {
                self.select(&name)?;
            }
            None => {
                self.selected = None;
                self.table = LocalizationTable::new();
            }
        }
        Ok(&self.resource_sets)
    }

    /// Aggregates the resource set `name` and makes it the selection.
    ///
    /// `name` must be one of the sets found by the last [`Session::rescan`].
    pub fn select(&mut self, name: &str) -> Result<&LocalizationTable, Error> {
        let dir = self.require_resources_dir()?;
        if !self.resource_sets.iter().any(|set| set == name) {
            return Err(Error::not_found(format!(
                "resource set `{}` in {}",
                name,
                dir.display()
            )));
        }
        let table = aggregate(dir, name, self.policy)?;

        self.settings.set_dictionary(name)?;
        self.selected = Some(name.to_string());
        self.table = table;
        Ok(&self.table)
    }

    /// Writes the settings to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        self.settings.save(path)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn resources_dir(&self) -> Option<&Path> {
        self.resources_dir.as_deref()
    }

    pub fn resource_sets(&self) -> &[String] {
        &self.resource_sets
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn table(&self) -> &LocalizationTable {
        &self.table
    }

    fn require_resources_dir(&self) -> Result<&Path, Error> {
        self.resources_dir
            .as_deref()
            .ok_or_else(|| Error::not_found("no project opened"))
    }
}
