#![forbid(unsafe_code)]
//! Scan `.resx` resource sets and merge their translations across locale variants.
//!
//! A project keeps its resource files in a `Resources` directory. Files sharing
//! a base name form a resource set: `Strings.resx` holds the culture-neutral
//! values, `Strings.de-DE.resx`, `Strings.fr.resx`, ... hold translations.
//! This crate lists the sets, extracts `<data name=...><value>...</value></data>`
//! pairs from each file, and merges them into one [`LocalizationTable`] keyed by
//! resource name.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resxscan::{LocalePolicy, aggregate, list_resource_sets, resources_dir};
//!
//! let dir = resources_dir("path/to/MyApp")?;
//! for name in list_resource_sets(&dir)? {
//!     let table = aggregate(&dir, &name, LocalePolicy::Strict)?;
//!     println!("{}: {} keys, locales {:?}", name, table.len(), table.locales());
//! }
//! # Ok::<(), resxscan::Error>(())
//! ```

pub mod aggregator;
pub mod error;
pub mod export;
pub mod locales;
pub mod parser;
pub mod scanner;
pub mod session;
pub mod settings;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    aggregator::{LocaleFile, LocalePolicy, ResourceSet, aggregate},
    error::Error,
    export::ExportFormat,
    parser::ResxDocument,
    scanner::{list_resource_sets, resources_dir},
    session::Session,
    settings::Settings,
    types::{LocalizationTable, LocalizedValue},
};
