mod export;
mod logging;
mod view;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use resxscan::{ExportFormat, LocalePolicy, Session, Settings, settings::SETTINGS_FILE_NAME};

use crate::export::{parse_export_format, run_export_command};
use crate::view::{print_sets, print_table};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file remembering the last project and resource set
    #[arg(long, global = true, default_value = SETTINGS_FILE_NAME)]
    settings: PathBuf,

    /// Accept locale suffixes missing from the built-in culture table
    #[arg(long, global = true)]
    permissive: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the resource sets of a project.
    Sets {
        /// Project root (defaults to the remembered project)
        #[arg(short, long)]
        project: Option<PathBuf>,
    },

    /// Show the merged translations of a resource set.
    Show {
        /// Project root (defaults to the remembered project)
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Resource set base name (defaults to the remembered selection)
        #[arg(short, long)]
        set: Option<String>,

        /// Display full values without truncation
        #[arg(long)]
        full: bool,
    },

    /// Export the merged translations of a resource set.
    Export {
        /// Project root (defaults to the remembered project)
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Resource set base name (defaults to the remembered selection)
        #[arg(short, long)]
        set: Option<String>,

        /// Output format: csv, json or resx
        #[arg(short, long, value_parser = parse_export_format)]
        format: ExportFormat,

        /// Locale column to write as resx (default values when omitted)
        #[arg(short, long)]
        lang: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Open a project and remember it.
    Open {
        /// Project root containing a Resources directory
        project: PathBuf,
    },

    /// Select a resource set of the remembered project and remember it.
    Select {
        /// Resource set base name
        set: String,
    },
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let policy = if args.permissive {
        LocalePolicy::Permissive
    } else {
        LocalePolicy::Strict
    };
    let settings_path = args.settings;

    match args.commands {
        Commands::Sets { project } => {
            let session = open_session(&settings_path, policy, project, None)?;
            print_sets(&session);
        }
        Commands::Show { project, set, full } => {
            let session = open_session(&settings_path, policy, project, set)?;
            print_table(&session, full);
        }
        Commands::Export {
            project,
            set,
            format,
            lang,
            output,
        } => {
            let session = open_session(&settings_path, policy, project, set)?;
            run_export_command(&session, format, lang, output)?;
        }
        Commands::Open { project } => {
            let session = open_session(&settings_path, policy, Some(project), None)?;
            save_session(&session, &settings_path)?;
            print_sets(&session);
        }
        Commands::Select { set } => {
            let session = open_session(&settings_path, policy, None, Some(set))?;
            save_session(&session, &settings_path)?;
            print_sets(&session);
        }
    }

    Ok(())
}

/// Load the settings, apply the command-line overrides and scan the project.
fn open_session(
    settings_path: &Path,
    policy: LocalePolicy,
    project: Option<PathBuf>,
    set: Option<String>,
) -> Result<Session, String> {
    let mut settings = Settings::load(settings_path)
        .map_err(|e| format!("Error reading {}: {}", settings_path.display(), e))?;

    if let Some(project) = project {
        let project = std::path::absolute(&project)
            .map_err(|e| format!("Invalid project path {}: {}", project.display(), e))?;
        // A selection remembered for another project does not apply here.
        if settings.project.as_ref() != Some(&project) {
            settings.dictionary = None;
        }
        settings.set_project(project);
    }
    if settings.project.is_none() {
        return Err(
            "No project given; pass --project or run `resxscan open <PROJECT>`".to_string(),
        );
    }
    if let Some(set) = set {
        settings.set_dictionary(&set).map_err(|e| e.to_string())?;
    }

    Session::restore(settings, policy).map_err(|e| e.to_string())
}

fn save_session(session: &Session, settings_path: &Path) -> Result<(), String> {
    session
        .save(settings_path)
        .map_err(|e| format!("Error writing {}: {}", settings_path.display(), e))
}
