//! Command-line front end.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roomkit_layout::{Editor, JsonFileTemplateStore, TemplateStore};
use roomkit_settings::EditorSettings;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "roomkit",
    about = "Room layout tools for the vanity designer",
    version
)]
pub struct Cli {
    /// Editor settings file (JSON or TOML). Defaults are used when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a room scan into a template in a library file.
    #[command(name = "import-scan")]
    ImportScan {
        /// Scan record JSON
        scan: PathBuf,
        /// Template library JSON, created if missing
        library: PathBuf,
        /// Template name, defaults to the scan file name
        name: Option<String>,
    },

    /// Load every template in a library and report collisions.
    Check {
        /// Template library JSON
        library: PathBuf,
    },
}

pub fn run_from_env() -> Result<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref())?;
    match cli.command {
        Commands::ImportScan {
            scan,
            library,
            name,
        } => {
            let id = import_scan(&settings, &scan, &library, name.as_deref())?;
            println!("{}", id);
        }
        Commands::Check { library } => {
            for line in check_library(&settings, &library)? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<EditorSettings> {
    match path {
        Some(path) => EditorSettings::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(EditorSettings::default()),
    }
}

/// Imports `scan` and stores it as a new template in `library`. Returns the template id.
pub fn import_scan(
    settings: &EditorSettings,
    scan: &Path,
    library: &Path,
    name: Option<&str>,
) -> Result<String> {
    let json = std::fs::read_to_string(scan)
        .with_context(|| format!("Failed to read scan {}", scan.display()))?;

    let mut editor = Editor::new(settings.clone());
    editor
        .import_scan(&json)
        .with_context(|| format!("Scan {} rejected", scan.display()))?;

    let name = match name {
        Some(name) => name.to_string(),
        None => scan
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Scanned room".to_string()),
    };
    let mut store = JsonFileTemplateStore::open(library)
        .with_context(|| format!("Failed to open template library {}", library.display()))?;
    let id = editor.save_template(
        &mut store,
        &name,
        &format!("Imported from {}", scan.display()),
    )?;

    info!("Stored scan '{}' in {}", name, library.display());
    Ok(id)
}

/// One report line per problem found, or `<name>: ok` for a clean template.
pub fn check_library(settings: &EditorSettings, library: &Path) -> Result<Vec<String>> {
    let store = JsonFileTemplateStore::open(library)
        .with_context(|| format!("Failed to open template library {}", library.display()))?;

    let mut report = Vec::new();
    for summary in store.list() {
        let mut editor = Editor::new(settings.clone());
        let loaded = match editor.load_template(&store, &summary.id) {
            Ok(loaded) => loaded,
            Err(e) => {
                report.push(format!("{}: rejected ({})", summary.name, e));
                continue;
            }
        };
        let collisions = editor.collisions();
        let overlaps = editor.overlapping_cabinets();

        if collisions.is_empty() && overlaps.is_empty() && loaded.dropped_openings == 0 {
            report.push(format!("{}: ok", summary.name));
            continue;
        }
        for (cabinet, violations) in &collisions {
            let hits: Vec<&str> = violations.iter().map(|v| v.as_str()).collect();
            report.push(format!(
                "{}: cabinet {} hits {}",
                summary.name,
                cabinet,
                hits.join(", ")
            ));
        }
        for (a, b) in overlaps {
            report.push(format!("{}: cabinets {} and {} overlap", summary.name, a, b));
        }
        if loaded.dropped_openings > 0 {
            report.push(format!(
                "{}: {} openings reference missing walls",
                summary.name, loaded.dropped_openings
            ));
        }
    }
    info!("Checked {} templates in {}", store.list().len(), library.display());
    Ok(report)
}
