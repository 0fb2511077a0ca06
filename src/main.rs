// This is the command line entry point for iconsmith.
// The lib.rs file serves as the public API for library consumers.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use iconsmith_lib::utils::validate_settings;
use iconsmith_lib::{
    ConversionResult, ConversionTask, IcnsBackend, IconExecutor, IconSettings, IconTarget,
    Progress, ProgressType,
};

/// Exit status when arguments or settings are rejected before any file is read.
const EXIT_STARTUP_FAILURE: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "iconsmith",
    version,
    about = "Convert images into macOS .icns and Windows .ico icons"
)]
struct Cli {
    /// Source images (PNG, JPEG, BMP, GIF or WebP), converted in order
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,

    /// Icon formats to produce
    #[arg(long, value_enum, value_name = "TARGET")]
    target: Option<TargetArg>,

    /// Keep square corners
    #[arg(long)]
    no_round: bool,

    /// Corner radius as a fraction of the icon edge (0.0-0.5)
    #[arg(long, value_name = "RATIO")]
    radius: Option<f32>,

    /// How .icns files are packed: auto, iconutil or builtin
    #[arg(long, value_name = "BACKEND")]
    icns_backend: Option<IcnsBackend>,

    /// Write icons here instead of next to each source file
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// JSON settings file; command line flags override its values
    #[arg(long, value_name = "FILE", env = "ICONSMITH_SETTINGS")]
    settings: Option<PathBuf>,

    /// Print progress events and the final report as JSON lines
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetArg {
    Icns,
    Ico,
    All,
}

impl Cli {
    /// Overwrites the fields of `settings` that were given on the command line.
    fn apply_overrides(&self, settings: &mut IconSettings) {
        if let Some(target) = self.target {
            settings.targets = target.targets();
        }
        if self.no_round {
            settings.rounded_corners = false;
        }
        if let Some(radius) = self.radius {
            settings.corner_radius_ratio = radius;
        }
        if let Some(backend) = self.icns_backend {
            settings.icns_backend = backend;
        }
        if let Some(dir) = &self.output_dir {
            settings.output_dir = Some(dir.clone());
        }
    }
}

impl TargetArg {
    fn targets(self) -> Vec<IconTarget> {
        match self {
            Self::Icns => vec![IconTarget::Icns],
            Self::Ico => vec![IconTarget::Ico],
            Self::All => vec![IconTarget::Icns, IconTarget::Ico],
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    info!("=== iconsmith starting ===");

    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{e:#}");
            return ExitCode::from(EXIT_STARTUP_FAILURE);
        }
    };
    debug!("Effective settings: {:?}", settings);

    let tasks = ConversionTask::batch(cli.files.iter().cloned(), &settings);
    let json = cli.json;
    let results = IconExecutor::new()
        .execute_batch(&tasks, |progress| report_progress(&progress, json))
        .await;

    if json {
        match serde_json::to_string(&results) {
            Ok(report) => println!("{report}"),
            Err(e) => error!("Failed to serialize report: {e}"),
        }
    }

    ExitCode::from(batch_exit_status(&results))
}

/// `0` when every file converted, `1` when at least one failed.
fn batch_exit_status(results: &[ConversionResult]) -> u8 {
    if results.iter().all(|r| r.success) { 0 } else { 1 }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so --json output on stdout stays machine readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Settings file (or defaults), then command line overrides, then validation.
fn resolve_settings(cli: &Cli) -> Result<IconSettings> {
    let mut settings = match &cli.settings {
        Some(path) => read_settings_file(path)?,
        None => IconSettings::default(),
    };
    cli.apply_overrides(&mut settings);

    validate_settings(&settings).context("Invalid settings")?;
    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<IconSettings> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))
}

fn report_progress(progress: &Progress, json: bool) {
    if json {
        if let Ok(line) = serde_json::to_string(progress) {
            println!("{line}");
        }
        return;
    }

    match progress.progress_type {
        ProgressType::Start => info!(
            "[{}/{}] {}",
            progress.completed_tasks + 1,
            progress.total_tasks,
            progress.status
        ),
        ProgressType::Complete => info!("✓ {}", progress.status),
        ProgressType::Error => error!(
            "{}: {}",
            progress.status,
            progress.error.as_deref().unwrap_or("unknown error")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("iconsmith").chain(args.iter().copied())).unwrap()
    }

    fn write_settings(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("settings.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn defaults_without_settings_file_or_flags() {
        let cli = parse(&["logo.png"]);
        let settings = resolve_settings(&cli).unwrap();
        assert_eq!(settings, IconSettings::default());
    }

    #[test]
    fn flags_override_the_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_settings(
            dir.path(),
            r#"{ "roundedCorners": true, "cornerRadiusRatio": 0.3, "targets": ["ico"], "icnsBackend": "iconutil" }"#,
        );
        let file = file.to_str().unwrap();

        let settings = resolve_settings(&parse(&["--settings", file, "logo.png"])).unwrap();
        assert_eq!(settings.corner_radius_ratio, 0.3);
        assert_eq!(settings.targets, vec![IconTarget::Ico]);
        assert_eq!(settings.icns_backend, IcnsBackend::Iconutil);

        let cli = parse(&[
            "--settings", file, "--no-round", "--radius", "0.1", "--target", "all",
            "--icns-backend", "builtin", "-o", "out", "logo.png",
        ]);
        let settings = resolve_settings(&cli).unwrap();
        assert!(!settings.rounded_corners);
        assert_eq!(settings.corner_radius_ratio, 0.1);
        assert_eq!(settings.targets, vec![IconTarget::Icns, IconTarget::Ico]);
        assert_eq!(settings.icns_backend, IcnsBackend::Builtin);
        assert_eq!(settings.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn out_of_range_radius_is_rejected_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("logo.png");
        std::fs::write(&source, b"untouched").unwrap();

        let cli = parse(&["--radius", "0.6", source.to_str().unwrap()]);
        let err = resolve_settings(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("corner radius ratio"), "{err:#}");

        let file = write_settings(dir.path(), r#"{ "cornerRadiusRatio": 0.6 }"#);
        let cli = parse(&["--settings", file.to_str().unwrap(), source.to_str().unwrap()]);
        assert!(resolve_settings(&cli).is_err());

        let names: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(names.len(), 2);
        assert_eq!(std::fs::read(&source).unwrap(), b"untouched");
    }

    #[test]
    fn unreadable_settings_file_is_a_startup_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let cli = parse(&["--settings", missing.to_str().unwrap(), "logo.png"]);
        assert!(resolve_settings(&cli).is_err());
    }

    #[test]
    fn exit_status_reflects_failed_files() {
        let ok = ConversionResult {
            input_path: PathBuf::from("a.png"),
            outputs: vec![PathBuf::from("a.ico")],
            success: true,
            error: None,
            elapsed_ms: 3,
        };
        let failed = ConversionResult::failed(PathBuf::from("b.png"), "File not found", 0);

        assert_eq!(batch_exit_status(&[ok.clone()]), 0);
        assert_eq!(batch_exit_status(&[ok, failed]), 1);
        assert_eq!(EXIT_STARTUP_FAILURE, 2);
    }
}
