//! Command-line entry point: pick a zone folder and write its manifest.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use zonetool_csv::prompt::Prompter;
use zonetool_csv::scanning::{find_zone_folder, list_zone_folders};
use zonetool_csv::selection::{KindFolderFilter, SubtreeExclusion, TECHSETS_DIR};
use zonetool_csv::{
  GeneratorConfig, ManifestArtifacts, ManifestBuilder, ManifestKind, ManifestRequest,
  manifest_file_name,
};

#[derive(Parser)]
#[command(name = "generate-csv")]
#[command(about = "Generate zonetool asset manifests from zone source folders", long_about = None)]
struct Cli {
  /// Zonetool root directory (defaults to the current directory)
  #[arg(long)]
  root: Option<PathBuf>,

  /// Manifest kind; prompts when omitted
  #[arg(long, value_enum)]
  kind: Option<ManifestKind>,

  /// Zone folder to list; prompts when omitted
  #[arg(long)]
  folder: Option<String>,

  /// Leave the techsets folder out of the manifest
  #[arg(long)]
  skip_techsets: bool,

  /// Additional directory names to leave out (repeatable)
  #[arg(long, value_name = "DIR")]
  exclude: Vec<String>,

  /// Manifest path (defaults to <output_dir>/<folder>.csv)
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Configuration file (defaults to zonetool_csv.json in the root)
  #[arg(long)]
  config: Option<PathBuf>,

  /// Accept a root directory with any name
  #[arg(long)]
  no_root_check: bool,

  /// Log every classified file
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  tracing_subscriber::fmt()
    .with_max_level(if cli.verbose {
      tracing::Level::DEBUG
    } else {
      tracing::Level::INFO
    })
    .with_writer(io::stderr)
    .init();

  let root = match &cli.root {
    Some(root) => root.clone(),
    None => std::env::current_dir().context("failed to resolve the current directory")?,
  };

  let mut config = match &cli.config {
    Some(path) => GeneratorConfig::from_path(path)?,
    None => GeneratorConfig::discover(&root),
  };
  if cli.no_root_check {
    config.root_dir_name = None;
  }
  let root = config.check_root(&root)?;

  let interactive = cli.kind.is_none() || cli.folder.is_none();
  let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

  loop {
    let kind = match cli.kind {
      Some(kind) => kind,
      None => prompter.choose_kind()?,
    };

    let filter = KindFolderFilter::new(kind, config.map_folder_prefix.clone());
    let folders = list_zone_folders(&root, &filter)?;
    let folder = match &cli.folder {
      Some(name) => find_zone_folder(&folders, name)?,
      None => prompter.choose_folder(&folders)?,
    };

    let mut exclusion = SubtreeExclusion::new(
      config
        .excluded_dirs
        .iter()
        .chain(cli.exclude.iter())
        .cloned(),
    );
    let skip_techsets = if cli.skip_techsets {
      true
    } else if interactive && folder.join(TECHSETS_DIR).exists() {
      prompter.confirm("Skip 'techsets' folder?")?
    } else {
      false
    };
    if skip_techsets {
      exclusion.insert(TECHSETS_DIR);
    }

    let output_path = cli
      .output
      .clone()
      .unwrap_or_else(|| config.output_dir(&root).join(manifest_file_name(&folder)));

    let artifacts = ManifestBuilder::new(ManifestRequest {
      folder: &folder,
      kind,
      exclusion: &exclusion,
      output_path,
    })
    .build()
    .with_context(|| format!("failed to generate manifest for {}", folder.display()))?;

    print_summary(&artifacts);

    if !interactive || !prompter.confirm("\nGenerate another CSV?")? {
      break;
    }
  }

  Ok(())
}

fn print_summary(artifacts: &ManifestArtifacts) {
  println!("[OK] CSV generated: {}\n", artifacts.output_path.display());
  println!("Summary of types:");
  for (asset_type, count) in artifacts.summary.iter() {
    println!("  {asset_type}: {count}");
  }
  println!("  total: {}", artifacts.summary.total());
}
