mod cli;

use clipswap::{
    config::{self, Config},
    interact::{AssumeYes, Confirm, TerminalPrompt, TracingDiagnostics},
    logging::{self, LogLevel},
    pool::CandidatePool,
    project::Project,
    relink::{self, RelinkContext, RelinkOptions},
};
use clipswap_common::{paths::derived_output_path, Error};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_config_or_default(cli.config.as_deref())?;

    let level = cli
        .log
        .or_else(|| LogLevel::parse(&config.logging.level))
        .unwrap_or(LogLevel::Info);
    logging::init_logging(level);

    run(&cli, &config)
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let project_path = existing_path(&cli.project)
        .filter(|p| p.is_file())
        .ok_or_else(|| Error::ProjectNotFound(cli.project.clone()))?;
    let finals_dir = existing_path(&cli.finals_dir)
        .filter(|p| p.is_dir())
        .ok_or_else(|| Error::FinalsDirNotFound(cli.finals_dir.clone()))?;

    let mut pool = CandidatePool::from_dir(&finals_dir)?;

    tracing::info!("Opening project: {}", project_path.display());
    let mut project = Project::open(&project_path)?;
    let project_dir = project_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let mut terminal = TerminalPrompt::stdio();
    let mut assume_yes = AssumeYes;
    let confirm: &mut dyn Confirm = if cli.yes || config.prompts.assume_yes {
        &mut assume_yes
    } else {
        &mut terminal
    };

    let options = RelinkOptions {
        allow_candidate_reuse: config.premiere.allow_candidate_reuse && !cli.no_reuse,
        propagate_partial_updates: config.premiere.propagate_partial_updates,
    };

    let mut diagnostics = TracingDiagnostics;
    let summary = {
        let mut ctx = RelinkContext {
            finals_dir: &finals_dir,
            project_dir: &project_dir,
            options,
            confirm: &mut *confirm,
            diagnostics: &mut diagnostics,
        };
        relink::relink(&mut project, &mut pool, &mut ctx)?
    };
    tracing::debug!(
        "Relinked {} clip(s), skipped {}",
        summary.replaced.len(),
        summary.skipped
    );

    if cli.dry_run {
        for replacement in &summary.replaced {
            println!("{} -> {}", replacement.original, replacement.replacement);
        }
        println!(
            "\n[DRY RUN] Would replace {} clip(s); nothing written",
            summary.replaced.len()
        );
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| derived_output_path(&project_path, &config.output.suffix));

    if output.is_file() && !confirm.confirm("Output file already exists. Overwrite?") {
        return Err(Error::OverwriteDeclined(output).into());
    }

    project.save(&output, config.premiere.recompress)?;
    tracing::info!("Wrote {}", output.display());

    Ok(())
}

fn existing_path(path: &Path) -> Option<PathBuf> {
    path.canonicalize().ok()
}
