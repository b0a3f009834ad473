use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use project_audit::cli::{self, Cli};
use project_audit::runner::RealCommandRunner;
use project_audit::{cleanup, reporter, AuditConfig, GitStatus};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let args = Cli::parse();
    let interactive = !args.no_prompt;

    let root_dir = match args.root_dir {
        Some(dir) => dir,
        None if interactive => cli::prompt_root_dir(&mut io::stdin().lock(), &mut io::stdout())
            .context("reading the folder to audit")?,
        None => AuditConfig::discover()
            .map(|c| c.root_dir)
            .unwrap_or_else(|| ".".into()),
    };
    if !root_dir.is_dir() {
        eprintln!("Error: {}: {}", root_dir.display(), cli::NOT_A_DIRECTORY);
        process::exit(2);
    }
    let root_dir = std::path::absolute(&root_dir)
        .with_context(|| format!("resolving {}", root_dir.display()))?;

    let config = AuditConfig::from_root(&root_dir);
    let status = GitStatus::new(RealCommandRunner);
    let results = project_audit::run_audit(&config, &status);

    let all_passed = if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        results.all_passed()
    } else {
        reporter::print_report(&results)
    };

    if !results.empty_folders.is_empty() {
        let delete = if args.delete_empty {
            true
        } else if interactive && !args.json {
            cli::confirm(
                &mut io::stdin().lock(),
                &mut io::stdout(),
                &format!("Delete {} empty folders?", results.empty_folders.len()),
            )?
        } else {
            false
        };

        if delete {
            let report = cleanup::remove_empty_folders(&results.empty_folders);
            tracing::info!(removed = report.removed.len(), failed = report.failed.len(), "empty folder cleanup");
        } else if !args.json {
            println!("{}", "No folders were deleted.".if_supports_color(Stdout, |s| s.dimmed()));
        }
    }

    process::exit(if all_passed { 0 } else { 1 });
}
