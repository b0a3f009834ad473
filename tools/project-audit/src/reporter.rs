use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io::{self, Write};

use crate::checks::lock_files::LockFileVerdict;
use crate::checks::CheckResult;
use crate::results::{AuditResults, ENV_EXAMPLE_CHECK, LOCK_FILES_CHECK};

/// Print the colored report to stdout. Returns true if every check passed.
pub fn print_report(results: &AuditResults) -> bool {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match write_report(&mut out, results) {
        Ok(passed) => passed,
        Err(error) => {
            tracing::error!(%error, "failed to write report");
            results.all_passed()
        }
    }
}

/// Passing checks are listed first, then failures with their offending paths.
pub fn write_report<W: Write>(writer: &mut W, results: &AuditResults) -> io::Result<bool> {
    writeln!(
        writer,
        "{}",
        "\nProject Audit Report:\n".if_supports_color(Stdout, |s| s.yellow())
    )?;

    let mut rows = results.check_results();
    rows.sort_by_key(|r| !r.passed);

    for row in &rows {
        write_row(writer, row)?;
        if row.passed {
            continue;
        }
        if row.name == ENV_EXAMPLE_CHECK {
            writeln!(
                writer,
                "{}",
                "  Consider committing a template .env or adding .env locally for dev."
                    .if_supports_color(Stdout, |s| s.dimmed())
            )?;
        } else if row.name == LOCK_FILES_CHECK {
            write_lock_file_verdict(writer, &results.lock_file_verdict())?;
        }
    }

    write_summary(writer, &rows)
}

fn write_row<W: Write>(writer: &mut W, row: &CheckResult) -> io::Result<()> {
    if row.passed {
        writeln!(
            writer,
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            row.name,
            "clean".if_supports_color(Stdout, |s| s.green()),
        )
    } else {
        writeln!(
            writer,
            "{} {}",
            "\u{2717}".if_supports_color(Stdout, |s| s.red()),
            row.name.if_supports_color(Stdout, |s| s.red()),
        )?;
        for v in &row.violations {
            writeln!(writer, "   - {}", v)?;
        }
        Ok(())
    }
}

fn write_lock_file_verdict<W: Write>(writer: &mut W, verdict: &LockFileVerdict) -> io::Result<()> {
    match verdict {
        LockFileVerdict::Pass => Ok(()),
        LockFileVerdict::Conflicting { managers } => {
            writeln!(
                writer,
                "  {} {}",
                "Conflicting lock file types detected:".if_supports_color(Stdout, |s| s.red()),
                managers.join(", "),
            )?;
            writeln!(
                writer,
                "{}",
                "  Use only one package manager to avoid dependency resolution issues."
                    .if_supports_color(Stdout, |s| s.dimmed())
            )
        }
        LockFileVerdict::Homogeneous { manager } => {
            writeln!(
                writer,
                "  {} {}",
                "Multiple lock files from one manager:".if_supports_color(Stdout, |s| s.yellow()),
                manager,
            )?;
            writeln!(
                writer,
                "{}",
                "  If this is not a monorepo or intentional multi-package setup, keep a single lock file at the root."
                    .if_supports_color(Stdout, |s| s.dimmed())
            )
        }
    }
}

fn write_summary<W: Write>(writer: &mut W, rows: &[CheckResult]) -> io::Result<bool> {
    let failed = rows.iter().filter(|r| !r.passed).count();

    writeln!(writer, "{}", "\n--- Summary ---".if_supports_color(Stdout, |s| s.bold()))?;
    if failed == 0 {
        writeln!(
            writer,
            "{}",
            format!("\nAll {}/{} checks passed.\n", rows.len(), rows.len())
                .if_supports_color(Stdout, |s| s.green()),
        )?;
        Ok(true)
    } else {
        writeln!(
            writer,
            "{}",
            format!("\n{}/{} check(s) failed.\n", failed, rows.len())
                .if_supports_color(Stdout, |s| s.red()),
        )?;
        Ok(false)
    }
}
