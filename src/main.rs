use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use jobspage_autofix::logging::init_cli_logger;
use jobspage_autofix::{load_builtin, PatchRunner, RunReport, Stage, DEFAULT_TARGET};
use similar::{ChangeTag, TextDiff};
use std::env;
use std::path::{Path, PathBuf};

const TARGET_ENV: &str = "JOBSPAGE_AUTOFIX_FILE";

#[derive(Parser)]
#[command(name = "jobspage-autofix")]
#[command(
    about = "Fix the import order and Refresh button props in JobsPage.tsx",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// File to repair (defaults to frontend/src/pages/JobsPage.tsx)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Dry run - apply the fixes in memory without writing the file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show unified diff of changes
    #[arg(short, long)]
    diff: bool,

    /// Enable debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let rules = load_builtin().context("built-in rule catalog is invalid")?;
    let default = rules
        .target()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET));
    let target = resolve_target(cli.file, env::var(TARGET_ENV).ok(), default);

    let runner = PatchRunner::new(&target, rules).dry_run(cli.dry_run);
    let report = runner
        .run_with(|stage| match stage {
            Stage::Reading(path) => println!("Reading {}...", display_name(path)),
            Stage::Writing(_) => println!("Writing fixes..."),
        })
        .with_context(|| format!("could not repair {}", target.display()))?;

    print_summary(&runner, &report);

    if cli.diff && report.changed() {
        display_diff(&report.file, &report.original, &report.fixed);
    }

    Ok(())
}

/// Resolve the target file.
///
/// Priority order:
/// 1. Explicit --file flag
/// 2. JOBSPAGE_AUTOFIX_FILE environment variable, when it names an existing path
/// 3. The catalog's built-in target
fn resolve_target(flag: Option<PathBuf>, env_value: Option<String>, default: PathBuf) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }

    if let Some(env_path) = env_value.filter(|v| !v.trim().is_empty()) {
        let path = PathBuf::from(&env_path);
        if path.exists() {
            return path;
        }
        eprintln!(
            "{}",
            format!(
                "Warning: {} is set but path doesn't exist: {}",
                TARGET_ENV, env_path
            )
            .yellow()
        );
    }

    default
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Completion report. Rules that matched nothing are not called out.
fn print_summary(runner: &PatchRunner, report: &RunReport) {
    if !report.written {
        println!("{}", "[DRY RUN - file was not written]".cyan());
        println!("{} Fixes computed successfully!", "✓".green());
    } else {
        println!("{} Fixes applied successfully!", "✓".green());
    }

    println!("\n{}", "Fixed:".bold());
    for (idx, rule) in runner.rules().iter().enumerate() {
        println!("{}. {}", idx + 1, rule.rule.summary);
    }
}

/// Helper: Show unified diff between original and modified content
fn display_diff(file: &Path, original: &str, modified: &str) {
    println!(
        "\n{}",
        format!("--- {} (original)", file.display()).dimmed()
    );
    println!("{}", format!("+++ {} (fixed)", file.display()).dimmed());

    let diff = TextDiff::from_lines(original, modified);

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => format!("-{}", change).red(),
            ChangeTag::Insert => format!("+{}", change).green(),
            ChangeTag::Equal => format!(" {}", change).normal(),
        };
        print!("{}", sign);
    }
    if !modified.ends_with('\n') {
        println!();
    }
}
