use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use scaffold_pages::cli::{
    exit_code, handle_backup_command, handle_run_command, BackupCommands, RunArgs, EXIT_FATAL,
};
use scaffold_pages::config::ScaffoldPaths;

#[derive(Parser)]
#[command(
    name = "scaffold-pages",
    version,
    about = "Scaffold shared layout and page components",
    long_about = "Writes src/components/SharedLayout.tsx and one src/pages/<Name>.tsx \
                  per page. src/ is copied to src_backup/ first; the copy is removed \
                  on success and restored if anything fails.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Project root containing src/ (defaults to the current directory)
    #[arg(long, global = true, env = "SCAFFOLD_PAGES_ROOT")]
    root: Option<PathBuf>,

    /// Print a JSON report instead of progress lines
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Back up src/, write the layout and pages, clean up (the default)
    Run(RunArgs),

    #[command(flatten)]
    Backup(BackupCommands),
}

/// Initialize the logger; RUST_LOG overrides the default level
fn init_logger() {
    use std::io::Write;

    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    init_logger();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = match cli.root {
        Some(root) => ScaffoldPaths::with_root(root),
        None => ScaffoldPaths::new()?,
    };
    log::debug!("project root: {}", paths.root().display());

    match cli.command {
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&paths, cmd, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Run(args)) => run_scaffold(&paths, args, cli.json),
        None => run_scaffold(&paths, cli.run, cli.json),
    }
}

fn run_scaffold(paths: &ScaffoldPaths, args: RunArgs, json: bool) -> Result<ExitCode> {
    let result = handle_run_command(paths, args, json);

    match &result {
        Err(err) if err.is_restore_failure() => {
            eprintln!("Restore failed: {}", err);
            eprintln!(
                "The backup, if any, is still at {}",
                paths.backup_dir().display()
            );
        }
        Err(err) => eprintln!("Error: {}", err),
        Ok(_) => {}
    }

    Ok(ExitCode::from(exit_code(&result)))
}
