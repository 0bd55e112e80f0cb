use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wal::application::{FindLogService, OpenLogService, SyncLogService};
use wal::cli::{format_sync_summary, format_sync_warnings, Cli, Commands};
use wal::domain::DateToken;
use wal::error::WalError;
use wal::infrastructure::{Config, FileSystemRepository, SystemRunner};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("WAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), WalError> {
    let Some(command) = cli.command else {
        // No subcommand: nothing to do
        println!("wal - your personal write-ahead log");
        println!("Use --help for usage information");
        return Ok(());
    };

    let config = Config::resolve(cli.config.as_deref())?;
    let repository = FileSystemRepository::new(config.log_dir()?);
    let runner = SystemRunner;

    match command {
        Commands::Open { date } => {
            let token = DateToken::parse(&date)?;
            let service = OpenLogService::new(repository, config.general.editor.clone(), &runner);
            service.execute(token, Local::now().date_naive())?;
            Ok(())
        }
        Commands::Sync { message } => {
            let service = SyncLogService::new(repository, config, &runner);
            let report = service.execute(message.as_deref(), Local::now())?;

            eprint!("{}", format_sync_warnings(&report));
            println!("{}", format_sync_summary(&report));
            Ok(())
        }
        Commands::Find => {
            FindLogService::new(repository).execute()?;
            println!("Finding logs is not implemented yet");
            Ok(())
        }
    }
}
