use anyhow::Result;
use clap::{Parser, Subcommand};

use splitsy::cli::{handle_ledger_command, handle_split_command, LedgerArgs, SplitArgs};
use splitsy::config::{paths::SplitsyPaths, settings::Settings};
use splitsy::logging::{self, LogTarget};

#[derive(Parser)]
#[command(
    name = "splitsy",
    author = "Kaylee Beyene",
    version,
    about = "Split shared expenses between parties by percentage",
    long_about = "Splitsy keeps a percentage allocation over lettered parties that \
                  always sums to 100% and splits each expense you record by it, \
                  down to the cent. Run without a subcommand for the interactive TUI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Split a single amount and print each party's share
    Split(SplitArgs),

    /// Record several expenses and print the ledger with per-party totals
    Ledger(LedgerArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SplitsyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            // The TUI owns the terminal, so diagnostics go to the log file
            logging::init(&settings.log_level, LogTarget::File(paths.log_file()))?;
            splitsy::tui::run_tui(&settings)?;
        }
        Commands::Split(args) => {
            init_cli_logging()?;
            handle_split_command(&settings, args)?;
        }
        Commands::Ledger(args) => {
            init_cli_logging()?;
            handle_ledger_command(&settings, args)?;
        }
        Commands::Init => {
            init_cli_logging()?;
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to: {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            println!("Splitsy Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Default parties:  {}", settings.default_parties);
            println!("  Rebalance mode:   {}", settings.rebalance_mode);
            println!("  Percentage step:  {}", settings.percentage_step);
            println!("  Tick rate (ms):   {}", settings.tick_rate_ms);
            println!("  Log level:        {}", settings.log_level);
        }
    }

    Ok(())
}

/// Quiet stderr diagnostics unless SPLITSY_LOG asks for more
fn init_cli_logging() -> Result<()> {
    logging::init("warn", LogTarget::Stderr)?;
    Ok(())
}
