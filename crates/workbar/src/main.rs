mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "workbar",
    version,
    about = "A virtual-desktop indicator that follows the Windows taskbar"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Run the widget in the foreground until closed or Ctrl+C
    Run,
    /// Start the widget in the background
    Start,
    /// Close a running widget
    Stop,
    /// Show whether the widget is running
    Status,
    /// Print what the taskbar probes report and where the overlay would go
    Probe {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Watch taskbar location events in real time
    Events,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        #[cfg(windows)]
        Commands::Run => commands::run::execute(),
        #[cfg(windows)]
        Commands::Start => commands::start::execute(),
        #[cfg(windows)]
        Commands::Stop => commands::stop::execute(),
        #[cfg(windows)]
        Commands::Status => commands::status::execute(),
        #[cfg(windows)]
        Commands::Probe { json } => commands::probe::execute(json),
        #[cfg(windows)]
        Commands::Events => commands::events::execute(),
        #[cfg(not(windows))]
        _ => commands::unsupported(),
    }
}
