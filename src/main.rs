use clap::Parser;
use taskdeck::cli::commands::Cli;
use taskdeck::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.clone();
    let api_url = cli.api_url.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = taskdeck::tui::run(config_path.as_deref(), api_url.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
