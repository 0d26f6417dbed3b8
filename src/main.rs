use clap::Parser;

use quizgame::bank::{self, BankSource};
use quizgame::cli::Cli;
use quizgame::error::AppError;
use quizgame::session::SessionOptions;
use quizgame::state::AppState;
use quizgame::{logging, tui};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_file.as_deref(), cli.verbose)?;

    let data_dir = bank::resolve_data_dir(cli.data_dir.as_deref())?;
    log::info!("question data directory: {}", data_dir.display());
    let source = BankSource::new(data_dir, cli.bank.clone());

    // Handle --check
    if cli.check {
        bank::print_check(&source)?;
        return Ok(());
    }

    let options = SessionOptions {
        require_confirm: cli.require_confirm,
    };
    let state = AppState::new(cli.lang, source, options);

    tui::run_tui(state)?;

    Ok(())
}
