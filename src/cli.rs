use std::path::PathBuf;

use clap::Parser;

use crate::locale::Locale;

#[derive(Parser, Debug)]
#[command(name = "quizgame", version, about = "Terminal multiple-choice quiz")]
pub struct Cli {
    /// Directory holding askES.md / askEN.md [default: . or the user data dir]
    pub data_dir: Option<PathBuf>,

    /// Language preselected on the start screen
    #[arg(long, value_enum, default_value_t = Locale::Es)]
    pub lang: Locale,

    /// Use this question file for every language
    #[arg(long, value_name = "file")]
    pub bank: Option<PathBuf>,

    /// Only allow moving on after the answer is confirmed
    #[arg(long)]
    pub require_confirm: bool,

    /// Validate the question banks and exit
    #[arg(long)]
    pub check: bool,

    /// Write logs to this file
    #[arg(long, value_name = "path")]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}
