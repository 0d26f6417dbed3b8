use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::AppError;

/// The TUI owns the terminal, so logs only go to a file unless `RUST_LOG`
/// asks for them explicitly.
pub fn init_logging(log_file: Option<&Path>, verbose: bool) -> Result<(), AppError> {
    let filter = match (log_file, verbose) {
        (Some(_), true) => "debug",
        (Some(_), false) => "info",
        (None, _) => "off",
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(filter));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] {} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| AppError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A second init (tests) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}
