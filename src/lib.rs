pub mod bank;
pub mod cli;
pub mod command;
pub mod error;
pub mod locale;
pub mod logging;
pub mod model;
pub mod session;
pub mod state;
pub mod timer;
pub mod tui;
pub mod ui;
