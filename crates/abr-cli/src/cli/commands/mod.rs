mod check;
mod config;
mod run;

pub use check::run_check;
pub use config::run_show_config;
pub use run::run_batch;
