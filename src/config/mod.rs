#[cfg(feature = "cli")]
pub mod cli;
pub mod inventory;
pub mod sample;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
