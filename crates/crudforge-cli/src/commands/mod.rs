//! One module per subcommand. Handlers take parsed arguments, the loaded
//! config and the output manager, and return [`crate::error::CliResult`].

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod new;
