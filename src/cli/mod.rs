mod args;
mod output;

use clap::Parser;
pub(crate) use args::{CliArgs, OutputFormat};
pub(crate) use output::{print_json, print_plain};

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}
