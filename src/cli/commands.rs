// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Open the interactive generator
    Interactive,

    /// Generate one or more passwords
    Generate {
        /// Password length (clamped to 6..=100)
        #[arg(long, short)]
        length: Option<usize>,

        /// Include digits 0-9
        #[arg(long, short, overrides_with = "no_numbers")]
        numbers: bool,

        /// Leave digits out even if DEFAULT_INCLUDE_NUMBERS is set
        #[arg(long, overrides_with = "numbers")]
        no_numbers: bool,

        /// Include special characters !@#$%^&*
        #[arg(long, short, overrides_with = "no_symbols")]
        symbols: bool,

        /// Leave special characters out even if DEFAULT_INCLUDE_SYMBOLS is set
        #[arg(long, overrides_with = "symbols")]
        no_symbols: bool,

        /// Number of passwords to generate
        #[arg(long, short = 'c', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1000))]
        count: u32,

        /// Copy the last password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Rate the strength of a password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },
}
