// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(name = "passgen", author, version, about = "Random password generator with strength rating", long_about = None)]
pub struct Args {
    /// Use JSON for output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let args = Args::try_parse_from(["passgen"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
    }

    #[test]
    fn generate_flags_parse() {
        let args = Args::try_parse_from([
            "passgen", "generate", "--length", "30", "--numbers", "--symbols", "--count", "3", "--json",
        ])
        .unwrap();
        assert!(args.json);
        match args.command {
            Some(CliCommand::Generate { length, numbers, symbols, count, copy, .. }) => {
                assert_eq!(length, Some(30));
                assert!(numbers);
                assert!(symbols);
                assert_eq!(count, 3);
                assert!(!copy);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn no_flags_turn_classes_off() {
        let args = Args::try_parse_from(["passgen", "generate", "--no-numbers", "--no-symbols"]).unwrap();
        match args.command {
            Some(CliCommand::Generate { numbers, no_numbers, symbols, no_symbols, .. }) => {
                assert_eq!(handlers::flag_override(numbers, no_numbers), Some(false));
                assert_eq!(handlers::flag_override(symbols, no_symbols), Some(false));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn last_of_a_flag_pair_wins() {
        let args = Args::try_parse_from(["passgen", "generate", "--numbers", "--no-numbers"]).unwrap();
        match args.command {
            Some(CliCommand::Generate { numbers, no_numbers, .. }) => {
                assert_eq!(handlers::flag_override(numbers, no_numbers), Some(false));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn generate_count_must_be_positive() {
        assert!(Args::try_parse_from(["passgen", "generate", "--count", "0"]).is_err());
    }

    #[test]
    fn analyze_requires_password() {
        assert!(Args::try_parse_from(["passgen", "analyze"]).is_err());
        let args = Args::try_parse_from(["passgen", "analyze", "Ab1!Ab1!"]).unwrap();
        assert!(matches!(args.command, Some(CliCommand::Analyze { ref password }) if password == "Ab1!Ab1!"));
    }
}
