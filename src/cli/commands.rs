// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more random passwords
    Generate {
        /// Password length (8-64, defaults to DEFAULT_PASSWORD_LENGTH)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(8..=64))]
        length: Option<u64>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// How many passwords to generate
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..=100))]
        count: u64,
    },

    /// Score a password and suggest improvements
    Strength {
        /// Password to check (prompted for when omitted)
        password: Option<String>,
    },

    /// Manage accounts interactively for this session
    Menu,
}
