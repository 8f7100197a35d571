use clap::{Parser, Subcommand};

/// CLI arguments for dialpick
#[derive(Debug, Parser)]
#[command(
    name = "dialpick",
    version,
    about = "CLI for the dialpick country directory, phone normalizer and picker index"
)]
pub struct CliArgs {
    /// Path to a custom country-code dataset (.json, or .json.gz with `compact`)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// JSON file with picker options (favorites, plus_prefix_immortal, ...)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Locale identifier to use instead of the environment (e.g. ru_RU, en-US)
    #[arg(short = 'l', long = "locale", global = true)]
    pub locale: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the directory
    Stats,

    /// List all countries in dataset order
    Countries,

    /// Lookup a country by region code
    Country {
        /// Two-letter region code (e.g. RU, jm)
        code: String,
    },

    /// Lookup countries by dial prefix
    Dial {
        /// Dial prefix with or without '+' (e.g. +7, 1876)
        prefix: String,
    },

    /// Show the normalized forms of a phone number
    Normalize {
        /// Phone number as typed (e.g. "+7 999 777 33 44")
        text: String,

        /// Region code of the associated country (default: from the number)
        #[arg(long)]
        country: Option<String>,
    },

    /// Replay typing a number one character at a time
    Type {
        /// Characters to type (e.g. 79997773344)
        keys: String,
    },

    /// Print the picker sections
    Sections {
        /// Comma-separated favorite region codes (overrides the config file)
        #[arg(short = 'f', long = "favorites")]
        favorites: Option<String>,

        /// Filter text (case-sensitive substring of the country name)
        #[arg(short = 'q', long = "query")]
        query: Option<String>,

        /// Region code of the selected country
        #[arg(short = 's', long = "select")]
        select: Option<String>,
    },

    /// Show the country of the current locale
    Current,
}
