use clap::{Args, Parser, Subcommand};

/// "0.3.2" for releases, "0.3.2@abc1234 2026-01-15 14:30" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "staple", version = get_version())]
#[command(about = "Generate memorable passphrases from wordlists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate passphrases (the default command)
    #[command(alias = "g")]
    Generate {
        #[command(flatten)]
        options: OptionArgs,

        /// How many passphrases to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Copy the (first) passphrase to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// Save these options as the new defaults
        #[arg(long)]
        save: bool,

        /// Print only the passphrase, no strength report
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the strength of a configuration and equivalent random passwords
    #[command(alias = "s")]
    Strength {
        #[command(flatten)]
        options: OptionArgs,
    },

    /// Get or set stored options
    Config {
        /// Option key (words, first-upper, separator, join-mode, append-numbers, number-pool, wordlist)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,

        /// Forget stored options and go back to the defaults
        #[arg(long, conflicts_with_all = ["key", "value"])]
        reset: bool,
    },

    /// List loaded and available wordlists
    #[command(alias = "ls")]
    Wordlists,
}

/// Per-run overrides of the stored options.
#[derive(Args, Debug, Default, Clone)]
pub struct OptionArgs {
    /// Number of words
    #[arg(short, long)]
    pub words: Option<String>,

    /// Separator characters (one is picked per gap unless --fixed)
    #[arg(short, long, allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Use the separator string verbatim in every gap
    #[arg(long, conflicts_with = "random_separator")]
    pub fixed: bool,

    /// Pick one separator character per gap
    #[arg(long)]
    pub random_separator: bool,

    /// Keep words lowercase
    #[arg(long, conflicts_with = "upper")]
    pub lower: bool,

    /// Capitalize the first letter of each word
    #[arg(long)]
    pub upper: bool,

    /// Do not append a number
    #[arg(long, conflicts_with = "numbers")]
    pub no_numbers: bool,

    /// Append a number
    #[arg(long)]
    pub numbers: bool,

    /// Appended numbers are drawn from 0 up to (not including) this value
    #[arg(long)]
    pub pool: Option<String>,

    /// Wordlist identifier or path
    #[arg(short = 'l', long)]
    pub wordlist: Option<String>,

    /// Extra wordlists merged into the pool (repeatable)
    #[arg(long = "with", value_name = "WORDLIST")]
    pub extra: Vec<String>,
}
