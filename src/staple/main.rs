use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use staple::api::{ConfigAction, StapleApi};
use staple::clipboard::copy_to_clipboard;
use staple::config::{GenerationConfig, JoinMode};
use staple::error::{Result, StapleError};
use staple::loader::FileLoader;
use staple::random::OsRandom;
use staple::store::fs::FileConfigStore;
use staple::wordlist::WordlistStore;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
mod cli;
use args::{Cli, Commands, OptionArgs};
use cli::print;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StapleApi<FileConfigStore, OsRandom>,
    loader: FileLoader,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Generate {
            options,
            count,
            copy,
            save,
            quiet,
        }) => handle_generate(&mut ctx, &options, count, copy, save, quiet),
        Some(Commands::Strength { options }) => handle_strength(&mut ctx, &options),
        Some(Commands::Config { key, value, reset }) => handle_config(&mut ctx, key, value, reset),
        Some(Commands::Wordlists) => handle_wordlists(&mut ctx),
        None => handle_generate(&mut ctx, &OptionArgs::default(), 1, false, false, false),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("staple=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// `STAPLE_HOME` wins over the platform config dir.
fn staple_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("STAPLE_HOME") {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "staple", "staple")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| StapleError::Api("Could not determine config dir".to_string()))
}

fn init_context() -> Result<AppContext> {
    let home = staple_home()?;
    tracing::debug!(home = %home.display(), "using staple home");

    let store = FileConfigStore::new(&home);
    let loader = FileLoader::new(home.join("wordlists"));
    let api = StapleApi::new(store, WordlistStore::with_builtin(), OsRandom::new());

    Ok(AppContext { api, loader })
}

/// Layers command-line flags over the stored options.
fn apply_overrides(mut config: GenerationConfig, opts: &OptionArgs) -> Result<GenerationConfig> {
    let pairs = [
        ("words", opts.words.as_deref()),
        ("separator", opts.separator.as_deref()),
        ("number-pool", opts.pool.as_deref()),
        ("wordlist", opts.wordlist.as_deref()),
    ];
    for (key, value) in pairs {
        if let Some(value) = value {
            config.set(key, value).map_err(StapleError::InvalidConfig)?;
        }
    }

    if opts.fixed {
        config.join_mode = JoinMode::Fixed;
    }
    if opts.random_separator {
        config.join_mode = JoinMode::Random;
    }
    if opts.lower {
        config.first_upper = false;
    }
    if opts.upper {
        config.first_upper = true;
    }
    if opts.no_numbers {
        config.append_numbers = false;
    }
    if opts.numbers {
        config.append_numbers = true;
    }

    Ok(config)
}

fn load_wordlists(ctx: &mut AppContext, config: &GenerationConfig, extra: &[String]) -> Result<()> {
    let ids = std::iter::once(&config.wordlist).chain(extra.iter());
    for id in ids {
        ctx.loader.ensure_loaded(ctx.api.wordlist_store(), id)?;
    }
    Ok(())
}

fn handle_generate(
    ctx: &mut AppContext,
    options: &OptionArgs,
    count: usize,
    copy: bool,
    save: bool,
    quiet: bool,
) -> Result<()> {
    let config = apply_overrides(ctx.api.options(), options)?;
    load_wordlists(ctx, &config, options.extra.as_slice())?;

    let result = ctx.api.generate(&config, options.extra.as_slice(), count)?;

    print::print_passphrases(&result.passphrases);
    if !quiet {
        if let Some(report) = &result.strength {
            print::print_strength(report);
        }
        print::print_messages(&result.messages);
    }

    if copy {
        if let Some(first) = result.passphrases.first() {
            match copy_to_clipboard(&first.joined) {
                Ok(()) if !quiet => println!("{}", "Copied to clipboard.".dimmed()),
                Ok(()) => {}
                Err(e) => eprintln!("Warning: Failed to copy to clipboard: {}", e),
            }
        }
    }

    if save {
        let saved = ctx.api.config(ConfigAction::Save(config))?;
        if !quiet {
            print::print_messages(&saved.messages);
        }
    }

    Ok(())
}

fn handle_strength(ctx: &mut AppContext, options: &OptionArgs) -> Result<()> {
    let config = apply_overrides(ctx.api.options(), options)?;
    load_wordlists(ctx, &config, options.extra.as_slice())?;

    let result = ctx.api.strength(&config, options.extra.as_slice())?;
    if let Some(report) = &result.strength {
        print::print_strength(report);
    }
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
    reset: bool,
) -> Result<()> {
    let action = match (key, value) {
        _ if reset => ConfigAction::Reset,
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print::print_config(config);
        }
    }
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_wordlists(ctx: &mut AppContext) -> Result<()> {
    let available = ctx.loader.available()?;
    let result = ctx.api.wordlists(&available)?;
    print::print_wordlists(&result.wordlists);
    print::print_messages(&result.messages);
    Ok(())
}
