use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use glyphbreak::cipher::Ciphertext;
use glyphbreak::config::{Config, LexiconParams};
use glyphbreak::consts::DEFAULT_HISTORY_PATH;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file of every checked key and its score
    #[arg(global = true, long, default_value = DEFAULT_HISTORY_PATH)]
    history: String,

    /// JSON config file; options typed on the command line win
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check random keys of one length
    Search(cmd::search::SearchArgs),
    /// Refine a hand-picked key
    Polish(cmd::polish::PolishArgs),
    /// List the best checked keys
    Rank(cmd::rank::RankArgs),
    /// Decode the transcript with a key
    Show(cmd::show::ShowArgs),
    /// Symbol and word frequencies of the transcript
    Stats(cmd::stats::StatsArgs),
    /// Recompute every stored score against the current dictionary
    Rescore(cmd::rescore::RescoreArgs),
}

/// The part of a subcommand's options a config file can fill in.
enum ConfigTarget<'a> {
    Full(&'a mut Config),
    Lexicon(&'a mut LexiconParams),
}

impl Commands {
    fn config_target(&mut self) -> Option<ConfigTarget<'_>> {
        match self {
            Commands::Search(args) => Some(ConfigTarget::Full(&mut args.config)),
            Commands::Polish(args) => Some(ConfigTarget::Full(&mut args.config)),
            Commands::Show(args) => Some(ConfigTarget::Lexicon(&mut args.lexicon)),
            Commands::Rescore(args) => Some(ConfigTarget::Lexicon(&mut args.lexicon)),
            Commands::Rank(_) | Commands::Stats(_) => None,
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let mut cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    // Values typed on the command line live in the subcommand's matches.
    if let (Some(path), Some((_, sub_matches))) = (&cli.config, matches.subcommand()) {
        if let Some(target) = cli.command.config_target() {
            info!("⚙️  Loading config: {}", path);
            let mut config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            match target {
                ConfigTarget::Full(cli_config) => {
                    config.merge_from_cli(cli_config, sub_matches);
                    *cli_config = config;
                }
                ConfigTarget::Lexicon(cli_lexicon) => {
                    config.lexicon.merge_from_cli(cli_lexicon, sub_matches);
                    *cli_lexicon = config.lexicon;
                }
            }
        }
    }

    let cipher = Ciphertext::transcript().unwrap_or_else(|e| {
        error!("❌ Invalid transcript configuration: {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Search(args) => cmd::search::run(args, &cipher, &cli.history),
        Commands::Polish(args) => cmd::polish::run(args, &cipher, &cli.history),
        Commands::Rank(args) => cmd::rank::run(args, &cli.history),
        Commands::Show(args) => cmd::show::run(args, &cipher, &cli.history),
        Commands::Stats(args) => cmd::stats::run(args, &cipher),
        Commands::Rescore(args) => cmd::rescore::run(args, &cipher, &cli.history),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
