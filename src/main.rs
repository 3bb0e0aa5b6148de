use anyhow::Context;
use clap::{Parser, Subcommand};
use songlyric::config;
use songlyric::lyrics::{LyricFetcher, normalize};

#[derive(Debug, Parser)]
#[command(name = "songlyric", version, about = "Find lyrics for a (messy) song title")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up lyrics and print them to stdout.
    Fetch {
        /// Song or video title, decorations and all.
        title: String,
        /// Artist hint for sources that key on it.
        #[arg(long)]
        artist: Option<String>,
        /// Print parsed `mm:ss.cc  text` lines instead of the raw document.
        #[arg(long)]
        timed: bool,
    },
    /// Print the title as it will be used for lookups.
    Normalize { title: String },
    /// List the configured sources in the order they are tried.
    Sources,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.log.max_level()?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Fetch {
            title,
            artist,
            timed,
        } => {
            let fetcher = LyricFetcher::from_config(&cfg)?;
            let doc = fetcher.fetch(&title, artist.as_deref());
            if timed {
                for line in doc.timed_lines() {
                    println!("{}  {}", line.stamp(), line.text);
                }
            } else {
                print!("{doc}");
                if !doc.body().ends_with('\n') {
                    println!();
                }
            }
        }
        Command::Normalize { title } => {
            println!("{}", normalize(&title));
        }
        Command::Sources => {
            let fetcher = LyricFetcher::from_config(&cfg)?;
            for (i, name) in fetcher.source_names().enumerate() {
                println!("{:02}. {}", i + 1, name);
            }
        }
    }

    Ok(())
}
