use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::Path;
use threadsplit::splitter::text_len;
use threadsplit::{config, HistoryStore, SplitResult, Workspace};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "threadsplit",
    version,
    about = "Split long text into numbered posts that fit a character limit"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "threadsplit.toml")]
    config: String,

    /// History database path (overrides the config file).
    #[arg(long)]
    db: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split text into posts and save the result to history.
    Split {
        /// Text to split; read from stdin when omitted.
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Browse and manage past splits.
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// List saved splits, newest first.
    List {
        /// Page to show, starting at 1.
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show the posts of a saved split.
    Show { id: String },
    /// Delete a saved split.
    Remove { id: String },
    /// Delete all saved splits.
    Clear,
    /// Print the whole history as JSON.
    Export,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.log.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if !Path::new(&cli.config).exists() {
        info!("Config file not found at {}, using defaults", cli.config);
    }

    let db_path = cli.db.unwrap_or_else(|| cfg.history.db_path.clone());
    let store = HistoryStore::open(&db_path)?;
    let max_len = cfg.split.max_len;
    let mut workspace = Workspace::new(cfg.split)?
        .with_items_per_page(cfg.history.items_per_page)
        .with_history(store.load_log()?);

    match cli.command {
        Commands::Split { text } => {
            let input = if text.is_empty() {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read text from stdin")?;
                buf
            } else {
                text.join(" ")
            };

            let Some(entry) = workspace.split_text(input).cloned() else {
                println!("Nothing to split: input is blank.");
                return Ok(());
            };
            store.insert_entry(&entry)?;

            print_results(workspace.results(), max_len);
            println!("Saved as {}", entry.id);
        }
        Commands::History { action } => match action {
            HistoryCommand::List { page } => {
                if workspace.history().is_empty() {
                    println!("No saved splits.");
                    return Ok(());
                }

                workspace.go_to_page(page.saturating_sub(1));
                for entry in workspace.paginated_history() {
                    println!(
                        "{}  {}  {} post(s)\n    {}",
                        entry.id,
                        entry.timestamp.format("%Y-%m-%d %H:%M"),
                        entry.total_chunks,
                        entry.preview.replace('\n', " ")
                    );
                }

                let shown = workspace.current_page() + 1;
                println!("\nPage {} of {}", shown, workspace.page_count());
                if workspace.has_previous_page() {
                    println!("  previous: --page {}", shown - 1);
                }
                if workspace.has_next_page() {
                    println!("  next:     --page {}", shown + 1);
                }
            }
            HistoryCommand::Show { id } => {
                let (results, original) = workspace.load_from_history(&id)?;
                println!("{}\n", original);
                print_results(results, max_len);
            }
            HistoryCommand::Remove { id } => {
                workspace.remove_from_history(&id)?;
                store.delete_entry(&id)?;
                println!("Removed {}", id);
            }
            HistoryCommand::Clear => {
                let count = workspace.history().len();
                workspace.clear_history();
                store.clear()?;
                println!("Removed {} saved split(s)", count);
            }
            HistoryCommand::Export => {
                let entries: Vec<_> = workspace.history().iter().collect();
                let json = serde_json::to_string_pretty(&entries)
                    .context("Failed to encode history")?;
                println!("{}", json);
            }
        },
    }

    Ok(())
}

fn print_results(results: &[SplitResult], max_len: usize) {
    for result in results {
        let len = text_len(&result.text);
        let flag = if len > max_len {
            warn!(index = result.index, len, max_len, "post exceeds the character limit");
            "  [over limit]"
        } else {
            ""
        };
        println!("--- {}/{} ({} chars){}", result.index, results.len(), len, flag);
        println!("{}\n", result.text);
    }
}
