use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ticket_board::{
    render_text, BoardConfig, DragResult, FileStore, Grouping, HttpTicketSource, KanbanBoard,
    Location, RenderOptions, ReorderOutcome, Sorting,
};

#[derive(Parser)]
#[command(
    name = "ticket-board",
    version,
    about = "Kanban board over a remote ticket feed"
)]
struct Cli {
    /// Ticket feed URL.
    #[arg(long)]
    endpoint: Option<String>,

    /// Directory holding saved preferences.
    #[arg(long)]
    prefs_dir: Option<PathBuf>,

    /// Group columns by: status, user or priority (saved for next time).
    #[arg(long)]
    group_by: Option<String>,

    /// Sort cards by: priority or title (saved for next time).
    #[arg(long)]
    sort_by: Option<String>,

    /// Move a card within a column before printing.
    #[arg(long = "move", num_args = 3, value_names = ["COLUMN", "FROM", "TO"])]
    move_card: Option<Vec<String>>,

    /// Drop the moved card into this column instead.
    #[arg(long, requires = "move_card")]
    move_to: Option<String>,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn parse_drag(args: &[String], move_to: Option<String>) -> Result<DragResult> {
    let [column, from, to] = args else {
        anyhow::bail!("--move expects COLUMN FROM TO");
    };
    let from: usize = from
        .parse()
        .with_context(|| format!("invalid FROM index '{from}'"))?;
    let to: usize = to
        .parse()
        .with_context(|| format!("invalid TO index '{to}'"))?;

    let destination = move_to.unwrap_or_else(|| column.clone());
    Ok(DragResult::new(
        Location::new(column.clone(), from),
        Some(Location::new(destination, to)),
    ))
}

/// Help and version requests succeed; every other parse failure exits 1
fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(parse_exit_code(&err));
        }
    };
    let config = BoardConfig::from_overrides(cli.endpoint, cli.prefs_dir)?;

    let drag = cli
        .move_card
        .as_deref()
        .map(|args| parse_drag(args, cli.move_to.clone()))
        .transpose()?;

    let store = Arc::new(FileStore::new(&config.preferences_dir));
    let source = Arc::new(HttpTicketSource::new(config.endpoint.clone()));

    let mut app = KanbanBoard::new(store, source).await;
    app.mount().await;

    if let Some(raw) = cli.group_by.as_deref() {
        app.set_grouping(Grouping::from(raw)).await;
    }
    if let Some(raw) = cli.sort_by.as_deref() {
        app.set_sorting(Sorting::from(raw)).await;
    }

    if let Some(drag) = drag {
        match app.on_reorder(&drag) {
            Ok(ReorderOutcome::CrossBucketIgnored) => {
                eprintln!("Moving cards between columns is not supported; board unchanged.")
            }
            Ok(_) => {}
            Err(err) => eprintln!("Warning: {err}"),
        }
    }

    let options = RenderOptions {
        color: !cli.no_color && std::io::stdout().is_terminal(),
    };
    print!("{}", render_text(&app.render(), options));

    Ok(())
}
