//! trendview - print the financial trends table of an analysis payload.
//!
//! Usage:
//!   trendview analysis.json                          # sorted by importance
//!   trendview analysis.json -s growth_rate --asc     # lowest growth first
//!   trendview analysis.json --search income          # filter by metric name
//!   trendview analysis.json --top 5 --summary        # top 5 plus trend counts
//!   trendview analysis.json --json                   # view model as JSON

use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

use trendview::fmt::{format_file_size, truncate};
use trendview::payload::load_payload;
use trendview::view::{TableViewModel, build_trends_view, summarize_trends, top_by_importance};
use trendview::{SortColumn, SortDirection, SortState};

/// Financial trends table viewer.
#[derive(Parser)]
#[command(name = "trendview", about = "Financial trends table viewer", version)]
struct Args {
    /// Path to the analysis payload (JSON).
    #[arg(value_name = "PAYLOAD")]
    payload: PathBuf,

    /// Case-insensitive substring filter on metric names.
    #[arg(long, default_value = "")]
    search: String,

    /// Sort column: name, growth_rate or importance_score.
    #[arg(short, long, default_value = "importance_score", value_parser = parse_sort_column)]
    sort: SortColumn,

    /// Sort ascending (default depends on the column).
    #[arg(long, conflicts_with = "desc")]
    asc: bool,

    /// Sort descending (default depends on the column).
    #[arg(long)]
    desc: bool,

    /// Only show the N most important metrics, highest first.
    #[arg(long, value_name = "N", conflicts_with_all = ["search", "sort", "asc", "desc"])]
    top: Option<usize>,

    /// Print trend direction counts after the table.
    #[arg(long)]
    summary: bool,

    /// Print the view model as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is warn level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

fn parse_sort_column(s: &str) -> Result<SortColumn, String> {
    SortColumn::parse(s).ok_or_else(|| {
        format!(
            "invalid sort column '{}': expected name, growth_rate or importance_score",
            s
        )
    })
}

/// Initializes the tracing subscriber on stderr.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("trendview={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn render_table(view: &TableViewModel) -> String {
    let mut out = String::new();
    out.push_str(view.title.trim());
    out.push('\n');

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(view.widths.iter())
            .map(|(text, &w)| {
                let w = w as usize;
                format!("{:<w$}", truncate(text, w), w = w)
            })
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    };

    out.push_str(&line(view.headers.iter().map(String::as_str).collect()));
    out.push('\n');
    for row in &view.rows {
        out.push_str(&line(row.cells.iter().map(|c| c.text.as_str()).collect()));
        out.push('\n');
    }
    out
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let payload = match load_payload(&args.payload) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(meta) = &payload.metadata {
        debug!(
            source_file = meta.source_file.as_deref().unwrap_or("-"),
            file_size = %meta.file_size.map(format_file_size).unwrap_or_else(|| "-".to_string()),
            analysis_date = ?meta.analysis_date,
            "payload metadata"
        );
    }

    let records = payload.to_records();
    info!(metrics = records.len(), path = %args.payload.display(), "loaded analysis payload");

    let mut sort = SortState::new(args.sort);
    if args.asc {
        sort.direction = SortDirection::Asc;
    } else if args.desc {
        sort.direction = SortDirection::Desc;
    }

    let view = match args.top {
        Some(n) => {
            let top: Vec<_> = top_by_importance(&records, n).into_iter().cloned().collect();
            build_trends_view(&top, "", SortState::new(SortColumn::ImportanceScore))
        }
        None => build_trends_view(&records, &args.search, sort),
    };

    if args.json {
        match serde_json::to_string_pretty(&view) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_table(&view));
    }

    if args.summary {
        let s = summarize_trends(&records);
        println!(
            "trends: {} up, {} down, {} flat, {} unknown ({} strong) of {}",
            s.up,
            s.down,
            s.flat,
            s.unknown,
            s.strong,
            s.total()
        );
    }
}
