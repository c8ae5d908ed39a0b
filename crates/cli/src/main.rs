use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use data_loader::{Encoding, MovieTable};
use pipeline::presentation::table_headers;
use pipeline::{FilterCriteria, QueryError, RatingPoint, SearchResult, SearchSession};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

/// movie-search - search, filter and rank movies from an IMDb CSV export
#[derive(Parser)]
#[command(name = "movie-search")]
#[command(about = "Search, filter and rank movies from an IMDb CSV export", long_about = None)]
struct Cli {
    /// Path to the movie CSV export
    #[arg(short, long, env = "MOVIE_SEARCH_FILE", default_value = "data/imdb_movies_india.csv")]
    file: PathBuf,

    /// Text encoding of the CSV file
    #[arg(long, value_enum, default_value_t = SourceEncoding::Latin1)]
    encoding: SourceEncoding,

    /// Movie name (substring) or year to search for
    #[arg(short, long, default_value = "")]
    search: String,

    /// Rating filter: '<' or '>' followed by a number, e.g. ">7.5"
    #[arg(short, long, allow_hyphen_values = true)]
    rating: Option<String>,

    /// Genre to filter by (case-insensitive substring)
    #[arg(short, long)]
    genre: Option<String>,

    /// Director to filter by (case-insensitive substring)
    #[arg(short, long)]
    director: Option<String>,

    /// Sort by 'rating', 'votes' or 'year'; anything else keeps file order
    #[arg(long)]
    sort: Option<String>,

    /// Also show the N best-rated matches as a bar chart
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log pipeline stages (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceEncoding {
    Latin1,
    Utf8,
}

impl From<SourceEncoding> for Encoding {
    fn from(encoding: SourceEncoding) -> Self {
        match encoding {
            SourceEncoding::Latin1 => Encoding::Latin1,
            SourceEncoding::Utf8 => Encoding::Utf8,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(QueryError::InvalidRatingFilter { .. }) = e.downcast_ref::<QueryError>() {
                eprintln!(
                    "{}",
                    "Uh-oh! Invalid rating filter. Use '<' or '>' followed by a number.".red()
                );
            }
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();
    let table = MovieTable::load_from_file(&cli.file, cli.encoding.into())
        .with_context(|| format!("Failed to load movies from {}", cli.file.display()))?;
    tracing::info!("Loaded {} movies in {:?}", table.len(), start.elapsed());

    let session = SearchSession::new(Arc::new(table));

    let criteria = FilterCriteria {
        search_term: cli.search.clone(),
        rating_filter: cli.rating.clone(),
        genre_filter: cli.genre.clone(),
        director_filter: cli.director.clone(),
    };

    let result = session.search(&criteria, cli.sort.as_deref())?;

    match cli.format {
        OutputFormat::Json => print_json(&result, cli.top)?,
        OutputFormat::Table => {
            println!("{}", "Welcome to the IMDb Movie Search!\n".yellow().bold());

            if result.is_empty() {
                println!(
                    "{}",
                    "Sorry! No movies found... Check your search term or filters.".red()
                );
                return Ok(());
            }

            println!(
                "{}",
                format!("Movies found for {}:\n", describe(&criteria)).yellow()
            );
            print_table(&session.rows(&result));

            if let Some(n) = cli.top {
                print_top_chart(&result.top_rated(n), n);
            }
        }
    }

    Ok(())
}

/// The active criteria, space separated, as typed.
fn describe(criteria: &FilterCriteria) -> String {
    let parts: Vec<&str> = [
        criteria.search_term(),
        criteria.rating_filter(),
        criteria.genre_filter(),
        criteria.director_filter(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        "all movies".to_string()
    } else {
        parts.join(" ")
    }
}

/// Print rows as an aligned grid under the standard headings.
fn print_table(rows: &[Vec<String>]) {
    let headers = table_headers();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = widths
        .iter()
        .map(|w| "─".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("┼");

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!(" {:<width$} ", h, width = *w))
        .collect::<Vec<_>>()
        .join("│");
    println!("{}", header_line.bold());
    println!("{}", separator);

    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!(" {:<width$} ", cell, width = *w))
            .collect::<Vec<_>>()
            .join("│");
        println!("{}", line);
    }
}

/// Ratings are drawn on a 0..=10 scale.
const CHART_MAX_RATING: f64 = 10.0;
const CELLS_PER_POINT: f64 = 4.0;

/// Bar length for a rating, clamped to the chart scale.
fn bar_cells(value: f64) -> usize {
    (value.clamp(0.0, CHART_MAX_RATING) * CELLS_PER_POINT).round() as usize
}

/// Horizontal bar chart, highest rating on top.
fn print_top_chart(points: &[RatingPoint], n: usize) {
    println!();
    println!("{}", format!("Top {} Movies by Rating", n).bold().blue());
    if points.is_empty() {
        return;
    }

    let label_width = points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);

    for point in points {
        println!(
            "{:>width$} │{} {:.1}",
            point.label,
            "█".repeat(bar_cells(point.value)).cyan(),
            point.value,
            width = label_width
        );
    }
}

fn print_json(result: &SearchResult<'_>, top: Option<usize>) -> Result<()> {
    let output = serde_json::json!({
        "criteria": result.criteria,
        "sort_key": result.sort_key,
        "count": result.len(),
        "movies": result.movies,
        "top_rated": top.map(|n| result.top_rated(n)),
    });
    let text = serde_json::to_string_pretty(&output).context("Failed to encode results as JSON")?;
    println!("{}", text);
    Ok(())
}
