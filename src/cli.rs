// src/cli.rs
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::analysis::Analysis;
use crate::config::consts::DEFAULT_CLASS_ID;
use crate::config::options::{AppOptions, ExportFormat, SourceKind};
use crate::deckcode::class_from_deck_name;
use crate::progress::Progress;
use crate::session::Session;
use crate::store;

#[derive(Parser)]
#[command(name = "deck_scrape", about = "Deck-list statistics and deck codes", long_about = None)]
struct Cli {
    /// Read saved pages from <DIR>/<post>/<deck>.html instead of the live site
    #[arg(long, global = true)]
    snapshots: Option<PathBuf>,

    /// Card name → id JSON
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Mirror the log to stderr at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List deck-list comparison posts (title<TAB>url)
    Posts {
        /// Index pages to walk
        #[arg(long)]
        pages: Option<usize>,
    },

    /// List the decks of one post
    Decks {
        /// Post URL (or snapshot directory)
        post: String,
    },

    /// Recommend a 40-card list for one deck
    Analyze {
        post: String,
        deck: String,

        /// Print the result rows as JSON
        #[arg(long)]
        json: bool,

        /// Days until a sample's weight reaches half of the decay window
        #[arg(long)]
        half_life: Option<f64>,

        /// Also write the rows to this file (extension follows --format)
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
        format: FormatArg,

        /// Leave the header line out of the written file
        #[arg(long)]
        no_headers: bool,

        /// Print the share URL of the recommended list
        #[arg(long)]
        code: bool,
    },

    /// Build a share URL from card names (one per copy)
    Code {
        /// Class id in the URL
        #[arg(long, default_value_t = DEFAULT_CLASS_ID)]
        class: u32,

        /// Read names from a file, one per line
        #[arg(long)]
        file: Option<PathBuf>,

        names: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

/// Page progress on stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { ::log::LevelFilter::Debug } else { ::log::LevelFilter::Info };
    crate::log::init(level, true);

    let mut options = AppOptions::default();
    if let Some(dir) = cli.snapshots {
        options.source.kind = SourceKind::Snapshots(dir);
    }
    if let Some(path) = cli.catalog {
        options.catalog_path = path;
    }
    if let Command::Posts { pages: Some(p) } = &cli.command {
        options.source.post_pages = *p;
    }
    if let Command::Analyze { half_life: Some(d), .. } = &cli.command {
        options.weighting.half_life_days = *d;
    }

    let session = Session::open(&options).wrap_err("cannot open data source")?;
    let code = dispatch(&session, &mut options, cli.command);
    session.close();
    code
}

fn dispatch(session: &Session, options: &mut AppOptions, command: Command) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();

    match command {
        Command::Posts { .. } => {
            for p in session.posts(&mut CliProgress)? {
                writeln!(stdout, "{}\t{}", p.title, p.url)?;
            }
        }

        Command::Decks { post } => {
            for name in session.deck_names(&post)? {
                writeln!(stdout, "{name}")?;
            }
        }

        Command::Analyze { post, deck, json, out, format, no_headers, code, .. } => {
            let Some(analysis) = session.analysis(&post, &deck)? else {
                eprintln!("No data for {deck:?} in {post}");
                return Ok(ExitCode::from(2));
            };
            let rows = analysis.results();

            if json {
                serde_json::to_writer_pretty(&mut stdout, &rows)?;
                writeln!(stdout)?;
            } else {
                print_table(&mut stdout, &analysis)?;
            }

            if let Some(path) = out {
                let export = &mut options.export;
                export.format = format.into();
                export.include_headers = !no_headers;
                export.set_path(&path.to_string_lossy());
                let written = store::export_results(&rows, export)?;
                eprintln!("Wrote {}", written.display());
            }

            if code {
                let class_id = class_from_deck_name(&deck).unwrap_or(DEFAULT_CLASS_ID);
                let names = analysis.editor().card_names();
                writeln!(stdout, "{}", session.build_deck_code(&names, class_id)?)?;
            }
        }

        Command::Code { class, file, mut names } => {
            if let Some(path) = file {
                let text = fs::read_to_string(&path)
                    .wrap_err_with(|| format!("cannot read {}", path.display()))?;
                names.extend(text.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from));
            }
            if names.is_empty() {
                return Err(eyre!("no card names given"));
            }
            writeln!(stdout, "{}", session.build_deck_code(&names, class)?)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_table<W: Write>(w: &mut W, analysis: &Analysis) -> io::Result<()> {
    writeln!(
        w,
        "{:>6} {:>6} {:>6} {:>4} {:>6} {:>4}  {:<6} {:>9} {:>9}  name",
        "avg", "var", "std", "rnd", "delta", "cnt", "slot", "remove", "add"
    )?;
    for c in &analysis.cards {
        let r = c.to_result();
        writeln!(
            w,
            "{:>6} {:>6} {:>6} {:>4} {:>6} {:>4}  {:<6} {:>9} {:>9}  {}",
            r.average,
            r.variance,
            r.std_dev,
            r.rounded_average,
            r.delta,
            r.adjusted_count,
            c.slot().label(),
            r.removability_score,
            r.addability_score,
            r.name
        )?;
    }
    writeln!(w, "Σ rounded {} → {} cards", analysis.round_sum, analysis.total())?;
    if !analysis.report.is_balanced() {
        writeln!(w, "({:+} off, no card could move)", analysis.report.remaining)?;
    }
    Ok(())
}
