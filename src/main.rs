//! verbum: read and search chaptered texts from the terminal.
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use verbum::corpus::{Corpus, CorpusAccess};
use verbum::lookup::{lookup_reference, passage, Passage, Resolved};
use verbum::render::{render_page, render_passage, RenderOptions};
use verbum::search::{lookup, paginate, search, Answer};
use verbum::session::Session;
use verbum::{config, navigator};

#[derive(Parser)]
#[command(name = "verbum")]
#[command(about = "Scripture at your fingertips", long_about = None)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Corpus JSON file (overrides VERBUM_CORPUS and verbum.toml)
    #[arg(long, global = true, value_name = "PATH")]
    corpus: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Number verses with superscript verse numbers
    #[arg(long, global = true)]
    superscript: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log only errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show a passage, e.g. `verbum read john 3:16-18`
    Read {
        /// Reference words
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },
    /// Show the passage after a reference
    Next {
        /// Reference words
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },
    /// Show the passage before a reference
    Prev {
        /// Reference words
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },
    /// Find verses containing a word or phrase
    Search {
        /// Words to look for
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
        /// Restrict to one book
        #[arg(long, short)]
        book: Option<String>,
        /// Results page (starts at 1)
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Results per page (defaults to the configured page size)
        #[arg(long)]
        per_page: Option<usize>,
    },
    /// Read a reference, or search for it as a keyword if it is not one
    Lookup {
        /// Reference or keyword
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Results page (starts at 1)
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Results per page (defaults to the configured page size)
        #[arg(long)]
        per_page: Option<usize>,
    },
    /// List books and their chapter counts
    Books,
    /// Interactive reader (the default)
    Repl,
}

#[derive(Clone, Copy)]
enum Step {
    Forward,
    Backward,
}

#[allow(clippy::too_many_lines)]
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let mut cfg = config::Config::load();
    if let Some(path) = &args.corpus {
        cfg.corpus_path = path.to_string_lossy().into_owned();
    }

    let path = cfg.corpus_path();
    let corpus =
        Corpus::open(&path).with_context(|| format!("loading corpus {}", path.display()))?;

    let options = RenderOptions {
        color: cfg.color && !args.no_color && io::stdout().is_terminal(),
        superscript: args.superscript,
    };

    match args.command.unwrap_or(Command::Repl) {
        Command::Read { reference } => {
            let (resolved, passage) = lookup_reference(&corpus, &reference.join(" "))?;
            report_correction(&resolved);
            print_passage(&passage, args.json, options)
        }
        Command::Next { reference } => {
            navigate(&corpus, &reference.join(" "), Step::Forward, args.json, options)
        }
        Command::Prev { reference } => {
            navigate(&corpus, &reference.join(" "), Step::Backward, args.json, options)
        }
        Command::Search {
            words,
            book,
            page,
            per_page,
        } => {
            let query = words.join(" ");
            let hits = search(&corpus, &query, book.as_deref(), cfg.search_limit)?;
            let page = paginate(
                &query,
                hits,
                page,
                per_page.unwrap_or(cfg.page_size),
                cfg.search_limit,
            );
            if args.json {
                print_json(&page)
            } else {
                print_stdout(&render_page(&page, options.color))
            }
        }
        Command::Lookup {
            query,
            page,
            per_page,
        } => {
            let answer = lookup(
                &corpus,
                &query.join(" "),
                page,
                per_page.unwrap_or(cfg.page_size),
                cfg.search_limit,
            )?;
            if args.json {
                return print_json(&answer);
            }
            match answer {
                Answer::Reference { result, .. } => print_passage(&result, false, options),
                Answer::Keyword(page) => print_stdout(&render_page(&page, options.color)),
            }
        }
        Command::Books => {
            let books: Vec<serde_json::Value> = corpus
                .section_names()
                .into_iter()
                .map(|name| {
                    serde_json::json!({
                        "book": name,
                        "chapters": corpus.subsection_count(name).unwrap_or(0),
                    })
                })
                .collect();
            if args.json {
                return print_json(&books);
            }
            let listing: Vec<String> = books
                .iter()
                .map(|b| format!("{} ({})", b["book"].as_str().unwrap_or_default(), b["chapters"]))
                .collect();
            print_stdout(&listing.join("\n"))
        }
        Command::Repl => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            Session::new(&corpus, options).run(stdin.lock(), &mut stdout)?;
            Ok(())
        }
    }
}

fn init_logging(args: &Args) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn navigate(
    corpus: &Corpus,
    raw: &str,
    step: Step,
    json: bool,
    options: RenderOptions,
) -> Result<()> {
    let (resolved, _) = lookup_reference(corpus, raw)?;
    report_correction(&resolved);
    let target = match step {
        Step::Forward => navigator::next(corpus, &resolved.locator),
        Step::Backward => navigator::prev(corpus, &resolved.locator),
    }?;
    print_passage(&passage(corpus, &target)?, json, options)
}

fn report_correction(resolved: &Resolved) {
    if let Some(typed) = &resolved.corrected_from {
        eprintln!(
            "Interpreting book as {} (entered '{typed}')",
            resolved.locator.section
        );
    }
}

fn print_passage(passage: &Passage, json: bool, options: RenderOptions) -> Result<()> {
    if json {
        print_json(passage)
    } else {
        print_stdout(&render_passage(passage, options))
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    print_stdout(&json)
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{text}").and_then(|()| stdout.flush()) {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}
