use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use docsearch::{
    group_by_section, search_scored, Catalog, DocEntry, LinkTarget, NavigationAction,
    SearchEngine, SearchEvent, SearchKey, SearchOptions, EMPTY_RESULTS_MESSAGE,
};

mod cli;
use cli::display::{self, BOLD, DIM};
use cli::{Cli, Commands};

fn init_tracing(verbose: u8) {
    let filter = if let Ok(env) = std::env::var("DOCSEARCH_LOG") {
        EnvFilter::new(env)
    } else {
        match verbose {
            0 => EnvFilter::new("docsearch=warn"),
            1 => EnvFilter::new("docsearch=debug"),
            _ => EnvFilter::new("docsearch=trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Search {
            query,
            catalog,
            limit,
            json,
        } => run_search(catalog.as_deref(), &query, limit, json),
        Commands::Catalog { catalog, json } => run_catalog(catalog.as_deref(), json),
        Commands::Repl { catalog } => run_repl(catalog.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonHit<'a> {
    title: &'a str,
    section: &'a str,
    url: &'a str,
    score: u32,
}

fn run_search(path: Option<&Path>, query: &str, limit: usize, json: bool) -> Result<()> {
    let catalog = load_catalog(path)?;
    let options = SearchOptions::with_limit(limit);
    let hits = search_scored(&catalog, query, &options);

    if json {
        let out: Vec<JsonHit<'_>> = hits
            .iter()
            .filter_map(|hit| {
                catalog.get(hit.doc_id).map(|entry| JsonHit {
                    title: &entry.title,
                    section: &entry.section,
                    url: &entry.url,
                    score: hit.score,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    display::section_top(&format!("SEARCH \"{}\"", query));
    if hits.is_empty() {
        display::row(&format!("  {}", display::themed(display::GRAY, &[], EMPTY_RESULTS_MESSAGE)));
        display::section_bot();
        return Ok(());
    }

    // Keep rank order within each section, sections in order of first hit.
    let mut sections: Vec<(&str, Vec<(u32, &DocEntry)>)> = Vec::new();
    for hit in &hits {
        let Some(entry) = catalog.get(hit.doc_id) else {
            continue;
        };
        match sections.iter_mut().find(|group| group.0 == entry.section) {
            Some((_, items)) => items.push((hit.score, entry)),
            None => sections.push((entry.section.as_str(), vec![(hit.score, entry)])),
        }
    }

    for (i, (section, items)) in sections.iter().enumerate() {
        if i > 0 {
            display::section_mid(section);
        } else {
            display::row(&format!(" {}", display::themed(display::CYAN, &[BOLD], section)));
        }
        for (score, entry) in items {
            display::row(&format!(
                " {} {} {}",
                display::score_value(*score),
                display::link_badge(entry.is_anchor()),
                display::truncate(&entry.title, 60),
            ));
            display::row(&format!(
                "        {}",
                display::themed(display::GRAY, &[DIM], &display::truncate(&entry.url, 70))
            ));
        }
    }
    display::section_bot();
    println!("{} of {} entries matched", hits.len(), catalog.len());
    Ok(())
}

fn run_catalog(path: Option<&Path>, json: bool) -> Result<()> {
    let catalog = load_catalog(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
        return Ok(());
    }

    for (i, section) in catalog.sections().into_iter().enumerate() {
        if i == 0 {
            display::section_top(section);
        } else {
            display::section_mid(section);
        }
        for entry in catalog.entries().iter().filter(|e| e.section == section) {
            display::row(&format!(
                " {} {}",
                display::link_badge(entry.is_anchor()),
                display::pad_right(&display::truncate(&entry.title, 40), 42)
                    + &display::themed(display::GRAY, &[DIM], &display::truncate(&entry.tags, 34)),
            ));
        }
    }
    display::section_bot();
    println!("{} entries", catalog.len());
    Ok(())
}

/// One line of REPL input.
enum ReplCommand<'a> {
    Key(SearchKey),
    Query(&'a str),
    Quit,
}

fn parse_repl_line(line: &str) -> ReplCommand<'_> {
    match line.trim() {
        ":down" | ":j" => ReplCommand::Key(SearchKey::Next),
        ":up" | ":k" => ReplCommand::Key(SearchKey::Previous),
        ":enter" => ReplCommand::Key(SearchKey::Confirm),
        ":esc" => ReplCommand::Key(SearchKey::Dismiss),
        ":quit" | ":q" => ReplCommand::Quit,
        _ => ReplCommand::Query(line),
    }
}

fn run_repl(path: Option<&Path>) -> Result<()> {
    let mut engine = SearchEngine::new(load_catalog(path)?);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!(
        "{}",
        display::themed(
            display::GRAY,
            &[DIM],
            "type a query; :down :up :enter :esc move the cursor, :quit exits"
        )
    );

    loop {
        print!("{} ", display::themed(display::BLUE, &[BOLD], "/"));
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);

        let action = match parse_repl_line(line) {
            ReplCommand::Quit => break,
            ReplCommand::Query(raw) => engine.handle(SearchEvent::QueryChanged(raw.to_string())),
            ReplCommand::Key(key) => engine.handle(key.to_event()),
        };

        match action {
            Some(action) => print_action(&action),
            None => print_panel(&engine),
        }
    }
    Ok(())
}

fn print_action(action: &NavigationAction) {
    let verb = match action {
        NavigationAction::ScrollTo { .. } => "scroll to",
        NavigationAction::OpenExternal { .. } => "open",
    };
    println!(
        "{} {}",
        display::themed(display::GREEN, &[BOLD], verb),
        action.target_url()
    );
}

fn print_panel(engine: &SearchEngine) {
    let session = engine.session();
    if !session.is_open() {
        println!("{}", display::themed(display::GRAY, &[DIM], "(closed)"));
        return;
    }
    if session.results().is_empty() {
        println!("{}", display::themed(display::GRAY, &[], EMPTY_RESULTS_MESSAGE));
        return;
    }
    for group in group_by_section(session.results(), session.active_index()) {
        println!("{}", display::themed(display::CYAN, &[BOLD], group.section));
        for item in group.items {
            println!(
                "{} {} {}",
                display::cursor(item.active),
                display::link_badge(item.target == LinkTarget::SameContext),
                item.title
            );
        }
    }
}
