//! Terminal front end for the sorting game.
//!
//! Reads one command per line from stdin and redraws the board after each:
//!
//! ```text
//! start                 deal (or re-deal) every item
//! pick <item> [bin]     pick up an item, from the pool or from a bin
//! drop <bin>            drop the picked-up item on a bin
//! cancel                put the picked-up item back
//! state                 redraw
//! help | quit
//! ```

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use garden_sort::games::vegetables::{vegetable_catalog, VegetableCategory};
use garden_sort::{
    Catalog, CategorizationEngine, CategoryId, GameConfig, GameState, ItemId, PenaltyScoring,
    RelocationScoring, ScoringPolicy, SessionPhase,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scoring {
    /// One point per correctly placed item.
    Relocation,
    /// Wrong placements cost `--penalty` points.
    Penalty,
}

#[derive(Parser, Debug)]
#[command(name = "garden-sort", about = "Sort items into their categories")]
struct Args {
    /// Catalog JSON file. Defaults to the built-in vegetable catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// RNG seed used when shuffling.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Shuffle the pool on every start.
    #[arg(long)]
    shuffle: bool,

    /// Scoring policy.
    #[arg(long, value_enum, default_value_t = Scoring::Relocation)]
    scoring: Scoring,

    /// Points lost per wrong placement with `--scoring penalty`.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32))]
    penalty: u32,

    /// Print the state as JSON instead of a text board.
    #[arg(long)]
    json: bool,
}

enum Command {
    Start,
    Pick(ItemId, Option<CategoryId>),
    Drop(CategoryId),
    Cancel,
    Show,
    Help,
    Quit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            Catalog::from_json(&json).with_context(|| format!("loading catalog {}", path.display()))?
        }
        None => vegetable_catalog(),
    };

    let mut config = GameConfig::new().with_seed(args.seed);
    if args.shuffle {
        config = config.shuffled();
    }

    let scoring: Box<dyn ScoringPolicy> = match args.scoring {
        Scoring::Relocation => Box::new(RelocationScoring),
        Scoring::Penalty => Box::new(PenaltyScoring::new(args.penalty)),
    };

    let engine = CategorizationEngine::with_scoring(catalog, config, scoring);
    run(engine, args.json)
}

fn run<S: ScoringPolicy>(mut engine: CategorizationEngine<S>, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    print_intro(&mut out, engine.catalog())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match parse_command(&line, engine.catalog()) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {err:#}")?;
                continue;
            }
        };

        let moves_before = engine.state().history().len();
        match command {
            Command::Start => engine.start(),
            Command::Pick(item, from) => engine.begin_move(item, from),
            Command::Drop(to) => engine.complete_move(to),
            Command::Cancel => engine.cancel_move(),
            Command::Show => {}
            Command::Help => {
                print_help(&mut out)?;
                continue;
            }
            Command::Quit => break,
        }

        let state = engine.current_state();
        if json {
            writeln!(out, "{}", serde_json::to_string(&state)?)?;
        } else {
            // Feedback belongs to the move that produced it.
            let moved = state.history().len() > moves_before;
            render(&mut out, &state, engine.catalog(), moved)?;
        }
    }

    Ok(())
}

fn parse_command(line: &str, catalog: &Catalog) -> Result<Option<Command>> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "start" | "restart" | "reset" => Command::Start,
        "pick" => {
            let item = words.next().context("usage: pick <item> [bin]")?;
            let item = parse_item(item, catalog)?;
            let from = words.next().map(|bin| parse_bin(bin, catalog)).transpose()?;
            Command::Pick(item, from)
        }
        "drop" => {
            let bin = words.next().context("usage: drop <bin>")?;
            Command::Drop(parse_bin(bin, catalog)?)
        }
        "cancel" => Command::Cancel,
        "state" | "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command {other:?} (try help)"),
    };
    Ok(Some(command))
}

/// Items are named by ID or, case-insensitively, by name.
fn parse_item(word: &str, catalog: &Catalog) -> Result<ItemId> {
    if let Ok(raw) = word.parse::<u32>() {
        return Ok(ItemId(raw));
    }
    catalog
        .items()
        .iter()
        .find(|item| item.name.eq_ignore_ascii_case(word))
        .map(|item| item.id)
        .with_context(|| format!("no item named {word:?}"))
}

fn parse_bin(word: &str, catalog: &Catalog) -> Result<CategoryId> {
    catalog
        .category_by_name(word)
        .with_context(|| format!("no bin named {word:?}"))
}

fn print_intro(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "Sort every item into its category. Type `start` to begin.")?;
    for category in catalog.categories() {
        let label = category
            .name
            .parse::<VegetableCategory>()
            .map_or(category.name.as_str(), |v| v.description());
        writeln!(out, "  {:<8} {}", category.name, label)?;
    }
    Ok(())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "start | pick <item> [bin] | drop <bin> | cancel | state | quit")
}

fn item_name(catalog: &Catalog, id: ItemId) -> String {
    catalog
        .item(id)
        .map_or_else(|| id.to_string(), |item| item.name.clone())
}

fn render(
    out: &mut impl Write,
    state: &GameState,
    catalog: &Catalog,
    show_feedback: bool,
) -> io::Result<()> {
    if state.phase() == SessionPhase::NotStarted {
        return writeln!(out, "Not started. Type `start`.");
    }

    writeln!(out, "Score: {}", state.score())?;
    writeln!(out, "Remaining: {}", state.remaining())?;

    for (category, contents) in state.bins() {
        let names: Vec<String> = contents
            .iter()
            .map(|&id| {
                let name = item_name(catalog, id);
                if state.is_misplaced(id, catalog) {
                    format!("{name} (wrong)")
                } else {
                    name
                }
            })
            .collect();
        writeln!(out, "  [{}] {}", catalog.category_name(category), names.join(", "))?;
    }

    let pool: Vec<String> = state
        .unplaced()
        .iter()
        .map(|&id| format!("{}:{}", id.raw(), item_name(catalog, id)))
        .collect();
    writeln!(out, "Available: {}", pool.join("  "))?;

    if let Some(pending) = state.pending_move() {
        writeln!(out, "Holding: {}", item_name(catalog, pending.item))?;
    }
    if let Some(feedback) = state.last_feedback().filter(|_| show_feedback) {
        writeln!(out, "{} {}", feedback.title(), feedback.message)?;
    }
    if state.phase() == SessionPhase::Complete {
        writeln!(out, "Game Over! Final Score: {}/{}", state.score(), state.max_score())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARROT: ItemId = ItemId(1);
    const TOMATO: ItemId = ItemId(2);

    fn root() -> CategoryId {
        VegetableCategory::Root.id()
    }

    fn fruit() -> CategoryId {
        VegetableCategory::Fruit.id()
    }

    fn parse(line: &str) -> Result<Option<Command>> {
        parse_command(line, &vegetable_catalog())
    }

    fn rendered(engine: &CategorizationEngine, show_feedback: bool) -> String {
        let mut out = Vec::new();
        render(&mut out, engine.state(), engine.catalog(), show_feedback).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn started() -> CategorizationEngine {
        let mut engine = CategorizationEngine::new(vegetable_catalog(), GameConfig::default());
        engine.start();
        engine
    }

    #[test]
    fn test_parse_verbs() {
        assert!(matches!(parse("start"), Ok(Some(Command::Start))));
        assert!(matches!(parse("RESET"), Ok(Some(Command::Start))));
        assert!(matches!(parse("cancel"), Ok(Some(Command::Cancel))));
        assert!(matches!(parse("state"), Ok(Some(Command::Show))));
        assert!(matches!(parse("help"), Ok(Some(Command::Help))));
        assert!(matches!(parse("quit"), Ok(Some(Command::Quit))));
        assert!(matches!(parse("   "), Ok(None)));
    }

    #[test]
    fn test_parse_pick_and_drop() {
        match parse("pick 1") {
            Ok(Some(Command::Pick(item, None))) => assert_eq!(item, CARROT),
            _ => panic!("expected pick from the pool"),
        }
        match parse("pick tomato Fruit") {
            Ok(Some(Command::Pick(item, Some(bin)))) => {
                assert_eq!(item, TOMATO);
                assert_eq!(bin, fruit());
            }
            _ => panic!("expected pick from a bin"),
        }
        match parse("drop root") {
            Ok(Some(Command::Drop(bin))) => assert_eq!(bin, root()),
            _ => panic!("expected drop"),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("dance").is_err());
        assert!(parse("pick").is_err());
        assert!(parse("pick pumpkin").is_err());
        assert!(parse("drop").is_err());
        assert!(parse("drop seed").is_err());
        assert!(parse("pick 1 seed").is_err());
    }

    #[test]
    fn test_penalty_flag_rejects_negative() {
        assert!(Args::try_parse_from(["garden-sort", "--scoring", "penalty", "--penalty", "-3"]).is_err());
        assert!(Args::try_parse_from(["garden-sort", "--penalty", "many"]).is_err());

        let args = Args::try_parse_from(["garden-sort", "--scoring", "penalty", "--penalty", "3"]).unwrap();
        assert_eq!(args.penalty, 3);
    }

    #[test]
    fn test_render_not_started() {
        let engine = CategorizationEngine::new(vegetable_catalog(), GameConfig::default());

        assert_eq!(rendered(&engine, true), "Not started. Type `start`.\n");
    }

    #[test]
    fn test_render_marks_misplaced() {
        let mut engine = started();
        engine.begin_move(CARROT, None);
        engine.complete_move(fruit());

        let text = rendered(&engine, true);

        assert!(text.contains("Score: 0"));
        assert!(text.contains("Remaining: 9"));
        assert!(text.contains("[fruit] Carrot (wrong)"));
        assert!(text.contains("Wrong Category Carrot doesn't belong in the fruit category. Try again!"));
        assert!(!text.contains("Game Over!"));
    }

    #[test]
    fn test_render_feedback_only_after_a_move() {
        let mut engine = started();
        engine.begin_move(CARROT, None);
        engine.complete_move(fruit());

        let text = rendered(&engine, false);

        assert!(text.contains("[fruit] Carrot (wrong)"));
        assert!(!text.contains("Wrong Category"));
    }

    #[test]
    fn test_render_completed_session() {
        let mut engine = started();
        let catalog = engine.catalog().clone();
        for item in catalog.items() {
            engine.begin_move(item.id, None);
            engine.complete_move(item.true_category);
        }

        let text = rendered(&engine, true);

        assert!(text.contains("Remaining: 0"));
        assert!(!text.contains("(wrong)"));
        assert!(text.contains("Game Over! Final Score: 10/10"));
    }
}
