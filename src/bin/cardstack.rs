use std::path::PathBuf;

use anyhow::Context as _;
use cardstack::{
    CardStackLayout, Deck, IndexPath, ItemSizeProvider, LayoutConfig, Rect, SectionStateProvider,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cardstack", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a deck and print the snapshot as JSON.
    Layout(LayoutArgs),
    /// Print the elements of a deck's layout that overlap a rectangle.
    Query(QueryArgs),
    /// Print the exit transition of one card (`null` when delete animations are off).
    Exit(ExitArgs),
}

#[derive(Parser, Debug)]
struct DeckArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layout config JSON overriding the deck's own config.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    deck: DeckArgs,

    /// Write the snapshot here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct QueryArgs {
    #[command(flatten)]
    deck: DeckArgs,

    /// Query rectangle as `x,y,width,height`.
    #[arg(long, value_parser = parse_rect)]
    rect: Rect,
}

#[derive(Parser, Debug)]
struct ExitArgs {
    #[command(flatten)]
    deck: DeckArgs,

    /// Section of the removed card.
    #[arg(long)]
    section: usize,

    /// Item index of the removed card.
    #[arg(long)]
    item: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Query(args) => cmd_query(args),
        Command::Exit(args) => cmd_exit(args),
    }
}

fn load_deck(args: &DeckArgs) -> anyhow::Result<(Deck, CardStackLayout)> {
    let mut deck = Deck::from_path(&args.in_path)?;
    if let Some(path) = &args.config {
        deck.config = LayoutConfig::from_path(path)?;
    }
    let engine = deck
        .layout()
        .with_context(|| format!("lay out deck '{}'", args.in_path.display()))?;
    Ok((deck, engine))
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let (_deck, engine) = load_deck(&args.deck)?;
    let json = serde_json::to_string_pretty(engine.snapshot())?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write snapshot '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_query(args: QueryArgs) -> anyhow::Result<()> {
    let (_deck, engine) = load_deck(&args.deck)?;
    let mut found = engine.elements_intersecting(args.rect);
    found.sort_by_key(|e| (e.section, e.kind.display_rank()));
    println!("{}", serde_json::to_string_pretty(&found)?);
    Ok(())
}

fn cmd_exit(args: ExitArgs) -> anyhow::Result<()> {
    let (deck, engine) = load_deck(&args.deck)?;
    let path = IndexPath::new(args.section, args.item);
    let transition = engine.exit_frame(
        path,
        deck.current_state(path.section),
        deck.size_for_item(path),
    );
    println!("{}", serde_json::to_string_pretty(&transition)?);
    Ok(())
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in rect '{s}': {e}"))?;
    match parts.as_slice() {
        [x, y, w, h] => Ok(Rect::new(*x, *y, x + w, y + h)),
        _ => Err(format!("expected x,y,width,height, got '{s}'")),
    }
}
