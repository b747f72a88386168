//! Starlit Stable - Entry Point
//!
//! A line-oriented shell around the session actor: reads player intents
//! from stdin, submits them through the session's command queue, and prints
//! read-only snapshots. All presentation here is deliberately plain text;
//! the simulation itself lives in the library.

use starlit_stable::core::config::{set_config, SimulationConfig};
use starlit_stable::core::error::Result;
use starlit_stable::creature::coat::CoatColor;
use starlit_stable::llm::client::LlmClient;
use starlit_stable::llm::naming::generate_name;
use starlit_stable::session::{SessionHandle, SessionSnapshot};
use starlit_stable::sim::action::ActionKind;
use starlit_stable::sim::log::Sender;
use starlit_stable::sim::state::SimulationState;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Care for a celestial steed from your terminal
#[derive(Parser, Debug)]
#[command(name = "starlit-stable")]
#[command(about = "Virtual-pet simulation with an LLM-driven companion")]
struct Args {
    /// Name for the creature (generated or defaulted when omitted)
    #[arg(long)]
    name: Option<String>,

    /// Path to a TOML config overriding the default pacing
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run without the text-generation client; the creature stays silent
    #[arg(long)]
    offline: bool,

    /// Seed for the coat pick (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("starlit_stable=info")
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        let loaded = SimulationConfig::load(path)?;
        if let Err(msg) = loaded.validate() {
            eprintln!("Invalid config {}: {}", path.display(), msg);
            std::process::exit(1);
        }
        let _ = set_config(loaded);
    }

    tracing::info!("Starlit Stable starting...");

    // Create the async runtime for the session actor and LLM calls
    let rt = Runtime::new()?;
    let _guard = rt.enter();

    // Try to create the LLM client (optional - works without it)
    let client = if args.offline {
        None
    } else {
        LlmClient::from_env().ok().map(Arc::new)
    };
    if client.is_none() {
        tracing::warn!("LLM_API_KEY not set or --offline given - the creature will not reply");
    }

    // Coat and name are fixed at creation
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let coat = CoatColor::random(&mut rng);

    let name = match args.name {
        Some(name) => name,
        None => match &client {
            Some(client) => rt.block_on(generate_name(client)),
            None => "Stardust".to_string(),
        },
    };

    let state = SimulationState::new(name.as_str(), coat);
    let handle = SessionHandle::spawn(state, client);

    println!();
    println!("=== STARLIT STABLE ===");
    println!("{} the celestial steed has arrived ({}).", name, coat);
    println!();
    println!("Commands:");
    println!("  feed / f        - Offer a shiny apple");
    println!("  groom / g       - Brush the coat");
    println!("  train / t       - Training session (needs energy)");
    println!("  rest / r        - Take a nap");
    println!("  say <text>      - Talk to your creature");
    println!("  status / s      - Show stats and mood");
    println!("  log / l         - Show the message log");
    println!("  quit / q        - Leave the stable");
    println!();

    // Main shell loop
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        let action = match input {
            "quit" | "q" => break,
            "feed" | "f" => Some(ActionKind::Feed),
            "groom" | "g" => Some(ActionKind::Groom),
            "train" | "t" => Some(ActionKind::Train),
            "rest" | "r" => Some(ActionKind::Rest),
            "status" | "s" => {
                let snap = rt.block_on(handle.snapshot())?;
                display_status(&snap);
                None
            }
            "log" | "l" => {
                let snap = rt.block_on(handle.snapshot())?;
                display_log(&snap);
                None
            }
            _ => {
                if let Some(text) = input.strip_prefix("say ") {
                    let text = text.trim();
                    if text.is_empty() {
                        println!("Usage: say <text>");
                        None
                    } else {
                        Some(ActionKind::Chat(text.to_string()))
                    }
                } else {
                    println!("Unknown command. Available: feed, groom, train, rest, say <text>, status, log, quit");
                    None
                }
            }
        };

        if let Some(action) = action {
            handle.perform(action)?;
            let snap = rt.block_on(handle.snapshot())?;
            if let Some(last) = snap.messages.last() {
                println!("{}", format_message(&snap, last.sender, &last.text));
            }
            if snap.awaiting_reaction {
                println!("({} is composing a reply...)", snap.stats.name);
            }
        }
    }

    let snap = rt.block_on(handle.snapshot());
    handle.shutdown();
    if let Ok(snap) = snap {
        println!(
            "\nGoodbye! {} waves a shimmering farewell on day {}, {} messages exchanged.",
            snap.stats.name,
            snap.day,
            snap.messages.len()
        );
    }
    Ok(())
}

/// Print a one-screen status summary
fn display_status(snap: &SessionSnapshot) {
    let s = &snap.stats;
    println!();
    println!(
        "--- Day {} - {} | {} ({}) ---",
        snap.day, snap.time_of_day, s.name, s.coat_color
    );
    println!("  Level {}  XP {}  Mood: {}", s.level(), s.xp, snap.mood);
    println!(
        "  Hunger {:>5.1}  Hygiene {:>5.1}  Energy {:>5.1}  Happiness {:>5.1}  Bond {:>5.1}",
        s.hunger, s.hygiene, s.energy, s.happiness, s.bond
    );
    if snap.busy {
        println!("  (busy - still settling from the last action)");
    }
    if snap.awaiting_reaction {
        println!("  ({} is composing a reply...)", s.name);
    }
    println!();
}

/// Print the full message log
fn display_log(snap: &SessionSnapshot) {
    println!();
    for msg in &snap.messages {
        println!("{}", format_message(snap, msg.sender, &msg.text));
    }
    println!();
}

fn format_message(snap: &SessionSnapshot, sender: Sender, text: &str) -> String {
    match sender {
        Sender::User => format!("[you] {}", text),
        Sender::Creature => format!("[{}] {}", snap.stats.name, text),
        Sender::System => format!("  * {}", text),
    }
}
