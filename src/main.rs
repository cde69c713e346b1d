//! Ember Keep - console host for the turn-resolution core
//!
//! Loads a world, then runs rounds, reading player commands from stdin (or a
//! script file) and printing the messages addressed to player actors.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use ember_keep::core::error::Result;
use ember_keep::core::types::ActorId;
use ember_keep::core::{Dice, EngineConfig};
use ember_keep::io::{Input, Message, Reader, Writer};
use ember_keep::simulation::run_round;
use ember_keep::world::load_world;

/// Run a text adventure world in the terminal
#[derive(Parser, Debug)]
#[command(name = "ember-keep")]
#[command(about = "Round-based multi-actor text adventure")]
struct Args {
    /// World description (TOML)
    #[arg(long, default_value = "data/world.toml")]
    world: PathBuf,

    /// Engine configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dice seed; overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many rounds
    #[arg(long)]
    rounds: Option<u64>,

    /// Read player commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Log filter, e.g. "ember_keep=debug"
    #[arg(long)]
    log: Option<String>,
}

/// Line source shared by every player actor
struct ConsoleReader {
    lines: Box<dyn BufRead>,
    /// Where the prompt (and echoed script lines) go
    prompt: Box<dyn Write>,
    echo: bool,
    exhausted: bool,
}

impl ConsoleReader {
    fn new(lines: Box<dyn BufRead>, prompt: Box<dyn Write>, echo: bool) -> Self {
        Self {
            lines,
            prompt,
            echo,
            exhausted: false,
        }
    }

    fn show_prompt(&mut self) {
        let shown = self
            .prompt
            .write_all(b"> ")
            .and_then(|()| self.prompt.flush());
        if let Err(err) = shown {
            tracing::warn!(%err, "Prompt flush failed");
        }
    }
}

impl Reader for ConsoleReader {
    fn is_active(&self, _actor: ActorId) -> bool {
        !self.exhausted
    }

    fn read_line(&mut self, _actor: ActorId) -> Input {
        if self.exhausted {
            return Input::Inactive;
        }
        self.show_prompt();

        let mut line = String::new();
        match self.lines.read_line(&mut line) {
            Ok(0) => {
                self.exhausted = true;
                Input::Inactive
            }
            Ok(_) => {
                if self.echo {
                    if let Err(err) = self.prompt.write_all(line.as_bytes()) {
                        tracing::warn!(%err, "Echo failed");
                    }
                }
                Input::Line(line)
            }
            Err(err) => {
                tracing::warn!(%err, "Input failed; treating players as inactive");
                self.exhausted = true;
                Input::Inactive
            }
        }
    }
}

/// Prints messages addressed to any of the player actors
struct ConsoleWriter {
    viewers: Vec<ActorId>,
}

impl Writer for ConsoleWriter {
    fn write(&mut self, message: Message) {
        if self.viewers.iter().any(|&id| message.audience.includes(id)) {
            println!("[{}] {}", message.category, message.text);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match &args.log {
        Some(directive) => tracing_subscriber::EnvFilter::new(directive),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ember_keep=info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, world = %args.world.display(), "Ember Keep starting");

    let mut world = load_world(&args.world, Dice::seeded(seed))?;
    let players: Vec<ActorId> = world.actors().filter(|a| a.is_player()).map(|a| a.id).collect();
    if players.is_empty() {
        tracing::warn!("World has no player actors; running AI only");
    }

    let mut reader = match &args.script {
        Some(path) => ConsoleReader::new(
            Box::new(BufReader::new(File::open(path)?)),
            Box::new(io::stdout()),
            true,
        ),
        None => ConsoleReader::new(
            Box::new(BufReader::new(io::stdin())),
            Box::new(io::stdout()),
            false,
        ),
    };
    let mut writer = ConsoleWriter { viewers: players.clone() };

    loop {
        if args.rounds.is_some_and(|max| world.round >= max) {
            break;
        }
        let report = run_round(&mut world, &config, &mut reader, &mut writer);
        for id in &report.fallen {
            tracing::info!(actor = %id, round = report.round, "Fallen");
        }

        let players_left = players
            .iter()
            .any(|&id| world.actor(id).is_some_and(|a| a.is_alive()));
        if !players.is_empty() && (reader.exhausted || !players_left) {
            break;
        }
        if players.is_empty() && args.rounds.is_none() {
            break;
        }
    }

    println!("Game over after {} rounds.", world.round);
    Ok(())
}
