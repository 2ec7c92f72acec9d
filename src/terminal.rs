//! Line-oriented terminal front end.
//!
//! Renders the engine's view after every operation and turns typed commands
//! into engine intents. Intents that the current phase forbids are never
//! forwarded; the player gets a hint instead.

use crate::games::monty_hall::{
    Dealer, Decision, Door, DoorContents, DoorView, GameEngine, Phase, RoundView,
};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// A typed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick a door.
    Select(Door),
    /// Keep the current pick.
    Keep,
    /// Switch to the other closed door.
    Switch,
    /// Start the next round.
    Again,
    /// Print statistics.
    Stats,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Parses one input line (case-insensitive).
    #[instrument]
    pub fn parse(input: &str) -> Option<Command> {
        let input = input.trim().to_lowercase();
        if let Ok(door) = input.parse::<Door>() {
            return Some(Command::Select(door));
        }
        match input.as_str() {
            "k" | "keep" | "stay" => Some(Command::Keep),
            "s" | "switch" => Some(Command::Switch),
            "r" | "again" | "reset" => Some(Command::Again),
            "stats" => Some(Command::Stats),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON object per render.
    Json,
}

/// Interactive session over any line reader and writer.
pub struct TerminalSession<D, R, W> {
    engine: GameEngine<D>,
    input: R,
    output: W,
    format: Format,
}

impl<D: Dealer, R: BufRead, W: Write> TerminalSession<D, R, W> {
    /// Creates a session around an existing engine.
    pub fn new(engine: GameEngine<D>, input: R, output: W, format: Format) -> Self {
        Self {
            engine,
            input,
            output,
            format,
        }
    }

    /// The engine driving this session.
    pub fn engine(&self) -> &GameEngine<D> {
        &self.engine
    }

    /// Plays until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Terminal session started");
        self.render()?;

        let mut line = String::new();
        loop {
            line.clear();
            let read = self.input.read_line(&mut line).context("Failed to read input")?;
            if read == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(command) => self.handle(command)?,
                None => self.say(&format!("Unknown command: {}", line.trim()))?,
            }
        }

        info!("Terminal session finished");
        self.write_stats()
    }

    /// Forwards one command to the engine, if the phase allows it.
    #[instrument(skip(self), fields(phase = %self.engine.phase()))]
    pub fn handle(&mut self, command: Command) -> Result<()> {
        let phase = self.engine.phase();
        match (command, phase) {
            (Command::Select(door), Phase::Choosing) => {
                self.engine.select_door(door)?;
            }
            (Command::Keep, Phase::Revealed) => {
                self.engine.decide(Decision::Keep)?;
            }
            (Command::Switch, Phase::Revealed) => {
                self.engine.decide(Decision::Switch)?;
            }
            (Command::Again, _) => self.engine.reset_round(),
            (Command::Stats, _) => return self.write_stats(),
            (Command::Quit, _) => return Ok(()),
            (command, phase) => {
                warn!(?command, %phase, "Command not available");
                return self.say(hint(phase));
            }
        }
        self.render()
    }

    fn say(&mut self, message: &str) -> Result<()> {
        let written = match self.format {
            Format::Text => writeln!(self.output, "{}", message),
            Format::Json => writeln!(self.output, "{}", serde_json::json!({ "message": message })),
        };
        written.context("Failed to write output")
    }

    fn render(&mut self) -> Result<()> {
        let view = self.engine.current_view();
        match self.format {
            Format::Text => {
                let text = render_view(&view);
                write!(self.output, "{}", text).context("Failed to write output")?;
                if view.phase == Phase::Resolved {
                    self.write_stats()?;
                }
                Ok(())
            }
            Format::Json => {
                let json = serde_json::to_string(&view).context("Failed to serialize view")?;
                writeln!(self.output, "{}", json).context("Failed to write output")
            }
        }
    }

    fn write_stats(&mut self) -> Result<()> {
        let snapshot = self.engine.stats_snapshot();
        match self.format {
            Format::Text => {
                if snapshot.stats().total_attempts() == 0 {
                    return Ok(());
                }
                writeln!(self.output, "---").context("Failed to write output")?;
                writeln!(
                    self.output,
                    "Success rate when keeping: {}",
                    snapshot.summary_line(Decision::Keep)
                )
                .context("Failed to write output")?;
                writeln!(
                    self.output,
                    "Success rate when switching: {}",
                    snapshot.summary_line(Decision::Switch)
                )
                .context("Failed to write output")
            }
            Format::Json => {
                let json = serde_json::to_string(&snapshot).context("Failed to serialize stats")?;
                writeln!(self.output, "{}", json).context("Failed to write output")
            }
        }
    }
}

fn hint(phase: Phase) -> &'static str {
    match phase {
        Phase::Choosing => "Pick a door first: 1, 2 or 3.",
        Phase::Revealed => "Keep (k) or switch (s)?",
        Phase::Resolved => "Round over. Type r to play again.",
    }
}

fn render_door(door: &DoorView) -> String {
    let face = match door.contents {
        None => format!(" {} ", door.door),
        Some(DoorContents::Goat) => "goat".to_string(),
        Some(DoorContents::Prize) => "PRIZE".to_string(),
    };
    if door.selected {
        format!("*[{}]*", face)
    } else {
        format!(" [{}] ", face)
    }
}

/// Text rendering of a round view.
pub fn render_view(view: &RoundView) -> String {
    let mut out = String::new();
    let doors = view.doors.iter().map(render_door).collect::<Vec<_>>().join(" ");
    out.push_str(&doors);
    out.push('\n');

    match (view.phase, view.player_choice, view.revealed_door, view.prize) {
        (Phase::Choosing, ..) => out.push_str("Pick a door (1, 2 or 3):\n"),
        (Phase::Revealed, Some(choice), Some(revealed), _) => {
            out.push_str(&format!("You picked door {}.\n", choice));
            out.push_str(&format!(
                "The host opens door {}: a goat. Keep (k) or switch (s)?\n",
                revealed
            ));
        }
        (Phase::Resolved, _, _, Some(prize)) => {
            if view.won() == Some(true) {
                out.push_str("You win!\n");
            } else {
                out.push_str(&format!("Too bad... the prize was behind door {}.\n", prize));
            }
            out.push_str("Type r to play again.\n");
        }
        _ => {}
    }
    out
}
