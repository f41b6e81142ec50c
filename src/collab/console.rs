//! Terminal collaborator.
//!
//! Reads answers line by line from any `BufRead` and writes prompts,
//! pictures and messages to any `Write`. Input is trimmed; malformed or
//! out-of-range answers are re-prompted. End of input aborts the match
//! with `GameError::InputClosed`.

use std::io::{BufRead, Write};

use crate::board::{FaceUpRow, Rejection};
use crate::core::{
    DisplayMode, GameError, MatchConfig, PlayerConfig, PlayerId, Position, RulesMode, Side,
    MAX_PLAYERS, MIN_PLAYERS,
};
use crate::effects::AbilityOutcome;
use crate::engine::{MatchEvent, Table};
use crate::score::{RubyCount, ScoreLedger};

use super::{ChoiceKind, ChoicePrompt, ChoiceRequest, MatchObserver, PeekPresenter, PositionSelector};

const SEPARATOR_WIDTH: usize = 40;

/// Interactive collaborator over a line-based text stream.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    display: DisplayMode,
    /// The pending choice was rejected; skip its introduction.
    reprompt: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, display: DisplayMode) -> Self {
        Self {
            input,
            output,
            display,
            reprompt: false,
        }
    }

    #[must_use]
    pub fn display(&self) -> DisplayMode {
        self.display
    }

    pub fn set_display(&mut self, display: DisplayMode) {
        self.display = display;
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    // === Line input ===

    fn read_line(&mut self) -> Result<String, GameError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn prompt_line(&mut self, prompt: &str, allow_empty: bool) -> Result<String, GameError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let line = self.read_line()?;
            if !line.is_empty() || allow_empty {
                return Ok(line);
            }
            writeln!(self.output, "Please enter a value.")?;
        }
    }

    fn prompt_number(&mut self, prompt: &str, min: usize, max: usize) -> Result<usize, GameError> {
        loop {
            let line = self.prompt_line(prompt, false)?;
            match line.parse::<usize>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                Ok(_) => writeln!(self.output, "Enter a number between {min} and {max}.")?,
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    /// Prompt until a coordinate parses, or an empty line when skipping
    /// is allowed.
    fn prompt_position(
        &mut self,
        prompt: &str,
        allow_empty: bool,
        invalid: &str,
    ) -> Result<Option<Position>, GameError> {
        loop {
            let line = self.prompt_line(prompt, allow_empty)?;
            if line.is_empty() {
                return Ok(None);
            }
            match line.parse() {
                Ok(pos) => return Ok(Some(pos)),
                Err(_) => writeln!(self.output, "{invalid}")?,
            }
        }
    }

    // === Match setup ===

    pub fn choose_display_mode(&mut self) -> Result<DisplayMode, GameError> {
        writeln!(self.output, "Display Modes:")?;
        writeln!(self.output, "  1) Base board (5x5 grid)")?;
        writeln!(self.output, "  2) Expert display (row of revealed cards)")?;
        let choice = self.prompt_number("Choose display mode (1-2): ", 1, 2)?;
        Ok(if choice == 1 {
            DisplayMode::Base
        } else {
            DisplayMode::Expert
        })
    }

    pub fn choose_rules_mode(&mut self) -> Result<RulesMode, GameError> {
        writeln!(self.output, "Rules Modes:")?;
        writeln!(self.output, "  1) Base rules")?;
        writeln!(self.output, "  2) Expert rules")?;
        let choice = self.prompt_number("Choose rules mode (1-2): ", 1, 2)?;
        Ok(if choice == 1 {
            RulesMode::Base
        } else {
            RulesMode::Expert
        })
    }

    pub fn choose_player_count(&mut self) -> Result<usize, GameError> {
        let prompt = format!("Enter number of players ({MIN_PLAYERS}-{MAX_PLAYERS}): ");
        self.prompt_number(&prompt, MIN_PLAYERS, MAX_PLAYERS)
    }

    /// Offer the sides still free and take the chosen one out of `available`.
    pub fn choose_side(&mut self, available: &mut Vec<Side>) -> Result<Side, GameError> {
        writeln!(self.output, "Available sides:")?;
        for (i, side) in available.iter().enumerate() {
            writeln!(self.output, "  {}) {side}", i + 1)?;
        }
        let prompt = format!("Select a side (1-{}): ", available.len());
        let selection = self.prompt_number(&prompt, 1, available.len())?;
        Ok(available.remove(selection - 1))
    }

    /// Ask for modes and seat the players, in the order the table does it.
    pub fn configure(&mut self, config: &mut MatchConfig) -> Result<(), GameError> {
        config.display = self.choose_display_mode()?;
        config.rules = self.choose_rules_mode()?;
        self.display = config.display;

        let count = self.choose_player_count()?;
        let mut available = Side::ALL.to_vec();
        config.players.clear();
        for seat in 1..=count {
            let name = self.prompt_line(&format!("Enter name for player {seat}: "), false)?;
            let side = self.choose_side(&mut available)?;
            config.players.push(PlayerConfig::new(name, side));
        }
        Ok(())
    }

    // === Reporting ===

    fn show_table(&mut self, table: &Table) -> Result<(), GameError> {
        match self.display {
            DisplayMode::Base => write!(self.output, "{}", table.board())?,
            DisplayMode::Expert => write!(self.output, "{}", FaceUpRow(table.board()))?,
        }
        for player in table.roster().iter() {
            writeln!(self.output, "{player}")?;
        }
        Ok(())
    }

    fn show_standings(&mut self, table: &Table) -> Result<(), GameError> {
        writeln!(self.output, "Rubies standings (least to most):")?;
        for player in ScoreLedger::standings(table.roster().players()) {
            writeln!(self.output, "  {}: {}", player.name(), RubyCount(player.rubies()))?;
        }
        Ok(())
    }

    fn show_final(&mut self, table: &Table, winners: &[PlayerId]) -> Result<(), GameError> {
        writeln!(self.output, "\n=== Final Results ===")?;
        for player in table.roster().iter() {
            writeln!(self.output, "{}: {}", player.name(), RubyCount(player.rubies()))?;
        }
        self.show_standings(table)?;

        match winners {
            [] => writeln!(self.output, "No winner could be determined.")?,
            [only] => {
                let player = table.player(*only);
                writeln!(
                    self.output,
                    "Overall winner: {} with {}.",
                    player.name(),
                    RubyCount(player.rubies())
                )?;
            }
            tied => {
                writeln!(self.output, "Overall winners (tie):")?;
                for id in tied {
                    let player = table.player(*id);
                    writeln!(self.output, "  {} with {}", player.name(), RubyCount(player.rubies()))?;
                }
            }
        }
        Ok(())
    }

    fn show_ability(&mut self, outcome: AbilityOutcome) -> Result<(), GameError> {
        match outcome {
            AbilityOutcome::Swapped { from, to } => writeln!(self.output, "Swapped {from} with {to}.")?,
            AbilityOutcome::NoSwapTarget => {
                writeln!(self.output, "No valid adjacent cards for octopus to swap.")?
            }
            AbilityOutcome::Hid(pos) => writeln!(self.output, "Card {pos} turned face down.")?,
            AbilityOutcome::NoPreviousCard => writeln!(
                self.output,
                "Penguin ability requires a previous card; no action taken."
            )?,
            AbilityOutcome::NothingToHide => {
                writeln!(self.output, "No other face-up cards to flip down.")?
            }
            AbilityOutcome::Blocked(pos) => {
                writeln!(self.output, "Blocked {pos} for the next player.")?
            }
            AbilityOutcome::NothingToBlock => writeln!(self.output, "No face-down card to block.")?,
            AbilityOutcome::Declined => {}
            AbilityOutcome::ExtraFlip => {
                writeln!(self.output, "Crab ability: flip another card immediately.")?
            }
            AbilityOutcome::SkipNext => {
                writeln!(self.output, "Turtle ability: the next player will be skipped.")?
            }
        }
        Ok(())
    }
}

fn join_positions(positions: &[Position]) -> String {
    positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl<R: BufRead, W: Write> PositionSelector for Console<R, W> {
    fn select_position(
        &mut self,
        table: &Table,
        player: PlayerId,
        _block_active: bool,
    ) -> Result<Position, GameError> {
        let prompt = format!("{}, choose a card (e.g., B3): ", table.player(player).name());
        loop {
            if let Some(pos) = self.prompt_position(
                &prompt,
                false,
                "Invalid format. Use a letter A-E followed by a number 1-5.",
            )? {
                return Ok(pos);
            }
        }
    }

    fn selection_rejected(
        &mut self,
        _table: &Table,
        _player: PlayerId,
        rejection: Rejection,
    ) -> Result<(), GameError> {
        writeln!(self.output, "{rejection}")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> ChoicePrompt for Console<R, W> {
    fn choose(&mut self, _table: &Table, request: &ChoiceRequest) -> Result<Option<Position>, GameError> {
        let reprompt = std::mem::take(&mut self.reprompt);
        let options = join_positions(&request.candidates);

        let prompt = match request.kind {
            ChoiceKind::Swap { .. } => {
                if !reprompt {
                    writeln!(self.output, "Octopus ability: swap with an adjacent card.")?;
                }
                writeln!(self.output, "Adjacent options: {options}")?;
                "Choose card to swap with: "
            }
            ChoiceKind::Hide => {
                if !reprompt {
                    writeln!(
                        self.output,
                        "Penguin ability: optionally turn one face-up card face down."
                    )?;
                }
                writeln!(self.output, "Available face-up cards: {options}")?;
                "Enter card to flip down (or press ENTER to skip): "
            }
            ChoiceKind::Block => {
                if !reprompt {
                    writeln!(
                        self.output,
                        "Walrus ability: block a face-down card for the next player."
                    )?;
                }
                "Enter card to block (or press ENTER to skip): "
            }
        };

        let answer = self.prompt_position(prompt, request.allow_skip, "Invalid coordinate.")?;
        if answer.is_none() {
            match request.kind {
                ChoiceKind::Hide => writeln!(self.output, "Penguin action skipped.")?,
                ChoiceKind::Block => writeln!(self.output, "No card blocked.")?,
                ChoiceKind::Swap { .. } => {}
            }
        }
        Ok(answer)
    }

    fn choice_rejected(
        &mut self,
        request: &ChoiceRequest,
        rejection: Rejection,
    ) -> Result<(), GameError> {
        self.reprompt = true;
        match (request.kind, rejection) {
            (ChoiceKind::Swap { .. }, Rejection::NotOffered(_)) => {
                writeln!(self.output, "That card is not adjacent.")?
            }
            (ChoiceKind::Block, Rejection::AlreadyFaceUp(_)) => {
                writeln!(self.output, "Card is already face up. Choose a face-down card.")?
            }
            (ChoiceKind::Block, _) => writeln!(self.output, "Cannot block that card.")?,
            _ => writeln!(self.output, "{rejection}")?,
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> PeekPresenter for Console<R, W> {
    fn present_peek(
        &mut self,
        table: &Table,
        player: PlayerId,
        _positions: &[Position; 3],
    ) -> Result<(), GameError> {
        writeln!(
            self.output,
            "\n{}, peek at the three cards in front of you.",
            table.player(player).name()
        )?;
        write!(self.output, "{}", table.board())?;
        self.prompt_line("Press ENTER when you are done peeking...", true)?;
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> MatchObserver for Console<R, W> {
    fn observe(&mut self, table: &Table, event: &MatchEvent) -> Result<(), GameError> {
        let name = |id: PlayerId| table.player(id).name().to_string();

        match event {
            MatchEvent::RoundStarted { round } => writeln!(self.output, "\n=== Round {round} ===")?,
            MatchEvent::Peeked { .. } => {}
            MatchEvent::TurnSkipped { player } => writeln!(
                self.output,
                "{} is skipped due to the turtle effect.",
                name(*player)
            )?,
            MatchEvent::Exhausted { player } => writeln!(
                self.output,
                "{} has no cards to flip and is eliminated.",
                name(*player)
            )?,
            MatchEvent::BlockInEffect { player, .. } => {
                writeln!(self.output, "{} must avoid the blocked card.", name(*player))?
            }
            MatchEvent::BlockLifted { .. } => writeln!(
                self.output,
                "Only the blocked card is left face down; the block is lifted."
            )?,
            MatchEvent::Revealed { .. } => self.show_table(table)?,
            MatchEvent::Mismatch { player } => writeln!(
                self.output,
                "{} revealed a mismatch and is out of this round.",
                name(*player)
            )?,
            MatchEvent::Ability { outcome, .. } => self.show_ability(*outcome)?,
            MatchEvent::ExtraFlipForfeited { .. } => writeln!(
                self.output,
                "No face-down cards remain; the extra flip is lost."
            )?,
            MatchEvent::RoundWon { player, ruby } => {
                match ruby {
                    Some(ruby) => writeln!(self.output, "{} receives {ruby}!", name(*player))?,
                    None => writeln!(self.output, "No rubies left to award.")?,
                }
                self.show_standings(table)?;
            }
            MatchEvent::NoRoundWinner => {
                writeln!(self.output, "No active players remained to claim rubies.")?;
                self.show_standings(table)?;
            }
            MatchEvent::MatchOver { winners } => self.show_final(table, winners)?,
        }
        Ok(())
    }
}
