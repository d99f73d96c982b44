//! Player rosters and the mode menu that builds them.

use crate::error::{ConfigError, ConfigErrorKind};
use crate::{Controller, Player, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered list of 2 or 3 players with distinct symbols.
///
/// Fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RosterData")]
pub struct Roster {
    players: Vec<Player>,
}

/// Unchecked wire form of [`Roster`].
#[derive(Deserialize)]
struct RosterData {
    players: Vec<Player>,
}

impl TryFrom<RosterData> for Roster {
    type Error = ConfigError;

    fn try_from(data: RosterData) -> Result<Self, Self::Error> {
        Roster::new(data.players)
    }
}

impl Roster {
    /// Validates and wraps a list of players.
    ///
    /// # Errors
    ///
    /// Returns `RosterSize` unless there are 2 or 3 players,
    /// `BlankSymbol` for a whitespace mark and `DuplicateSymbol` if two
    /// players share a mark.
    #[instrument]
    pub fn new(players: Vec<Player>) -> Result<Self, ConfigError> {
        if !(2..=3).contains(&players.len()) {
            return Err(ConfigError::new(ConfigErrorKind::RosterSize(players.len())));
        }
        for (i, player) in players.iter().enumerate() {
            if player.symbol().as_char().is_whitespace() {
                return Err(ConfigError::new(ConfigErrorKind::BlankSymbol(
                    *player.symbol(),
                )));
            }
            if players[..i].iter().any(|p| p.symbol() == player.symbol()) {
                return Err(ConfigError::new(ConfigErrorKind::DuplicateSymbol(
                    *player.symbol(),
                )));
            }
        }
        Ok(Self { players })
    }

    /// Builds a roster handing out `X`, `O`, `Z` in order.
    ///
    /// # Errors
    ///
    /// Returns `RosterSize` unless 2 or 3 controllers are given.
    #[instrument]
    pub fn with_default_symbols(controllers: &[Controller]) -> Result<Self, ConfigError> {
        if !(2..=Symbol::DEFAULTS.len()).contains(&controllers.len()) {
            return Err(ConfigError::new(ConfigErrorKind::RosterSize(
                controllers.len(),
            )));
        }
        let players = controllers
            .iter()
            .zip(Symbol::DEFAULTS)
            .map(|(controller, symbol)| Player::new(symbol, *controller))
            .collect();
        Self::new(players)
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if there are no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Gets a player by index.
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Finds the roster index of a symbol.
    pub fn index_of(&self, symbol: Symbol) -> Option<usize> {
        self.players.iter().position(|p| *p.symbol() == symbol)
    }
}

/// The three game setups offered by the menu.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum GameMode {
    /// Two humans.
    #[strum(serialize = "User vs User")]
    HumanVsHuman,
    /// Human first, computer second.
    #[strum(serialize = "User vs Computer")]
    HumanVsComputer,
    /// Three players, each human or computer.
    #[strum(serialize = "Multi-Player (3 players)")]
    ThreePlayer,
}

impl GameMode {
    /// Menu number (1-3).
    pub fn number(self) -> u8 {
        match self {
            GameMode::HumanVsHuman => 1,
            GameMode::HumanVsComputer => 2,
            GameMode::ThreePlayer => 3,
        }
    }

    /// Players this mode seats.
    pub fn player_count(self) -> usize {
        match self {
            GameMode::HumanVsHuman | GameMode::HumanVsComputer => 2,
            GameMode::ThreePlayer => 3,
        }
    }

    /// Controllers fixed by the mode, or `None` when each player is chosen
    /// individually.
    pub fn preset_controllers(self) -> Option<Vec<Controller>> {
        match self {
            GameMode::HumanVsHuman => Some(vec![Controller::Human, Controller::Human]),
            GameMode::HumanVsComputer => Some(vec![Controller::Human, Controller::Computer]),
            GameMode::ThreePlayer => None,
        }
    }

    /// Builds the roster for this mode with default symbols.
    ///
    /// `assigned` is only consulted for `ThreePlayer`.
    ///
    /// # Errors
    ///
    /// Returns `ControllerCount` when `ThreePlayer` is not given exactly
    /// three controllers.
    #[instrument]
    pub fn roster(self, assigned: Option<&[Controller]>) -> Result<Roster, ConfigError> {
        match self.preset_controllers() {
            Some(preset) => {
                if assigned.is_some() {
                    debug!(mode = %self, "Ignoring assigned controllers for preset mode");
                }
                Roster::with_default_symbols(&preset)
            }
            None => {
                let assigned = assigned.unwrap_or_default();
                if assigned.len() != self.player_count() {
                    return Err(ConfigError::new(ConfigErrorKind::ControllerCount {
                        expected: self.player_count(),
                        found: assigned.len(),
                    }));
                }
                Roster::with_default_symbols(assigned)
            }
        }
    }
}

impl TryFrom<u8> for GameMode {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(GameMode::HumanVsHuman),
            2 => Ok(GameMode::HumanVsComputer),
            3 => Ok(GameMode::ThreePlayer),
            other => Err(ConfigError::new(ConfigErrorKind::Mode(other))),
        }
    }
}
