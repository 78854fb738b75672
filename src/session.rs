//! The game session: phase sequencing, opponent turns, match end.
//!
//! ## Phase machine
//!
//! A turn cycle walks `Shoot → Move → Next` and back to `Shoot`:
//!
//! - **Shoot**: the human fires at the selected cell (one round of
//!   ammunition, deflected by the wind).
//! - **Move**: the human relocates to the selected cell (validated
//!   against the grid and fuel; a rejected move keeps the phase).
//! - **Next**: the scripted opponent fires and moves, the wind drifts,
//!   and the turn counter advances.
//!
//! ## Contract with the presentation layer
//!
//! The UI holds the session, calls [`GameSession::advance`] once per
//! action-button press, and renders from the read accessors plus the
//! returned [`TurnReport`]. The session keeps no cell selection of its
//! own: the UI passes the current selection in and must clear it after
//! every call, whatever the outcome.
//!
//! When a duellist's hit points reach zero the match ends immediately
//! with the survivor as winner; from then on `advance` is inert and
//! keeps re-reporting the outcome.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::ai;
use crate::core::{GameConfig, GameRng, Grid, PlayerId, PlayerState, Position, Wind};
use crate::rules::{self, GameOutcome, MoveError, ShotOutcome};

/// Current phase of the turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to pick a target cell.
    Shoot,
    /// Waiting for the human to pick a destination cell.
    Move,
    /// Ready to run the opponent's turn.
    Next,
}

impl Phase {
    /// The action-button label for this phase.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Shoot => "Shoot",
            Phase::Move => "Move",
            Phase::Next => "Next",
        }
    }

    /// A prompt describing what the UI should ask for.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Phase::Shoot => "Choose a target",
            Phase::Move => "Choose a destination",
            Phase::Next => "End of turn",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An effective action taken by a duellist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Fired at a cell (the aimed cell, before wind).
    Shoot(Position),
    /// Relocated to a cell.
    Move(Position),
    /// Stayed in place for the turn.
    Hold,
}

/// One entry of the session's replayable history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who acted.
    pub player: PlayerId,
    /// What they did.
    pub action: Action,
    /// Turn number when it happened.
    pub turn: u32,
}

/// Something that happened during one `advance` call.
///
/// Events render to user-facing info strings via `Display`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The phase needed a selected cell and none was provided.
    NoCellSelected,
    /// The shooter's magazine is empty; the shot was skipped.
    OutOfAmmo(PlayerId),
    /// A shot resolved.
    Shot {
        /// Who fired.
        shooter: PlayerId,
        /// Where it landed and what it did.
        outcome: ShotOutcome,
    },
    /// The human's move was rejected; the phase did not change.
    MoveRejected(MoveError),
    /// A duellist relocated.
    Moved {
        /// Who moved.
        player: PlayerId,
        /// Where to.
        destination: Position,
        /// Fuel the move cost.
        fuel_spent: u32,
    },
    /// The opponent had no reachable destination and stayed put.
    Held(PlayerId),
    /// The wind drifted at the end of the turn cycle.
    WindShifted(Wind),
    /// The match is over.
    GameOver(GameOutcome),
}

impl std::fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnEvent::NoCellSelected => write!(f, "No cell selected"),
            TurnEvent::OutOfAmmo(player) => write!(f, "{player} is out of ammunition"),
            TurnEvent::Shot { shooter, outcome } => match outcome {
                ShotOutcome::ShooterHit { impact } => {
                    write!(f, "{shooter} shelled their own position at {impact}")
                }
                ShotOutcome::VictimHit { impact } => {
                    write!(f, "{shooter} scored a hit at {impact}")
                }
                ShotOutcome::Miss { impact } => {
                    write!(f, "Shell from {shooter} destroyed {impact}")
                }
            },
            TurnEvent::MoveRejected(error) => write!(f, "{error}"),
            TurnEvent::Moved { player, destination, fuel_spent } => {
                write!(f, "{player} moved to {destination} ({fuel_spent} fuel)")
            }
            TurnEvent::Held(player) => write!(f, "{player} held position"),
            TurnEvent::WindShifted(wind) => write!(f, "Wind now {wind}"),
            TurnEvent::GameOver(outcome) => write!(f, "Game over: {outcome}"),
        }
    }
}

/// Events produced by one `advance` call, in order.
pub type EventList = SmallVec<[TurnEvent; 4]>;

/// What one `advance` call did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Phase after the call (the next action-button label).
    pub phase: Phase,
    /// Everything that happened, chronologically.
    pub events: EventList,
}

impl TurnReport {
    /// The most recent event as an info string, if anything happened.
    #[must_use]
    pub fn info(&self) -> Option<String> {
        self.events.last().map(ToString::to_string)
    }
}

/// A full duel: both player states, the grid, the wind, the RNG and the
/// phase machine.
///
/// ```
/// use cannon_duel::{GameConfig, GameSession, Phase, Position};
///
/// let mut session = GameSession::new(GameConfig::default(), 42);
/// assert_eq!(session.phase(), Phase::Shoot);
///
/// // Fire at the opponent's corner, then stand fast on our own cell.
/// session.advance(Some(Position::new(0, 0)));
/// let report = session.advance(Some(Position::new(9, 9)));
/// assert_eq!(report.phase, Phase::Next);
///
/// // Run the opponent's turn; the cycle comes back around.
/// let report = session.advance(None);
/// assert_eq!(report.phase, Phase::Shoot);
/// assert_eq!(session.turn(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    players: [PlayerState; 2],
    grid: Grid,
    wind: Wind,
    phase: Phase,
    turn: u32,
    outcome: Option<GameOutcome>,
    history: Vec<ActionRecord>,
    rng: GameRng,
    opponent_rng: GameRng,
}

impl GameSession {
    /// Start a duel from `config`, seeding all randomness from `seed`.
    ///
    /// The same config and seed replay the same duel for the same inputs.
    /// Panics if the config is inconsistent (see [`GameConfig`]).
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        config.assert_valid();

        // The opponent draws from a forked stream so its decisions never
        // perturb the wind walk.
        let mut rng = GameRng::new(seed);
        let opponent_rng = rng.fork();

        let [one_start, two_start] = config.starting_positions;
        Self {
            players: [
                PlayerState::fresh(&config, one_start),
                PlayerState::fresh(&config, two_start),
            ],
            grid: Grid::new(config.grid_size),
            wind: config.initial_wind,
            phase: Phase::Shoot,
            turn: 1,
            outcome: None,
            history: Vec::new(),
            rng,
            opponent_rng,
            config,
        }
    }

    /// Drive the session one step.
    ///
    /// `selected` is the cell currently selected in the UI, if any; it is
    /// consumed by the `Shoot` and `Move` phases and ignored by `Next`.
    /// The caller must clear its on-screen selection after every call.
    pub fn advance(&mut self, selected: Option<Position>) -> TurnReport {
        let mut events = EventList::new();

        if let Some(outcome) = self.outcome {
            events.push(TurnEvent::GameOver(outcome));
            return TurnReport { phase: self.phase, events };
        }

        match self.phase {
            Phase::Shoot => self.handle_shoot(selected, &mut events),
            Phase::Move => self.handle_move(selected, &mut events),
            Phase::Next => self.handle_next(&mut events),
        }

        TurnReport { phase: self.phase, events }
    }

    // === Read accessors ===

    /// The configuration this duel runs under.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A duellist's current state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    /// The battle grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current wind.
    #[must_use]
    pub fn wind(&self) -> Wind {
        self.wind
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current turn number, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The match outcome, once decided.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Every effective action so far, in order.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    // === Phase handlers ===

    fn handle_shoot(&mut self, selected: Option<Position>, events: &mut EventList) {
        let Some(target) = selected else {
            events.push(TurnEvent::NoCellSelected);
            return;
        };

        self.fire(PlayerId::One, target, events);
        self.phase = Phase::Move;
    }

    fn handle_move(&mut self, selected: Option<Position>, events: &mut EventList) {
        let Some(destination) = selected else {
            events.push(TurnEvent::NoCellSelected);
            return;
        };

        let mover = &mut self.players[PlayerId::One.index()];
        match rules::resolve_move(destination, mover, &self.grid) {
            Ok(fuel_spent) => {
                log::debug!("{} moved to {destination}", PlayerId::One);
                self.record(PlayerId::One, Action::Move(destination));
                events.push(TurnEvent::Moved {
                    player: PlayerId::One,
                    destination,
                    fuel_spent,
                });
                self.phase = Phase::Next;
            }
            Err(error) => {
                log::debug!("{} move rejected: {error}", PlayerId::One);
                events.push(TurnEvent::MoveRejected(error));
            }
        }
    }

    fn handle_next(&mut self, events: &mut EventList) {
        // Opponent shot: a blind round at a random cell.
        let target = ai::pick_target(&mut self.opponent_rng, self.grid.size());
        self.fire(PlayerId::Two, target, events);
        if self.outcome.is_some() {
            return;
        }

        // Opponent move: uniform over the currently valid destinations.
        let mover_index = PlayerId::Two.index();
        match ai::pick_destination(&self.players[mover_index], &self.grid, &mut self.opponent_rng)
        {
            Some(destination) => {
                match rules::resolve_move(destination, &mut self.players[mover_index], &self.grid)
                {
                    Ok(fuel_spent) => {
                        self.record(PlayerId::Two, Action::Move(destination));
                        events.push(TurnEvent::Moved {
                            player: PlayerId::Two,
                            destination,
                            fuel_spent,
                        });
                    }
                    // The policy only proposes valid cells; a refusal
                    // still degrades to holding rather than panicking.
                    Err(_) => {
                        self.record(PlayerId::Two, Action::Hold);
                        events.push(TurnEvent::Held(PlayerId::Two));
                    }
                }
            }
            None => {
                self.record(PlayerId::Two, Action::Hold);
                events.push(TurnEvent::Held(PlayerId::Two));
            }
        }

        self.wind.advance(&mut self.rng, self.config.max_wind_strength);
        events.push(TurnEvent::WindShifted(self.wind));

        self.turn += 1;
        self.phase = Phase::Shoot;
    }

    // === Internals ===

    fn fire(&mut self, shooter_id: PlayerId, target: Position, events: &mut EventList) {
        if !self.players[shooter_id.index()].spend_round() {
            log::debug!("{shooter_id} out of ammunition, shot skipped");
            events.push(TurnEvent::OutOfAmmo(shooter_id));
            return;
        }

        let [one, two] = &mut self.players;
        let (shooter, victim) = match shooter_id {
            PlayerId::One => (one, two),
            PlayerId::Two => (two, one),
        };
        let outcome = rules::resolve_shot(target, self.wind, shooter, victim, &mut self.grid);
        log::debug!("{shooter_id} fired at {target}: {outcome:?}");

        self.record(shooter_id, Action::Shoot(target));
        events.push(TurnEvent::Shot {
            shooter: shooter_id,
            outcome,
        });

        if let Some(loser) = PlayerId::both()
            .into_iter()
            .find(|id| !self.players[id.index()].is_alive())
        {
            let outcome = GameOutcome {
                winner: loser.opponent(),
                turn: self.turn,
            };
            log::debug!("match over: {outcome}");
            self.outcome = Some(outcome);
            events.push(TurnEvent::GameOver(outcome));
        }
    }

    fn record(&mut self, player: PlayerId, action: Action) {
        self.history.push(ActionRecord {
            player,
            action,
            turn: self.turn,
        });
    }
}
