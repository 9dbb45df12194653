//! Game session state machine.
//!
//! This module ties the maze, player, goal, and zone components together
//! into one play-through. [`GameSession`] is the state machine the host
//! drives: it starts sessions from the menu, advances the simulation one
//! tick at a time, toggles the top-down view where the difficulty allows
//! it, detects victory, and hands the final time to the leaderboard.
//!
//! The session owns no timers and schedules nothing. The host calls
//! [`GameSession::tick`] at whatever cadence it likes and the elapsed clock
//! accumulates the tick deltas; abandoning a session is nothing more than
//! dropping its context, so repeated restarts cannot leak periodic work.

pub mod collision;
pub mod goal;
pub mod player;
pub mod zones;

use std::time::Duration;

use rand::Rng;

use self::player::{MoveInput, Player};
use self::zones::TopViewZones;
use crate::config::{CELL_SIZE, Difficulty};
use crate::error::GameError;
use crate::leaderboard::Leaderboard;
use crate::maze::{Cell, Maze, generator};

/// The screen the game is currently on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Difficulty selection; no session is live.
    #[default]
    Menu,
    /// First-person navigation through the maze.
    Playing,
    /// Detached overhead camera; movement suspended, clock running.
    TopView,
    /// Goal reached; the final time is frozen, awaiting submission.
    Victory,
}

/// Everything owned by one play-through, created on difficulty selection
/// and dropped on return to the menu.
#[derive(Debug)]
pub struct SessionContext {
    /// The tier this session was started on.
    pub difficulty: Difficulty,
    /// The generated maze.
    pub maze: Maze,
    /// The player character.
    pub player: Player,
    /// The corner cell holding the goal marker.
    pub goal: Cell,
    /// Zone set gating the top-down view on medium difficulty.
    pub zones: TopViewZones,
    elapsed: Duration,
}

impl SessionContext {
    fn new<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Result<Self, GameError> {
        let size = difficulty.maze_size();
        let maze = generator::generate(size, size, rng)?;
        let goal = goal::place(&maze, rng);
        let zones = TopViewZones::generate(difficulty, &maze, rng);
        Ok(Self {
            difficulty,
            maze,
            player: Player::new(),
            goal,
            zones,
            elapsed: Duration::ZERO,
        })
    }

    /// Time spent in this session so far. Frozen once the goal is reached.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time as fractional seconds, the unit the leaderboard stores.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Whether the top-down view may be engaged right now.
    ///
    /// Easy allows it everywhere, medium only while the player stands in a
    /// zone cell, hard never.
    pub fn top_view_allowed(&self) -> bool {
        match self.difficulty {
            Difficulty::Easy => true,
            Difficulty::Medium => self.zones.contains(self.player.cell),
            Difficulty::Hard => false,
        }
    }

    /// Camera placement for the top-down view: above the maze centroid,
    /// high enough to frame the whole grid, looking straight down.
    pub fn overhead_vantage(&self) -> [f32; 3] {
        let extent_x = self.maze.width as f32 * CELL_SIZE;
        let extent_z = self.maze.height as f32 * CELL_SIZE;
        [extent_x / 2.0, extent_x.max(extent_z), extent_z / 2.0]
    }
}

/// The session state machine.
///
/// Runs for the lifetime of the process; the menu doubles as the restart
/// point, so there is no terminal state.
#[derive(Debug, Default)]
pub struct GameSession {
    screen: Screen,
    context: Option<SessionContext>,
}

impl GameSession {
    /// Creates a session machine sitting on the menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The live session state, if a session is running.
    pub fn context(&self) -> Option<&SessionContext> {
        self.context.as_ref()
    }

    /// Starts a new session for the chosen difficulty: generates the maze,
    /// resets the player to the spawn corner, places the goal, samples the
    /// top-view zones, and zeroes the clock.
    ///
    /// Only honored on the menu; a stray start request from any other
    /// screen is logged and ignored.
    ///
    /// # Errors
    /// Propagates [`GameError`] from maze generation.
    pub fn start<R: Rng>(&mut self, difficulty: Difficulty, rng: &mut R) -> Result<(), GameError> {
        if self.screen != Screen::Menu {
            log::warn!("ignoring start request while on {:?}", self.screen);
            return Ok(());
        }
        let context = SessionContext::new(difficulty, rng)?;
        log::info!(
            "session started: {:?}, {size}x{size} maze, goal at ({}, {})",
            difficulty,
            context.goal.x,
            context.goal.z,
            size = context.maze.width,
        );
        self.context = Some(context);
        self.screen = Screen::Playing;
        Ok(())
    }

    /// Advances the simulation by one tick.
    ///
    /// While playing, the clock accumulates, the movement input is
    /// integrated against the walls, and a committed step is checked
    /// against the goal radius. In the top-down view only the clock runs;
    /// on the menu and victory screens ticks do nothing.
    pub fn tick(&mut self, input: MoveInput, delta: f32) {
        if !delta.is_finite() || delta <= 0.0 {
            return;
        }
        match self.screen {
            Screen::Playing => {
                let Some(context) = self.context.as_mut() else {
                    return;
                };
                context.elapsed += Duration::from_secs_f32(delta);
                let outcome = context.player.step(&context.maze, input, delta);
                if outcome.crossed_cell {
                    log::debug!(
                        "entered cell ({}, {})",
                        context.player.cell.x,
                        context.player.cell.z
                    );
                }
                if outcome.moved && goal::reached(context.player.position, context.goal) {
                    log::info!("goal reached after {:.2}s", context.elapsed_seconds());
                    self.screen = Screen::Victory;
                }
            }
            Screen::TopView => {
                if let Some(context) = self.context.as_mut() {
                    context.elapsed += Duration::from_secs_f32(delta);
                }
            }
            Screen::Menu | Screen::Victory => {}
        }
    }

    /// Engages the top-down view if the current difficulty and player cell
    /// allow it. Movement input is ignored until the view is returned.
    pub fn toggle_top_view(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }
        let allowed = self
            .context
            .as_ref()
            .is_some_and(SessionContext::top_view_allowed);
        if allowed {
            log::debug!("top view engaged");
            self.screen = Screen::TopView;
        }
    }

    /// Returns from the top-down view to first-person play. The view snaps
    /// back to the player's position with a forward-facing yaw.
    pub fn return_from_top_view(&mut self) {
        if self.screen != Screen::TopView {
            return;
        }
        if let Some(context) = self.context.as_mut() {
            context.player.yaw = player::FORWARD_YAW;
        }
        self.screen = Screen::Playing;
    }

    /// Leaves the session and returns to the menu, discarding all
    /// per-session state. Safe to call from any screen, any number of
    /// times; no partial score is kept.
    pub fn exit_to_menu(&mut self) {
        if let Some(context) = self.context.take() {
            log::info!(
                "session ended from {:?} after {:.2}s",
                self.screen,
                context.elapsed_seconds()
            );
        }
        self.screen = Screen::Menu;
    }

    /// Submits the finished run to the leaderboard and returns to the menu.
    ///
    /// Only meaningful on the victory screen. A name that is empty after
    /// trimming is silently ignored and the victory screen stays up, so the
    /// player can correct it or skip via [`GameSession::exit_to_menu`].
    pub fn submit_score(&mut self, name: &str, leaderboard: &mut Leaderboard) {
        if self.screen != Screen::Victory {
            return;
        }
        let Some(context) = self.context.as_ref() else {
            self.screen = Screen::Menu;
            return;
        };
        if name.trim().is_empty() {
            return;
        }
        leaderboard.submit(context.difficulty, name, context.elapsed_seconds());
        self.context = None;
        self.screen = Screen::Menu;
    }

    /// Elapsed session time, or zero when no session is live.
    pub fn elapsed(&self) -> Duration {
        self.context
            .as_ref()
            .map(SessionContext::elapsed)
            .unwrap_or(Duration::ZERO)
    }

    /// Elapsed time formatted as `MM:SS` for the on-screen clock.
    pub fn format_elapsed(&self) -> String {
        let total = self.elapsed().as_secs();
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}
