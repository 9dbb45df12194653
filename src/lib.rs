//! Atalaya - core simulation for a first-person maze game.
//!
//! A player spawns in a procedurally generated perfect maze and wins by
//! reaching a goal marker placed in one of the far corners. This crate owns
//! the parts of that game with real invariants: maze generation, the wall
//! collision model that constrains continuous movement to the generated
//! topology, and the session state machine governing difficulty tiers, the
//! top-down view mode, timing, and score submission.
//!
//! Everything else is a host collaborator driving this crate as a library:
//! - a renderer consumes the maze walls, the player pose, and the goal cell
//!   to build and draw the scene
//! - an input layer turns keyboard or touch events into normalized movement
//!   signals fed to [`game::GameSession::tick`]
//! - a storage layer parks the serialized [`leaderboard::Leaderboard`]
//!   document wherever it likes
//!
//! # Architecture
//! The crate follows a modular layout:
//! - `maze/`: grid model, wall flags, and generation
//! - `game/`: collision, player movement, goal and zone tracking, and the
//!   session state machine
//! - `config`: difficulty tiers and world constants
//! - `leaderboard`: per-difficulty score tables
//! - `error`: error kinds

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod maze;
