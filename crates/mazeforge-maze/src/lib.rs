//! Maze generation for Mazeforge.
//!
//! A maze is a graph of [`Room`](mazeforge_protocol::Room)s joined by
//! paired directional paths, with one `Start` room and one `Victory` room.
//! This crate builds them and checks that they are well formed.
//!
//! # Key types
//!
//! - [`MazeGenerator`] — builds a new maze per session
//! - [`Maze`] — the validated room graph a session owns
//! - [`MazeConfig`] / [`Topology`] — generator settings
//! - [`MazeError`] — configuration and graph-invariant violations

mod config;
mod error;
mod fixed;
mod generator;
mod maze;

pub use config::{MazeConfig, Topology};
pub use error::MazeError;
pub use fixed::{DEMO_DEAD_END, DEMO_HUB, DEMO_START, DEMO_VICTORY, demo_maze};
pub use generator::{MazeGenerator, link_directions, linear_chain};
pub use maze::Maze;
