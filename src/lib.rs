//! Momentum - a terminal habit tracker with arcade feedback
//!
//! This module exposes the reward engine for testing and external use.

// Allow dead code in library - some items are only used by the binary
#![allow(dead_code)]

pub mod app_state;
pub mod audio;
pub mod build_info;
pub mod burst;
pub mod constants;
pub mod messages;
pub mod reward_logic;
pub mod session;
pub mod sound;
pub mod tracker;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;

pub use app_state::AppState;
pub use tracker::GoalKind;
