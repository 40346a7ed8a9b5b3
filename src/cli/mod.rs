//! CLI infrastructure for the parlor games toolkit
//!
//! This module provides the command-line interface for playing games
//! interactively and managing the persisted match history.

pub mod commands;
pub mod output;
