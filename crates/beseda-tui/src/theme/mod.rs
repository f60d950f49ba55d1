//! Theme components for the TUI.
//!
//! This module provides [`Theme`], the color palette (Catppuccin Mocha).

mod colors;

pub use colors::Theme;
