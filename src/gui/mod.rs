//! GUI module for the color grid window
//!
//! This module provides the native window that paints the grid of named
//! colors and copies the clicked color to the system clipboard.

pub mod app;
pub mod runner;
pub mod theme;
pub mod toast;

pub use app::HueboardApp;
pub use runner::run_gui;
pub use toast::Toast;
