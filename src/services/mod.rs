//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the catalog rules (validation, uniqueness, console
//! references) so route handlers can stay focused on protocol translation.

pub mod console;
pub mod game;
