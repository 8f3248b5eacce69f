//! Terminal UI for Behind the Lie.
//!
//! The presentation layer over `btl-engine`: a main menu for picking
//! difficulty and suspect count, the interrogation scene with tick-driven
//! text reveal, the accusation line-up, and the verdict screen. All game
//! state lives in the engine; this crate only reads the data file, renders,
//! and translates input and clock ticks into engine calls.

/// Application state and event handling.
pub mod app;
/// Terminal setup, teardown, and the tick-driven event loop.
pub mod terminal;
/// Draw functions, one module per screen.
pub mod views;
