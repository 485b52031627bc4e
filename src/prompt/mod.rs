// src/prompt/mod.rs
// =============================================================================
// Interactive questions for the terminal.
//
// Currently implements:
// - Yes/no confirmation with a default answer
// =============================================================================

mod confirm;

pub use confirm::ask_yes_no;

