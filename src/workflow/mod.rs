// src/workflow/mod.rs
//! Upload-and-analyze workflow: explicit state, one reducer, one async driver

pub mod reducer;
pub mod session;
pub mod state;

pub use reducer::{UiEffect, UiEvent, Workflow};
pub use session::AnalyzeSession;
pub use state::{FileDisplay, UiState};
