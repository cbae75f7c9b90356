//! # Core Prompt Logic
//!
//! Grid arithmetic, the navigation state machine, and the renderer.
//! It knows nothing about any specific terminal technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • geometry (index↔pos) │
//!                    │  • choices (cells/swap) │
//!                    │  • navigation (update)  │
//!                    │  • render (GridFrame)   │
//!                    │                         │
//!                    │  No terminal, no UI.    │
//!                    └───────────┬─────────────┘
//!                                │ PromptHost
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ Key script │      │   Tests    │
//!     │  Adapter   │      │ (headless) │      │            │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`geometry`]: index ↔ `(row, col)`, wrapping steps, clamping
//! - [`choices`]: `ChoiceSequence` (swaps, origin keys, answers)
//! - [`action`]: the `Action` enum, every key the prompt reacts to
//! - [`navigation`]: `NavigationEngine`, applies actions to state
//! - [`render`]: `GridRenderer`, state → `GridFrame`
//! - [`session`]: `PromptSession` + the `PromptHost` collaborator
//! - [`question`]: construction input, loadable from TOML
//! - [`config`]: `~/.gridsort/config.toml` and its resolution
//! - [`script`]: textual key sequences for headless runs

pub mod action;
pub mod choices;
pub mod config;
pub mod error;
pub mod geometry;
pub mod navigation;
pub mod question;
pub mod render;
pub mod script;
pub mod session;
