//! # TUI Components
//!
//! UI components for the terminal prompt.
//!
//! ## Component Architecture
//!
//! Components are stateless and props-based: they receive everything they
//! draw as borrowed fields and keep nothing between frames. All prompt state
//! lives in the core `PromptSession`; the terminal host only holds the latest
//! `GridFrame` it was handed.
//!
//! - `PromptView`: question line, grid, and notice for the current frame
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! └── prompt_view.rs   (GridFrame → styled Paragraph)
//! ```

mod prompt_view;
pub use prompt_view::PromptView;
