//! # Block Scanning
//!
//! Converts the ordered line sequence into an ordered, flat [`Block`]
//! sequence.
//!
//! ## Modules
//!
//! - **`types`**: the [`Block`] variants emitted by the scanner
//! - **`kinds`**: block-specific syntax with owned delimiters
//!   (Heading, CodeFence, BlockQuote, ListItem, ThematicBreak)
//! - **`scanner`**: the per-line state machine
//!
//! ## Key invariants
//!
//! - At most one multi-line block (fence, table, blockquote, list) is
//!   open at any time; opening another flushes it first
//! - A line that ends a table or blockquote is re-dispatched at the same
//!   index, so it can also begin the next block
//! - Fenced code blocks are raw zones: every line inside is kept verbatim

pub mod kinds;
pub mod scanner;
pub mod types;

pub use scanner::scan;
pub use types::Block;
