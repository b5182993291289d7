//! Block-specific line syntax. Each kind owns its delimiters and the
//! logic for recognizing them, so no syntax knowledge leaks into the
//! scanner loop.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::ListItem;
pub use thematic_break::ThematicBreak;
