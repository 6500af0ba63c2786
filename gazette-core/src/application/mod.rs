//! Application layer: excerpts and match snippets built on the domain pipeline

pub mod excerpt;
pub mod snippet;

pub use excerpt::{excerpt, ExcerptOptions, TruncateBy};
pub use snippet::{context_snippet, context_snippets, SnippetOptions};
