//! Prompt construction from retrieved context.
//!
//! The framing produced here ("Source:", "Score:", "User:", "Assistant:")
//! is what downstream models and callers match on. Change it only together
//! with everything that parses it.

use crate::domain::RetrievedChunk;

/// Placeholder used when retrieval produced no chunks.
pub const NO_CONTEXT: &str = "(no context)";

const PREAMBLE: &str = "You are a helpful assistant. Use the retrieved context when relevant.";

/// Render one chunk as a `Source:`/`Score:` block.
fn render_chunk(chunk: &RetrievedChunk) -> String {
    // Debug formatting keeps the fractional part on whole scores ("1.0")
    format!(
        "Source: {}\nScore: {:?}\n{}",
        chunk.source, chunk.score, chunk.content
    )
}

/// Merge retrieved context and the user's prompt into one model-ready string.
///
/// Chunks are rendered in the given order and separated by a blank line.
/// Pure and deterministic.
///
/// # Example
///
/// ```rust
/// use ragrelay_core::domain::RetrievedChunk;
/// use ragrelay_core::prompt::build_prompt;
///
/// let prompt = build_prompt("Hello", &[RetrievedChunk::new("ctx", "stub", 0.9)]);
/// assert!(prompt.contains("Source: stub\nScore: 0.9\nctx"));
/// assert!(prompt.ends_with("User: Hello\nAssistant:"));
/// ```
pub fn build_prompt(user_prompt: &str, contexts: &[RetrievedChunk]) -> String {
    let context_text = if contexts.is_empty() {
        NO_CONTEXT.to_string()
    } else {
        contexts
            .iter()
            .map(render_chunk)
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    format!("{PREAMBLE}\nContext:\n{context_text}\n\nUser: {user_prompt}\nAssistant:")
}
