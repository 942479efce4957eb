//! Prompt construction for answer synthesis

use crate::pipeline::{Query, SearchResult};

const HEADER: &str = "Based on the following sources:";
const INSTRUCTION: &str =
    "Please provide a comprehensive answer based on these sources, synthesizing the full content provided:";

/// Build the synthesis prompt: sources in result order (1-based), then the
/// literal user query, then the instruction.
pub fn build_prompt(results: &[SearchResult], query: &Query) -> String {
    let mut prompt = String::from(HEADER);
    prompt.push('\n');

    for (idx, result) in results.iter().enumerate() {
        prompt.push_str(&format!(
            "\nSource {} ({}):\n{}\n",
            idx + 1,
            result.url,
            result.full_content
        ));
    }

    prompt.push_str(&format!("\nUser Query: {}\n\n{}", query, INSTRUCTION));
    prompt
}
