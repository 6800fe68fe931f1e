//! Parsing of the gateway's delimited idea blob into renumbered blocks.
//!
//! The generate-ideas response is one text blob with ideas separated by
//! `Idea <number>:` markers. The parser splits on those markers, trims
//! each chunk, discards empty ones, and renumbers the survivors
//! sequentially; whatever numbers the gateway used are replaced. An empty
//! result means the response carried no usable ideas and callers treat it
//! as a failure, never as a valid zero-idea list.

#[cfg(test)]
#[path = "ideas_test.rs"]
mod ideas_test;

/// Byte ranges of every `Idea <digits>:` marker in `raw`.
fn marker_ranges(raw: &str) -> Vec<(usize, usize)> {
    const PREFIX: &str = "Idea ";
    let mut ranges = Vec::new();
    for (start, _) in raw.match_indices(PREFIX) {
        let rest = &raw[start + PREFIX.len()..];
        let digits = rest.chars().take_while(char::is_ascii_digit).count();
        if digits == 0 {
            continue;
        }
        if rest[digits..].starts_with(':') {
            ranges.push((start, start + PREFIX.len() + digits + 1));
        }
    }
    ranges
}

/// Split a raw idea blob into trimmed, sequentially renumbered blocks.
///
/// `"Idea 7: Foo\nBar\nIdea 2: Baz"` becomes
/// `["Idea 1: Foo\nBar", "Idea 2: Baz"]`. Empty or whitespace-only input
/// yields an empty vector.
#[must_use]
pub fn parse_idea_blocks(raw: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut last = 0;
    for (start, end) in marker_ranges(raw) {
        chunks.push(&raw[last..start]);
        last = end;
    }
    chunks.push(&raw[last..]);

    chunks
        .into_iter()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .enumerate()
        .map(|(i, chunk)| format!("Idea {}: {}", i + 1, chunk))
        .collect()
}

/// Split one idea block into lines for line-oriented rendering.
#[must_use]
pub fn idea_lines(block: &str) -> Vec<String> {
    block.trim().split('\n').map(str::to_owned).collect()
}

/// Map a stored idea array to line blocks for the select-idea page.
#[must_use]
pub fn idea_blocks(ideas: &[String]) -> Vec<Vec<String>> {
    ideas.iter().map(|idea| idea_lines(idea)).collect()
}
