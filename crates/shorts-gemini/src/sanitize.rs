//! Fence-stripping sanitization of raw model output.

/// Fence marker models use to wrap code blocks.
const FENCE: &str = "```";

/// Recover a parseable payload from raw model text.
///
/// Models frequently wrap JSON in a fenced code block, sometimes after a
/// prose preamble. When the trimmed text starts with a fence, the lines
/// strictly between the opening fence and the next fence line are returned
/// joined by `\n`; an unterminated fence yields everything after the opening
/// line. Fence-free text comes back trimmed and otherwise untouched.
///
/// This is best-effort by design and never fails; output that is still not
/// JSON is caught by the parse step downstream.
pub fn sanitize_json(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with(FENCE) {
        return trimmed.to_string();
    }

    let lines: Vec<&str> = trimmed.lines().collect();
    let first_fence = lines.iter().position(|line| line.trim().starts_with(FENCE));
    let Some(first_fence) = first_fence else {
        return trimmed.to_string();
    };
    let second_fence = lines
        .iter()
        .enumerate()
        .position(|(index, line)| index > first_fence && line.trim().starts_with(FENCE));

    match second_fence {
        Some(second_fence) => lines[first_fence + 1..second_fence].join("\n"),
        None => lines[first_fence + 1..].join("\n"),
    }
}
