/// Marker that opens a Python docstring.
const DOCSTRING_OPENER: &str = "\"\"\"";

/// Prompt for an inline completion at `line` (0-indexed).
///
/// Completion only triggers right after a docstring opener: the line above
/// `line` must end with `"""`. The prompt is every line before `line`.
pub fn docstring_completion_prompt(text: &str, line: usize) -> Option<String> {
    if line == 0 {
        return None;
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let previous = lines.get(line - 1)?;

    if !previous.trim_end_matches('\r').ends_with(DOCSTRING_OPENER) {
        return None;
    }

    Some(lines[..line].join("\n"))
}
