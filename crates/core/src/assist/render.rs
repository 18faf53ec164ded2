use super::types::GenerationResult;

const FENCE: &str = "```";

/// Text shown to the user for a successful generation.
pub fn render_result(result: &GenerationResult) -> String {
    match &result.details {
        Some(details) => format!(
            "# Code:\n\n{}\n# Details:\n\n{}",
            result.code, details
        ),
        None => result.code.clone(),
    }
}

/// Append a closing fence when `markdown` has an unterminated code block.
pub fn close_code_fences(markdown: &str) -> String {
    if markdown.matches(FENCE).count() % 2 == 0 {
        markdown.to_string()
    } else {
        format!("{markdown}\n{FENCE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_code_only() {
        let result = GenerationResult {
            code: "```python\nx = 1\n```".to_string(),
            details: None,
        };
        assert_eq!(render_result(&result), "```python\nx = 1\n```");
    }

    #[test]
    fn test_render_code_and_details() {
        let result = GenerationResult {
            code: "x = 1".to_string(),
            details: Some("passed 3/3 tests".to_string()),
        };
        assert_eq!(
            render_result(&result),
            "# Code:\n\nx = 1\n# Details:\n\npassed 3/3 tests"
        );
    }

    #[test]
    fn test_result_details_optional_on_wire() {
        let result: GenerationResult = serde_json::from_str(r#"{"code": "x"}"#).unwrap();
        assert_eq!(result.details, None);

        let result: GenerationResult =
            serde_json::from_str(r#"{"code": "x", "details": null}"#).unwrap();
        assert_eq!(result.details, None);
    }

    #[test]
    fn test_close_code_fences() {
        assert_eq!(close_code_fences("plain"), "plain");
        assert_eq!(close_code_fences("```py\nx\n```"), "```py\nx\n```");
        assert_eq!(close_code_fences("```py\nx"), "```py\nx\n```");
    }
}
