use super::types::{
    AdvancedRequest, AssistantConfig, CompletionRequest, DocumentContext, GenerationRequest,
    NormalRequest, MAX_ITERATION,
};

/// Build the generation request for `prompt` in the mode `config` selects.
pub fn build_request(
    config: &AssistantConfig,
    prompt: &str,
    document: DocumentContext,
) -> GenerationRequest {
    let base = NormalRequest {
        prompt: prompt.to_string(),
        base_url: config.base_url.clone(),
        api_key: config.api_key.clone(),
        context: document.content,
    };

    if config.advanced {
        GenerationRequest::Advanced(AdvancedRequest {
            base,
            target_file: document.relative_path,
            max_iteration: MAX_ITERATION,
        })
    } else {
        GenerationRequest::Normal(base)
    }
}

pub fn build_completion_request(config: &AssistantConfig, prompt: &str) -> CompletionRequest {
    CompletionRequest {
        prompt: prompt.to_string(),
        base_url: config.base_url.clone(),
        api_key: config.api_key.clone(),
    }
}

/// A prompt that is absent or blank is never sent.
pub fn normalize_prompt(prompt: Option<&str>) -> Option<&str> {
    prompt.filter(|p| !p.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(advanced: bool) -> AssistantConfig {
        AssistantConfig {
            api_key: "sk-test".to_string(),
            base_url: "https://models.example.com/v1".to_string(),
            advanced,
        }
    }

    fn document() -> DocumentContext {
        DocumentContext {
            content: "def f():\n    pass\n".to_string(),
            relative_path: "project/src/f.py".to_string(),
        }
    }

    #[test]
    fn test_normal_request_shape() {
        let request = build_request(&config(false), "add docs", document());
        assert!(!request.is_advanced());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "prompt": "add docs",
                "baseUrl": "https://models.example.com/v1",
                "apiKey": "sk-test",
                "context": "def f():\n    pass\n"
            })
        );
    }

    #[test]
    fn test_advanced_request_shape() {
        let request = build_request(&config(true), "add docs", document());
        assert!(request.is_advanced());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["targetFile"], "project/src/f.py");
        assert_eq!(json["maxIteration"], MAX_ITERATION);
        assert_eq!(json["prompt"], "add docs");
        assert_eq!(json["context"], "def f():\n    pass\n");
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_completion_request_shape() {
        let request = build_completion_request(&config(true), "def add(a, b):\n    \"\"\"");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 3);
        assert_eq!(json["apiKey"], "sk-test");
    }

    #[test]
    fn test_normalize_prompt() {
        assert_eq!(normalize_prompt(None), None);
        assert_eq!(normalize_prompt(Some("")), None);
        assert_eq!(normalize_prompt(Some("  \n")), None);
        assert_eq!(normalize_prompt(Some("x")), Some("x"));
    }
}
