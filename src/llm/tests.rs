use super::*;
use std::sync::Arc;

use serde_json::json;

use crate::provider::{ChatRole, MockChatClient, ProviderError, ResponseFormat};

const VERDICT_JSON: &str = r#"{"category":"excellent","reason":"Both render 'Hello world' as こんにちは 世界."}"#;

mod fence_tests {
    use super::*;

    #[test]
    fn test_unfenced_passthrough() {
        assert_eq!(strip_code_fence(VERDICT_JSON), VERDICT_JSON);
        assert_eq!(strip_code_fence("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_json_tagged_fence() {
        let fenced = format!("```json\n{VERDICT_JSON}\n```");
        assert_eq!(strip_code_fence(&fenced), VERDICT_JSON);
    }

    #[test]
    fn test_bare_fence() {
        let fenced = format!("```\n{VERDICT_JSON}\n```");
        assert_eq!(strip_code_fence(&fenced), VERDICT_JSON);
    }

    #[test]
    fn test_single_line_fence() {
        let fenced = format!("```json{VERDICT_JSON}```");
        assert_eq!(strip_code_fence(&fenced), VERDICT_JSON);

        let fenced = format!("```{VERDICT_JSON}```");
        assert_eq!(strip_code_fence(&fenced), VERDICT_JSON);
    }

    #[test]
    fn test_fence_starting_with_payload_line() {
        let fenced = "```{\n\"category\": \"good\", \"reason\": \"ok\"}\n```";
        assert_eq!(
            strip_code_fence(fenced),
            "{\n\"category\": \"good\", \"reason\": \"ok\"}"
        );
    }

    #[test]
    fn test_unclosed_fence_left_alone() {
        assert_eq!(strip_code_fence("```json\n{}"), "```json\n{}");
        assert_eq!(strip_code_fence("```"), "```");
    }
}

mod verdict_tests {
    use super::*;

    #[test]
    fn test_fenced_and_unfenced_parse_identically() {
        let plain = parse_verdict(VERDICT_JSON).expect("plain parses");
        let fenced = parse_verdict(&format!("```json\n{VERDICT_JSON}\n```")).expect("fenced parses");

        assert_eq!(plain, fenced);
        assert_eq!(plain.category, VerdictCategory::Excellent);
    }

    #[test]
    fn test_all_categories_parse() {
        for category in VerdictCategory::ALL {
            let content = json!({"category": category.as_str(), "reason": "r"}).to_string();
            let verdict = parse_verdict(&content).expect("category parses");
            assert_eq!(verdict.category, category);
        }
    }

    #[test]
    fn test_title_case_category_accepted() {
        let verdict =
            parse_verdict(r#"{"category": "Very Good", "reason": "minor wording"}"#).expect("parses");
        assert_eq!(verdict.category, VerdictCategory::VeryGood);
    }

    #[test]
    fn test_prose_is_parse_error() {
        let err = parse_verdict("The translation is excellent overall.").unwrap_err();
        assert!(matches!(err, ProviderError::Parse { .. }));
        assert!(
            err.to_string()
                .starts_with("Failed to parse judge response as JSON")
        );
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let err = parse_verdict(r#"{"category": "superb", "reason": "r"}"#).unwrap_err();
        assert!(matches!(err, ProviderError::Parse { .. }));
    }

    #[test]
    fn test_missing_reason_is_parse_error() {
        assert!(parse_verdict(r#"{"category": "good"}"#).is_err());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let verdict = parse_verdict(r#"{"category": "bad", "reason": "r", "score": 2}"#)
            .expect("extra keys are fine");
        assert_eq!(verdict.category, VerdictCategory::Bad);
        assert!(!verdict.category.is_acceptable());
    }

    #[test]
    fn test_verdict_serializes_spaced_category() {
        let verdict = EvaluationVerdict {
            category: VerdictCategory::VeryBad,
            reason: "wrong language".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&verdict).expect("serialize"),
            json!({"category": "very bad", "reason": "wrong language"})
        );
    }
}

mod prompt_tests {
    use super::*;

    #[test]
    fn test_translation_prompt_embeds_text_verbatim() {
        let source = "Line one\n\n  Line two  ";
        let request = LlmTranslator::build_request(source, "English (US)", "Japanese");

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, ChatRole::System);
        assert!(request.messages[0].content.contains("Respond only with the translation"));
        assert!(request.messages[1].content.contains(source));
        assert!(request.messages[1].content.contains("from English (US) to Japanese"));
        assert!(request.response_format.is_none());
    }

    #[test]
    fn test_translation_prompt_is_deterministic() {
        assert_eq!(
            LlmTranslator::build_request("a", "b", "c"),
            LlmTranslator::build_request("a", "b", "c")
        );
    }

    #[test]
    fn test_judge_prompt_contents() {
        let prompt = TranslationJudge::build_prompt(
            "Hello world",
            "こんにちは、世界",
            "English (US)",
            "Japanese",
            Some("こんにちは 世界"),
        );

        assert!(prompt.contains("SOURCE TEXT (English (US)):\nHello world"));
        assert!(prompt.contains("REFERENCE TRANSLATION (Japanese):\nこんにちは 世界"));
        assert!(prompt.contains("CANDIDATE TRANSLATION (Japanese):\nこんにちは、世界"));
        for dimension in RUBRIC_DIMENSIONS {
            assert!(prompt.contains(dimension.title));
        }
        assert!(prompt.contains("(weight 40%)"));
        for category in VerdictCategory::ALL {
            assert!(prompt.contains(&format!("- {}: ", category.as_str())));
        }
        assert!(prompt.contains("\"category\": \"<category>\""));
    }

    #[test]
    fn test_judge_prompt_marks_missing_reference() {
        let prompt = TranslationJudge::build_prompt("a", "b", "c", "d", None);
        assert!(prompt.contains("REFERENCE TRANSLATION (d):\nNot provided"));

        let blank = TranslationJudge::build_prompt("a", "b", "c", "d", Some("  "));
        assert!(blank.contains("Not provided"));
    }

    #[test]
    fn test_rubric_weights_sum_to_one() {
        let total: f32 = RUBRIC_DIMENSIONS.iter().map(|d| d.weight).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_judge_request_asks_for_json() {
        let request = TranslationJudge::build_request("a", "b", "c", "d", Some("e"));
        assert_eq!(request.response_format, Some(ResponseFormat::JsonObject));
    }
}

mod client_tests {
    use super::*;

    #[tokio::test]
    async fn test_translate_via_model_trims_first_choice() {
        let chat = Arc::new(MockChatClient::new().push_content("  Bonjour le monde \n"));
        let translator = LlmTranslator::new(chat.clone());

        let output = translator
            .translate_via_model("Hello world", "English (US)", "French", "gpt-4o")
            .await
            .expect("translation");

        assert_eq!(output, "Bonjour le monde");
        let calls = chat.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "gpt-4o");
    }

    #[tokio::test]
    async fn test_translate_via_model_without_choices_fails() {
        let chat = Arc::new(MockChatClient::new().push_body(json!({"choices": []})));
        let translator = LlmTranslator::new(chat);

        let err = translator
            .translate_via_model("Hello", "English (US)", "French", "gpt-4o")
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Shape { .. }));
        assert!(err.to_string().contains("Invalid response format"));
    }

    #[tokio::test]
    async fn test_judge_parses_fenced_verdict() {
        let chat = Arc::new(MockChatClient::new().push_content(format!("```json\n{VERDICT_JSON}\n```")));
        let judge = TranslationJudge::new(chat.clone());

        let verdict = judge
            .judge("Hello world", "こんにちは 世界", "English (US)", "Japanese", "gpt-4", Some("こんにちは 世界"))
            .await
            .expect("verdict");

        assert_eq!(verdict.category, VerdictCategory::Excellent);
        assert_eq!(
            chat.calls()[0].1.response_format,
            Some(ResponseFormat::JsonObject)
        );
    }

    #[tokio::test]
    async fn test_judge_rejects_prose() {
        let chat = Arc::new(MockChatClient::new().push_content("Looks great to me!"));
        let judge = TranslationJudge::new(chat);

        let err = judge
            .judge("a", "b", "c", "d", "gpt-4", Some("e"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_judge_without_choices_fails_like_translator() {
        let chat = Arc::new(MockChatClient::new().push_body(json!({"object": "chat.completion"})));
        let judge = TranslationJudge::new(chat);

        let err = judge
            .judge("a", "b", "c", "d", "gpt-4", None)
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Shape { .. }));
    }
}
