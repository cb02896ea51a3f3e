use serde::{Deserialize, Serialize};

use crate::languages;
use crate::openai::{ChatCompletionRequest, ChatMessage};

pub const TEMPERATURE: f64 = 0.3;

/// Body of `POST /translate`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationParams {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub target_lang: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationInput {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
}

impl TranslationParams {
    /// `None` unless all three fields are present and non-empty.
    ///
    /// Identical source and target languages are accepted.
    pub fn validate(self) -> Option<TranslationInput> {
        let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());
        Some(TranslationInput {
            text: non_empty(self.text)?,
            source_lang: non_empty(self.source_lang)?,
            target_lang: non_empty(self.target_lang)?,
        })
    }
}

pub fn system_prompt(source_lang: &str, target_lang: &str) -> String {
    format!(
        "You are a professional translator. Translate the given text from {} to {}. Only return the translated text, nothing else.",
        languages::display_name(source_lang),
        languages::display_name(target_lang),
    )
}

impl TranslationInput {
    pub fn to_completion_request(&self, model: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![
                ChatMessage::system(system_prompt(&self.source_lang, &self.target_lang)),
                ChatMessage::user(self.text.clone()),
            ],
            temperature: TEMPERATURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(json: &str) -> TranslationParams {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_validate_complete() {
        let input = params(r#"{"text":"Hello","sourceLang":"en","targetLang":"es"}"#)
            .validate()
            .unwrap();
        assert_eq!(input.text, "Hello");
        assert_eq!(input.source_lang, "en");
        assert_eq!(input.target_lang, "es");
    }

    #[test]
    fn test_validate_missing_fields() {
        assert!(params(r#"{"sourceLang":"en","targetLang":"es"}"#)
            .validate()
            .is_none());
        assert!(params(r#"{"text":"Hello","targetLang":"es"}"#)
            .validate()
            .is_none());
        assert!(params(r#"{"text":"Hello","sourceLang":"en"}"#)
            .validate()
            .is_none());
        assert!(params(r#"{"text":"","sourceLang":"en","targetLang":"es"}"#)
            .validate()
            .is_none());
        assert!(params("{}").validate().is_none());
    }

    #[test]
    fn test_same_language_is_allowed() {
        let input = params(r#"{"text":"Hello","sourceLang":"en","targetLang":"en"}"#).validate();
        assert!(input.is_some());
    }

    #[test]
    fn test_system_prompt() {
        assert_eq!(
            system_prompt("en", "zh-CN"),
            "You are a professional translator. Translate the given text from English to Chinese (Simplified). Only return the translated text, nothing else."
        );
        assert!(system_prompt("tlh", "es").contains("from tlh to Spanish"));
    }

    #[test]
    fn test_completion_request() {
        let input = TranslationInput {
            text: "  Hello  ".to_string(),
            source_lang: "en".to_string(),
            target_lang: "fr".to_string(),
        };
        let request = input.to_completion_request("gpt-4o-mini");
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert!(request.messages[0].content.contains("English to French"));
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, "  Hello  ");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = TranslationResult {
            translated_text: "Hola".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"translatedText":"Hola"}"#
        );
    }
}
