use scribe_core::generic::{Message, Role};
use serde::{Deserialize, Serialize};

use crate::error::OpenAiError;
use crate::impl_builder_methods;

use super::common;

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Extension understood by search-capable gateways. Omitted unless set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_search: Option<bool>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
            web_search: None,
        }
    }
}

impl_builder_methods!(
    ChatCompletionRequest,
    temperature: f64,
    web_search: bool
);

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
    Tool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionMessageForResponse,
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    pub usage: Option<common::Usage>,
}

impl ChatCompletionResponse {
    /// Text of the first choice.
    ///
    /// A response cut at the token limit is still returned; refusals and
    /// tool calls are not text and fail with [`OpenAiError::Format`].
    pub fn into_text(self) -> Result<String, OpenAiError> {
        let Some(first_choice) = self.choices.into_iter().next() else {
            return Err(OpenAiError::Format("response has no choices".into()));
        };

        match first_choice.finish_reason {
            None | Some(FinishReason::Stop) | Some(FinishReason::Length) => first_choice
                .message
                .content
                .ok_or_else(|| OpenAiError::Format("response message has no content".into())),
            Some(other) => Err(OpenAiError::Format(format!(
                "unhandled finish reason on API: {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    #[serde(other)]
    Other,
}

impl From<Role> for MessageRole {
    fn from(value: Role) -> Self {
        match value {
            Role::User => MessageRole::User,
        }
    }
}

impl From<&Message> for ChatCompletionMessage {
    fn from(value: &Message) -> Self {
        Self {
            role: value.role.into(),
            content: value.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(value: serde_json::Value) -> ChatCompletionResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn request_omits_unset_options() {
        let request =
            ChatCompletionRequest::new("gpt-4o".into(), vec![(&Message::user("Hello")).into()]);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "Hello"}],
            })
        );
    }

    #[test]
    fn request_builder_sets_options() {
        let request = ChatCompletionRequest::new("gpt-4o".into(), vec![])
            .temperature(0.5)
            .web_search(true);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["temperature"], json!(0.5));
        assert_eq!(value["web_search"], json!(true));
    }

    #[test]
    fn first_choice_text_is_returned() {
        let text = response(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1,
            "model": "gpt-4o",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Hi!"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 1, "completion_tokens": 2, "total_tokens": 3}
        }))
        .into_text()
        .unwrap();

        assert_eq!(text, "Hi!");
    }

    #[test]
    fn response_metadata_is_kept_for_logging() {
        let parsed = response(json!({
            "id": "chatcmpl-7",
            "model": "gpt-4o-2024-08-06",
            "choices": [{"message": {"content": "ok"}, "finish_reason": "stop"}]
        }));

        assert_eq!(parsed.id.as_deref(), Some("chatcmpl-7"));
        assert_eq!(parsed.model.as_deref(), Some("gpt-4o-2024-08-06"));
        assert_eq!(parsed.usage, None);
    }

    #[test]
    fn minimal_response_is_accepted() {
        let text = response(json!({
            "choices": [{"message": {"role": "assistant", "content": "ok"}}]
        }))
        .into_text()
        .unwrap();

        assert_eq!(text, "ok");
    }

    #[test]
    fn truncated_response_is_still_text() {
        let text = response(json!({
            "choices": [{"message": {"role": "assistant", "content": "cut"}, "finish_reason": "length"}]
        }))
        .into_text()
        .unwrap();

        assert_eq!(text, "cut");
    }

    #[test]
    fn missing_choices_is_a_format_error() {
        let err = response(json!({"choices": []})).into_text().unwrap_err();
        assert!(matches!(err, OpenAiError::Format(_)));
    }

    #[test]
    fn missing_content_is_a_format_error() {
        let err = response(json!({
            "choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "stop"}]
        }))
        .into_text()
        .unwrap_err();

        assert!(matches!(err, OpenAiError::Format(_)));
    }

    #[test]
    fn content_filter_is_rejected() {
        let err = response(json!({
            "choices": [{"message": {"role": "assistant", "content": ""}, "finish_reason": "content_filter"}]
        }))
        .into_text()
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "OpenAI format error: unhandled finish reason on API: ContentFilter"
        );
    }

    #[test]
    fn unknown_finish_reason_is_tolerated_by_the_parser() {
        let parsed = response(json!({
            "choices": [{"message": {"role": "assistant", "content": "x"}, "finish_reason": "eos"}]
        }));
        assert_eq!(parsed.choices[0].finish_reason, Some(FinishReason::Other));
    }
}
