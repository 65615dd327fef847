use std::sync::Arc;

use scribe_core::{
    error::ProviderError,
    generic::Message,
    provider::{CompletionClient, CompletionFuture},
};

use crate::{OpenAiAdapter, api_v1::ChatCompletionRequest};

impl CompletionClient for OpenAiAdapter {
    fn complete<'a>(
        &'a self,
        model: &'a str,
        messages: &'a [Message],
        web_search: bool,
    ) -> CompletionFuture<'a> {
        let client = Arc::clone(&self.client);
        let temperature = self.temperature;

        Box::pin(async move {
            let mut request = ChatCompletionRequest::new(
                model.to_owned(),
                messages.iter().map(Into::into).collect(),
            );
            if let Some(temperature) = temperature {
                request = request.temperature(temperature);
            }
            if web_search {
                request = request.web_search(true);
            }

            let response = client
                .chat_completion(request)
                .await
                .map_err(ProviderError::from)?;
            response.into_text().map_err(ProviderError::from)
        })
    }
}
