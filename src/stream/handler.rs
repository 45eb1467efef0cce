//! Streaming chat handler.
//!
//! Returns a Lambda Response Streaming body fed by a background task that
//! pumps Bedrock `ConverseStream` text deltas into SSE frames. The metadata
//! prelude (status + headers) is emitted by the runtime before the first
//! frame, followed by the 8-NUL delimiter REST API streaming requires.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, ConverseStreamOutput, InferenceConfiguration, Message,
};
use bytes::Bytes;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use http::StatusCode;
use lambda_runtime::{Error, LambdaEvent, MetadataPrelude, StreamResponse};
use serde_json::Value;
use tracing::{error, info};

use super::request::ChatRequest;
use super::sse;
use crate::core::config::StreamConfig;
use crate::errors::HandlerError;

const MAX_TOKENS: i32 = 1200;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.9;

/// One chunk of the streamed response body.
pub type Frame = Result<Bytes, Error>;

/// Lambda entry point holding the process-wide Bedrock client.
pub struct StreamHandler {
    config: StreamConfig,
    bedrock: Client,
}

impl StreamHandler {
    pub async fn new(config: StreamConfig) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        Self {
            bedrock: Client::new(&aws_config),
            config,
        }
    }

    /// Handles one invocation.
    ///
    /// The response prelude always reports success: failures after streaming
    /// has started surface as a best-effort `[ERROR]` frame and the stream
    /// ends without `[DONE]`.
    #[tracing::instrument(
        level = "info",
        skip(self, event),
        fields(request_id = %event.context.request_id)
    )]
    pub async fn handle(
        &self,
        event: LambdaEvent<Value>,
    ) -> Result<StreamResponse<UnboundedReceiver<Frame>>, Error> {
        let request = ChatRequest::from_event(&event.payload);
        info!(model_id = %self.config.model_id, "Starting streaming chat");

        let (tx, rx) = unbounded();
        let client = self.bedrock.clone();
        let config = self.config.clone();

        tokio::spawn(async move {
            match pump_model_stream(&client, &config, &request.message, &tx).await {
                Ok(()) => {
                    let _ = tx.unbounded_send(Ok(Bytes::from_static(sse::DONE_FRAME.as_bytes())));
                }
                Err(e) => {
                    error!("Streaming chat failed: {}", e);
                    let _ = tx.unbounded_send(Ok(Bytes::from(sse::error_frame(&e.to_string()))));
                }
            }
        });

        let metadata_prelude = MetadataPrelude {
            status_code: StatusCode::OK,
            headers: sse::response_headers(),
            cookies: Vec::new(),
        };

        Ok(StreamResponse {
            metadata_prelude,
            stream: rx,
        })
    }
}

/// Forwards every text delta from one `ConverseStream` call as an SSE frame.
async fn pump_model_stream(
    client: &Client,
    config: &StreamConfig,
    message: &str,
    tx: &UnboundedSender<Frame>,
) -> Result<(), HandlerError> {
    let user_message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(message.to_string()))
        .build()
        .map_err(|e| HandlerError::Aws(e.to_string()))?;

    let response = client
        .converse_stream()
        .model_id(&config.model_id)
        .messages(user_message)
        .inference_config(
            InferenceConfiguration::builder()
                .max_tokens(MAX_TOKENS)
                .temperature(TEMPERATURE)
                .top_p(TOP_P)
                .build(),
        )
        .send()
        .await?;

    let mut stream = response.stream;
    while let Some(output) = stream.recv().await? {
        if let ConverseStreamOutput::ContentBlockDelta(delta_event) = output
            && let Some(delta) = delta_event.delta()
            && let Ok(text) = delta.as_text()
            && !text.is_empty()
        {
            // A closed channel means the client went away; stop pumping.
            if tx
                .unbounded_send(Ok(Bytes::from(sse::data_frame(text))))
                .is_err()
            {
                return Ok(());
            }
        }
    }

    Ok(())
}
