use chat_backend::core::config::StreamConfig;
use chat_backend::stream::handler::StreamHandler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    chat_backend::setup_logging();

    let handler = StreamHandler::new(StreamConfig::from_env()).await;
    let handler = &handler;

    lambda_runtime::run(lambda_runtime::service_fn(move |event| async move {
        handler.handle(event).await
    }))
    .await
}
