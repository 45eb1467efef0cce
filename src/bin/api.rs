use std::sync::Arc;

use chat_backend::api::handler::ApiHandler;
use chat_backend::api::proxy::ProxyAdapter;
use chat_backend::core::config::ApiConfig;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    chat_backend::setup_logging();

    let config = ApiConfig::from_env()?;
    let adapter = Arc::new(ProxyAdapter::new(&config)?);
    let handler = ApiHandler::new(config, adapter);
    let handler = &handler;

    lambda_runtime::run(lambda_runtime::service_fn(move |event| async move {
        handler.handle(event).await
    }))
    .await
}
