use lambda_runtime::{run, service_fn, Error};
use tracing::info;

mod adapters;
mod handler;
mod model;
mod util;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().json().init();
    info!("called");

    let config = aws_config::load_from_env().await;
    let client = aws_sdk_s3::Client::new(&config);
    let client_ref = &client;

    run(service_fn(move |event| async move {
        handler::handle_event(event, client_ref).await
    }))
    .await
}
