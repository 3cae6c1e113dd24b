use hubprop::infrastructure::config::AppConfig;
use hubprop::infrastructure::hubspot::HubSpotClient;
use hubprop::interfaces::http::start_server;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let sink = Arc::new(HubSpotClient::new(
        &config.hubspot_base_url,
        &config.hubspot_token,
    ));

    tracing::info!("Listening on {}:{}", config.bind_host, config.bind_port);
    start_server(sink, &config.bind_host, config.bind_port)?.await
}
