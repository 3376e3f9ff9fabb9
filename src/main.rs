use greengrid::core::{AppState, Config, StaticToken};
use greengrid::repositories::{ApiClient, ApiResource, Collection};
use greengrid::services::{GenerationFeed, GenerationFeedConfig, ListController, ListStatus};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Inizializza la configurazione
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Configuration error: {}", message);
            std::process::exit(1);
        }
    };
    config.print_info();

    // Client condiviso: credenziale iniettata alla costruzione
    let credentials = Arc::new(StaticToken::new(config.api_token.clone()));
    let client = ApiClient::new(config.api_base_url.clone(), credentials);
    let mut state = AppState::new(client);

    // Primo caricamento di tutte le collezioni in parallelo
    tokio::join!(
        state.households.load(),
        state.inspections.load(),
        state.maintenance.load(),
        state.power_plants.load(),
        state.resources.load(),
    );
    log_collection("households", &state.households);
    log_collection("inspections", &state.inspections);
    log_collection("maintenance", &state.maintenance);
    log_collection("powerplants", &state.power_plants);
    log_collection("resources", &state.resources);

    if let Err(err) = state.units.load().await {
        warn!("Units lookup failed: {}", err);
    }
    if let Err(err) = state.staff.load().await {
        warn!("Staff lookup failed: {}", err);
    }

    // Monitor del feed di generazione: gira fino allo shutdown
    let feed_config = GenerationFeedConfig {
        url: config.feed_url.clone(),
        interval_secs: config.feed_poll_interval_secs,
        ..Default::default()
    };
    GenerationFeed::new(feed_config).run().await;
}

fn log_collection<R, S>(name: &str, controller: &ListController<R, S>)
where
    R: ApiResource,
    S: Collection<R>,
{
    match controller.status() {
        ListStatus::Ready => info!("{}: {} records", name, controller.items().len()),
        ListStatus::Error => warn!(
            "{}: {}",
            name,
            controller.error_message().unwrap_or("unknown error")
        ),
        ListStatus::Idle | ListStatus::Loading => {}
    }
}
