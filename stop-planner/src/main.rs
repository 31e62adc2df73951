use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use stop_planner::cache::{CachedGeocoder, GeocodeCacheConfig};
use stop_planner::config::AppConfig;
use stop_planner::geocode::{NominatimClient, NominatimConfig};
use stop_planner::osrm::{OsrmClient, OsrmConfig};
use stop_planner::planner::StopConfig;
use stop_planner::speed::{JurisdictionSpeedResolver, SpeedLimitTable};
use stop_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("stop_planner=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();

    // Speed limits are loaded once and never change (fail fast if missing)
    let table = SpeedLimitTable::load(&config.speed_limits_path)
        .expect("Failed to load speed limit table")
        .with_default(config.default_speed_mph);
    info!(
        jurisdictions = table.len(),
        path = %config.speed_limits_path,
        "loaded speed limits"
    );

    let osrm_config = OsrmConfig::new(&config.user_agent).with_base_url(&config.osrm_base_url);
    let osrm = OsrmClient::new(osrm_config).expect("Failed to create OSRM client");

    let nominatim_config =
        NominatimConfig::new(&config.user_agent).with_base_url(&config.nominatim_base_url);
    let nominatim =
        NominatimClient::new(nominatim_config).expect("Failed to create Nominatim client");
    let geocoder = CachedGeocoder::new(nominatim, &GeocodeCacheConfig::default());

    let speeds = JurisdictionSpeedResolver::new(geocoder, Arc::new(table))
        .with_timeout(config.lookup_timeout);

    let stop_config = StopConfig {
        initial_speed_mph: config.default_speed_mph,
        ..StopConfig::default()
    };

    let state = AppState::new(osrm, speeds, stop_config);
    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    info!("Stop Planner listening on http://{addr}");
    info!("  GET  /health      - Health check");
    info!("  GET  /plan-route  - Plan stops (?coordinates=lat,lon;lat,lon&format=csv|json|html)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
