use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_planner::config::AppConfig;
use trip_planner::timetable::load_csv_path;
use trip_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let timetable = load_csv_path(&config.timetable_path)?;
    info!(
        connections = timetable.len(),
        cities = timetable.cities().len(),
        "timetable ready"
    );

    let app = create_router(AppState::new(timetable));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "trip planner listening");
    info!("endpoints: GET /health, GET /connections, GET /search, GET /itineraries/:id, POST /bookings, GET /reservations");

    axum::serve(listener, app).await?;
    Ok(())
}
