use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use itinerary_mapper::api::ApiItinerary;
use itinerary_mapper::mapper::{MapperConfig, map_itinerary};

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays valid JSON
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = MapperConfig::from_env();

    // Payload from the path argument, or stdin
    let payload = match std::env::args().nth(1) {
        Some(path) => ApiItinerary::from_path(&path),
        None => ApiItinerary::from_reader(io::stdin().lock()),
    };
    let itinerary = match payload {
        Ok(itinerary) => itinerary,
        Err(e) => {
            error!(error = %e, "Failed to read itinerary");
            return ExitCode::FAILURE;
        }
    };

    let mapped = map_itinerary(&config, &itinerary);
    info!(
        id = mapped.id.as_deref().unwrap_or("?"),
        kind = mapped.kind.map(|k| k.as_str()).unwrap_or("unclassified"),
        sectors = mapped.sectors.as_ref().map_or(0, Vec::len),
        "Mapped itinerary"
    );

    match serde_json::to_string_pretty(&mapped) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to serialize itinerary");
            ExitCode::FAILURE
        }
    }
}
