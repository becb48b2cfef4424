use std::io::BufRead;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_finder::domain::Iata;
use trip_finder::graph::load_graph;
use trip_finder::output::{JsonLinesSink, TripRecord};
use trip_finder::search::{ItinerarySearch, SearchConfig, SearchJob};
use trip_finder::web::{AppState, create_router};

/// Name of the results file inside the output directory.
const RESULTS_FILE: &str = "trips.jsonl";

/// Find round-trip flight itineraries in a saved fare graph.
///
/// Results stream into <OUT>/trips.jsonl as they are found; Ctrl-C stops
/// the search early and keeps everything found so far.
#[derive(Parser, Debug)]
#[command(bin_name = "trip-finder")]
struct Args {
    /// Path to the JSON flight graph
    #[arg(long)]
    graph: PathBuf,

    /// The origin airport (IATA code)
    #[arg(long)]
    origin: String,

    /// Minimum nights per stop; 0 treats every gap as a connection
    #[arg(long, default_value_t = 0)]
    min_nights: u32,

    /// Maximum nights per stop (ignored when --min-nights is 0)
    #[arg(long, default_value_t = 0)]
    max_nights: u32,

    /// Maximum number of flights in one trip
    #[arg(long, default_value_t = 4)]
    max_flights: usize,

    /// Output directory for the results
    #[arg(long, default_value = "trips")]
    out: PathBuf,

    /// Serve the results on a local web page after the search
    #[arg(long, default_value_t = false)]
    serve: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let origin = Iata::parse(&args.origin).expect("invalid origin airport code");
    let graph = Arc::new(load_graph(&args.graph).expect("failed to load flight graph"));

    std::fs::create_dir_all(&args.out).expect("failed to create output directory");
    let results_path = args.out.join(RESULTS_FILE);
    let sink = JsonLinesSink::create(&results_path).expect("failed to create results file");

    let config = SearchConfig::new(origin, args.min_nights, args.max_nights, args.max_flights);
    let search = ItinerarySearch::new(graph, config).expect("invalid search configuration");

    let job = SearchJob::spawn(search, sink);

    // First Ctrl-C stops the search; in-flight branches wind down on
    // their own.
    let token = job.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("stop requested, letting the search wind down");
            token.request_stop();
        }
    });

    let (total, sink) = job.join().await.expect("search worker failed");
    sink.finish().expect("failed to flush results file");
    info!(total, path = %results_path.display(), "results written");

    if args.serve {
        serve_results(&args.out, &results_path, origin).await;
    }
}

/// Serve the written results on a local web page until Ctrl-C.
async fn serve_results(out_dir: &Path, results_path: &Path, origin: Iata) {
    let trips = read_trips(results_path).expect("failed to read results back");
    let state = AppState::new(origin.to_string(), trips);
    let app = create_router(state, out_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    info!("serving results at http://{addr}, press Ctrl-C to stop");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind results server");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .expect("results server failed");
}

/// Read a trips.jsonl file back into records.
fn read_trips(path: &Path) -> std::io::Result<Vec<TripRecord>> {
    let reader = std::io::BufReader::new(std::fs::File::open(path)?);
    let mut trips = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        trips.push(serde_json::from_str(&line).map_err(std::io::Error::other)?);
    }
    Ok(trips)
}
