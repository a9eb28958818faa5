//! Terminal client for the employment-program dashboard.
//!
//! The controller core is synchronous; this binary owns all the actual I/O.
//! Every effect the controller asks for is spawned as a tokio task, and each
//! completion is fed back as a single event over an mpsc channel, in
//! whatever order the network happens to finish.

mod location;
mod transport;
mod view;

use std::env;
use std::sync::Arc;

use clap::Parser;
use controller::{Coordinates, DashboardController, Effect, Event};
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::location::{DeniedLocation, FixedLocation, LocationProvider};
use crate::transport::{Backend, HttpBackend};

/// Monthly employment-program performance dashboard.
#[derive(Debug, Parser)]
#[command(name = "dashboard")]
struct Args {
    /// Backend base URL; DASHBOARD_BACKEND_URL is honored when absent.
    #[arg(long)]
    backend_url: Option<String>,

    /// Device latitude, standing in for the platform geolocation fix.
    #[arg(long, requires = "longitude")]
    latitude: Option<f64>,

    /// Device longitude, standing in for the platform geolocation fix.
    #[arg(long, requires = "latitude")]
    longitude: Option<f64>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let backend_url = args
        .backend_url
        .or_else(|| env::var("DASHBOARD_BACKEND_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:8000".to_string());

    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(&backend_url));
    let provider: Arc<dyn LocationProvider> = match (args.latitude, args.longitude) {
        (Some(latitude), Some(longitude)) => Arc::new(FixedLocation {
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        }),
        _ => Arc::new(DeniedLocation),
    };

    info!("dashboard talking to {backend_url}");
    println!("commands: states | districts | state <id> | district <name> | show | quit");

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut controller = DashboardController::new();
    run_effects(controller.start(), &backend, &provider, &tx);

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(event) = rx.recv() => {
                let was_loading = controller.is_loading();
                debug!(?event, "handling event");
                let effects = controller.handle(event);
                run_effects(effects, &backend, &provider, &tx);
                view::print_notices(&controller.drain_notices());
                if was_loading && !controller.is_loading() {
                    view::print_dashboard(&controller);
                }
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        if !dispatch(line.trim(), &mut controller, &backend, &provider, &tx) {
                            break;
                        }
                        view::print_notices(&controller.drain_notices());
                    }
                    Ok(None) | Err(_) => break,
                }
            }
        }
    }
}

/// Handles one console command; returns `false` on quit.
fn dispatch(
    line: &str,
    controller: &mut DashboardController,
    backend: &Arc<dyn Backend>,
    provider: &Arc<dyn LocationProvider>,
    tx: &mpsc::UnboundedSender<Event>,
) -> bool {
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match cmd {
        "" => {}
        "quit" | "exit" => return false,
        "states" => view::print_states(controller),
        "districts" => view::print_districts(controller),
        "show" => view::print_dashboard(controller),
        "state" if !rest.is_empty() => {
            run_effects(controller.state_selected(rest), backend, provider, tx);
        }
        "district" if !rest.is_empty() => {
            let effects = controller.district_selected(rest);
            if effects.is_empty() {
                println!("select a state first");
            }
            run_effects(effects, backend, provider, tx);
        }
        _ => println!("unknown command: {line}"),
    }
    true
}

fn run_effects(
    effects: Vec<Effect>,
    backend: &Arc<dyn Backend>,
    provider: &Arc<dyn LocationProvider>,
    tx: &mpsc::UnboundedSender<Event>,
) {
    for effect in effects {
        let backend = Arc::clone(backend);
        let provider = Arc::clone(provider);
        let tx = tx.clone();
        tokio::spawn(async move {
            let event = run_effect(effect, backend.as_ref(), provider.as_ref()).await;
            let _ = tx.send(event);
        });
    }
}

/// Executes one effect; each effect completes as exactly one event.
async fn run_effect(
    effect: Effect,
    backend: &dyn Backend,
    provider: &dyn LocationProvider,
) -> Event {
    match effect {
        Effect::LoadStates => Event::StatesLoaded(backend.states().await),
        Effect::LoadDistricts { seq, state_id } => Event::DistrictsLoaded {
            seq,
            result: backend.districts(&state_id).await,
        },
        Effect::RequestLocationFix => Event::LocationFix(provider.current_position().await),
        Effect::LookupNearest {
            latitude,
            longitude,
        } => Event::NearestResolved(backend.nearest_district(latitude, longitude).await),
        Effect::FetchMetrics {
            seq,
            state_id,
            district_name,
        } => Event::MetricsLoaded {
            seq,
            result: backend.metrics(&state_id, &district_name).await,
        },
    }
}
