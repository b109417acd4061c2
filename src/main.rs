use habit_tracker::{load_data, resolve_data_path, router, run_reconcile, AppState};
use std::{env, net::SocketAddr, time::Duration};
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path()?;
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let (data, warning) = load_data(&data_path).await;
    let state = AppState::new(data_path, data, warning);

    // catch up on anything missed while the server was down
    if let Err(err) = run_reconcile(&state).await {
        error!("startup reconcile failed: {}", err.message);
    }

    let period = env::var("RECONCILE_INTERVAL_SECS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(86_400);
    let timer_state = state.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(period));
        // the first tick fires immediately; startup already reconciled
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(err) = run_reconcile(&timer_state).await {
                error!("scheduled reconcile failed: {}", err.message);
            }
        }
    });

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
