use anyhow::Context;
use sol_overlay::api::{self, AppState};
use sol_overlay::ledger::{LedgerClient, SolanaRpcClient};
use sol_overlay::orchestration::{read_address, AddressGate, Reconciler};
use sol_overlay::{Config, OverlayState};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("Configuration error")?;

    // State exists from the start; nothing can reach it until the gate opens.
    let overlay = Arc::new(OverlayState::new());

    let (tx, rx) = AddressGate::channel();
    let preset = config.wallet_address.clone();
    let source = tokio::spawn(async move {
        let stdin = BufReader::new(tokio::io::stdin());
        let raw = read_address(preset.as_deref(), stdin, tokio::io::stdout()).await?;
        tx.signal(&raw).map(|_| ())
    });

    let address = match rx.wait_ready().await {
        Ok(address) => address,
        Err(closed) => {
            // Prefer the source's own reason (e.g. a blank address) over "closed".
            let reason = match source.await {
                Ok(Err(e)) => e,
                _ => closed,
            };
            return Err(reason).context("Wallet address unavailable");
        }
    };
    tracing::info!(address = %address, "Wallet address received, overlay active");

    let ledger: Arc<dyn LedgerClient> = Arc::new(
        SolanaRpcClient::new(config.rpc_url.clone(), config.rpc_timeout)
            .context("Failed to build RPC client")?,
    );
    let reconciler = Reconciler::new(
        ledger,
        overlay.clone(),
        Some(address.clone()),
        config.rpc_timeout,
    );

    // Seed the balance before the overlay becomes reachable.
    reconciler.reconcile_once().await;
    let _periodic = reconciler.spawn_periodic(config.reconcile_interval);

    let app = api::create_router(
        AppState::new(overlay, address).with_refresh_secs(config.refresh_secs),
    );

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Overlay available at http://{}/", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
