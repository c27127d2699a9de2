#![recursion_limit = "256"]

mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Accounts client (non-fatal: auth routes answer 503 if config missing).
    let accounts = match services::accounts::AccountsClient::from_env() {
        Some(client) => {
            tracing::info!(base_url = client.base_url(), "accounts client initialized");
            Some(client)
        }
        None => {
            tracing::warn!("ACCOUNTS_URL not set, signup and login disabled");
            None
        }
    };

    let state = state::AppState::new(accounts);

    let app = routes::leptos_app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "lumina listening");
    axum::serve(listener, app).await.expect("server failed");
}
