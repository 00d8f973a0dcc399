#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockledger_observability::init();

    let port: u16 = match std::env::var("PORT") {
        Ok(raw) => raw.parse()?,
        Err(_) => 5000,
    };

    let app = stockledger_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
