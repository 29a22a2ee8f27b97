use recipe_app::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    let app = router::routes()
        .with_state(AppState { db })
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
