use pixport_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    pixport_api::telemetry::init_telemetry();

    let app = pixport_api::setup::initialize_app(&config).await?;
    pixport_api::setup::server::start_server(&config, app).await?;

    Ok(())
}
