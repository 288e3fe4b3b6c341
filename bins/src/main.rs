use dotenv::dotenv;
use eyre::Context;
use log::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let dotenv_result = dotenv();
    pretty_env_logger::init();
    color_eyre::install()?;
    if let Err(err) = dotenv_result {
        info!("Failed to load .env file: {}", err);
    }

    info!("loading config");
    let env = env::Env::load().context("Failed to load config")?;

    info!("Starting payment relay...");
    payment_server::serve(env).await?;

    Ok(())
}
