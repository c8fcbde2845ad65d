use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the error report handler, load `.env` and set up logging.
pub fn init() -> eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_file(true)
        .with_line_number(true)
        .without_time()
        .init();

    Ok(())
}
