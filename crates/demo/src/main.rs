use stockroom_demo::{DemoConfig, display_sink, run_session};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env()?;
    stockroom_observability::init_with(config.log_format);

    if config.mirror_weekday.is_some() && config.mirror_file.is_none() {
        tracing::warn!("STOCKROOM_MIRROR_WEEKDAY set without STOCKROOM_MIRROR_FILE; ignoring");
    }

    tracing::info!(capacity = config.capacity, "starting session");

    let mut display = display_sink(&config)?;
    let stock = run_session(&config, &mut display)?;

    tracing::info!(stock = %serde_json::to_string(&stock)?, "final stock");
    Ok(())
}
