use anyhow::{Context, Result};
use md2html::Config;

fn main() -> Result<()> {
    let config = Config::parse();

    let env = env_logger::Env::default().default_filter_or(config.log_level());
    env_logger::Builder::from_env(env).init();

    config.validate().context("Invalid configuration")?;

    let renderer = config
        .renderer()
        .context("Failed to configure markdown renderer")?;

    md2html::convert_file(&renderer, &config.input, &config.output)?;

    Ok(())
}
