use anyhow::Result;
use postloom_common::observability::{init_logging, LogConfig};
use postloom_config::{PostloomConfig, PostloomConfigLoader};

mod driver;

#[tokio::main]
async fn main() -> Result<()> {
    // 1) Load config (env wins over file values)
    let config_path =
        std::env::var("POSTLOOM_CONFIG").unwrap_or_else(|_| "postloom.yaml".to_string());
    let cfg: PostloomConfig = PostloomConfigLoader::new().with_file(&config_path).load()?;

    init_logging(LogConfig::default())?;

    let session = driver::build_session(&cfg)?;
    driver::run(session, cfg.publisher.author.clone()).await
}
