use anyhow::Result;
use garmincsv::{build, config::Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) fixed configuration ──────────────────────────────────────
    let cfg = Config::default();
    info!(
        source = %cfg.source_root.display(),
        target = %cfg.target_dir.display(),
        "converting Garmin export to CSV"
    );

    // ─── 3) build the three tables ───────────────────────────────────
    build::build_all(&cfg)?;

    info!("all processing complete");
    Ok(())
}
