pub mod bot;
pub mod config;
pub mod crawler;
pub mod declare;
pub mod event;
pub mod logging;
pub mod scheduler;
pub mod server;
pub mod util;

use std::sync::Arc;

use anyhow::Result;
use tokio_cron_scheduler::JobScheduler;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cfg = Arc::new(config::App::get()?);

    let sched = JobScheduler::new().await?;
    if let Err(why) = scheduler::start(&sched, cfg.clone()).await {
        logging::error_file_async(format!("Failed to scheduler::start because {:?}", why));
    }

    let addr = format!("0.0.0.0:{}", cfg.system.http_port);
    logging::info_console(format!("listening on {}", addr));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, server::router(cfg)).await?;

    Ok(())
}
