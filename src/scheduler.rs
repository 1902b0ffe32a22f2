use std::{env, future::Future, sync::Arc};

use anyhow::{Error, Result};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{bot, config::App, event, logging};

/// 早安播報的標題
const MORNING_TITLE: &str = "早安！今日市場指數播報：";
/// 每日 00:30 UTC，即北京時間 08:30
const MORNING_CRON: &str = "0 30 0 * * *";

/// 啟動排程
pub async fn start(sched: &JobScheduler, cfg: Arc<App>) -> Result<()> {
    run_cron(sched, cfg.clone()).await?;

    if cfg.bot.telegram.chat_id == 0 {
        return Ok(());
    }

    let msg = format!(
        "IndexBot 已啟動\r\nRust OS/Arch: {}/{}\r\n",
        env::consts::OS,
        env::consts::ARCH
    );

    bot::telegram::send(&cfg, cfg.bot.telegram.chat_id, &msg).await
}

async fn run_cron(sched: &JobScheduler, cfg: Arc<App>) -> Result<()> {
    // 08:30 播報今日市場指數
    let job = create_job(MORNING_CRON, move || {
        let cfg = cfg.clone();
        async move { morning_broadcast(&cfg).await }
    })?;

    sched.add(job).await?;
    sched.start().await?;

    Ok(())
}

/// 定時播報，未設定預設聊天室時不做任何事
async fn morning_broadcast(cfg: &App) -> Result<()> {
    if cfg.bot.telegram.chat_id == 0 {
        return Ok(());
    }

    event::market_index::execute(cfg, cfg.bot.telegram.chat_id, Some(MORNING_TITLE)).await
}

fn create_job<F, Fut>(cron_expr: &'static str, task: F) -> Result<Job>
where
    F: Fn() -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<(), Error>> + Send,
{
    Ok(Job::new_async(cron_expr, move |_uuid, _l| {
        let task = task.clone();
        Box::pin(async move {
            if let Err(why) = task().await {
                logging::error_file_async(format!(
                    "Failed to execute task({}) because {:?}",
                    cron_expr, why
                ));
            }
        })
    })?)
}
