use common::{
    db::init_db,
    settings::types::{CodeStoreBackendKind, Settings},
};
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{event, instrument, Level};

mod expired_code_sweeper;

#[instrument(skip_all)]
pub async fn run_cron_processes(settings: Settings) -> Result<(), ()> {
    // Redis drops expired keys on its own.
    if settings.activation.code_store_backend == CodeStoreBackendKind::Redis {
        event!(Level::INFO, "Codes live in redis, expired code sweeper is not scheduled.");
        return Ok(());
    }

    let db = match init_db(&settings).await {
        Ok(db) => db,
        Err(e) => {
            event!(Level::ERROR, "{:?}", e);
            return Err(());
        }
    };

    let scheduler = match JobScheduler::new().await {
        Ok(scheduler) => scheduler,
        Err(e) => {
            event!(Level::ERROR, "{:?}", e);
            return Err(());
        }
    };

    let sweeper_job = match Job::new_async(
        settings.activation.expired_code_sweep_schedule.as_str(),
        move |_, _| {
            let db = db.clone();
            Box::pin(async move {
                expired_code_sweeper::sweep_expired_codes(&db).await;
            })
        },
    ) {
        Ok(job) => job,
        Err(e) => {
            event!(Level::ERROR, "{:?}", e);
            return Err(());
        }
    };
    if let Err(e) = scheduler.add(sweeper_job).await {
        event!(Level::ERROR, "{:?}", e);
        return Err(());
    };

    if let Err(e) = scheduler.start().await {
        event!(Level::ERROR, "{:?}", e);
        return Err(());
    }

    Ok(())
}
