use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{config::OrderSettings, error::AppError, service::order::OrderService};

/// Starts the order expiry scheduler
///
/// Runs on `schedule` (a cron expression with seconds) and cancels every unfinished order
/// whose closed-by deadline has passed. A failed sweep is logged and the next run proceeds
/// normally.
///
/// # Arguments
/// - `db`: Database connection
/// - `order_settings`: Settings for the order service
/// - `schedule`: Cron expression for the sweep
pub async fn start_scheduler(
    db: DatabaseConnection,
    order_settings: Arc<OrderSettings>,
    schedule: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let order_settings = order_settings.clone();

        Box::pin(async move {
            if let Err(e) = expire_overdue_orders(&db, &order_settings).await {
                tracing::error!("Error expiring overdue orders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Order expiry scheduler started with schedule '{}'", schedule);

    Ok(scheduler)
}

/// Cancels overdue unfinished orders once
async fn expire_overdue_orders(
    db: &DatabaseConnection,
    order_settings: &OrderSettings,
) -> Result<(), AppError> {
    let expired = OrderService::new(db, order_settings)
        .expire_overdue(Utc::now())
        .await?;

    if expired > 0 {
        tracing::info!("Expired {} overdue orders", expired);
    } else {
        tracing::debug!("No overdue orders to expire");
    }

    Ok(())
}
