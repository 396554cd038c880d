//! Order service.
//!
//! Sits between the controllers and `OrderRepository`. The service derives order codes,
//! bounds every store call with the configured deadline, turns missing rows into explicit
//! `NotFound` errors and converts entity models into domain models.

pub mod code;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::{future::Future, time::Duration};

use crate::server::{
    config::OrderSettings,
    data::order::OrderRepository,
    error::{order::OrderError, AppError},
    model::order::{
        CreateOrderParams, OrderDraft, OrderStatus, OrderWithItems, PlacedOrder, UNSET_PAY_WAY,
    },
};

use self::code::OrderCodeGenerator;

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a OrderSettings,
    store_timeout: Duration,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection, settings: &'a OrderSettings) -> Self {
        Self {
            db,
            settings,
            store_timeout: settings.store_timeout,
        }
    }

    /// Replaces the configured store timeout for calls made through this service.
    ///
    /// A caller with a tighter budget than the configured one can also abandon a call by
    /// dropping its future; either way the open transaction rolls back.
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Places a new order.
    ///
    /// Derives the order code from the submission time and user ID using the configured
    /// scheme, then stores the order and its items atomically. The closed-by deadline is the
    /// submission time plus the configured closed interval.
    ///
    /// # Returns
    /// - `Ok(PlacedOrder)`: Generated ID and order code
    /// - `Err(AppError::OrderErr)`: Duplicate code, out-of-range value, store failure or deadline
    pub async fn place_order(&self, params: CreateOrderParams) -> Result<PlacedOrder, AppError> {
        let order_code = OrderCodeGenerator::new(self.settings.code_scheme)
            .generate(params.submitted_at, params.user_id);

        let draft = OrderDraft {
            order_code: order_code.clone(),
            user_id: params.user_id,
            address_id: params.address_id,
            total_price: params.total_price,
            promotion: params.promotion,
            freight: params.freight,
            created: params.submitted_at,
        };

        let repo = OrderRepository::new(self.db);
        let id = self
            .with_deadline(repo.place(&draft, &params.items, self.settings.closed_interval_hours))
            .await?;

        tracing::info!(
            "Placed order {} ({}) for user {} with {} items",
            id,
            order_code,
            draft.user_id,
            params.items.len()
        );

        Ok(PlacedOrder { id, order_code })
    }

    /// Resolves an order code to its order ID.
    ///
    /// # Returns
    /// - `Ok(i32)`: Order ID
    /// - `Err(AppError::OrderErr(OrderError::NotFound))`: No order uses this code
    pub async fn order_id_by_code(&self, order_code: &str) -> Result<i32, AppError> {
        let repo = OrderRepository::new(self.db);

        let id = self
            .with_deadline(repo.find_id_by_code(order_code))
            .await?
            .ok_or_else(|| OrderError::NotFound(format!("with code {}", order_code)))?;

        Ok(id)
    }

    /// Gets an order with its items.
    ///
    /// # Returns
    /// - `Ok(OrderWithItems)`: Order and its items
    /// - `Err(AppError::OrderErr(OrderError::NotFound))`: No order with this ID
    /// - `Err(AppError::InternalErr)`: Stored values do not fit the domain model
    pub async fn get_by_id(&self, id: i32) -> Result<OrderWithItems, AppError> {
        let repo = OrderRepository::new(self.db);

        let (order, items) = self
            .with_deadline(repo.get_by_id(id))
            .await?
            .ok_or_else(|| OrderError::NotFound(format!("with id {}", id)))?;

        Ok(OrderWithItems::from_entities(order, items)?)
    }

    /// Gets all orders of a user in exactly the given status.
    pub async fn get_by_user_and_status(
        &self,
        user_id: u64,
        status: OrderStatus,
    ) -> Result<Vec<OrderWithItems>, AppError> {
        let repo = OrderRepository::new(self.db);

        let rows = self
            .with_deadline(repo.get_by_user_and_status(user_id, status))
            .await?;

        rows.into_iter()
            .map(|(order, items)| OrderWithItems::from_entities(order, items))
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    /// Marks an unfinished order as paid.
    ///
    /// # Returns
    /// - `Ok(OrderWithItems)`: The updated order
    /// - `Err(AppError::BadRequest)`: `pay_way` is the unset value 0
    /// - `Err(AppError::OrderErr)`: Unknown order, order not unfinished, or store failure
    pub async fn pay(
        &self,
        id: i32,
        pay_way: u8,
        now: DateTime<Utc>,
    ) -> Result<OrderWithItems, AppError> {
        if pay_way == UNSET_PAY_WAY {
            return Err(AppError::BadRequest(
                "Pay way must be non-zero".to_string(),
            ));
        }

        let repo = OrderRepository::new(self.db);
        self.with_deadline(repo.pay(id, pay_way, now)).await?;

        tracing::info!("Order {} paid with pay way {}", id, pay_way);

        self.get_by_id(id).await
    }

    /// Marks a paid order as consigned with the given ship code.
    ///
    /// # Returns
    /// - `Ok(OrderWithItems)`: The updated order
    /// - `Err(AppError::BadRequest)`: Empty ship code
    /// - `Err(AppError::OrderErr)`: Unknown order, order not paid, or store failure
    pub async fn consign(
        &self,
        id: i32,
        ship_code: String,
        now: DateTime<Utc>,
    ) -> Result<OrderWithItems, AppError> {
        if ship_code.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Ship code must not be empty".to_string(),
            ));
        }

        let repo = OrderRepository::new(self.db);
        self.with_deadline(repo.consign(id, ship_code, now)).await?;

        tracing::info!("Order {} consigned", id);

        self.get_by_id(id).await
    }

    /// Sets the status of an order regardless of its current status.
    pub async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<OrderWithItems, AppError> {
        let repo = OrderRepository::new(self.db);
        self.with_deadline(repo.update_status(id, status, now))
            .await?;

        tracing::info!("Order {} set to status {}", id, status);

        self.get_by_id(id).await
    }

    /// Cancels unfinished orders whose closed-by deadline is before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of orders canceled
    pub async fn expire_overdue(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(self.with_deadline(repo.expire_overdue(now)).await?)
    }

    /// Runs a store operation bounded by the store timeout.
    ///
    /// A timed out operation is dropped; an open transaction inside it rolls back on drop.
    async fn with_deadline<T, F>(&self, operation: F) -> Result<T, OrderError>
    where
        F: Future<Output = Result<T, OrderError>>,
    {
        let timeout = self.store_timeout;

        match tokio::time::timeout(timeout, operation).await {
            Ok(result) => result,
            Err(_) => Err(OrderError::DeadlineExceeded(timeout)),
        }
    }
}
