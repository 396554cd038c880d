//! Order data repository.
//!
//! Owns every SQL statement touching the `orders` and `order_item` tables: the atomic
//! placement transaction, the read paths and the status mutations. Reads return entity
//! models; conversion to domain models happens in the service layer.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{
    error::order::OrderError,
    model::order::{OrderDraft, OrderItemDraft, OrderStatus, DEFAULT_SHIP_CODE, UNSET_PAY_WAY},
    util::parse::column_i64,
};

pub const ORDER_TABLE: &str = "orders";
pub const ORDER_ITEM_TABLE: &str = "order_item";

/// An order row together with its item rows.
pub type OrderRows = (entity::order::Model, Vec<entity::order_item::Model>);

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order and all of its items in one transaction.
    ///
    /// The closed-by deadline is `draft.created + closed_interval_hours`. The order row is
    /// inserted first and its generated ID is written into every item row. Any failure rolls
    /// back the whole transaction, so either the order and all items are stored or nothing is.
    /// An empty `items` slice stores the order alone.
    ///
    /// # Arguments
    /// - `draft`: Order values supplied by the caller
    /// - `items`: Lines to store with the order
    /// - `closed_interval_hours`: Hours until an unpaid order expires
    ///
    /// # Returns
    /// - `Ok(i32)`: Generated order ID
    /// - `Err(OrderError::DuplicateOrderCode)`: Order code already stored
    /// - `Err(OrderError::NoRowsAffected)`: An insert affected 0 rows
    /// - `Err(OrderError::ValueOutOfRange)`: User ID does not fit its column
    /// - `Err(OrderError::Db)`: Database error
    pub async fn place(
        &self,
        draft: &OrderDraft,
        items: &[OrderItemDraft],
        closed_interval_hours: u32,
    ) -> Result<i32, OrderError> {
        let closed = draft.created + Duration::hours(i64::from(closed_interval_hours));

        let txn = self.db.begin().await?;

        match Self::insert_order_with_items(&txn, draft, items, closed).await {
            Ok(order_id) => {
                txn.commit().await?;
                Ok(order_id)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(
                        "Failed to roll back placement of order {}: {}",
                        draft.order_code,
                        rollback_err
                    );
                }
                Err(err)
            }
        }
    }

    async fn insert_order_with_items(
        txn: &DatabaseTransaction,
        draft: &OrderDraft,
        items: &[OrderItemDraft],
        closed: DateTime<Utc>,
    ) -> Result<i32, OrderError> {
        let order = entity::order::ActiveModel {
            order_code: ActiveValue::Set(draft.order_code.clone()),
            user_id: ActiveValue::Set(column_i64("user_id", draft.user_id)?),
            ship_code: ActiveValue::Set(DEFAULT_SHIP_CODE.to_string()),
            address_id: ActiveValue::Set(draft.address_id.clone()),
            total_price: ActiveValue::Set(i64::from(draft.total_price)),
            pay_way: ActiveValue::Set(i16::from(UNSET_PAY_WAY)),
            promotion: ActiveValue::Set(draft.promotion),
            freight: ActiveValue::Set(i64::from(draft.freight)),
            status: ActiveValue::Set(OrderStatus::Unfinished.as_i16()),
            created: ActiveValue::Set(draft.created),
            closed: ActiveValue::Set(closed),
            updated: ActiveValue::Set(draft.created),
            ..Default::default()
        };

        let order_id = entity::prelude::Order::insert(order)
            .exec(txn)
            .await
            .map_err(|e| OrderError::from_insert(e, ORDER_TABLE, &draft.order_code))?
            .last_insert_id;

        for item in items {
            let rows_affected = entity::prelude::OrderItem::insert(entity::order_item::ActiveModel {
                product_id: ActiveValue::Set(i64::from(item.product_id)),
                order_id: ActiveValue::Set(order_id),
                count: ActiveValue::Set(i64::from(item.count)),
                price: ActiveValue::Set(i64::from(item.price)),
                discount: ActiveValue::Set(i64::from(item.discount)),
                ..Default::default()
            })
            .exec_without_returning(txn)
            .await
            .map_err(|e| OrderError::from_insert(e, ORDER_ITEM_TABLE, &draft.order_code))?;

            if rows_affected == 0 {
                return Err(OrderError::NoRowsAffected {
                    table: ORDER_ITEM_TABLE,
                });
            }
        }

        Ok(order_id)
    }

    /// Looks up the ID of the order with the given code.
    ///
    /// # Returns
    /// - `Ok(Some(id))`: Order found
    /// - `Ok(None)`: No order uses this code
    /// - `Err(OrderError::Db)`: Database error
    pub async fn find_id_by_code(&self, order_code: &str) -> Result<Option<i32>, OrderError> {
        let id = entity::prelude::Order::find()
            .select_only()
            .column(entity::order::Column::Id)
            .filter(entity::order::Column::OrderCode.eq(order_code))
            .into_tuple::<i32>()
            .one(self.db)
            .await?;

        Ok(id)
    }

    /// Gets an order by ID with its items.
    ///
    /// The order read and the item read run in one transaction so they observe the same
    /// snapshot. Items are returned in insertion order.
    ///
    /// # Returns
    /// - `Ok(Some((order, items)))`: Order and its items
    /// - `Ok(None)`: Order not found
    /// - `Err(OrderError::Db)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<OrderRows>, OrderError> {
        let txn = self.db.begin().await?;

        let rows = match entity::prelude::Order::find_by_id(id).one(&txn).await? {
            Some(order) => {
                let items = entity::prelude::OrderItem::find()
                    .filter(entity::order_item::Column::OrderId.eq(id))
                    .order_by_asc(entity::order_item::Column::Id)
                    .all(&txn)
                    .await?;
                Some((order, items))
            }
            None => None,
        };

        txn.commit().await?;

        Ok(rows)
    }

    /// Gets all orders of a user that are in exactly `status`, each with its items.
    ///
    /// Orders and items are read in one transaction; items for all matched orders are
    /// fetched with a single `IN` query. Orders are returned by ascending ID.
    ///
    /// # Returns
    /// - `Ok(Vec<(order, items)>)`: Matching orders, possibly empty
    /// - `Err(OrderError::ValueOutOfRange)`: User ID does not fit its column
    /// - `Err(OrderError::Db)`: Database error
    pub async fn get_by_user_and_status(
        &self,
        user_id: u64,
        status: OrderStatus,
    ) -> Result<Vec<OrderRows>, OrderError> {
        let user_id = column_i64("user_id", user_id)?;

        let txn = self.db.begin().await?;

        let orders = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .filter(entity::order::Column::Status.eq(status.as_i16()))
            .order_by_asc(entity::order::Column::Id)
            .all(&txn)
            .await?;

        let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();

        let mut items_by_order: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        if !order_ids.is_empty() {
            let items = entity::prelude::OrderItem::find()
                .filter(entity::order_item::Column::OrderId.is_in(order_ids))
                .order_by_asc(entity::order_item::Column::Id)
                .all(&txn)
                .await?;

            for item in items {
                items_by_order.entry(item.order_id).or_default().push(item);
            }
        }

        txn.commit().await?;

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                (order, items)
            })
            .collect())
    }

    /// Marks an unfinished order as paid with the given pay way.
    ///
    /// # Returns
    /// - `Ok(())`: Order moved to paid
    /// - `Err(OrderError::NotFound)`: No order with this ID
    /// - `Err(OrderError::InvalidTransition)`: Order is not unfinished
    /// - `Err(OrderError::Db)`: Database error
    pub async fn pay(&self, id: i32, pay_way: u8, now: DateTime<Utc>) -> Result<(), OrderError> {
        let result = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::PayWay, Expr::value(i16::from(pay_way)))
            .col_expr(
                entity::order::Column::Status,
                Expr::value(OrderStatus::Paid.as_i16()),
            )
            .col_expr(entity::order::Column::Updated, Expr::value(now))
            .filter(entity::order::Column::Id.eq(id))
            .filter(entity::order::Column::Status.eq(OrderStatus::Unfinished.as_i16()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(self.transition_failure(id, OrderStatus::Paid).await?);
        }

        Ok(())
    }

    /// Marks a paid order as consigned and records its ship code.
    ///
    /// # Returns
    /// - `Ok(())`: Order moved to consigned
    /// - `Err(OrderError::NotFound)`: No order with this ID
    /// - `Err(OrderError::InvalidTransition)`: Order is not paid
    /// - `Err(OrderError::Db)`: Database error
    pub async fn consign(
        &self,
        id: i32,
        ship_code: String,
        now: DateTime<Utc>,
    ) -> Result<(), OrderError> {
        let result = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::ShipCode, Expr::value(ship_code))
            .col_expr(
                entity::order::Column::Status,
                Expr::value(OrderStatus::Consigned.as_i16()),
            )
            .col_expr(entity::order::Column::Updated, Expr::value(now))
            .filter(entity::order::Column::Id.eq(id))
            .filter(entity::order::Column::Status.eq(OrderStatus::Paid.as_i16()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(self.transition_failure(id, OrderStatus::Consigned).await?);
        }

        Ok(())
    }

    /// Sets the status of an order regardless of its current status.
    ///
    /// # Returns
    /// - `Ok(())`: Status written
    /// - `Err(OrderError::NotFound)`: No order with this ID
    /// - `Err(OrderError::Db)`: Database error
    pub async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<(), OrderError> {
        let result = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::Status, Expr::value(status.as_i16()))
            .col_expr(entity::order::Column::Updated, Expr::value(now))
            .filter(entity::order::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(OrderError::NotFound(format!("with id {}", id)));
        }

        Ok(())
    }

    /// Cancels every unfinished order whose closed-by deadline is before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of orders canceled
    /// - `Err(OrderError::Db)`: Database error
    pub async fn expire_overdue(&self, now: DateTime<Utc>) -> Result<u64, OrderError> {
        let result = entity::prelude::Order::update_many()
            .col_expr(
                entity::order::Column::Status,
                Expr::value(OrderStatus::Canceled.as_i16()),
            )
            .col_expr(entity::order::Column::Updated, Expr::value(now))
            .filter(entity::order::Column::Status.eq(OrderStatus::Unfinished.as_i16()))
            .filter(entity::order::Column::Closed.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Explains why a guarded status update matched no row.
    async fn transition_failure(
        &self,
        id: i32,
        target: OrderStatus,
    ) -> Result<OrderError, OrderError> {
        let order = entity::prelude::Order::find_by_id(id).one(self.db).await?;

        Ok(match order {
            Some(order) => OrderError::InvalidTransition {
                id,
                current: order.status,
                target,
            },
            None => OrderError::NotFound(format!("with id {}", id)),
        })
    }
}
