//! Order factory for creating test order entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, 42)
///     .status(3)
///     .ship_code("SF1234")
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    order_code: String,
    user_id: i64,
    ship_code: String,
    address_id: String,
    total_price: i64,
    pay_way: i16,
    promotion: bool,
    freight: i64,
    status: i16,
    created: DateTime<Utc>,
    closed: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_code: `"TEST{n}"` where n is auto-incremented
    /// - ship_code: `"100000"`
    /// - address_id: `"addr-{n}"`
    /// - total_price: `1000`, freight: `100`
    /// - pay_way: `0`, promotion: `false`, status: `0` (unfinished)
    /// - created: now truncated to whole seconds, closed: 5 hours later
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owner of the order
    pub fn new(db: &'a DatabaseConnection, user_id: i64) -> Self {
        let id = next_id();
        let created = Utc::now().trunc_subsecs(0);
        Self {
            db,
            order_code: format!("TEST{}", id),
            user_id,
            ship_code: "100000".to_string(),
            address_id: format!("addr-{}", id),
            total_price: 1000,
            pay_way: 0,
            promotion: false,
            freight: 100,
            status: 0,
            created,
            closed: created + Duration::hours(5),
        }
    }

    pub fn order_code(mut self, order_code: impl Into<String>) -> Self {
        self.order_code = order_code.into();
        self
    }

    pub fn ship_code(mut self, ship_code: impl Into<String>) -> Self {
        self.ship_code = ship_code.into();
        self
    }

    pub fn total_price(mut self, total_price: i64) -> Self {
        self.total_price = total_price;
        self
    }

    pub fn pay_way(mut self, pay_way: i16) -> Self {
        self.pay_way = pay_way;
        self
    }

    pub fn status(mut self, status: i16) -> Self {
        self.status = status;
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub fn closed(mut self, closed: DateTime<Utc>) -> Self {
        self.closed = closed;
        self
    }

    /// Inserts the order into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created order entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            order_code: ActiveValue::Set(self.order_code),
            user_id: ActiveValue::Set(self.user_id),
            ship_code: ActiveValue::Set(self.ship_code),
            address_id: ActiveValue::Set(self.address_id),
            total_price: ActiveValue::Set(self.total_price),
            pay_way: ActiveValue::Set(self.pay_way),
            promotion: ActiveValue::Set(self.promotion),
            freight: ActiveValue::Set(self.freight),
            status: ActiveValue::Set(self.status),
            created: ActiveValue::Set(self.created),
            closed: ActiveValue::Set(self.closed),
            updated: ActiveValue::Set(self.created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unfinished order with default values for `user_id`.
///
/// Shorthand for `OrderFactory::new(db, user_id).build().await`.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}

/// Creates an order for `user_id` with the provided status.
pub async fn create_order_with_status(
    db: &DatabaseConnection,
    user_id: i64,
    status: i16,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id).status(status).build().await
}
