//! Domain models for order operations.
//!
//! Defines the order and order item domain models, the draft types accepted by the
//! placement transaction and the parameter types passed from controllers to the service.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::order::{CreateOrderDto, OrderDto, OrderItemDto, OrderWithItemsDto},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::{parse_bool_flag, stored_u32, stored_u64, stored_u8},
    },
};

/// Ship code stored until an order is consigned.
pub const DEFAULT_SHIP_CODE: &str = "100000";

/// Pay way stored until an order is paid.
pub const UNSET_PAY_WAY: u8 = 0;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Unfinished,
    Finished,
    Paid,
    Consigned,
    Canceled,
}

impl OrderStatus {
    /// Wire and storage value of the status.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Unfinished => 0,
            Self::Finished => 1,
            Self::Paid => 2,
            Self::Consigned => 3,
            Self::Canceled => 4,
        }
    }

    pub fn as_i16(self) -> i16 {
        i16::from(self.as_u8())
    }

    /// Reads a status column value.
    ///
    /// # Returns
    /// - `Ok(OrderStatus)` - Known status
    /// - `Err(InternalError::UnknownOrderStatus)` - Stored value outside 0..=4
    pub fn from_stored(value: i16) -> Result<Self, InternalError> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_u8)
            .ok_or(InternalError::UnknownOrderStatus(value))
    }

    fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Unfinished),
            1 => Some(Self::Finished),
            2 => Some(Self::Paid),
            3 => Some(Self::Consigned),
            4 => Some(Self::Canceled),
            _ => None,
        }
    }
}

/// Parses a status sent by a client; anything outside 0..=4 is a bad request.
impl TryFrom<u8> for OrderStatus {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid order status {}", value)))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unfinished => "unfinished",
            Self::Finished => "finished",
            Self::Paid => "paid",
            Self::Consigned => "consigned",
            Self::Canceled => "canceled",
        };
        write!(f, "{}", name)
    }
}

/// An order that has not been persisted yet.
///
/// Carries everything the placement transaction writes except the values it derives
/// itself (identifier, closed-by deadline, defaults).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    /// Externally visible order code.
    pub order_code: String,
    /// Owner of the order.
    pub user_id: u64,
    /// Shipping address reference.
    pub address_id: String,
    /// Total price in the smallest currency unit.
    pub total_price: u32,
    /// Whether a promotion applies.
    pub promotion: bool,
    /// Freight cost in the smallest currency unit.
    pub freight: u32,
    /// Submission timestamp; becomes the created timestamp.
    pub created: DateTime<Utc>,
}

/// One line of an order that has not been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderItemDraft {
    pub product_id: u32,
    pub count: u32,
    pub price: u32,
    pub discount: u32,
}

/// Persisted order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub order_code: String,
    pub user_id: u64,
    pub ship_code: String,
    pub address_id: String,
    pub total_price: u32,
    pub pay_way: u8,
    pub promotion: bool,
    pub freight: u32,
    pub status: OrderStatus,
    pub created: DateTime<Utc>,
    /// Deadline after which the order expires if still unfinished.
    pub closed: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Order {
    /// Converts an entity model to an order domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted order
    /// - `Err(InternalError)` - A stored value does not fit the domain type
    pub fn from_entity(entity: entity::order::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            order_code: entity.order_code,
            user_id: stored_u64("user_id", entity.user_id)?,
            ship_code: entity.ship_code,
            address_id: entity.address_id,
            total_price: stored_u32("total_price", entity.total_price)?,
            pay_way: stored_u8("pay_way", entity.pay_way)?,
            promotion: entity.promotion,
            freight: stored_u32("freight", entity.freight)?,
            status: OrderStatus::from_stored(entity.status)?,
            created: entity.created,
            closed: entity.closed,
            updated: entity.updated,
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            order_code: self.order_code,
            user_id: self.user_id,
            ship_code: self.ship_code,
            address_id: self.address_id,
            total_price: self.total_price,
            pay_way: self.pay_way,
            promotion: self.promotion,
            freight: self.freight,
            status: self.status.as_u8(),
            created: self.created,
            closed: self.closed,
            updated: self.updated,
        }
    }
}

/// Persisted order item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderItem {
    pub product_id: u32,
    pub order_id: i32,
    pub count: u32,
    pub price: u32,
    pub discount: u32,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Result<Self, InternalError> {
        Ok(Self {
            product_id: stored_u32("product_id", entity.product_id)?,
            order_id: entity.order_id,
            count: stored_u32("count", entity.count)?,
            price: stored_u32("price", entity.price)?,
            discount: stored_u32("discount", entity.discount)?,
        })
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            product_id: self.product_id,
            order_id: self.order_id,
            count: self.count,
            price: self.price,
            discount: self.discount,
        }
    }
}

/// An order joined with its items. Built on read, never persisted as such.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

impl OrderWithItems {
    /// Converts an order entity and its item entities into the joined domain model.
    pub fn from_entities(
        order: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Result<Self, InternalError> {
        Ok(Self {
            order: Order::from_entity(order)?,
            items: items
                .into_iter()
                .map(OrderItem::from_entity)
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn into_dto(self) -> OrderWithItemsDto {
        OrderWithItemsDto {
            order: self.order.into_dto(),
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
        }
    }
}

/// Parameters for placing a new order.
///
/// The order code is not part of the parameters; the service derives it from
/// `submitted_at` and `user_id`.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub user_id: u64,
    pub address_id: String,
    pub total_price: u32,
    pub promotion: bool,
    pub freight: u32,
    pub items: Vec<OrderItemDraft>,
    pub submitted_at: DateTime<Utc>,
}

impl CreateOrderParams {
    /// Converts a create request into placement parameters.
    ///
    /// # Returns
    /// - `Ok(CreateOrderParams)` - Valid request
    /// - `Err(AppError::BadRequest)` - Unparseable promotion flag or no items
    pub fn from_dto(dto: CreateOrderDto, submitted_at: DateTime<Utc>) -> Result<Self, AppError> {
        let promotion = parse_bool_flag("promotion", &dto.promotion)?;

        if dto.items.is_empty() {
            return Err(AppError::BadRequest(
                "An order requires at least one item".to_string(),
            ));
        }

        Ok(Self {
            user_id: dto.user_id,
            address_id: dto.address_id,
            total_price: dto.total_price,
            promotion,
            freight: dto.freight,
            items: dto
                .items
                .into_iter()
                .map(|item| OrderItemDraft {
                    product_id: item.product_id,
                    count: item.count,
                    price: item.price,
                    discount: item.discount,
                })
                .collect(),
            submitted_at,
        })
    }
}

/// Identifier and code of a freshly placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub id: i32,
    pub order_code: String,
}
