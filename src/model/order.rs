use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One line of an order submission.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderItemInputDto {
    #[serde(rename = "productid")]
    pub product_id: u32,
    pub count: u32,
    pub price: u32,
    pub discount: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateOrderDto {
    #[serde(rename = "userid")]
    pub user_id: u64,
    #[serde(rename = "addressid")]
    pub address_id: String,
    #[serde(rename = "totalprice")]
    pub total_price: u32,
    /// Boolean spelled as a string, e.g. `"true"`, `"1"`, `"F"`.
    pub promotion: String,
    pub freight: u32,
    pub items: Vec<OrderItemInputDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatedOrderDto {
    #[serde(rename = "orderid")]
    pub order_id: i32,
    #[serde(rename = "ordercode")]
    pub order_code: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderInfoRequestDto {
    #[serde(rename = "orderid")]
    pub order_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrdersByUserRequestDto {
    #[serde(rename = "userid")]
    pub user_id: u64,
    /// 0 unfinished, 1 finished, 2 paid, 3 consigned, 4 canceled
    pub status: u8,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderIdRequestDto {
    #[serde(rename = "ordercode")]
    pub order_code: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderIdDto {
    pub id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PayOrderDto {
    #[serde(rename = "orderid")]
    pub order_id: i32,
    #[serde(rename = "payway")]
    pub pay_way: u8,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConsignOrderDto {
    #[serde(rename = "orderid")]
    pub order_id: i32,
    #[serde(rename = "shipcode")]
    pub ship_code: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateOrderStatusDto {
    #[serde(rename = "orderid")]
    pub order_id: i32,
    pub status: u8,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    #[serde(rename = "ordercode")]
    pub order_code: String,
    #[serde(rename = "userid")]
    pub user_id: u64,
    #[serde(rename = "shipcode")]
    pub ship_code: String,
    #[serde(rename = "addressid")]
    pub address_id: String,
    #[serde(rename = "totalprice")]
    pub total_price: u32,
    #[serde(rename = "payway")]
    pub pay_way: u8,
    pub promotion: bool,
    pub freight: u32,
    pub status: u8,
    pub created: DateTime<Utc>,
    pub closed: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderItemDto {
    #[serde(rename = "productid")]
    pub product_id: u32,
    #[serde(rename = "orderid")]
    pub order_id: i32,
    pub count: u32,
    pub price: u32,
    pub discount: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderWithItemsDto {
    pub order: OrderDto,
    pub items: Vec<OrderItemDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderListDto {
    pub orders: Vec<OrderWithItemsDto>,
}
