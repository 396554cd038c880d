use crate::server::{
    config::OrderSettings,
    error::{order::OrderError, AppError},
    model::order::{CreateOrderParams, OrderItem, OrderItemDraft, OrderStatus},
    service::order::{code::OrderCodeScheme, OrderService},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};
use std::time::Duration as StdDuration;
use test_utils::{builder::TestBuilder, factory};

mod consign;
mod get_by_id;
mod place_order;
mod update_status;

fn submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 3).unwrap()
}

fn settings(code_scheme: OrderCodeScheme) -> OrderSettings {
    OrderSettings {
        code_scheme,
        ..Default::default()
    }
}

fn params(user_id: u64, items: Vec<OrderItemDraft>) -> CreateOrderParams {
    CreateOrderParams {
        user_id,
        address_id: "addr-1".to_string(),
        total_price: 1500,
        promotion: true,
        freight: 100,
        items,
        submitted_at: submitted_at(),
    }
}

fn item(product_id: u32) -> OrderItemDraft {
    OrderItemDraft {
        product_id,
        count: 1,
        price: 1400,
        discount: 0,
    }
}

/// Strips the owning order from a stored item, leaving the submitted line.
fn as_draft(item: &OrderItem) -> OrderItemDraft {
    OrderItemDraft {
        product_id: item.product_id,
        count: item.count,
        price: item.price,
        discount: item.discount,
    }
}
