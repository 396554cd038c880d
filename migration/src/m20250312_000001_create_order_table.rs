use sea_orm_migration::{prelude::*, schema::*};

use crate::index::create_index_if_missing;

/// Table name as stored; also the `iden` of `Order::Table`.
const ORDERS: &str = "orders";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(string_uniq(Order::OrderCode))
                    .col(big_integer(Order::UserId))
                    .col(string(Order::ShipCode).default("100000"))
                    .col(string(Order::AddressId))
                    .col(big_integer(Order::TotalPrice))
                    .col(small_integer(Order::PayWay).default(0))
                    .col(boolean(Order::Promotion).default(false))
                    .col(big_integer(Order::Freight))
                    .col(small_integer(Order::Status).default(0))
                    .col(timestamp_with_time_zone(Order::Created))
                    .col(timestamp_with_time_zone(Order::Closed))
                    .col(timestamp_with_time_zone(Order::Updated))
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_orders_created", Order::Created),
            ("idx_orders_updated", Order::Updated),
            ("idx_orders_status", Order::Status),
            ("idx_orders_pay_way", Order::PayWay),
        ] {
            create_index_if_missing(
                manager,
                ORDERS,
                name,
                Index::create()
                    .name(name)
                    .table(Order::Table)
                    .col(column)
                    .to_owned(),
            )
            .await?;
        }

        // Serves the user + status listing.
        create_index_if_missing(
            manager,
            ORDERS,
            "idx_orders_user_id_status",
            Index::create()
                .name("idx_orders_user_id_status")
                .table(Order::Table)
                .col(Order::UserId)
                .col(Order::Status)
                .to_owned(),
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    OrderCode,
    UserId,
    ShipCode,
    AddressId,
    TotalPrice,
    PayWay,
    Promotion,
    Freight,
    Status,
    Created,
    Closed,
    Updated,
}
