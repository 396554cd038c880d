use sea_orm_migration::{prelude::*, schema::*};

use super::m20250312_000001_create_order_table::Order;
use crate::index::create_index_if_missing;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItem::Id))
                    .col(big_integer(OrderItem::ProductId))
                    .col(integer(OrderItem::OrderId))
                    .col(big_integer(OrderItem::Count))
                    .col(big_integer(OrderItem::Price))
                    .col(big_integer(OrderItem::Discount))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_order_id")
                            .from(OrderItem::Table, OrderItem::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_index_if_missing(
            manager,
            "order_item",
            "idx_order_item_order_id",
            Index::create()
                .name("idx_order_item_order_id")
                .table(OrderItem::Table)
                .col(OrderItem::OrderId)
                .to_owned(),
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderItem {
    Table,
    Id,
    ProductId,
    OrderId,
    Count,
    Price,
    Discount,
}
