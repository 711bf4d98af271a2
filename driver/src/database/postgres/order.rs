use rust_decimal::Decimal;
use sqlx::types::Uuid;
use sqlx::PgConnection;

use kernel::interface::query::OrderQuery;
use kernel::interface::update::OrderModifier;
use kernel::prelude::entity::{
    CustomerId, Order, OrderId, OrderLineItem, OrderLineItemId, ProductId, ProductPrice,
    ProductQuantity,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresOrderRepository;

#[async_trait::async_trait]
impl OrderQuery for PostgresOrderRepository {
    type Transaction = PostgresConnection;

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &OrderId,
    ) -> error_stack::Result<Option<Order>, KernelError> {
        PgOrderInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl OrderModifier for PostgresOrderRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        order: &Order,
    ) -> error_stack::Result<(), KernelError> {
        PgOrderInternal::create(con, order).await
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    customer_id: Uuid,
}

#[derive(sqlx::FromRow)]
struct OrderLineItemRow {
    id: Uuid,
    product_id: Uuid,
    quantity: i32,
    price: Decimal,
}

impl From<OrderLineItemRow> for OrderLineItem {
    fn from(row: OrderLineItemRow) -> Self {
        OrderLineItem::new(
            OrderLineItemId::new(row.id),
            ProductId::new(row.product_id),
            ProductQuantity::new(row.quantity),
            ProductPrice::new(row.price),
        )
    }
}

pub(in crate::database) struct PgOrderInternal;

impl PgOrderInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &OrderId,
    ) -> error_stack::Result<Option<Order>, KernelError> {
        let row = sqlx::query_as::<_, OrderRow>(
            // language=postgresql
            r#"
            SELECT id, customer_id
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(&mut *con)
        .await
        .convert_error()?;
        let row = match row {
            None => return Ok(None),
            Some(row) => row,
        };

        let items = sqlx::query_as::<_, OrderLineItemRow>(
            // language=postgresql
            r#"
            SELECT id, product_id, quantity, price
            FROM order_line_items
            WHERE order_id = $1
            ORDER BY id
            "#,
        )
        .bind(id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;

        Ok(Some(Order::new(
            OrderId::new(row.id),
            CustomerId::new(row.customer_id),
            items.into_iter().map(OrderLineItem::from).collect(),
        )))
    }

    async fn create(con: &mut PgConnection, order: &Order) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO orders (id, customer_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(order.id().as_ref())
        .bind(order.customer_id().as_ref())
        .execute(&mut *con)
        .await
        .convert_error()?;

        for item in order.items() {
            sqlx::query(
                // language=postgresql
                r#"
                INSERT INTO order_line_items (id, order_id, product_id, quantity, price)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(item.id().as_ref())
            .bind(order.id().as_ref())
            .bind(item.product_id().as_ref())
            .bind(item.quantity().as_ref())
            .bind(item.price().as_ref())
            .execute(&mut *con)
            .await
            .convert_error()?;
        }
        Ok(())
    }
}
