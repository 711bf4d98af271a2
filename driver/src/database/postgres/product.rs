use rust_decimal::Decimal;
use sqlx::types::Uuid;
use sqlx::PgConnection;

use kernel::interface::query::ProductQuery;
use kernel::interface::update::{ProductModifier, QuantityUpdate};
use kernel::prelude::entity::{Product, ProductId, ProductName, ProductPrice, ProductQuantity};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresProductRepository;

#[async_trait::async_trait]
impl ProductQuery for PostgresProductRepository {
    type Transaction = PostgresConnection;

    async fn find_by_name(
        &self,
        con: &mut PostgresConnection,
        name: &ProductName,
    ) -> error_stack::Result<Option<Product>, KernelError> {
        PgProductInternal::find_by_name(con, name).await
    }

    async fn find_all_by_ids(
        &self,
        con: &mut PostgresConnection,
        ids: &[ProductId],
    ) -> error_stack::Result<Vec<Product>, KernelError> {
        PgProductInternal::find_all_by_ids(con, ids).await
    }
}

#[async_trait::async_trait]
impl ProductModifier for PostgresProductRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        product: &Product,
    ) -> error_stack::Result<(), KernelError> {
        PgProductInternal::create(con, product).await
    }

    async fn update_quantity(
        &self,
        con: &mut PostgresConnection,
        updates: &[QuantityUpdate],
    ) -> error_stack::Result<(), KernelError> {
        PgProductInternal::update_quantity(con, updates).await
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    price: Decimal,
    quantity: i32,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::new(
            ProductId::new(row.id),
            ProductName::new(row.name),
            ProductPrice::new(row.price),
            ProductQuantity::new(row.quantity),
        )
    }
}

pub(in crate::database) struct PgProductInternal;

impl PgProductInternal {
    async fn find_by_name(
        con: &mut PgConnection,
        name: &ProductName,
    ) -> error_stack::Result<Option<Product>, KernelError> {
        let row = sqlx::query_as::<_, ProductRow>(
            // language=postgresql
            r#"
            SELECT id, name, price, quantity
            FROM products
            WHERE name = $1
            "#,
        )
        .bind(name.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        let found = row.map(Product::from);
        Ok(found)
    }

    async fn find_all_by_ids(
        con: &mut PgConnection,
        ids: &[ProductId],
    ) -> error_stack::Result<Vec<Product>, KernelError> {
        let ids = ids.iter().map(|id| *id.as_ref()).collect::<Vec<Uuid>>();
        let rows = sqlx::query_as::<_, ProductRow>(
            // language=postgresql
            r#"
            SELECT id, name, price, quantity
            FROM products
            WHERE id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        product: &Product,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO products (id, name, price, quantity)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(product.id().as_ref())
        .bind(product.name().as_ref())
        .bind(product.price().as_ref())
        .bind(product.quantity().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update_quantity(
        con: &mut PgConnection,
        updates: &[QuantityUpdate],
    ) -> error_stack::Result<(), KernelError> {
        for update in updates {
            // language=postgresql
            sqlx::query(
                r#"
                UPDATE products
                SET quantity = $2
                WHERE id = $1
                "#,
            )
            .bind(update.id().as_ref())
            .bind(update.quantity().as_ref())
            .execute(&mut *con)
            .await
            .convert_error()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::ProductQuery;
    use kernel::interface::update::{ProductModifier, QuantityUpdate};
    use kernel::prelude::entity::{Product, ProductId, ProductName, ProductPrice, ProductQuantity};
    use kernel::KernelError;

    use crate::database::postgres::product::PostgresProductRepository;
    use crate::database::postgres::PostgresDatabase;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn create_find_and_update_quantity() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut connection = db.transact().await?;
        let id = ProductId::new(Uuid::new_v4());
        let name = ProductName::new(format!("test-{}", id.as_ref()));
        let product = Product::new(
            id.clone(),
            name.clone(),
            ProductPrice::new(Decimal::new(999, 2)),
            ProductQuantity::new(20),
        );

        PostgresProductRepository
            .create(&mut connection, &product)
            .await?;

        let found = PostgresProductRepository
            .find_by_name(&mut connection, &name)
            .await?;
        assert_eq!(found, Some(product.clone()));

        let found = PostgresProductRepository
            .find_all_by_ids(&mut connection, &[id.clone()])
            .await?;
        assert_eq!(found, vec![product]);

        PostgresProductRepository
            .update_quantity(
                &mut connection,
                &[QuantityUpdate::new(id.clone(), ProductQuantity::new(17))],
            )
            .await?;
        let found = PostgresProductRepository
            .find_all_by_ids(&mut connection, &[id])
            .await?;
        assert_eq!(found[0].quantity(), &ProductQuantity::new(17));

        Ok(())
    }
}
