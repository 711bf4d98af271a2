use kernel::interface::query::ProductQuery;
use kernel::interface::update::{ProductModifier, QuantityUpdate};
use kernel::prelude::entity::{Product, ProductId, ProductName};
use kernel::KernelError;

use crate::database::memory::{InMemoryDatabase, InMemoryTransaction};

#[async_trait::async_trait]
impl ProductQuery for InMemoryDatabase {
    type Transaction = InMemoryTransaction;

    async fn find_by_name(
        &self,
        _con: &mut InMemoryTransaction,
        name: &ProductName,
    ) -> error_stack::Result<Option<Product>, KernelError> {
        let products = self.products.read().expect("RwLock poisoned");
        Ok(products
            .values()
            .find(|product| product.name() == name)
            .cloned())
    }

    async fn find_all_by_ids(
        &self,
        _con: &mut InMemoryTransaction,
        ids: &[ProductId],
    ) -> error_stack::Result<Vec<Product>, KernelError> {
        let products = self.products.read().expect("RwLock poisoned");
        Ok(ids
            .iter()
            .filter_map(|id| products.get(id).cloned())
            .collect())
    }
}

#[async_trait::async_trait]
impl ProductModifier for InMemoryDatabase {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        _con: &mut InMemoryTransaction,
        product: &Product,
    ) -> error_stack::Result<(), KernelError> {
        let mut products = self.products.write().expect("RwLock poisoned");
        products.insert(product.id().clone(), product.clone());
        Ok(())
    }

    async fn update_quantity(
        &self,
        _con: &mut InMemoryTransaction,
        updates: &[QuantityUpdate],
    ) -> error_stack::Result<(), KernelError> {
        let mut products = self.products.write().expect("RwLock poisoned");
        for update in updates {
            if let Some(product) = products.get(update.id()).cloned() {
                let product = product.reconstruct(|p| p.quantity = update.quantity().clone());
                products.insert(update.id().clone(), product);
            }
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

    use crate::database::memory::InMemoryDatabase;

    #[tokio::test]
    async fn update_quantity_overwrites_stock() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut connection = db.transact().await?;
        let id = ProductId::new(Uuid::new_v4());
        let product = Product::new(
            id.clone(),
            ProductName::new("test".to_string()),
            ProductPrice::new(Decimal::new(999, 2)),
            ProductQuantity::new(20),
        );

        db.create(&mut connection, &product).await?;
        db.update_quantity(
            &mut connection,
            &[QuantityUpdate::new(id.clone(), ProductQuantity::new(17))],
        )
        .await?;

        let found = db.find_all_by_ids(&mut connection, &[id]).await?;
        assert_eq!(found[0].quantity(), &ProductQuantity::new(17));
        Ok(())
    }

    #[tokio::test]
    async fn find_all_by_ids_skips_unknown_ids() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut connection = db.transact().await?;
        let id = ProductId::new(Uuid::new_v4());
        let product = Product::new(
            id.clone(),
            ProductName::new("test".to_string()),
            ProductPrice::new(Decimal::new(999, 2)),
            ProductQuantity::new(20),
        );

        db.create(&mut connection, &product).await?;

        let found = db
            .find_all_by_ids(&mut connection, &[id, ProductId::new(Uuid::new_v4())])
            .await?;
        assert_eq!(found, vec![product]);
        Ok(())
    }
}
