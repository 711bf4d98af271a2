use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnProductQuery, ProductQuery};
use kernel::interface::update::{DependOnProductModifier, ProductModifier};
use kernel::prelude::entity::{Product, ProductId, ProductName, ProductPrice, ProductQuantity};
use kernel::KernelError;

use crate::transfer::{CreateProductDto, ProductDto};

#[async_trait::async_trait]
pub trait CreateProductService:
    'static + Sync + Send + DependOnProductQuery + DependOnProductModifier
{
    /// Same check-then-act caveat as customer creation: the name check and
    /// the insert are not atomic against concurrent duplicates.
    async fn create_product(
        &self,
        dto: CreateProductDto,
    ) -> error_stack::Result<ProductDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let name = ProductName::new(dto.name);
        let registered = self
            .product_query()
            .find_by_name(&mut connection, &name)
            .await?;
        if registered.is_some() {
            return Err(Report::new(KernelError::DuplicateProduct));
        }

        let product = Product::new(
            ProductId::new(Uuid::new_v4()),
            name,
            ProductPrice::new(dto.price),
            ProductQuantity::new(dto.quantity),
        );
        self.product_modifier()
            .create(&mut connection, &product)
            .await?;
        connection.commit().await?;

        Ok(ProductDto::from(product))
    }
}

impl<T> CreateProductService for T where T: DependOnProductQuery + DependOnProductModifier {}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;

    use driver::database::InMemoryDatabase;
    use kernel::KernelError;

    use crate::service::product::CreateProductService;
    use crate::transfer::CreateProductDto;

    #[tokio::test]
    async fn create_keeps_price_and_quantity() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let created = db
            .create_product(CreateProductDto {
                name: "Keyboard".to_string(),
                price: Decimal::new(4990, 2),
                quantity: 10,
            })
            .await?;

        assert_eq!(created.name.as_ref(), "Keyboard");
        assert_eq!(created.price.as_ref(), &Decimal::new(4990, 2));
        assert_eq!(created.quantity.as_ref(), &10);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        db.create_product(CreateProductDto {
            name: "Keyboard".to_string(),
            price: Decimal::new(4990, 2),
            quantity: 10,
        })
        .await?;

        let report = db
            .create_product(CreateProductDto {
                name: "Keyboard".to_string(),
                price: Decimal::new(100, 0),
                quantity: 3,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::DuplicateProduct
        ));
        Ok(())
    }
}
