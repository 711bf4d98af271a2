use vodca::References;

use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Product, ProductId, ProductQuantity};
use crate::KernelError;

/// One element of a batch stock update: the product and the quantity it
/// should hold after the write.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct QuantityUpdate {
    id: ProductId,
    quantity: ProductQuantity,
}

impl QuantityUpdate {
    pub fn new(id: ProductId, quantity: ProductQuantity) -> Self {
        Self { id, quantity }
    }
}

#[async_trait::async_trait]
pub trait ProductModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        product: &Product,
    ) -> error_stack::Result<(), KernelError>;
    async fn update_quantity(
        &self,
        con: &mut Self::Transaction,
        updates: &[QuantityUpdate],
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnProductModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type ProductModifier: ProductModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn product_modifier(&self) -> &Self::ProductModifier;
}
