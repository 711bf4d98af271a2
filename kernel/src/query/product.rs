use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Product, ProductId, ProductName};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ProductQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_name(
        &self,
        con: &mut Self::Transaction,
        name: &ProductName,
    ) -> error_stack::Result<Option<Product>, KernelError>;
    /// Returns the products whose ids appear in `ids`, in no particular
    /// order. Ids with no matching product are simply absent from the result.
    async fn find_all_by_ids(
        &self,
        con: &mut Self::Transaction,
        ids: &[ProductId],
    ) -> error_stack::Result<Vec<Product>, KernelError>;
}

pub trait DependOnProductQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type ProductQuery: ProductQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn product_query(&self) -> &Self::ProductQuery;
}
