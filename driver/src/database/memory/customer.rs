use kernel::interface::query::CustomerQuery;
use kernel::interface::update::CustomerModifier;
use kernel::prelude::entity::{Customer, CustomerEmail, CustomerId};
use kernel::KernelError;

use crate::database::memory::{InMemoryDatabase, InMemoryTransaction};

#[async_trait::async_trait]
impl CustomerQuery for InMemoryDatabase {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        _con: &mut InMemoryTransaction,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        let customers = self.customers.read().expect("RwLock poisoned");
        Ok(customers.get(id).cloned())
    }

    async fn find_by_email(
        &self,
        _con: &mut InMemoryTransaction,
        email: &CustomerEmail,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        let customers = self.customers.read().expect("RwLock poisoned");
        Ok(customers
            .values()
            .find(|customer| customer.email() == email)
            .cloned())
    }
}

#[async_trait::async_trait]
impl CustomerModifier for InMemoryDatabase {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        _con: &mut InMemoryTransaction,
        customer: &Customer,
    ) -> error_stack::Result<(), KernelError> {
        let mut customers = self.customers.write().expect("RwLock poisoned");
        customers.insert(customer.id().clone(), customer.clone());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::CustomerQuery;
    use kernel::interface::update::CustomerModifier;
    use kernel::prelude::entity::{Customer, CustomerEmail, CustomerId, CustomerName};
    use kernel::KernelError;

    use crate::database::memory::InMemoryDatabase;

    #[tokio::test]
    async fn find_by_email_matches_created() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut connection = db.transact().await?;
        let customer = Customer::new(
            CustomerId::new(Uuid::new_v4()),
            CustomerName::new("test".to_string()),
            CustomerEmail::new("test@example.com".to_string()),
        );

        db.create(&mut connection, &customer).await?;

        let found = db.find_by_email(&mut connection, customer.email()).await?;
        assert_eq!(found, Some(customer.clone()));

        let found = db
            .find_by_email(
                &mut connection,
                &CustomerEmail::new("other@example.com".to_string()),
            )
            .await?;
        assert_eq!(found, None);
        Ok(())
    }
}
