use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{CustomerQuery, DependOnCustomerQuery};
use kernel::interface::update::{CustomerModifier, DependOnCustomerModifier};
use kernel::prelude::entity::{Customer, CustomerEmail, CustomerId, CustomerName};
use kernel::KernelError;

use crate::transfer::{CreateCustomerDto, CustomerDto};

#[async_trait::async_trait]
pub trait CreateCustomerService:
    'static + Sync + Send + DependOnCustomerQuery + DependOnCustomerModifier
{
    /// The email check and the insert are two store calls, not one atomic
    /// operation. A concurrent duplicate submission can slip between them;
    /// the store's unique constraint is the backstop.
    async fn create_customer(
        &self,
        dto: CreateCustomerDto,
    ) -> error_stack::Result<CustomerDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let email = CustomerEmail::new(dto.email);
        let registered = self
            .customer_query()
            .find_by_email(&mut connection, &email)
            .await?;
        if registered.is_some() {
            return Err(Report::new(KernelError::DuplicateEmail));
        }

        let customer = Customer::new(
            CustomerId::new(Uuid::new_v4()),
            CustomerName::new(dto.name),
            email,
        );
        self.customer_modifier()
            .create(&mut connection, &customer)
            .await?;
        connection.commit().await?;

        Ok(CustomerDto::from(customer))
    }
}

impl<T> CreateCustomerService for T where T: DependOnCustomerQuery + DependOnCustomerModifier {}

#[cfg(test)]
mod test {
    use driver::database::InMemoryDatabase;
    use kernel::KernelError;

    use crate::service::customer::CreateCustomerService;
    use crate::transfer::CreateCustomerDto;

    #[tokio::test]
    async fn create_returns_the_given_email() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let created = db
            .create_customer(CreateCustomerDto {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            })
            .await?;

        assert_eq!(created.name.as_ref(), "Ada Lovelace");
        assert_eq!(created.email.as_ref(), "ada@example.com");
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        db.create_customer(CreateCustomerDto {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await?;

        let report = db
            .create_customer(CreateCustomerDto {
                name: "Someone Else".to_string(),
                email: "ada@example.com".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::DuplicateEmail
        ));
        Ok(())
    }
}
