use error_stack::{Report, ResultExt};
use sqlx::{Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnCustomerQuery, DependOnOrderQuery, DependOnProductQuery};
use kernel::interface::update::{
    DependOnCustomerModifier, DependOnOrderModifier, DependOnProductModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{customer::*, order::*, product::*};

mod customer;
mod order;
mod product;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub type PostgresConnection = sqlx::Transaction<'static, Postgres>;

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL).change_context_lazy(|| KernelError::Internal)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        tracing::debug!("connected to postgres");
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresConnection;
    async fn transact(&self) -> error_stack::Result<PostgresConnection, KernelError> {
        let con = self.pool.begin().await.convert_error()?;
        Ok(con)
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresConnection {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        sqlx::Transaction::commit(self).await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        sqlx::Transaction::rollback(self).await.convert_error()
    }
}

impl DependOnCustomerQuery for PostgresDatabase {
    type CustomerQuery = PostgresCustomerRepository;
    fn customer_query(&self) -> &Self::CustomerQuery {
        &PostgresCustomerRepository
    }
}

impl DependOnCustomerModifier for PostgresDatabase {
    type CustomerModifier = PostgresCustomerRepository;
    fn customer_modifier(&self) -> &Self::CustomerModifier {
        &PostgresCustomerRepository
    }
}

impl DependOnProductQuery for PostgresDatabase {
    type ProductQuery = PostgresProductRepository;
    fn product_query(&self) -> &Self::ProductQuery {
        &PostgresProductRepository
    }
}

impl DependOnProductModifier for PostgresDatabase {
    type ProductModifier = PostgresProductRepository;
    fn product_modifier(&self) -> &Self::ProductModifier {
        &PostgresProductRepository
    }
}

impl DependOnOrderQuery for PostgresDatabase {
    type OrderQuery = PostgresOrderRepository;
    fn order_query(&self) -> &Self::OrderQuery {
        &PostgresOrderRepository
    }
}

impl DependOnOrderModifier for PostgresDatabase {
    type OrderModifier = PostgresOrderRepository;
    fn order_modifier(&self) -> &Self::OrderModifier {
        &PostgresOrderRepository
    }
}

impl<T> ConvertError for Result<T, sqlx::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                sqlx::Error::PoolTimedOut => KernelError::Timeout,
                sqlx::Error::Database(e)
                    if matches!(e.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
                {
                    KernelError::Concurrency
                }
                _ => KernelError::Internal,
            };
            Report::from(error).change_context(context)
        })
    }
}
