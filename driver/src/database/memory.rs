use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnCustomerQuery, DependOnOrderQuery, DependOnProductQuery};
use kernel::interface::update::{
    DependOnCustomerModifier, DependOnOrderModifier, DependOnProductModifier,
};
use kernel::prelude::entity::{Customer, CustomerId, Order, OrderId, Product, ProductId};
use kernel::KernelError;

mod customer;
mod order;
mod product;

/// Thread-safe in-memory implementation of every store trait, for tests and
/// development where persistence is not required.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_count(&self) -> usize {
        self.orders.read().expect("RwLock poisoned").len()
    }
}

/// Mutations apply as soon as the store call returns; `commit` and
/// `roll_back` are no-ops.
pub struct InMemoryTransaction;

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<InMemoryTransaction, KernelError> {
        Ok(InMemoryTransaction)
    }
}

impl DependOnCustomerQuery for InMemoryDatabase {
    type CustomerQuery = InMemoryDatabase;
    fn customer_query(&self) -> &Self::CustomerQuery {
        self
    }
}

impl DependOnCustomerModifier for InMemoryDatabase {
    type CustomerModifier = InMemoryDatabase;
    fn customer_modifier(&self) -> &Self::CustomerModifier {
        self
    }
}

impl DependOnProductQuery for InMemoryDatabase {
    type ProductQuery = InMemoryDatabase;
    fn product_query(&self) -> &Self::ProductQuery {
        self
    }
}

impl DependOnProductModifier for InMemoryDatabase {
    type ProductModifier = InMemoryDatabase;
    fn product_modifier(&self) -> &Self::ProductModifier {
        self
    }
}

impl DependOnOrderQuery for InMemoryDatabase {
    type OrderQuery = InMemoryDatabase;
    fn order_query(&self) -> &Self::OrderQuery {
        self
    }
}

impl DependOnOrderModifier for InMemoryDatabase {
    type OrderModifier = InMemoryDatabase;
    fn order_modifier(&self) -> &Self::OrderModifier {
        self
    }
}
