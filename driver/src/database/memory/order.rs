use kernel::interface::query::OrderQuery;
use kernel::interface::update::OrderModifier;
use kernel::prelude::entity::{Order, OrderId};
use kernel::KernelError;

use crate::database::memory::{InMemoryDatabase, InMemoryTransaction};

#[async_trait::async_trait]
impl OrderQuery for InMemoryDatabase {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        _con: &mut InMemoryTransaction,
        id: &OrderId,
    ) -> error_stack::Result<Option<Order>, KernelError> {
        let orders = self.orders.read().expect("RwLock poisoned");
        Ok(orders.get(id).cloned())
    }
}

#[async_trait::async_trait]
impl OrderModifier for InMemoryDatabase {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        _con: &mut InMemoryTransaction,
        order: &Order,
    ) -> error_stack::Result<(), KernelError> {
        let mut orders = self.orders.write().expect("RwLock poisoned");
        orders.insert(order.id().clone(), order.clone());
        Ok(())
    }
}
