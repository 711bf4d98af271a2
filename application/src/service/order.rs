use std::collections::HashMap;

use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    CustomerQuery, DependOnCustomerQuery, DependOnOrderQuery, DependOnProductQuery, OrderQuery,
    ProductQuery,
};
use kernel::interface::update::{
    DependOnOrderModifier, DependOnProductModifier, OrderModifier, ProductModifier, QuantityUpdate,
};
use kernel::prelude::entity::{
    CustomerId, Order, OrderId, OrderLineItem, OrderLineItemId, Product, ProductId,
    ProductQuantity,
};
use kernel::KernelError;

use crate::transfer::{CreateOrderDto, GetOrderDto, OrderDto};

#[async_trait::async_trait]
pub trait PlaceOrderService:
    'static
    + Sync
    + Send
    + DependOnCustomerQuery
    + DependOnProductQuery
    + DependOnProductModifier
    + DependOnOrderModifier
{
    /// Validates the request against current stock, snapshots unit prices,
    /// persists the order and decrements inventory. Every validation failure
    /// returns before anything is written.
    ///
    /// Requested quantities are not checked against zero, and duplicate
    /// product ids within one request each validate against the same stock
    /// snapshot.
    async fn place_order(&self, dto: CreateOrderDto) -> error_stack::Result<OrderDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let customer_id = CustomerId::new(dto.customer_id);
        let customer = self
            .customer_query()
            .find_by_id(&mut connection, &customer_id)
            .await?
            .ok_or_else(|| Report::new(KernelError::CustomerNotFound))?;

        let requested_ids = dto
            .products
            .iter()
            .map(|line| ProductId::new(line.id))
            .collect::<Vec<_>>();
        let found = self
            .product_query()
            .find_all_by_ids(&mut connection, &requested_ids)
            .await?;
        if found.is_empty() {
            return Err(Report::new(KernelError::EmptyProducts));
        }
        let found = found
            .into_iter()
            .map(|product| (product.id().clone(), product))
            .collect::<HashMap<ProductId, Product>>();

        if let Some(missing) = requested_ids.iter().find(|id| !found.contains_key(*id)) {
            return Err(Report::new(KernelError::InexistentProduct(missing.clone())));
        }

        for (line, id) in dto.products.iter().zip(&requested_ids) {
            if *found[id].quantity().as_ref() < line.quantity {
                return Err(Report::new(KernelError::UnavailableQuantity(id.clone())));
            }
        }

        // Unit prices are captured here; later product price changes do not
        // reach persisted orders.
        let items = dto
            .products
            .iter()
            .zip(&requested_ids)
            .map(|(line, id)| {
                OrderLineItem::new(
                    OrderLineItemId::new(Uuid::new_v4()),
                    id.clone(),
                    ProductQuantity::new(line.quantity),
                    found[id].price().clone(),
                )
            })
            .collect::<Vec<_>>();
        let order = Order::new(OrderId::new(Uuid::new_v4()), customer.id().clone(), items);
        self.order_modifier().create(&mut connection, &order).await?;

        let updates = order
            .items()
            .iter()
            .map(|item| {
                let product = &found[item.product_id()];
                QuantityUpdate::new(
                    item.product_id().clone(),
                    ProductQuantity::new(product.quantity().as_ref() - item.quantity().as_ref()),
                )
            })
            .collect::<Vec<_>>();
        self.product_modifier()
            .update_quantity(&mut connection, &updates)
            .await?;
        connection.commit().await?;

        Ok(OrderDto::from(order))
    }
}

impl<T> PlaceOrderService for T where
    T: DependOnCustomerQuery + DependOnProductQuery + DependOnProductModifier + DependOnOrderModifier
{
}

#[async_trait::async_trait]
pub trait GetOrderService: 'static + Sync + Send + DependOnOrderQuery {
    async fn get_order(
        &self,
        dto: GetOrderDto,
    ) -> error_stack::Result<Option<OrderDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = OrderId::new(dto.id);
        let order = self.order_query().find_by_id(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(order.map(OrderDto::from))
    }
}

impl<T> GetOrderService for T where T: DependOnOrderQuery {}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use driver::database::InMemoryDatabase;
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::ProductQuery;
    use kernel::prelude::entity::ProductId;
    use kernel::KernelError;

    use crate::service::order::{GetOrderService, PlaceOrderService};
    use crate::service::{CreateCustomerService, CreateProductService};
    use crate::transfer::{
        CreateCustomerDto, CreateOrderDto, CreateProductDto, GetOrderDto, OrderProductDto,
    };

    async fn customer(db: &InMemoryDatabase) -> error_stack::Result<Uuid, KernelError> {
        let dto = db
            .create_customer(CreateCustomerDto {
                name: "Grace Hopper".to_string(),
                email: "grace@example.com".to_string(),
            })
            .await?;
        Ok(*dto.id.as_ref())
    }

    async fn product(
        db: &InMemoryDatabase,
        name: &str,
        price: Decimal,
        quantity: i32,
    ) -> error_stack::Result<Uuid, KernelError> {
        let dto = db
            .create_product(CreateProductDto {
                name: name.to_string(),
                price,
                quantity,
            })
            .await?;
        Ok(*dto.id.as_ref())
    }

    async fn stock_of(db: &InMemoryDatabase, id: Uuid) -> error_stack::Result<i32, KernelError> {
        let mut con = db.transact().await?;
        let found = db.find_all_by_ids(&mut con, &[ProductId::new(id)]).await?;
        Ok(*found[0].quantity().as_ref())
    }

    #[tokio::test]
    async fn unknown_customer_is_rejected_without_persisting(
    ) -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let product_id = product(&db, "Keyboard", Decimal::new(4990, 2), 5).await?;

        let report = db
            .place_order(CreateOrderDto {
                customer_id: Uuid::new_v4(),
                products: vec![OrderProductDto {
                    id: product_id,
                    quantity: 1,
                }],
            })
            .await
            .unwrap_err();

        assert!(matches!(
            report.current_context(),
            KernelError::CustomerNotFound
        ));
        assert_eq!(db.order_count(), 0);
        assert_eq!(stock_of(&db, product_id).await?, 5);
        Ok(())
    }

    #[tokio::test]
    async fn empty_product_list_is_rejected() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let customer_id = customer(&db).await?;

        let report = db
            .place_order(CreateOrderDto {
                customer_id,
                products: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(
            report.current_context(),
            KernelError::EmptyProducts
        ));
        assert_eq!(db.order_count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn inexistent_product_is_named_in_the_error() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let customer_id = customer(&db).await?;
        let product_id = product(&db, "Keyboard", Decimal::new(4990, 2), 5).await?;
        let missing = Uuid::new_v4();

        let report = db
            .place_order(CreateOrderDto {
                customer_id,
                products: vec![
                    OrderProductDto {
                        id: product_id,
                        quantity: 1,
                    },
                    OrderProductDto {
                        id: missing,
                        quantity: 1,
                    },
                ],
            })
            .await
            .unwrap_err();

        assert!(matches!(
            report.current_context(),
            KernelError::InexistentProduct(id) if id.as_ref() == &missing
        ));
        assert_eq!(db.order_count(), 0);
        assert_eq!(stock_of(&db, product_id).await?, 5);
        Ok(())
    }

    #[tokio::test]
    async fn requesting_more_than_available_is_rejected() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let customer_id = customer(&db).await?;
        let product_id = product(&db, "Keyboard", Decimal::new(4990, 2), 5).await?;

        let report = db
            .place_order(CreateOrderDto {
                customer_id,
                products: vec![OrderProductDto {
                    id: product_id,
                    quantity: 10,
                }],
            })
            .await
            .unwrap_err();

        assert!(matches!(
            report.current_context(),
            KernelError::UnavailableQuantity(id) if id.as_ref() == &product_id
        ));
        assert_eq!(db.order_count(), 0);
        assert_eq!(stock_of(&db, product_id).await?, 5);
        Ok(())
    }

    #[tokio::test]
    async fn placed_order_snapshots_price_and_decrements_stock(
    ) -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let customer_id = customer(&db).await?;
        let product_id = product(&db, "Keyboard", Decimal::new(999, 2), 20).await?;

        let placed = db
            .place_order(CreateOrderDto {
                customer_id,
                products: vec![OrderProductDto {
                    id: product_id,
                    quantity: 3,
                }],
            })
            .await?;

        assert_eq!(placed.customer_id.as_ref(), &customer_id);
        assert_eq!(placed.products.len(), 1);
        let line = &placed.products[0];
        assert_eq!(line.product_id.as_ref(), &product_id);
        assert_eq!(line.quantity.as_ref(), &3);
        assert_eq!(line.price.as_ref(), &Decimal::new(999, 2));
        assert_eq!(stock_of(&db, product_id).await?, 17);

        let fetched = db
            .get_order(GetOrderDto {
                id: *placed.id.as_ref(),
            })
            .await?
            .unwrap();
        assert_eq!(fetched.products.len(), 1);
        assert_eq!(fetched.products[0].price.as_ref(), &Decimal::new(999, 2));
        Ok(())
    }

    #[tokio::test]
    async fn placing_twice_decrements_twice() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let customer_id = customer(&db).await?;
        let product_id = product(&db, "Keyboard", Decimal::new(999, 2), 20).await?;
        let request = || CreateOrderDto {
            customer_id,
            products: vec![OrderProductDto {
                id: product_id,
                quantity: 3,
            }],
        };

        db.place_order(request()).await?;
        db.place_order(request()).await?;

        assert_eq!(db.order_count(), 2);
        assert_eq!(stock_of(&db, product_id).await?, 14);
        Ok(())
    }

    // Duplicate ids in one request each validate against the same snapshot
    // and the batch update writes the same product twice, so the second
    // write wins and only one decrement survives.
    #[tokio::test]
    async fn duplicate_lines_validate_against_one_snapshot(
    ) -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();
        let customer_id = customer(&db).await?;
        let product_id = product(&db, "Keyboard", Decimal::new(999, 2), 10).await?;

        let placed = db
            .place_order(CreateOrderDto {
                customer_id,
                products: vec![
                    OrderProductDto {
                        id: product_id,
                        quantity: 4,
                    },
                    OrderProductDto {
                        id: product_id,
                        quantity: 4,
                    },
                ],
            })
            .await?;

        assert_eq!(placed.products.len(), 2);
        assert_eq!(stock_of(&db, product_id).await?, 6);
        Ok(())
    }
}
