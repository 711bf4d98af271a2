use kernel::prelude::entity::{Customer, CustomerEmail, CustomerId, CustomerName, DestructCustomer};

pub struct CreateCustomerDto {
    pub name: String,
    pub email: String,
}

pub struct CustomerDto {
    pub id: CustomerId,
    pub name: CustomerName,
    pub email: CustomerEmail,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        let DestructCustomer { id, name, email } = customer.into_destruct();
        Self { id, name, email }
    }
}
