use rust_decimal::Decimal;

use kernel::prelude::entity::{
    DestructProduct, Product, ProductId, ProductName, ProductPrice, ProductQuantity,
};

pub struct CreateProductDto {
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

pub struct ProductDto {
    pub id: ProductId,
    pub name: ProductName,
    pub price: ProductPrice,
    pub quantity: ProductQuantity,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        let DestructProduct {
            id,
            name,
            price,
            quantity,
        } = product.into_destruct();
        Self {
            id,
            name,
            price,
            quantity,
        }
    }
}
