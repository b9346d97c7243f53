//! Text shown to the user.

use crate::framework::DeleteOutcome;
use crate::model::{Product, ProductId};

pub const WELCOME: &str = "Welcome to our Inventory Control!";
pub const GOODBYE: &str = "Exiting Inventory Control...";

pub const MENU: &str = "What would you like to do?
1. Add Product
2. View Product
3. Update Product
4. Delete Product
5. List Products
6. Exit";

pub const INVALID_OPTION: &str = "Invalid option. Please select a number from 1 to 6.";

/// One product per line, price with two decimals.
pub fn product_line(product: &Product) -> String {
    format!(
        "ID: {}, Name: {}, Quantity: {}, Price: {:.2}",
        product.id, product.name, product.quantity, product.price
    )
}

/// Products sorted by ID, one line each.
pub fn product_lines(products: &mut [Product]) -> Vec<String> {
    products.sort_by_key(|product| product.id);
    products.iter().map(product_line).collect()
}

pub fn delete_prompt(id: ProductId) -> String {
    format!("Are you sure you want to delete Product #{id}? (Type 'yes' to confirm): ")
}

pub fn delete_outcome(id: ProductId, outcome: DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::Removed => format!("Product #{id} removed successfully"),
        DeleteOutcome::Canceled => format!("Deletion of Product #{id} canceled"),
    }
}
