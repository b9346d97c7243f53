use inventory_control::config::InventoryConfig;
use inventory_control::console::Session;
use inventory_control::framework::DeleteOutcome;
use inventory_control::lifecycle::InventorySystem;
use inventory_control::model::{Product, ProductId, ProductUpdate};
use inventory_control::product_actor::ProductError;

fn widget() -> Product {
    Product::new(1, "Widget", 10, 9.99)
}

/// Full end-to-end test of the scenario: add, zero the quantity, delete, list.
#[tokio::test]
async fn test_widget_lifecycle_through_the_actor() {
    let system = InventorySystem::new(&InventoryConfig::default());
    let client = &system.product_client;

    client.add_product(widget()).await.expect("Failed to add product");

    let updated = client
        .update_product(ProductId(1), ProductUpdate::default().quantity(0))
        .await
        .expect("Failed to update product");
    assert_eq!(updated.quantity, 0);
    assert_eq!(
        client.get_product(ProductId(1)).await.unwrap().quantity,
        0,
        "Quantity zero must be applied, not treated as unchanged"
    );

    let outcome = client
        .delete_product(ProductId(1), true)
        .await
        .expect("Failed to delete product");
    assert_eq!(outcome, DeleteOutcome::Removed);

    assert_eq!(
        client.list_products().await,
        Err(ProductError::EmptyInventory)
    );

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_add_get_and_duplicate() {
    let system = InventorySystem::new(&InventoryConfig::default());
    let client = &system.product_client;

    client.add_product(widget()).await.unwrap();
    assert_eq!(client.get_product(ProductId(1)).await.unwrap(), widget());

    let duplicate = Product::new(1, "Impostor", 1, 1.0);
    assert_eq!(
        client.add_product(duplicate).await,
        Err(ProductError::DuplicateId(ProductId(1)))
    );
    assert_eq!(client.list_products().await.unwrap(), vec![widget()]);

    assert_eq!(
        client.get_product(ProductId(99)).await,
        Err(ProductError::NotFound(ProductId(99)))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rekey_rules() {
    let system = InventorySystem::new(&InventoryConfig::default());
    let client = &system.product_client;

    client.add_product(widget()).await.unwrap();
    client
        .add_product(Product::new(2, "Gadget", 4, 2.5))
        .await
        .unwrap();

    // Taken target: nothing changes, not even the other fields.
    let result = client
        .update_product(
            ProductId(1),
            ProductUpdate::default().id(2).name("").price(0.0),
        )
        .await;
    assert_eq!(result, Err(ProductError::DuplicateId(ProductId(2))));
    assert_eq!(client.get_product(ProductId(1)).await.unwrap(), widget());

    // Free target: the product moves with its other updates applied.
    let moved = client
        .update_product(ProductId(1), ProductUpdate::default().id(3).name(""))
        .await
        .unwrap();
    assert_eq!(moved, Product::new(3, "", 10, 9.99));
    assert_eq!(
        client.get_product(ProductId(1)).await,
        Err(ProductError::NotFound(ProductId(1)))
    );
    assert_eq!(client.get_product(ProductId(3)).await.unwrap(), moved);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let system = InventorySystem::new(&InventoryConfig::default());
    let client = &system.product_client;

    client.add_product(widget()).await.unwrap();
    assert!(client.product_exists(ProductId(1)).await.unwrap());

    assert_eq!(
        client.delete_product(ProductId(1), false).await,
        Ok(DeleteOutcome::Canceled)
    );
    assert!(client.get_product(ProductId(1)).await.is_ok());

    assert_eq!(
        client.delete_product(ProductId(1), true).await,
        Ok(DeleteOutcome::Removed)
    );
    assert!(!client.product_exists(ProductId(1)).await.unwrap());
    assert_eq!(
        client.delete_product(ProductId(1), true).await,
        Err(ProductError::NotFound(ProductId(1)))
    );

    system.shutdown().await.unwrap();
}

/// Concurrent re-keys onto the same free ID: the actor serializes them, so exactly
/// one wins and the rest see a duplicate.
#[tokio::test]
async fn test_concurrent_rekeys_are_serialized() {
    let system = InventorySystem::new(&InventoryConfig::default());

    for id in 1..=10 {
        system
            .product_client
            .add_product(Product::new(id, format!("Item {id}"), 1, 1.0))
            .await
            .unwrap();
    }

    let mut handles = vec![];
    for id in 1..=10 {
        let client = system.product_client.clone();
        handles.push(tokio::spawn(async move {
            client
                .update_product(ProductId(id), ProductUpdate::default().id(100))
                .await
        }));
    }

    let mut moved = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => moved += 1,
            Err(ProductError::DuplicateId(ProductId(100))) => duplicates += 1,
            Err(e) => panic!("Unexpected error: {e}"),
        }
    }
    assert_eq!(moved, 1);
    assert_eq!(duplicates, 9);
    assert_eq!(system.product_client.list_products().await.unwrap().len(), 10);

    system.shutdown().await.unwrap();
}

/// The console drives the same inventory the system owns.
#[tokio::test]
async fn test_console_session_against_system() {
    let system = InventorySystem::new(&InventoryConfig::default());

    let script = "1\n5\nBolt\n0\n0.1\n5\n6\n";
    let mut output = Vec::new();
    Session::new(system.product_client.clone(), script.as_bytes(), &mut output)
        .run()
        .await
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("ID: 5, Name: Bolt, Quantity: 0, Price: 0.10"));
    assert_eq!(
        system.product_client.get_product(ProductId(5)).await,
        Ok(Product::new(5, "Bolt", 0, 0.1))
    );

    system.shutdown().await.unwrap();
}
