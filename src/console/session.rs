//! The interactive menu loop.
//!
//! A [`Session`] reads lines from any `AsyncBufRead` and writes to any `AsyncWrite`,
//! so the binary runs it on stdin/stdout and the tests on byte buffers. It gathers
//! values and decisions from the user and hands them to the inventory through a
//! [`ProductClient`]; it never touches the store directly.

use super::input::{self, InputError};
use super::render;
use crate::clients::ProductClient;
use crate::model::{Product, ProductUpdate};
use crate::product_actor::ProductError;
use std::io;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

const KEEP_CURRENT: &str = "(leave it empty to keep current values)";

/// What the menu loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Result of asking for one value.
enum Answer<T> {
    Value(T),
    /// The input did not parse; the error has already been shown.
    Invalid,
    /// End of input.
    Closed,
}

/// Unwraps an [`Answer`], returning from the action otherwise.
macro_rules! value_or_return {
    ($answer:expr) => {
        match $answer {
            Answer::Value(value) => value,
            Answer::Invalid => return Ok(Step::Continue),
            Answer::Closed => return Ok(Step::Exit),
        }
    };
}

/// One interactive console session over a reader and a writer.
pub struct Session<R, W> {
    client: ProductClient,
    reader: R,
    writer: W,
    menu_delay: Duration,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(client: ProductClient, reader: R, writer: W) -> Self {
        Self {
            client,
            reader,
            writer,
            menu_delay: Duration::ZERO,
        }
    }

    /// Waits `delay` before every menu print.
    pub fn with_menu_delay(mut self, delay: Duration) -> Self {
        self.menu_delay = delay;
        self
    }

    /// Runs the menu until the user exits or the input ends.
    ///
    /// Only I/O failures on the reader or writer end the session with an error;
    /// inventory errors are printed and the menu is shown again.
    pub async fn run(mut self) -> io::Result<()> {
        info!("Session started");
        self.say(render::WELCOME).await?;

        loop {
            if !self.menu_delay.is_zero() {
                tokio::time::sleep(self.menu_delay).await;
            }
            self.say(render::MENU).await?;

            let Some(choice) = self.read_line().await? else {
                break;
            };
            let step = match choice.trim().parse::<u8>() {
                Ok(1) => self.add_product().await?,
                Ok(2) => self.view_product().await?,
                Ok(3) => self.update_product().await?,
                Ok(4) => self.delete_product().await?,
                Ok(5) => self.list_products().await?,
                Ok(6) => Step::Exit,
                _ => {
                    debug!(choice = choice.trim(), "Invalid menu choice");
                    self.say(render::INVALID_OPTION).await?;
                    Step::Continue
                }
            };
            if step == Step::Exit {
                break;
            }
        }

        self.say(render::GOODBYE).await?;
        info!("Session ended");
        Ok(())
    }

    async fn add_product(&mut self) -> io::Result<Step> {
        let id = value_or_return!(self.ask("Enter Product ID:", input::parse_id).await?);
        let name = value_or_return!(
            self.ask("Enter Product Name:", |raw| Ok(raw.trim().to_string()))
                .await?
        );
        let quantity =
            value_or_return!(self.ask("Enter Product Quantity:", input::parse_quantity).await?);
        let price =
            value_or_return!(self.ask("Enter Product Price in US $:", input::parse_price).await?);

        let product = Product {
            id,
            name,
            quantity,
            price,
        };
        match self.client.add_product(product).await {
            Ok(()) => self.say("Product added successfully.").await?,
            Err(e) => self.say(&format!("Error adding product: {e}")).await?,
        }
        Ok(Step::Continue)
    }

    async fn view_product(&mut self) -> io::Result<Step> {
        let id = value_or_return!(self.ask("Enter Product ID to view it", input::parse_id).await?);
        match self.client.get_product(id).await {
            Ok(product) => self.say(&render::product_line(&product)).await?,
            Err(e) => self.say(&format!("Error getting the product: {e}")).await?,
        }
        Ok(Step::Continue)
    }

    async fn update_product(&mut self) -> io::Result<Step> {
        let id =
            value_or_return!(self.ask("Enter Product ID to update it", input::parse_id).await?);
        if let Err(e) = self.client.get_product(id).await {
            self.say(&format!("Error getting the product: {e}")).await?;
            return Ok(Step::Continue);
        }

        let new_id = value_or_return!(
            self.ask(&format!("Enter Product NEW ID: {KEEP_CURRENT}"), |raw| {
                input::optional(raw, input::parse_id)
            })
            .await?
        );
        let name = value_or_return!(
            self.ask(&format!("Enter Product NEW Name: {KEEP_CURRENT}"), |raw| {
                Ok(input::optional_name(raw))
            })
            .await?
        );
        let quantity = value_or_return!(
            self.ask(&format!("Enter Product NEW Quantity: {KEEP_CURRENT}"), |raw| {
                input::optional(raw, input::parse_quantity)
            })
            .await?
        );
        let price = value_or_return!(
            self.ask(
                &format!("Enter Product NEW Price in US $: {KEEP_CURRENT}"),
                |raw| input::optional(raw, input::parse_price)
            )
            .await?
        );

        let update = ProductUpdate {
            id: new_id,
            name,
            quantity,
            price,
        };
        match self.client.update_product(id, update).await {
            Ok(_) => self.say("Product updated successfully.").await?,
            Err(e) => self.say(&format!("Error updating product: {e}")).await?,
        }
        Ok(Step::Continue)
    }

    async fn delete_product(&mut self) -> io::Result<Step> {
        let id = value_or_return!(
            self.ask(
                "Enter product ID to REMOVE it\n(WARNING: THIS ACTION CANNOT BE UNDONE!)",
                input::parse_id
            )
            .await?
        );

        match self.client.product_exists(id).await {
            Ok(true) => {}
            Ok(false) => {
                self.delete_failed(ProductError::NotFound(id)).await?;
                return Ok(Step::Continue);
            }
            Err(e) => {
                self.delete_failed(e).await?;
                return Ok(Step::Continue);
            }
        }

        self.write(&render::delete_prompt(id)).await?;
        let Some(answer) = self.read_line().await? else {
            return Ok(Step::Exit);
        };
        let confirmed = input::is_confirmation(&answer);

        match self.client.delete_product(id, confirmed).await {
            Ok(outcome) => self.say(&render::delete_outcome(id, outcome)).await?,
            Err(e) => self.delete_failed(e).await?,
        }
        Ok(Step::Continue)
    }

    async fn delete_failed(&mut self, e: ProductError) -> io::Result<()> {
        self.say(&format!("Error deleting product: {e}")).await
    }

    async fn list_products(&mut self) -> io::Result<Step> {
        match self.client.list_products().await {
            Ok(mut products) => {
                for line in render::product_lines(&mut products) {
                    self.say(&line).await?;
                }
            }
            Err(e) => self.say(&format!("Error listing products: {e}")).await?,
        }
        Ok(Step::Continue)
    }

    /// Prints `prompt`, reads one line and parses it. Parse errors are shown here.
    async fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<Answer<T>> {
        self.say(prompt).await?;
        let Some(line) = self.read_line().await? else {
            return Ok(Answer::Closed);
        };
        match parse(&line) {
            Ok(value) => Ok(Answer::Value(value)),
            Err(e) => {
                self.say(&e.to_string()).await?;
                Ok(Answer::Invalid)
            }
        }
    }

    /// One line of input, `None` at end of input.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    async fn say(&mut self, text: &str) -> io::Result<()> {
        self.write(text).await?;
        self.write("\n").await
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use crate::product_actor;

    /// Runs a scripted session against a fresh actor and returns everything printed.
    async fn run_script(script: &str, client: ProductClient) -> String {
        let mut output = Vec::new();
        Session::new(client, script.as_bytes(), &mut output)
            .run()
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn spawn_inventory() -> ProductClient {
        let (actor, client) = product_actor::new(8);
        tokio::spawn(actor.run());
        ProductClient::new(client)
    }

    #[tokio::test]
    async fn test_widget_scenario() {
        let client = spawn_inventory();
        let script = concat!(
            "1\n1\nWidget\n10\n9.99\n", // add
            "3\n1\n\n\n0\n\n",           // update quantity to 0
            "2\n1\n",                      // view
            "4\n1\nno\n",                  // delete, declined
            "4\n1\nYES\n",                 // delete, confirmed
            "5\n",                          // list
            "6\n",
        );
        let output = run_script(script, client.clone()).await;

        assert!(output.starts_with(render::WELCOME));
        assert!(output.contains("Product added successfully."));
        assert!(output.contains("Product updated successfully."));
        assert!(output.contains("ID: 1, Name: Widget, Quantity: 0, Price: 9.99"));
        assert!(output.contains("Deletion of Product #1 canceled"));
        assert!(output.contains("Product #1 removed successfully"));
        assert!(output.contains("Error listing products: No products found in the inventory"));
        assert!(output.trim_end().ends_with(render::GOODBYE));

        assert_eq!(
            client.get_product(ProductId(1)).await,
            Err(ProductError::NotFound(ProductId(1)))
        );
    }

    #[tokio::test]
    async fn test_invalid_input_returns_to_menu() {
        let client = spawn_inventory();
        let script = "abc\n9\n1\nx\n1\n2\nGadget\nmany\n";
        let output = run_script(script, client.clone()).await;

        assert_eq!(output.matches(render::INVALID_OPTION).count(), 2);
        assert!(output.contains("Invalid input for ID"));
        assert!(output.contains("Invalid input for Quantity"));
        assert!(output.trim_end().ends_with(render::GOODBYE));
        assert_eq!(
            client.list_products().await,
            Err(ProductError::EmptyInventory)
        );
    }

    #[tokio::test]
    async fn test_duplicate_add_and_rekey() {
        let client = spawn_inventory();
        client
            .add_product(Product::new(1, "Widget", 10, 9.99))
            .await
            .unwrap();
        client
            .add_product(Product::new(2, "Gadget", 5, 3.5))
            .await
            .unwrap();

        let script = concat!(
            "1\n2\nCopy\n1\n1\n",   // add onto a taken ID
            "3\n1\n2\n\n\n\n",        // re-key onto a taken ID
            "3\n1\n7\nSprocket\n\n\n", // re-key onto a free ID
            "5\n",
        );
        let output = run_script(script, client.clone()).await;

        assert!(output.contains("Error adding product: Product ID #2 already exists"));
        assert!(output.contains("Error updating product: Product ID #2 already exists"));
        assert!(output.contains("ID: 2, Name: Gadget, Quantity: 5, Price: 3.50\nID: 7, Name: Sprocket, Quantity: 10, Price: 9.99"));
        assert_eq!(
            client.get_product(ProductId(7)).await,
            Ok(Product::new(7, "Sprocket", 10, 9.99))
        );
    }

    #[tokio::test]
    async fn test_missing_product_messages() {
        let client = spawn_inventory();
        let script = "2\n5\n3\n5\n4\n5\n";
        let output = run_script(script, client).await;

        assert_eq!(
            output
                .matches("Error getting the product: Product ID #5 not found")
                .count(),
            2
        );
        assert!(output.contains("Error deleting product: Product ID #5 not found"));
        assert!(!output.contains("Are you sure"));
    }
}
