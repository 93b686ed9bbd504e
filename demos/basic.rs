//! Basic usage example for the Paycor SDK.
//!
//! This example demonstrates:
//! - Creating a client
//! - Reading a resource with query parameters
//! - Handling API errors and inspecting the last response
//!
//! Run with:
//! ```bash
//! PAYCOR_PUBLIC_KEY=... PAYCOR_PRIVATE_KEY=... cargo run --example basic
//! ```

use paycor::{Client, ClientConfig, PaycorError};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let public_key = std::env::var("PAYCOR_PUBLIC_KEY")?;
    let private_key = std::env::var("PAYCOR_PRIVATE_KEY")?;

    println!("Creating Paycor client...");
    let mut client = Client::with_config(
        public_key,
        private_key,
        ClientConfig {
            debug: std::env::var("PAYCOR_DEBUG").is_ok(),
            ..Default::default()
        },
    );

    println!("\nListing employees...");
    match client.get("api/v1/employees", &json!({"page": 1})).await {
        Ok(employees) => println!("{}", serde_json::to_string_pretty(&employees)?),
        Err(PaycorError::Application { status_code, .. }) => {
            println!("Request failed with status {status_code}");
            if let Some(last) = client.last_response() {
                if let Some(request) = &last.request {
                    println!("\nRequest:\n{request}");
                }
                println!("\nResponse:\n{last}");
            }
        }
        Err(e) => return Err(e.into()),
    }

    println!("\nDone!");
    Ok(())
}
