//! # Paycor Rust SDK
//!
//! A minimal client for the Paycor REST API.
//!
//! Every request is signed with HMAC-SHA1 using your private key and sent
//! with your public key in the `paycorapi` header. Request parameters go in
//! the query string for `GET`/`DELETE` and in a JSON body for `PUT`/`POST`;
//! responses are decoded as JSON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paycor::Client;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = Client::new("public_key", "private_key");
//!
//!     let employees = client.get("api/v1/employees", &json!({"page": 1})).await?;
//!     println!("{employees}");
//!
//!     let created = client
//!         .post("api/v1/employees", &json!({"firstName": "Ada"}))
//!         .await?;
//!     println!("{created}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, PaycorError>`. The response that caused
//! an error stays available through [`Client::last_response`]:
//!
//! ```rust,no_run
//! use paycor::{Client, PaycorError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut client = Client::new("public_key", "private_key");
//!
//!     match client.get("api/v1/employees", &()).await {
//!         Ok(data) => println!("{data}"),
//!         Err(PaycorError::Application { status_code, .. }) => {
//!             println!("Server said {status_code}");
//!             if let Some(last) = client.last_response() {
//!                 println!("{last}");
//!             }
//!         }
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! ## Custom transports
//!
//! The default transport is a reqwest client with an in-memory cookie jar.
//! Anything implementing [`Transport`] can replace it via
//! [`Client::with_transport`].

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod sign;
pub mod transport;
pub mod types;

// Re-export main types at the crate root
pub use client::{Client, ClientConfig};
pub use error::{ErrorKind, PaycorError, Result};
pub use request::RequestBuilder;
pub use sign::{AUTH_HEADER, Authenticator, Signer};
pub use transport::{ReqwestTransport, Transport, TransportOptions};
pub use types::{ApiRequest, ApiResponse};
