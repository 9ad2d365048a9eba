//! List the first page of customers through the REST API.
//!
//! Run:
//! `ECONOMIC_SECRET_TOKEN=<secret> ECONOMIC_GRANT_TOKEN=<grant> cargo run --example list_customers`
//!
//! The public demo agreement accepts `demo` for both tokens.

use economic_client::rest::Customers;
use economic_client::{Credential, GRANT_TOKEN_ENV, Page, SECRET_TOKEN_ENV};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var(SECRET_TOKEN_ENV).is_err() || std::env::var(GRANT_TOKEN_ENV).is_err() {
        eprintln!("Set {SECRET_TOKEN_ENV} and {GRANT_TOKEN_ENV} before running this example.");
        std::process::exit(2);
    }

    let customers = Customers::new(&Credential::from_env())?;
    let response = customers.get(Page::new(0, 20)).await?;

    println!("{} {}", response.status, response.status_text);
    for customer in &response.data.collection {
        println!(
            "{:>8}  {}",
            customer.customer_number.unwrap_or_default(),
            customer.name.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
