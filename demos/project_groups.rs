//! Walk every project group through the Open API, following the cursor.
//!
//! Run:
//! `ECONOMIC_SECRET_TOKEN=<secret> ECONOMIC_GRANT_TOKEN=<grant> cargo run --example project_groups`
//!
//! Optional env vars:
//! - `ECONOMIC_API_VERSION` (defaults to the built-in project API version)

use economic_client::open::ProjectGroups;
use economic_client::{Credential, GRANT_TOKEN_ENV, SECRET_TOKEN_ENV};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var(SECRET_TOKEN_ENV).is_err() || std::env::var(GRANT_TOKEN_ENV).is_err() {
        eprintln!("Set {SECRET_TOKEN_ENV} and {GRANT_TOKEN_ENV} before running this example.");
        std::process::exit(2);
    }

    let mut groups = ProjectGroups::new(&Credential::from_env())?;
    if let Ok(version) = std::env::var("ECONOMIC_API_VERSION") {
        groups.set_version(version);
    }
    println!("Using {}{}", ProjectGroups::SEGMENT, groups.version());

    let mut cursor = 0;
    loop {
        let batch = groups.get_all(cursor).await?.data;
        for group in &batch.items {
            println!(
                "{:>6}  {}",
                group.number.unwrap_or_default(),
                group.name.as_deref().unwrap_or("-")
            );
        }
        match batch.cursor {
            Some(next) if !batch.items.is_empty() && next != cursor => cursor = next,
            _ => break,
        }
    }
    Ok(())
}
