//! Resources served by the legacy REST family at `https://restapi.e-conomic.com`.
//!
//! Collection reads take a [`Page`](crate::Page) and return a
//! [`Collection`](crate::Collection). Every method returns the transport's
//! [`HttpResponse`](crate::HttpResponse) untouched.

/// Implements the `new`/`from_client` pair shared by every REST resource.
macro_rules! rest_resource {
    ($name:ident) => {
        impl $name {
            /// Creates the resource with its own REST client.
            pub fn new(credential: &$crate::Credential) -> Result<Self, $crate::ClientError> {
                Ok(Self::from_client($crate::ApiClient::rest(credential)?))
            }

            /// Wraps an already configured client.
            pub fn from_client(api: $crate::ApiClient) -> Self {
                Self { api }
            }

            pub fn client(&self) -> &$crate::ApiClient {
                &self.api
            }
        }
    };
}

pub mod accounts;
pub mod common;
pub mod currencies;
pub mod customer_groups;
pub mod customers;
pub mod delivery_locations;
pub mod departments;
pub mod employees;
pub mod invoices;
pub mod journals;
pub mod layouts;
pub mod orders;
pub mod payment_terms;
pub mod product_groups;
pub mod products;
pub mod quotes;
pub mod self_info;
pub mod suppliers;
pub mod units;
pub mod vat_accounts;
pub mod vat_types;
pub mod vat_zones;

pub use accounts::Accounts;
pub use currencies::Currencies;
pub use customer_groups::CustomerGroups;
pub use customers::Customers;
pub use delivery_locations::DeliveryLocations;
pub use departments::Departments;
pub use employees::Employees;
pub use invoices::Invoices;
pub use journals::Journals;
pub use layouts::Layouts;
pub use orders::Orders;
pub use payment_terms::PaymentTerms;
pub use product_groups::ProductGroups;
pub use products::Products;
pub use quotes::Quotes;
pub use self_info::SelfInfo;
pub use suppliers::Suppliers;
pub use units::Units;
pub use vat_accounts::VatAccounts;
pub use vat_types::VatTypes;
pub use vat_zones::VatZones;
