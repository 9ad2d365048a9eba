use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{DepartmentalDistributionRef, ProductGroupRef, UnitRef};
use super::customers::CustomerLinks;
use crate::api::encode_path_segment;
use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub available: Option<f64>,
    pub gross_weight: Option<f64>,
    pub in_stock: Option<f64>,
    pub inventory_last_updated: Option<String>,
    pub net_weight: Option<f64>,
    pub ordered_by_customers: Option<f64>,
    pub ordered_from_suppliers: Option<f64>,
    pub package_volume: Option<f64>,
    pub recommended_cost_price: Option<f64>,
}

/// Product. Product numbers are strings and may contain characters that need
/// escaping in a URL.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_number: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub bar_code: Option<String>,
    pub barred: Option<bool>,
    pub cost_price: Option<f64>,
    pub recommended_price: Option<f64>,
    pub sales_price: Option<f64>,
    pub last_updated: Option<String>,
    pub inventory: Option<Inventory>,
    pub product_group: Option<ProductGroupRef>,
    pub unit: Option<UnitRef>,
    pub departmental_distribution: Option<DepartmentalDistributionRef>,
    pub invoices: Option<CustomerLinks>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Products {
    api: ApiClient,
}

rest_resource!(Products);

fn product_path(product_number: &str) -> Result<String, ClientError> {
    Ok(format!("/products/{}", encode_path_segment(product_number)?))
}

impl Products {
    pub async fn get(&self, page: Page) -> Result<HttpResponse<Collection<Product>>, ClientError> {
        self.api.get(page.apply("/products")).await
    }

    pub async fn get_for(
        &self,
        product_number: &str,
    ) -> Result<HttpResponse<Product>, ClientError> {
        self.api.get(product_path(product_number)?).await
    }

    pub async fn create(&self, product: &Product) -> Result<HttpResponse<Product>, ClientError> {
        self.api.post("/products", product).await
    }

    pub async fn update(
        &self,
        product_number: &str,
        product: &Product,
    ) -> Result<HttpResponse<Product>, ClientError> {
        self.api.put(product_path(product_number)?, product).await
    }

    pub async fn delete(
        &self,
        product_number: &str,
    ) -> Result<HttpResponse<IgnoredAny>, ClientError> {
        self.api.delete(product_path(product_number)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::product_path;

    #[test]
    fn escapes_product_numbers() {
        assert_eq!(product_path("P-100").expect("valid"), "/products/P-100");
        assert_eq!(
            product_path("50/50 mix").expect("valid"),
            "/products/50%2F50%20mix"
        );
        assert!(product_path("..").is_err());
    }
}
