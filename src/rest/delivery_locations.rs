use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::CustomerRef;
use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

/// Alternative shipping address attached to a customer.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryLocation {
    pub delivery_location_number: Option<u32>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub terms_of_delivery: Option<String>,
    pub barred: Option<bool>,
    pub sort_key: Option<u32>,
    pub customer: Option<CustomerRef>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// Delivery locations, addressed through their owning customer.
#[derive(Clone, Debug)]
pub struct DeliveryLocations {
    api: ApiClient,
}

rest_resource!(DeliveryLocations);

fn collection_path(customer_number: u32) -> String {
    format!("/customers/{customer_number}/delivery-locations")
}

impl DeliveryLocations {
    pub async fn get(
        &self,
        customer_number: u32,
        page: Page,
    ) -> Result<HttpResponse<Collection<DeliveryLocation>>, ClientError> {
        self.api
            .get(page.apply(&collection_path(customer_number)))
            .await
    }

    pub async fn get_for(
        &self,
        customer_number: u32,
        delivery_location_number: u32,
    ) -> Result<HttpResponse<DeliveryLocation>, ClientError> {
        self.api
            .get(format!(
                "{}/{delivery_location_number}",
                collection_path(customer_number)
            ))
            .await
    }

    pub async fn create(
        &self,
        customer_number: u32,
        location: &DeliveryLocation,
    ) -> Result<HttpResponse<DeliveryLocation>, ClientError> {
        self.api
            .post(collection_path(customer_number), location)
            .await
    }

    pub async fn update(
        &self,
        customer_number: u32,
        delivery_location_number: u32,
        location: &DeliveryLocation,
    ) -> Result<HttpResponse<DeliveryLocation>, ClientError> {
        self.api
            .put(
                format!("{}/{delivery_location_number}", collection_path(customer_number)),
                location,
            )
            .await
    }

    pub async fn delete(
        &self,
        customer_number: u32,
        delivery_location_number: u32,
    ) -> Result<HttpResponse<IgnoredAny>, ClientError> {
        self.api
            .delete(format!(
                "{}/{delivery_location_number}",
                collection_path(customer_number)
            ))
            .await
    }
}
