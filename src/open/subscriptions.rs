use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::VersionedPath;
use crate::pagination::with_cursor;
use crate::{ApiClient, ClientError, HttpResponse, Items, Page};

/// Recurring billing plan.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub number: Option<u32>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// 0 full, 1 proportional.
    pub collection: Option<u8>,
    /// Billing interval code, 1 to 13.
    pub interval: Option<u8>,
    pub accrue: Option<bool>,
    pub allow_more_than_one_per_customer: Option<bool>,
    pub include_name: Option<bool>,
    pub include_period: Option<bool>,
    pub is_barred: Option<bool>,
    pub is_calendar_based: Option<bool>,
    pub last_updated: Option<String>,
    pub object_version: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Subscriptions {
    api: ApiClient,
    path: VersionedPath,
}

open_resource!(Subscriptions, "subscriptionsapi/", "v5.0.1");

impl Subscriptions {
    pub async fn get_all(
        &self,
        cursor: u64,
    ) -> Result<HttpResponse<Items<Subscription>>, ClientError> {
        self.api
            .get(with_cursor(&self.path.join("subscriptions"), cursor))
            .await
    }

    pub async fn get(&self, page: Page) -> Result<HttpResponse<Vec<Subscription>>, ClientError> {
        self.api
            .get(page.apply(&self.path.join("subscriptions/paged")))
            .await
    }

    pub async fn get_for(&self, id: u32) -> Result<HttpResponse<Subscription>, ClientError> {
        self.api
            .get(self.path.join(&format!("subscriptions/{id}")))
            .await
    }
}
