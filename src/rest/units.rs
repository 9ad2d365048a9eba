use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

/// Unit of measure (pieces, hours, kg ...).
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub unit_number: Option<u32>,
    pub name: Option<String>,
    pub products: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

impl Unit {
    /// Body for `create`/`update`: only the name is writable.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug)]
pub struct Units {
    api: ApiClient,
}

rest_resource!(Units);

impl Units {
    pub async fn get(&self, page: Page) -> Result<HttpResponse<Collection<Unit>>, ClientError> {
        self.api.get(page.apply("/units")).await
    }

    pub async fn get_for(&self, unit_number: u32) -> Result<HttpResponse<Unit>, ClientError> {
        self.api.get(format!("/units/{unit_number}")).await
    }

    pub async fn create(&self, unit: &Unit) -> Result<HttpResponse<Unit>, ClientError> {
        self.api.post("/units", unit).await
    }

    pub async fn update(
        &self,
        unit_number: u32,
        unit: &Unit,
    ) -> Result<HttpResponse<Unit>, ClientError> {
        self.api.put(format!("/units/{unit_number}"), unit).await
    }

    pub async fn delete(&self, unit_number: u32) -> Result<HttpResponse<IgnoredAny>, ClientError> {
        self.api.delete(format!("/units/{unit_number}")).await
    }
}
