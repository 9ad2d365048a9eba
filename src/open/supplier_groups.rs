use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::VersionedPath;
use crate::pagination::with_cursor;
use crate::{ApiClient, ClientError, HttpResponse, Items, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierGroup {
    pub number: Option<u32>,
    pub name: Option<String>,
    pub account_number: Option<u32>,
    pub object_version: Option<String>,
}

#[derive(Clone, Debug)]
pub struct SupplierGroups {
    api: ApiClient,
    path: VersionedPath,
}

open_resource!(SupplierGroups, "suppliersapi/", "v1.0.1");

impl SupplierGroups {
    pub async fn count(&self) -> Result<HttpResponse<u64>, ClientError> {
        self.api.get(self.path.join("Groups/count")).await
    }

    pub async fn get_all(
        &self,
        cursor: u64,
    ) -> Result<HttpResponse<Items<SupplierGroup>>, ClientError> {
        self.api
            .get(with_cursor(&self.path.join("Groups"), cursor))
            .await
    }

    pub async fn get(&self, page: Page) -> Result<HttpResponse<Vec<SupplierGroup>>, ClientError> {
        self.api
            .get(page.apply(&self.path.join("Groups/paged")))
            .await
    }

    pub async fn get_for(&self, id: u32) -> Result<HttpResponse<SupplierGroup>, ClientError> {
        self.api.get(self.path.join(&format!("Groups/{id}"))).await
    }

    pub async fn create(
        &self,
        group: &SupplierGroup,
    ) -> Result<HttpResponse<SupplierGroup>, ClientError> {
        self.api.post(self.path.join("Groups"), group).await
    }

    pub async fn update(
        &self,
        group: &SupplierGroup,
    ) -> Result<HttpResponse<SupplierGroup>, ClientError> {
        self.api.put(self.path.join("Groups"), group).await
    }
}
