use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::VersionedPath;
use crate::pagination::with_cursor;
use crate::{ApiClient, ClientError, HttpResponse, Items, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGroup {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub domestic_account_id: Option<u32>,
    pub object_version: Option<String>,
}

/// Product groups through the Open products API. Supports writes, unlike
/// [`crate::rest::ProductGroups`].
#[derive(Clone, Debug)]
pub struct ProductGroups {
    api: ApiClient,
    path: VersionedPath,
}

open_resource!(ProductGroups, "productsapi/", "v1.1.0");

impl ProductGroups {
    pub async fn count(&self) -> Result<HttpResponse<u64>, ClientError> {
        self.api.get(self.path.join("productgroups/count")).await
    }

    pub async fn get_all(
        &self,
        cursor: u64,
    ) -> Result<HttpResponse<Items<ProductGroup>>, ClientError> {
        self.api
            .get(with_cursor(&self.path.join("productgroups"), cursor))
            .await
    }

    pub async fn get(&self, page: Page) -> Result<HttpResponse<Vec<ProductGroup>>, ClientError> {
        self.api
            .get(page.apply(&self.path.join("productgroups/paged")))
            .await
    }

    pub async fn get_for(&self, id: u32) -> Result<HttpResponse<ProductGroup>, ClientError> {
        self.api
            .get(self.path.join(&format!("productgroups/{id}")))
            .await
    }

    pub async fn create(
        &self,
        group: &ProductGroup,
    ) -> Result<HttpResponse<ProductGroup>, ClientError> {
        self.api.post(self.path.join("productgroups"), group).await
    }

    /// Replaces a group. The target is identified by `id` and `objectVersion`
    /// in the body.
    pub async fn update(
        &self,
        group: &ProductGroup,
    ) -> Result<HttpResponse<ProductGroup>, ClientError> {
        self.api.put(self.path.join("productgroups"), group).await
    }
}
