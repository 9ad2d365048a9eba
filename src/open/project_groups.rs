use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::VersionedPath;
use crate::pagination::with_cursor;
use crate::{ApiClient, ClientError, HttpResponse, Items, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGroup {
    pub number: Option<u32>,
    pub name: Option<String>,
    /// 1 internal, 2 external invoiceable, 3 external non-invoiceable.
    #[serde(rename = "type")]
    pub group_type: Option<u8>,
    pub cost_account_closed: Option<u32>,
    pub cost_account_ongoing: Option<u32>,
    /// 0 debit, 1 credit.
    pub cost_account_ongoing_type: Option<u8>,
    pub cost_contra_account_ongoing: Option<u32>,
    pub sales_account_closed: Option<u32>,
    pub sales_account_ongoing: Option<u32>,
    /// 0 debit, 1 credit.
    pub sales_account_ongoing_type: Option<u8>,
    pub sales_contra_account_ongoing: Option<u32>,
    pub include_cost_price_in_finance: Option<bool>,
    pub include_sales_price_in_finance: Option<bool>,
    pub object_version: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ProjectGroups {
    api: ApiClient,
    path: VersionedPath,
}

open_resource!(ProjectGroups, "api/", "v22.0.0");

impl ProjectGroups {
    pub async fn get_all(
        &self,
        cursor: u64,
    ) -> Result<HttpResponse<Items<ProjectGroup>>, ClientError> {
        self.api
            .get(with_cursor(&self.path.join("projectgroups"), cursor))
            .await
    }

    pub async fn get(&self, page: Page) -> Result<HttpResponse<Vec<ProjectGroup>>, ClientError> {
        self.api
            .get(page.apply(&self.path.join("projectgroups/paged")))
            .await
    }

    pub async fn get_for(&self, id: u32) -> Result<HttpResponse<ProjectGroup>, ClientError> {
        self.api
            .get(self.path.join(&format!("projectgroups/{id}")))
            .await
    }
}
