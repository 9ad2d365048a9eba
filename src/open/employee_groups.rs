use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::VersionedPath;
use crate::pagination::with_cursor;
use crate::{ApiClient, ClientError, HttpResponse, Items, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeGroup {
    pub number: Option<u32>,
    pub name: Option<String>,
    pub object_version: Option<String>,
}

#[derive(Clone, Debug)]
pub struct EmployeeGroups {
    api: ApiClient,
    path: VersionedPath,
}

open_resource!(EmployeeGroups, "api/", "v22.0.0");

impl EmployeeGroups {
    pub async fn get_all(
        &self,
        cursor: u64,
    ) -> Result<HttpResponse<Items<EmployeeGroup>>, ClientError> {
        self.api
            .get(with_cursor(&self.path.join("employeegroups"), cursor))
            .await
    }

    pub async fn get(&self, page: Page) -> Result<HttpResponse<Vec<EmployeeGroup>>, ClientError> {
        self.api
            .get(page.apply(&self.path.join("employeegroups/paged")))
            .await
    }

    pub async fn get_for(&self, number: u32) -> Result<HttpResponse<EmployeeGroup>, ClientError> {
        self.api
            .get(self.path.join(&format!("employeegroups/{number}")))
            .await
    }

    pub async fn create(
        &self,
        group: &EmployeeGroup,
    ) -> Result<HttpResponse<EmployeeGroup>, ClientError> {
        self.api.post(self.path.join("employeegroups"), group).await
    }
}
