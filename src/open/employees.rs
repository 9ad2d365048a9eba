use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::VersionedPath;
use crate::{ApiClient, ClientError, HttpResponse, Items, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub number: Option<u32>,
    pub name: Option<String>,
    pub group_number: Option<u32>,
    pub access: Option<bool>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub object_version: Option<String>,
}

/// Employees through the Open API, including group membership.
#[derive(Clone, Debug)]
pub struct Employees {
    api: ApiClient,
    path: VersionedPath,
}

open_resource!(Employees, "api/", "v22.0.0");

impl Employees {
    pub async fn get_all(&self) -> Result<HttpResponse<Items<Employee>>, ClientError> {
        self.api.get(self.path.join("employees")).await
    }

    pub async fn get(&self, page: Page) -> Result<HttpResponse<Vec<Employee>>, ClientError> {
        self.api
            .get(page.apply(&self.path.join("employees/paged")))
            .await
    }

    /// Employees belonging to one employee group.
    pub async fn get_by_group(
        &self,
        group_number: u32,
        page: Page,
    ) -> Result<HttpResponse<Vec<Employee>>, ClientError> {
        let url = page.apply(&self.path.join("employees/paged"));
        self.api
            .get(format!("{url}&filter=groupNumber$eq:{group_number}"))
            .await
    }

    pub async fn get_for(&self, number: u32) -> Result<HttpResponse<Employee>, ClientError> {
        self.api
            .get(self.path.join(&format!("employees/{number}")))
            .await
    }

    pub async fn create(&self, employee: &Employee) -> Result<HttpResponse<Employee>, ClientError> {
        self.api.post(self.path.join("employees"), employee).await
    }
}
