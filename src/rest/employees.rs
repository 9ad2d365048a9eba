use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_number: Option<u32>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub barred: Option<bool>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// Employees as seen by the REST family.
///
/// The Open family has its own, richer view in [`crate::open::Employees`].
#[derive(Clone, Debug)]
pub struct Employees {
    api: ApiClient,
}

rest_resource!(Employees);

impl Employees {
    pub async fn get(&self, page: Page) -> Result<HttpResponse<Collection<Employee>>, ClientError> {
        self.api.get(page.apply("/employees")).await
    }

    pub async fn get_for(
        &self,
        employee_number: u32,
    ) -> Result<HttpResponse<Employee>, ClientError> {
        self.api.get(format!("/employees/{employee_number}")).await
    }

    pub async fn create(&self, employee: &Employee) -> Result<HttpResponse<Employee>, ClientError> {
        self.api.post("/employees", employee).await
    }

    pub async fn update(
        &self,
        employee_number: u32,
        employee: &Employee,
    ) -> Result<HttpResponse<Employee>, ClientError> {
        self.api
            .put(format!("/employees/{employee_number}"), employee)
            .await
    }

    pub async fn delete(
        &self,
        employee_number: u32,
    ) -> Result<HttpResponse<IgnoredAny>, ClientError> {
        self.api
            .delete(format!("/employees/{employee_number}"))
            .await
    }
}
