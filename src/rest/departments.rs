use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub department_number: Option<u32>,
    pub name: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Departments {
    api: ApiClient,
}

rest_resource!(Departments);

impl Departments {
    pub async fn get(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<Department>>, ClientError> {
        self.api.get(page.apply("/departments")).await
    }

    pub async fn get_for(
        &self,
        department_number: u32,
    ) -> Result<HttpResponse<Department>, ClientError> {
        self.api
            .get(format!("/departments/{department_number}"))
            .await
    }
}
