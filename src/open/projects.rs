use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::VersionedPath;
use crate::{ApiClient, ClientError, HttpResponse, Items, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub number: Option<u32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub project_group_number: Option<u32>,
    pub main_project_number: Option<u32>,
    pub customer_number: Option<u32>,
    pub contact_person_id: Option<u32>,
    pub delivery_location_number: Option<u32>,
    pub department_number: Option<u32>,
    pub responsible_employee_number: Option<u32>,
    pub other_responsible_employee_number: Option<u32>,
    pub other_reference: Option<String>,
    pub cost_price: Option<f64>,
    pub sales_price: Option<f64>,
    pub fixed_price: Option<f64>,
    pub invoiced_total: Option<f64>,
    pub mileage: Option<f64>,
    pub delivery_date: Option<String>,
    pub closed_date: Option<String>,
    pub last_updated: Option<String>,
    pub is_barred: Option<bool>,
    pub is_closed: Option<bool>,
    pub is_main_project: Option<bool>,
    pub is_mileage_invoiced: Option<bool>,
    pub status: Option<u8>,
    pub object_version: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Projects {
    api: ApiClient,
    path: VersionedPath,
}

open_resource!(Projects, "api/", "v22.0.0");

impl Projects {
    pub async fn get_all(&self) -> Result<HttpResponse<Items<Project>>, ClientError> {
        self.api.get(self.path.join("projects")).await
    }

    pub async fn get(&self, page: Page) -> Result<HttpResponse<Vec<Project>>, ClientError> {
        self.api
            .get(page.apply(&self.path.join("projects/paged")))
            .await
    }

    pub async fn get_for(&self, id: u32) -> Result<HttpResponse<Project>, ClientError> {
        self.api
            .get(self.path.join(&format!("projects/{id}")))
            .await
    }
}
