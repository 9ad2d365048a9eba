use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AccountRef, LayoutRef};
use super::customers::Customer;
use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerGroup {
    pub customer_group_number: Option<u32>,
    pub name: Option<String>,
    /// Debtor account customers in this group post to.
    pub account: Option<AccountRef>,
    pub layout: Option<LayoutRef>,
    pub customers: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CustomerGroups {
    api: ApiClient,
}

rest_resource!(CustomerGroups);

impl CustomerGroups {
    pub async fn get(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<CustomerGroup>>, ClientError> {
        self.api.get(page.apply("/customer-groups")).await
    }

    pub async fn get_for(
        &self,
        customer_group_number: u32,
    ) -> Result<HttpResponse<CustomerGroup>, ClientError> {
        self.api
            .get(format!("/customer-groups/{customer_group_number}"))
            .await
    }

    /// Customers belonging to one group.
    pub async fn get_customers(
        &self,
        customer_group_number: u32,
        page: Page,
    ) -> Result<HttpResponse<Collection<Customer>>, ClientError> {
        let path = format!("/customer-groups/{customer_group_number}/customers");
        self.api.get(page.apply(&path)).await
    }

    pub async fn create(
        &self,
        group: &CustomerGroup,
    ) -> Result<HttpResponse<CustomerGroup>, ClientError> {
        self.api.post("/customer-groups", group).await
    }

    pub async fn update(
        &self,
        customer_group_number: u32,
        group: &CustomerGroup,
    ) -> Result<HttpResponse<CustomerGroup>, ClientError> {
        self.api
            .put(format!("/customer-groups/{customer_group_number}"), group)
            .await
    }

    pub async fn delete(
        &self,
        customer_group_number: u32,
    ) -> Result<HttpResponse<IgnoredAny>, ClientError> {
        self.api
            .delete(format!("/customer-groups/{customer_group_number}"))
            .await
    }
}
