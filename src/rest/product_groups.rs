use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::AccountRef;
use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGroup {
    pub product_group_number: Option<u32>,
    pub name: Option<String>,
    pub inventory_enabled: Option<bool>,
    pub accrual: Option<AccountRef>,
    pub products: Option<String>,
    pub sales_accounts: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// Read-only REST view of product groups.
///
/// Writes go through the Open family, see [`crate::open::ProductGroups`].
#[derive(Clone, Debug)]
pub struct ProductGroups {
    api: ApiClient,
}

rest_resource!(ProductGroups);

impl ProductGroups {
    pub async fn get(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<ProductGroup>>, ClientError> {
        self.api.get(page.apply("/product-groups")).await
    }

    pub async fn get_for(
        &self,
        product_group_number: u32,
    ) -> Result<HttpResponse<ProductGroup>, ClientError> {
        self.api
            .get(format!("/product-groups/{product_group_number}"))
            .await
    }
}
