use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::AccountRef;
use super::vat_types::VatType;
use crate::api::encode_path_segment;
use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatAccount {
    /// Short code such as `I25` or `U25`.
    pub vat_code: Option<String>,
    pub name: Option<String>,
    pub rate_percentage: Option<f64>,
    pub barred: Option<bool>,
    pub account: Option<AccountRef>,
    pub contra_account: Option<AccountRef>,
    pub vat_type: Option<VatType>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct VatAccounts {
    api: ApiClient,
}

rest_resource!(VatAccounts);

impl VatAccounts {
    pub async fn get(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<VatAccount>>, ClientError> {
        self.api.get(page.apply("/vat-accounts")).await
    }

    pub async fn get_for(&self, vat_code: &str) -> Result<HttpResponse<VatAccount>, ClientError> {
        self.api
            .get(format!("/vat-accounts/{}", encode_path_segment(vat_code)?))
            .await
    }
}
