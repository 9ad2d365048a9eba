use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

/// Domestic, EU or abroad: decides how VAT is applied to a customer or supplier.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatZone {
    pub vat_zone_number: Option<u32>,
    pub name: Option<String>,
    pub enabled_for_customer: Option<bool>,
    pub enabled_for_supplier: Option<bool>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct VatZones {
    api: ApiClient,
}

rest_resource!(VatZones);

impl VatZones {
    pub async fn get(&self, page: Page) -> Result<HttpResponse<Collection<VatZone>>, ClientError> {
        self.api.get(page.apply("/vat-zones")).await
    }

    pub async fn get_for(
        &self,
        vat_zone_number: u32,
    ) -> Result<HttpResponse<VatZone>, ClientError> {
        self.api.get(format!("/vat-zones/{vat_zone_number}")).await
    }
}
