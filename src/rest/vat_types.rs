use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatType {
    pub vat_type_number: Option<u32>,
    pub name: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct VatTypes {
    api: ApiClient,
}

rest_resource!(VatTypes);

impl VatTypes {
    pub async fn get(&self, page: Page) -> Result<HttpResponse<Collection<VatType>>, ClientError> {
        self.api.get(page.apply("/vat-types")).await
    }

    pub async fn get_for(
        &self,
        vat_type_number: u32,
    ) -> Result<HttpResponse<VatType>, ClientError> {
        self.api.get(format!("/vat-types/{vat_type_number}")).await
    }
}
