use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::api::encode_path_segment;
use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// ISO 4217 code, e.g. `DKK`.
    pub code: Option<String>,
    pub name: Option<String>,
    pub iso_number: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Currencies {
    api: ApiClient,
}

rest_resource!(Currencies);

impl Currencies {
    pub async fn get(&self, page: Page) -> Result<HttpResponse<Collection<Currency>>, ClientError> {
        self.api.get(page.apply("/currencies")).await
    }

    pub async fn get_for(&self, code: &str) -> Result<HttpResponse<Currency>, ClientError> {
        self.api
            .get(format!("/currencies/{}", encode_path_segment(code)?))
            .await
    }
}
