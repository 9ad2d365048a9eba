use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

/// Document layout used when rendering invoices, orders and quotes.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub layout_number: Option<u32>,
    pub name: Option<String>,
    pub deleted: Option<bool>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Layouts {
    api: ApiClient,
}

rest_resource!(Layouts);

impl Layouts {
    pub async fn get(&self, page: Page) -> Result<HttpResponse<Collection<Layout>>, ClientError> {
        self.api.get(page.apply("/layouts")).await
    }

    pub async fn get_for(&self, layout_number: u32) -> Result<HttpResponse<Layout>, ClientError> {
        self.api.get(format!("/layouts/{layout_number}")).await
    }
}
