use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{Document, Endpoints};
use super::orders::{UpgradeTemplates, customer_filter};
use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

pub type QuoteEndpoints = Endpoints;

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteHandle {
    pub id: Option<u64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSoap {
    pub quote_handle: Option<QuoteHandle>,
}

/// Sales quote. Drafts, sent and archived quotes all share this shape.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub quote_number: Option<u32>,
    pub soap: Option<QuoteSoap>,
    pub templates: Option<UpgradeTemplates>,
    #[serde(flatten)]
    pub document: Document,
}

#[derive(Clone, Debug)]
pub struct Quotes {
    api: ApiClient,
}

rest_resource!(Quotes);

impl Quotes {
    pub async fn get(&self) -> Result<HttpResponse<QuoteEndpoints>, ClientError> {
        self.api.get("/quotes").await
    }

    pub async fn get_drafts(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<Quote>>, ClientError> {
        self.api.get(page.apply("/quotes/drafts")).await
    }

    pub async fn get_customer_drafts(
        &self,
        customer_number: u32,
        page: Page,
    ) -> Result<HttpResponse<Collection<Quote>>, ClientError> {
        self.api
            .get(customer_filter(page, "/quotes/drafts", customer_number))
            .await
    }

    pub async fn get_draft(&self, quote_number: u32) -> Result<HttpResponse<Quote>, ClientError> {
        self.api.get(format!("/quotes/drafts/{quote_number}")).await
    }

    pub async fn create_draft(&self, quote: &Quote) -> Result<HttpResponse<Quote>, ClientError> {
        self.api.post("/quotes/drafts", quote).await
    }

    pub async fn update_draft(
        &self,
        quote_number: u32,
        quote: &Quote,
    ) -> Result<HttpResponse<Quote>, ClientError> {
        self.api
            .put(format!("/quotes/drafts/{quote_number}"), quote)
            .await
    }

    pub async fn delete_draft(
        &self,
        quote_number: u32,
    ) -> Result<HttpResponse<IgnoredAny>, ClientError> {
        self.api
            .delete(format!("/quotes/drafts/{quote_number}"))
            .await
    }

    pub async fn get_all_sent(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<Quote>>, ClientError> {
        self.api.get(page.apply("/quotes/sent")).await
    }

    pub async fn get_sent(&self, quote_number: u32) -> Result<HttpResponse<Quote>, ClientError> {
        self.api.get(format!("/quotes/sent/{quote_number}")).await
    }

    pub async fn get_all_archived(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<Quote>>, ClientError> {
        self.api.get(page.apply("/quotes/archived")).await
    }

    pub async fn get_archived(
        &self,
        quote_number: u32,
    ) -> Result<HttpResponse<Quote>, ClientError> {
        self.api
            .get(format!("/quotes/archived/{quote_number}"))
            .await
    }
}
