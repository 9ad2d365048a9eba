use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{Document, Endpoints};
use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

pub type OrderEndpoints = Endpoints;

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHandle {
    pub id: Option<u64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSoap {
    pub order_handle: Option<OrderHandle>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeTemplates {
    pub upgrade_instructions: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// Sales order. Drafts, sent and archived orders all share this shape.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_number: Option<u32>,
    pub soap: Option<OrderSoap>,
    pub templates: Option<UpgradeTemplates>,
    #[serde(flatten)]
    pub document: Document,
}

/// Body of [`Orders::mark_as_sent`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRef {
    pub order_number: u32,
}

impl OrderRef {
    pub fn new(order_number: u32) -> Self {
        Self { order_number }
    }
}

/// `filter` value selecting the drafts of one customer.
pub(crate) fn customer_filter(page: Page, path: &str, customer_number: u32) -> String {
    format!(
        "{}&filter=customer.customerNumber$eq:{customer_number}",
        page.apply(path)
    )
}

#[derive(Clone, Debug)]
pub struct Orders {
    api: ApiClient,
}

rest_resource!(Orders);

impl Orders {
    pub async fn get(&self) -> Result<HttpResponse<OrderEndpoints>, ClientError> {
        self.api.get("/orders").await
    }

    pub async fn get_drafts(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<Order>>, ClientError> {
        self.api.get(page.apply("/orders/drafts")).await
    }

    pub async fn get_customer_drafts(
        &self,
        customer_number: u32,
        page: Page,
    ) -> Result<HttpResponse<Collection<Order>>, ClientError> {
        self.api
            .get(customer_filter(page, "/orders/drafts", customer_number))
            .await
    }

    pub async fn get_draft(&self, order_number: u32) -> Result<HttpResponse<Order>, ClientError> {
        self.api.get(format!("/orders/drafts/{order_number}")).await
    }

    pub async fn create_draft(&self, order: &Order) -> Result<HttpResponse<Order>, ClientError> {
        self.api.post("/orders/drafts", order).await
    }

    pub async fn update_draft(
        &self,
        order_number: u32,
        order: &Order,
    ) -> Result<HttpResponse<Order>, ClientError> {
        self.api
            .put(format!("/orders/drafts/{order_number}"), order)
            .await
    }

    pub async fn delete_draft(
        &self,
        order_number: u32,
    ) -> Result<HttpResponse<IgnoredAny>, ClientError> {
        self.api
            .delete(format!("/orders/drafts/{order_number}"))
            .await
    }

    pub async fn get_all_sent(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<Order>>, ClientError> {
        self.api.get(page.apply("/orders/sent")).await
    }

    pub async fn get_sent(&self, order_number: u32) -> Result<HttpResponse<Order>, ClientError> {
        self.api.get(format!("/orders/sent/{order_number}")).await
    }

    /// Moves a draft order to the sent collection.
    pub async fn mark_as_sent(&self, order: &OrderRef) -> Result<HttpResponse<Order>, ClientError> {
        self.api.post("/orders/sent", order).await
    }

    pub async fn get_all_archived(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<Order>>, ClientError> {
        self.api.get(page.apply("/orders/archived")).await
    }

    pub async fn get_archived(
        &self,
        order_number: u32,
    ) -> Result<HttpResponse<Order>, ClientError> {
        self.api
            .get(format!("/orders/archived/{order_number}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::customer_filter;
    use crate::Page;

    #[test]
    fn customer_filter_follows_paging() {
        assert_eq!(
            customer_filter(Page::default(), "/orders/drafts", 5),
            "/orders/drafts?skippages=0&pagesize=100&filter=customer.customerNumber$eq:5"
        );
    }
}
