use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{Document, Endpoints};
use crate::api::encode_query_value;
use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

pub type InvoiceEndpoints = Endpoints;

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceHandle {
    pub id: Option<u64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSoap {
    pub current_invoice_handle: Option<InvoiceHandle>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftInvoiceTemplates {
    pub booking_instructions: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// Invoice that has not been booked yet and can still be edited.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftInvoice {
    pub draft_invoice_number: Option<u32>,
    pub attachment: Option<String>,
    pub soap: Option<InvoiceSoap>,
    pub templates: Option<DraftInvoiceTemplates>,
    #[serde(flatten)]
    pub document: Document,
}

/// Booked invoice. Also the shape of paid, unpaid, overdue and not-due invoices.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedInvoice {
    pub booked_invoice_number: Option<u32>,
    pub remainder: Option<f64>,
    pub remainder_in_base_currency: Option<f64>,
    pub sent: Option<String>,
    #[serde(flatten)]
    pub document: Document,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftInvoiceRef {
    pub draft_invoice_number: Option<u32>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedInvoiceRef {
    pub booked_invoice_number: Option<u32>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// Body of [`Invoices::book`]: the draft to turn into a booked invoice.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInvoice {
    pub draft_invoice: DraftInvoiceRef,
    /// Explicit booked number; the next free number is used when absent.
    pub booked_invoice_number: Option<u32>,
}

impl BookInvoice {
    pub fn draft(draft_invoice_number: u32) -> Self {
        Self {
            draft_invoice: DraftInvoiceRef {
                draft_invoice_number: Some(draft_invoice_number),
                self_url: None,
            },
            booked_invoice_number: None,
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentInvoiceRecipient {
    pub name: Option<String>,
    pub ean: Option<String>,
    pub mobile_phone: Option<String>,
}

/// Invoice sent through e-invoicing or MobilePay.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentInvoice {
    pub id: Option<u64>,
    pub created_by: Option<String>,
    pub creation_date: Option<String>,
    pub invoice: Option<BookedInvoiceRef>,
    pub recipient: Option<SentInvoiceRecipient>,
    /// `ean` or `mobilePay`.
    pub send_by: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Invoices {
    api: ApiClient,
}

rest_resource!(Invoices);

/// Appends an optional e-conomic filter expression, percent-encoded.
fn filtered(page: Page, path: &str, filter: Option<&str>) -> String {
    let url = page.apply(path);
    match filter {
        Some(filter) => format!("{url}&filter={}", encode_query_value(filter)),
        None => url,
    }
}

impl Invoices {
    /// Links to the invoice sub-collections.
    pub async fn get(&self) -> Result<HttpResponse<InvoiceEndpoints>, ClientError> {
        self.api.get("/invoices").await
    }

    pub async fn get_drafts(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<DraftInvoice>>, ClientError> {
        self.api.get(page.apply("/invoices/drafts")).await
    }

    pub async fn get_draft(
        &self,
        draft_invoice_number: u32,
    ) -> Result<HttpResponse<DraftInvoice>, ClientError> {
        self.api
            .get(format!("/invoices/drafts/{draft_invoice_number}"))
            .await
    }

    pub async fn create_draft(
        &self,
        draft: &DraftInvoice,
    ) -> Result<HttpResponse<DraftInvoice>, ClientError> {
        self.api.post("/invoices/drafts", draft).await
    }

    pub async fn update_draft(
        &self,
        draft_invoice_number: u32,
        draft: &DraftInvoice,
    ) -> Result<HttpResponse<DraftInvoice>, ClientError> {
        self.api
            .put(format!("/invoices/drafts/{draft_invoice_number}"), draft)
            .await
    }

    pub async fn delete_draft(
        &self,
        draft_invoice_number: u32,
    ) -> Result<HttpResponse<IgnoredAny>, ClientError> {
        self.api
            .delete(format!("/invoices/drafts/{draft_invoice_number}"))
            .await
    }

    pub async fn get_all_booked(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<BookedInvoice>>, ClientError> {
        self.api.get(page.apply("/invoices/booked")).await
    }

    pub async fn get_booked(
        &self,
        booked_invoice_number: u32,
    ) -> Result<HttpResponse<BookedInvoice>, ClientError> {
        self.api
            .get(format!("/invoices/booked/{booked_invoice_number}"))
            .await
    }

    /// Books a draft invoice.
    pub async fn book(
        &self,
        request: &BookInvoice,
    ) -> Result<HttpResponse<BookedInvoice>, ClientError> {
        self.api.post("/invoices/booked", request).await
    }

    pub async fn get_paid(
        &self,
        page: Page,
        filter: Option<&str>,
    ) -> Result<HttpResponse<Collection<BookedInvoice>>, ClientError> {
        self.api.get(filtered(page, "/invoices/paid", filter)).await
    }

    pub async fn get_unpaid(
        &self,
        page: Page,
        filter: Option<&str>,
    ) -> Result<HttpResponse<Collection<BookedInvoice>>, ClientError> {
        self.api
            .get(filtered(page, "/invoices/unpaid", filter))
            .await
    }

    pub async fn get_overdue(
        &self,
        page: Page,
        filter: Option<&str>,
    ) -> Result<HttpResponse<Collection<BookedInvoice>>, ClientError> {
        self.api
            .get(filtered(page, "/invoices/overdue", filter))
            .await
    }

    pub async fn get_not_due(
        &self,
        page: Page,
        filter: Option<&str>,
    ) -> Result<HttpResponse<Collection<BookedInvoice>>, ClientError> {
        self.api
            .get(filtered(page, "/invoices/not-due", filter))
            .await
    }

    pub async fn get_all_sent(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<SentInvoice>>, ClientError> {
        self.api.get(page.apply("/invoices/sent")).await
    }

    pub async fn get_sent(&self, id: u64) -> Result<HttpResponse<SentInvoice>, ClientError> {
        self.api.get(format!("/invoices/sent/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::{BookInvoice, DraftInvoice, filtered};
    use crate::Page;

    #[test]
    fn filter_is_encoded_after_paging() {
        assert_eq!(
            filtered(Page::default(), "/invoices/paid", Some("date$gte:2024-01-01")),
            "/invoices/paid?skippages=0&pagesize=100&filter=date%24gte%3A2024-01-01"
        );
        assert_eq!(
            filtered(Page::new(1, 10), "/invoices/unpaid", None),
            "/invoices/unpaid?skippages=1&pagesize=10"
        );
    }

    #[test]
    fn draft_flattens_document_fields() {
        let draft: DraftInvoice = serde_json::from_str(
            r#"{
                "draftInvoiceNumber": 7,
                "currency": "DKK",
                "customer": {"customerNumber": 1},
                "netAmount": 100.0
            }"#,
        )
        .expect("valid draft");
        assert_eq!(draft.draft_invoice_number, Some(7));
        assert_eq!(draft.document.currency.as_deref(), Some("DKK"));
        assert_eq!(draft.document.net_amount, Some(100.0));
    }

    #[test]
    fn book_request_wraps_draft_number() {
        let body = serde_json::to_value(BookInvoice::draft(7)).expect("serializable");
        assert_eq!(body, serde_json::json!({ "draftInvoice": { "draftInvoiceNumber": 7 } }));
    }
}
