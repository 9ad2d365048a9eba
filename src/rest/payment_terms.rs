use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AccountRef, CustomerRef};
use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

/// Full payment terms record.
///
/// The embedded form used by customers and documents is
/// [`PaymentTermsRef`](super::common::PaymentTermsRef).
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTerm {
    pub payment_terms_number: Option<u32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub days_of_credit: Option<u32>,
    /// `net`, `invoiceMonth`, `paidInCash`, `prepaid`, `dueDate`, `factoring`,
    /// `invoiceWeekStartingSunday`, `invoiceWeekStartingMonday` or `creditcard`.
    pub payment_terms_type: Option<String>,
    pub contra_account_for_prepaid_amount: Option<AccountRef>,
    pub contra_account_for_remainder_amount: Option<AccountRef>,
    pub percentage_for_prepaid_amount: Option<f64>,
    pub percentage_for_remainder_amount: Option<f64>,
    pub credit_card_company: Option<CustomerRef>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// Body accepted by [`PaymentTerms::create`].
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentTerms {
    pub name: String,
    pub payment_terms_type: String,
    pub days_of_credit: Option<u32>,
    pub description: Option<String>,
    pub contra_account_for_prepaid_amount: Option<AccountRef>,
    pub contra_account_for_remainder_amount: Option<AccountRef>,
    pub percentage_for_prepaid_amount: Option<f64>,
    pub percentage_for_remainder_amount: Option<f64>,
    pub credit_card_company: Option<CustomerRef>,
}

impl NewPaymentTerms {
    pub fn new(name: impl Into<String>, payment_terms_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payment_terms_type: payment_terms_type.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug)]
pub struct PaymentTerms {
    api: ApiClient,
}

rest_resource!(PaymentTerms);

impl PaymentTerms {
    pub async fn get(
        &self,
        page: Page,
    ) -> Result<HttpResponse<Collection<PaymentTerm>>, ClientError> {
        self.api.get(page.apply("/payment-terms")).await
    }

    pub async fn get_for(
        &self,
        payment_terms_number: u32,
    ) -> Result<HttpResponse<PaymentTerm>, ClientError> {
        self.api
            .get(format!("/payment-terms/{payment_terms_number}"))
            .await
    }

    pub async fn create(
        &self,
        payment_terms: &NewPaymentTerms,
    ) -> Result<HttpResponse<PaymentTerm>, ClientError> {
        self.api.post("/payment-terms", payment_terms).await
    }
}
