use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{
    AccountRef, CustomerContactRef, EmployeeRef, LayoutRef, PaymentTermsRef, PaymentTypeRef,
    SupplierContactRef, SupplierGroupRef, VatZoneRef,
};
use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemittanceAdvice {
    pub creditor_id: Option<String>,
    pub payment_type: Option<PaymentTypeRef>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub supplier_number: Option<u32>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub currency: Option<String>,
    pub bank_account: Option<String>,
    pub barred: Option<bool>,
    pub corporate_identification_number: Option<String>,
    pub default_invoice_text: Option<String>,
    pub attention: Option<CustomerContactRef>,
    pub contacts: Option<String>,
    pub cost_account: Option<AccountRef>,
    pub layout: Option<LayoutRef>,
    pub payment_terms: Option<PaymentTermsRef>,
    pub remittance_advice: Option<RemittanceAdvice>,
    pub sales_person: Option<EmployeeRef>,
    pub supplier_contact: Option<SupplierContactRef>,
    pub supplier_group: Option<SupplierGroupRef>,
    pub vat_zone: Option<VatZoneRef>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Suppliers {
    api: ApiClient,
}

rest_resource!(Suppliers);

impl Suppliers {
    pub async fn get(&self, page: Page) -> Result<HttpResponse<Collection<Supplier>>, ClientError> {
        self.api.get(page.apply("/suppliers")).await
    }

    pub async fn get_for(
        &self,
        supplier_number: u32,
    ) -> Result<HttpResponse<Supplier>, ClientError> {
        self.api.get(format!("/suppliers/{supplier_number}")).await
    }

    pub async fn create(&self, supplier: &Supplier) -> Result<HttpResponse<Supplier>, ClientError> {
        self.api.post("/suppliers", supplier).await
    }

    pub async fn update(
        &self,
        supplier_number: u32,
        supplier: &Supplier,
    ) -> Result<HttpResponse<Supplier>, ClientError> {
        self.api
            .put(format!("/suppliers/{supplier_number}"), supplier)
            .await
    }

    pub async fn delete(
        &self,
        supplier_number: u32,
    ) -> Result<HttpResponse<IgnoredAny>, ClientError> {
        self.api
            .delete(format!("/suppliers/{supplier_number}"))
            .await
    }
}
