use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{
    CustomerContactRef, CustomerGroupRef, CustomerRef, Delivery, DeliveryLocationRef, EmployeeRef,
    LayoutRef, PaymentTermsRef, ProductRef, Recipient, References, VatZoneRef,
};
use super::delivery_locations::DeliveryLocation;
use super::invoices::DraftInvoice;
use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_number: Option<u32>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub mobile_phone: Option<String>,
    pub telephone_and_fax_number: Option<String>,
    pub website: Option<String>,
    pub currency: Option<String>,
    pub balance: Option<f64>,
    pub due_amount: Option<f64>,
    pub credit_limit: Option<f64>,
    pub barred: Option<bool>,
    pub corporate_identification_number: Option<String>,
    pub vat_number: Option<String>,
    pub ean: Option<String>,
    pub p_number: Option<String>,
    pub public_entry_number: Option<String>,
    pub e_invoicing_disabled_by_default: Option<bool>,
    pub last_updated: Option<String>,
    pub attention: Option<CustomerContactRef>,
    pub customer_contact: Option<CustomerContactRef>,
    pub customer_group: Option<CustomerGroupRef>,
    pub default_delivery_location: Option<DeliveryLocationRef>,
    pub layout: Option<LayoutRef>,
    pub payment_terms: Option<PaymentTermsRef>,
    pub sales_person: Option<EmployeeRef>,
    pub vat_zone: Option<VatZoneRef>,
    pub contacts: Option<String>,
    pub delivery_locations: Option<String>,
    pub invoices: Option<CustomerLinks>,
    pub templates: Option<Templates>,
    pub totals: Option<CustomerLinks>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// `booked`/`drafts` links hanging off a customer.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerLinks {
    pub booked: Option<String>,
    pub drafts: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

pub type CustomerTotals = CustomerLinks;

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerContact {
    pub customer_contact_number: Option<u32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub e_invoice_id: Option<String>,
    pub email_notifications: Option<Vec<String>>,
    pub deleted: Option<bool>,
    pub sort_key: Option<u32>,
    pub customer: Option<CustomerRef>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Templates {
    pub invoice: Option<String>,
    pub invoice_line: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// Pre-filled draft invoice for a customer, ready to post to `/invoices/drafts`.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInvoiceTemplate {
    pub customer: Option<CustomerRef>,
    pub currency: Option<String>,
    pub date: Option<String>,
    pub due_date: Option<String>,
    pub exchange_rate: Option<f64>,
    pub delivery: Option<Delivery>,
    pub delivery_location: Option<DeliveryLocationRef>,
    pub payment_terms: Option<PaymentTermsRef>,
    pub recipient: Option<Recipient>,
    pub references: Option<References>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInvoiceLineTemplate {
    pub description: Option<String>,
    pub product: Option<ProductRef>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Customers {
    api: ApiClient,
}

rest_resource!(Customers);

impl Customers {
    pub async fn get(&self, page: Page) -> Result<HttpResponse<Collection<Customer>>, ClientError> {
        self.api.get(page.apply("/customers")).await
    }

    pub async fn get_for(
        &self,
        customer_number: u32,
    ) -> Result<HttpResponse<Customer>, ClientError> {
        self.api.get(format!("/customers/{customer_number}")).await
    }

    pub async fn create(&self, customer: &Customer) -> Result<HttpResponse<Customer>, ClientError> {
        self.api.post("/customers", customer).await
    }

    pub async fn update(
        &self,
        customer_number: u32,
        customer: &Customer,
    ) -> Result<HttpResponse<Customer>, ClientError> {
        self.api
            .put(format!("/customers/{customer_number}"), customer)
            .await
    }

    pub async fn delete(
        &self,
        customer_number: u32,
    ) -> Result<HttpResponse<IgnoredAny>, ClientError> {
        self.api
            .delete(format!("/customers/{customer_number}"))
            .await
    }

    pub async fn get_totals(
        &self,
        customer_number: u32,
    ) -> Result<HttpResponse<CustomerTotals>, ClientError> {
        self.api
            .get(format!("/customers/{customer_number}/totals"))
            .await
    }

    pub async fn get_contacts(
        &self,
        customer_number: u32,
        page: Page,
    ) -> Result<HttpResponse<Collection<CustomerContact>>, ClientError> {
        let path = format!("/customers/{customer_number}/contacts");
        self.api.get(page.apply(&path)).await
    }

    pub async fn get_contact(
        &self,
        customer_number: u32,
        contact_number: u32,
    ) -> Result<HttpResponse<CustomerContact>, ClientError> {
        self.api
            .get(format!("/customers/{customer_number}/contacts/{contact_number}"))
            .await
    }

    pub async fn create_contact(
        &self,
        customer_number: u32,
        contact: &CustomerContact,
    ) -> Result<HttpResponse<CustomerContact>, ClientError> {
        self.api
            .post(format!("/customers/{customer_number}/contacts"), contact)
            .await
    }

    pub async fn get_delivery_locations(
        &self,
        customer_number: u32,
        page: Page,
    ) -> Result<HttpResponse<Collection<DeliveryLocation>>, ClientError> {
        let path = format!("/customers/{customer_number}/delivery-locations");
        self.api.get(page.apply(&path)).await
    }

    pub async fn get_delivery_location(
        &self,
        customer_number: u32,
        delivery_location_number: u32,
    ) -> Result<HttpResponse<DeliveryLocation>, ClientError> {
        self.api
            .get(format!(
                "/customers/{customer_number}/delivery-locations/{delivery_location_number}"
            ))
            .await
    }

    pub async fn create_delivery_location(
        &self,
        customer_number: u32,
        location: &DeliveryLocation,
    ) -> Result<HttpResponse<DeliveryLocation>, ClientError> {
        self.api
            .post(
                format!("/customers/{customer_number}/delivery-locations"),
                location,
            )
            .await
    }

    pub async fn get_invoice_drafts(
        &self,
        customer_number: u32,
        page: Page,
    ) -> Result<HttpResponse<Collection<DraftInvoice>>, ClientError> {
        let path = format!("/customers/{customer_number}/invoices/drafts");
        self.api.get(page.apply(&path)).await
    }

    pub async fn get_templates(
        &self,
        customer_number: u32,
    ) -> Result<HttpResponse<Templates>, ClientError> {
        self.api
            .get(format!("/customers/{customer_number}/templates"))
            .await
    }

    pub async fn get_invoice_template(
        &self,
        customer_number: u32,
    ) -> Result<HttpResponse<CustomerInvoiceTemplate>, ClientError> {
        self.api
            .get(format!("/customers/{customer_number}/templates/invoice"))
            .await
    }

    pub async fn get_invoice_line_templates(
        &self,
        customer_number: u32,
        page: Page,
    ) -> Result<HttpResponse<Collection<CustomerInvoiceLineTemplate>>, ClientError> {
        let path = format!("/customers/{customer_number}/templates/invoiceline");
        self.api.get(page.apply(&path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::Customer;

    #[test]
    fn decodes_nested_references() {
        let customer: Customer = serde_json::from_str(
            r#"{
                "customerNumber": 1,
                "name": "Acme",
                "currency": "DKK",
                "customerGroup": {
                    "customerGroupNumber": 1,
                    "self": "https://restapi.e-conomic.com/customer-groups/1"
                },
                "vatZone": {"vatZoneNumber": 1},
                "paymentTerms": {"paymentTermsNumber": 2, "daysOfCredit": 14},
                "self": "https://restapi.e-conomic.com/customers/1"
            }"#,
        )
        .expect("valid customer");

        assert_eq!(customer.customer_number, Some(1));
        assert_eq!(
            customer.customer_group.and_then(|g| g.customer_group_number),
            Some(1)
        );
        assert_eq!(
            customer.payment_terms.and_then(|t| t.days_of_credit),
            Some(14)
        );
        assert_eq!(
            customer.self_url.as_deref(),
            Some("https://restapi.e-conomic.com/customers/1")
        );
    }
}
