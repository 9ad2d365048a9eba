use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{
    AccountRef, AccountingYearRef, CurrencyRef, CustomerRef, DepartmentalDistributionRef,
    EmployeeRef, JournalRef, PaymentTypeRef, SupplierRef, VatAccountRef, VoucherRef,
};
use crate::{ApiClient, ClientError, Collection, FileUpload, HttpResponse, Page};

/// Kind of a journal entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryType {
    CustomerPayment,
    FinanceVoucher,
    ManualCustomerInvoice,
    SupplierInvoice,
    SupplierPayment,
    #[serde(other)]
    Other,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContraAccounts {
    pub customer_payments: Option<AccountRef>,
    pub finance_vouchers: Option<AccountRef>,
    pub supplier_payments: Option<AccountRef>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherNumbers {
    pub minimum_voucher_number: Option<u32>,
    pub maximum_voucher_number: Option<u32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalSettings {
    pub contra_accounts: Option<ContraAccounts>,
    pub entry_type_restricted_to: Option<EntryType>,
    pub voucher_numbers: Option<VoucherNumbers>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalTemplates {
    pub finance_voucher: Option<String>,
    pub manual_customer_invoice: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// Daybook holding vouchers until they are booked.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    pub journal_number: Option<u32>,
    pub name: Option<String>,
    pub entries: Option<String>,
    pub vouchers: Option<String>,
    pub settings: Option<JournalSettings>,
    pub templates: Option<JournalTemplates>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// One line of a voucher. Which fields apply depends on `entry_type`.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub entry_type: Option<EntryType>,
    pub date: Option<String>,
    pub due_date: Option<String>,
    pub text: Option<String>,
    pub amount: Option<f64>,
    pub amount_base_currency: Option<f64>,
    pub exchange_rate: Option<f64>,
    pub remainder: Option<f64>,
    pub remainder_in_default_currency: Option<f64>,
    pub currency: Option<CurrencyRef>,
    pub account: Option<AccountRef>,
    pub contra_account: Option<AccountRef>,
    pub contra_vat_account: Option<VatAccountRef>,
    pub contra_vat_amount: Option<f64>,
    pub contra_vat_amount_in_base_currency: Option<f64>,
    pub customer: Option<CustomerRef>,
    pub customer_invoice: Option<u32>,
    pub supplier: Option<SupplierRef>,
    pub supplier_invoice_number: Option<String>,
    pub departmental_distribution: Option<DepartmentalDistributionRef>,
    pub employee: Option<EmployeeRef>,
    pub journal: Option<JournalRef>,
    pub voucher: Option<VoucherRef>,
}

/// Voucher entries grouped by kind.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entries {
    pub customer_payments: Option<Vec<Entry>>,
    pub finance_vouchers: Option<Vec<Entry>>,
    pub manual_customer_invoices: Option<Vec<Entry>>,
    pub supplier_invoices: Option<Vec<Entry>>,
    pub supplier_payments: Option<Vec<Entry>>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub voucher_number: Option<u32>,
    pub accounting_year: Option<AccountingYearRef>,
    pub journal: Option<JournalRef>,
    pub entries: Option<Entries>,
    pub attachment: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub created_at: Option<String>,
    pub description: Option<String>,
    pub file: Option<String>,
    pub pages: Option<u32>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub payment_type: Option<PaymentTypeRef>,
}

/// Entry as listed under `/journals/{n}/entries`.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub journal_entry_number: Option<u32>,
    pub entry_type: Option<EntryType>,
    pub date: Option<String>,
    pub text: Option<String>,
    pub amount: Option<f64>,
    pub amount_default_currency: Option<f64>,
    pub exchange_rate: Option<f64>,
    pub contra_vat_amount: Option<f64>,
    pub account: Option<AccountRef>,
    pub contra_account: Option<AccountRef>,
    pub contra_vat_account: Option<VatAccountRef>,
    pub currency: Option<CurrencyRef>,
    pub customer: Option<CustomerRef>,
    pub employee: Option<EmployeeRef>,
    pub supplier: Option<SupplierRef>,
    pub journal: Option<JournalRef>,
    pub voucher: Option<VoucherRef>,
    pub payment_details: Option<PaymentDetails>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceVoucherTemplate {
    pub account: Option<String>,
    pub contra_account: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualCustomerInvoiceTemplate {
    pub customer: Option<CustomerRef>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Journals {
    api: ApiClient,
}

rest_resource!(Journals);

fn voucher_path(journal_number: u32, voucher_number: u32) -> String {
    format!("/journals/{journal_number}/vouchers/{voucher_number}")
}

impl Journals {
    pub async fn get(&self, page: Page) -> Result<HttpResponse<Collection<Journal>>, ClientError> {
        self.api.get(page.apply("/journals")).await
    }

    pub async fn get_for(&self, journal_number: u32) -> Result<HttpResponse<Journal>, ClientError> {
        self.api.get(format!("/journals/{journal_number}")).await
    }

    pub async fn get_vouchers(
        &self,
        journal_number: u32,
        page: Page,
    ) -> Result<HttpResponse<Collection<Voucher>>, ClientError> {
        let path = format!("/journals/{journal_number}/vouchers");
        self.api.get(page.apply(&path)).await
    }

    pub async fn create_voucher(
        &self,
        journal_number: u32,
        voucher: &Voucher,
    ) -> Result<HttpResponse<Voucher>, ClientError> {
        self.api
            .post(format!("/journals/{journal_number}/vouchers"), voucher)
            .await
    }

    pub async fn get_voucher(
        &self,
        journal_number: u32,
        voucher_number: u32,
    ) -> Result<HttpResponse<Voucher>, ClientError> {
        self.api
            .get(voucher_path(journal_number, voucher_number))
            .await
    }

    /// Attachment metadata, including its page count.
    pub async fn get_attachment(
        &self,
        journal_number: u32,
        voucher_number: u32,
    ) -> Result<HttpResponse<Attachment>, ClientError> {
        self.api
            .get(format!(
                "{}/attachment",
                voucher_path(journal_number, voucher_number)
            ))
            .await
    }

    /// Raw bytes of the attached document.
    pub async fn get_attachment_file(
        &self,
        journal_number: u32,
        voucher_number: u32,
    ) -> Result<HttpResponse<Vec<u8>>, ClientError> {
        self.api
            .download(format!(
                "{}/attachment/file",
                voucher_path(journal_number, voucher_number)
            ))
            .await
    }

    /// Attaches a document to a voucher that has none.
    pub async fn attach_file(
        &self,
        journal_number: u32,
        voucher_number: u32,
        file: FileUpload,
    ) -> Result<HttpResponse<Option<Attachment>>, ClientError> {
        self.api
            .upload(
                Method::POST,
                format!("{}/attachment/file", voucher_path(journal_number, voucher_number)),
                file,
            )
            .await
    }

    /// Appends pages to the document already attached to a voucher.
    pub async fn append_file(
        &self,
        journal_number: u32,
        voucher_number: u32,
        file: FileUpload,
    ) -> Result<HttpResponse<Option<Attachment>>, ClientError> {
        self.api
            .upload(
                Method::PATCH,
                format!("{}/attachment/file", voucher_path(journal_number, voucher_number)),
                file,
            )
            .await
    }

    pub async fn get_entries(
        &self,
        journal_number: u32,
        page: Page,
    ) -> Result<HttpResponse<Collection<JournalEntry>>, ClientError> {
        let path = format!("/journals/{journal_number}/entries");
        self.api.get(page.apply(&path)).await
    }

    pub async fn get_entry(
        &self,
        journal_number: u32,
        entry_number: u32,
    ) -> Result<HttpResponse<JournalEntry>, ClientError> {
        self.api
            .get(format!("/journals/{journal_number}/entries/{entry_number}"))
            .await
    }

    pub async fn get_templates(
        &self,
        journal_number: u32,
    ) -> Result<HttpResponse<JournalTemplates>, ClientError> {
        self.api
            .get(format!("/journals/{journal_number}/templates"))
            .await
    }

    pub async fn get_finance_voucher_template(
        &self,
        journal_number: u32,
    ) -> Result<HttpResponse<FinanceVoucherTemplate>, ClientError> {
        self.api
            .get(format!("/journals/{journal_number}/templates/financeVoucher"))
            .await
    }

    pub async fn get_manual_customer_invoice_templates(
        &self,
        journal_number: u32,
        page: Page,
    ) -> Result<HttpResponse<Collection<ManualCustomerInvoiceTemplate>>, ClientError> {
        let path = format!("/journals/{journal_number}/templates/manualCustomerInvoice");
        self.api.get(page.apply(&path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryType, Voucher};

    #[test]
    fn unknown_entry_types_are_tolerated() {
        let parsed: EntryType = serde_json::from_str(r#""systemEntry""#).expect("fallback variant");
        assert_eq!(parsed, EntryType::Other);
        let known: EntryType = serde_json::from_str(r#""financeVoucher""#).expect("known variant");
        assert_eq!(known, EntryType::FinanceVoucher);
    }

    #[test]
    fn voucher_groups_entries_by_kind() {
        let voucher: Voucher = serde_json::from_str(
            r#"{
                "voucherNumber": 12,
                "accountingYear": {"year": "2024"},
                "entries": {
                    "financeVouchers": [{
                        "entryType": "financeVoucher",
                        "amount": 125.5,
                        "account": {"accountNumber": 1010}
                    }]
                }
            }"#,
        )
        .expect("valid voucher");

        let entries = voucher.entries.and_then(|e| e.finance_vouchers).unwrap_or_default();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].amount, Some(125.5));
        assert_eq!(
            voucher.accounting_year.and_then(|y| y.year).as_deref(),
            Some("2024")
        );
    }
}
