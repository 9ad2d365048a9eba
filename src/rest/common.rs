//! Shapes shared by several REST resources: entity references and the
//! document layout common to invoices, orders and quotes.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Declares a `{ <key>, self }` reference to another REST entity.
macro_rules! reference {
    ($(#[$meta:meta])* $name:ident { $key:ident: $ty:ty }) => {
        $(#[$meta])*
        #[skip_serializing_none]
        #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            pub $key: Option<$ty>,
            #[serde(rename = "self")]
            pub self_url: Option<String>,
        }

        impl $name {
            pub fn new($key: impl Into<$ty>) -> Self {
                Self {
                    $key: Some($key.into()),
                    self_url: None,
                }
            }
        }
    };
}

reference!(AccountRef { account_number: u32 });
reference!(AccountingYearRef { year: String });
reference!(CurrencyRef { code: String });
reference!(CustomerRef { customer_number: u32 });
reference!(CustomerContactRef { customer_contact_number: u32 });
reference!(CustomerGroupRef { customer_group_number: u32 });
reference!(DeliveryLocationRef { delivery_location_number: u32 });
reference!(DepartmentRef { department_number: u32 });
reference!(EmployeeRef { employee_number: u32 });
reference!(JournalRef { journal_number: u32 });
reference!(LayoutRef { layout_number: u32 });
reference!(PaymentTypeRef { payment_type_number: u32 });
reference!(ProductRef { product_number: String });
reference!(ProductGroupRef { product_group_number: u32 });
reference!(ProjectRef { project_number: u32 });
reference!(SupplierRef { supplier_number: u32 });
reference!(SupplierContactRef { supplier_contact_number: u32 });
reference!(SupplierGroupRef { supplier_group_number: u32 });
reference!(VatAccountRef { vat_code: String });
reference!(VatTypeRef { vat_type_number: u32 });
reference!(VatZoneRef { vat_zone_number: u32 });
reference!(VoucherRef { voucher_number: u32 });

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentalDistributionRef {
    pub departmental_distribution_number: Option<u32>,
    pub distribution_type: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRef {
    pub unit_number: Option<u32>,
    pub name: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// Payment terms as embedded in customers, suppliers and documents.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTermsRef {
    pub payment_terms_number: Option<u32>,
    pub days_of_credit: Option<u32>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub payment_terms_type: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// Navigation links returned from the root of `/invoices`, `/orders` and `/quotes`.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub archived: Option<String>,
    pub booked: Option<String>,
    pub drafts: Option<String>,
    pub not_due: Option<String>,
    pub overdue: Option<String>,
    pub paid: Option<String>,
    pub sent: Option<String>,
    pub totals: Option<String>,
    pub unpaid: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub address: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub delivery_terms: Option<String>,
    pub delivery_date: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notes {
    pub heading: Option<String>,
    pub text_line1: Option<String>,
    pub text_line2: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pdf {
    pub download: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub name: Option<String>,
    pub address: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub ean: Option<String>,
    pub cvr: Option<String>,
    pub public_entry_number: Option<String>,
    /// One of `ean`, `corporateIdentificationNumber`, `pNumber` or `peppol`.
    pub nem_handel_type: Option<String>,
    pub attention: Option<CustomerContactRef>,
    pub vat_zone: Option<VatZoneRef>,
    pub mobile_phone: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct References {
    pub customer_contact: Option<CustomerContactRef>,
    pub sales_person: Option<EmployeeRef>,
    pub vendor_reference: Option<EmployeeRef>,
    pub other: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAccrual {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// One product line of an invoice, order or quote.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub line_number: Option<u32>,
    pub sort_key: Option<u32>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub unit_net_price: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub unit_cost_price: Option<f64>,
    pub vat_rate: Option<f64>,
    pub vat_amount: Option<f64>,
    pub total_net_amount: Option<f64>,
    pub margin_in_base_currency: Option<f64>,
    pub margin_percentage: Option<f64>,
    pub product: Option<ProductRef>,
    pub unit: Option<UnitRef>,
    pub accrual: Option<LineAccrual>,
    pub departmental_distribution: Option<DepartmentalDistributionRef>,
}

/// Fields shared by every sales document (invoice, order, quote).
///
/// Flattened into the concrete document types.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub currency: Option<String>,
    pub customer: Option<CustomerRef>,
    pub date: Option<String>,
    pub due_date: Option<String>,
    pub delivery: Option<Delivery>,
    pub delivery_location: Option<DeliveryLocationRef>,
    pub exchange_rate: Option<f64>,
    pub gross_amount: Option<f64>,
    pub gross_amount_in_base_currency: Option<f64>,
    pub net_amount: Option<f64>,
    pub net_amount_in_base_currency: Option<f64>,
    pub vat_amount: Option<f64>,
    pub rounding_amount: Option<f64>,
    pub cost_price_in_base_currency: Option<f64>,
    pub margin_in_base_currency: Option<f64>,
    pub margin_percentage: Option<f64>,
    pub notes: Option<Notes>,
    pub payment_terms: Option<PaymentTermsRef>,
    pub layout: Option<LayoutRef>,
    pub pdf: Option<Pdf>,
    pub project: Option<ProjectRef>,
    pub recipient: Option<Recipient>,
    pub references: Option<References>,
    pub last_updated: Option<String>,
    pub lines: Option<Vec<Line>>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{CustomerRef, Document, Notes};

    #[test]
    fn reference_constructor_omits_self() {
        let json = serde_json::to_value(CustomerRef::new(42_u32)).expect("serializable");
        assert_eq!(json, serde_json::json!({ "customerNumber": 42 }));
    }

    #[test]
    fn document_uses_camel_case_keys() {
        let document = Document {
            due_date: Some("2024-02-01".into()),
            notes: Some(Notes {
                text_line1: Some("Thanks".into()),
                ..Notes::default()
            }),
            ..Document::default()
        };
        let json = serde_json::to_value(&document).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({ "dueDate": "2024-02-01", "notes": { "textLine1": "Thanks" } })
        );
    }
}
