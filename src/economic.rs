use crate::{ApiClient, ClientError, Credential, open, rest};

/// Every resource of both API families, built from one credential.
///
/// Field names follow the resource; where both families expose the same
/// resource the Open one gets the plain name (`employees`, `product_groups`)
/// and the REST one is prefixed with `rest_`.
#[derive(Clone, Debug)]
pub struct Economic {
    pub accounts: rest::Accounts,
    pub currencies: rest::Currencies,
    pub customers: rest::Customers,
    pub customer_groups: rest::CustomerGroups,
    pub delivery_locations: rest::DeliveryLocations,
    pub departments: rest::Departments,
    pub employees: open::Employees,
    pub employee_groups: open::EmployeeGroups,
    pub invoices: rest::Invoices,
    pub journals: rest::Journals,
    pub layouts: rest::Layouts,
    pub orders: rest::Orders,
    pub payment_terms: rest::PaymentTerms,
    pub product_groups: open::ProductGroups,
    pub products: rest::Products,
    pub project_groups: open::ProjectGroups,
    pub projects: open::Projects,
    pub quotes: rest::Quotes,
    pub rest_employees: rest::Employees,
    pub rest_product_groups: rest::ProductGroups,
    pub self_info: rest::SelfInfo,
    pub subscriptions: open::Subscriptions,
    pub supplier_groups: open::SupplierGroups,
    pub suppliers: rest::Suppliers,
    pub units: rest::Units,
    pub vat_accounts: rest::VatAccounts,
    pub vat_types: rest::VatTypes,
    pub vat_zones: rest::VatZones,
}

impl Economic {
    /// Builds one REST and one Open client sharing a connection pool, then
    /// every resource on top of them.
    pub fn new(credential: &Credential) -> Result<Self, ClientError> {
        let http = reqwest::Client::new();
        let rest_api = ApiClient::rest(credential)?.with_http_client(http.clone());
        let open_api = ApiClient::open(credential)?.with_http_client(http);
        Ok(Self::from_clients(rest_api, open_api))
    }

    /// Builds every resource from prepared clients, e.g. ones pointed at a
    /// proxy with [`ApiClient::with_base_url`].
    pub fn from_clients(rest_api: ApiClient, open_api: ApiClient) -> Self {
        Self {
            accounts: rest::Accounts::from_client(rest_api.clone()),
            currencies: rest::Currencies::from_client(rest_api.clone()),
            customers: rest::Customers::from_client(rest_api.clone()),
            customer_groups: rest::CustomerGroups::from_client(rest_api.clone()),
            delivery_locations: rest::DeliveryLocations::from_client(rest_api.clone()),
            departments: rest::Departments::from_client(rest_api.clone()),
            employees: open::Employees::from_client(open_api.clone()),
            employee_groups: open::EmployeeGroups::from_client(open_api.clone()),
            invoices: rest::Invoices::from_client(rest_api.clone()),
            journals: rest::Journals::from_client(rest_api.clone()),
            layouts: rest::Layouts::from_client(rest_api.clone()),
            orders: rest::Orders::from_client(rest_api.clone()),
            payment_terms: rest::PaymentTerms::from_client(rest_api.clone()),
            product_groups: open::ProductGroups::from_client(open_api.clone()),
            products: rest::Products::from_client(rest_api.clone()),
            project_groups: open::ProjectGroups::from_client(open_api.clone()),
            projects: open::Projects::from_client(open_api.clone()),
            quotes: rest::Quotes::from_client(rest_api.clone()),
            rest_employees: rest::Employees::from_client(rest_api.clone()),
            rest_product_groups: rest::ProductGroups::from_client(rest_api.clone()),
            self_info: rest::SelfInfo::from_client(rest_api.clone()),
            subscriptions: open::Subscriptions::from_client(open_api.clone()),
            supplier_groups: open::SupplierGroups::from_client(open_api),
            suppliers: rest::Suppliers::from_client(rest_api.clone()),
            units: rest::Units::from_client(rest_api.clone()),
            vat_accounts: rest::VatAccounts::from_client(rest_api.clone()),
            vat_types: rest::VatTypes::from_client(rest_api.clone()),
            vat_zones: rest::VatZones::from_client(rest_api),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Economic;
    use crate::{ApiFamily, Credential};

    #[test]
    fn resources_are_bound_to_their_family() {
        let economic = Economic::new(&Credential::new("a", "b")).expect("valid credential");

        assert_eq!(economic.customers.client().family(), ApiFamily::Rest);
        assert_eq!(economic.rest_employees.client().family(), ApiFamily::Rest);
        assert_eq!(economic.employees.client().family(), ApiFamily::Open);
        assert_eq!(economic.projects.client().family(), ApiFamily::Open);
        assert_eq!(
            economic.invoices.client().base_url().as_str(),
            "https://restapi.e-conomic.com/"
        );
        assert_eq!(
            economic.subscriptions.client().base_url().as_str(),
            "https://apis.e-conomic.com/"
        );
    }

    #[test]
    fn open_resources_start_on_default_versions() {
        let economic = Economic::new(&Credential::default()).expect("valid credential");

        assert_eq!(economic.employees.version(), "v22.0.0");
        assert_eq!(economic.product_groups.version(), "v1.1.0");
        assert_eq!(economic.subscriptions.version(), "v5.0.1");
        assert_eq!(economic.supplier_groups.version(), "v1.0.1");
    }
}
