//! Static table of the paged collections both API families expose.
//!
//! Used by `economic-cli` to list a collection by name without knowing its URL.

use crate::open::{
    EmployeeGroups, Employees, ProductGroups, ProjectGroups, Projects, Subscriptions,
    SupplierGroups, VersionedPath,
};
use crate::{ApiFamily, Page};

/// One listable collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectionDefinition {
    /// Friendly, unique name (for example `customers`, `project-groups`).
    pub name: &'static str,
    pub family: ApiFamily,
    /// Open product segment such as `api/`. Empty for REST.
    pub segment: &'static str,
    /// Open version used when no override is given. Empty for REST.
    pub default_version: &'static str,
    /// Collection path relative to the family root (REST) or versioned prefix (Open).
    pub path: &'static str,
}

impl CollectionDefinition {
    const fn rest(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            family: ApiFamily::Rest,
            segment: "",
            default_version: "",
            path,
        }
    }

    const fn open(
        name: &'static str,
        segment: &'static str,
        default_version: &'static str,
        path: &'static str,
    ) -> Self {
        Self {
            name,
            family: ApiFamily::Open,
            segment,
            default_version,
            path,
        }
    }

    /// Renders the URL of one page of this collection.
    ///
    /// `version` replaces the default Open version and is ignored for REST.
    pub fn paged_path(&self, page: Page, version: Option<&str>) -> String {
        match self.family {
            ApiFamily::Rest => page.apply(&format!("/{}", self.path)),
            ApiFamily::Open => {
                let mut prefix = VersionedPath::new(self.segment, self.default_version);
                if let Some(version) = version {
                    prefix.set_version(version);
                }
                page.apply(&prefix.join(&format!("{}/paged", self.path)))
            }
        }
    }
}

pub static COLLECTIONS: &[CollectionDefinition] = &[
    CollectionDefinition::rest("accounts", "accounts"),
    CollectionDefinition::rest("currencies", "currencies"),
    CollectionDefinition::rest("customers", "customers"),
    CollectionDefinition::rest("customer-groups", "customer-groups"),
    CollectionDefinition::rest("departments", "departments"),
    CollectionDefinition::rest("invoices-drafts", "invoices/drafts"),
    CollectionDefinition::rest("invoices-booked", "invoices/booked"),
    CollectionDefinition::rest("invoices-paid", "invoices/paid"),
    CollectionDefinition::rest("invoices-unpaid", "invoices/unpaid"),
    CollectionDefinition::rest("invoices-overdue", "invoices/overdue"),
    CollectionDefinition::rest("invoices-not-due", "invoices/not-due"),
    CollectionDefinition::rest("invoices-sent", "invoices/sent"),
    CollectionDefinition::rest("journals", "journals"),
    CollectionDefinition::rest("layouts", "layouts"),
    CollectionDefinition::rest("orders-drafts", "orders/drafts"),
    CollectionDefinition::rest("orders-sent", "orders/sent"),
    CollectionDefinition::rest("orders-archived", "orders/archived"),
    CollectionDefinition::rest("payment-terms", "payment-terms"),
    CollectionDefinition::rest("products", "products"),
    CollectionDefinition::rest("quotes-drafts", "quotes/drafts"),
    CollectionDefinition::rest("quotes-sent", "quotes/sent"),
    CollectionDefinition::rest("quotes-archived", "quotes/archived"),
    CollectionDefinition::rest("rest-employees", "employees"),
    CollectionDefinition::rest("rest-product-groups", "product-groups"),
    CollectionDefinition::rest("suppliers", "suppliers"),
    CollectionDefinition::rest("units", "units"),
    CollectionDefinition::rest("vat-accounts", "vat-accounts"),
    CollectionDefinition::rest("vat-types", "vat-types"),
    CollectionDefinition::rest("vat-zones", "vat-zones"),
    CollectionDefinition::open(
        "employees",
        Employees::SEGMENT,
        Employees::DEFAULT_VERSION,
        "employees",
    ),
    CollectionDefinition::open(
        "employee-groups",
        EmployeeGroups::SEGMENT,
        EmployeeGroups::DEFAULT_VERSION,
        "employeegroups",
    ),
    CollectionDefinition::open(
        "product-groups",
        ProductGroups::SEGMENT,
        ProductGroups::DEFAULT_VERSION,
        "productgroups",
    ),
    CollectionDefinition::open(
        "project-groups",
        ProjectGroups::SEGMENT,
        ProjectGroups::DEFAULT_VERSION,
        "projectgroups",
    ),
    CollectionDefinition::open(
        "projects",
        Projects::SEGMENT,
        Projects::DEFAULT_VERSION,
        "projects",
    ),
    CollectionDefinition::open(
        "subscriptions",
        Subscriptions::SEGMENT,
        Subscriptions::DEFAULT_VERSION,
        "subscriptions",
    ),
    CollectionDefinition::open(
        "supplier-groups",
        SupplierGroups::SEGMENT,
        SupplierGroups::DEFAULT_VERSION,
        "Groups",
    ),
];

/// Looks up a collection by its friendly name (case-insensitive).
pub fn find(name: &str) -> Option<&'static CollectionDefinition> {
    COLLECTIONS
        .iter()
        .find(|collection| collection.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{COLLECTIONS, find};
    use crate::{ApiFamily, Page};

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = COLLECTIONS.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), COLLECTIONS.len());
    }

    #[test]
    fn rest_paths_start_at_root() {
        let customers = find("customers").expect("known collection");
        assert_eq!(customers.family, ApiFamily::Rest);
        assert_eq!(
            customers.paged_path(Page::default(), Some("ignored")),
            "/customers?skippages=0&pagesize=100"
        );
    }

    #[test]
    fn open_paths_are_versioned_and_paged() {
        let groups = find("Project-Groups").expect("lookup ignores case");
        assert_eq!(
            groups.paged_path(Page::new(2, 50), None),
            "api/v22.0.0/projectgroups/paged?skippages=2&pagesize=50"
        );
        assert_eq!(
            groups.paged_path(Page::default(), Some("v23.0.0")),
            "api/v23.0.0/projectgroups/paged?skippages=0&pagesize=100"
        );
        assert_eq!(
            find("supplier-groups")
                .expect("known collection")
                .paged_path(Page::default(), None),
            "suppliersapi/v1.0.1/Groups/paged?skippages=0&pagesize=100"
        );
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(find("ledgers").is_none());
    }
}
