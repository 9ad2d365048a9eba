use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AccountRef, VatAccountRef};
use crate::{ApiClient, ClientError, Collection, HttpResponse, Page};

/// Ledger account from the chart of accounts.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_number: Option<u32>,
    /// `profitAndLoss`, `status`, `totalFrom`, `heading`, `headingStart`,
    /// `sumInterval` or `sumAlpha`.
    pub account_type: Option<String>,
    pub accounting_years: Option<String>,
    pub accounts_summed: Option<Vec<AccountsSummed>>,
    pub balance: Option<f64>,
    pub barred: Option<bool>,
    pub block_direct_entries: Option<bool>,
    pub contra_account: Option<AccountRef>,
    /// `debit` or `credit`.
    pub debit_credit: Option<String>,
    pub draft_balance: Option<f64>,
    pub name: Option<String>,
    pub total_from_account: Option<AccountRef>,
    pub vat_account: Option<VatAccountRef>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// Account interval summed by a `sumInterval` account.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsSummed {
    pub from_account: Option<AccountRef>,
    pub to_account: Option<AccountRef>,
}

#[derive(Clone, Debug)]
pub struct Accounts {
    api: ApiClient,
}

rest_resource!(Accounts);

impl Accounts {
    pub async fn get(&self, page: Page) -> Result<HttpResponse<Collection<Account>>, ClientError> {
        self.api.get(page.apply("/accounts")).await
    }

    pub async fn get_for(&self, account_number: u32) -> Result<HttpResponse<Account>, ClientError> {
        self.api.get(format!("/accounts/{account_number}")).await
    }
}
