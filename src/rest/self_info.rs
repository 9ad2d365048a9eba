use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{ApiClient, ClientError, HttpResponse};

/// The agreement the credential is bound to, as returned by `/self`.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agreement {
    pub agreement_number: Option<u32>,
    pub agreement_type: Option<AgreementType>,
    pub application: Option<Application>,
    pub bank_information: Option<BankInformation>,
    pub can_send_electronic_invoice: Option<bool>,
    pub can_send_mobile_pay: Option<bool>,
    pub company: Option<Company>,
    pub company_affiliation: Option<String>,
    pub modules: Option<Vec<Module>>,
    pub settings: Option<Settings>,
    pub signup_date: Option<String>,
    pub user: Option<User>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementType {
    pub agreement_type_number: Option<u32>,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub app_number: Option<u32>,
    pub app_public_token: Option<String>,
    pub created: Option<String>,
    pub name: Option<String>,
    pub required_roles: Option<Vec<Role>>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub name: Option<String>,
    pub role_number: Option<u32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankInformation {
    pub bank_account_number: Option<String>,
    pub bank_giro_number: Option<String>,
    pub bank_name: Option<String>,
    pub bank_sort_code: Option<String>,
    pub pbs_customer_group_number: Option<String>,
    pub pbs_fi_supplier_number: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub attention: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub company_identification_number: Option<String>,
    pub vat_number: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub module_number: Option<u32>,
    pub name: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub base_currency: Option<String>,
    pub default_payment_term: Option<String>,
    pub international_ledger: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub agreement_number: Option<u32>,
    pub email: Option<String>,
    pub language: Option<Language>,
    pub login_id: Option<String>,
    pub name: Option<String>,
    pub user_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub culture: Option<String>,
    pub language_number: Option<u32>,
    pub name: Option<String>,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

/// `/self`: the agreement, its user, company and bank details.
#[derive(Clone, Debug)]
pub struct SelfInfo {
    api: ApiClient,
}

rest_resource!(SelfInfo);

impl SelfInfo {
    pub async fn get(&self) -> Result<HttpResponse<Agreement>, ClientError> {
        self.api.get("/self").await
    }

    pub async fn update_user(&self, user: &User) -> Result<HttpResponse<User>, ClientError> {
        self.api.put("/self/user", user).await
    }

    pub async fn update_company(
        &self,
        company: &Company,
    ) -> Result<HttpResponse<Company>, ClientError> {
        self.api.put("/self/company", company).await
    }

    pub async fn update_bank_information(
        &self,
        bank_information: &BankInformation,
    ) -> Result<HttpResponse<BankInformation>, ClientError> {
        self.api
            .put("/self/company/bankinformation", bank_information)
            .await
    }
}
