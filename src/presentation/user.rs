use crate::presentation::serialization::timestamp;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Account owner returned by `/user/get_me`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// User identifier
    pub user_id: i64,
    /// Company name
    #[serde(default)]
    pub company_name: Option<String>,
    /// Trade name
    #[serde(default)]
    pub fantasy: Option<String>,
    /// Tax identifier (CPF/CNPJ)
    #[serde(default)]
    pub taxid: Option<String>,
    /// Account creation instant
    #[serde(default, with = "timestamp::option")]
    pub date_user_create: Option<DateTime<Utc>>,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Primary phone
    #[serde(default)]
    pub telephone: Option<String>,
    /// Mobile phone
    #[serde(default)]
    pub cellphone: Option<String>,
    /// Street
    #[serde(default)]
    pub address_street: Option<String>,
    /// Street number
    #[serde(default)]
    pub address_number: Option<String>,
    /// Complement
    #[serde(default)]
    pub address_complement: Option<String>,
    /// Postal code
    #[serde(default)]
    pub address_zip: Option<String>,
    /// District
    #[serde(default)]
    pub address_district: Option<String>,
    /// Whether the account is a producer (0/1)
    #[serde(default)]
    pub is_producer: Option<i32>,
    /// Days until credit anticipation
    #[serde(default)]
    pub anticipation_in_days: Option<i32>,
    /// Whether the account belongs to the elite program (0/1)
    #[serde(default)]
    pub is_elite: Option<i32>,
}
