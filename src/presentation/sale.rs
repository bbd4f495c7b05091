/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::serialization::{calendar_date, string_as_float_opt, timestamp};
use chrono::{DateTime, NaiveDate, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A sale (invoice) as returned by the sales endpoints
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Sale identifier, always positive in a valid payload
    pub sale_id: i64,
    /// Subscription contract, for recurring sales
    #[serde(default)]
    pub contract_id: Option<i64>,
    /// Creation instant
    #[serde(with = "timestamp")]
    pub date_create: DateTime<Utc>,
    /// Payment instant
    #[serde(default, with = "timestamp::option")]
    pub date_payment: Option<DateTime<Utc>>,
    /// Last update instant
    #[serde(default, with = "timestamp::option")]
    pub date_update: Option<DateTime<Utc>>,
    /// Instant the amount was credited to the producer
    #[serde(default, with = "timestamp::option")]
    pub date_credit: Option<DateTime<Utc>>,
    /// Numeric sale status
    pub sale_status: i32,
    /// Human readable sale status
    #[serde(default)]
    pub sale_status_name: Option<String>,
    /// Sale item identifier
    #[serde(default)]
    pub sale_item_id: Option<i64>,
    /// Discount applied to the item
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub sale_item_discount: Option<f64>,
    /// Coupon used, when any
    #[serde(default)]
    pub sale_item_discount_coupon_key: Option<String>,
    /// Gross amount won
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub sale_amount_win: Option<f64>,
    /// Net gain of the producer
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub sale_net_gain: Option<f64>,
    /// Co-producer share
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub sale_coop: Option<f64>,
    /// Partner share
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub sale_partner: Option<f64>,
    /// Platform fee
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub sale_fee: Option<f64>,
    /// Other deductions
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub sale_others: Option<f64>,
    /// Total charged to the client
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub sale_total: Option<f64>,
    /// Refund type, when refunded
    #[serde(default)]
    pub refund_type: Option<String>,
    /// Refund instant
    #[serde(default, with = "timestamp::option")]
    pub refund_date: Option<DateTime<Utc>>,
    /// Refunded amount
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub refund_value: Option<f64>,
    /// Payment method
    #[serde(default)]
    pub sale_payment_method: Option<String>,
    /// Client identifier
    #[serde(default)]
    pub client_id: Option<i64>,
    /// Client name
    #[serde(default)]
    pub client_name: Option<String>,
    /// Client email
    #[serde(default)]
    pub client_email: Option<String>,
    /// Client document (CPF/CNPJ)
    #[serde(default)]
    pub client_document: Option<String>,
    /// Client mobile phone
    #[serde(default)]
    pub client_cel: Option<String>,
    /// Producer identifier
    #[serde(default)]
    pub producer_id: Option<i64>,
    /// Producer name
    #[serde(default)]
    pub producer_name: Option<String>,
    /// Affiliate identifier
    #[serde(default)]
    pub affiliate_id: Option<i64>,
    /// Affiliate name
    #[serde(default)]
    pub affiliate_name: Option<String>,
    /// UTM source
    #[serde(default)]
    pub utm_source: Option<String>,
    /// UTM campaign
    #[serde(default)]
    pub utm_campaign: Option<String>,
    /// Product identifier
    #[serde(default)]
    pub content_id: Option<i64>,
    /// Product title
    #[serde(default)]
    pub content_title: Option<String>,
    /// Number of installments
    #[serde(default)]
    pub installments: Option<i32>,
    /// Transaction currency
    #[serde(default)]
    pub transaction_currency: Option<String>,
    /// Items of the invoice
    #[serde(default)]
    pub invoice_items: Option<Vec<InvoiceItem>>,
    /// Co-producer split details
    #[serde(default)]
    pub sale_coop_detail: Option<Vec<SaleCoopDetail>>,
    /// Affiliate split details
    #[serde(default)]
    pub sale_affiliate_detail: Option<Vec<SaleAffiliateDetail>>,
    /// Recipient of physical goods
    #[serde(default)]
    pub recipient: Option<Recipient>,
}

/// A line of an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Item identifier
    pub invoice_item_id: i64,
    /// Item description
    #[serde(default)]
    pub invoice_item_description: Option<String>,
    /// Unit value
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub invoice_item_unit_value: Option<f64>,
    /// Quantity
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub invoice_item_quantity: Option<f64>,
    /// Line value
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub invoice_item_value: Option<f64>,
    /// Product the line refers to
    #[serde(default)]
    pub invoice_item_content_id: Option<i64>,
    /// Shipping tracking code
    #[serde(default)]
    pub tracking_code: Option<String>,
}

/// Recipient of a shipped invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    /// Recipient identifier
    pub recipient_id: i64,
    /// Name
    #[serde(default)]
    pub recipient_name: Option<String>,
    /// Email
    #[serde(default)]
    pub recipient_email: Option<String>,
    /// Document
    #[serde(default)]
    pub recipient_document: Option<String>,
}

/// Co-producer share of a sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleCoopDetail {
    /// Co-producer identifier
    pub coproducer_id: i64,
    /// Email
    #[serde(default)]
    pub coproducer_email: Option<String>,
    /// Name
    #[serde(default)]
    pub coproducer_name: Option<String>,
    /// Net gain of the co-producer
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub sale_net_gain: Option<f64>,
    /// Whether the co-producer manages affiliates (0/1)
    #[serde(default)]
    pub is_affiliate_manager: Option<i32>,
}

/// Affiliate share of a sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleAffiliateDetail {
    /// Affiliate identifier
    #[serde(default)]
    pub affiliate_id: Option<i64>,
    /// Email
    #[serde(default)]
    pub affiliate_email: Option<String>,
    /// Name
    #[serde(default)]
    pub affiliate_name: Option<String>,
    /// Net gain of the affiliate
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub sale_net_gain: Option<f64>,
}

/// Aggregated sale amounts for one day
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastDaysAmount {
    /// Day the amounts refer to, sent as `yyyy-MM-dd`
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    /// Discounts granted
    pub sale_discount: f64,
    /// Gross amount won
    pub sale_amount_win: f64,
    /// Net gain
    pub sale_net_gain: f64,
    /// Co-producer shares
    pub sale_coop: f64,
    /// Platform fees
    pub sale_fee: f64,
    /// Other deductions
    pub sale_others: f64,
    /// Total charged
    pub sale_total: f64,
}
