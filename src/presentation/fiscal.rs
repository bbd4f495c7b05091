use crate::presentation::serialization::{string_as_float_opt, timestamp};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A tax document (invoice issued to the client or commission statement)
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxDocument {
    /// Document identifier
    #[serde(default)]
    pub document_id: Option<i64>,
    /// Document name
    #[serde(default)]
    pub document_name: Option<String>,
    /// Processing status
    #[serde(default)]
    pub document_status: Option<String>,
    /// Document type, e.g. `Alunos / Clientes`
    #[serde(default)]
    pub document_type: Option<String>,
    /// Base value
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub document_basevalue: Option<f64>,
    /// Emission instant
    #[serde(default, with = "timestamp::option")]
    pub document_emissiondate: Option<DateTime<Utc>>,
    /// Reference instant
    #[serde(default, with = "timestamp::option")]
    pub document_referencedate: Option<DateTime<Utc>>,
    /// Processing instant
    #[serde(default, with = "timestamp::option")]
    pub document_processingdate: Option<DateTime<Utc>>,
    /// Tax base
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub document_taxbase: Option<f64>,
    /// Tax value
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub document_taxvalue: Option<f64>,
    /// Issuer company name
    #[serde(default)]
    pub source_company_name: Option<String>,
    /// Issuer document
    #[serde(default)]
    pub source_document: Option<String>,
    /// Destination company name
    #[serde(default)]
    pub destination_company_name: Option<String>,
    /// Destination tax identifier
    #[serde(default)]
    pub destination_taxid: Option<String>,
    /// Destination email
    #[serde(default)]
    pub destination_email: Option<String>,
    /// Destination city
    #[serde(default)]
    pub destination_city: Option<String>,
    /// Destination state
    #[serde(default)]
    pub destination_uf: Option<String>,
    /// Related sale
    #[serde(default)]
    pub sale_id: Option<i64>,
    /// Payment instant of the related sale
    #[serde(default, with = "timestamp::option")]
    pub date_payment: Option<DateTime<Utc>>,
    /// Client identifier
    #[serde(default)]
    pub client_id: Option<i64>,
    /// Client name
    #[serde(default)]
    pub client_name: Option<String>,
    /// Client email
    #[serde(default)]
    pub client_email: Option<String>,
    /// Product identifier
    #[serde(default)]
    pub content_id: Option<i64>,
    /// Product title
    #[serde(default)]
    pub content_title: Option<String>,
    /// Total of the related sale
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub sale_total: Option<f64>,
    /// Document lines
    #[serde(default)]
    pub document_items: Option<Vec<TaxDocumentItem>>,
}

/// A line of a tax document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxDocumentItem {
    /// Line identifier
    #[serde(default)]
    pub docitem_id: Option<i64>,
    /// Product identifier
    #[serde(default)]
    pub docitem_content_id: Option<i64>,
    /// Description
    #[serde(default)]
    pub docitem_description: Option<String>,
    /// Service code
    #[serde(default)]
    pub docitem_taxprodservcode: Option<String>,
    /// Line value
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub docitem_value: Option<f64>,
    /// Quantity
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub docitem_qtde: Option<f64>,
    /// Related sale
    #[serde(default)]
    pub docitem_sale_id: Option<i64>,
}
