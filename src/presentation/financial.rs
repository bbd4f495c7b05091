/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::serialization::local_date;
use chrono::NaiveDate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// One line of the producer financial statement
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatement {
    /// Statement line identifier
    pub statement_id: i64,
    /// Booking date, sent as `dd/MM/yyyy`
    #[serde(with = "local_date")]
    pub statement_date: NaiveDate,
    /// Free text description
    pub statement_description: String,
    /// Related document, when any
    #[serde(default)]
    pub statement_document: Option<String>,
    /// Signed amount of the line
    pub statement_value: f64,
}
