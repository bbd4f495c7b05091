/// Financial statement entries
pub mod financial;
/// Tax documents
pub mod fiscal;
/// Sales, invoices and daily amounts
pub mod sale;
/// Date codecs and lenient numeric deserializers
pub mod serialization;
/// Account owner information
pub mod user;

pub use financial::*;
pub use fiscal::*;
pub use sale::*;
pub use user::*;
