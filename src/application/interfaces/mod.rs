/// Account service interface
pub mod account;
/// Financial service interface
pub mod financial;
/// Fiscal service interface
pub mod fiscal;
/// Sales service interface
pub mod sales;
