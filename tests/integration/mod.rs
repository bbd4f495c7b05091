mod auth_tests;
mod sales_tests;
