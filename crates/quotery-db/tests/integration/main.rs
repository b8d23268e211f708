mod common;
mod database_tests;
mod quote_repository_tests;
