mod cli_context_tests;
mod config_tests;
mod error_tests;
