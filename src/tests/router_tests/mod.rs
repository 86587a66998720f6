mod admin_tests;
mod search_tests;
