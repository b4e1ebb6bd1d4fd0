mod detail_tests;
mod pages_tests;
