mod comments_tests;
mod lists_tests;
mod properties_tests;
