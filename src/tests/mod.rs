mod support;
mod prompt_tests;
mod response_tests;
