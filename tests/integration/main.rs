mod common;

mod assistants_test;
mod health_test;
mod reference_data_test;
