//! Integration tests for motionline

mod helpers;

mod cli_test;
mod ingest_test;
mod loader_test;
mod pipeline_test;
