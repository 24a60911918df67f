//! Simple ETL example demonstrating configuration injection.
//!
//! This example extracts numbers from a configured range, squares them,
//! and loads them by printing to stdout. The load step reports the total
//! back through the configuration.
//!
//! Run with: cargo run --example simple_etl

use async_trait::async_trait;
use dataops_rust::config::Configuration;
use dataops_rust::etl::{Etl, EtlError, Workflow};
use dataops_rust::parameters;
use serde_json::json;
use std::error::Error;

parameters! {
    struct ExtractParams {
        max_number: i64,
    }
}

parameters! {
    struct LoadParams {
        label: String = "squares",
    }
}

/// Simple job that extracts numbers, squares them, and prints results
struct NumberSquaringEtl;

#[async_trait]
impl Etl for NumberSquaringEtl {
    type ExtractParams = ExtractParams;
    type TransformParams = ();
    type LoadParams = LoadParams;
    type Extracted = Vec<i64>;
    type Transformed = Vec<i64>;
    type Output = usize;

    async fn extract(
        &mut self,
        params: ExtractParams,
        _configuration: &mut Configuration,
    ) -> Result<Vec<i64>, EtlError> {
        Ok((1..=params.max_number).collect())
    }

    async fn validate_extract(
        &mut self,
        extracted: &Vec<i64>,
        _configuration: &Configuration,
    ) -> Result<(), EtlError> {
        if extracted.is_empty() {
            return Err(EtlError::Validation("nothing extracted".to_string()));
        }
        Ok(())
    }

    async fn transform(
        &mut self,
        _params: (),
        extracted: Vec<i64>,
        _configuration: &mut Configuration,
    ) -> Result<Vec<i64>, EtlError> {
        Ok(extracted.into_iter().map(|n| n * n).collect())
    }

    async fn load(
        &mut self,
        params: LoadParams,
        transformed: Vec<i64>,
        configuration: &mut Configuration,
    ) -> Result<usize, EtlError> {
        println!("Loaded {} {}:", transformed.len(), params.label);
        for item in &transformed {
            println!("  {}", item);
        }
        configuration.insert("total", transformed.iter().sum::<i64>());
        Ok(transformed.len())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing for logs
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let configuration = Configuration::try_from(json!({"max_number": 10}))?;
    let mut workflow = Workflow::new(NumberSquaringEtl, configuration)?;

    let loaded = workflow.run().await?;
    println!(
        "\nLoaded {} items, total = {}",
        loaded,
        workflow.configuration().get("total").cloned().unwrap_or_default()
    );

    // A configuration without the required parameter is rejected up front
    if let Err(e) = Workflow::new(NumberSquaringEtl, Configuration::new()) {
        println!("Rejected empty configuration: {}", e);
    }

    Ok(())
}
