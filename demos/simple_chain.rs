//! Simple chain example: read a dataset, clean it, and write it out.
//!
//! Run with: cargo run --example simple_chain

use async_trait::async_trait;
use dataops_rust::chain::{Chain, Context};
use dataops_rust::role::{
    Processor, ProcessorChain, ProcessorError, Sink, SinkChain, SinkError, Source, SourceChain,
    SourceError,
};
use serde_json::{json, Value};
use std::error::Error;

/// Source serving a fixed set of readings
struct ReadingsSource;

#[async_trait]
impl Source for ReadingsSource {
    type Data = Vec<Option<f64>>;
    type Entry = String;

    async fn get(&self, context: &Context) -> Result<Self::Data, SourceError> {
        match context.get("sensor").and_then(Value::as_str) {
            Some("thermometer") => Ok(vec![Some(21.5), None, Some(22.0), Some(23.5)]),
            Some(other) => Err(SourceError::NoSourceFound(other.to_string())),
            None => Err(SourceError::Configuration("no sensor selected".to_string())),
        }
    }

    async fn list(&self, _context: &Context) -> Result<Vec<String>, SourceError> {
        Ok(vec!["thermometer".to_string()])
    }
}

/// Drops missing readings and stores the average
struct Average;

#[async_trait]
impl Processor for Average {
    type Output = f64;

    async fn process(&self, context: &mut Context) -> Result<f64, ProcessorError> {
        let readings: Vec<f64> = context
            .get("readings")
            .and_then(Value::as_array)
            .ok_or_else(|| ProcessorError::Failed("no readings".to_string()))?
            .iter()
            .filter_map(Value::as_f64)
            .collect();
        let average = readings.iter().sum::<f64>() / readings.len().max(1) as f64;
        context.insert("average".to_string(), json!(average));
        Ok(average)
    }
}

/// Prints the average
struct StdoutSink;

#[async_trait]
impl Sink for StdoutSink {
    type Receipt = ();

    async fn put(&self, context: &Context) -> Result<(), SinkError> {
        let average = context
            .get("average")
            .ok_or_else(|| SinkError::Failed("nothing to write".to_string()))?;
        println!("average reading: {}", average);
        Ok(())
    }

    async fn delete(&self, _context: &Context) -> Result<(), SinkError> {
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let chain = Chain::new(SourceChain::new(ReadingsSource, "readings"))
        .then(ProcessorChain::new(Average))
        .then(SinkChain::new(StdoutSink));

    let mut context = Context::new();
    context.insert("sensor".to_string(), json!("thermometer"));
    chain.execute(&mut context).await?;

    // An unknown sensor stops the chain before anything is written
    let mut context = Context::new();
    context.insert("sensor".to_string(), json!("barometer"));
    if let Err(e) = chain.execute(&mut context).await {
        println!("chain aborted: {}", e);
    }

    Ok(())
}
