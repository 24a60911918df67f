use tracing::info;

use super::rules::{Rule, RuleResult, RuleSet, ValidationReport};
use super::types::ValidationError;

/// Evaluates rules against data it was built for.
pub trait ExecutionEngine {
    fn evaluate(&self, rule: &Rule) -> Result<RuleResult, ValidationError>;
}

/// Validates data with an external engine.
///
/// Adapters only provide [`execution_engine`](Self::execution_engine);
/// [`validate`](Self::validate) runs every rule through it in order and
/// collects the failures into a [`ValidationReport`].
pub trait DataValidator {
    type Data: ?Sized;
    type Engine: ExecutionEngine;

    /// Builds the engine that evaluates rules against `data`.
    fn execution_engine(&self, data: &Self::Data) -> Result<Self::Engine, ValidationError>;

    /// Any engine error is reported as [`ValidationError::Failed`] with the
    /// engine's error as its source.
    fn validate(
        &self,
        data: &Self::Data,
        rules: &RuleSet,
    ) -> Result<ValidationReport, ValidationError> {
        info!(rule_set = %rules.name, rules = rules.rules.len(), "[validate|in]");

        let engine = self.execution_engine(data).map_err(wrap)?;
        let mut failures = Vec::new();
        for rule in &rules.rules {
            let result = engine.evaluate(rule).map_err(wrap)?;
            if !result.success {
                failures.push(result);
            }
        }

        let report = ValidationReport {
            rule_set: rules.name.clone(),
            success: failures.is_empty(),
            evaluated: rules.rules.len(),
            results: failures,
        };
        info!(success = report.success, "[validate|out]");
        Ok(report)
    }
}

fn wrap(error: ValidationError) -> ValidationError {
    ValidationError::Failed {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}
