use std::fmt;

use thiserror::Error;

use crate::chain::PipelineError;
use crate::config::ConfigError;
use crate::validation::ValidationError;

/// Where a [`Workflow`](super::Workflow) currently stands.
///
/// A run moves strictly forward through these states; a failure leaves the
/// workflow at the state it had reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Created,
    Extracting,
    ExtractValidated,
    Transforming,
    TransformValidated,
    Loading,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Created => "created",
            Phase::Extracting => "extracting",
            Phase::ExtractValidated => "extract validated",
            Phase::Transforming => "transforming",
            Phase::TransformValidated => "transform validated",
            Phase::Loading => "loading",
            Phase::Done => "done",
        };
        f.write_str(name)
    }
}

/// The five steps of a run, in the order they execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Extract,
    ValidateExtract,
    Transform,
    ValidateTransform,
    Load,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Extract,
        Step::ValidateExtract,
        Step::Transform,
        Step::ValidateTransform,
        Step::Load,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Extract => "extract",
            Step::ValidateExtract => "validate_extract",
            Step::Transform => "transform",
            Step::ValidateTransform => "validate_transform",
            Step::Load => "load",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while running an ETL workflow.
#[derive(Debug, Error)]
pub enum EtlError {
    /// A step's parameters could not be bound from the configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A post-phase check rejected the data.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A step failed for any other reason.
    #[error("{0}")]
    Step(String),

    /// A step ran a handler chain that failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// A step called a data validator that failed.
    #[error(transparent)]
    Validator(#[from] ValidationError),

    /// An error escaped a step and aborted the run.
    #[error("workflow failed at step '{step}' (phase: {phase})")]
    Workflow {
        phase: Phase,
        step: Step,
        #[source]
        source: Box<EtlError>,
    },

    /// The workflow failed earlier and cannot be run again.
    #[error("workflow cannot run: an earlier run failed (phase: {0})")]
    Poisoned(Phase),
}

impl EtlError {
    /// The step at which a run was aborted, if this error came from one.
    pub fn failed_step(&self) -> Option<Step> {
        match self {
            EtlError::Workflow { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// The error raised by the step itself, looking through the workflow wrapper.
    pub fn root(&self) -> &EtlError {
        match self {
            EtlError::Workflow { source, .. } => source.root(),
            other => other,
        }
    }
}
