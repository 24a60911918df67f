use std::collections::BTreeSet;
use std::fmt::Debug;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::types::{EtlError, Phase, Step};
use crate::config::{ConfigError, Configuration, Parameters};

/// Defines an extract-transform-load job.
///
/// Each phase declares the configuration parameters it needs through its
/// `*Params` type (see [`parameters!`](crate::parameters)); the
/// [`Workflow`] binds them from its configuration right before the phase
/// runs. Phases also get the configuration itself and may write keys into
/// it for later phases or for the caller.
///
/// # Lifecycle
///
/// 1. `extract()` - Pull data from the source
/// 2. `validate_extract()` - Optional check of the extracted data
/// 3. `transform()` - Convert the extracted data
/// 4. `validate_transform()` - Optional check of the transformed data
/// 5. `load()` - Persist the result; its output is the run's output
#[async_trait]
pub trait Etl: Send {
    type ExtractParams: Parameters + Send;
    type TransformParams: Parameters + Send;
    type LoadParams: Parameters + Send;

    type Extracted: Send;
    type Transformed: Send;
    type Output: Send + Debug;

    async fn extract(
        &mut self,
        params: Self::ExtractParams,
        configuration: &mut Configuration,
    ) -> Result<Self::Extracted, EtlError>;

    /// Extra checks on the extracted data. Does nothing by default.
    async fn validate_extract(
        &mut self,
        _extracted: &Self::Extracted,
        _configuration: &Configuration,
    ) -> Result<(), EtlError> {
        Ok(())
    }

    async fn transform(
        &mut self,
        params: Self::TransformParams,
        extracted: Self::Extracted,
        configuration: &mut Configuration,
    ) -> Result<Self::Transformed, EtlError>;

    /// Extra checks on the transformed data. Does nothing by default.
    async fn validate_transform(
        &mut self,
        _transformed: &Self::Transformed,
        _configuration: &Configuration,
    ) -> Result<(), EtlError> {
        Ok(())
    }

    async fn load(
        &mut self,
        params: Self::LoadParams,
        transformed: Self::Transformed,
        configuration: &mut Configuration,
    ) -> Result<Self::Output, EtlError>;
}

/// Runs an [`Etl`] job against a configuration.
pub struct Workflow<E> {
    etl: E,
    configuration: Configuration,
    phase: Phase,
    poisoned: bool,
}

impl<E> Workflow<E>
where
    E: Etl,
{
    /// Creates a workflow, checking up front that every phase's required
    /// parameters are present.
    ///
    /// Missing names from all phases are reported together.
    pub fn new(etl: E, configuration: Configuration) -> Result<Self, EtlError> {
        let mut missing = BTreeSet::new();
        let declared = [
            <E::ExtractParams as Parameters>::declare(),
            <E::TransformParams as Parameters>::declare(),
            <E::LoadParams as Parameters>::declare(),
        ];
        for parameters in declared {
            if let Err(ConfigError::MissingParameters(names)) = configuration.bind(&parameters) {
                missing.extend(names);
            }
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingParameters(missing).into());
        }

        Ok(Workflow {
            etl,
            configuration,
            phase: Phase::Created,
            poisoned: false,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn etl(&self) -> &E {
        &self.etl
    }

    pub fn into_parts(self) -> (E, Configuration) {
        (self.etl, self.configuration)
    }

    /// Runs the five steps in order and returns what `load` returned.
    ///
    /// The first failing step aborts the run with [`EtlError::Workflow`];
    /// the workflow then stays at the phase it reached and refuses further
    /// runs. A finished workflow can be run again.
    pub async fn run(&mut self) -> Result<E::Output, EtlError> {
        if self.poisoned {
            return Err(EtlError::Poisoned(self.phase));
        }
        info!("[run|in]");
        self.phase = Phase::Created;

        match self.run_steps().await {
            Ok(output) => {
                info!(result = ?output, "[run|out]");
                Ok(output)
            }
            Err((step, source)) => {
                self.poisoned = true;
                warn!(%step, phase = %self.phase, error = %source, "[run|failed]");
                Err(EtlError::Workflow {
                    phase: self.phase,
                    step,
                    source: Box::new(source),
                })
            }
        }
    }

    async fn run_steps(&mut self) -> Result<E::Output, (Step, EtlError)> {
        let configuration = &mut self.configuration;
        let etl = &mut self.etl;

        debug!(step = %Step::Extract, "running step");
        let params = configuration
            .inject::<E::ExtractParams>()
            .map_err(|e| (Step::Extract, EtlError::from(e)))?;
        self.phase = Phase::Extracting;
        let extracted = etl
            .extract(params, configuration)
            .await
            .map_err(|e| (Step::Extract, e))?;
        etl.validate_extract(&extracted, configuration)
            .await
            .map_err(|e| (Step::ValidateExtract, e))?;
        self.phase = Phase::ExtractValidated;

        debug!(step = %Step::Transform, "running step");
        let params = configuration
            .inject::<E::TransformParams>()
            .map_err(|e| (Step::Transform, EtlError::from(e)))?;
        self.phase = Phase::Transforming;
        let transformed = etl
            .transform(params, extracted, configuration)
            .await
            .map_err(|e| (Step::Transform, e))?;
        etl.validate_transform(&transformed, configuration)
            .await
            .map_err(|e| (Step::ValidateTransform, e))?;
        self.phase = Phase::TransformValidated;

        debug!(step = %Step::Load, "running step");
        let params = configuration
            .inject::<E::LoadParams>()
            .map_err(|e| (Step::Load, EtlError::from(e)))?;
        self.phase = Phase::Loading;
        let output = etl
            .load(params, transformed, configuration)
            .await
            .map_err(|e| (Step::Load, e))?;
        self.phase = Phase::Done;

        Ok(output)
    }
}
