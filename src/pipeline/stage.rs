use crate::{Error, Result};
use tracing::{debug, warn};

// Pipeline stages, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Fetching,
    Extracting,
    Generating,
    Done,
    Failed,
}

/// Linear progress of one recipe request. `Failed` absorbs from any
/// non-terminal stage; nothing is retried.
#[derive(Debug)]
pub struct StageTracker {
    stage: PipelineStage,
}

impl StageTracker {
    pub fn new() -> Self {
        Self {
            stage: PipelineStage::Fetching,
        }
    }

    pub fn current(&self) -> PipelineStage {
        self.stage
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.stage, PipelineStage::Done | PipelineStage::Failed)
    }

    pub fn advance(&mut self) -> Result<PipelineStage> {
        let next = match self.stage {
            PipelineStage::Fetching => PipelineStage::Extracting,
            PipelineStage::Extracting => PipelineStage::Generating,
            PipelineStage::Generating => PipelineStage::Done,
            PipelineStage::Done | PipelineStage::Failed => {
                return Err(Error::internal(format!(
                    "Cannot advance from terminal stage {:?}",
                    self.stage
                )));
            }
        };

        debug!("Pipeline stage transition: {:?} -> {:?}", self.stage, next);
        self.stage = next;
        Ok(next)
    }

    /// Moves to `Failed`, returning the stage the error happened in.
    pub fn fail(&mut self, error: &Error) -> PipelineStage {
        let failed_in = self.stage;
        warn!(
            "Pipeline failed during {:?} ({}): {}",
            failed_in,
            error.kind(),
            error
        );
        self.stage = PipelineStage::Failed;
        failed_in
    }
}

impl Default for StageTracker {
    fn default() -> Self {
        Self::new()
    }
}
