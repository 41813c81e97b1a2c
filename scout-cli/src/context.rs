use crate::args::OutputFormat;
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use scout::config::{ConfigLoader, ScoutConfig};
use scout::prelude::*;
use scout::services::{HttpEvaluator, TurbopufferNamespace, VoyageEmbedder};
use std::path::Path;
use std::time::Duration;

/// Configuration plus the collaborators built from it
///
/// Service clients are created on demand so that commands which never touch
/// a service do not need its credential.
pub struct ScoutCliContext {
    pub config: ScoutConfig,
    pub output: OutputFormat,
}

impl ScoutCliContext {
    pub fn new(config: ScoutConfig, output: OutputFormat) -> Self {
        Self { config, output }
    }

    /// Load configuration from `config_file`, or from the default locations
    pub fn load(config_file: Option<&Path>, output: OutputFormat) -> scout::Result<Self> {
        let config = match config_file {
            Some(path) => ConfigLoader::load_from(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self::new(config, output))
    }

    pub fn embedder(&self) -> scout::Result<VoyageEmbedder> {
        VoyageEmbedder::from_config(&self.config.embedding, &self.config.http)
    }

    pub fn index(&self) -> scout::Result<TurbopufferNamespace> {
        TurbopufferNamespace::from_config(&self.config.index, &self.config.http)
    }

    pub fn evaluator(&self) -> scout::Result<HttpEvaluator> {
        HttpEvaluator::from_config(&self.config.evaluation, &self.config.http)
    }

    pub fn catalog(&self) -> CriteriaCatalog {
        CriteriaCatalog::from(self.config.criteria.clone())
    }

    pub fn ranker(&self) -> Ranker {
        Ranker::default().with_top_n(self.config.ranking.top_n)
    }

    pub fn top_k(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.config.ranking.default_top_k)
    }

    /// Spinner on stderr for a network call; only for text output on a TTY
    pub fn spinner(&self, message: impl Into<String>) -> Option<ProgressBar> {
        if self.output.is_json() || !std::io::stderr().is_terminal() {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}
