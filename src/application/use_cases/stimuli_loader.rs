// ============================================================
// STIMULI LOADER USE CASE
// ============================================================
// One load cycle: fetch, parse, sample, write, advance

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, error, info};

use super::output_writer::OutputEntries;
use super::stratified_sampler::StratifiedSampler;
use crate::domain::error::{LoaderError, Result};
use crate::domain::load_state::LoadState;
use crate::domain::loader_config::LoaderConfig;
use crate::domain::stimuli::{
    normalize_rows, ColumnMap, DimensionCounts, Partitions, SampledHeadline,
};
use crate::infrastructure::csv::CsvParser;
use crate::infrastructure::csv_sources::{cache_busted_url, CsvSource};
use crate::interfaces::survey::{
    EmbeddedDataStore, QuestionContainer, SurveyHost, SurveyNavigator,
};

/// Outcome of a load cycle
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    /// `Advancing` on success, `Failed` otherwise
    pub state: LoadState,
    /// Every state the cycle passed through, starting at `Idle`
    pub history: Vec<LoadState>,
    pub url_used: String,
    /// Presentation order; empty on failure
    pub selection: Vec<SampledHeadline>,
    /// Rows available per dimension, once the sheet was parsed
    pub counts: Option<DimensionCounts>,
    pub error: Option<LoaderError>,
}

impl LoadReport {
    pub fn is_success(&self) -> bool {
        self.state == LoadState::Advancing
    }
}

struct Prepared {
    selection: Vec<SampledHeadline>,
    counts: DimensionCounts,
}

/// Runs a single load cycle. Consumed by `run`, so no state carries over
/// between cycles.
pub struct StimuliLoader {
    config: LoaderConfig,
    source: Arc<dyn CsvSource>,
    state: LoadState,
    history: Vec<LoadState>,
    counts: Option<DimensionCounts>,
}

impl StimuliLoader {
    pub fn new(config: LoaderConfig, source: Arc<dyn CsvSource>) -> Self {
        Self {
            config,
            source,
            state: LoadState::Idle,
            history: vec![LoadState::Idle],
            counts: None,
        }
    }

    pub async fn run<D, Q, N, R>(
        mut self,
        host: &mut SurveyHost<D, Q, N>,
        rng: &mut R,
    ) -> LoadReport
    where
        D: EmbeddedDataStore,
        Q: QuestionContainer,
        N: SurveyNavigator,
        R: Rng + ?Sized,
    {
        host.question.hide();

        let url_used = cache_busted_url(
            &self.config.source_url,
            &self.config.cache_bust_param,
            Utc::now().timestamp_millis(),
        );

        let prepared = match self.prepare(&url_used, rng).await {
            Ok(prepared) => prepared,
            Err(err) => return self.fail(err, url_used, host),
        };

        if let Err(err) = self.transition(LoadState::Writing) {
            return self.fail(err, url_used, host);
        }
        let entries = OutputEntries::build(
            &prepared.selection,
            self.config.slot_count(),
            &self.config.url_audit_key,
            &url_used,
        );
        entries.write_to(&mut host.data);
        info!(
            entries = entries.len(),
            slots = self.config.slot_count(),
            "Embedded data written"
        );

        if let Err(err) = self.transition(LoadState::Advancing) {
            return self.fail(err, url_used, host);
        }
        if self.config.advance_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.advance_delay_ms)).await;
        }
        host.navigator.advance();

        LoadReport {
            state: self.state,
            history: self.history,
            url_used,
            selection: prepared.selection,
            counts: Some(prepared.counts),
            error: None,
        }
    }

    async fn prepare<R: Rng + ?Sized>(&mut self, url: &str, rng: &mut R) -> Result<Prepared> {
        self.transition(LoadState::Fetching)?;
        info!(url = %url, "Fetching stimuli CSV");
        let body = self.source.fetch(url).await?;

        self.transition(LoadState::Parsing)?;
        let table = CsvParser::new().parse_content(&body);
        debug!(rows = table.len(), bytes = body.len(), "CSV parsed");
        if table.len() < 2 {
            return Err(LoaderError::EmptyData);
        }

        let columns = ColumnMap::resolve(&table[0])?;
        let rows = normalize_rows(&table, &columns);
        let partitions = Partitions::from_rows(&rows);
        let counts = partitions.counts();
        self.counts = Some(counts);
        info!(
            data_rows = table.len() - 1,
            kept = rows.len(),
            neutral = counts.neutral,
            credibility = counts.credibility,
            engagement = counts.engagement,
            "Headline rows normalized"
        );

        self.transition(LoadState::Sampling)?;
        let selection =
            StratifiedSampler::new(self.config.per_dimension).sample(&partitions, rng)?;

        Ok(Prepared { selection, counts })
    }

    fn transition(&mut self, next: LoadState) -> Result<()> {
        if !self.state.can_transition_to(next) {
            return Err(LoaderError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        debug!(from = %self.state, to = %next, "Load state changed");
        self.state = next;
        self.history.push(next);
        Ok(())
    }

    fn fail<D, Q, N>(
        mut self,
        err: LoaderError,
        url_used: String,
        host: &mut SurveyHost<D, Q, N>,
    ) -> LoadReport
    where
        D: EmbeddedDataStore,
        Q: QuestionContainer,
        N: SurveyNavigator,
    {
        error!(error = %err, state = %self.state, "Loader error");

        // Failure is terminal from any phase, including after a rejected
        // transition out of Writing.
        if self.state != LoadState::Failed {
            self.state = LoadState::Failed;
            self.history.push(LoadState::Failed);
        }

        host.question.show();
        host.question.render_error(&err.to_string());

        LoadReport {
            state: self.state,
            history: self.history,
            url_used,
            selection: Vec::new(),
            counts: self.counts,
            error: Some(err),
        }
    }
}
