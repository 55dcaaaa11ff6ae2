//! `GrcEngine`: the entry point the presentation layer calls.
//!
//! Reads every collection it needs through [`WaqfService`] and hands the
//! in-memory slices to the pure scoring, aggregation, and backlog functions.
//! All calls are synchronous and assume a single actor per institution.

use std::path::Path;

use chrono::{Datelike, NaiveDate, Utc};
use waqf_config::WaqfConfig;
use waqf_core::context::CycleContext;
use waqf_core::entities::{ComplianceRecord, EvaluationRef, EvaluationResponse, ImprovementItem};
use waqf_core::enums::{EntityType, TransitionDirection};
use waqf_core::errors::CoreError;
use waqf_store::WaqfService;

use crate::aggregate::{
    AxisAverage, ComplianceSummary, RiskTierCounts, axis_averages, compliance_summary,
    overall_average, risk_tier_counts,
};
use crate::backlog::{
    BacklogBoard, Evidence, TransitionOutcome, apply_transition, generate_candidates,
};
use crate::error::GrcError;
use crate::portfolio::{Portfolio, PortfolioDashboard};
use crate::report::ReportBundle;
use crate::scoring::{ComplianceRiskScore, calculate_risk_score};

pub struct GrcEngine {
    store: WaqfService,
    config: WaqfConfig,
}

impl GrcEngine {
    /// # Errors
    ///
    /// Returns `GrcError::Config` if the configuration is out of range.
    pub fn new(store: WaqfService, config: WaqfConfig) -> Result<Self, GrcError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// Memory-only engine with default configuration.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            store: WaqfService::in_memory(),
            config: WaqfConfig::default(),
        }
    }

    /// Open the store described by `config.store`.
    ///
    /// # Errors
    ///
    /// Returns `GrcError` if the configuration is invalid or the store's
    /// trail cannot be replayed.
    pub fn open(config: WaqfConfig) -> Result<Self, GrcError> {
        let store = WaqfService::open_from_config(&config.store)?;
        Self::new(store, config)
    }

    /// Open a trail-backed store in `data_dir`, overriding the configured one.
    ///
    /// # Errors
    ///
    /// Same as [`open`](Self::open).
    pub fn open_local(data_dir: &Path, config: WaqfConfig) -> Result<Self, GrcError> {
        Self::new(WaqfService::open_local(data_dir)?, config)
    }

    #[must_use]
    pub const fn store(&self) -> &WaqfService {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut WaqfService {
        &mut self.store
    }

    #[must_use]
    pub const fn config(&self) -> &WaqfConfig {
        &self.config
    }

    /// Context for `institution_id` in the configured (or current) cycle.
    #[must_use]
    pub fn context_for(&self, institution_id: &str) -> CycleContext {
        let year = self
            .config
            .general
            .cycle_year
            .unwrap_or_else(|| Utc::now().year());
        CycleContext::new(institution_id, year)
    }

    // -----------------------------------------------------------------------
    // Evidence
    // -----------------------------------------------------------------------

    /// The formal evaluation of the cycle, or the institution's provisional
    /// grouping when none exists yet.
    ///
    /// # Errors
    ///
    /// Returns `GrcError::Store` if the evaluations cannot be read.
    pub fn resolve_evaluation(&self, ctx: &CycleContext) -> Result<EvaluationRef, GrcError> {
        Ok(
            match self
                .store
                .find_evaluation(&ctx.institution_id, ctx.cycle_year)?
            {
                Some(evaluation) => EvaluationRef::formal(evaluation.id),
                None => EvaluationRef::provisional(&ctx.institution_id),
            },
        )
    }

    fn cycle_responses(
        &self,
        evaluation: &EvaluationRef,
    ) -> Result<Vec<EvaluationResponse>, GrcError> {
        Ok(match evaluation.formal_id() {
            Some(id) => self.store.get_responses(id)?,
            None => Vec::new(),
        })
    }

    /// Per-axis mean scores for the cycle's evaluation.
    ///
    /// # Errors
    ///
    /// Returns `GrcError::Store` if responses or indicators cannot be read.
    pub fn axis_averages(&self, ctx: &CycleContext) -> Result<Vec<AxisAverage>, GrcError> {
        let evaluation = self.resolve_evaluation(ctx)?;
        let responses = self.cycle_responses(&evaluation)?;
        let indicators = self.store.get_indicators()?;
        Ok(axis_averages(
            &responses,
            &indicators,
            self.config.scoring.axis_precision,
        ))
    }

    /// # Errors
    ///
    /// Returns `GrcError::Store` if the compliance records cannot be read.
    pub fn compliance_summary(&self, ctx: &CycleContext) -> Result<ComplianceSummary, GrcError> {
        let record = self
            .store
            .get_compliance(&ctx.institution_id, ctx.cycle_year)?;
        Ok(compliance_summary(record.as_ref()))
    }

    /// Risk score of the cycle's compliance record; a missing record scores
    /// as if every flag were unmet.
    ///
    /// # Errors
    ///
    /// Returns `GrcError::Store` if the compliance records cannot be read.
    pub fn compliance_risk(&self, ctx: &CycleContext) -> Result<ComplianceRiskScore, GrcError> {
        let record = self
            .store
            .get_compliance(&ctx.institution_id, ctx.cycle_year)?
            .unwrap_or_else(|| ComplianceRecord::draft(&ctx.institution_id, ctx.cycle_year));
        Ok(calculate_risk_score(&record))
    }

    /// # Errors
    ///
    /// Returns `GrcError::Store` if the risk register cannot be read.
    pub fn risk_tiers(&self, ctx: &CycleContext) -> Result<RiskTierCounts, GrcError> {
        Ok(risk_tier_counts(&self.store.get_risks(&ctx.institution_id)?))
    }

    // -----------------------------------------------------------------------
    // Backlog
    // -----------------------------------------------------------------------

    /// [`synthesize_backlog_on`](Self::synthesize_backlog_on) with today's
    /// UTC date.
    ///
    /// # Errors
    ///
    /// Same as [`synthesize_backlog_on`](Self::synthesize_backlog_on).
    pub fn synthesize_backlog(
        &mut self,
        ctx: &CycleContext,
    ) -> Result<Vec<ImprovementItem>, GrcError> {
        self.synthesize_backlog_on(ctx, Utc::now().date_naive())
    }

    /// Return the cycle's backlog, generating it first if none is stored.
    ///
    /// Existing items are returned unchanged. An empty backlog is re-scanned
    /// on every call and stays empty while the evidence is clean.
    ///
    /// # Errors
    ///
    /// Returns `GrcError::Store` if evidence cannot be read or an item cannot
    /// be saved. Items saved before the failure remain stored.
    pub fn synthesize_backlog_on(
        &mut self,
        ctx: &CycleContext,
        today: NaiveDate,
    ) -> Result<Vec<ImprovementItem>, GrcError> {
        let evaluation = self.resolve_evaluation(ctx)?;
        let existing = self.store.get_improvements(&evaluation)?;
        if !existing.is_empty() {
            tracing::debug!(%evaluation, count = existing.len(), "backlog already generated");
            return Ok(existing);
        }

        let responses = self.cycle_responses(&evaluation)?;
        let indicators = self.store.get_indicators()?;
        let risks = self.store.get_risks(&ctx.institution_id)?;
        let compliance = self
            .store
            .get_compliance(&ctx.institution_id, ctx.cycle_year)?;

        let evidence = Evidence {
            responses: &responses,
            indicators: &indicators,
            risks: &risks,
            compliance: compliance.as_ref(),
        };
        let candidates = generate_candidates(
            &evaluation,
            &evidence,
            &self.config.scoring,
            &self.config.backlog,
            today,
            Utc::now(),
        );

        let mut items = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            items.push(self.store.save_improvement(candidate)?);
        }

        tracing::info!(
            %evaluation,
            provisional = evaluation.is_provisional(),
            institution_id = %ctx.institution_id,
            cycle_year = ctx.cycle_year,
            generated = items.len(),
            "backlog synthesized"
        );
        Ok(items)
    }

    /// The cycle's backlog grouped by status, synthesizing it on first access.
    ///
    /// # Errors
    ///
    /// Same as [`synthesize_backlog`](Self::synthesize_backlog).
    pub fn board(&mut self, ctx: &CycleContext) -> Result<BacklogBoard, GrcError> {
        Ok(BacklogBoard::from_items(self.synthesize_backlog(ctx)?))
    }

    /// Move an item one step. Disallowed moves return `Unchanged` and write
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no item has this ID, or `GrcError::Store`
    /// if the move cannot be persisted.
    pub fn transition(
        &mut self,
        item_id: &str,
        direction: TransitionDirection,
    ) -> Result<TransitionOutcome, GrcError> {
        let mut item = self.store.get_improvement(item_id)?;
        let Some(detail) = apply_transition(&mut item, direction, Utc::now()) else {
            tracing::warn!(item_id, status = %item.status, ?direction, "transition not allowed; ignored");
            return Ok(TransitionOutcome::Unchanged { item });
        };

        self.store.record_transition(&item, detail.clone())?;
        tracing::info!(item_id, from = %detail.from, to = %detail.to, "backlog item moved");
        Ok(TransitionOutcome::Moved {
            item,
            from: detail.from,
        })
    }

    /// Permanently delete a backlog item.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no item has this ID.
    pub fn delete_item(&mut self, item_id: &str) -> Result<(), GrcError> {
        if !self.store.delete_improvement(item_id)? {
            return Err(CoreError::not_found(EntityType::Improvement, item_id).into());
        }
        tracing::info!(item_id, "backlog item deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Projections
    // -----------------------------------------------------------------------

    /// Display bundle for one institution and cycle. Reads the stored backlog
    /// without generating one.
    ///
    /// # Errors
    ///
    /// Returns `GrcError::Store` if any collection cannot be read.
    pub fn report(&self, ctx: &CycleContext) -> Result<ReportBundle, GrcError> {
        let evaluation = self.resolve_evaluation(ctx)?;
        let responses = self.cycle_responses(&evaluation)?;
        let indicators = self.store.get_indicators()?;
        let backlog = BacklogBoard::from_items(self.store.get_improvements(&evaluation)?);
        let scoring = &self.config.scoring;

        Ok(ReportBundle {
            institution_id: ctx.institution_id.clone(),
            cycle_year: ctx.cycle_year,
            axes: axis_averages(&responses, &indicators, scoring.axis_precision),
            overall_average: overall_average(&responses, scoring.average_precision),
            backlog: backlog.counts(),
            risks: self.risk_tiers(ctx)?,
            compliance: self.compliance_summary(ctx)?,
            compliance_risk: self.compliance_risk(ctx)?,
            evaluation,
        })
    }

    /// System-wide dashboard, optionally narrowed to one institution.
    ///
    /// # Errors
    ///
    /// Returns `GrcError::Store` if any collection cannot be read.
    pub fn portfolio(&self, selected: Option<&str>) -> Result<PortfolioDashboard, GrcError> {
        let institutions = self.store.get_institutions()?;
        let evaluations = self.store.get_evaluations()?;
        let responses = self.store.get_all_responses()?;
        let risks = self.store.get_all_risks()?;

        let portfolio = Portfolio {
            institutions: &institutions,
            evaluations: &evaluations,
            responses: &responses,
            risks: &risks,
        };
        let limit = usize::try_from(self.config.general.top_institutions).unwrap_or(usize::MAX);
        Ok(PortfolioDashboard::build(&portfolio, selected, limit))
    }
}
