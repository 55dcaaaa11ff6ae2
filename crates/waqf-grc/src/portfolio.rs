//! System-wide portfolio dashboard.
//!
//! Pure projections over every stored record, optionally narrowed to one
//! selected institution. Ranking and the system side of the benchmark always
//! use the full portfolio.

use std::collections::HashMap;

use serde::Serialize;
use waqf_core::entities::{Evaluation, EvaluationResponse, Institution, RiskRegisterItem};
use waqf_core::enums::InstitutionKind;

use crate::aggregate::{RiskTierCounts, mean, risk_tier_counts};
use crate::scoring::round_to;

/// Dashboard scores are shown to two decimals.
const DASHBOARD_PRECISION: u32 = 2;

pub const ONE_MILLION_OMR: f64 = 1_000_000.0;
pub const FIVE_MILLION_OMR: f64 = 5_000_000.0;

/// Every stored record the dashboard reads.
#[derive(Debug, Clone, Copy)]
pub struct Portfolio<'a> {
    pub institutions: &'a [Institution],
    pub evaluations: &'a [Evaluation],
    pub responses: &'a [EvaluationResponse],
    pub risks: &'a [RiskRegisterItem],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstitutionScore {
    pub institution_id: String,
    pub name: String,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Benchmark {
    pub system_average: f64,
    pub institution_average: f64,
}

/// Institution counts per capital band. Institutions with no recorded
/// capital (≤ 0) are left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CapitalBands {
    pub under_one_million: usize,
    pub one_to_five_million: usize,
    pub over_five_million: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindSplit {
    pub public_waqf: usize,
    pub private_waqf: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Workforce {
    pub omani: u64,
    pub non_omani: u64,
}

impl Workforce {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.omani + self.non_omani
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioDashboard {
    pub selected: Option<String>,
    pub top_institutions: Vec<InstitutionScore>,
    pub benchmark: Benchmark,
    pub total_capital_omr: f64,
    pub capital_bands: CapitalBands,
    pub kind_split: KindSplit,
    pub workforce: Workforce,
    /// Institution count per governorate, in order of first appearance.
    pub governorates: Vec<(String, usize)>,
    pub risk_matrix: RiskTierCounts,
}

impl PortfolioDashboard {
    /// Build the dashboard, narrowing profile figures to `selected` if given.
    #[must_use]
    pub fn build(portfolio: &Portfolio<'_>, selected: Option<&str>, limit: usize) -> Self {
        let in_scope = |institution_id: &str| selected.is_none_or(|id| id == institution_id);
        let institutions: Vec<&Institution> = portfolio
            .institutions
            .iter()
            .filter(|i| in_scope(&i.id))
            .collect();

        Self {
            selected: selected.map(String::from),
            top_institutions: top_institutions(portfolio, limit),
            benchmark: benchmark(portfolio, selected),
            total_capital_omr: institutions.iter().map(|i| i.capital_omr.max(0.0)).sum(),
            capital_bands: capital_bands(institutions.iter().copied()),
            kind_split: kind_split(institutions.iter().copied()),
            workforce: workforce(institutions.iter().copied()),
            governorates: governorate_counts(institutions.iter().copied()),
            risk_matrix: risk_tier_counts(
                portfolio.risks.iter().filter(|r| in_scope(&r.institution_id)),
            ),
        }
    }
}

/// Sum and count of response scores per institution.
fn scores_by_institution<'a>(portfolio: &Portfolio<'a>) -> HashMap<&'a str, (f64, usize)> {
    let institution_of: HashMap<&str, &str> = portfolio
        .evaluations
        .iter()
        .map(|e| (e.id.as_str(), e.institution_id.as_str()))
        .collect();

    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    for response in portfolio.responses {
        if let Some(&institution_id) = institution_of.get(response.evaluation_id.as_str()) {
            let entry = totals.entry(institution_id).or_default();
            entry.0 += response.score;
            entry.1 += 1;
        }
    }
    totals
}

/// Institutions ranked by mean response score, best first; ties by name.
#[must_use]
pub fn top_institutions(portfolio: &Portfolio<'_>, limit: usize) -> Vec<InstitutionScore> {
    let totals = scores_by_institution(portfolio);
    let mut ranked: Vec<InstitutionScore> = portfolio
        .institutions
        .iter()
        .filter_map(|institution| {
            let &(sum, count) = totals.get(institution.id.as_str())?;
            Some(InstitutionScore {
                institution_id: institution.id.clone(),
                name: institution.name.clone(),
                average: round_to(mean(sum, count), DASHBOARD_PRECISION),
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.average
            .total_cmp(&a.average)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(limit);
    ranked
}

/// System-wide mean against the selected institution's mean.
///
/// Without a selection both sides are the system mean.
#[must_use]
pub fn benchmark(portfolio: &Portfolio<'_>, selected: Option<&str>) -> Benchmark {
    let sum: f64 = portfolio.responses.iter().map(|r| r.score).sum();
    let system_average = round_to(mean(sum, portfolio.responses.len()), DASHBOARD_PRECISION);

    let institution_average = match selected {
        None => system_average,
        Some(id) => {
            let (sum, count) = scores_by_institution(portfolio)
                .get(id)
                .copied()
                .unwrap_or_default();
            round_to(mean(sum, count), DASHBOARD_PRECISION)
        }
    };

    Benchmark {
        system_average,
        institution_average,
    }
}

#[must_use]
pub fn capital_bands<'a>(institutions: impl IntoIterator<Item = &'a Institution>) -> CapitalBands {
    let mut bands = CapitalBands::default();
    for capital in institutions.into_iter().map(|i| i.capital_omr) {
        if capital.is_nan() || capital <= 0.0 {
            continue;
        }
        if capital < ONE_MILLION_OMR {
            bands.under_one_million += 1;
        } else if capital <= FIVE_MILLION_OMR {
            bands.one_to_five_million += 1;
        } else {
            bands.over_five_million += 1;
        }
    }
    bands
}

#[must_use]
pub fn kind_split<'a>(institutions: impl IntoIterator<Item = &'a Institution>) -> KindSplit {
    institutions
        .into_iter()
        .fold(KindSplit::default(), |mut split, institution| {
            match institution.kind {
                InstitutionKind::PublicWaqf => split.public_waqf += 1,
                InstitutionKind::PrivateWaqf => split.private_waqf += 1,
            }
            split
        })
}

#[must_use]
pub fn workforce<'a>(institutions: impl IntoIterator<Item = &'a Institution>) -> Workforce {
    institutions
        .into_iter()
        .fold(Workforce::default(), |mut w, institution| {
            w.omani += u64::from(institution.employees_omani);
            w.non_omani += u64::from(institution.employees_non_omani);
            w
        })
}

#[must_use]
pub fn governorate_counts<'a>(
    institutions: impl IntoIterator<Item = &'a Institution>,
) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for institution in institutions {
        let name = institution.governorate.trim();
        if name.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(g, _)| g == name) {
            Some((_, n)) => *n += 1,
            None => counts.push((name.to_string(), 1)),
        }
    }
    counts
}
