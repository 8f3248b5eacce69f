//! The scenario repository: grouping, loading, and random queries.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::record::RawRecord;
use crate::scenario::{Answer, Difficulty, Scenario};

/// What a call to [`ScenarioRepository::load`] ingested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Scenarios created by this load.
    pub scenarios: usize,
    /// Answers ingested (one per surviving data record).
    pub answers: usize,
    /// Records skipped for too few fields or an unknown difficulty tier.
    pub skipped: usize,
}

/// Holds the parsed scenario graph and answers random-scenario queries.
///
/// The repository is loaded once at startup and read-only afterwards. An
/// unreadable source simply means the caller never feeds it rows; an empty
/// repository answers `None` for every difficulty and never errors.
#[derive(Debug, Default)]
pub struct ScenarioRepository {
    scenarios: Vec<Scenario>,
    by_id: HashMap<String, usize>,
}

impl ScenarioRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from record lines. See [`load`](Self::load).
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut repo = Self::new();
        repo.load(rows);
        repo
    }

    /// Ingest raw record lines into the scenario graph.
    ///
    /// The first row is a header and is discarded. Each remaining row names a
    /// `(scenario, question, character)` triple: scenarios are keyed by id
    /// (first occurrence wins for difficulty and description), questions are
    /// keyed by id within their scenario (first occurrence wins for text),
    /// and every surviving record contributes exactly one answer. Malformed
    /// rows (too few fields, or a difficulty naming no known tier) are
    /// skipped without aborting the load.
    pub fn load<I, S>(&mut self, rows: I) -> LoadSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = LoadSummary::default();

        for row in rows.into_iter().skip(1) {
            let Some(record) = RawRecord::parse(row.as_ref()) else {
                summary.skipped += 1;
                continue;
            };
            let Some(difficulty) = Difficulty::parse(&record.difficulty) else {
                summary.skipped += 1;
                continue;
            };

            let index = match self.by_id.get(&record.scenario_id).copied() {
                Some(i) => i,
                None => {
                    self.scenarios.push(Scenario::new(
                        record.scenario_id.clone(),
                        difficulty,
                        record.description.clone(),
                    ));
                    summary.scenarios += 1;
                    let i = self.scenarios.len() - 1;
                    self.by_id.insert(record.scenario_id.clone(), i);
                    i
                }
            };

            let question = self.scenarios[index]
                .question_mut_or_insert(&record.question_id, &record.question_text);
            question.push_answer(Answer {
                character: record.character,
                innocent_response: record.innocent_response,
                guilty_response: record.guilty_response,
            });
            summary.answers += 1;
        }

        summary
    }

    /// All loaded scenarios, in first-seen order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Number of loaded scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the repository holds no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Look up a scenario by id.
    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.by_id.get(id).map(|&i| &self.scenarios[i])
    }

    /// A uniformly random scenario of the given difficulty, or `None` when
    /// no scenario matches. The pick is re-drawn on every call.
    pub fn random_scenario(&self, difficulty: Difficulty, rng: &mut StdRng) -> Option<&Scenario> {
        let filtered: Vec<&Scenario> = self
            .scenarios
            .iter()
            .filter(|s| s.difficulty == difficulty)
            .collect();
        filtered.choose(rng).copied()
    }
}
