//! The speaking sequencer: per-question reveal of suspect responses.
//!
//! When a question is selected, every active suspect owes one response,
//! delivered strictly one speaker at a time in display order. The active
//! speaker's line is revealed one character of text per tick; suspects with
//! no authored answer for the question are skipped without any visible
//! reveal. Finished lines stay on display until the next question replaces
//! them.

use std::collections::VecDeque;

use btl_core::Question;

/// A queued suspect with their resolved line, if any.
#[derive(Debug, Clone)]
struct PendingSpeaker {
    character: String,
    /// `None` when the suspect has no authored answer for the question.
    line: Option<String>,
}

/// The suspect currently revealing their line.
#[derive(Debug, Clone)]
pub struct ActiveSpeaker {
    character: String,
    line: String,
    /// Byte offset of the reveal front; always on a char boundary.
    revealed: usize,
}

impl ActiveSpeaker {
    /// The speaking suspect's name.
    pub fn character(&self) -> &str {
        &self.character
    }

    /// The portion of the line revealed so far.
    pub fn revealed_text(&self) -> &str {
        &self.line[..self.revealed]
    }

    /// The full line this speaker will eventually reveal.
    pub fn full_text(&self) -> &str {
        &self.line
    }

    fn is_done(&self) -> bool {
        self.revealed >= self.line.len()
    }
}

/// A fully revealed line, retained for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpokenLine {
    /// The suspect who spoke.
    pub character: String,
    /// What they said.
    pub line: String,
}

/// Orders the active suspects into a speaking queue for one question and
/// drives the tick-by-tick reveal.
#[derive(Debug, Default)]
pub struct Sequencer {
    queue: VecDeque<PendingSpeaker>,
    active: Option<ActiveSpeaker>,
    finished: Vec<SpokenLine>,
}

impl Sequencer {
    /// Create an idle sequencer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start speaking a question.
    ///
    /// Any in-flight reveal and queue state is discarded unconditionally;
    /// there is no partial-completion carryover between questions. The queue
    /// is populated in `roster` order (the caller's display order, fixed for
    /// the question). Each suspect's line is the guilty response if they are
    /// the impostor, the innocent response otherwise; the first suspect with
    /// a line is activated immediately.
    pub fn begin(&mut self, question: &Question, roster: &[String], impostor: &str) {
        self.reset();
        for character in roster {
            let line = question.answer_for(character).map(|answer| {
                let guilty = character.eq_ignore_ascii_case(impostor);
                answer.response_for(guilty).to_string()
            });
            self.queue.push_back(PendingSpeaker {
                character: character.clone(),
                line,
            });
        }
        self.activate_next();
    }

    /// Advance the active reveal by one character of text.
    ///
    /// When the active speaker's line completes, their finished line is
    /// retained and the next queued suspect is activated immediately. With
    /// no active speaker this is a no-op, so stray ticks after completion
    /// are harmless.
    pub fn tick(&mut self) {
        let Some(speaker) = self.active.as_mut() else {
            return;
        };

        if let Some(c) = speaker.line[speaker.revealed..].chars().next() {
            speaker.revealed += c.len_utf8();
        }

        if speaker.is_done() {
            let done = self.active.take();
            if let Some(done) = done {
                self.finished.push(SpokenLine {
                    character: done.character,
                    line: done.line,
                });
            }
            self.activate_next();
        }
    }

    /// Whether the queue has drained and no one is speaking.
    ///
    /// An idle sequencer (before any [`begin`](Self::begin)) also reports
    /// complete; the encounter's phase gating keeps that from mattering.
    pub fn is_complete(&self) -> bool {
        self.active.is_none() && self.queue.is_empty()
    }

    /// The suspect currently revealing, if any.
    pub fn active(&self) -> Option<&ActiveSpeaker> {
        self.active.as_ref()
    }

    /// Lines already fully revealed for this question, in speaking order.
    pub fn finished(&self) -> &[SpokenLine] {
        &self.finished
    }

    /// Suspects still waiting to speak, in order.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(|p| p.character.as_str())
    }

    /// Discard all queue, reveal, and display state.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.active = None;
        self.finished.clear();
    }

    /// Dequeue until a suspect with a line becomes active.
    ///
    /// Suspects without an authored answer are skipped outright: they never
    /// appear as the active speaker and leave no finished line.
    fn activate_next(&mut self) {
        while let Some(next) = self.queue.pop_front() {
            if let Some(line) = next.line {
                // An empty authored line completes without any reveal.
                if line.is_empty() {
                    self.finished.push(SpokenLine {
                        character: next.character,
                        line,
                    });
                    continue;
                }
                self.active = Some(ActiveSpeaker {
                    character: next.character,
                    line,
                    revealed: 0,
                });
                return;
            }
        }
    }
}
