//! Submission sinks: where a record goes once it is valid
//!
//! Copyright (c) 2025 Formcheck Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::record::Record;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// Receiver of valid records
pub trait SubmissionSink {
    fn submit(&mut self, record: &Record) -> Result<()>;
}

/// A record as accepted by a sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub submitted_at: DateTime<Utc>,
    pub record: Record,
}

impl Submission {
    pub fn now(record: Record) -> Self {
        Self {
            submitted_at: Utc::now(),
            record,
        }
    }
}

/// Placeholder transport: logs the record with the password masked
#[derive(Debug, Default)]
pub struct LogSink {
    submitted: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records logged so far
    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

impl SubmissionSink for LogSink {
    fn submit(&mut self, record: &Record) -> Result<()> {
        self.submitted += 1;
        info!(record = %record.redacted(), "Form submitted");
        Ok(())
    }
}

/// Keeps every submission in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    submissions: Vec<Submission>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn last(&self) -> Option<&Submission> {
        self.submissions.last()
    }

    pub fn into_submissions(self) -> Vec<Submission> {
        self.submissions
    }
}

impl SubmissionSink for MemorySink {
    fn submit(&mut self, record: &Record) -> Result<()> {
        self.submissions.push(Submission::now(record.clone()));
        Ok(())
    }
}

/// Forward to several sinks in order, stopping at the first failure
impl<A: SubmissionSink, B: SubmissionSink> SubmissionSink for (A, B) {
    fn submit(&mut self, record: &Record) -> Result<()> {
        self.0.submit(record)?;
        self.1.submit(record)
    }
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for &mut S {
    fn submit(&mut self, record: &Record) -> Result<()> {
        (**self).submit(record)
    }
}
