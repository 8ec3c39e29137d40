//! Local filtering of the job collection.
//!
//! Everything here is a pure function of its inputs and is recomputed on every
//! view; nothing is cached between store mutations.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::{Job, JobStatus, UnknownStatus};

/// Sentinel shown first in the status dropdown.
pub const ALL_STATUSES: &str = "ALL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl StatusFilter {
    pub fn matches(self, status: JobStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(ALL_STATUSES),
            StatusFilter::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_STATUSES) {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// Current search text and status selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub status: StatusFilter,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }
}

/// `ALL` followed by the distinct statuses present in `jobs`, sorted.
pub fn status_options(jobs: &[Job]) -> Vec<StatusFilter> {
    let present: BTreeSet<JobStatus> = jobs.iter().map(|job| job.status).collect();
    std::iter::once(StatusFilter::All)
        .chain(present.into_iter().map(StatusFilter::Only))
        .collect()
}

/// Jobs matching both the query and the status filter, in collection order.
pub fn visible_jobs<'a>(jobs: &'a [Job], criteria: &FilterCriteria) -> Vec<&'a Job> {
    let needle = criteria.query.trim().to_lowercase();
    jobs.iter()
        .filter(|job| matches_query(job, &needle) && criteria.status.matches(job.status))
        .collect()
}

fn matches_query(job: &Job, needle: &str) -> bool {
    needle.is_empty()
        || job.company.to_lowercase().contains(needle)
        || job.title.to_lowercase().contains(needle)
}
