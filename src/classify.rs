//! Response classification.
//!
//! Every response is sorted into exactly one of three checks:
//! - **accepted**: the server did the work (HTTP 200)
//! - **rejected**: the server shed the request (HTTP 503)
//! - **other**: anything else, including requests that never got a response
//!
//! Classification only looks at the status code and is a pure function, so it
//! can be called from any number of virtual users without synchronization.

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::{STATUS_ACCEPTED, STATUS_REJECTED};

/// Status code recorded when no response was obtained (connect error, timeout, ...).
pub const NO_RESPONSE_STATUS: u16 = 0;

/// One of the three named checks recorded per iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Check {
    /// Status is 200
    Accepted,
    /// Status is 503
    Rejected,
    /// Status is neither 200 nor 503
    Other,
}

impl Check {
    /// Name under which the check is reported.
    pub fn name(&self) -> &'static str {
        match self {
            Check::Accepted => "accepted",
            Check::Rejected => "rejected",
            Check::Other => "other",
        }
    }

    /// Evaluates this check's predicate on its own.
    pub fn evaluate(&self, status: u16) -> bool {
        match self {
            Check::Accepted => status == STATUS_ACCEPTED,
            Check::Rejected => status == STATUS_REJECTED,
            Check::Other => status != STATUS_ACCEPTED && status != STATUS_REJECTED,
        }
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of the three checks for a single response.
///
/// Exactly one field is `true` for any status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub accepted: bool,
    pub rejected: bool,
    pub other: bool,
}

impl Classification {
    /// The check that passed.
    pub fn check(&self) -> Check {
        if self.accepted {
            Check::Accepted
        } else if self.rejected {
            Check::Rejected
        } else {
            Check::Other
        }
    }

    /// Whether the given check passed.
    pub fn passed(&self, check: Check) -> bool {
        match check {
            Check::Accepted => self.accepted,
            Check::Rejected => self.rejected,
            Check::Other => self.other,
        }
    }
}

/// Classifies a status code.
///
/// Total over every `u16`, including codes outside 100-599 and
/// [`NO_RESPONSE_STATUS`], all of which land in `other`.
pub fn classify(status: u16) -> Classification {
    Classification {
        accepted: Check::Accepted.evaluate(status),
        rejected: Check::Rejected.evaluate(status),
        other: Check::Other.evaluate(status),
    }
}

/// Classifies a received response by its status code.
pub fn classify_response(response: &reqwest::Response) -> Classification {
    classify(response.status().as_u16())
}

/// Classifies the result of a request.
///
/// A request that produced no response is treated as status 0 and
/// therefore classifies as `other`.
pub fn classify_outcome(outcome: Result<&reqwest::Response, &reqwest::Error>) -> Classification {
    match outcome {
        Ok(response) => classify_response(response),
        Err(_) => classify(NO_RESPONSE_STATUS),
    }
}
