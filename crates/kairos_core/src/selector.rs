use tracing::warn;

use crate::{error::RouteError, eta::is_readable_eta, route_candidate::RouteCandidate};

/// Orders candidates by parsed ETA, fastest first. Equal ETAs keep their
/// relative order.
pub fn rank_by_eta(mut candidates: Vec<RouteCandidate>) -> Vec<RouteCandidate> {
    for candidate in unreadable(&candidates) {
        warn!(
            "ETA \"{}\" of route \"{}\" is unreadable, ranked as 0 min",
            candidate.eta_text(),
            candidate.label()
        );
    }

    candidates.sort_by_key(RouteCandidate::eta_minutes);
    candidates
}

pub fn select_fastest(candidates: &[RouteCandidate]) -> Result<&RouteCandidate, RouteError> {
    candidates
        .iter()
        .min_by_key(|candidate| candidate.eta_minutes())
        .ok_or(RouteError::NoCandidates)
}

// Unreadable ETAs count as 0 min and rank first.
fn unreadable(candidates: &[RouteCandidate]) -> impl Iterator<Item = &RouteCandidate> {
    candidates
        .iter()
        .filter(|candidate| !is_readable_eta(candidate.eta_text()))
}
