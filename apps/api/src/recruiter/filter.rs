//! Candidate filtering.
//!
//! The view is a pure function of the filter values and the candidate list:
//! job, minimum score and search are ANDed together, then the result cap keeps
//! the first `limit` survivors in list order. Nothing is re-sorted.

use serde::{Deserialize, Serialize};

use crate::recruiter::models::Candidate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFilter {
    /// `None` (or an empty id) matches every job.
    pub job_id: Option<String>,
    pub min_score: u32,
    pub search: String,
    pub limit: usize,
}

impl CandidateFilter {
    pub fn new(limit: usize) -> Self {
        Self {
            job_id: None,
            min_score: 0,
            search: String::new(),
            limit,
        }
    }

    pub fn matches_job(&self, candidate: &Candidate) -> bool {
        match self.job_id.as_deref() {
            None | Some("") => true,
            Some(id) => candidate.matched_job_id == id,
        }
    }

    pub fn matches_score(&self, candidate: &Candidate) -> bool {
        u32::from(candidate.score) >= self.min_score
    }

    /// Case-insensitive substring on name, email, or any skill.
    pub fn matches_search(&self, candidate: &Candidate) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        candidate.name.to_lowercase().contains(&needle)
            || candidate.email.to_lowercase().contains(&needle)
            || candidate
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&needle))
    }

    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.matches_job(candidate) && self.matches_score(candidate) && self.matches_search(candidate)
    }

    pub fn apply<'a>(&self, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
        candidates
            .iter()
            .filter(|c| self.matches(c))
            .take(self.limit)
            .collect()
    }
}

/// Partial update from the filter panel. Absent fields keep their value; an
/// empty `jobId` clears the job filter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPatch {
    pub job_id: Option<String>,
    pub min_score: Option<u32>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}

impl FilterPatch {
    pub fn apply_to(self, filter: &mut CandidateFilter) {
        if let Some(job_id) = self.job_id {
            filter.job_id = if job_id.is_empty() { None } else { Some(job_id) };
        }
        if let Some(min_score) = self.min_score {
            filter.min_score = min_score;
        }
        if let Some(search) = self.search {
            filter.search = search;
        }
        if let Some(limit) = self.limit {
            filter.limit = limit;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.job_id.is_none()
            && self.min_score.is_none()
            && self.search.is_none()
            && self.limit.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recruiter::models::seed_candidates;

    fn names(view: &[&Candidate]) -> Vec<String> {
        view.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_default_filter_returns_everything_in_order() {
        let all = seed_candidates();
        let view = CandidateFilter::new(10).apply(&all);
        assert_eq!(
            names(&view),
            vec!["John Doe", "Jane Smith", "Mike Johnson", "Sarah Wilson"]
        );
    }

    #[test]
    fn test_min_score_ninety_leaves_only_john() {
        let all = seed_candidates();
        for search in ["", "react", "john", "jane", "docker"] {
            let filter = CandidateFilter {
                min_score: 90,
                search: search.to_string(),
                ..CandidateFilter::new(10)
            };
            let view = filter.apply(&all);
            assert!(view.len() <= 1);
            assert!(view.iter().all(|c| c.name == "John Doe"));
        }
    }

    #[test]
    fn test_search_docker_any_case_matches_jane_by_skill() {
        let all = seed_candidates();
        for search in ["docker", "DOCKER", "DoCkEr"] {
            let filter = CandidateFilter {
                search: search.to_string(),
                ..CandidateFilter::new(10)
            };
            assert_eq!(names(&filter.apply(&all)), vec!["Jane Smith"]);
        }
    }

    #[test]
    fn test_search_hits_email() {
        let all = seed_candidates();
        let filter = CandidateFilter {
            search: "wilson@".into(),
            ..CandidateFilter::new(10)
        };
        assert_eq!(names(&filter.apply(&all)), vec!["Sarah Wilson"]);
    }

    #[test]
    fn test_job_filter_exact_match() {
        let all = seed_candidates();
        let filter = CandidateFilter {
            job_id: Some("2".into()),
            ..CandidateFilter::new(10)
        };
        assert_eq!(names(&filter.apply(&all)), vec!["Mike Johnson"]);

        let empty_id = CandidateFilter {
            job_id: Some(String::new()),
            ..CandidateFilter::new(10)
        };
        assert_eq!(empty_id.apply(&all).len(), 4);
    }

    #[test]
    fn test_predicates_commute() {
        let all = seed_candidates();
        let filter = CandidateFilter {
            job_id: Some("1".into()),
            min_score: 80,
            search: "react".into(),
            limit: usize::MAX,
        };
        type Pred = fn(&CandidateFilter, &Candidate) -> bool;
        let preds: [Pred; 3] = [
            CandidateFilter::matches_job,
            CandidateFilter::matches_score,
            CandidateFilter::matches_search,
        ];
        let orders = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        let expected = names(&filter.apply(&all));
        assert_eq!(expected, vec!["John Doe", "Jane Smith"]);
        for order in orders {
            let mut survivors: Vec<&Candidate> = all.iter().collect();
            for idx in order {
                survivors.retain(|c| preds[idx](&filter, c));
            }
            assert_eq!(names(&survivors), expected, "order {order:?}");
        }
    }

    #[test]
    fn test_cap_returns_min_of_survivors_and_limit() {
        let all = seed_candidates();
        for limit in 0..=6 {
            let view = CandidateFilter::new(limit).apply(&all);
            assert_eq!(view.len(), limit.min(4));
            // prefix of the original order
            for (got, want) in view.iter().zip(all.iter()) {
                assert_eq!(got.id, want.id);
            }
        }
    }

    #[test]
    fn test_cap_is_not_sorted_by_score() {
        let mut all = seed_candidates();
        all.reverse();
        let view = CandidateFilter::new(2).apply(&all);
        assert_eq!(names(&view), vec!["Sarah Wilson", "Mike Johnson"]);
    }

    #[test]
    fn test_patch_updates_only_given_fields() {
        let mut filter = CandidateFilter::new(10);
        FilterPatch {
            min_score: Some(85),
            job_id: Some("1".into()),
            ..Default::default()
        }
        .apply_to(&mut filter);
        assert_eq!(filter.min_score, 85);
        assert_eq!(filter.job_id.as_deref(), Some("1"));
        assert_eq!(filter.limit, 10);

        FilterPatch {
            job_id: Some(String::new()),
            ..Default::default()
        }
        .apply_to(&mut filter);
        assert_eq!(filter.job_id, None);
        assert_eq!(filter.min_score, 85);
    }
}
