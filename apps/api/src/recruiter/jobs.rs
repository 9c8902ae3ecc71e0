//! Job description list owned by a recruiter screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::recruiter::models::JobDescription;

/// Contents of the "Add New Job Description" dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub description: String,
}

impl JobDraft {
    fn is_complete(&self) -> bool {
        [&self.title, &self.company, &self.description]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobBoard {
    jobs: Vec<JobDescription>,
}

impl JobBoard {
    pub fn new(jobs: Vec<JobDescription>) -> Self {
        Self { jobs }
    }

    pub fn list(&self) -> &[JobDescription] {
        &self.jobs
    }

    pub fn get(&self, id: &str) -> Option<&JobDescription> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Appends a job stamped with `now`. Ids are epoch milliseconds, bumped
    /// past any existing id they would collide with.
    pub fn create(
        &mut self,
        draft: &JobDraft,
        now: DateTime<Utc>,
    ) -> Result<&JobDescription, AppError> {
        if !draft.is_complete() {
            return Err(AppError::MissingFields("Please fill in all fields".to_string()));
        }

        let mut stamp = now.timestamp_millis();
        while self.get(&stamp.to_string()).is_some() {
            stamp += 1;
        }

        let job = JobDescription {
            id: stamp.to_string(),
            title: draft.title.clone(),
            company: draft.company.clone(),
            description: draft.description.clone(),
            created_date: now.date_naive(),
            candidate_count: 0,
        };
        info!(id = %job.id, title = %job.title, "Job description added");
        self.jobs.push(job);
        Ok(&self.jobs[self.jobs.len() - 1])
    }

    /// Removes by id. Candidates matched to this job are left as they are.
    pub fn delete(&mut self, id: &str) -> Result<JobDescription, AppError> {
        let index = self
            .jobs
            .iter()
            .position(|j| j.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Job description {id} not found")))?;
        let removed = self.jobs.remove(index);
        info!(id = %removed.id, "Job description deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recruiter::models::seed_jobs;
    use chrono::TimeZone;

    fn draft() -> JobDraft {
        JobDraft {
            title: "Platform Engineer".into(),
            company: "Acme".into(),
            description: "Own our Rust services".into(),
        }
    }

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_create_appends_retrievable_record() {
        let mut board = JobBoard::new(seed_jobs());
        let now = at(1_717_171_717_000);
        let id = board.create(&draft(), now).unwrap().id.clone();

        assert_eq!(board.list().len(), 3);
        assert_eq!(board.list().last().unwrap().id, id);
        let job = board.get(&id).unwrap();
        assert_eq!(job.candidate_count, 0);
        assert_eq!(job.created_date, now.date_naive());
        assert_eq!(id, "1717171717000");
    }

    #[test]
    fn test_create_with_missing_field_changes_nothing() {
        for blank in 0..3 {
            let mut d = draft();
            match blank {
                0 => d.title.clear(),
                1 => d.company = "  ".into(),
                _ => d.description.clear(),
            }
            let mut board = JobBoard::new(seed_jobs());
            let err = board.create(&d, Utc::now()).unwrap_err();
            assert!(matches!(err, AppError::MissingFields(_)));
            assert_eq!(board.list(), seed_jobs().as_slice());
        }
    }

    #[test]
    fn test_same_millisecond_ids_stay_unique() {
        let mut board = JobBoard::default();
        let now = at(5_000);
        let a = board.create(&draft(), now).unwrap().id.clone();
        let b = board.create(&draft(), now).unwrap().id.clone();
        assert_ne!(a, b);
        assert_eq!(b, "5001");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut board = JobBoard::new(seed_jobs());
        let created = board.create(&draft(), at(9_000)).unwrap().clone();

        let removed = board.delete("2").unwrap();
        assert_eq!(removed.title, "Full Stack Engineer");
        assert_eq!(board.list(), &[seed_jobs()[0].clone(), created]);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut board = JobBoard::new(seed_jobs());
        assert!(matches!(board.delete("nope"), Err(AppError::NotFound(_))));
        assert_eq!(board.list().len(), 2);
    }
}
