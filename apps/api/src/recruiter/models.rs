use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fixtures::{date, strings};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobDescription {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub created_date: NaiveDate,
    pub candidate_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub resume_filename: String,
    pub score: u8,
    /// Not checked against the job list; deleting a job leaves this dangling.
    pub matched_job_id: String,
    pub upload_date: NaiveDate,
    pub skills: Vec<String>,
    pub experience: String,
    pub is_bookmarked: bool,
}

pub fn seed_jobs() -> Vec<JobDescription> {
    vec![
        JobDescription {
            id: "1".into(),
            title: "Senior Frontend Developer".into(),
            company: "TechCorp".into(),
            description: "We are looking for a Senior Frontend Developer with React experience..."
                .into(),
            created_date: date(2024, 1, 15),
            candidate_count: 25,
        },
        JobDescription {
            id: "2".into(),
            title: "Full Stack Engineer".into(),
            company: "StartupXYZ".into(),
            description:
                "Join our team as a Full Stack Engineer working with Node.js and React...".into(),
            created_date: date(2024, 1, 20),
            candidate_count: 18,
        },
    ]
}

pub fn seed_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "1".into(),
            name: "John Doe".into(),
            email: "john.doe@email.com".into(),
            resume_filename: "john_doe_resume.pdf".into(),
            score: 92,
            matched_job_id: "1".into(),
            upload_date: date(2024, 1, 22),
            skills: strings(&["React", "TypeScript", "Node.js", "AWS"]),
            experience: "5 years".into(),
            is_bookmarked: true,
        },
        Candidate {
            id: "2".into(),
            name: "Jane Smith".into(),
            email: "jane.smith@email.com".into(),
            resume_filename: "jane_smith_resume.pdf".into(),
            score: 88,
            matched_job_id: "1".into(),
            upload_date: date(2024, 1, 21),
            skills: strings(&["React", "JavaScript", "Python", "Docker"]),
            experience: "4 years".into(),
            is_bookmarked: false,
        },
        Candidate {
            id: "3".into(),
            name: "Mike Johnson".into(),
            email: "mike.johnson@email.com".into(),
            resume_filename: "mike_johnson_resume.pdf".into(),
            score: 85,
            matched_job_id: "2".into(),
            upload_date: date(2024, 1, 20),
            skills: strings(&["Node.js", "MongoDB", "React", "Express"]),
            experience: "3 years".into(),
            is_bookmarked: true,
        },
        Candidate {
            id: "4".into(),
            name: "Sarah Wilson".into(),
            email: "sarah.wilson@email.com".into(),
            resume_filename: "sarah_wilson_resume.pdf".into(),
            score: 79,
            matched_job_id: "1".into(),
            upload_date: date(2024, 1, 19),
            skills: strings(&["Vue.js", "JavaScript", "CSS", "HTML"]),
            experience: "2 years".into(),
            is_bookmarked: false,
        },
    ]
}
