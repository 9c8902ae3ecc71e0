use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fixtures::{date, strings};
use crate::screen::{candidate_badge, BadgeTier};

/// One entry in the candidate's resume history. Read-only mock data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeVersion {
    pub id: String,
    pub version: u32,
    pub filename: String,
    pub upload_date: NaiveDate,
    pub score: u8,
    pub job_description: String,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skill_match: u8,
    pub experience: u8,
    pub education: u8,
    pub keywords: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub breakdown: ScoreBreakdown,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    pub fn badge(&self) -> BadgeTier {
        candidate_badge(self.overall_score)
    }
}

/// The fixed payload the simulated analysis produces.
pub fn analysis_fixture() -> AnalysisResult {
    AnalysisResult {
        overall_score: 82,
        breakdown: ScoreBreakdown {
            skill_match: 85,
            experience: 78,
            education: 90,
            keywords: 75,
        },
        missing_skills: strings(&["Docker", "Kubernetes", "GraphQL"]),
        strengths: strings(&[
            "Strong React experience",
            "Good project portfolio",
            "Relevant education",
        ]),
        suggestions: strings(&[
            "Add Docker and containerization experience",
            "Include more backend technologies",
            "Quantify your impact with metrics",
        ]),
    }
}

pub fn seed_resume_versions() -> Vec<ResumeVersion> {
    vec![
        ResumeVersion {
            id: "1".into(),
            version: 1,
            filename: "resume_v1.pdf".into(),
            upload_date: date(2024, 1, 15),
            score: 62,
            job_description: "Software Engineer at Google".into(),
            improvements: strings(&["Added React skills", "Improved project descriptions"]),
            suggestions: strings(&[
                "Add more quantifiable achievements",
                "Include AWS certifications",
            ]),
        },
        ResumeVersion {
            id: "2".into(),
            version: 2,
            filename: "resume_v2.pdf".into(),
            upload_date: date(2024, 1, 20),
            score: 78,
            job_description: "Software Engineer at Google".into(),
            improvements: strings(&["Added quantifiable achievements", "Improved action verbs"]),
            suggestions: strings(&[
                "Include leadership experience",
                "Add system design projects",
            ]),
        },
        ResumeVersion {
            id: "3".into(),
            version: 3,
            filename: "resume_v3.pdf".into(),
            upload_date: date(2024, 1, 25),
            score: 85,
            job_description: "Frontend Developer at Microsoft".into(),
            improvements: strings(&["Added leadership experience", "Included TypeScript skills"]),
            suggestions: strings(&[
                "Add accessibility knowledge",
                "Include testing frameworks",
            ]),
        },
    ]
}
