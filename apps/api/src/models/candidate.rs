use serde::{Deserialize, Serialize};

use crate::models::lenient;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::default_on_null")]
    pub currently_working: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateLocation {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
}

/// A candidate profile snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::vec_or_null")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::vec_or_null")]
    pub experience: Vec<ExperienceRecord>,
    #[serde(default)]
    pub location: Option<CandidateLocation>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub expected_salary: Option<f64>,
    #[serde(default, deserialize_with = "lenient::vec_or_null")]
    pub education: Vec<EducationRecord>,
}

impl Candidate {
    pub fn city(&self) -> Option<&str> {
        lenient::non_blank(self.location.as_ref().and_then(|l| l.city.as_deref()))
    }

    /// Qualification of the first education entry only.
    pub fn first_qualification(&self) -> Option<&str> {
        lenient::non_blank(self.education.first().and_then(|e| e.qualification.as_deref()))
    }

    pub fn expected_salary(&self) -> Option<f64> {
        self.expected_salary.filter(|v| *v != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_stored_profile() {
        let candidate: Candidate = serde_json::from_value(json!({
            "_id": "u1",
            "name": "Asha",
            "skills": ["React", "Node"],
            "experience": [
                { "title": "Dev", "startDate": "2019-01-01", "endDate": "2023-01-01" },
                { "startDate": "2023-02", "currentlyWorking": true, "endDate": null }
            ],
            "location": { "city": "Pune", "state": "MH", "country": "IN" },
            "education": [{ "qualification": "B.Tech" }, { "qualification": "M.Tech" }],
            "headline": "Student"
        }))
        .unwrap();

        assert_eq!(candidate.city(), Some("Pune"));
        assert_eq!(candidate.experience.len(), 2);
        assert!(candidate.experience[1].currently_working);
        assert_eq!(candidate.first_qualification(), Some("B.Tech"));
        assert_eq!(candidate.expected_salary(), None);
    }

    #[test]
    fn test_null_currently_working_is_false() {
        let candidate: Candidate = serde_json::from_value(json!({
            "experience": [{ "startDate": "2020-01-01", "currentlyWorking": null }]
        }))
        .unwrap();
        assert!(!candidate.experience[0].currently_working);
    }

    #[test]
    fn test_empty_document_is_valid() {
        let candidate: Candidate = serde_json::from_value(json!({})).unwrap();
        assert!(candidate.skills.is_empty());
        assert_eq!(candidate.city(), None);
        assert_eq!(candidate.first_qualification(), None);
    }

    #[test]
    fn test_default_blank_city_is_absent() {
        let candidate: Candidate =
            serde_json::from_value(json!({ "location": { "city": "" }, "skills": null })).unwrap();
        assert_eq!(candidate.city(), None);
        assert!(candidate.skills.is_empty());
    }
}
