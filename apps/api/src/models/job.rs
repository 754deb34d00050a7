use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// A job posting as published by a recruiter. Only the fields the matcher
/// reads are modelled; everything else on the stored document is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::vec_or_null")]
    pub skills: Vec<String>,
    /// Years required. Stored as free text by the posting form.
    #[serde(default, deserialize_with = "lenient::number")]
    pub experience: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub salary_range_from: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub salary_range_to: Option<f64>,
    #[serde(default)]
    pub qualification: Option<String>,
}

impl JobPosting {
    /// Required years of experience; `0.0` means no requirement.
    pub fn required_years(&self) -> f64 {
        self.experience.filter(|y| *y > 0.0).unwrap_or(0.0)
    }

    pub fn location(&self) -> Option<&str> {
        lenient::non_blank(self.location.as_deref())
    }

    /// Inclusive salary bounds, present only when both ends are set and non-zero.
    pub fn salary_range(&self) -> Option<(f64, f64)> {
        let from = self.salary_range_from.filter(|v| *v != 0.0)?;
        let to = self.salary_range_to.filter(|v| *v != 0.0)?;
        Some((from, to))
    }
}
