use serde::{Deserialize, Serialize};

/// Points each category contributes to the match percentage at full credit.
/// Must total 100 so the percentage stays within 0–100 without clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 65.0,
            experience: 20.0,
            location: 10.0,
            salary: 5.0,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.skills + self.experience + self.location + self.salary
    }

    pub fn is_valid(&self) -> bool {
        let parts = [self.skills, self.experience, self.location, self.salary];
        parts.iter().all(|w| w.is_finite() && *w >= 0.0) && (self.total() - 100.0).abs() < 1e-9
    }
}
