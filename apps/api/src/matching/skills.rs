use std::collections::HashSet;

/// Lowercased, trimmed, de-duplicated skill list in first-seen order.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Case-insensitive comparison of a job's required skills with a candidate's skills.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillOverlap {
    pub job_skills: Vec<String>,
    pub user_skills: Vec<String>,
    /// Candidate skills the job asks for, in candidate order.
    pub matched: Vec<String>,
    /// Job skills the candidate lacks, in job order.
    pub unmatched: Vec<String>,
}

impl SkillOverlap {
    pub fn between(job_skills: &[String], user_skills: &[String]) -> Self {
        let job_skills = normalize_skills(job_skills);
        let user_skills = normalize_skills(user_skills);

        let job_set: HashSet<&str> = job_skills.iter().map(String::as_str).collect();
        let user_set: HashSet<&str> = user_skills.iter().map(String::as_str).collect();

        let matched = user_skills
            .iter()
            .filter(|s| job_set.contains(s.as_str()))
            .cloned()
            .collect();
        let unmatched = job_skills
            .iter()
            .filter(|s| !user_set.contains(s.as_str()))
            .cloned()
            .collect();

        Self {
            job_skills,
            user_skills,
            matched,
            unmatched,
        }
    }

    /// Fraction of required skills covered. Zero when either side lists nothing.
    pub fn coverage(&self) -> f64 {
        if self.job_skills.is_empty() || self.user_skills.is_empty() {
            return 0.0;
        }
        self.matched.len() as f64 / self.job_skills.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_dedupes_case_insensitively() {
        assert_eq!(
            normalize_skills(&strings(&["React", " react ", "SQL", ""])),
            strings(&["react", "sql"])
        );
    }

    #[test]
    fn test_overlap_is_case_insensitive() {
        let overlap = SkillOverlap::between(&strings(&["react"]), &strings(&["React"]));
        assert_eq!(overlap.matched, strings(&["react"]));
        assert!(overlap.unmatched.is_empty());
        assert_eq!(overlap.coverage(), 1.0);
    }

    #[test]
    fn test_unmatched_is_from_job_side() {
        let overlap = SkillOverlap::between(
            &strings(&["React", "Node", "Docker"]),
            &strings(&["node", "python"]),
        );
        assert_eq!(overlap.matched, strings(&["node"]));
        assert_eq!(overlap.unmatched, strings(&["react", "docker"]));
        assert!((overlap.coverage() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_candidate_skills_cannot_exceed_full_coverage() {
        let overlap = SkillOverlap::between(&strings(&["react"]), &strings(&["react", "React"]));
        assert_eq!(overlap.coverage(), 1.0);
    }

    #[test]
    fn test_empty_sides_cover_nothing() {
        assert_eq!(SkillOverlap::between(&[], &strings(&["react"])).coverage(), 0.0);
        assert_eq!(SkillOverlap::between(&strings(&["react"]), &[]).coverage(), 0.0);
    }
}
