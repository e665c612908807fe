use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::{AppError, RejectionKind};
use crate::utils::normalize::{normalize_phone, parse_skills};

// ───── Stored Record ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u64,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub contact_number: String,
    pub address: String,
    pub qualification: String,
    pub graduation_year: i32,
    pub years_of_experience: f64,
    pub skills: Vec<String>,
    pub resume_filename: String,
    pub resume_path: String,
    pub created_at: DateTime<Utc>,
}

// ───── Input & Validation ───────────────────────────────────────────

/// Normalized candidate fields awaiting validation. Construction through
/// [`NewCandidate::from_raw`] guarantees the phone number and skill list
/// are already canonical, so the validators here only check constraints.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCandidate {
    #[validate(length(min = 2, max = 100, message = "Full name must be 2 to 100 characters"))]
    pub full_name: String,

    #[validate(custom(function = "validate_dob"))]
    pub date_of_birth: NaiveDate,

    #[validate(custom(function = "validate_contact_number"))]
    pub contact_number: String,

    #[validate(length(min = 5, max = 300, message = "Address must be 5 to 300 characters"))]
    pub address: String,

    #[validate(length(min = 2, max = 120, message = "Qualification must be 2 to 120 characters"))]
    pub qualification: String,

    #[validate(range(min = 1950, max = 2100, message = "Graduation year must be between 1950 and 2100"))]
    pub graduation_year: i32,

    #[validate(range(min = 0.0, max = 60.0, message = "Years of experience must be between 0 and 60"))]
    pub years_of_experience: f64,

    #[validate(custom(function = "validate_skills"))]
    pub skills: Vec<String>,
}

impl NewCandidate {
    /// Normalizes raw form text into canonical fields. The DOB string must
    /// be an ISO `YYYY-MM-DD` date; everything else is deferred to
    /// [`Validate::validate`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        full_name: String,
        dob: &str,
        contact_number: &str,
        address: String,
        qualification: String,
        graduation_year: i32,
        years_of_experience: f64,
        skills: &str,
    ) -> Result<Self, AppError> {
        let date_of_birth = NaiveDate::parse_from_str(dob.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::field_rejection(
                "date_of_birth",
                RejectionKind::InvalidDateFormat,
                "DOB must be in YYYY-MM-DD format",
            ))?;

        Ok(NewCandidate {
            full_name,
            date_of_birth,
            contact_number: normalize_phone(contact_number),
            address,
            qualification,
            graduation_year,
            years_of_experience,
            skills: parse_skills(skills),
        })
    }

    /// Assembles the stored record once the resume file is in place.
    pub fn into_candidate(self, id: u64, resume_filename: String, resume_path: String) -> Candidate {
        Candidate {
            id,
            full_name: self.full_name,
            date_of_birth: self.date_of_birth,
            contact_number: self.contact_number,
            address: self.address,
            qualification: self.qualification,
            graduation_year: self.graduation_year,
            years_of_experience: self.years_of_experience,
            skills: self.skills,
            resume_filename,
            resume_path,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, MultipartForm)]
pub struct CandidateUpload {
    #[multipart(rename = "FullName")]
    pub full_name: Text<String>,

    #[multipart(rename = "DOB")]
    pub dob: Text<String>,

    #[multipart(rename = "ContactNumber")]
    pub contact_number: Text<String>,

    #[multipart(rename = "Address")]
    pub address: Text<String>,

    #[multipart(rename = "Qualification")]
    pub qualification: Text<String>,

    #[multipart(rename = "GraduationYear")]
    pub graduation_year: Text<i32>,

    #[multipart(rename = "YearsOfExperience")]
    pub years_of_experience: Text<f64>,

    #[multipart(rename = "Skills")]
    pub skills: Text<String>,

    #[multipart(rename = "Resume", limit = "10MB")]
    pub resume: TempFile,
}

// ───── Query Filters ────────────────────────────────────────────────

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFilters {
    /// Case-insensitive exact match against any skill.
    pub skill: Option<String>,
    /// Inclusive lower bound on years of experience.
    pub min_experience: Option<f64>,
    /// Exact graduation year.
    pub graduation_year: Option<i32>,
}

impl CandidateFilters {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        if let Some(skill) = &self.skill {
            let wanted = skill.trim().to_lowercase();
            if !candidate.skills.iter().any(|s| s.to_lowercase() == wanted) {
                return false;
            }
        }
        if let Some(min) = self.min_experience {
            if candidate.years_of_experience < min {
                return false;
            }
        }
        if let Some(year) = self.graduation_year {
            if candidate.graduation_year != year {
                return false;
            }
        }
        true
    }
}

// ───── Custom Validators ────────────────────────────────────────────

fn validate_dob(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date > Utc::now().date_naive() {
        let mut err = ValidationError::new("future_date");
        err.message = Some("DOB cannot be in the future".into());
        return Err(err);
    }
    Ok(())
}

fn validate_contact_number(digits: &str) -> Result<(), ValidationError> {
    if !(10..=15).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
        let mut err = ValidationError::new("invalid_phone");
        err.message = Some("Contact number must contain 10 to 15 digits".into());
        return Err(err);
    }
    Ok(())
}

fn validate_skills(skills: &Vec<String>) -> Result<(), ValidationError> {
    if skills.is_empty() || skills.iter().all(|s| s.trim().is_empty()) {
        let mut err = ValidationError::new("empty_skills");
        err.message = Some("Skills must contain at least one skill".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RejectionKind;

    fn valid_fields() -> NewCandidate {
        NewCandidate::from_raw(
            "Ada Lovelace".to_string(),
            "1990-12-10",
            "+1 (234) 567-8901",
            "12 Analytical Engine Way".to_string(),
            "BSc Mathematics".to_string(),
            2012,
            8.5,
            "Python, SQL",
        )
        .unwrap()
    }

    fn rejection_kinds(err: AppError) -> Vec<RejectionKind> {
        match err {
            AppError::ValidationError(fields) => fields.into_iter().map(|f| f.kind).collect(),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert!(valid_fields().validate().is_ok());
    }

    #[test]
    fn from_raw_normalizes_phone_and_skills() {
        let fields = valid_fields();
        assert_eq!(fields.contact_number, "12345678901");
        assert_eq!(fields.skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn unparseable_dob_is_invalid_date_format() {
        let err = NewCandidate::from_raw(
            "Ada Lovelace".to_string(),
            "10/12/1990",
            "1234567890",
            "12 Analytical Engine Way".to_string(),
            "BSc Mathematics".to_string(),
            2012,
            8.5,
            "Python",
        )
        .unwrap_err();
        assert_eq!(rejection_kinds(err), vec![RejectionKind::InvalidDateFormat]);
    }

    #[test]
    fn future_dob_is_rejected() {
        let mut fields = valid_fields();
        fields.date_of_birth = NaiveDate::from_ymd_opt(2999, 1, 1).unwrap();
        let kinds = rejection_kinds(fields.validate().unwrap_err().into());
        assert_eq!(kinds, vec![RejectionKind::FutureDate]);
    }

    #[test]
    fn short_phone_is_rejected() {
        let mut fields = valid_fields();
        fields.contact_number = normalize_phone("abc");
        assert_eq!(fields.contact_number, "");
        let kinds = rejection_kinds(fields.validate().unwrap_err().into());
        assert_eq!(kinds, vec![RejectionKind::InvalidPhone]);
    }

    #[test]
    fn empty_skills_are_rejected() {
        let mut fields = valid_fields();
        fields.skills = parse_skills("  ,  ");
        let kinds = rejection_kinds(fields.validate().unwrap_err().into());
        assert_eq!(kinds, vec![RejectionKind::EmptySkills]);
    }

    #[test]
    fn out_of_range_fields_are_aggregated() {
        let mut fields = valid_fields();
        fields.full_name = "A".to_string();
        fields.graduation_year = 1800;
        fields.years_of_experience = 99.0;
        let kinds = rejection_kinds(fields.validate().unwrap_err().into());
        assert_eq!(kinds.len(), 3);
        assert!(kinds.iter().all(|k| *k == RejectionKind::OutOfRange));
    }

    #[test]
    fn filters_match_skill_case_insensitively() {
        let candidate = valid_fields().into_candidate(1, "cv.pdf".into(), "uploads/cv.pdf".into());
        let filters = CandidateFilters {
            skill: Some("python".to_string()),
            ..Default::default()
        };
        assert!(filters.matches(&candidate));

        let filters = CandidateFilters {
            skill: Some("cobol".to_string()),
            ..Default::default()
        };
        assert!(!filters.matches(&candidate));
    }

    #[test]
    fn filters_bound_experience_and_year() {
        let candidate = valid_fields().into_candidate(1, "cv.pdf".into(), "uploads/cv.pdf".into());

        let filters = CandidateFilters {
            min_experience: Some(8.5),
            graduation_year: Some(2012),
            ..Default::default()
        };
        assert!(filters.matches(&candidate));

        let filters = CandidateFilters {
            min_experience: Some(9.0),
            ..Default::default()
        };
        assert!(!filters.matches(&candidate));
    }
}
