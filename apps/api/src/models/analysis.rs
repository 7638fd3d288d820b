//! Structured résumé analysis as produced by the model.
//!
//! Decoding is lenient: the prompt asks the model to use `null` or empty
//! arrays for anything it cannot find, so a `null` or missing key decodes to
//! the empty value instead of failing the whole analysis.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub personal_details: PersonalDetails,
    #[serde(default, deserialize_with = "optional_text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technical_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub soft_skills: Vec<String>,
    /// Expected in 0–10; kept as returned.
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feedback: Feedback,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalDetails {
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub portfolio: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default, deserialize_with = "text")]
    pub company: String,
    #[serde(default, deserialize_with = "text")]
    pub position: String,
    #[serde(default, deserialize_with = "text")]
    pub duration: String,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, deserialize_with = "text")]
    pub institution: String,
    #[serde(default, deserialize_with = "text")]
    pub degree: String,
    #[serde(default, deserialize_with = "text")]
    pub duration: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "text")]
    pub title: String,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default, deserialize_with = "text")]
    pub title: String,
    #[serde(default, deserialize_with = "text")]
    pub issuer: String,
    #[serde(default, deserialize_with = "text")]
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(default, deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub improvements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggested_skills: Vec<String>,
    #[serde(default, deserialize_with = "text")]
    pub overall_summary: String,
}

impl AnalysisResult {
    /// Collapses duplicate project technologies, keeping the first spelling seen.
    pub fn normalize(mut self) -> Self {
        for project in &mut self.projects {
            let mut seen: Vec<String> = Vec::with_capacity(project.technologies.len());
            project.technologies.retain(|tech| {
                let key = tech.trim().to_lowercase();
                if seen.contains(&key) {
                    false
                } else {
                    seen.push(key);
                    true
                }
            });
        }
        self
    }

    pub fn rating_in_range(&self) -> bool {
        self.rating.map_or(true, |r| (0.0..=10.0).contains(&r))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a string or a bare number; models write phones, GPAs and dates
/// both ways. Any other JSON value reads as absent.
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

/// Numbers pass through, numeric strings such as `"8.5"` are parsed, anything
/// else reads as no rating.
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|r| r.is_finite()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_payload_decodes() {
        let value = json!({
            "personalDetails": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": null,
                "linkedin": "https://linkedin.com/in/ada",
                "portfolio": null,
                "location": "London, UK"
            },
            "summary": "Analyst and programmer.",
            "workExperience": [{
                "company": "Analytical Engines Ltd",
                "position": "Programmer",
                "duration": "1842 - 1843",
                "description": "Wrote the first published algorithm."
            }],
            "education": [{
                "institution": "Private tutoring",
                "degree": "Mathematics",
                "duration": "1830 - 1840",
                "gpa": null
            }],
            "projects": [{
                "title": "Note G",
                "description": "Bernoulli numbers on the Analytical Engine",
                "technologies": ["Punched cards"]
            }],
            "certifications": [],
            "technicalSkills": ["Mathematics", "Algorithms"],
            "softSkills": ["Writing"],
            "rating": 9.5,
            "feedback": {
                "strengths": ["Pioneering work"],
                "improvements": ["Add contact phone"],
                "suggestedSkills": ["Rust"],
                "overallSummary": "Exceptional."
            }
        });

        let result: AnalysisResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.personal_details.name.as_deref(), Some("Ada Lovelace"));
        assert!(result.personal_details.phone.is_none());
        assert_eq!(result.work_experience.len(), 1);
        assert_eq!(result.technical_skills, vec!["Mathematics", "Algorithms"]);
        assert_eq!(result.rating, Some(9.5));
        assert_eq!(result.feedback.suggested_skills, vec!["Rust"]);
    }

    #[test]
    fn test_nulls_and_missing_keys_become_empty() {
        let value = json!({
            "personalDetails": null,
            "workExperience": null,
            "projects": [{ "title": "CLI", "description": null, "technologies": null }],
            "feedback": { "strengths": null, "overallSummary": null }
        });

        let result: AnalysisResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.personal_details, PersonalDetails::default());
        assert!(result.work_experience.is_empty());
        assert!(result.education.is_empty());
        assert_eq!(result.projects[0].description, "");
        assert!(result.projects[0].technologies.is_empty());
        assert!(result.feedback.strengths.is_empty());
        assert!(result.rating.is_none());
    }

    #[test]
    fn test_numeric_gpa_is_kept_as_text() {
        let value = json!({ "education": [{ "institution": "MIT", "gpa": 3.9 }] });
        let result: AnalysisResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.education[0].gpa.as_deref(), Some("3.9"));
    }

    #[test]
    fn test_numeric_scalars_are_kept_as_text() {
        let value = json!({
            "personalDetails": { "phone": 5551234567u64, "location": 94107 },
            "summary": 42,
            "certifications": [{ "title": "CKA", "issuer": "CNCF", "date": 2023 }]
        });
        let result: AnalysisResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.personal_details.phone.as_deref(), Some("5551234567"));
        assert_eq!(result.personal_details.location.as_deref(), Some("94107"));
        assert_eq!(result.summary.as_deref(), Some("42"));
        assert_eq!(result.certifications[0].date, "2023");
    }

    #[test]
    fn test_non_text_scalars_read_as_absent() {
        let value = json!({
            "personalDetails": { "email": false, "linkedin": ["a", "b"] },
            "workExperience": [{ "company": { "name": "Acme" }, "position": true }]
        });
        let result: AnalysisResult = serde_json::from_value(value).unwrap();
        assert!(result.personal_details.email.is_none());
        assert!(result.personal_details.linkedin.is_none());
        assert_eq!(result.work_experience[0].company, "");
        assert_eq!(result.work_experience[0].position, "");
    }

    #[test]
    fn test_rating_accepts_numeric_string() {
        let result: AnalysisResult = serde_json::from_value(json!({ "rating": "8.5" })).unwrap();
        assert_eq!(result.rating, Some(8.5));
        let result: AnalysisResult = serde_json::from_value(json!({ "rating": " 7 " })).unwrap();
        assert_eq!(result.rating, Some(7.0));
    }

    #[test]
    fn test_unusable_rating_is_none() {
        for rating in [json!("great"), json!(true), json!([8]), json!("NaN")] {
            let result: AnalysisResult =
                serde_json::from_value(json!({ "rating": rating })).unwrap();
            assert!(result.rating.is_none(), "rating {rating} should be dropped");
        }
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let result = AnalysisResult {
            technical_skills: vec!["Rust".into()],
            ..Default::default()
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("technicalSkills").is_some());
        assert!(value.get("personalDetails").is_some());
        assert!(value["feedback"].get("overallSummary").is_some());
        assert!(value.get("technical_skills").is_none());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let value = json!({ "workExperience": "ten years at Initech" });
        assert!(serde_json::from_value::<AnalysisResult>(value).is_err());
    }

    #[test]
    fn test_normalize_dedups_technologies_preserving_order() {
        let result = AnalysisResult {
            projects: vec![Project {
                title: "Crawler".into(),
                description: String::new(),
                technologies: vec![
                    "Rust".into(),
                    "tokio".into(),
                    "rust".into(),
                    "Postgres".into(),
                    "Tokio ".into(),
                ],
            }],
            ..Default::default()
        }
        .normalize();

        assert_eq!(result.projects[0].technologies, vec!["Rust", "tokio", "Postgres"]);
    }

    #[test]
    fn test_rating_range_check() {
        let mut result = AnalysisResult::default();
        assert!(result.rating_in_range());
        result.rating = Some(10.0);
        assert!(result.rating_in_range());
        result.rating = Some(11.5);
        assert!(!result.rating_in_range());
    }
}
