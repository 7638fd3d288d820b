// Résumé analysis prompt templates.

pub const RESUME_ANALYSIS_SYSTEM: &str = "\
You are an experienced technical recruiter and resume reviewer. \
Extract structured information from resume text and give honest, actionable feedback. \
You MUST respond with a single valid JSON object only — no markdown fences, no explanations. \
Never invent details that are not present in the resume.";

pub const RESUME_ANALYSIS_PROMPT: &str = r#"Analyze the following resume text and extract structured information.

OUTPUT SCHEMA (return exactly this structure):
{
  "personalDetails": {
    "name": "Full Name",
    "email": "email@example.com",
    "phone": "phone number",
    "linkedin": "LinkedIn URL",
    "portfolio": "Portfolio URL",
    "location": "City, State"
  },
  "summary": "Professional summary or objective",
  "workExperience": [
    {
      "company": "Company Name",
      "position": "Job Title",
      "duration": "Start Date - End Date",
      "description": "Job description and achievements"
    }
  ],
  "education": [
    {
      "institution": "University/School Name",
      "degree": "Degree Type and Major",
      "duration": "Start Year - End Year",
      "gpa": "GPA if mentioned"
    }
  ],
  "projects": [
    {
      "title": "Project Name",
      "description": "Project description",
      "technologies": ["Tech1", "Tech2"]
    }
  ],
  "certifications": [
    {
      "title": "Certification Name",
      "issuer": "Issuing Organization",
      "date": "Issue Date"
    }
  ],
  "technicalSkills": ["Skill1", "Skill2"],
  "softSkills": ["Skill1", "Skill2"],
  "rating": 8.5,
  "feedback": {
    "strengths": ["Strength 1", "Strength 2"],
    "improvements": ["Improvement 1", "Improvement 2"],
    "suggestedSkills": ["Skill 1", "Skill 2"],
    "overallSummary": "Overall assessment of the resume"
  }
}

RULES:
- "rating" is a number from 0 to 10 (one decimal place) for the resume's overall quality.
- Keep the order of entries as they appear in the resume.
- Always include every key. If information is not available, use null or an empty array.

RESUME TEXT:
{resume_text}"#;

pub fn build_analysis_prompt(resume_text: &str) -> String {
    RESUME_ANALYSIS_PROMPT.replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_resume_text_once() {
        let prompt = build_analysis_prompt("Jane Doe — Staff Engineer");
        assert!(prompt.ends_with("Jane Doe — Staff Engineer"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_prompt_names_every_top_level_key() {
        for key in [
            "personalDetails",
            "summary",
            "workExperience",
            "education",
            "projects",
            "certifications",
            "technicalSkills",
            "softSkills",
            "rating",
            "feedback",
        ] {
            assert!(RESUME_ANALYSIS_PROMPT.contains(key), "prompt is missing {key}");
        }
    }
}
