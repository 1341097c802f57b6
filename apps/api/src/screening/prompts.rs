// LLM prompt text for resume scoring.

/// Output contract the model is asked to follow. The reply is still treated as
/// untrusted text; see `recovery`.
const ANALYSIS_RULES: &str = r#"Return exactly this format with quotes around ALL values:
{
    "score": 80,
    "skills": {
        "skill1": "skill name",
        "skill2": "skill name",
        "skill3": "skill name"
    },
    "summary": "brief summary"
}

Rules:
- Valid JSON only, no extra text
- Score: 1-100 integer for job match
- Skills: 3 most relevant skills from resume
- Summary: max 80 characters
- Be very hard in your score evaluation, senior candidates should get a higher score for relevant experience"#;

/// Builds the scoring prompt. Resume and job description are embedded verbatim.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        "Analyze resume for job. Return ONLY valid JSON with quotes:\n\n\
         Resume: {resume_text}\n\
         Job: {job_description}\n\n\
         {ANALYSIS_RULES}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_inputs_verbatim() {
        let resume = "Led {platform} team; 8 yrs Rust";
        let job = "Staff engineer, \"distributed\" systems";
        let prompt = build_analysis_prompt(resume, job);
        assert!(prompt.contains("Resume: Led {platform} team; 8 yrs Rust\n"));
        assert!(prompt.contains("Job: Staff engineer, \"distributed\" systems\n"));
    }

    #[test]
    fn test_prompt_names_the_three_keys() {
        let prompt = build_analysis_prompt("r", "j");
        for key in ["\"score\"", "\"skills\"", "\"summary\"", "\"skill3\""] {
            assert!(prompt.contains(key), "prompt is missing {key}");
        }
        assert!(prompt.contains("max 80 characters"));
    }
}
