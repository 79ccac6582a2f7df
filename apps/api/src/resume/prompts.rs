// LLM prompt constants for profile extraction.

/// System prompt for profile extraction — enforces JSON-only output.
pub const PROFILE_SYSTEM: &str = "You are an expert resume analyst. \
    Extract structured information from resume text. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Profile extraction prompt template. Replace `{resume_text}` before sending.
pub const PROFILE_PROMPT_TEMPLATE: &str = r#"Extract the following information from the resume below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "technical_skills": [],
  "soft_skills": [],
  "years_experience": 0.0,
  "job_titles": [],
  "education": [],
  "certifications": []
}

Rules:
- "technical_skills": languages, frameworks, tools, platforms
- "soft_skills": communication, leadership, collaboration and similar
- "years_experience": total professional experience as a number (may be fractional)
- "job_titles": titles actually held, most recent first
- "education": one entry per degree or program
- "certifications": one entry per certification, empty list if none

RESUME TEXT:
{resume_text}"#;
