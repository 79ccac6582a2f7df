// All LLM prompt constants for the content generators.
// Placeholders are `{name}` and are filled with `str::replace` before sending.

/// Job-fit analysis. Replace `{listing_json}`, `{candidate_json}`.
pub const JOB_FIT_PROMPT_TEMPLATE: &str = r#"Analyze this job opportunity against the candidate profile and provide:
1. Match score (0-100) with detailed breakdown
2. Key strengths and weaknesses
3. Missing qualifications
4. Salary benchmarking (current market rates)
5. Company culture insights
6. Customized application strategy

Format your response as markdown with these sections:

### Match Analysis
- Overall Score: [score]/100
- Skills Match: [x]/[y] skills matched
- Experience: [analysis]

### Strengths
- [List candidate strengths for this role]

### Weaknesses
- [List potential gaps]

### Salary Insights
- [Market range analysis]

### Company Fit
- [Culture analysis]

### Application Strategy
- [Customized tips]

Job Details:
{listing_json}

Candidate Profile:
{candidate_json}"#;

/// Resume optimization. Replace `{job_description}`, `{resume_text}`.
pub const OPTIMIZE_RESUME_PROMPT_TEMPLATE: &str = r#"Optimize this resume for the following job description. Provide:
1. ATS-optimized version with relevant keywords
2. Improved formatting and structure
3. Enhanced bullet points with quantifiable achievements
4. Skills section reordered by relevance

Return the optimized resume in markdown format.

Job Description:
{job_description}

Original Resume:
{resume_text}"#;

/// ATS keyword extraction. Replace `{job_description}`.
/// The reply must be a bare comma-separated list; see `parse_keyword_reply`.
pub const ATS_KEYWORDS_PROMPT_TEMPLATE: &str = r#"Extract the most important keywords for Applicant Tracking Systems (ATS)
from this job description. Return only a comma-separated list.

Job Description:
{job_description}"#;

/// Cover letter. Replace `{job_description}`, `{company_name}`, `{resume_text}`.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional cover letter for this job application.
Tailor it specifically to the company and job description.
Include:
1. Personalized opening
2. 3-4 key qualifications
3. Specific examples from resume
4. Enthusiastic closing

Job Description:
{job_description}

Company Name:
{company_name}

Candidate Resume:
{resume_text}"#;

/// Interview questions. Replace `{job_description}`.
pub const INTERVIEW_QUESTIONS_PROMPT_TEMPLATE: &str = r#"Generate 10 likely interview questions for this job,
including 5 technical and 5 behavioral questions.
Format as a numbered list with question type.

Job Description:
{job_description}"#;

/// Mock interview. Replace `{questions}`, `{resume_text}`.
pub const MOCK_INTERVIEW_PROMPT_TEMPLATE: &str = r#"Conduct a mock interview with the candidate.
Ask one question at a time and evaluate responses.
Provide constructive feedback after each answer.

Questions:
{questions}

Candidate Resume:
{resume_text}

Start with the first question."#;

/// Company research. Replace `{company_name}`.
pub const COMPANY_RESEARCH_PROMPT_TEMPLATE: &str = r#"Create a comprehensive research report about this company
to help a job candidate prepare for interviews.
Include:
1. Company overview
2. Recent news
3. Company culture
4. Interview tips specific to this company

Company Name:
{company_name}"#;

/// Connection suggestions. Replace `{company_name}`, `{job_title}`.
pub const CONNECTIONS_PROMPT_TEMPLATE: &str = r#"Suggest types of LinkedIn connections to make when applying
to this company for this position. Include:
1. Relevant job titles to connect with
2. Recommended outreach approach
3. Icebreaker message templates

Company: {company_name}
Position: {job_title}"#;

/// Outreach message. Replace `{connection_type}`, `{company_name}`.
pub const OUTREACH_PROMPT_TEMPLATE: &str = r#"Create a personalized LinkedIn outreach message template
for connecting with {connection_type} at {company_name}.
Make it professional but friendly.
Include:
1. Personalized greeting
2. Reason for connecting
3. Specific compliment or commonality
4. Clear call-to-action

Return only the message content."#;

/// Industry trends report. Replace `{industry}`, `{location}`.
pub const INDUSTRY_TRENDS_PROMPT_TEMPLATE: &str = r#"Provide a detailed industry trends report for {industry} professionals in {location}.
Include these sections with specific data:

### Salary Trends
- Entry-level: [range]
- Mid-career: [range]
- Senior-level: [range]
- Factors affecting compensation

### In-Demand Skills
1. Technical skills:
   - [List 5-7 skills]
2. Soft skills:
   - [List 3-5 skills]

### Top Companies
- [List 5-7 top employers]
- Notable perks/benefits

### Emerging Technologies
- [List 3-5 emerging tech]
- Adoption trends

### Hiring Trends
- Best times to apply
- Growth projections
- Remote work availability

Format the response in markdown with clear headings."#;
