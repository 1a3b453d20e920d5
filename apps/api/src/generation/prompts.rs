// Prompt template for résumé + cover letter generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{LANGUAGE_DIRECTIVE, MARKDOWN_JSON_OUTPUT, PERSONA};
use crate::models::generation::GenerationRequest;

/// Generation prompt template.
/// Placeholders: {persona}, {language_directive}, {output_directive},
///               {job_description}, {current_resume}, {tone}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"<PROMPT_START>

<PERSONA>
{persona}
</PERSONA>

<CONTEXT>
You will be provided with a job description, a candidate's current resume, and a desired tone. Your task is to generate two distinct documents: a completely rewritten, tailored resume and a compelling, personalized cover letter. The final output must be a single, valid JSON object.
</CONTEXT>

<INPUTS>
  <JOB_DESCRIPTION>
  ---
{job_description}
  ---
  </JOB_DESCRIPTION>

  <CURRENT_RESUME>
  ---
{current_resume}
  ---
  </CURRENT_RESUME>

  <TONE>
{tone}
  </TONE>
</INPUTS>

<INSTRUCTIONS>
Follow these steps precisely:

{language_directive}

**Part 1: Analysis & Keyword Extraction**
1.  Deeply analyze the <JOB_DESCRIPTION> to identify the top 5-7 core requirements, skills (hard and soft), and keywords. Note the company's values or mission if mentioned.
2.  Review the <CURRENT_RESUME> to understand the candidate's experience, skills, and past achievements.

**Part 2: Tailored Resume Generation**
1.  **Contact Information, Education, Certifications:** Retain these sections from the <CURRENT_RESUME> but ensure formatting is clean and professional.
2.  **Professional Summary:** Write a new, powerful 3-4 sentence summary. It must be tailored directly to the target role, immediately highlighting the candidate's value proposition by blending their top skills and experience with the key requirements from the <JOB_DESCRIPTION>.
3.  **Skills Section:** Create a "Skills" section that prioritizes keywords identified during your analysis. Categorize them if appropriate (e.g., "Technical Skills," "Languages," "Software").
4.  **Professional Experience:** This is the most critical section.
    * For each relevant position from the <CURRENT_RESUME>, rewrite the bullet points to directly address the responsibilities and qualifications in the <JOB_DESCRIPTION>.
    * Start every bullet point with a strong action verb (e.g., "Orchestrated," "Engineered," "Accelerated," "Quantified").
    * Integrate the keywords you extracted naturally into these bullet points.
    * Quantify achievements wherever possible using metrics, percentages, or dollar amounts (e.g., "Increased efficiency by 15%," "Managed a $500k project budget"). Focus on results and impact, not just duties.
    * Ensure the most relevant experience is emphasized and detailed.

**Part 3: Compelling Cover Letter Generation**
1.  **Format:** Structure the cover letter into 3-4 concise paragraphs. It must be engaging and professional, reflecting the specified <TONE>.
2.  **Opening (Paragraph 1):** State the specific job title being applied for and where it was seen. Start with a compelling hook that immediately grabs the reader's attention and expresses genuine enthusiasm for the role and the company.
3.  **Body (Paragraphs 2-3):** Do NOT simply list skills from the resume. Instead, create a narrative. Select 2-3 key requirements from the <JOB_DESCRIPTION> and connect them to specific, quantifiable achievements from the candidate's experience. Tell a brief story about how they successfully applied those skills to solve a problem or achieve a result. This demonstrates proof of their ability.
4.  **Closing (Final Paragraph):** Reiterate strong interest in the company and the role. Confidently state how their contributions can benefit the company. Include a clear call to action, such as "I am eager to discuss how my experience in [Specific Skill] can help your team achieve its goals."

{output_directive}
</INSTRUCTIONS>

<OUTPUT_FORMAT>
{
  "resume": "Your full tailored resume content, formatted with Markdown, goes here.",
  "coverLetter": "Your full compelling cover letter content, formatted with Markdown, goes here."
}
</OUTPUT_FORMAT>

<PROMPT_END>
"#;

/// Builds the generation prompt. Deterministic: equal requests give equal prompts.
///
/// User fields are inserted verbatim in a single pass, so placeholder-looking
/// text inside them is never expanded.
pub fn build_generation_prompt(request: &GenerationRequest) -> String {
    fill_template(
        GENERATION_PROMPT_TEMPLATE,
        &[
            ("persona", PERSONA),
            ("language_directive", LANGUAGE_DIRECTIVE),
            ("output_directive", MARKDOWN_JSON_OUTPUT),
            ("job_description", &request.job_description),
            ("current_resume", &request.current_resume),
            ("tone", &request.tone),
        ],
    )
}

/// Replaces `{key}` placeholders found in `template`. Unknown `{...}` spans
/// (like the JSON sample) are copied through untouched.
fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, close))
        });
        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
