use crate::inbox::RawMessage;

/// Marker embedded in job-search prompts when the caller supplies no résumé.
pub const NO_RESUME_MARKER: &str = "No résumé provided.";

/// Generate a prompt for analyzing a general-mode email.
pub fn general_analysis_prompt(message: &RawMessage) -> String {
    format!(
        r#"Analyze the following email and provide a structured JSON response.

From: {sender}
Subject: {subject}
Body:
{body}

Your task is to act as an expert email assistant. Analyze the content, identify the key information, and format it according to the provided JSON schema.
- Summarize the core message concisely.
- Categorize the email accurately into one of: Work, Personal, Promotions, Newsletters, Urgent.
- Determine its priority level.
- Extract any specific event details (date, time, title).
- List out any clear tasks for the recipient.
- Suggest logical next actions.
If a field like 'event' is not present in the email, do not include the key in the response."#,
        sender = message.sender,
        subject = message.subject,
        body = message.body,
    )
}

/// Generate a prompt for analyzing a job-search email.
///
/// Embeds the candidate's résumé when available; otherwise an explicit
/// no-résumé marker so the model knows not to score relevance.
pub fn job_search_analysis_prompt(message: &RawMessage, resume: Option<&str>) -> String {
    let resume_text = resume.unwrap_or(NO_RESUME_MARKER);

    format!(
        r#"Analyze the following job-search email and provide a structured JSON response.

From: {sender}
Subject: {subject}
Body:
{body}

Candidate résumé:
{resume_text}

Your task is to act as an expert job-search assistant. Analyze the content against the candidate's résumé and format the result according to the provided JSON schema.
- Summarize the core message concisely.
- Categorize the email into one of: Job Alerts, Recruiter Outreach, Application Updates, Networking, Other.
- Determine its priority level.
- When the email is an update on an application, classify applicationStatus as one of: Interview Request, Rejection, Offer, Needs Action.
- When a résumé is provided and the email describes a role, score relevanceScore from 0 to 100 against the résumé and set goodFit accordingly.
- For a promising role, write 2-4 tailoredResumePoints: résumé bullet points reworded to match the role's requirements.
- For a good fit, draft a short coverLetterDraft addressed to the company.
- When an interview is proposed or scheduled, extract the interview details (title, date, time, description, platform).
- When a specific company is discussed, provide brief companyResearch: what the company does and why it matters for this candidate.
- List out any clear tasks for the recipient.
- Suggest logical next actions.
If a field does not apply to this email, do not include the key in the response."#,
        sender = message.sender,
        subject = message.subject,
        body = message.body,
        resume_text = resume_text,
    )
}
