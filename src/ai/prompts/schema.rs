//! Declarative response schemas sent alongside each prompt. Field names,
//! types, and descriptions define the exact wire shape the model must return.

use serde_json::{json, Value};

fn event_schema(description: &str) -> Value {
    json!({
        "type": "OBJECT",
        "description": description,
        "properties": {
            "title": { "type": "STRING", "description": "Title of the event." },
            "date": { "type": "STRING", "description": "Date of the event in YYYY-MM-DD format." },
            "time": { "type": "STRING", "description": "Time of the event in HH:MM format (24-hour clock)." },
            "description": { "type": "STRING", "description": "A brief description of the event." },
        },
    })
}

/// Response schema for general-mode analysis.
pub fn general_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A concise, one-sentence summary of the email's main point.",
            },
            "category": {
                "type": "STRING",
                "description": "Categorize into one of: Work, Personal, Promotions, Newsletters, Urgent.",
            },
            "priority": {
                "type": "STRING",
                "description": "Assign priority based on urgency and content: High, Medium, or Low.",
            },
            "event": event_schema("Extract event details if any are mentioned. If no event, omit this field."),
            "tasks": {
                "type": "ARRAY",
                "description": "A list of actionable tasks or to-do items from the email. If none, return an empty array.",
                "items": { "type": "STRING" },
            },
            "suggestedActions": {
                "type": "ARRAY",
                "description": "Suggest 2-3 relevant one-click actions based on the email content (e.g., \"Confirm attendance\", \"Archive\", \"View Order\"). If none, return an empty array.",
                "items": { "type": "STRING" },
            },
        },
        "required": ["summary", "category", "priority", "tasks", "suggestedActions"],
    })
}

/// Response schema for job-search-mode analysis.
pub fn job_search_response_schema() -> Value {
    let mut schema = json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A concise, one-sentence summary of the email's main point.",
            },
            "category": {
                "type": "STRING",
                "description": "Categorize into one of: Job Alerts, Recruiter Outreach, Application Updates, Networking, Other.",
            },
            "priority": {
                "type": "STRING",
                "description": "Assign priority based on urgency and content: High, Medium, or Low.",
            },
            "applicationStatus": {
                "type": "STRING",
                "description": "If this is an update on an application: Interview Request, Rejection, Offer, or Needs Action. Otherwise omit.",
            },
            "relevanceScore": {
                "type": "INTEGER",
                "description": "How well the described role matches the candidate's résumé, 0-100. Omit when no résumé or no role.",
            },
            "goodFit": {
                "type": "BOOLEAN",
                "description": "Whether the candidate should pursue this role. Omit when no résumé or no role.",
            },
            "tailoredResumePoints": {
                "type": "ARRAY",
                "description": "Résumé bullet points reworded to match the role's requirements. If none, return an empty array.",
                "items": { "type": "STRING" },
            },
            "coverLetterDraft": {
                "type": "STRING",
                "description": "A short cover letter draft for a good-fit role. Omit otherwise.",
            },
            "companyResearch": {
                "type": "STRING",
                "description": "Brief background on the company discussed. Omit when no specific company.",
            },
            "tasks": {
                "type": "ARRAY",
                "description": "A list of actionable tasks or to-do items from the email. If none, return an empty array.",
                "items": { "type": "STRING" },
            },
            "suggestedActions": {
                "type": "ARRAY",
                "description": "Suggest 2-3 relevant one-click actions based on the email content. If none, return an empty array.",
                "items": { "type": "STRING" },
            },
        },
        "required": ["summary", "category", "priority", "tasks", "suggestedActions"],
    });

    let mut interview = event_schema(
        "Extract interview details if an interview is proposed or scheduled. Otherwise omit this field.",
    );
    interview["properties"]["platform"] = json!({
        "type": "STRING",
        "description": "Meeting platform if stated (e.g., Zoom, Google Meet).",
    });
    schema["properties"]["interview"] = interview;

    schema
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property_names(schema: &Value) -> Vec<String> {
        schema["properties"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn test_general_schema_required_fields() {
        let schema = general_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            ["summary", "category", "priority", "tasks", "suggestedActions"]
        );
    }

    #[test]
    fn test_general_schema_has_event_but_no_job_fields() {
        let schema = general_response_schema();
        let names = property_names(&schema);
        assert!(names.contains(&"event".to_string()));
        assert!(!names.contains(&"relevanceScore".to_string()));
        assert!(!names.contains(&"coverLetterDraft".to_string()));
    }

    #[test]
    fn test_job_schema_has_job_fields_but_no_event() {
        let schema = job_search_response_schema();
        let names = property_names(&schema);
        for field in [
            "applicationStatus",
            "relevanceScore",
            "goodFit",
            "tailoredResumePoints",
            "coverLetterDraft",
            "interview",
            "companyResearch",
        ] {
            assert!(names.contains(&field.to_string()), "missing {field}");
        }
        assert!(!names.contains(&"event".to_string()));
    }

    #[test]
    fn test_job_schema_interview_has_platform() {
        let schema = job_search_response_schema();
        let interview_props = &schema["properties"]["interview"]["properties"];
        assert!(interview_props["platform"].is_object());
        assert!(interview_props["date"].is_object());
    }

    #[test]
    fn test_schemas_share_required_set() {
        assert_eq!(
            general_response_schema()["required"],
            job_search_response_schema()["required"]
        );
    }
}
