//! Built-in sample inboxes, one per mode.

use chrono::{DateTime, Utc};

use super::RawMessage;

fn message(id: &str, sender: &str, subject: &str, body: &str, timestamp: &str) -> RawMessage {
    RawMessage {
        id: id.to_string(),
        sender: sender.to_string(),
        subject: subject.to_string(),
        body: body.to_string(),
        timestamp: DateTime::parse_from_rfc3339(timestamp)
            .expect("sample timestamp is valid RFC 3339")
            .with_timezone(&Utc),
    }
}

/// The general-mode inbox: a mixed bag of work, personal, and promotional mail.
pub fn general_inbox() -> Vec<RawMessage> {
    vec![
        message(
            "1",
            "Alex Johnson <alex.j@example.com>",
            "Project Phoenix - Final Review & Next Steps",
            "Hi Team,\n\n\
             Just a reminder that our final review for Project Phoenix is scheduled for this Friday at 2:00 PM. \
             Please come prepared to discuss your sections. I've attached the latest report for your review.\n\n\
             We need to finalize the Q3 roadmap based on the outcomes. Please send me your feedback on the draft \
             proposal by end of day tomorrow.\n\n\
             Let's make this a productive meeting.\n\n\
             Thanks,\nAlex",
            "2023-10-27T10:00:00Z",
        ),
        message(
            "2",
            "Samantha Lee <samantha.lee@example.com>",
            "Re: Your recent order confirmation",
            "Hello,\n\n\
             I'm writing to inquire about the status of my recent order (#A4B8C1). The tracking information \
             hasn't been updated in three days. Could you please provide an update?\n\n\
             The deadline to receive this for a gift is next Wednesday.\n\n\
             Thank you,\nSamantha",
            "2023-10-27T09:30:00Z",
        ),
        message(
            "3",
            "Tech Weekly <newsletter@techweekly.com>",
            "This Week in AI: The latest breakthroughs and trends",
            "Welcome to your weekly dose of AI news!\n\n\
             This week, we cover the rise of generative video models, ethical considerations in new AI \
             regulations, and a deep dive into quantum computing's potential impact on machine learning.\n\n\
             Read more on our website.\n[Link to articles]",
            "2023-10-26T18:00:00Z",
        ),
        message(
            "4",
            "Mom <susan.p@familymail.com>",
            "Dinner on Sunday?",
            "Hi sweetie,\n\n\
             Hope you're having a good week! I was thinking of having a family dinner this Sunday around 6 PM. \
             Your dad wants to try that new Italian place downtown.\n\n\
             Let me know if you can make it so I can book a table.\n\n\
             Love,\nMom",
            "2023-10-26T15:22:00Z",
        ),
        message(
            "5",
            "Cloud Services Inc. <billing@cloudservices.com>",
            "Action Required: Your subscription payment failed",
            "Dear customer,\n\n\
             We were unable to process the payment for your subscription. To avoid service interruption, \
             please update your payment information within the next 48 hours.\n\n\
             Visit your billing dashboard to update your details.\n\n\
             Sincerely,\nThe Cloud Services Team",
            "2023-10-27T11:00:00Z",
        ),
        message(
            "6",
            "HR Department <hr@corporate.com>",
            "Open Enrollment for 2024 Benefits is Now Live",
            "All employees,\n\n\
             This is a reminder that the open enrollment period for your 2024 health benefits has begun. \
             The deadline to make your selections is November 15th.\n\n\
             Please log into the employee portal to review your options and make your elections. There will \
             be a webinar on Tuesday at 10 AM to answer any questions.\n\n\
             Thank you,\nHuman Resources",
            "2023-10-25T09:00:00Z",
        ),
    ]
}

/// The job-search inbox: alerts, recruiter mail, and application updates.
pub fn job_search_inbox() -> Vec<RawMessage> {
    vec![
        message(
            "job-1",
            "TechHire Alerts <alerts@techhire.io>",
            "New openings matching your profile: Senior Rust Engineer",
            "Hi there,\n\n\
             We found 3 new roles matching your saved search \"Rust, remote\":\n\n\
             1. Senior Rust Engineer at Polaris Labs - distributed storage systems, remote (US/EU). \
             Requires 5+ years of systems programming, async Rust, and experience operating production services.\n\
             2. Backend Engineer (Rust) at Ferrous Analytics - data pipelines, hybrid in Berlin.\n\
             3. Platform Engineer at NimbusWorks - infrastructure tooling, fully remote.\n\n\
             View and apply from your dashboard before these close.\n\n\
             The TechHire Team",
            "2024-02-19T08:15:00Z",
        ),
        message(
            "job-2",
            "Maya Chen <maya.chen@polarislabs.com>",
            "Interview invitation: Senior Rust Engineer at Polaris Labs",
            "Hello,\n\n\
             Thank you for applying to the Senior Rust Engineer position at Polaris Labs. We enjoyed reviewing \
             your background and would like to invite you to a technical interview.\n\n\
             We've proposed Thursday, February 29th at 15:00 (your local time) over Zoom. The session will run \
             about 90 minutes and cover systems design plus a pairing exercise in Rust. Please confirm whether \
             the slot works, or suggest two alternatives.\n\n\
             Best regards,\n\
             Maya Chen\nEngineering Manager, Polaris Labs",
            "2024-02-20T16:40:00Z",
        ),
        message(
            "job-3",
            "Careers at Vectorly <no-reply@vectorly.com>",
            "Update on your application",
            "Dear candidate,\n\n\
             Thank you for your interest in the Staff Engineer role at Vectorly and for the time you invested \
             in our process.\n\n\
             After careful consideration, we have decided to move forward with other candidates whose \
             experience more closely matches the team's current needs. We encourage you to apply again in the \
             future as new positions open.\n\n\
             We wish you the best in your search.\n\n\
             Vectorly Recruiting",
            "2024-02-18T11:05:00Z",
        ),
        message(
            "job-4",
            "Daniel Ortiz <dortiz@brightstack.dev>",
            "Your profile came up for a backend role",
            "Hi,\n\n\
             I'm a technical recruiter working with BrightStack, a series-B company building developer tooling \
             for CI pipelines. Your open-source work caught our eye, and I think you'd be a strong match for \
             their Senior Backend Engineer opening (Rust/Go, remote, US time zones).\n\n\
             Would you be open to a 20-minute intro call this week? I'm happy to share the full job description \
             and compensation band up front.\n\n\
             Cheers,\nDaniel Ortiz",
            "2024-02-21T09:30:00Z",
        ),
        message(
            "job-5",
            "Talent Team <talent@nimbusworks.com>",
            "Your offer from NimbusWorks",
            "Congratulations!\n\n\
             We are delighted to extend you an offer for the Platform Engineer position at NimbusWorks. The \
             attached letter details compensation, equity, and benefits. The start date is flexible within the \
             next two months.\n\n\
             Please review and respond by Friday, March 1st. If you'd like to talk anything through, we're \
             happy to set up a call with the hiring manager or the team.\n\n\
             Warmly,\nThe NimbusWorks Talent Team",
            "2024-02-21T17:55:00Z",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_inbox_shape() {
        let inbox = general_inbox();
        assert_eq!(inbox.len(), 6);
        assert_eq!(inbox[0].id, "1");
        assert_eq!(inbox[2].display_name(), "Tech Weekly");
    }

    #[test]
    fn test_job_search_inbox_shape() {
        let inbox = job_search_inbox();
        assert_eq!(inbox.len(), 5);
        assert!(inbox.iter().all(|m| m.id.starts_with("job-")));
    }

    #[test]
    fn test_sample_bodies_are_nonempty() {
        for msg in general_inbox().iter().chain(job_search_inbox().iter()) {
            assert!(!msg.body.trim().is_empty(), "empty body for {}", msg.id);
            assert!(!msg.subject.trim().is_empty(), "empty subject for {}", msg.id);
        }
    }
}
