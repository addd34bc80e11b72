use anyhow::Context;
use clap::Parser;
use mailsense::ai::{Enricher, GeminiClient};
use mailsense::app::Assistant;
use mailsense::config::Config;
use mailsense::inbox::MessageStore;
use mailsense::model::{
    CategoryFilter, EnrichedMessage, Mode, ModeDetails, ProcessingStatus, ResumeText,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// AI email assistant: enriches the built-in inbox through Gemini and prints
/// the resulting list + detail view.
#[derive(Parser)]
#[command(name = "mailsense", version, about)]
struct Args {
    /// Run the job-search pipeline instead of the general assistant.
    #[arg(long)]
    job_search: bool,

    /// Path to a plain-text résumé (unblocks job-search mode).
    #[arg(long, value_name = "FILE")]
    resume: Option<std::path::PathBuf>,

    /// Gemini model override.
    #[arg(long)]
    model: Option<String>,

    /// Show only messages in this category (e.g. "Newsletters").
    #[arg(long)]
    category: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mailsense=info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let model = args.model.unwrap_or(config.model);
    let enricher = Enricher::new(GeminiClient::new(config.api_key).with_model(&model));

    let mut assistant = Assistant::new(MessageStore::samples());

    let mode = if args.job_search {
        Mode::JobSearch
    } else {
        Mode::General
    };
    let mut request = assistant.set_mode(mode);

    if let Some(path) = &args.resume {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading résumé from {}", path.display()))?;
        let resume = ResumeText::new(text)?;
        request = assistant.set_resume(resume);
    }

    let Some(request) = request else {
        println!("Job-search mode needs a résumé. Pass one with --resume <FILE>.");
        return Ok(());
    };

    let outcome = request.run(&enricher).await;
    assistant.apply(outcome);

    if let Some(label) = &args.category {
        let category = assistant
            .categories()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label))
            .with_context(|| format!("unknown category {label:?} in {mode} mode"))?;
        assistant.select_category(CategoryFilter::Only(category));
    }

    match assistant.status() {
        ProcessingStatus::Done => print_view(&assistant),
        ProcessingStatus::Error => {
            eprintln!("Could not process any messages. See the log above, then retry.");
            std::process::exit(1);
        }
        status => tracing::warn!("Unexpected terminal status: {:?}", status),
    }

    Ok(())
}

fn print_view(assistant: &Assistant) {
    let visible = assistant.visible();
    let focused_id = assistant.focused().map(EnrichedMessage::id);

    println!("Inbox ({} messages)", visible.len());
    for message in &visible {
        let marker = if Some(message.id()) == focused_id {
            '>'
        } else {
            ' '
        };
        println!(
            "{marker} {:<6} {:<20} {:<8} {:<18} {}",
            message.id(),
            message.message.display_name(),
            format!("{:?}", message.enrichment.priority),
            message.category().label(),
            message.enrichment.summary,
        );
    }

    if let Some(focused) = assistant.focused() {
        print_detail(focused);
    }
}

fn print_detail(message: &EnrichedMessage) {
    let enrichment = &message.enrichment;

    println!("\n=== {} ===", message.message.subject);
    println!("From: {}", message.message.sender);
    println!(
        "Category: {}   Priority: {:?}",
        enrichment.category, enrichment.priority
    );
    println!("Summary: {}", enrichment.summary);

    if !enrichment.tasks.is_empty() {
        println!("Tasks:");
        for task in &enrichment.tasks {
            println!("  - {task}");
        }
    }
    if !enrichment.suggested_actions.is_empty() {
        println!("Suggested actions:");
        for action in &enrichment.suggested_actions {
            println!("  - {action}");
        }
    }

    match &enrichment.details {
        ModeDetails::General { event: Some(event) } => {
            println!(
                "Event: {} on {} at {}: {}",
                event.title, event.date, event.time, event.description
            );
        }
        ModeDetails::General { event: None } => {}
        ModeDetails::Job(details) => {
            if let Some(status) = details.application_status {
                println!("Application status: {status:?}");
            }
            if let Some(score) = details.relevance_score {
                let fit = match details.good_fit {
                    Some(true) => " (good fit)",
                    Some(false) => " (not a fit)",
                    None => "",
                };
                println!("Relevance: {score}/100{fit}");
            }
            if !details.tailored_resume_points.is_empty() {
                println!("Tailored résumé points:");
                for point in &details.tailored_resume_points {
                    println!("  - {point}");
                }
            }
            if let Some(interview) = &details.interview {
                let platform = interview
                    .platform
                    .as_deref()
                    .map(|p| format!(" over {p}"))
                    .unwrap_or_default();
                println!(
                    "Interview: {} on {} at {}{platform}",
                    interview.title, interview.date, interview.time
                );
            }
            if let Some(research) = &details.company_research {
                println!("Company research: {research}");
            }
            if let Some(draft) = &details.cover_letter_draft {
                println!("Cover letter draft:\n{draft}");
            }
        }
    }
}
