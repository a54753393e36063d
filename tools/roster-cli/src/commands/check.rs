//! Load a roster and report what the page would show.

use anyhow::{Context as _, Result};
use roster_page::data::Document;
use roster_page::sections::{is_highlighted, resolve_instructor, student_course_line};

use super::{cli_logger, fetch_client, page_config, CheckArgs};
use crate::context::Context;
use crate::output::source_badge;

/// Run the check command.
pub async fn run(args: CheckArgs, ctx: &Context) -> Result<()> {
    let config = page_config(&args.source, ctx);
    let client = fetch_client(&args.source, ctx, cli_logger(ctx))?;
    let url = client.resolve_url(Some(&config.data_path));

    let document: Document = client
        .fetch_with(args.strategy(), Some(&config.data_path))
        .await
        .with_context(|| format!("Failed to load {}", url))?;

    let highlighted = document.students.iter().filter(|s| is_highlighted(s)).count();
    let assignments: Vec<_> = document
        .courses
        .iter()
        .map(|course| (course, resolve_instructor(course, &document.instructors)))
        .collect();

    if ctx.output.is_json() {
        let courses: Vec<_> = assignments
            .iter()
            .map(|(course, assignment)| {
                serde_json::json!({
                    "title": course.title,
                    "instructor": assignment.name,
                    "fallback": assignment.is_fallback(),
                })
            })
            .collect();
        ctx.output.json(&serde_json::json!({
            "url": url,
            "students": document.students.len(),
            "courses": document.courses.len(),
            "instructors": document.instructors.len(),
            "highlighted": highlighted,
            "assignments": courses,
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Roster: {}", url));
    ctx.output.kv("students", &document.students.len().to_string());
    ctx.output.kv("courses", &document.courses.len().to_string());
    ctx.output.kv("instructors", &document.instructors.len().to_string());
    ctx.output.kv("highlighted", &highlighted.to_string());

    ctx.output.header("Student → Course → Course Description");
    for student in &document.students {
        ctx.output
            .list_item(&student_course_line(student, &document.courses));
    }

    ctx.output.header("Course → Instructor");
    for (course, assignment) in &assignments {
        ctx.output.list_item(&format!(
            "{} → {} [{}]",
            course.title_text(),
            assignment.name,
            source_badge(assignment.source)
        ));
    }

    let fallbacks = assignments.iter().filter(|(_, a)| a.is_fallback()).count();
    if fallbacks > 0 {
        ctx.output.warn(&format!(
            "{} of {} courses have no instructor with a matching subject",
            fallbacks,
            assignments.len()
        ));
    }

    Ok(())
}
