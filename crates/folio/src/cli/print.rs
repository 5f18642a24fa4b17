use colored::Colorize;
use folioapp::commands::{CmdMessage, MessageLevel};
use folioapp::date::{self, Date};
use folioapp::model::{GalleryItem, PostDetail, PostEntry, Profile, Project};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const SLUG_WIDTH: usize = 28;
const DATE_WIDTH: usize = 18;
const DRAFT_MARKER: &str = "✎";
const FEATURED_MARKER: &str = "★";

pub(super) fn print_messages(out: &mut dyn Write, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub(super) fn print_error(out: &mut dyn Write, err: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {}", err).red())
}

fn display_date(date: Option<Date>) -> String {
    date.map(date::format).unwrap_or_default()
}

/// One list line: marker, slug, title, date right-aligned.
fn print_row(
    out: &mut dyn Write,
    marker: &str,
    slug: &str,
    title: &str,
    date: Option<Date>,
) -> io::Result<()> {
    let prefix = format!("  {} ", if marker.is_empty() { " " } else { marker });
    let slug_col = truncate_to_width(slug, SLUG_WIDTH);
    let slug_pad = SLUG_WIDTH.saturating_sub(slug_col.width());

    let fixed = prefix.width() + SLUG_WIDTH + 2 + DATE_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let title_col = truncate_to_width(title, available);
    let title_pad = available.saturating_sub(title_col.width());

    writeln!(
        out,
        "{}{}{}  {}{}{}",
        prefix.yellow(),
        slug_col.cyan(),
        " ".repeat(slug_pad),
        title_col,
        " ".repeat(title_pad),
        format!("{:>width$}", display_date(date), width = DATE_WIDTH).dimmed()
    )
}

pub(super) fn print_posts(out: &mut dyn Write, posts: &[PostEntry]) -> io::Result<()> {
    if posts.is_empty() {
        return writeln!(out, "No posts found.");
    }
    for post in posts {
        let marker = if post.published { "" } else { DRAFT_MARKER };
        print_row(out, marker, &post.slug, &post.title, post.date)?;
    }
    Ok(())
}

pub(super) fn print_projects(out: &mut dyn Write, projects: &[Project]) -> io::Result<()> {
    if projects.is_empty() {
        return writeln!(out, "No projects found.");
    }
    for project in projects {
        let marker = if project.featured { FEATURED_MARKER } else { "" };
        print_row(out, marker, &project.slug, &project.title, project.date)?;
    }
    Ok(())
}

pub(super) fn print_gallery(out: &mut dyn Write, items: &[GalleryItem]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "No gallery items found.");
    }
    for item in items {
        print_row(out, "", &item.slug, &item.title, item.date)?;
    }
    Ok(())
}

fn print_heading(out: &mut dyn Write, title: &str, slug: &str) -> io::Result<()> {
    writeln!(out, "{} {}", title.bold(), format!("({})", slug).dimmed())?;
    writeln!(out, "--------------------------------")
}

fn print_field(out: &mut dyn Write, label: &str, value: &str) -> io::Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    writeln!(out, "{:<12}{}", format!("{}:", label).dimmed(), value)
}

pub(super) fn print_post(
    out: &mut dyn Write,
    entry: &PostEntry,
    detail: Option<&PostDetail>,
) -> io::Result<()> {
    print_heading(out, &entry.title, &entry.slug)?;
    print_field(out, "Date", &display_date(entry.date))?;
    print_field(out, "Status", if entry.published { "published" } else { "draft" })?;
    print_field(out, "Tags", &entry.tags.join(", "))?;
    print_field(out, "Excerpt", &entry.excerpt)?;
    if let Some(detail) = detail {
        writeln!(out)?;
        writeln!(out, "{}", detail.content)?;
    }
    Ok(())
}

pub(super) fn print_project(out: &mut dyn Write, project: &Project) -> io::Result<()> {
    print_heading(out, &project.title, &project.slug)?;
    print_field(out, "Date", &display_date(project.date))?;
    if project.featured {
        print_field(out, "Featured", "yes")?;
    }
    print_field(out, "Tech", &project.tech.join(", "))?;
    print_field(out, "URL", project.url.as_deref().unwrap_or_default())?;
    print_field(out, "Repo", project.repo.as_deref().unwrap_or_default())?;
    print_field(out, "Image", project.image.as_deref().unwrap_or_default())?;
    if !project.description.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", project.description)?;
    }
    Ok(())
}

pub(super) fn print_gallery_item(out: &mut dyn Write, item: &GalleryItem) -> io::Result<()> {
    print_heading(out, &item.title, &item.slug)?;
    print_field(out, "Date", &display_date(item.date))?;
    print_field(out, "Image", &item.image)?;
    print_field(out, "Caption", &item.caption)
}

pub(super) fn print_profile(out: &mut dyn Write, profile: &Profile) -> io::Result<()> {
    if *profile == Profile::default() {
        return writeln!(out, "Profile is empty.");
    }
    writeln!(out, "{}", profile.name.bold())?;
    print_field(out, "Tagline", &profile.tagline)?;
    print_field(out, "Email", &profile.email)?;
    print_field(out, "Location", &profile.location)?;
    print_field(out, "Avatar", profile.avatar.as_deref().unwrap_or_default())?;
    for link in &profile.links {
        print_field(out, &link.label, &link.url)?;
    }
    if !profile.bio.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", profile.bio)?;
    }
    Ok(())
}

pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly-10", 10), "exactly-10");
        assert_eq!(truncate_to_width("a much longer title", 8), "a much …");
        assert_eq!(truncate_to_width("日本語のタイトル", 7), "日本語…");
    }

    #[test]
    fn empty_lists_say_so() {
        assert_eq!(render(|out| print_posts(out, &[])), "No posts found.\n");
        assert_eq!(render(|out| print_gallery(out, &[])), "No gallery items found.\n");
    }

    #[test]
    fn post_rows_mark_drafts_and_format_dates() {
        let post = PostEntry {
            id: "0".repeat(32),
            slug: "hello-world".into(),
            title: "Hello World".into(),
            date: Date::from_ymd(2024, 3, 5),
            excerpt: String::new(),
            tags: vec![],
            published: false,
        };
        let output = render(|out| print_posts(out, &[post]));
        assert!(output.contains(DRAFT_MARKER));
        assert!(output.contains("hello-world"));
        assert!(output.trim_end().ends_with("March 5, 2024"));
        assert_eq!(output.trim_end_matches('\n').width(), LINE_WIDTH);
    }

    #[test]
    fn messages_render_one_per_line() {
        let messages = vec![CmdMessage::info("one"), CmdMessage::success("two")];
        assert_eq!(render(|out| print_messages(out, &messages)), "one\ntwo\n");
    }
}
