//! Menu-driven editing session.
//!
//! Each collection gets the same sub-menu; what differs per kind (which questions to ask,
//! how to print) lives in [`Prompted`]. Failed operations are reported and the menu
//! continues. Closing the input ends the session.

use super::print::{
    print_error, print_gallery, print_gallery_item, print_messages, print_post, print_posts,
    print_profile, print_project, print_projects,
};
use super::session::{is_yes, Session};
use folioapp::api::FolioApi;
use folioapp::commands::get::ListFilter;
use folioapp::commands::Item;
use folioapp::date::Date;
use folioapp::kinds::{Blog, ContentKind, Gallery, Projects};
use folioapp::model::{
    GalleryDraft, GalleryPatch, PostDraft, PostPatch, ProfilePatch, ProjectDraft, ProjectPatch,
};
use folioapp::store::backend::StorageBackend;
use std::io::{self, BufRead, Write};

/// Per-kind questions and output for the collection menu.
trait Prompted: ContentKind + Sized {
    const LABEL: &'static str;

    fn ask_draft<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<Self::Draft>;

    fn ask_patch<R: BufRead, W: Write>(
        session: &mut Session<R, W>,
        item: &Item<Self>,
    ) -> io::Result<Self::Patch>;

    fn print_list(out: &mut dyn Write, entries: &[Self::Entry]) -> io::Result<()>;

    fn print_item(out: &mut dyn Write, item: &Item<Self>) -> io::Result<()>;
}

/// Keeps asking until the answer is blank or a valid date.
fn ask_date<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    label: &str,
) -> io::Result<Option<Date>> {
    loop {
        let answer = session.ask(label)?;
        if answer.is_empty() {
            return Ok(None);
        }
        match folioapp::date::parse(&answer) {
            Ok(date) => return Ok(Some(date)),
            Err(err) => print_error(session.output(), &err)?,
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

impl Prompted for Blog {
    const LABEL: &'static str = "Blog posts";

    fn ask_draft<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<PostDraft> {
        Ok(PostDraft {
            title: session.ask("Title")?,
            content: session.ask_text("Content")?,
            excerpt: session.ask_optional("Excerpt (blank to derive)")?,
            tags: split_list(&session.ask("Tags (comma separated)")?),
            date: ask_date(session, "Date (blank for today)")?,
            published: !session.confirm("Save as draft?")?,
        })
    }

    fn ask_patch<R: BufRead, W: Write>(
        session: &mut Session<R, W>,
        item: &Item<Self>,
    ) -> io::Result<PostPatch> {
        let entry = &item.entry;
        let title = session.ask_change("Title", &entry.title)?;
        let content = if session.confirm("Replace content?")? {
            Some(session.ask_text("Content")?)
        } else {
            None
        };
        let excerpt = session.ask_change("Excerpt (- to derive)", &entry.excerpt)?;
        let tags = session
            .ask_change("Tags", &entry.tags.join(", "))?
            .map(|raw| split_list(&raw));
        let published = session
            .ask_change("Published (y/n)", if entry.published { "y" } else { "n" })?
            .map(|answer| is_yes(&answer));
        Ok(PostPatch {
            title,
            content,
            excerpt,
            tags,
            date: None,
            published,
        })
    }

    fn print_list(out: &mut dyn Write, entries: &[Self::Entry]) -> io::Result<()> {
        print_posts(out, entries)
    }

    fn print_item(out: &mut dyn Write, item: &Item<Self>) -> io::Result<()> {
        print_post(out, &item.entry, item.detail.as_ref())
    }
}

impl Prompted for Projects {
    const LABEL: &'static str = "Projects";

    fn ask_draft<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<ProjectDraft> {
        Ok(ProjectDraft {
            title: session.ask("Title")?,
            description: session.ask("Description")?,
            tech: split_list(&session.ask("Tech (comma separated)")?),
            url: session.ask_optional("URL")?,
            repo: session.ask_optional("Repository")?,
            image: session.ask_optional("Image")?,
            featured: session.confirm("Featured?")?,
            date: ask_date(session, "Date (blank for today)")?,
        })
    }

    fn ask_patch<R: BufRead, W: Write>(
        session: &mut Session<R, W>,
        item: &Item<Self>,
    ) -> io::Result<ProjectPatch> {
        let project = &item.entry;
        Ok(ProjectPatch {
            title: session.ask_change("Title", &project.title)?,
            description: session.ask_change("Description", &project.description)?,
            tech: session
                .ask_change("Tech", &project.tech.join(", "))?
                .map(|raw| split_list(&raw)),
            url: session.ask_change("URL", project.url.as_deref().unwrap_or_default())?,
            repo: session.ask_change("Repository", project.repo.as_deref().unwrap_or_default())?,
            image: session.ask_change("Image", project.image.as_deref().unwrap_or_default())?,
            featured: session
                .ask_change("Featured (y/n)", if project.featured { "y" } else { "n" })?
                .map(|answer| is_yes(&answer)),
            date: None,
        })
    }

    fn print_list(out: &mut dyn Write, entries: &[Self::Entry]) -> io::Result<()> {
        print_projects(out, entries)
    }

    fn print_item(out: &mut dyn Write, item: &Item<Self>) -> io::Result<()> {
        print_project(out, &item.entry)
    }
}

impl Prompted for Gallery {
    const LABEL: &'static str = "Gallery";

    fn ask_draft<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<GalleryDraft> {
        Ok(GalleryDraft {
            title: session.ask("Title")?,
            image: session.ask("Image")?,
            caption: session.ask("Caption")?,
            date: ask_date(session, "Date (blank for today)")?,
        })
    }

    fn ask_patch<R: BufRead, W: Write>(
        session: &mut Session<R, W>,
        item: &Item<Self>,
    ) -> io::Result<GalleryPatch> {
        let entry = &item.entry;
        Ok(GalleryPatch {
            title: session.ask_change("Title", &entry.title)?,
            image: session.ask_change("Image", &entry.image)?,
            caption: session.ask_change("Caption", &entry.caption)?,
            date: None,
        })
    }

    fn print_list(out: &mut dyn Write, entries: &[Self::Entry]) -> io::Result<()> {
        print_gallery(out, entries)
    }

    fn print_item(out: &mut dyn Write, item: &Item<Self>) -> io::Result<()> {
        print_gallery_item(out, &item.entry)
    }
}

/// Prints the outcome of an operation: its messages, or the error that stopped it.
fn report<T, R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    result: folioapp::error::Result<folioapp::commands::CmdResult<T>>,
) -> io::Result<Option<T>> {
    match result {
        Ok(result) => {
            print_messages(session.output(), &result.messages)?;
            Ok(Some(result.value))
        }
        Err(err) => {
            print_error(session.output(), &err)?;
            Ok(None)
        }
    }
}

fn collection_menu<K, B, R, W>(api: &FolioApi<B>, session: &mut Session<R, W>) -> io::Result<()>
where
    K: Prompted,
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    loop {
        session.say("")?;
        session.say(K::LABEL)?;
        session.say("  l) list   s) show   n) new   e) edit   d) delete   b) back")?;
        match session.ask(">")?.as_str() {
            "l" => {
                if let Some(entries) = report(session, api.list::<K>(ListFilter::default()))? {
                    K::print_list(session.output(), &entries)?;
                }
            }
            "s" => {
                let slug = session.ask("Slug")?;
                if let Some(item) = report(session, api.fetch::<K>(&slug))? {
                    K::print_item(session.output(), &item)?;
                }
            }
            "n" => {
                let draft = K::ask_draft(session)?;
                report(session, api.create::<K>(draft))?;
            }
            "e" => {
                let slug = session.ask("Slug")?;
                if let Some(item) = report(session, api.fetch::<K>(&slug))? {
                    let patch = K::ask_patch(session, &item)?;
                    report(session, api.update::<K>(&slug, patch))?;
                }
            }
            "d" => {
                let slug = session.ask("Slug")?;
                if session.confirm(&format!("Delete `{}`?", slug))? {
                    report(session, api.delete::<K>(&slug))?;
                }
            }
            "b" | "" => return Ok(()),
            other => session.say(format!("Unknown choice `{}`", other))?,
        }
    }
}

fn profile_menu<B, R, W>(api: &FolioApi<B>, session: &mut Session<R, W>) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let Some(current) = report(session, api.profile())? else {
        return Ok(());
    };
    print_profile(session.output(), &current)?;
    if !session.confirm("Edit profile?")? {
        return Ok(());
    }

    let patch = ProfilePatch {
        name: session.ask_change("Name", &current.name)?,
        tagline: session.ask_change("Tagline", &current.tagline)?,
        bio: session.ask_change("Bio", &current.bio)?,
        email: session.ask_change("Email", &current.email)?,
        location: session.ask_change("Location", &current.location)?,
        avatar: session.ask_change("Avatar", current.avatar.as_deref().unwrap_or_default())?,
        links: None,
    };
    report(session, api.update_profile(patch))?;
    Ok(())
}

/// Runs the main menu until the user quits or input ends.
pub(super) fn run<B, R, W>(api: &FolioApi<B>, session: &mut Session<R, W>) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let outcome = main_menu(api, session);
    match outcome {
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            session.say("")?;
            Ok(())
        }
        other => other,
    }
}

fn main_menu<B, R, W>(api: &FolioApi<B>, session: &mut Session<R, W>) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    loop {
        session.say("")?;
        session.say("folio")?;
        session.say("  1) blog   2) projects   3) gallery   4) profile   q) quit")?;
        match session.ask(">")?.as_str() {
            "1" => collection_menu::<Blog, _, _, _>(api, session)?,
            "2" => collection_menu::<Projects, _, _, _>(api, session)?,
            "3" => collection_menu::<Gallery, _, _, _>(api, session)?,
            "4" => profile_menu(api, session)?,
            "q" => return Ok(()),
            other => session.say(format!("Unknown choice `{}`", other))?,
        }
    }
}
