use super::args::{BlogAction, GalleryAction, ProfileAction, ProjectAction};
use super::print::{
    print_gallery, print_gallery_item, print_messages, print_post, print_posts, print_profile,
    print_project, print_projects,
};
use anyhow::{bail, Context, Result};
use folioapp::api::FolioApi;
use folioapp::commands::get::ListFilter;
use folioapp::kinds::{Blog, Gallery, Projects};
use folioapp::model::{
    GalleryDraft, GalleryPatch, PostDraft, PostPatch, ProfileLink, ProfilePatch, ProjectDraft,
    ProjectPatch,
};
use folioapp::store::backend::StorageBackend;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

fn read_content(inline: Option<String>, file: Option<PathBuf>) -> Result<Option<String>> {
    match (inline, file) {
        (Some(text), _) => Ok(Some(text)),
        (None, Some(path)) => fs::read_to_string(&path)
            .map(Some)
            .with_context(|| format!("could not read {}", path.display())),
        (None, None) => Ok(None),
    }
}

/// `--publish`/`--draft` as a patch value.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

pub(super) fn parse_link(raw: &str) -> Result<ProfileLink> {
    let Some((label, url)) = raw.split_once('=') else {
        bail!("link `{}` should look like Label=URL", raw);
    };
    Ok(ProfileLink {
        label: label.trim().to_string(),
        url: url.trim().to_string(),
    })
}

pub(super) fn blog<B: StorageBackend>(
    api: &FolioApi<B>,
    action: BlogAction,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        BlogAction::List { published } => {
            let result = api.list::<Blog>(ListFilter {
                published_only: published,
            })?;
            print_posts(out, &result.value)?;
            print_messages(out, &result.messages)?;
        }
        BlogAction::Show { slug } => {
            let item = api.fetch::<Blog>(&slug)?.into_value();
            print_post(out, &item.entry, item.detail.as_ref())?;
        }
        BlogAction::New {
            title,
            content,
            content_file,
            excerpt,
            tags,
            date,
            draft,
        } => {
            let content = read_content(content, content_file)?.unwrap_or_default();
            let result = api.create::<Blog>(PostDraft {
                title,
                content,
                excerpt,
                tags,
                date,
                published: !draft,
            })?;
            print_messages(out, &result.messages)?;
        }
        BlogAction::Edit {
            slug,
            title,
            content,
            content_file,
            excerpt,
            tags,
            date,
            publish,
            draft,
        } => {
            let patch = PostPatch {
                title,
                content: read_content(content, content_file)?,
                excerpt,
                tags,
                date,
                published: flag_pair(publish, draft),
            };
            let result = api.update::<Blog>(&slug, patch)?;
            print_messages(out, &result.messages)?;
        }
        BlogAction::Rm { slug } => {
            let result = api.delete::<Blog>(&slug)?;
            print_messages(out, &result.messages)?;
        }
    }
    Ok(())
}

pub(super) fn project<B: StorageBackend>(
    api: &FolioApi<B>,
    action: ProjectAction,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        ProjectAction::List => {
            let result = api.list::<Projects>(ListFilter::default())?;
            print_projects(out, &result.value)?;
        }
        ProjectAction::Show { slug } => {
            let project = api.get::<Projects>(&slug)?.into_value();
            print_project(out, &project)?;
        }
        ProjectAction::New {
            title,
            description,
            tech,
            url,
            repo,
            image,
            featured,
            date,
        } => {
            let result = api.create::<Projects>(ProjectDraft {
                title,
                description,
                tech,
                url,
                repo,
                image,
                featured,
                date,
            })?;
            print_messages(out, &result.messages)?;
        }
        ProjectAction::Edit {
            slug,
            title,
            description,
            tech,
            url,
            repo,
            image,
            feature,
            unfeature,
            date,
        } => {
            let patch = ProjectPatch {
                title,
                description,
                tech,
                url,
                repo,
                image,
                featured: flag_pair(feature, unfeature),
                date,
            };
            let result = api.update::<Projects>(&slug, patch)?;
            print_messages(out, &result.messages)?;
        }
        ProjectAction::Rm { slug } => {
            let result = api.delete::<Projects>(&slug)?;
            print_messages(out, &result.messages)?;
        }
    }
    Ok(())
}

pub(super) fn gallery<B: StorageBackend>(
    api: &FolioApi<B>,
    action: GalleryAction,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        GalleryAction::List => {
            let result = api.list::<Gallery>(ListFilter::default())?;
            print_gallery(out, &result.value)?;
        }
        GalleryAction::Show { slug } => {
            let item = api.get::<Gallery>(&slug)?.into_value();
            print_gallery_item(out, &item)?;
        }
        GalleryAction::New {
            title,
            image,
            caption,
            date,
        } => {
            let result = api.create::<Gallery>(GalleryDraft {
                title,
                image,
                caption,
                date,
            })?;
            print_messages(out, &result.messages)?;
        }
        GalleryAction::Edit {
            slug,
            title,
            image,
            caption,
            date,
        } => {
            let patch = GalleryPatch {
                title,
                image,
                caption,
                date,
            };
            let result = api.update::<Gallery>(&slug, patch)?;
            print_messages(out, &result.messages)?;
        }
        GalleryAction::Rm { slug } => {
            let result = api.delete::<Gallery>(&slug)?;
            print_messages(out, &result.messages)?;
        }
    }
    Ok(())
}

pub(super) fn profile<B: StorageBackend>(
    api: &FolioApi<B>,
    action: ProfileAction,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        ProfileAction::Show => {
            let profile = api.profile()?.into_value();
            print_profile(out, &profile)?;
        }
        ProfileAction::Set {
            name,
            tagline,
            bio,
            email,
            location,
            avatar,
            links,
        } => {
            let links = links
                .map(|raw| raw.iter().map(|l| parse_link(l)).collect::<Result<Vec<_>>>())
                .transpose()?;
            let result = api.update_profile(ProfilePatch {
                name,
                tagline,
                bio,
                email,
                location,
                avatar,
                links,
            })?;
            print_messages(out, &result.messages)?;
        }
    }
    Ok(())
}
