use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FolioError, Result};
use crate::model::{Profile, ProfileLink, ProfilePatch};
use crate::store::backend::StorageBackend;
use tracing::info;

/// Name of the profile document in the content directory.
pub const PROFILE_DOCUMENT: &str = "profile";

/// The stored profile, or an empty one if none has been written yet.
pub fn show<B: StorageBackend>(backend: &B) -> Result<CmdResult<Profile>> {
    let profile = match backend.read_document(PROFILE_DOCUMENT)? {
        Some(value) => serde_json::from_value(value)?,
        None => Profile::default(),
    };
    Ok(CmdResult::new(profile))
}

pub fn update<B: StorageBackend>(backend: &B, patch: ProfilePatch) -> Result<CmdResult<Profile>> {
    validate(&patch)?;
    let mut profile = show(backend)?.into_value();

    let ProfilePatch {
        name,
        tagline,
        bio,
        email,
        location,
        avatar,
        links,
    } = patch;

    let trimmed = |value: String| value.trim().to_string();
    if let Some(name) = name {
        profile.name = trimmed(name);
    }
    if let Some(tagline) = tagline {
        profile.tagline = trimmed(tagline);
    }
    if let Some(bio) = bio {
        profile.bio = bio;
    }
    if let Some(email) = email {
        profile.email = trimmed(email);
    }
    if let Some(location) = location {
        profile.location = trimmed(location);
    }
    if let Some(avatar) = avatar {
        let avatar = trimmed(avatar);
        profile.avatar = (!avatar.is_empty()).then_some(avatar);
    }
    if let Some(links) = links {
        profile.links = links
            .into_iter()
            .map(|link| ProfileLink {
                label: trimmed(link.label),
                url: trimmed(link.url),
            })
            .collect();
    }

    let document = serde_json::to_value(&profile)?;
    backend.write_document(PROFILE_DOCUMENT, &document)?;
    info!("updated profile");

    Ok(CmdResult::new(profile).with_message(CmdMessage::success("Profile updated")))
}

fn validate(patch: &ProfilePatch) -> Result<()> {
    if let Some(email) = &patch.email {
        let email = email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err(FolioError::validation(format!(
                "`{}` is not an email address",
                email
            )));
        }
    }
    for link in patch.links.iter().flatten() {
        if link.label.trim().is_empty() || link.url.trim().is_empty() {
            return Err(FolioError::validation("links need both a label and a url"));
        }
    }
    Ok(())
}
