use crate::commands::{CmdMessage, CmdResult, Item};
use crate::error::{FolioError, Result};
use crate::kinds::{ContentKind, PatchInput};
use crate::model::Record;
use crate::slug::{resolve_unique, slugify, Slugged};
use crate::store::backend::StorageBackend;
use crate::store::records::{load_detail, load_index, position_by_slug, save_detail, save_index};
use tracing::{error, info};

pub fn run<K: ContentKind, B: StorageBackend>(
    backend: &B,
    slug: &str,
    patch: K::Patch,
) -> Result<CmdResult<Item<K>>> {
    patch.validate()?;
    let collection = K::COLLECTION;

    let mut entries = load_index::<K, B>(backend)?;
    let pos = position_by_slug(&entries, slug)
        .ok_or_else(|| FolioError::not_found(collection, slug))?;

    let original_detail = if collection.is_split() {
        let detail = load_detail::<K, B>(backend, slug)?.ok_or_else(|| {
            FolioError::DetailMissing {
                collection,
                slug: slug.to_string(),
            }
        })?;
        Some(detail)
    } else {
        None
    };
    let mut detail = original_detail.clone();

    let old_slug = slug.to_string();
    let new_slug = match patch.title() {
        Some(title) if title != entries[pos].title() => {
            // The record being renamed must not collide with itself.
            let others: Vec<&K::Entry> = entries
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != pos)
                .map(|(_, entry)| entry)
                .collect();
            resolve_unique(&slugify(title), &others)
        }
        _ => old_slug.clone(),
    };
    let renamed = new_slug != old_slug;

    K::apply(patch, &mut entries[pos], detail.as_mut());

    let mut result_messages = Vec::new();
    if renamed {
        if detail.is_some() {
            // Nothing is persisted yet, so a failed rename aborts cleanly.
            backend.rename_detail(collection, &old_slug, &new_slug)?;
            info!(%collection, from = %old_slug, to = %new_slug, "renamed detail record");
            result_messages.push(CmdMessage::info(format!(
                "Renamed {} -> {}",
                display_path(backend, collection, &old_slug),
                display_path(backend, collection, &new_slug)
            )));
        }
        entries[pos].set_slug(&new_slug);
        if let Some(detail) = detail.as_mut() {
            detail.set_slug(&new_slug);
        }
    }

    if let Some(detail) = &detail {
        if let Err(err) = save_detail::<K, B>(backend, detail) {
            restore_detail::<K, B>(backend, original_detail.as_ref(), &new_slug);
            return Err(err);
        }
    }

    if let Err(err) = save_index::<K, B>(backend, &entries) {
        restore_detail::<K, B>(backend, original_detail.as_ref(), &new_slug);
        return Err(err);
    }

    info!(%collection, slug = %new_slug, "updated item");

    let entry = entries.swap_remove(pos);
    let mut result = CmdResult::new(Item { entry, detail });
    for message in result_messages {
        result.add_message(message);
    }
    result.add_message(CmdMessage::success(format!(
        "{} updated: {}",
        collection.noun(),
        new_slug
    )));
    Ok(result)
}

/// Best-effort return of the detail record to its pre-update state after a later step
/// failed. Failures here are logged; the caller reports the original error.
fn restore_detail<K: ContentKind, B: StorageBackend>(
    backend: &B,
    original: Option<&K::Detail>,
    current_slug: &str,
) {
    let Some(original) = original else {
        return;
    };
    let collection = K::COLLECTION;

    let mut at_original_slug = original.slug() == current_slug;
    if !at_original_slug {
        match backend.rename_detail(collection, current_slug, original.slug()) {
            Ok(()) => at_original_slug = true,
            Err(err) => {
                error!(%collection, from = %current_slug, to = original.slug(), %err, "could not move detail record back")
            }
        }
    }

    if let Err(err) = save_detail::<K, B>(backend, original) {
        error!(%collection, slug = original.slug(), %err, "could not restore detail record");
    }

    if !at_original_slug {
        if let Err(err) = backend.delete_detail(collection, current_slug) {
            error!(%collection, slug = %current_slug, %err, "could not remove renamed detail record");
        }
    }
}

fn display_path<B: StorageBackend>(
    backend: &B,
    collection: crate::model::Collection,
    slug: &str,
) -> String {
    backend
        .detail_path(collection, slug)
        .map(|path| path.display().to_string())
        .unwrap_or_else(|_| slug.to_string())
}
