use crate::date::Date;
use crate::error::FolioError;
use crate::slug::Slugged;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Maximum length, in characters, of an automatically derived post excerpt.
pub const EXCERPT_LEN: usize = 160;

/// A new opaque identifier: 128 random bits as 32 lowercase hex characters.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Blog,
    Projects,
    Gallery,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Blog => "blog",
            Collection::Projects => "projects",
            Collection::Gallery => "gallery",
        }
    }

    /// Singular noun used in messages ("Post created: ...").
    pub fn noun(&self) -> &'static str {
        match self {
            Collection::Blog => "Post",
            Collection::Projects => "Project",
            Collection::Gallery => "Gallery item",
        }
    }

    /// Stem of the index file, `{index_name}.json` at the content root.
    pub fn index_name(&self) -> &'static str {
        match self {
            Collection::Blog => "posts",
            Collection::Projects => "projects",
            Collection::Gallery => "gallery",
        }
    }

    /// Directory holding `{slug}.json` detail records, for collections that split
    /// index and detail.
    pub fn detail_dir(&self) -> Option<&'static str> {
        match self {
            Collection::Blog => Some("posts"),
            Collection::Projects | Collection::Gallery => None,
        }
    }

    pub fn is_split(&self) -> bool {
        self.detail_dir().is_some()
    }

    pub(crate) fn ordinal(&self) -> usize {
        match self {
            Collection::Blog => 0,
            Collection::Projects => 1,
            Collection::Gallery => 2,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blog" | "posts" | "post" => Ok(Collection::Blog),
            "projects" | "project" => Ok(Collection::Projects),
            "gallery" => Ok(Collection::Gallery),
            other => Err(FolioError::validation(format!(
                "unknown collection `{}`",
                other
            ))),
        }
    }
}

/// A stored record with an identity: index entries and detail records alike.
pub trait Record: Slugged + Serialize + DeserializeOwned + Clone + fmt::Debug {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn set_slug(&mut self, slug: &str);
}

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn title(&self) -> &str {
                    &self.title
                }

                fn set_slug(&mut self, slug: &str) {
                    self.slug = slug.to_string();
                }
            }

            impl Slugged for $ty {
                fn slug(&self) -> &str {
                    &self.slug
                }
            }
        )+
    };
}

impl_record!(PostEntry, PostDetail, Project, GalleryItem);

fn default_true() -> bool {
    true
}

/// Ids written by older versions of the site may be plain numbers.
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Unsigned(n) => n.to_string(),
        RawId::Signed(n) => n.to_string(),
    })
}

/// A missing, `null` or blank date reads as no date.
fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            crate::date::parse(&raw).map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

// --- Blog ---

/// Blog index entry (`posts.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostEntry {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<Date>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_true")]
    pub published: bool,
}

/// Blog detail record (`posts/{slug}.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<Date>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    /// Derived from the content when absent.
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    /// Defaults to today.
    pub date: Option<Date>,
    pub published: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub date: Option<Date>,
    pub published: Option<bool>,
}

// --- Projects ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<Date>,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub url: Option<String>,
    pub repo: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    pub date: Option<Date>,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech: Option<Vec<String>>,
    pub url: Option<String>,
    pub repo: Option<String>,
    pub image: Option<String>,
    pub featured: Option<bool>,
    pub date: Option<Date>,
}

// --- Gallery ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub slug: String,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<Date>,
}

#[derive(Debug, Clone, Default)]
pub struct GalleryDraft {
    pub title: String,
    pub image: String,
    pub caption: String,
    pub date: Option<Date>,
}

#[derive(Debug, Clone, Default)]
pub struct GalleryPatch {
    pub title: Option<String>,
    pub image: Option<String>,
    pub caption: Option<String>,
    pub date: Option<Date>,
}

// --- Profile ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

/// The site owner's profile (`profile.json`). Every field is optional on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub links: Vec<ProfileLink>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
    pub links: Option<Vec<ProfileLink>>,
}

/// Collapses whitespace and cuts `content` to at most [`EXCERPT_LEN`] characters.
pub fn derive_excerpt(content: &str) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= EXCERPT_LEN {
        return flat;
    }
    let cut: String = flat.chars().take(EXCERPT_LEN).collect();
    format!("{}...", cut.trim_end())
}

/// Trims tags and drops empty ones and repeats, keeping first-seen order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}
