use clap::{ArgAction, Parser, Subcommand};
use folioapp::date::Date;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
#[command(about = "Manage the blog, projects and gallery of a flat-JSON site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Content directory (overrides FOLIO_CONTENT_DIR and folio.toml)
    #[arg(long, global = true, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Blog posts
    #[command(alias = "b")]
    Blog {
        #[command(subcommand)]
        action: BlogAction,
    },

    /// Portfolio projects
    #[command(alias = "projects", alias = "p")]
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Gallery items
    #[command(alias = "g")]
    Gallery {
        #[command(subcommand)]
        action: GalleryAction,
    },

    /// The site owner's profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Menu-driven editing session
    #[command(alias = "i")]
    Interactive,
}

#[derive(Subcommand, Debug)]
pub enum BlogAction {
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Hide drafts
        #[arg(long)]
        published: bool,
    },

    /// Show a post with its content
    Show { slug: String },

    /// Create a post
    New {
        title: String,

        /// Post body
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,

        /// Read the post body from a file
        #[arg(long, value_name = "FILE")]
        content_file: Option<PathBuf>,

        /// Summary shown in listings (derived from the content if omitted)
        #[arg(long)]
        excerpt: Option<String>,

        /// Tag (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Publication date, `2024-03-05` or `March 5, 2024` (default: today)
        #[arg(long)]
        date: Option<Date>,

        /// Save as an unpublished draft
        #[arg(long)]
        draft: bool,
    },

    /// Change a post; a new title renames it
    Edit {
        slug: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,

        #[arg(long, value_name = "FILE")]
        content_file: Option<PathBuf>,

        /// New excerpt; an empty value derives it from the content again
        #[arg(long)]
        excerpt: Option<String>,

        /// Replace all tags (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Option<Vec<String>>,

        #[arg(long)]
        date: Option<Date>,

        /// Mark as published
        #[arg(long, conflicts_with = "draft")]
        publish: bool,

        /// Mark as draft
        #[arg(long)]
        draft: bool,
    },

    /// Delete a post and its content file
    #[command(alias = "delete")]
    Rm { slug: String },
}

#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// List projects, featured first
    #[command(alias = "ls")]
    List,

    /// Show a project
    Show { slug: String },

    /// Create a project
    New {
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Technology used (repeatable)
        #[arg(long = "tech", value_name = "NAME")]
        tech: Vec<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        repo: Option<String>,

        #[arg(long)]
        image: Option<String>,

        #[arg(long)]
        featured: bool,

        #[arg(long)]
        date: Option<Date>,
    },

    /// Change a project; a new title renames it. Pass "" to clear a link.
    Edit {
        slug: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Replace the technology list (repeatable)
        #[arg(long = "tech", value_name = "NAME")]
        tech: Option<Vec<String>>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        repo: Option<String>,

        #[arg(long)]
        image: Option<String>,

        #[arg(long, conflicts_with = "unfeature")]
        feature: bool,

        #[arg(long)]
        unfeature: bool,

        #[arg(long)]
        date: Option<Date>,
    },

    /// Delete a project
    #[command(alias = "delete")]
    Rm { slug: String },
}

#[derive(Subcommand, Debug)]
pub enum GalleryAction {
    /// List gallery items, newest first
    #[command(alias = "ls")]
    List,

    /// Show a gallery item
    Show { slug: String },

    /// Add an image
    New {
        title: String,

        /// Image path or URL
        #[arg(long)]
        image: String,

        #[arg(long, default_value = "")]
        caption: String,

        #[arg(long)]
        date: Option<Date>,
    },

    /// Change a gallery item; a new title renames it
    Edit {
        slug: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        image: Option<String>,

        #[arg(long)]
        caption: Option<String>,

        #[arg(long)]
        date: Option<Date>,
    },

    /// Remove a gallery item
    #[command(alias = "delete")]
    Rm { slug: String },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Print the profile
    Show,

    /// Update profile fields
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        tagline: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Avatar image; "" removes it
        #[arg(long)]
        avatar: Option<String>,

        /// Link as `Label=URL` (repeatable, replaces all links)
        #[arg(long = "link", value_name = "LABEL=URL")]
        links: Option<Vec<String>>,
    },
}
