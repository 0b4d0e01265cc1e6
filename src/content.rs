use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::Datelike;
use dashmap::DashMap;
use regex::Regex;
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub mod firestore;

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})\b").expect("year pattern should compile"));

static EMBEDDED_CACHE: LazyLock<DashMap<Collection, serde_json::Value>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Couldn't fetch content: {0}")]
    Fetch(String),
    #[error("Couldn't decode content: {0}")]
    Decode(String),
    #[error("Missing embedded content: {0}")]
    Embedded(String),
}

impl From<serde_json::Error> for ContentError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// The two document collections the site reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Experience,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Experience => "Experience",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Front-end")]
    FrontEnd,
    #[serde(rename = "Back-end")]
    BackEnd,
    #[serde(rename = "Game-dev")]
    GameDev,
    #[serde(rename = "dev-ops", alias = "DevOps")]
    DevOps,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FrontEnd => "Front-end",
            Self::BackEnd => "Back-end",
            Self::GameDev => "Game-dev",
            Self::DevOps => "DevOps",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::FrontEnd => "🎨",
            Self::BackEnd => "⚙️",
            Self::GameDev => "🎮",
            Self::DevOps => "☁️",
        }
    }

    pub fn gradient(&self) -> &'static str {
        match self {
            Self::FrontEnd => "from-blue-500/20 to-cyan-500/20",
            Self::BackEnd => "from-green-500/20 to-emerald-500/20",
            Self::GameDev => "from-purple-500/20 to-pink-500/20",
            Self::DevOps => "from-green-500/20 to-cyan-500/20",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechTag {
    React,
    Next,
    #[serde(rename = "js")]
    Javascript,
    #[serde(rename = "ts")]
    Typescript,
    Html,
    Css,
    Node,
    Mongodb,
    Postgres,
    Unity,
    Python,
    Firebase,
    Github,
    Docker,
    Bash,
    Linux,
}

impl TechTag {
    pub const ALL: [TechTag; 16] = [
        Self::React,
        Self::Next,
        Self::Javascript,
        Self::Typescript,
        Self::Html,
        Self::Css,
        Self::Node,
        Self::Mongodb,
        Self::Postgres,
        Self::Unity,
        Self::Python,
        Self::Firebase,
        Self::Github,
        Self::Docker,
        Self::Bash,
        Self::Linux,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Next => "next",
            Self::Javascript => "js",
            Self::Typescript => "ts",
            Self::Html => "html",
            Self::Css => "css",
            Self::Node => "node",
            Self::Mongodb => "mongodb",
            Self::Postgres => "postgres",
            Self::Unity => "unity",
            Self::Python => "python",
            Self::Firebase => "firebase",
            Self::Github => "github",
            Self::Docker => "docker",
            Self::Bash => "bash",
            Self::Linux => "linux",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::React => "React",
            Self::Next => "Next.js",
            Self::Javascript => "JavaScript",
            Self::Typescript => "TypeScript",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Node => "Node.js",
            Self::Mongodb => "MongoDB",
            Self::Postgres => "PostgreSQL",
            Self::Unity => "Unity",
            Self::Python => "Python",
            Self::Firebase => "Firebase",
            Self::Github => "GitHub",
            Self::Docker => "Docker",
            Self::Bash => "Bash",
            Self::Linux => "Linux",
        }
    }

    /// Devicon class for the tag's logo.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::React => "devicon-react-original",
            Self::Next => "devicon-nextjs-plain",
            Self::Javascript => "devicon-javascript-plain",
            Self::Typescript => "devicon-typescript-plain",
            Self::Html => "devicon-html5-plain",
            Self::Css => "devicon-css3-plain",
            Self::Node => "devicon-nodejs-plain",
            Self::Mongodb => "devicon-mongodb-plain",
            Self::Postgres => "devicon-postgresql-plain",
            Self::Unity => "devicon-unity-plain",
            Self::Python => "devicon-python-plain",
            Self::Firebase => "devicon-firebase-plain",
            Self::Github => "devicon-github-original",
            Self::Docker => "devicon-docker-plain",
            Self::Bash => "devicon-bash-plain",
            Self::Linux => "devicon-linux-plain",
        }
    }
}

impl FromStr for TechTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

fn known_tech_tags<'de, D>(deserializer: D) -> Result<Vec<TechTag>, D::Error>
where
    D: Deserializer<'de>,
{
    let codes = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(codes
        .into_iter()
        .filter_map(|code| match code.parse() {
            Ok(tag) => Some(tag),
            Err(()) => {
                log::warn!("ignoring unknown technology tag {code:?}");
                None
            }
        })
        .collect())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A record stored in one of the content collections.
pub trait Record: DeserializeOwned + Clone {
    const COLLECTION: Collection;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default, deserialize_with = "known_tech_tags")]
    pub technologies: Vec<TechTag>,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
}

impl Record for Project {
    const COLLECTION: Collection = Collection::Projects;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company_name: String,
    pub role: String,
    #[serde(default, rename = "Description")]
    pub description: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub sequence: Option<f64>,
}

impl Record for Experience {
    const COLLECTION: Collection = Collection::Experience;
}

/// First standalone four-digit run in a free-form date string.
pub fn extract_year(date: &str) -> Option<i32> {
    YEAR_RE
        .captures(date)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

impl Experience {
    pub fn start_year(&self) -> i32 {
        self.start_year_or(current_year())
    }

    pub fn start_year_or(&self, fallback: i32) -> i32 {
        extract_year(&self.start_date).unwrap_or(fallback)
    }

    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.description
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

/// Sequenced records first by sequence, then the rest newest first.
pub fn sort_experience(experience: &mut [Experience]) {
    let fallback = current_year();
    experience.sort_by(|a, b| match (a.sequence, b.sequence) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => b.start_year_or(fallback).cmp(&a.start_year_or(fallback)),
    });
}

fn embedded_value(collection: Collection) -> Result<serde_json::Value, ContentError> {
    if let Some(v) = EMBEDDED_CACHE.get(&collection) {
        return Ok(v.clone());
    }
    let file = format!("{}.json", collection.name());
    let data = Assets::get(&file).ok_or(ContentError::Embedded(file))?;
    let value: serde_json::Value = serde_json::from_slice(&data.data)?;
    EMBEDDED_CACHE.insert(collection, value.clone());
    Ok(value)
}

/// Decodes a JSON array of records. Records that don't decode are skipped
/// with a warning so one bad entry doesn't hide the rest.
pub fn decode_records<T: Record>(value: serde_json::Value) -> Result<Vec<T>, ContentError> {
    let serde_json::Value::Array(items) = value else {
        return Err(ContentError::Decode(format!(
            "{} is not a list of records",
            T::COLLECTION
        )));
    };
    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let id = item
                .get("id")
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| format!("#{index}"), str::to_string);
            match serde_json::from_value::<T>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("skipping {} record {id}: {e}", T::COLLECTION);
                    None
                }
            }
        })
        .collect())
}

/// Records bundled into the binary, used when no document store is configured.
pub fn embedded<T: Record>() -> Result<Vec<T>, ContentError> {
    decode_records(embedded_value(T::COLLECTION)?)
}

#[cfg(feature = "ssr")]
pub async fn load<T: Record>() -> Result<Vec<T>, ContentError> {
    use crate::config::SITE_CONFIG;

    match &SITE_CONFIG.firestore {
        Some(fs) => firestore::list_documents::<T>(fs, T::COLLECTION).await,
        None => embedded::<T>(),
    }
}

#[cfg(feature = "ssr")]
pub async fn load_projects() -> Result<Vec<Project>, ContentError> {
    load::<Project>().await
}

#[cfg(feature = "ssr")]
pub async fn load_experience() -> Result<Vec<Experience>, ContentError> {
    let mut experience = load::<Experience>().await?;
    sort_experience(&mut experience);
    Ok(experience)
}
