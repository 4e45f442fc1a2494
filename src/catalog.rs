//! The template store: categories, actions, roadmap templates, remedy
//! roadmaps, and follow-up tips.
//!
//! Everything here is read-only. The data is compiled in from `data/*.toml`
//! and parsed once on first use; lookups hand out borrows into that store,
//! so asking twice for the same key always yields the same template.
//!
//! A missing key is an ordinary outcome, reported as [`NotFound`] (or
//! `None` for the enum-keyed lookups), never a fault.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Deserialize;
use tracing::debug;

use crate::model::{
    ActionId, ActionSummary, Category, CategoryId, RemedyKind, RoadmapStep, RoadmapTemplate,
};

const CATALOG_TOML: &str = include_str!("../data/catalog.toml");
const ROADMAPS_TOML: &str = include_str!("../data/roadmaps.toml");
const REMEDIES_TOML: &str = include_str!("../data/remedies.toml");
const TIPS_TOML: &str = include_str!("../data/tips.toml");

/// A lookup key with no entry in the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFound {
    #[error("category not found: {0}")]
    Category(String),

    #[error("roadmap not found: {0}")]
    Roadmap(String),
}

static STORE: LazyLock<Store> =
    LazyLock::new(|| Store::parse().expect("embedded catalog data must parse"));

// ── Lookups ──

/// All categories in home screen order, including those without actions.
pub fn categories() -> &'static [Category] {
    &STORE.categories
}

pub fn category(id: CategoryId) -> Option<&'static Category> {
    STORE.categories.iter().find(|c| c.id == id)
}

/// The ordered actions filed under a category.
///
/// Unknown identifiers and categories with nothing to drill into are both
/// reported as not found.
pub fn actions_for(category_id: &str) -> Result<&'static [ActionSummary], NotFound> {
    let found = category_id
        .parse::<CategoryId>()
        .ok()
        .and_then(category)
        .filter(|c| !c.actions.is_empty());

    match found {
        Some(c) => Ok(&c.actions),
        None => {
            debug!(category = category_id, "Category lookup missed");
            Err(NotFound::Category(category_id.to_string()))
        }
    }
}

/// The catalog entry for an action, if it is listed under any category.
pub fn action(id: ActionId) -> Option<&'static ActionSummary> {
    STORE
        .categories
        .iter()
        .flat_map(|c| c.actions.iter())
        .find(|a| a.id == id)
}

/// The category an action is filed under.
pub fn category_of(id: ActionId) -> Option<CategoryId> {
    STORE
        .categories
        .iter()
        .find(|c| c.actions.iter().any(|a| a.id == id))
        .map(|c| c.id)
}

/// The roadmap template for an action identifier such as `"file-fir"`.
pub fn template_for(action_id: &str) -> Result<&'static RoadmapTemplate, NotFound> {
    match action_id.parse::<ActionId>().ok().and_then(template) {
        Some(t) => Ok(t),
        None => {
            debug!(action = action_id, "Roadmap lookup missed");
            Err(NotFound::Roadmap(action_id.to_string()))
        }
    }
}

pub fn template(id: ActionId) -> Option<&'static RoadmapTemplate> {
    STORE.roadmaps.get(&id)
}

/// The canned roadmap for a remedy path. Only some remedies have one.
pub fn remedy_template(kind: RemedyKind) -> Option<&'static RoadmapTemplate> {
    STORE.remedies.get(&kind)
}

/// Follow-up tips registered for an action.
pub fn tips_for(id: ActionId) -> Option<&'static [String]> {
    STORE.tips.get(&id).map(Vec::as_slice)
}

// ── Store ──

struct Store {
    categories: Vec<Category>,
    roadmaps: HashMap<ActionId, RoadmapTemplate>,
    remedies: HashMap<RemedyKind, RoadmapTemplate>,
    tips: HashMap<ActionId, Vec<String>>,
}

#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct RoadmapsFile {
    roadmaps: Vec<ActionRoadmap>,
}

#[derive(Deserialize)]
struct ActionRoadmap {
    action: ActionId,
    title: String,
    steps: Vec<RoadmapStep>,
}

#[derive(Deserialize)]
struct RemediesFile {
    remedies: Vec<RemedyRoadmap>,
}

#[derive(Deserialize)]
struct RemedyRoadmap {
    remedy: RemedyKind,
    title: String,
    steps: Vec<RoadmapStep>,
}

#[derive(Deserialize)]
struct TipsFile {
    tips: Vec<ActionTips>,
}

#[derive(Deserialize)]
struct ActionTips {
    action: ActionId,
    tips: Vec<String>,
}

impl Store {
    fn parse() -> Result<Self, toml::de::Error> {
        let catalog: CatalogFile = toml::from_str(CATALOG_TOML)?;
        let roadmaps: RoadmapsFile = toml::from_str(ROADMAPS_TOML)?;
        let remedies: RemediesFile = toml::from_str(REMEDIES_TOML)?;
        let tips: TipsFile = toml::from_str(TIPS_TOML)?;

        Ok(Self {
            categories: catalog.categories,
            roadmaps: roadmaps
                .roadmaps
                .into_iter()
                .map(|r| {
                    let template = RoadmapTemplate {
                        title: r.title,
                        steps: r.steps,
                    };
                    (r.action, template)
                })
                .collect(),
            remedies: remedies
                .remedies
                .into_iter()
                .map(|r| {
                    let template = RoadmapTemplate {
                        title: r.title,
                        steps: r.steps,
                    };
                    (r.remedy, template)
                })
                .collect(),
            tips: tips.tips.into_iter().map(|t| (t.action, t.tips)).collect(),
        })
    }
}
