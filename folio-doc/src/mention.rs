//! Cross-reference ("mention") resolution.
//!
//! Mentions are `mention` nodes carrying a reference kind (`type` attr), an opaque object
//! identifier (`id`) and the display title (`title`). Before a document is rendered for a
//! caller, [`MentionResolver::resolve`] replaces every title with what that caller may see:
//! the live title of the object, or a localized placeholder when the object is gone or the
//! caller has no access to it.
//!
//! Resolution never fails the document. A lookup that finds nothing degrades to the "not
//! found" placeholder and a denied one to "no access"; denial always wins, so the real
//! title of an object the caller cannot read never reaches the output.

use crate::model::{HasAttrs, Node};
use crate::tree::{find_nodes, transform_nodes};
use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

pub const MENTION_NODE_TYPE: &str = "mention";
pub const MENTION_KIND_ATTR: &str = "type";
pub const MENTION_ID_ATTR: &str = "id";
pub const MENTION_TITLE_ATTR: &str = "title";
pub const MENTION_TIME_ATTR: &str = "time";

/// Kind of object a mention refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReferenceKind {
    Article,
    List,
    Tag,
    User,
    Group,
}

impl ReferenceKind {
    pub const ALL: &'static [ReferenceKind] = &[
        ReferenceKind::Article,
        ReferenceKind::List,
        ReferenceKind::Tag,
        ReferenceKind::User,
        ReferenceKind::Group,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ReferenceKind::Article => "article",
            ReferenceKind::List => "list",
            ReferenceKind::Tag => "tag",
            ReferenceKind::User => "user",
            ReferenceKind::Group => "group",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ReferenceKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Scope an API client needs to see references of this kind.
    ///
    /// `None` means clients never see them.
    pub fn client_scope(self) -> Option<Scope> {
        match self {
            ReferenceKind::Article => Some(Scope::ArticlesRead),
            ReferenceKind::List => Some(Scope::ListsRead),
            ReferenceKind::Tag => Some(Scope::TagsRead),
            ReferenceKind::User | ReferenceKind::Group => None,
        }
    }
}

/// Capability scopes granted to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    ArticlesRead,
    ListsRead,
    TagsRead,
}

/// Who a document is being rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    /// A signed-in member of the tenant.
    User { id: String },
    /// A scoped API client.
    Client { scopes: BTreeSet<Scope> },
}

impl Caller {
    pub fn user(id: impl Into<String>) -> Self {
        Caller::User { id: id.into() }
    }

    pub fn client(scopes: impl IntoIterator<Item = Scope>) -> Self {
        Caller::Client {
            scopes: scopes.into_iter().collect(),
        }
    }

    pub fn is_client(&self) -> bool {
        matches!(self, Caller::Client { .. })
    }

    pub fn has_scope(&self, scope: Scope) -> bool {
        match self {
            Caller::User { .. } => false,
            Caller::Client { scopes } => scopes.contains(&scope),
        }
    }

    /// Whether this caller may see references of `kind` at all, before any lookup.
    pub fn may_see(&self, kind: ReferenceKind) -> bool {
        match self {
            Caller::User { .. } => true,
            Caller::Client { .. } => kind
                .client_scope()
                .is_some_and(|scope| self.has_scope(scope)),
        }
    }
}

/// Result of looking up a referenced object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Current title; empty when the object does not exist.
    pub title: String,
    /// Whether the caller may read the object.
    pub access: bool,
}

impl Resolution {
    pub fn found(title: impl Into<String>, access: bool) -> Self {
        Resolution {
            title: title.into(),
            access,
        }
    }

    /// An object that could not be found. Access is not denied, so the "not found"
    /// placeholder is shown.
    pub fn not_found() -> Self {
        Resolution {
            title: String::new(),
            access: true,
        }
    }
}

/// Looks up referenced objects in the surrounding application's storage.
///
/// For users, `access` must mirror the read permission used when opening the object
/// directly; for clients, it reflects whether the object is exposed to API clients.
pub trait Lookup {
    fn lookup(&self, kind: ReferenceKind, id: &str, caller: &Caller) -> Resolution;
}

/// Placeholder texts for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub not_found: String,
    pub no_access: String,
}

/// Localized placeholder lookup.
pub trait Localization {
    fn placeholders(&self, lang: &str) -> Placeholders;
}

/// Built-in English and German placeholders; other languages fall back to English.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPlaceholders;

impl Localization for BuiltinPlaceholders {
    fn placeholders(&self, lang: &str) -> Placeholders {
        let (not_found, no_access) = match lang {
            "de" => ("[Nicht gefunden]", "[Kein Zugriff]"),
            _ => ("[Not found]", "[No access]"),
        };

        Placeholders {
            not_found: not_found.to_string(),
            no_access: no_access.to_string(),
        }
    }
}

/// Rewrites mention titles for a caller.
pub struct MentionResolver<'a> {
    lookup: &'a dyn Lookup,
    localization: &'a dyn Localization,
}

impl<'a> MentionResolver<'a> {
    pub fn new(lookup: &'a dyn Lookup, localization: &'a dyn Localization) -> Self {
        MentionResolver {
            lookup,
            localization,
        }
    }

    /// Replaces the title of every mention in `doc`.
    ///
    /// `lang` is the document's language and selects the placeholder texts. Must run before
    /// the document is rendered.
    pub fn resolve(&self, doc: &mut Node, caller: &Caller, lang: &str) {
        let placeholders = self.localization.placeholders(lang);
        let mut resolved = 0usize;

        transform_nodes(doc, MENTION_NODE_TYPE, |node| {
            let title = self.title_for(node, caller, &placeholders);
            node.set_attr(MENTION_TITLE_ATTR, title);
            resolved += 1;
        });

        debug!(mentions = resolved, lang, "Resolved mentions");
    }

    fn title_for(&self, node: &Node, caller: &Caller, placeholders: &Placeholders) -> String {
        let kind_name = node.str_attr(MENTION_KIND_ATTR);
        let id = node.str_attr(MENTION_ID_ATTR);

        let resolution = match ReferenceKind::from_name(kind_name) {
            Some(kind) if caller.may_see(kind) => {
                if id.is_empty() {
                    warn!(kind = kind.name(), "Mention without object id");
                    Resolution::not_found()
                } else {
                    self.lookup.lookup(kind, id, caller)
                }
            }
            Some(_) => Resolution::default(),
            None if caller.is_client() => Resolution::default(),
            None => {
                warn!(kind = kind_name, id, "Unknown mention reference kind");
                Resolution::not_found()
            }
        };

        if !resolution.access {
            placeholders.no_access.clone()
        } else if resolution.title.is_empty() {
            placeholders.not_found.clone()
        } else {
            resolution.title
        }
    }
}

/// In-memory [`Lookup`] over a fixed set of objects.
///
/// Objects not registered resolve as not found.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    objects: HashMap<(ReferenceKind, String), Resolution>,
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ReferenceKind, id: impl Into<String>, resolution: Resolution) {
        self.objects.insert((kind, id.into()), resolution);
    }

    pub fn with(mut self, kind: ReferenceKind, id: impl Into<String>, resolution: Resolution) -> Self {
        self.insert(kind, id, resolution);
        self
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Lookup for StaticLookup {
    fn lookup(&self, kind: ReferenceKind, id: &str, _caller: &Caller) -> Resolution {
        self.objects
            .get(&(kind, id.to_string()))
            .cloned()
            .unwrap_or_else(Resolution::not_found)
    }
}

/// Identifiers of users mentioned after `since`.
///
/// Each mention records when it was inserted (`time`, RFC 3339). Only user mentions newer
/// than `since` (typically the previous revision's timestamp) count, so saving a document
/// again does not notify the same people twice. Mentions with a missing or malformed
/// timestamp are skipped. Identifiers are returned once each, in document order.
pub fn new_user_mentions(doc: &Node, since: DateTime<Utc>) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();

    for mention in find_nodes(doc, &[MENTION_NODE_TYPE], None) {
        if ReferenceKind::from_name(mention.str_attr(MENTION_KIND_ATTR)) != Some(ReferenceKind::User) {
            continue;
        }

        let id = mention.str_attr(MENTION_ID_ATTR);
        let time = mention.str_attr(MENTION_TIME_ATTR);

        let mentioned = match DateTime::parse_from_rfc3339(time) {
            Ok(mentioned) => mentioned.with_timezone(&Utc),
            Err(e) => {
                warn!(id, time, error = %e, "Skipping mention with invalid timestamp");
                continue;
            }
        };

        if !id.is_empty() && mentioned > since && !ids.iter().any(|known| known == id) {
            ids.push(id.to_string());
        }
    }

    ids
}
