//! Document head metadata for the public pages.
//!
//! [`head_plan`] turns a [`SeoConfig`] into the page title plus an ordered
//! list of head operations. Each operation targets one tag by selector and
//! either upserts it or removes it, so a page never leaves a stale
//! `og:image` or `twitter:site` behind from the previous page.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

pub const DEFAULT_KEYWORDS: [&str; 6] = [
    "POI search",
    "OpenStreetMap",
    "route planning",
    "GPX",
    "points of interest",
    "trip planning",
];
pub const DEFAULT_ROBOTS: &str = "index, follow";
pub const DEFAULT_THEME_COLOR: &str = "#2563eb";
pub const DEFAULT_SITE_NAME: &str = "WhatsAround";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Keywords given either as a list or as preformatted text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Keywords {
    List(Vec<String>),
    Text(String),
}

impl Default for Keywords {
    fn default() -> Self {
        Self::List(DEFAULT_KEYWORDS.iter().map(|k| (*k).to_owned()).collect())
    }
}

impl Keywords {
    /// Content attribute value; list entries are joined with `", "`.
    #[must_use]
    pub fn content(&self) -> String {
        match self {
            Self::List(items) => items.join(", "),
            Self::Text(text) => text.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    /// Canonical URL of the page.
    pub url: String,
    pub image: Option<String>,
    pub keywords: Keywords,
    pub robots: String,
    pub theme_color: String,
    pub site_name: String,
    pub locale: String,
    pub twitter_site: Option<String>,
}

impl SeoConfig {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            image: None,
            keywords: Keywords::default(),
            robots: DEFAULT_ROBOTS.to_owned(),
            theme_color: DEFAULT_THEME_COLOR.to_owned(),
            site_name: DEFAULT_SITE_NAME.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
            twitter_site: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }

    #[must_use]
    pub fn with_twitter_site(mut self, handle: impl Into<String>) -> Self {
        self.twitter_site = Some(handle.into());
        self
    }
}

/// Identity of a head tag: the attribute it is keyed by and that key's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKey {
    /// `<meta name="..">`
    Name(&'static str),
    /// `<meta property="..">`
    Property(&'static str),
    /// `<link rel="..">`
    Rel(&'static str),
}

impl TagKey {
    #[must_use]
    pub fn element(self) -> &'static str {
        match self {
            Self::Name(_) | Self::Property(_) => "meta",
            Self::Rel(_) => "link",
        }
    }

    #[must_use]
    pub fn selector(self) -> String {
        let (attr, key) = self.key_attribute();
        format!("{}[{attr}=\"{key}\"]", self.element())
    }

    fn key_attribute(self) -> (&'static str, &'static str) {
        match self {
            Self::Name(key) => ("name", key),
            Self::Property(key) => ("property", key),
            Self::Rel(key) => ("rel", key),
        }
    }

    fn value_attribute(self) -> &'static str {
        match self {
            Self::Name(_) | Self::Property(_) => "content",
            Self::Rel(_) => "href",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTag {
    pub key: TagKey,
    pub value: String,
}

impl HeadTag {
    /// Attributes to set on the element, key attribute first.
    #[must_use]
    pub fn attributes(&self) -> [(&'static str, String); 2] {
        let (attr, key) = self.key.key_attribute();
        [(attr, key.to_owned()), (self.key.value_attribute(), self.value.clone())]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadOp {
    Upsert(HeadTag),
    Remove(TagKey),
}

impl HeadOp {
    #[must_use]
    pub fn key(&self) -> TagKey {
        match self {
            Self::Upsert(tag) => tag.key,
            Self::Remove(key) => *key,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadPlan {
    pub title: String,
    pub ops: Vec<HeadOp>,
}

impl HeadPlan {
    pub fn upserts(&self) -> impl Iterator<Item = &HeadTag> {
        self.ops.iter().filter_map(|op| match op {
            HeadOp::Upsert(tag) => Some(tag),
            HeadOp::Remove(_) => None,
        })
    }

    pub fn removals(&self) -> impl Iterator<Item = TagKey> + '_ {
        self.ops.iter().filter_map(|op| match op {
            HeadOp::Remove(key) => Some(*key),
            HeadOp::Upsert(_) => None,
        })
    }

    /// Upserted value for `key`, if the plan sets one.
    #[must_use]
    pub fn value_of(&self, key: TagKey) -> Option<&str> {
        self.upserts().find(|tag| tag.key == key).map(|tag| tag.value.as_str())
    }
}

#[must_use]
pub fn head_plan(config: &SeoConfig) -> HeadPlan {
    let keywords = config.keywords.content();
    let image = config.image.as_deref();
    let entries: [(TagKey, Option<&str>); 17] = [
        (TagKey::Name("description"), Some(config.description.as_str())),
        (TagKey::Name("keywords"), Some(keywords.as_str()).filter(|k| !k.trim().is_empty())),
        (TagKey::Name("robots"), Some(config.robots.as_str())),
        (TagKey::Name("theme-color"), Some(config.theme_color.as_str())),
        (TagKey::Rel("canonical"), Some(config.url.as_str())),
        (TagKey::Property("og:title"), Some(config.title.as_str())),
        (TagKey::Property("og:description"), Some(config.description.as_str())),
        (TagKey::Property("og:type"), Some("website")),
        (TagKey::Property("og:site_name"), Some(config.site_name.as_str())),
        (TagKey::Property("og:locale"), Some(config.locale.as_str())),
        (TagKey::Property("og:url"), Some(config.url.as_str())),
        (TagKey::Property("og:image"), image),
        (TagKey::Name("twitter:card"), Some("summary_large_image")),
        (TagKey::Name("twitter:title"), Some(config.title.as_str())),
        (TagKey::Name("twitter:description"), Some(config.description.as_str())),
        (TagKey::Name("twitter:site"), config.twitter_site.as_deref()),
        (TagKey::Name("twitter:image"), image),
    ];

    let ops = entries
        .into_iter()
        .map(|(key, value)| match value {
            Some(value) => HeadOp::Upsert(HeadTag { key, value: value.to_owned() }),
            None => HeadOp::Remove(key),
        })
        .collect();
    HeadPlan { title: config.title.clone(), ops }
}

/// Public base URL used to build canonical links, provided as context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteInfo {
    pub base_url: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self { base_url: DEFAULT_SITE_URL.to_owned() }
    }
}

impl SiteInfo {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Absolute URL for an app path.
    #[must_use]
    pub fn canonical(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Site info from the page origin; `None` outside a browser.
    #[must_use]
    pub fn from_browser() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let origin = web_sys::window()?.location().origin().ok()?;
            Some(Self::new(origin))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
