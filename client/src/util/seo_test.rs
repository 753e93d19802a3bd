use super::*;

fn home() -> SeoConfig {
    SeoConfig::new("WhatsAround", "Find places along your route", "https://whatsaround.example/home")
}

#[test]
fn new_config_uses_defaults() {
    let config = home();
    assert_eq!(config.robots, "index, follow");
    assert_eq!(config.theme_color, "#2563eb");
    assert_eq!(config.site_name, "WhatsAround");
    assert_eq!(config.locale, "en_US");
    assert_eq!(config.image, None);
    assert_eq!(config.twitter_site, None);
    assert_eq!(config.keywords, Keywords::default());
}

#[test]
fn default_keywords_join_with_comma() {
    assert_eq!(
        Keywords::default().content(),
        "POI search, OpenStreetMap, route planning, GPX, points of interest, trip planning"
    );
    assert_eq!(Keywords::Text("a; b".into()).content(), "a; b");
}

#[test]
fn selectors_match_element_and_key() {
    assert_eq!(TagKey::Name("description").selector(), r#"meta[name="description"]"#);
    assert_eq!(TagKey::Property("og:url").selector(), r#"meta[property="og:url"]"#);
    assert_eq!(TagKey::Rel("canonical").selector(), r#"link[rel="canonical"]"#);
}

#[test]
fn attributes_put_key_first() {
    let meta = HeadTag { key: TagKey::Property("og:type"), value: "website".into() };
    assert_eq!(meta.attributes(), [("property", "og:type".to_owned()), ("content", "website".to_owned())]);
    let link = HeadTag { key: TagKey::Rel("canonical"), value: "https://x/".into() };
    assert_eq!(link.attributes(), [("rel", "canonical".to_owned()), ("href", "https://x/".to_owned())]);
}

#[test]
fn plan_sets_title_and_fixed_order() {
    let plan = head_plan(&home());
    assert_eq!(plan.title, "WhatsAround");
    let keys: Vec<TagKey> = plan.ops.iter().map(HeadOp::key).collect();
    assert_eq!(keys.first(), Some(&TagKey::Name("description")));
    assert_eq!(keys.last(), Some(&TagKey::Name("twitter:image")));
    assert_eq!(keys.len(), 17);
}

#[test]
fn plan_mirrors_title_description_and_url() {
    let plan = head_plan(&home());
    assert_eq!(plan.value_of(TagKey::Property("og:title")), Some("WhatsAround"));
    assert_eq!(plan.value_of(TagKey::Name("twitter:title")), Some("WhatsAround"));
    assert_eq!(plan.value_of(TagKey::Property("og:description")), Some("Find places along your route"));
    assert_eq!(plan.value_of(TagKey::Rel("canonical")), Some("https://whatsaround.example/home"));
    assert_eq!(plan.value_of(TagKey::Property("og:url")), Some("https://whatsaround.example/home"));
    assert_eq!(plan.value_of(TagKey::Property("og:type")), Some("website"));
    assert_eq!(plan.value_of(TagKey::Name("twitter:card")), Some("summary_large_image"));
}

#[test]
fn missing_optionals_become_removals() {
    let plan = head_plan(&home());
    let removed: Vec<TagKey> = plan.removals().collect();
    assert_eq!(
        removed,
        vec![TagKey::Property("og:image"), TagKey::Name("twitter:site"), TagKey::Name("twitter:image")]
    );
}

#[test]
fn image_and_twitter_site_are_upserted_when_present() {
    let plan = head_plan(&home().with_image("https://x/og.png").with_twitter_site("@whatsaround"));
    assert_eq!(plan.removals().count(), 0);
    assert_eq!(plan.value_of(TagKey::Property("og:image")), Some("https://x/og.png"));
    assert_eq!(plan.value_of(TagKey::Name("twitter:image")), Some("https://x/og.png"));
    assert_eq!(plan.value_of(TagKey::Name("twitter:site")), Some("@whatsaround"));
}

#[test]
fn blank_keywords_are_removed() {
    let plan = head_plan(&home().with_keywords(Keywords::Text("   ".into())));
    assert!(plan.removals().any(|key| key == TagKey::Name("keywords")));
    let plan = head_plan(&home().with_keywords(Keywords::List(Vec::new())));
    assert_eq!(plan.value_of(TagKey::Name("keywords")), None);
}

#[test]
fn canonical_joins_base_and_path() {
    let site = SiteInfo::new("https://whatsaround.example/");
    assert_eq!(site.canonical("/home"), "https://whatsaround.example/home");
    assert_eq!(site.canonical("how-it-works"), "https://whatsaround.example/how-it-works");
    assert_eq!(SiteInfo::default().canonical("/app"), "http://localhost:3000/app");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_browser_is_none_off_browser() {
    assert_eq!(SiteInfo::from_browser(), None);
}
