//! Head metadata for one page.
//!
//! Upserts render through `leptos_meta`, which also covers the server
//! render. Removals only matter for tags a previous page or a static shell
//! left in `document.head`, so they run in the browser after mount.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::util::seo::{HeadPlan, HeadTag, SeoConfig, TagKey, head_plan};

fn render_tag(tag: &HeadTag) -> AnyView {
    let value = tag.value.clone();
    match tag.key {
        TagKey::Name(name) => view! { <Meta name=name content=value/> }.into_any(),
        TagKey::Property(property) => view! { <Meta property=property content=value/> }.into_any(),
        TagKey::Rel(rel) => view! { <Link rel=rel href=value/> }.into_any(),
    }
}

#[cfg(feature = "hydrate")]
fn apply_removals(plan: &HeadPlan) {
    let Some(head) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.head()) else {
        return;
    };
    for key in plan.removals() {
        if let Ok(Some(el)) = head.query_selector(&key.selector()) {
            el.remove();
        }
    }
}

#[component]
pub fn SeoMeta(config: SeoConfig) -> impl IntoView {
    let plan: HeadPlan = head_plan(&config);

    #[cfg(feature = "hydrate")]
    {
        let plan = plan.clone();
        Effect::new(move || apply_removals(&plan));
    }

    let tags: Vec<AnyView> = plan.upserts().map(render_tag).collect();
    view! {
        <Title text=plan.title.clone()/>
        {tags}
    }
}
