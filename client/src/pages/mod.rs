//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page sets its head metadata and composes `components`.

pub mod home;
pub mod how_it_works;
pub mod planner;

use leptos::prelude::use_context;

use crate::util::seo::SiteInfo;

/// Site info from context, else the browser origin, else the default.
pub(crate) fn site_info() -> SiteInfo {
    use_context::<SiteInfo>().or_else(SiteInfo::from_browser).unwrap_or_default()
}
