//! Reactive client state provided through Leptos context.

pub mod map_view;
