//! Map view core for the WhatsAround trip planner.
//!
//! Everything in this crate is plain Rust with no browser dependencies, so the
//! viewport-fitting rules can be exercised natively. The `client` crate owns
//! the Leaflet bridge and DOM probing and drives the types defined here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geo`] | Geographic points, bounds, and track signatures |
//! | [`overlay`] | Screen rectangles, the viewport probe, and padding computation |
//! | [`fitter`] | Re-fit decisions, recenter, and user-interaction tracking |
//! | [`schedule`] | Single-slot deferred task used for next-frame fits |
//! | [`palette`] | Category to marker color assignment |
//! | [`poi`] | Points of interest as delivered by the planner backend |
//! | [`marker`] | Marker icon, tooltip, and popup content |
//! | [`tiles`] | Tile source catalog |
//! | [`trip`] | Trip document parsing and validation |
//! | [`consts`] | Shared numeric and styling constants |

pub mod consts;
pub mod fitter;
pub mod geo;
pub mod marker;
pub mod overlay;
pub mod palette;
pub mod poi;
pub mod schedule;
pub mod tiles;
pub mod trip;
