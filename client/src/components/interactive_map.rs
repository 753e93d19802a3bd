//! Map host: mounts Leaflet and feeds it from [`MapViewState`].
//!
//! ARCHITECTURE
//! ============
//! `mapview::fitter::ViewportFitter` decides when and how to fit the track;
//! this component forwards map events to it and runs its pending fit on the
//! next animation frame through [`LeafletBridge`]. Map handlers only touch
//! the fitter, never the bridge, since Leaflet calls them synchronously
//! while a fit holds the bridge borrow.

use leptos::prelude::*;

use crate::components::map_controls::{LocateButton, RecenterButton, TileSelector};
#[cfg(feature = "hydrate")]
use crate::state::map_view::MapViewState;
#[cfg(feature = "hydrate")]
use crate::util::dom_probe::DomProbe;
#[cfg(feature = "hydrate")]
use crate::util::leaflet::LeafletBridge;
#[cfg(feature = "hydrate")]
use crate::util::next_frame::NextFrame;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use mapview::consts::{FALLBACK_CENTER_LON_LAT, INITIAL_ZOOM};
#[cfg(feature = "hydrate")]
use mapview::fitter::{InteractionPolicy, LocateOptions, MapEngine, ViewportFitter};
#[cfg(feature = "hydrate")]
use mapview::geo::GeoPoint;

#[cfg(feature = "hydrate")]
type SharedBridge = Rc<RefCell<Option<LeafletBridge>>>;

/// Run the fitter's pending fit on the next frame, if there is one.
#[cfg(feature = "hydrate")]
fn flush_on_next_frame(fitter: &Rc<ViewportFitter>, bridge: &SharedBridge, frame: &NextFrame) {
    if !fitter.has_pending() {
        return;
    }
    let fitter = Rc::clone(fitter);
    let bridge = Rc::clone(bridge);
    let next = frame.clone();
    frame.request(move || {
        let Ok(mut guard) = bridge.try_borrow_mut() else {
            // The fit stays in the fitter's slot; try again next frame.
            log::debug!("map busy, deferred fit retried next frame");
            flush_on_next_frame(&fitter, &bridge, &next);
            return;
        };
        if let Some(bridge) = guard.as_mut() {
            fitter.run_pending(bridge);
        }
    });
}

#[cfg(feature = "hydrate")]
fn initial_center(map_view: RwSignal<MapViewState>) -> GeoPoint {
    map_view.with_untracked(|s| s.trip.track.first().copied()).unwrap_or_else(|| {
        let (lon, lat) = FALLBACK_CENTER_LON_LAT;
        GeoPoint::new(lon, lat)
    })
}

#[cfg(feature = "hydrate")]
fn wire_map_events(instance: &mut LeafletBridge, fitter: &Rc<ViewportFitter>, bridge: &SharedBridge, frame: &NextFrame) {
    let on_move_start = Rc::clone(fitter);
    instance.on("movestart", move |_| on_move_start.on_move_start());
    let on_zoom_start = Rc::clone(fitter);
    instance.on("zoomstart", move |_| on_zoom_start.on_zoom_start());
    let on_move_end = Rc::clone(fitter);
    instance.on("moveend", move |_| on_move_end.on_move_end());

    let on_resize = Rc::clone(fitter);
    let bridge = Rc::clone(bridge);
    let frame = frame.clone();
    instance.on("resize", move |_| {
        on_resize.relayout(&DomProbe);
        flush_on_next_frame(&on_resize, &bridge, &frame);
    });
}

/// Leaflet map with track, POI markers, and floating controls.
#[component]
pub fn InteractiveMap() -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let map_view = expect_context::<RwSignal<MapViewState>>();
        let fitter = Rc::new(ViewportFitter::new(InteractionPolicy::default()));
        let bridge: SharedBridge = Rc::new(RefCell::new(None));
        let frame = NextFrame::new();
        let mounted = RwSignal::new(false);
        let last_recenter_seq = RwSignal::new(map_view.with_untracked(|s| s.recenter_seq));
        let last_locate_seq = RwSignal::new(map_view.with_untracked(|s| s.locate_seq));

        let trip = Memo::new(move |_| map_view.with(|s| s.trip.clone()));
        let tile = Memo::new(move |_| map_view.with(|s| s.active_tile().cloned()));
        let sheet_open = Memo::new(move |_| map_view.with(|s| s.sheet_open));

        // Mount once the container exists.
        {
            let fitter = Rc::clone(&fitter);
            let bridge = Rc::clone(&bridge);
            let frame = frame.clone();
            Effect::new(move || {
                let Some(container) = container_ref.get() else {
                    return;
                };
                if bridge.borrow().is_some() {
                    return;
                }
                let Some(mut instance) = LeafletBridge::mount(&container, initial_center(map_view), INITIAL_ZOOM)
                else {
                    return;
                };
                wire_map_events(&mut instance, &fitter, &bridge, &frame);
                *bridge.borrow_mut() = Some(instance);
                mounted.set(true);
            });
        }

        {
            let bridge = Rc::clone(&bridge);
            Effect::new(move || {
                if !mounted.get() {
                    return;
                }
                let Some(source) = tile.get() else {
                    return;
                };
                if let Some(bridge) = bridge.borrow_mut().as_mut() {
                    bridge.set_tiles(&source);
                }
            });
        }

        {
            let fitter = Rc::clone(&fitter);
            let bridge = Rc::clone(&bridge);
            let frame = frame.clone();
            Effect::new(move || {
                if !mounted.get() {
                    return;
                }
                let trip = trip.get();
                if let Some(bridge) = bridge.borrow_mut().as_mut() {
                    bridge.set_track(&trip.track);
                    let colors = mapview::palette::CategoryColorMap::from_pois(&trip.pois);
                    bridge.set_markers(&trip.pois, &colors);
                }
                let decision = fitter.set_track(trip.track, &DomProbe);
                log::debug!("track update: {decision:?}");
                flush_on_next_frame(&fitter, &bridge, &frame);

                let can_recenter = fitter.can_recenter();
                if map_view.with_untracked(|s| s.can_recenter) != can_recenter {
                    map_view.update(|s| s.can_recenter = can_recenter);
                }
            });
        }

        // Panels changed size; padding must be recomputed.
        {
            let fitter = Rc::clone(&fitter);
            let bridge = Rc::clone(&bridge);
            let frame = frame.clone();
            Effect::new(move |prev: Option<bool>| {
                let open = sheet_open.get();
                if mounted.get() && prev.is_some_and(|p| p != open) {
                    fitter.relayout(&DomProbe);
                    flush_on_next_frame(&fitter, &bridge, &frame);
                }
                open
            });
        }

        {
            let fitter = Rc::clone(&fitter);
            let bridge = Rc::clone(&bridge);
            Effect::new(move || {
                let seq = map_view.with(|s| s.recenter_seq);
                if seq == last_recenter_seq.get_untracked() {
                    return;
                }
                last_recenter_seq.set(seq);
                let Ok(mut guard) = bridge.try_borrow_mut() else {
                    return;
                };
                if let Some(bridge) = guard.as_mut() {
                    let decision = fitter.recenter(&DomProbe, bridge);
                    log::debug!("recenter: {decision:?}");
                }
            });
        }

        {
            let bridge = Rc::clone(&bridge);
            Effect::new(move || {
                let seq = map_view.with(|s| s.locate_seq);
                if seq == last_locate_seq.get_untracked() {
                    return;
                }
                last_locate_seq.set(seq);
                if let Some(bridge) = bridge.borrow_mut().as_mut() {
                    bridge.locate_user(&LocateOptions::default());
                }
            });
        }

        let cleanup_bridge = StoredValue::new_local(Rc::clone(&bridge));
        on_cleanup(move || {
            if let Some(instance) = cleanup_bridge.try_with_value(|b| b.borrow_mut().take()).flatten() {
                instance.destroy();
            }
        });
    }

    view! {
        <div class="map-wrapper">
            <div class="map" node_ref=container_ref></div>
            <div class="map-controls">
                <LocateButton/>
                <RecenterButton/>
                <TileSelector/>
            </div>
        </div>
    }
}
