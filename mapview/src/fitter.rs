//! Keeps the track in view without fighting the user.
//!
//! ARCHITECTURE
//! ============
//! [`ViewportFitter`] owns the current track, the signature of the last track
//! it fitted, and a flag recording whether the user has navigated since. A new
//! track (different [`TrackSignature`]) clears the flag and always schedules a
//! fit; otherwise automatic fits stop once the user has panned or zoomed.
//! Automatic fits are parked in a [`FrameSlot`] and executed by the host on
//! the next animation frame, after the map container has its final size.
//! Recenter bypasses both the slot and the flag.
//!
//! State sits behind `Cell`/`RefCell` because Leaflet fires `movestart`
//! synchronously from inside `fitBounds`; the host's event handlers must be
//! able to reach the fitter while a fit is still on the stack.

#[cfg(test)]
#[path = "fitter_test.rs"]
mod fitter_test;

use std::cell::{Cell, RefCell};

use crate::consts::LOCATE_MAX_ZOOM;
use crate::geo::{GeoBounds, GeoPoint, TrackSignature};
use crate::overlay::{PaddingBox, ViewportProbe, probe_padding};
use crate::schedule::FrameSlot;

/// Options for centering on the user's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocateOptions {
    pub set_view: bool,
    pub max_zoom: f64,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self { set_view: true, max_zoom: LOCATE_MAX_ZOOM }
    }
}

/// The parts of the map engine the fitter drives.
pub trait MapEngine {
    /// Re-measure the container after layout changes.
    fn invalidate_size(&mut self);

    /// Move the view so `bounds` is visible inside `padding`.
    fn fit_bounds(&mut self, bounds: &GeoBounds, padding: &PaddingBox, animate: bool);

    /// Ask the browser for the user's position and center on it.
    fn locate_user(&mut self, options: &LocateOptions);
}

/// How pan/zoom-start events raised by the fitter's own moves are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionPolicy {
    /// Moves caused by a fit do not count as user navigation.
    #[default]
    IgnoreProgrammatic,
    /// Every pan/zoom start counts, including ones a fit triggers.
    CountProgrammatic,
}

/// Why a fit was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitReason {
    /// The track signature changed.
    NewTrack,
    /// Same track, layout or content changed, user has not navigated.
    Refresh,
    /// Explicit recenter request.
    Recenter,
}

/// A fully resolved fit, ready to hand to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRequest {
    pub bounds: GeoBounds,
    pub padding: PaddingBox,
    pub animate: bool,
    pub reason: FitReason,
    pub signature: TrackSignature,
}

/// Why no fit happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyTrack,
    UserNavigated,
}

/// Outcome of a fit-related call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitDecision {
    /// Parked for the next frame; `superseded` when it replaced a pending fit.
    Scheduled { superseded: bool },
    /// Sent to the engine immediately.
    Applied,
    Skipped(SkipReason),
}

/// Viewport fitting state for one map instance.
#[derive(Debug, Default)]
pub struct ViewportFitter {
    policy: InteractionPolicy,
    track: RefCell<Vec<GeoPoint>>,
    last_applied: Cell<Option<TrackSignature>>,
    user_navigated: Cell<bool>,
    fit_in_flight: Cell<bool>,
    pending: FrameSlot<FitRequest>,
}

impl ViewportFitter {
    #[must_use]
    pub fn new(policy: InteractionPolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    // --- Inputs ---

    /// Replace the track and decide whether to schedule an automatic fit.
    pub fn set_track(&self, track: Vec<GeoPoint>, probe: &dyn ViewportProbe) -> FitDecision {
        let signature = TrackSignature::of(&track);
        *self.track.borrow_mut() = track;

        let Some(signature) = signature else {
            if self.pending.take().is_some() {
                log::debug!("track cleared, dropped pending fit");
            }
            return FitDecision::Skipped(SkipReason::EmptyTrack);
        };

        let reason = if self.last_applied.get() == Some(signature) {
            if self.user_navigated.get() {
                log::debug!("same track after user navigation, not refitting");
                return FitDecision::Skipped(SkipReason::UserNavigated);
            }
            FitReason::Refresh
        } else {
            self.user_navigated.set(false);
            FitReason::NewTrack
        };
        self.schedule_fit(reason, probe)
    }

    /// Window resized or a panel appeared/disappeared.
    pub fn relayout(&self, probe: &dyn ViewportProbe) -> FitDecision {
        if self.user_navigated.get() && !self.track.borrow().is_empty() {
            return FitDecision::Skipped(SkipReason::UserNavigated);
        }
        self.schedule_fit(FitReason::Refresh, probe)
    }

    /// Leaflet `movestart`.
    pub fn on_move_start(&self) {
        self.note_navigation("move");
    }

    /// Leaflet `zoomstart`.
    pub fn on_zoom_start(&self) {
        self.note_navigation("zoom");
    }

    /// Leaflet `moveend`; closes the window of an animated fit.
    pub fn on_move_end(&self) {
        self.fit_in_flight.set(false);
    }

    // --- Engine driving ---

    /// Execute the pending fit, if any. Called from the frame callback.
    pub fn run_pending(&self, engine: &mut dyn MapEngine) -> Option<FitRequest> {
        let request = self.pending.take()?;
        self.drive(engine, &request);
        self.last_applied.set(Some(request.signature));
        log::debug!("applied {:?} fit for {} points", request.reason, request.signature.len);
        Some(request)
    }

    /// Fit to the whole track now, animated, regardless of user navigation.
    pub fn recenter(&self, probe: &dyn ViewportProbe, engine: &mut dyn MapEngine) -> FitDecision {
        let Some(request) = self.build_request(FitReason::Recenter, probe) else {
            return FitDecision::Skipped(SkipReason::EmptyTrack);
        };
        self.drive(engine, &request);
        FitDecision::Applied
    }

    // --- Queries ---

    /// Recenter is only meaningful with a track loaded.
    #[must_use]
    pub fn can_recenter(&self) -> bool {
        !self.track.borrow().is_empty()
    }

    #[must_use]
    pub fn user_has_navigated(&self) -> bool {
        self.user_navigated.get()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_pending()
    }

    #[must_use]
    pub fn last_applied(&self) -> Option<TrackSignature> {
        self.last_applied.get()
    }

    #[must_use]
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(&self.track.borrow())
    }

    // --- Internals ---

    fn build_request(&self, reason: FitReason, probe: &dyn ViewportProbe) -> Option<FitRequest> {
        let track = self.track.borrow();
        let signature = TrackSignature::of(&track)?;
        let bounds = GeoBounds::from_points(&track)?;
        Some(FitRequest {
            bounds,
            padding: probe_padding(probe).padding,
            animate: reason == FitReason::Recenter,
            reason,
            signature,
        })
    }

    fn schedule_fit(&self, reason: FitReason, probe: &dyn ViewportProbe) -> FitDecision {
        let Some(request) = self.build_request(reason, probe) else {
            return FitDecision::Skipped(SkipReason::EmptyTrack);
        };
        let superseded = self.pending.schedule(request).is_some();
        if superseded {
            log::debug!("{reason:?} fit superseded a pending fit");
        }
        FitDecision::Scheduled { superseded }
    }

    fn drive(&self, engine: &mut dyn MapEngine, request: &FitRequest) {
        // invalidateSize may emit its own moveend; size first, then open the window.
        engine.invalidate_size();
        self.fit_in_flight.set(true);
        engine.fit_bounds(&request.bounds, &request.padding, request.animate);
        if !request.animate {
            self.fit_in_flight.set(false);
        }
    }

    fn note_navigation(&self, kind: &str) {
        if self.policy == InteractionPolicy::IgnoreProgrammatic && self.fit_in_flight.get() {
            log::trace!("{kind} start during fit ignored");
            return;
        }
        if !self.user_navigated.replace(true) {
            log::debug!("{kind} start, automatic fits suspended");
        }
    }
}
