//! Light arbitration service — the single owner of LED state.
//!
//! Three sources compete for the one physical RGB LED: notifications,
//! attention and battery, in that priority order. The backlight has no
//! peers and is driven directly. Every update re-resolves the winner from
//! scratch and emits the full hardware sequence, even when the result is
//! "off" — an explicit dark pass is what clears a previously-active source.

use std::sync::Mutex;

use crate::error::{Result, TriledError};
use crate::light::{LightKind, LightRequest};
use crate::sink::LightSink;

/// The light kinds this service handles, in no significant order.
pub const SUPPORTED_KINDS: [LightKind; 4] = [
    LightKind::Backlight,
    LightKind::Battery,
    LightKind::Notifications,
    LightKind::Attention,
];

/// Arbitrates light requests onto a single sink.
///
/// One mutex covers the stored requests *and* the sink: an update, the
/// priority pass and the resulting channel writes form one critical
/// section, so concurrent callers can never interleave their hardware
/// sequences.
pub struct LightService<S> {
    inner: Mutex<Inner<S>>,
}

struct Inner<S> {
    sink: S,
    notification: LightRequest,
    attention: LightRequest,
    battery: LightRequest,
}

impl<S: LightSink> LightService<S> {
    /// Wrap an already-constructed sink. All stored requests start dark.
    pub fn new(sink: S) -> Self {
        LightService {
            inner: Mutex::new(Inner {
                sink,
                notification: LightRequest::off(),
                attention: LightRequest::off(),
                battery: LightRequest::off(),
            }),
        }
    }

    /// The fixed set of kinds this service handles.
    pub fn supported_kinds(&self) -> &'static [LightKind] {
        &SUPPORTED_KINDS
    }

    /// Store `request` for `kind` and push the re-resolved state to the sink.
    ///
    /// For the three priority kinds the stored request is replaced before
    /// emission, so a failed channel write leaves the store updated and the
    /// next pass re-emits the same resolved state. Unhandled kinds error
    /// without touching state or sink.
    pub fn set_light(&self, kind: LightKind, request: LightRequest) -> Result<()> {
        let mut inner = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("light state mutex poisoned — continuing with inner state");
                poisoned.into_inner()
            }
        };
        log::debug!("set_light {kind}: color={:#08x} {:?}", request.color, request.flash_mode);

        match kind {
            LightKind::Backlight => {
                inner.sink.write_backlight_brightness(request.brightness())?;
            }
            LightKind::Notifications => {
                inner.notification = request;
                inner.apply_prioritized()?;
            }
            LightKind::Attention => {
                inner.attention = request;
                inner.apply_prioritized()?;
            }
            LightKind::Battery => {
                inner.battery = request;
                inner.apply_prioritized()?;
            }
            other => return Err(TriledError::UnsupportedKind(other)),
        }
        Ok(())
    }

    /// Consume the service, returning the sink. Used for orderly shutdown
    /// and for inspecting a mock sink in tests.
    pub fn into_sink(self) -> S {
        match self.inner.into_inner() {
            Ok(inner) => inner.sink,
            Err(poisoned) => poisoned.into_inner().sink,
        }
    }
}

impl<S: LightSink> Inner<S> {
    /// Pick the highest-priority lit source and emit it. Re-evaluated from
    /// scratch on every update; the fallthrough emits an explicit off state.
    fn apply_prioritized(&mut self) -> crate::sink::Result<()> {
        let resolved = if self.notification.is_lit() {
            self.notification
        } else if self.attention.is_lit() {
            self.attention
        } else if self.battery.is_lit() {
            self.battery
        } else {
            LightRequest::off()
        };
        self.apply_state(&resolved)
    }

    /// Emit one full hardware pass for `state`.
    ///
    /// The sequence is fixed by the LED controller: drop all three lock
    /// triggers, program brightness, program blink timing, then raise the
    /// locks to latch the new configuration atomically.
    fn apply_state(&mut self, state: &LightRequest) -> crate::sink::Result<()> {
        let (r, g, b) = state.rgb();
        let (on_ms, off_ms) = state.timing();

        self.sink.write_red_lock(0)?;
        self.sink.write_green_lock(0)?;
        self.sink.write_blue_lock(0)?;

        self.sink.write_red_brightness(r)?;
        self.sink.write_green_brightness(g)?;
        self.sink.write_blue_brightness(b)?;

        self.sink.write_red_timeout(on_ms, off_ms)?;
        self.sink.write_green_timeout(on_ms, off_ms)?;
        self.sink.write_blue_timeout(on_ms, off_ms)?;

        self.sink.write_red_lock(1)?;
        self.sink.write_green_lock(1)?;
        self.sink.write_blue_lock(1)?;
        Ok(())
    }
}
