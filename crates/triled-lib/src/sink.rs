//! Channel sink — trait + sysfs backend.
//!
//! The service never touches device files directly; it writes through
//! [`LightSink`], which exposes one write method per physical channel. The
//! production backend is [`SysfsSink`] over the kernel LED class attribute
//! files; tests substitute [`mock::MockSink`].

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::config::SinkPaths;

// ── Error type ──

/// The ten physical output channels, named for error reporting and the
/// mock's write log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    BacklightBrightness,
    RedBrightness,
    GreenBrightness,
    BlueBrightness,
    RedTimeout,
    GreenTimeout,
    BlueTimeout,
    RedLock,
    GreenLock,
    BlueLock,
}

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::BacklightBrightness => "backlight brightness",
            Channel::RedBrightness => "red brightness",
            Channel::GreenBrightness => "green brightness",
            Channel::BlueBrightness => "blue brightness",
            Channel::RedTimeout => "red on/off timing",
            Channel::GreenTimeout => "green on/off timing",
            Channel::BlueTimeout => "blue on/off timing",
            Channel::RedLock => "red lock",
            Channel::GreenLock => "green lock",
            Channel::BlueLock => "blue lock",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink errors.
///
/// `Unavailable` is construction-time only: a missing channel prevents the
/// whole sink from being built. `WriteFailed` is per-write and leaves the
/// sink usable for subsequent passes.
#[derive(Debug)]
pub enum SinkError {
    Unavailable { channel: Channel, detail: String },
    WriteFailed { channel: Channel, detail: String },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Unavailable { channel, detail } => {
                write!(f, "Channel unavailable ({channel}): {detail}")
            }
            SinkError::WriteFailed { channel, detail } => {
                write!(f, "Channel write failed ({channel}): {detail}")
            }
        }
    }
}

impl std::error::Error for SinkError {}

pub type Result<T> = std::result::Result<T, SinkError>;

// ── Trait ──

/// One ordered, append-style write operation per physical channel.
///
/// Lock channels take the raw `0`/`1` the hardware expects; timing channels
/// take the `(on_ms, off_ms)` pair. Implementations must keep writes to a
/// single channel ordered and must not buffer across calls.
pub trait LightSink {
    fn write_backlight_brightness(&mut self, value: u32) -> Result<()>;
    fn write_red_brightness(&mut self, value: u32) -> Result<()>;
    fn write_green_brightness(&mut self, value: u32) -> Result<()>;
    fn write_blue_brightness(&mut self, value: u32) -> Result<()>;
    fn write_red_timeout(&mut self, on_ms: u32, off_ms: u32) -> Result<()>;
    fn write_green_timeout(&mut self, on_ms: u32, off_ms: u32) -> Result<()>;
    fn write_blue_timeout(&mut self, on_ms: u32, off_ms: u32) -> Result<()>;
    fn write_red_lock(&mut self, value: u32) -> Result<()>;
    fn write_green_lock(&mut self, value: u32) -> Result<()>;
    fn write_blue_lock(&mut self, value: u32) -> Result<()>;
}

// ── Sysfs backend ──

/// Sink over the kernel LED class sysfs attributes.
///
/// All ten attribute files are opened up front; if any is missing the whole
/// construction fails and nothing is handed out. Each write emits the
/// newline-terminated decimal text the LED class driver parses.
#[derive(Debug)]
pub struct SysfsSink {
    backlight: File,
    red_brightness: File,
    green_brightness: File,
    blue_brightness: File,
    red_timeout: File,
    green_timeout: File,
    blue_timeout: File,
    red_lock: File,
    green_lock: File,
    blue_lock: File,
}

fn open_channel(channel: Channel, path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| SinkError::Unavailable {
            channel,
            detail: format!("{}: {e}", path.display()),
        })
}

fn put(file: &mut File, channel: Channel, text: &str) -> Result<()> {
    file.write_all(text.as_bytes())
        .map_err(|e| SinkError::WriteFailed {
            channel,
            detail: e.to_string(),
        })
}

impl SysfsSink {
    /// Open every channel named in `paths`. Fails on the first channel that
    /// cannot be acquired.
    pub fn open(paths: &SinkPaths) -> Result<Self> {
        Ok(SysfsSink {
            backlight: open_channel(Channel::BacklightBrightness, &paths.backlight)?,
            red_brightness: open_channel(Channel::RedBrightness, &paths.red_brightness)?,
            green_brightness: open_channel(Channel::GreenBrightness, &paths.green_brightness)?,
            blue_brightness: open_channel(Channel::BlueBrightness, &paths.blue_brightness)?,
            red_timeout: open_channel(Channel::RedTimeout, &paths.red_timeout)?,
            green_timeout: open_channel(Channel::GreenTimeout, &paths.green_timeout)?,
            blue_timeout: open_channel(Channel::BlueTimeout, &paths.blue_timeout)?,
            red_lock: open_channel(Channel::RedLock, &paths.red_lock)?,
            green_lock: open_channel(Channel::GreenLock, &paths.green_lock)?,
            blue_lock: open_channel(Channel::BlueLock, &paths.blue_lock)?,
        })
    }
}

impl LightSink for SysfsSink {
    fn write_backlight_brightness(&mut self, value: u32) -> Result<()> {
        put(
            &mut self.backlight,
            Channel::BacklightBrightness,
            &format!("{value}\n"),
        )
    }

    fn write_red_brightness(&mut self, value: u32) -> Result<()> {
        put(
            &mut self.red_brightness,
            Channel::RedBrightness,
            &format!("{value}\n"),
        )
    }

    fn write_green_brightness(&mut self, value: u32) -> Result<()> {
        put(
            &mut self.green_brightness,
            Channel::GreenBrightness,
            &format!("{value}\n"),
        )
    }

    fn write_blue_brightness(&mut self, value: u32) -> Result<()> {
        put(
            &mut self.blue_brightness,
            Channel::BlueBrightness,
            &format!("{value}\n"),
        )
    }

    fn write_red_timeout(&mut self, on_ms: u32, off_ms: u32) -> Result<()> {
        put(
            &mut self.red_timeout,
            Channel::RedTimeout,
            &format!("{on_ms} {off_ms}\n"),
        )
    }

    fn write_green_timeout(&mut self, on_ms: u32, off_ms: u32) -> Result<()> {
        put(
            &mut self.green_timeout,
            Channel::GreenTimeout,
            &format!("{on_ms} {off_ms}\n"),
        )
    }

    fn write_blue_timeout(&mut self, on_ms: u32, off_ms: u32) -> Result<()> {
        put(
            &mut self.blue_timeout,
            Channel::BlueTimeout,
            &format!("{on_ms} {off_ms}\n"),
        )
    }

    fn write_red_lock(&mut self, value: u32) -> Result<()> {
        put(&mut self.red_lock, Channel::RedLock, &format!("{value}\n"))
    }

    fn write_green_lock(&mut self, value: u32) -> Result<()> {
        put(
            &mut self.green_lock,
            Channel::GreenLock,
            &format!("{value}\n"),
        )
    }

    fn write_blue_lock(&mut self, value: u32) -> Result<()> {
        put(
            &mut self.blue_lock,
            Channel::BlueLock,
            &format!("{value}\n"),
        )
    }
}

// ── Mock sink for tests ──

pub mod mock {
    use super::*;

    /// LED color channel, for the mock's compact write log.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Led {
        Red,
        Green,
        Blue,
    }

    /// One recorded sink write, in call order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum WriteOp {
        Backlight(u32),
        Brightness(Led, u32),
        Timeout(Led, u32, u32),
        Lock(Led, u32),
    }

    /// In-memory sink for unit tests. Records every write in order;
    /// `fail_writes` makes every subsequent write return `WriteFailed`.
    #[derive(Debug, Default)]
    pub struct MockSink {
        pub writes: Vec<WriteOp>,
        pub fail_writes: bool,
    }

    impl MockSink {
        pub fn new() -> Self {
            MockSink::default()
        }

        pub fn clear(&mut self) {
            self.writes.clear();
        }

        fn record(&mut self, channel: Channel, op: WriteOp) -> Result<()> {
            if self.fail_writes {
                return Err(SinkError::WriteFailed {
                    channel,
                    detail: "mock write failure".into(),
                });
            }
            self.writes.push(op);
            Ok(())
        }
    }

    impl LightSink for MockSink {
        fn write_backlight_brightness(&mut self, value: u32) -> Result<()> {
            self.record(Channel::BacklightBrightness, WriteOp::Backlight(value))
        }

        fn write_red_brightness(&mut self, value: u32) -> Result<()> {
            self.record(
                Channel::RedBrightness,
                WriteOp::Brightness(Led::Red, value),
            )
        }

        fn write_green_brightness(&mut self, value: u32) -> Result<()> {
            self.record(
                Channel::GreenBrightness,
                WriteOp::Brightness(Led::Green, value),
            )
        }

        fn write_blue_brightness(&mut self, value: u32) -> Result<()> {
            self.record(
                Channel::BlueBrightness,
                WriteOp::Brightness(Led::Blue, value),
            )
        }

        fn write_red_timeout(&mut self, on_ms: u32, off_ms: u32) -> Result<()> {
            self.record(Channel::RedTimeout, WriteOp::Timeout(Led::Red, on_ms, off_ms))
        }

        fn write_green_timeout(&mut self, on_ms: u32, off_ms: u32) -> Result<()> {
            self.record(
                Channel::GreenTimeout,
                WriteOp::Timeout(Led::Green, on_ms, off_ms),
            )
        }

        fn write_blue_timeout(&mut self, on_ms: u32, off_ms: u32) -> Result<()> {
            self.record(
                Channel::BlueTimeout,
                WriteOp::Timeout(Led::Blue, on_ms, off_ms),
            )
        }

        fn write_red_lock(&mut self, value: u32) -> Result<()> {
            self.record(Channel::RedLock, WriteOp::Lock(Led::Red, value))
        }

        fn write_green_lock(&mut self, value: u32) -> Result<()> {
            self.record(Channel::GreenLock, WriteOp::Lock(Led::Green, value))
        }

        fn write_blue_lock(&mut self, value: u32) -> Result<()> {
            self.record(Channel::BlueLock, WriteOp::Lock(Led::Blue, value))
        }
    }
}
