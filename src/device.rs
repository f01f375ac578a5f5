//! Pointer device binding.
//!
//! One family of input events (mouse or touch) is chosen at startup and every
//! raw window event of that family is translated into a [`PointerEvent`].
//! Events of the other family are dropped.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use winit::event::TouchPhase;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Device-independent drag protocol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceFamily {
    Mouse,
    Touch,
}

impl DeviceFamily {
    /// Picks the family for a configured preference, probing only for `Auto`.
    pub fn resolve(preference: DevicePreference, probe: impl FnOnce() -> bool) -> Self {
        match preference {
            DevicePreference::Mouse => DeviceFamily::Mouse,
            DevicePreference::Touch => DeviceFamily::Touch,
            DevicePreference::Auto => {
                if probe() {
                    DeviceFamily::Touch
                } else {
                    DeviceFamily::Mouse
                }
            }
        }
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceFamily::Mouse => write!(f, "mouse"),
            DeviceFamily::Touch => write!(f, "touch"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DevicePreference {
    #[default]
    Auto,
    Mouse,
    Touch,
}

impl From<DeviceFamily> for DevicePreference {
    fn from(family: DeviceFamily) -> Self {
        match family {
            DeviceFamily::Mouse => DevicePreference::Mouse,
            DeviceFamily::Touch => DevicePreference::Touch,
        }
    }
}

/// Best-effort touchscreen detection. Any failure counts as "no touch".
pub fn probe_touch_support() -> bool {
    match detect_touchscreen() {
        Ok(found) => found,
        Err(err) => {
            log::debug!("Touch probe failed, assuming mouse input: {}", err);
            false
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_touchscreen() -> io::Result<bool> {
    let devices = std::fs::read_to_string("/proc/bus/input/devices")?;
    Ok(lists_touchscreen(&devices))
}

#[cfg(not(target_os = "linux"))]
fn detect_touchscreen() -> io::Result<bool> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "no touch probe for this platform",
    ))
}

/// Scans a `/proc/bus/input/devices` listing for a device named as a touch input.
pub fn lists_touchscreen(devices: &str) -> bool {
    devices
        .lines()
        .filter_map(|line| line.strip_prefix("N: Name="))
        .any(|name| {
            let name = name.to_ascii_lowercase();
            name.contains("touchscreen") || (name.contains("touch") && !name.contains("touchpad"))
        })
}

/// Converts raw window events of the bound family into pointer events.
#[derive(Debug)]
pub enum PointerTranslator {
    Mouse {
        cursor: Option<Point>,
    },
    Touch {
        primary: Option<u64>,
    },
}

impl PointerTranslator {
    pub fn new(family: DeviceFamily) -> Self {
        match family {
            DeviceFamily::Mouse => PointerTranslator::Mouse { cursor: None },
            DeviceFamily::Touch => PointerTranslator::Touch { primary: None },
        }
    }

    pub fn family(&self) -> DeviceFamily {
        match self {
            PointerTranslator::Mouse { .. } => DeviceFamily::Mouse,
            PointerTranslator::Touch { .. } => DeviceFamily::Touch,
        }
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Option<PointerEvent> {
        match self {
            PointerTranslator::Mouse { cursor } => {
                let point = Point::new(x, y);
                *cursor = Some(point);
                Some(PointerEvent::Move(point))
            }
            PointerTranslator::Touch { .. } => None,
        }
    }

    /// Primary (left) button changes. Other buttons never reach here.
    pub fn primary_button(&mut self, down: bool) -> Option<PointerEvent> {
        match self {
            PointerTranslator::Mouse { cursor } => {
                if down {
                    cursor.map(PointerEvent::Down)
                } else {
                    Some(PointerEvent::Up)
                }
            }
            PointerTranslator::Touch { .. } => None,
        }
    }

    pub fn touch(&mut self, id: u64, phase: TouchPhase, x: f64, y: f64) -> Option<PointerEvent> {
        let PointerTranslator::Touch { primary } = self else {
            return None;
        };
        let point = Point::new(x, y);

        match phase {
            TouchPhase::Started => {
                if primary.is_some() {
                    return None;
                }
                *primary = Some(id);
                Some(PointerEvent::Down(point))
            }
            _ if *primary != Some(id) => None,
            TouchPhase::Moved => Some(PointerEvent::Move(point)),
            TouchPhase::Ended => {
                *primary = None;
                Some(PointerEvent::Up)
            }
            TouchPhase::Cancelled => {
                *primary = None;
                Some(PointerEvent::Cancel)
            }
        }
    }

    /// Window focus loss interrupts any gesture in progress.
    pub fn focus_lost(&mut self) -> Option<PointerEvent> {
        if let PointerTranslator::Touch { primary } = self {
            *primary = None;
        }
        Some(PointerEvent::Cancel)
    }
}
