//! Physical channel names and the driver's channel-list syntax.
//!
//! Physical channels look like `Dev1/ai0`, `Dev1/port0/line3`, `Dev1/ctr1`
//! or `Dev1/PFI4`. Channel lists separate names with commas and write a
//! contiguous block as a range, `Dev1/ai0:3` (or descending, `Dev1/ai3:0`).
//! Terminals are the same names with a leading `/`.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DaqmxError, Result};
use crate::utils::split_list;

fn range_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?P<prefix>.*?)(?P<start>\d+):(?P<end>\d+)$").expect("valid range regex"))
}

fn channel_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^/?(?P<device>[^/\s]+)/(?:(?P<kind>ai|ao|ctr|pfi)(?P<index>\d+)|port(?P<port>\d+)(?:/line(?P<line>\d+))?)$",
        )
        .expect("valid channel regex")
    })
}

fn parse_index(digits: &str, item: &str) -> Result<u32> {
    digits
        .parse()
        .map_err(|_| DaqmxError::InvalidArgument(format!("index out of range in '{item}'")))
}

/// Most names a single range may expand to.
pub const MAX_RANGE_SPAN: u32 = 65_536;

/// Expands a channel list into individual names, in list order.
pub fn expand_channel_list(list: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for item in split_list(list) {
        if !item.contains(':') {
            names.push(item);
            continue;
        }
        let caps = range_regex()
            .captures(&item)
            .ok_or_else(|| DaqmxError::InvalidArgument(format!("malformed channel range '{item}'")))?;
        let prefix = &caps["prefix"];
        let start = parse_index(&caps["start"], &item)?;
        let end = parse_index(&caps["end"], &item)?;
        if start.abs_diff(end) >= MAX_RANGE_SPAN {
            return Err(DaqmxError::InvalidArgument(format!(
                "channel range '{item}' spans more than {MAX_RANGE_SPAN} channels"
            )));
        }
        if start <= end {
            names.extend((start..=end).map(|i| format!("{prefix}{i}")));
        } else {
            names.extend((end..=start).rev().map(|i| format!("{prefix}{i}")));
        }
    }
    Ok(names)
}

pub fn join_channel_list<S: AsRef<str>>(names: &[S]) -> String {
    names.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
}

/// Terminal name of a device signal, e.g. `terminal("Dev1", "PFI0")` is
/// `/Dev1/PFI0`.
pub fn terminal(device: &str, name: &str) -> String {
    format!("/{device}/{name}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Ai(u32),
    Ao(u32),
    Port(u32),
    Line { port: u32, line: u32 },
    Ctr(u32),
    Pfi(u32),
}

/// A single physical channel, split into device and channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhysicalChannel {
    pub device: String,
    pub kind: ChannelKind,
}

impl PhysicalChannel {
    pub fn new(device: &str, kind: ChannelKind) -> Self {
        Self {
            device: device.to_string(),
            kind,
        }
    }

    /// This channel as a terminal (`/Dev1/PFI0`).
    pub fn terminal(&self) -> String {
        format!("/{self}")
    }
}

impl FromStr for PhysicalChannel {
    type Err = DaqmxError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let caps = channel_regex()
            .captures(s)
            .ok_or_else(|| DaqmxError::InvalidArgument(format!("'{s}' is not a physical channel name")))?;
        let kind = if let Some(kind) = caps.name("kind") {
            let index = parse_index(&caps["index"], s)?;
            match kind.as_str().to_ascii_lowercase().as_str() {
                "ai" => ChannelKind::Ai(index),
                "ao" => ChannelKind::Ao(index),
                "ctr" => ChannelKind::Ctr(index),
                _ => ChannelKind::Pfi(index),
            }
        } else {
            let port = parse_index(&caps["port"], s)?;
            match caps.name("line") {
                Some(line) => ChannelKind::Line {
                    port,
                    line: parse_index(line.as_str(), s)?,
                },
                None => ChannelKind::Port(port),
            }
        };
        Ok(Self::new(&caps["device"], kind))
    }
}

impl fmt::Display for PhysicalChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let device = &self.device;
        match self.kind {
            ChannelKind::Ai(i) => write!(f, "{device}/ai{i}"),
            ChannelKind::Ao(i) => write!(f, "{device}/ao{i}"),
            ChannelKind::Port(p) => write!(f, "{device}/port{p}"),
            ChannelKind::Line { port, line } => write!(f, "{device}/port{port}/line{line}"),
            ChannelKind::Ctr(i) => write!(f, "{device}/ctr{i}"),
            ChannelKind::Pfi(i) => write!(f, "{device}/PFI{i}"),
        }
    }
}
