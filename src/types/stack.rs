//! Call stack snapshots taken when a [`CodedError`](crate::CodedError) is built.
//!
//! Capture is cheap relative to rendering: [`std::backtrace::Backtrace`]
//! resolves symbols lazily, and the parsed frame list is cached on first
//! render. The construction site is always recorded through `#[track_caller]`,
//! so even a disabled or unsupported backtrace still names the caller.
use std::backtrace::{Backtrace, BacktraceStatus};
use std::panic::Location;
use std::sync::OnceLock;

/// A single resolved frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Demangled, function-qualified symbol name.
    pub function: String,
    /// `file:line:column`, when debug info is available.
    pub location: Option<String>,
}

/// Opaque snapshot of the call frames active when an error was created.
pub struct CapturedStack {
    site: &'static Location<'static>,
    backtrace: Backtrace,
    frames: OnceLock<Vec<Frame>>,
}

impl CapturedStack {
    /// Captures the current stack. The site recorded is the nearest caller
    /// not marked `#[track_caller]`.
    #[track_caller]
    pub(crate) fn capture() -> Self {
        #[cfg(feature = "env-backtrace")]
        let backtrace = Backtrace::capture();
        #[cfg(not(feature = "env-backtrace"))]
        let backtrace = Backtrace::force_capture();

        Self { site: Location::caller(), backtrace, frames: OnceLock::new() }
    }

    /// Construction site of the owning error.
    #[inline]
    pub fn site(&self) -> &'static Location<'static> {
        self.site
    }

    /// Frames outside this crate, outermost caller last.
    ///
    /// Empty when the backtrace was disabled or is unsupported on this platform.
    pub fn frames(&self) -> &[Frame] {
        self.frames.get_or_init(|| match self.backtrace.status() {
            BacktraceStatus::Captured => {
                let mut frames = parse_frames(&self.backtrace.to_string());
                let internal = frames.iter().take_while(|f| is_internal(&f.function)).count();
                frames.drain(..internal);
                frames
            },
            _ => Vec::new(),
        })
    }

    /// Renders the stack as text.
    ///
    /// Verbose output has one `\n    at <function> (<file:line:col>)` line per
    /// frame, falling back to the construction site when no frames were
    /// captured. Non-verbose output is just the construction site.
    pub fn render(&self, verbose: bool) -> String {
        if !verbose {
            return format_site(self.site);
        }

        let frames = self.frames();
        let mut out = String::with_capacity(frames.len().max(1) * 64);
        if frames.is_empty() {
            out.push_str(&format!("\n    at {}", format_site(self.site)));
            return out;
        }
        for frame in frames {
            match &frame.location {
                Some(location) => {
                    out.push_str(&format!("\n    at {} ({})", frame.function, location));
                },
                None => {
                    out.push_str(&format!("\n    at {}", frame.function));
                },
            }
        }
        out
    }
}

impl core::fmt::Debug for CapturedStack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CapturedStack")
            .field("site", &format_args!("{}", format_site(self.site)))
            .field("status", &self.backtrace.status())
            .finish_non_exhaustive()
    }
}

fn format_site(site: &Location<'_>) -> String {
    format!("{}:{}:{}", site.file(), site.line(), site.column())
}

/// Frames belonging to the backtrace machinery or to this crate's constructors.
fn is_internal(function: &str) -> bool {
    let name = function.trim_start_matches('<');
    if name.contains("::tests::") {
        return false;
    }
    name.starts_with("std::backtrace")
        || name.starts_with("coded_error::")
        || name.contains(" as coded_error::")
}

/// Parses the textual form of a std backtrace:
///
/// ```text
///    0: crate::module::function
///              at ./src/module.rs:12:5
///       crate::module::inlined_into_frame_zero
///              at ./src/module.rs:40:9
///    1: std::rt::lang_start
/// ```
fn parse_frames(text: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(location) = trimmed.strip_prefix("at ") {
            if let Some(last) = frames.last_mut() {
                last.location = Some(location.trim_end().to_string());
            }
            continue;
        }
        let function = match trimmed.split_once(": ") {
            Some((index, rest)) if index.bytes().all(|b| b.is_ascii_digit()) => rest,
            _ => trimmed,
        };
        frames.push(Frame { function: function.trim_end().to_string(), location: None });
    }
    frames
}
