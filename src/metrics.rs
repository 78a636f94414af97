//! Terminal size discovery.
//!
//! Structure:
//! - Constants: the fallback size
//! - Types: size snapshot, metrics capability
//! - Pure functions: environment override parsing
//! - Effect functions: live terminal query

use std::io::IsTerminal;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Columns used when the terminal cannot be queried.
pub const DEFAULT_WIDTH: u16 = 80;

/// Rows used when the terminal cannot be queried.
pub const DEFAULT_HEIGHT: u16 = 20;

// ============================================================================
// TYPES
// ============================================================================

/// A single, consistent reading of the terminal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

impl TerminalSize {
    /// 80×20, substituted whenever the real size is unknown.
    pub const DEFAULT: TerminalSize = TerminalSize {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
    };

    pub fn new(width: u16, height: u16) -> Self {
        TerminalSize { width, height }
    }
}

impl Default for TerminalSize {
    fn default() -> Self {
        TerminalSize::DEFAULT
    }
}

/// Source of terminal dimensions.
///
/// Renderers call [`TerminalMetrics::size`] once and use that snapshot for
/// the whole render, so a resize mid-render is never observed.
pub trait TerminalMetrics {
    fn size(&self) -> TerminalSize;

    fn width(&self) -> u16 {
        self.size().width
    }

    fn height(&self) -> u16 {
        self.size().height
    }
}

/// Metrics of the process's controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveTerminal;

/// Metrics pinned to a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTerminal(pub TerminalSize);

impl FixedTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        FixedTerminal(TerminalSize::new(width, height))
    }
}

impl TerminalMetrics for FixedTerminal {
    fn size(&self) -> TerminalSize {
        self.0
    }
}

impl TerminalMetrics for LiveTerminal {
    fn size(&self) -> TerminalSize {
        detect_size()
    }
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Parse a `COLUMNS` / `LINES` style override. Zero and garbage are ignored.
pub fn parse_dimension(value: Option<&str>) -> Option<u16> {
    value
        .and_then(|v| v.trim().parse::<u16>().ok())
        .filter(|&n| n > 0)
}

/// Combine environment overrides with a queried size.
///
/// Each override wins over the queried value for its own axis; a missing or
/// zero queried axis falls back to the default.
pub fn resolve_size(
    columns: Option<u16>,
    lines: Option<u16>,
    queried: Option<(u16, u16)>,
) -> TerminalSize {
    let (queried_w, queried_h) = queried
        .filter(|&(w, h)| w > 0 && h > 0)
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT));

    TerminalSize {
        width: columns.unwrap_or(queried_w),
        height: lines.unwrap_or(queried_h),
    }
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Query the live terminal size, falling back to 80×20.
pub fn detect_size() -> TerminalSize {
    let columns = parse_dimension(std::env::var("COLUMNS").ok().as_deref());
    let lines = parse_dimension(std::env::var("LINES").ok().as_deref());

    let queried = if std::io::stdout().is_terminal() {
        match crossterm::terminal::size() {
            Ok(size) => Some(size),
            Err(e) => {
                log::debug!("terminal size query failed, using default: {}", e);
                None
            }
        }
    } else {
        log::debug!("stdout is not a terminal, using default size");
        None
    };

    resolve_size(columns, lines, queried)
}

// ============================================================================
// TESTS
// ============================================================================
