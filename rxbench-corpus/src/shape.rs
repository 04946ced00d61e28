//! Line shapes and the modular schedule that picks them

use serde::Serialize;
use std::fmt;

/// Rendering rule for a single corpus line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Random filler words only
    Default,
    /// Request line starting with an HTTP version
    HttpStatus,
    /// Bracketed log level followed by a file name
    LogLevel,
    Email,
    Filename,
    Uri,
    IpAddress,
    /// One of the multi-literal fruit names
    Fruit,
    /// Dotted three-part version number
    Version,
}

impl Shape {
    /// Every shape, in a stable order usable as an index
    pub const ALL: [Shape; 9] = [
        Shape::Default,
        Shape::HttpStatus,
        Shape::LogLevel,
        Shape::Email,
        Shape::Filename,
        Shape::Uri,
        Shape::IpAddress,
        Shape::Fruit,
        Shape::Version,
    ];

    /// Position of this shape in [`Shape::ALL`]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Default => "default",
            Shape::HttpStatus => "http_status",
            Shape::LogLevel => "log_level",
            Shape::Email => "email",
            Shape::Filename => "filename",
            Shape::Uri => "uri",
            Shape::IpAddress => "ip_address",
            Shape::Fruit => "fruit",
            Shape::Version => "version",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fires for every line index with `index % modulus == remainder`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeRule {
    shape: Shape,
    modulus: u64,
    remainder: u64,
}

impl ShapeRule {
    pub const fn new(shape: Shape, modulus: u64, remainder: u64) -> Self {
        assert!(modulus > 0, "modulus must be positive");
        assert!(remainder < modulus, "remainder must be below modulus");
        Self {
            shape,
            modulus,
            remainder,
        }
    }

    /// Whether this rule fires for `index`
    pub fn matches(&self, index: u64) -> bool {
        index % self.modulus == self.remainder
    }
}

/// Injection frequencies for the standard corpus, highest priority first.
/// These constants fix the corpus shape and must not be retuned.
pub const STANDARD_RULES: &[ShapeRule] = &[
    ShapeRule::new(Shape::HttpStatus, 500, 1),
    ShapeRule::new(Shape::LogLevel, 100, 2),
    ShapeRule::new(Shape::Email, 150, 3),
    ShapeRule::new(Shape::Filename, 80, 4),
    ShapeRule::new(Shape::Uri, 120, 5),
    ShapeRule::new(Shape::IpAddress, 90, 6),
    ShapeRule::new(Shape::Fruit, 70, 7),
    ShapeRule::new(Shape::Version, 60, 8),
];

/// Ordered, first-match-wins list of shape rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSchedule {
    rules: &'static [ShapeRule],
}

impl ShapeSchedule {
    /// Schedule backed by an arbitrary rule table
    pub const fn new(rules: &'static [ShapeRule]) -> Self {
        Self { rules }
    }

    /// The standard injection schedule
    pub const fn standard() -> Self {
        Self::new(STANDARD_RULES)
    }

    /// No rules at all: every line is [`Shape::Default`]
    pub const fn default_only() -> Self {
        Self::new(&[])
    }

    pub fn rules(&self) -> &'static [ShapeRule] {
        self.rules
    }

    /// Shape for the given 1-based line index
    pub fn select(&self, index: u64) -> Shape {
        self.rules
            .iter()
            .find(|rule| rule.matches(index))
            .map_or(Shape::Default, |rule| rule.shape)
    }

    /// Smallest line count in which every rule has fired at least once
    pub fn lines_to_cover_all(&self) -> u64 {
        self.rules
            .iter()
            .map(|rule| {
                if rule.remainder == 0 {
                    rule.modulus
                } else {
                    rule.remainder
                }
            })
            .max()
            .unwrap_or(0)
    }
}

impl Default for ShapeSchedule {
    fn default() -> Self {
        Self::standard()
    }
}
