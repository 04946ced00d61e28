//! Fixed vocabularies the corpus is drawn from
//!
//! Every list here is a process-wide constant. The common-word list is kept
//! free of digits, `.`, `:`, `/` and `@`, and none of its words contains a
//! fruit literal or a log level, so filler text cannot satisfy any of the
//! benchmark categories on its own.

/// A named, ordered, non-empty list of candidate strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    name: &'static str,
    entries: &'static [&'static str],
}

impl Vocabulary {
    /// Create a vocabulary. Panics (at compile time for constants) when empty.
    pub const fn new(name: &'static str, entries: &'static [&'static str]) -> Self {
        assert!(!entries.is_empty(), "vocabulary must not be empty");
        Self { name, entries }
    }

    /// Vocabulary name, as logged when a build starts
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All entries in declaration order
    pub fn entries(&self) -> &'static [&'static str] {
        self.entries
    }

    /// Number of entries (always at least one)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> &'static str {
        self.entries[index]
    }
}

/// Filler words for random runs of text
pub const COMMON_WORDS: Vocabulary = Vocabulary::new(
    "common_words",
    &[
        "the", "be", "to", "of", "and", "a", "in", "that", "have", "I", //
        "it", "for", "not", "on", "with", "he", "as", "you", "do", "at", //
        "this", "but", "his", "by", "from", "they", "we", "say", "her", "she", //
        "function", "return", "if", "else", "while", "for", "var", "const", "let", //
        "import", "export", "class", "interface", "type", "struct", "package", //
        "server", "client", "request", "response", "data", "file", "settings",
    ],
);

/// Log levels matched by the literal alternation pattern
pub const LOG_LEVELS: Vocabulary =
    Vocabulary::new("log_levels", &["error", "warning", "fatal", "critical"]);

/// Request-line prefixes for the anchored pattern
pub const HTTP_VERSIONS: Vocabulary =
    Vocabulary::new("http_versions", &["HTTP/1.0", "HTTP/1.1", "HTTP/2.0"]);

/// Addresses for the email and inner-literal patterns
pub const EMAILS: Vocabulary = Vocabulary::new(
    "emails",
    &[
        "user@example.com",
        "admin@test.org",
        "info@company.net",
        "support@example.com",
    ],
);

/// File names with the extensions the suffix pattern looks for
pub const FILENAMES: Vocabulary = Vocabulary::new(
    "filenames",
    &[
        "readme.txt",
        "config.log",
        "notes.md",
        "data.txt",
        "server.log",
        "docs.md",
    ],
);

pub const URIS: Vocabulary = Vocabulary::new(
    "uris",
    &[
        "http://example.com/path/to/resource",
        "https://api.github.com/repos/user/repo?page=1",
        "ftp://files.server.net/downloads/file.zip",
        "https://www.google.com/search?q=regex#results",
    ],
);

/// Dotted quads, all with octets in 0..=255
pub const IP_ADDRESSES: Vocabulary = Vocabulary::new(
    "ip_addresses",
    &[
        "192.168.1.1",
        "10.0.0.255",
        "172.16.0.1",
        "255.255.255.0",
        "8.8.8.8",
        "127.0.0.1",
        "203.0.113.42",
        "198.51.100.7",
    ],
);

/// Twelve literals, enough to push engines onto their multi-pattern path
pub const FRUITS: Vocabulary = Vocabulary::new(
    "fruits",
    &[
        "apple",
        "banana",
        "cherry",
        "date",
        "elderberry",
        "fig",
        "grape",
        "honeydew",
        "kiwi",
        "lemon",
        "mango",
        "orange",
    ],
);

/// Three-component version numbers; these start with a digit on purpose
pub const VERSIONS: Vocabulary = Vocabulary::new(
    "versions",
    &[
        "1.0.0", "2.1.3", "3.14.159", "10.20.30", "0.9.1", "4.5.6", //
        "1.2.3", "7.8.9", "12.0.1", "2.0.0", "5.4.3", "99.99.99",
    ],
);

/// The full set of vocabularies a synthesizer draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabularies {
    pub common_words: Vocabulary,
    pub log_levels: Vocabulary,
    pub http_versions: Vocabulary,
    pub emails: Vocabulary,
    pub filenames: Vocabulary,
    pub uris: Vocabulary,
    pub ip_addresses: Vocabulary,
    pub fruits: Vocabulary,
    pub versions: Vocabulary,
}

impl Vocabularies {
    /// The built-in vocabularies
    pub const fn standard() -> Self {
        Self {
            common_words: COMMON_WORDS,
            log_levels: LOG_LEVELS,
            http_versions: HTTP_VERSIONS,
            emails: EMAILS,
            filenames: FILENAMES,
            uris: URIS,
            ip_addresses: IP_ADDRESSES,
            fruits: FRUITS,
            versions: VERSIONS,
        }
    }

    /// Every vocabulary, common words first
    pub fn all(&self) -> [Vocabulary; 9] {
        [
            self.common_words,
            self.log_levels,
            self.http_versions,
            self.emails,
            self.filenames,
            self.uris,
            self.ip_addresses,
            self.fruits,
            self.versions,
        ]
    }

    /// Longest entry of the common-word list, in bytes
    pub fn longest_common_word(&self) -> usize {
        self.common_words
            .entries()
            .iter()
            .map(|w| w.len())
            .max()
            .unwrap_or(0)
    }
}

impl Default for Vocabularies {
    fn default() -> Self {
        Self::standard()
    }
}
