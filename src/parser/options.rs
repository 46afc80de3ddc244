use crate::base::constants::COMMENT_MARKER;

/// Settings of a [`GeometryReader`](super::GeometryReader).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Lines starting with this character are skipped where a keyword is expected.
    pub comment_marker: char,
    /// Try one orientation repair pass before rejecting an unclosed interface.
    pub repair_orientation: bool,
    /// Also check closure of interfaces that no domain references.
    pub check_unreferenced_interfaces: bool,
    /// Fail when no domain qualifies as outermost.
    pub require_outermost: bool,
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    pub fn with_repair_orientation(mut self, repair: bool) -> Self {
        self.repair_orientation = repair;
        self
    }

    pub fn with_check_unreferenced_interfaces(mut self, check: bool) -> Self {
        self.check_unreferenced_interfaces = check;
        self
    }

    pub fn with_require_outermost(mut self, require: bool) -> Self {
        self.require_outermost = require;
        self
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            comment_marker: COMMENT_MARKER,
            repair_orientation: true,
            check_unreferenced_interfaces: true,
            require_outermost: false,
        }
    }
}
