//! Domain label enums backed by TEXT columns.
//!
//! The schema stores these as free-form text (external detection services
//! may push labels we have not seen), so the enums exist for the values the
//! platform itself writes, not as an exhaustive decode target.

use std::fmt;

/// Kind of monitored zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    Entrance,
    Shopping,
    Checkout,
}

impl ZoneKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneKind::Entrance => "entrance",
            ZoneKind::Shopping => "shopping",
            ZoneKind::Checkout => "checkout",
        }
    }
}

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

impl AlertSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertSeverity::Critical => "critical",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Info => "info",
        }
    }
}

/// Alert lifecycle status. Transitions one way: `Active` -> `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStatus {
    Active,
    Resolved,
}

impl AlertStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Resolved => "resolved",
        }
    }
}

/// Action label attached to a tracking event.
///
/// Labels are capitalized on the wire ("Walking", not "walking"), matching
/// what the detection service emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedAction {
    Walking,
    Browsing,
    Standing,
}

impl TrackedAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TrackedAction::Walking => "Walking",
            TrackedAction::Browsing => "Browsing",
            TrackedAction::Standing => "Standing",
        }
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TrackedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_wire_casing() {
        assert_eq!(ZoneKind::Entrance.as_str(), "entrance");
        assert_eq!(AlertSeverity::Critical.as_str(), "critical");
        assert_eq!(AlertStatus::Resolved.as_str(), "resolved");
        // Action labels are capitalized, unlike the rest.
        assert_eq!(TrackedAction::Browsing.as_str(), "Browsing");
    }
}
