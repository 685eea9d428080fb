//! Domain-specific identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topology node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub char);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client signal type carried by a tributary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalType {
    Ethernet1G,
    Ethernet10G,
    Ethernet100G,
    SdhStm16,
    SdhStm64,
    Fc1200,
}

impl SignalType {
    /// All signal types a tributary can be configured with.
    pub const ALL: [SignalType; 6] = [
        SignalType::Ethernet1G,
        SignalType::Ethernet10G,
        SignalType::Ethernet100G,
        SignalType::SdhStm16,
        SignalType::SdhStm64,
        SignalType::Fc1200,
    ];

    /// Short display name, matching common industry notation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::Ethernet1G => "1GbE",
            SignalType::Ethernet10G => "10GbE",
            SignalType::Ethernet100G => "100GbE",
            SignalType::SdhStm16 => "STM-16",
            SignalType::SdhStm64 => "STM-64",
            SignalType::Fc1200 => "FC-1200",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrapper capacity level of the simulated digital wrapper (ODU hierarchy).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OduLevel {
    Odu0,
    Odu1,
    #[default]
    Odu2,
    Odu3,
    Odu4,
}

impl OduLevel {
    /// All wrapper levels, in capacity order.
    pub const ALL: [OduLevel; 5] = [
        OduLevel::Odu0,
        OduLevel::Odu1,
        OduLevel::Odu2,
        OduLevel::Odu3,
        OduLevel::Odu4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OduLevel::Odu0 => "ODU0",
            OduLevel::Odu1 => "ODU1",
            OduLevel::Odu2 => "ODU2",
            OduLevel::Odu3 => "ODU3",
            OduLevel::Odu4 => "ODU4",
        }
    }
}

impl fmt::Display for OduLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
