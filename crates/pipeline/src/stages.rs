//! Pipeline stage enumeration and sequence derivation.

use std::fmt;

/// One stage of the encapsulation pipeline, in wire order.
///
/// `Idle` is both the initial state and the reset target; `Transmission`
/// is where a single automatic run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Idle,
    /// Client signals are mapped into the payload unit (OPU).
    ClientMapping,
    /// Path-level overhead is added to the data unit (ODU).
    PathOverhead,
    /// Section overhead and frame alignment form the transport unit (OTU).
    SectionOverhead,
    /// Reed-Solomon parity is computed. Present only when FEC is enabled.
    FecCalculation,
    Transmission,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Idle => "IDLE",
            PipelineStage::ClientMapping => "CLIENT_MAPPING",
            PipelineStage::PathOverhead => "PATH_OVERHEAD",
            PipelineStage::SectionOverhead => "SECTION_OVERHEAD",
            PipelineStage::FecCalculation => "FEC_CALCULATION",
            PipelineStage::Transmission => "TRANSMISSION",
        }
    }

    /// The frame-map section a renderer highlights while this stage runs.
    pub fn frame_section(&self) -> Option<&'static str> {
        match self {
            PipelineStage::ClientMapping => Some("Payload"),
            PipelineStage::PathOverhead => Some("ODU OH"),
            PipelineStage::SectionOverhead => Some("OTU OH"),
            PipelineStage::FecCalculation => Some("FEC"),
            PipelineStage::Idle | PipelineStage::Transmission => None,
        }
    }

    /// Short caption for the processing-pipeline card.
    pub fn description(&self, tributaries: usize) -> Option<String> {
        match self {
            PipelineStage::Idle => None,
            PipelineStage::ClientMapping => {
                Some(format!("Mapping {tributaries} client(s) into OPU Payload."))
            }
            PipelineStage::PathOverhead => {
                Some("Adding Path Overhead (TCM, PM) to LO ODU.".to_owned())
            }
            PipelineStage::SectionOverhead => {
                Some("Multiplexing LO ODUs into HO ODU & adding OTU Overhead.".to_owned())
            }
            PipelineStage::FecCalculation => {
                Some("Calculating RS-FEC for the High Order Frame.".to_owned())
            }
            PipelineStage::Transmission => {
                Some("Transmission of Colored Wavelength.".to_owned())
            }
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ordered stage list for a given FEC setting.
///
/// `FecCalculation` participates iff `enable_fec`; every other stage is
/// always present, always in this relative order.
pub fn stage_sequence(enable_fec: bool) -> Vec<PipelineStage> {
    let mut stages = vec![
        PipelineStage::Idle,
        PipelineStage::ClientMapping,
        PipelineStage::PathOverhead,
        PipelineStage::SectionOverhead,
    ];
    if enable_fec {
        stages.push(PipelineStage::FecCalculation);
    }
    stages.push(PipelineStage::Transmission);
    stages
}
