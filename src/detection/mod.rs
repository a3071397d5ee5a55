//! Detection result module for oscdetect

mod result;

pub use result::{BinDiagnostic, BinSummary, DiagnosticKind, OscillationAnalysis};
