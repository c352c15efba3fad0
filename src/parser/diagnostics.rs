//! Diagnostics emitted while scanning a configuration.
//!
//! The parser reports through a [`Diagnostics`] sink handed to it by the
//! caller. [`LogDiagnostics`] forwards to the `log` facade; a `Vec` collects
//! the events so tests can assert on them.

use std::fmt;

/// Something worth reporting that does not abort the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Address line could not be parsed, the sentinel was stored instead.
    IpParseFailure {
        interface: String,
        line: String,
        reason: String,
    },
    /// Scan stopped at the first line outside the interface section.
    ScanStopped { line_number: usize, line: String },
    /// Scan finished.
    Finished { interfaces: usize },
    /// Scan finished without a single interface.
    NoInterfaces,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::IpParseFailure {
                interface,
                line,
                reason,
            } => write!(
                f,
                "interface {interface}: can't parse address line {:?}: {reason}",
                line.trim()
            ),
            Diagnostic::ScanStopped { line_number, line } => write!(
                f,
                "end of interface section at line {line_number}: {line:?}"
            ),
            Diagnostic::Finished { interfaces } => {
                write!(f, "parsing finished, got {interfaces} interfaces")
            }
            Diagnostic::NoInterfaces => write!(f, "Parsing failed! got 0 interfaces!"),
        }
    }
}

/// Receiver of parser diagnostics.
pub trait Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Writes diagnostics to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::IpParseFailure { .. } => log::warn!("{diagnostic}"),
            Diagnostic::ScanStopped { .. } => log::debug!("{diagnostic}"),
            Diagnostic::Finished { .. } => log::info!("{diagnostic}"),
            Diagnostic::NoInterfaces => log::error!("{diagnostic}"),
        }
    }
}

impl Diagnostics for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic::NoInterfaces);
        sink.report(Diagnostic::Finished { interfaces: 2 });
        assert_eq!(
            sink,
            vec![Diagnostic::NoInterfaces, Diagnostic::Finished { interfaces: 2 }]
        );
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::IpParseFailure {
            interface: "Gi0/1".to_string(),
            line: " ip address 999.1.1.1 255.255.255.0".to_string(),
            reason: "invalid address \"999.1.1.1\"".to_string(),
        };
        assert_eq!(
            d.to_string(),
            "interface Gi0/1: can't parse address line \"ip address 999.1.1.1 255.255.255.0\": invalid address \"999.1.1.1\""
        );
    }
}
