//! Plain-text report output

use std::io::{self, Write};
use std::path::Path;

use unused_pvcs_types::ClaimInfo;

/// Writes progress and result lines to a single stream
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn kubeconfig(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Using kubeconfig: {}", path.display())
    }

    pub fn listing_pods(&mut self) -> io::Result<()> {
        writeln!(self.out, "Get Kubernetes Pods")
    }

    /// One line per unused claim
    pub fn report(&mut self, unused: &[&ClaimInfo]) -> io::Result<()> {
        for claim in unused {
            writeln!(self.out, "PersistentVolumeClaim = {} is unused.", claim.name)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
