//! Render targets.
//!
//! A page never edits markup in place: every update replaces one region
//! wholesale with freshly rendered HTML. `RenderTarget` is the only place
//! that mutation happens.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

pub mod templates;

pub use templates::Templates;

/// Name of a replaceable part of a page, e.g. `snacks-container`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Region(pub &'static str);

impl Region {
    pub fn id(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The rendering capability a page draws into.
pub trait RenderTarget {
    /// Replaces the whole content of `region`.
    fn replace(&mut self, region: Region, markup: String);

    /// Enables or disables an interactive control.
    fn set_enabled(&mut self, region: Region, enabled: bool);

    /// Blocking notice outside any region.
    fn alert(&mut self, message: &str);
}

/// In-memory page. Used by the command-line binaries to print what a browser
/// would show, and by tests to inspect it.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    regions: BTreeMap<&'static str, String>,
    disabled: BTreeSet<&'static str>,
    alerts: Vec<String>,
    replacements: HashMap<&'static str, usize>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self, region: Region) -> Option<&str> {
        self.regions.get(region.id()).map(String::as_str)
    }

    pub fn is_enabled(&self, region: Region) -> bool {
        !self.disabled.contains(region.id())
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// How many times `region` has been replaced so far.
    pub fn replacements(&self, region: Region) -> usize {
        self.replacements.get(region.id()).copied().unwrap_or(0)
    }
}

impl RenderTarget for MemoryTarget {
    fn replace(&mut self, region: Region, markup: String) {
        self.regions.insert(region.id(), markup);
        *self.replacements.entry(region.id()).or_insert(0) += 1;
    }

    fn set_enabled(&mut self, region: Region, enabled: bool) {
        if enabled {
            self.disabled.remove(region.id());
        } else {
            self.disabled.insert(region.id());
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

impl fmt::Display for MemoryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.alerts {
            writeln!(f, "[alert] {message}")?;
        }
        for id in &self.disabled {
            writeln!(f, "[disabled] #{id}")?;
        }
        for (id, markup) in &self.regions {
            writeln!(f, "<!-- #{id} -->")?;
            writeln!(f, "{}", markup.trim())?;
        }
        Ok(())
    }
}
