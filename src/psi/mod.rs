pub mod aggregator;
pub mod error;
pub mod history;
pub mod reader;
pub mod sampler;

use std::fmt;

/// A tracked pressure-stall resource class. The set is fixed for the
/// process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Cpu,
    Io,
    Memory,
}

impl Resource {
    pub const COUNT: usize = 3;
    pub const ALL: [Resource; Resource::COUNT] = [Resource::Cpu, Resource::Io, Resource::Memory];

    /// Kernel pressure file backing this resource.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Cpu => "/proc/pressure/cpu",
            Resource::Io => "/proc/pressure/io",
            Resource::Memory => "/proc/pressure/memory",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Resource::Cpu => "cpu",
            Resource::Io => "io",
            Resource::Memory => "memory",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
