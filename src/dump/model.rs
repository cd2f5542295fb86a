//! In-memory model of a parsed dump
//!
//! Built once by [`parse_dump`](super::parse::parse_dump) and read-only
//! afterwards. Heap types keep the order in which the dump first mentions them.

use rustc_hash::FxHashMap;

/// Type tag of unused space inside a block
pub const FREE_TYPE: &str = "FREE";

/// A committed allocation or a suballocation inside a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Resource type tag ("BUFFER", "TEXTURE2D", "FREE", ...)
    pub kind: String,
    pub size: u64,
    /// D3D12 resource flags, 0 when absent
    pub flags: u64,
    /// D3D12 texture layout, 0 (unknown) when absent
    pub layout: u64,
}

impl Allocation {
    pub fn new(kind: impl Into<String>, size: u64) -> Self {
        Allocation {
            kind: kind.into(),
            size,
            flags: 0,
            layout: 0,
        }
    }

    pub fn with_flags(mut self, flags: u64) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_layout(mut self, layout: u64) -> Self {
        self.layout = layout;
        self
    }

    pub fn is_free(&self) -> bool {
        self.kind == FREE_TYPE
    }
}

/// Which pool a block belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoolKind {
    Default,
}

/// A memory block subdivided into suballocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: u64,
    /// Total size in bytes
    pub size: u64,
    pub pool: PoolKind,
    /// In byte order, free gaps included as explicit entries
    pub suballocations: Vec<Allocation>,
}

impl Block {
    /// Row label shown above the block bar
    pub fn label(&self) -> String {
        match self.pool {
            PoolKind::Default => format!("Default pool block {}", self.id),
        }
    }
}

/// Everything the dump lists under one heap type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapTypeSection {
    pub name: String,
    pub committed_allocations: Vec<Allocation>,
    pub blocks: Vec<Block>,
}

impl HeapTypeSection {
    pub fn new(name: impl Into<String>) -> Self {
        HeapTypeSection {
            name: name.into(),
            committed_allocations: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Number of bar rows (committed allocations and blocks)
    pub fn row_count(&self) -> usize {
        self.committed_allocations.len() + self.blocks.len()
    }
}

/// The parsed dump: heap type sections in discovery order
#[derive(Debug, Clone, Default)]
pub struct Dump {
    sections: Vec<HeapTypeSection>,
    index: FxHashMap<String, usize>,
}

impl Dump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the section for a heap type, creating an empty one on first reference
    pub fn section_mut(&mut self, heap_type: &str) -> &mut HeapTypeSection {
        let idx = match self.index.get(heap_type) {
            Some(&idx) => idx,
            None => {
                let idx = self.sections.len();
                self.sections.push(HeapTypeSection::new(heap_type));
                self.index.insert(heap_type.to_string(), idx);
                idx
            }
        };
        &mut self.sections[idx]
    }

    pub fn sections(&self) -> &[HeapTypeSection] {
        &self.sections
    }

    pub fn committed_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.committed_allocations.len())
            .sum()
    }

    pub fn block_count(&self) -> usize {
        self.sections.iter().map(|s| s.blocks.len()).sum()
    }

    /// Largest committed allocation or block size across all heap types
    pub fn max_entity_size(&self) -> u64 {
        self.sections
            .iter()
            .flat_map(|s| {
                s.committed_allocations
                    .iter()
                    .map(|a| a.size)
                    .chain(s.blocks.iter().map(|b| b.size))
            })
            .max()
            .unwrap_or(0)
    }
}
