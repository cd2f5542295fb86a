//! Walks the allocator's JSON dump schema into a [`Dump`]
//!
//! ```text
//! { "DetailedMap": {
//!     "CommittedAllocations"?: { heapType: [ {Type, Size, Flags?, Layout?} ] },
//!     "DefaultPools"?: { heapType: { "Blocks": { blockId: {TotalBytes, Suballocations: [..]} } } }
//! } }
//! ```
//!
//! Missing optional keys become empty lists or zero. Any missing required key
//! aborts the whole parse.

use super::model::{Allocation, Block, Dump, PoolKind};
use crate::errors::{VisError, VisResult};
use serde_json::{Map, Value};

const DETAILED_MAP: &str = "DetailedMap";
const COMMITTED_ALLOCATIONS: &str = "CommittedAllocations";
const DEFAULT_POOLS: &str = "DefaultPools";

/// Parse dump text into the in-memory model
pub fn parse_dump(text: &str) -> VisResult<Dump> {
    let root: Value = serde_json::from_str(text)?;
    parse_dump_value(&root)
}

/// Parse an already-decoded JSON document
pub fn parse_dump_value(root: &Value) -> VisResult<Dump> {
    let root = as_object(root, "dump root", "document")?;
    let detailed_map = root
        .get(DETAILED_MAP)
        .ok_or_else(|| VisError::missing(DETAILED_MAP, "dump root"))?;
    let detailed_map = as_object(detailed_map, DETAILED_MAP, "dump root")?;

    let mut dump = Dump::new();

    if let Some(committed) = detailed_map.get(COMMITTED_ALLOCATIONS) {
        let committed = as_object(committed, COMMITTED_ALLOCATIONS, DETAILED_MAP)?;
        for (heap_type, allocs) in committed {
            let context = format!("{} of heap type {}", COMMITTED_ALLOCATIONS, heap_type);
            let allocs = allocs
                .as_array()
                .ok_or_else(|| VisError::invalid(heap_type, &context, "expected an array"))?;
            let section = dump.section_mut(heap_type);
            for (i, alloc) in allocs.iter().enumerate() {
                let record = parse_allocation(alloc, &format!("{} [{}]", context, i))?;
                section.committed_allocations.push(record);
            }
        }
    }

    if let Some(pools) = detailed_map.get(DEFAULT_POOLS) {
        let pools = as_object(pools, DEFAULT_POOLS, DETAILED_MAP)?;
        for (heap_type, pool) in pools {
            let context = format!("{} of heap type {}", DEFAULT_POOLS, heap_type);
            let pool = as_object(pool, heap_type, &context)?;
            let blocks = pool
                .get("Blocks")
                .ok_or_else(|| VisError::missing("Blocks", &context))?;
            let blocks = as_object(blocks, "Blocks", &context)?;
            let section = dump.section_mut(heap_type);
            for (block_id, block) in blocks {
                let block = parse_block(block_id, block, PoolKind::Default, &context)?;
                section.blocks.push(block);
            }
        }
    }

    Ok(dump)
}

fn parse_block(block_id: &str, value: &Value, pool: PoolKind, parent: &str) -> VisResult<Block> {
    let context = format!("block {} of {}", block_id, parent);
    let id = block_id
        .trim()
        .parse::<u64>()
        .map_err(|e| VisError::invalid("block ID", &context, e.to_string()))?;
    let obj = as_object(value, block_id, parent)?;

    let size = required_u64(obj, "TotalBytes", &context)?;
    let suballocations = obj
        .get("Suballocations")
        .ok_or_else(|| VisError::missing("Suballocations", &context))?
        .as_array()
        .ok_or_else(|| VisError::invalid("Suballocations", &context, "expected an array"))?
        .iter()
        .enumerate()
        .map(|(i, sub)| parse_allocation(sub, &format!("suballocation {} of {}", i, context)))
        .collect::<VisResult<Vec<_>>>()?;

    Ok(Block {
        id,
        size,
        pool,
        suballocations,
    })
}

fn parse_allocation(value: &Value, context: &str) -> VisResult<Allocation> {
    let obj = as_object(value, "allocation", context)?;

    let kind = obj
        .get("Type")
        .ok_or_else(|| VisError::missing("Type", context))?
        .as_str()
        .ok_or_else(|| VisError::invalid("Type", context, "expected a string"))?
        .to_string();

    Ok(Allocation {
        kind,
        size: required_u64(obj, "Size", context)?,
        flags: optional_u64(obj, "Flags", context)?,
        layout: optional_u64(obj, "Layout", context)?,
    })
}

fn as_object<'a>(value: &'a Value, field: &str, context: &str) -> VisResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| VisError::invalid(field, context, "expected an object"))
}

fn required_u64(obj: &Map<String, Value>, field: &str, context: &str) -> VisResult<u64> {
    match obj.get(field) {
        Some(value) => to_u64(value, field, context),
        None => Err(VisError::missing(field, context)),
    }
}

fn optional_u64(obj: &Map<String, Value>, field: &str, context: &str) -> VisResult<u64> {
    match obj.get(field) {
        Some(value) => to_u64(value, field, context),
        None => Ok(0),
    }
}

/// Accepts a non-negative JSON integer or a string holding one
fn to_u64(value: &Value, field: &str, context: &str) -> VisResult<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| VisError::invalid(field, context, format!("{} is not an unsigned integer", n))),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| VisError::invalid(field, context, format!("'{}': {}", s, e))),
        other => Err(VisError::invalid(
            field,
            context,
            format!("expected an integer, got {}", other),
        )),
    }
}
