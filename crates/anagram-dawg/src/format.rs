// DAWG binary format: edge count header and little-endian records

use crate::edge::Edge;
use crate::{DawgError, MAX_EDGES};

/// Size of the header (the edge count) in bytes.
pub const HEADER_SIZE: usize = 4;

/// Size of one edge record in bytes.
pub const RECORD_SIZE: usize = size_of::<Edge>();

/// Read the declared edge count and check that exactly that many records
/// follow the header.
pub fn parse_header(data: &[u8]) -> Result<usize, DawgError> {
    if data.len() < HEADER_SIZE {
        return Err(DawgError::TooShort {
            expected: HEADER_SIZE,
            actual: data.len(),
        });
    }

    let declared = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
    if declared > MAX_EDGES {
        return Err(DawgError::TooManyEdges(declared));
    }

    let expected = HEADER_SIZE + declared * RECORD_SIZE;
    if data.len() != expected {
        return Err(DawgError::LengthMismatch {
            declared,
            expected,
            actual: data.len(),
        });
    }

    Ok(declared)
}

/// Decode the records into an edge table addressed `1..=count`.
///
/// Slot 0 is reserved (child index 0 means "none") and holds an empty edge.
/// The records are copied into an owned, aligned table; the source slice
/// may start at any alignment.
pub fn decode_edges(data: &[u8]) -> Result<Vec<Edge>, DawgError> {
    let count = parse_header(data)?;

    let mut edges = vec![Edge::default(); count + 1];
    let dst_bytes = bytemuck::cast_slice_mut::<Edge, u8>(&mut edges[1..]);
    dst_bytes.copy_from_slice(&data[HEADER_SIZE..]);

    for edge in &mut edges[1..] {
        *edge = Edge::from_raw(u32::from_le(edge.raw()));
    }

    Ok(edges)
}

/// Serialize an edge table (slot 0 excluded) back into the binary format.
pub fn encode_edges(edges: &[Edge]) -> Vec<u8> {
    let records = edges.get(1..).unwrap_or_default();
    let mut data = Vec::with_capacity(HEADER_SIZE + records.len() * RECORD_SIZE);
    data.extend_from_slice(&(records.len() as u32).to_le_bytes());
    for edge in records {
        data.extend_from_slice(&edge.raw().to_le_bytes());
    }
    data
}
