//! WOFF 1.0 container unwrapping.
//!
//! A WOFF file is an sfnt whose tables are individually zlib-compressed
//! behind a 44-byte header. Unwrapping rebuilds the plain sfnt so the
//! result can be handed to ttf-parser unchanged. WOFF2 uses Brotli and
//! table transforms and is not supported.

use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::error::{Error, Result};

const WOFF_SIGNATURE: &[u8; 4] = b"wOFF";
const WOFF2_SIGNATURE: &[u8; 4] = b"wOF2";
const HEADER_LEN: usize = 44;
const DIR_ENTRY_LEN: usize = 20;
/// Upper bound on zlib's expansion ratio (deflate tops out near 1032:1).
const MAX_EXPANSION: usize = 1032;

/// Whether the bytes start with a WOFF 1.0 signature.
pub fn is_woff(bytes: &[u8]) -> bool {
    bytes.starts_with(WOFF_SIGNATURE)
}

/// Whether the bytes start with a WOFF2 signature.
pub fn is_woff2(bytes: &[u8]) -> bool {
    bytes.starts_with(WOFF2_SIGNATURE)
}

struct TableEntry {
    tag: [u8; 4],
    offset: usize,
    comp_length: usize,
    orig_length: usize,
    checksum: u32,
}

/// Convert WOFF 1.0 bytes into a plain sfnt (TrueType/CFF) font.
pub fn unwrap(bytes: &[u8]) -> Result<Vec<u8>> {
    if !is_woff(bytes) {
        return Err(Error::Woff("missing wOFF signature".to_string()));
    }
    if bytes.len() < HEADER_LEN {
        return Err(Error::Woff("truncated header".to_string()));
    }

    let flavor = read_u32(bytes, 4)?;
    let num_tables = usize::from(read_u16(bytes, 12)?);

    let mut entries = Vec::with_capacity(num_tables);
    for i in 0..num_tables {
        let base = HEADER_LEN + i * DIR_ENTRY_LEN;
        let tag_bytes = bytes
            .get(base..base + 4)
            .ok_or_else(|| Error::Woff("truncated table directory".to_string()))?;
        let mut tag = [0u8; 4];
        tag.copy_from_slice(tag_bytes);
        entries.push(TableEntry {
            tag,
            offset: read_u32(bytes, base + 4)? as usize,
            comp_length: read_u32(bytes, base + 8)? as usize,
            orig_length: read_u32(bytes, base + 12)? as usize,
            checksum: read_u32(bytes, base + 16)?,
        });
    }

    // sfnt offset table
    let mut out = Vec::new();
    out.extend_from_slice(&flavor.to_be_bytes());
    let (search_range, entry_selector, range_shift) = search_params(num_tables);
    out.extend_from_slice(&u16::try_from(num_tables).unwrap_or(u16::MAX).to_be_bytes());
    out.extend_from_slice(&search_range.to_be_bytes());
    out.extend_from_slice(&entry_selector.to_be_bytes());
    out.extend_from_slice(&range_shift.to_be_bytes());

    let dir_start = out.len();
    out.resize(dir_start + num_tables * 16, 0);

    for (i, entry) in entries.iter().enumerate() {
        let data = table_data(bytes, entry)?;
        let table_offset = out.len();
        out.extend_from_slice(&data);
        while out.len() % 4 != 0 {
            out.push(0);
        }

        let rec = dir_start + i * 16;
        out[rec..rec + 4].copy_from_slice(&entry.tag);
        out[rec + 4..rec + 8].copy_from_slice(&entry.checksum.to_be_bytes());
        out[rec + 8..rec + 12].copy_from_slice(&to_u32(table_offset)?.to_be_bytes());
        out[rec + 12..rec + 16].copy_from_slice(&to_u32(entry.orig_length)?.to_be_bytes());
    }

    Ok(out)
}

fn table_data(bytes: &[u8], entry: &TableEntry) -> Result<Vec<u8>> {
    let raw = entry
        .offset
        .checked_add(entry.comp_length)
        .and_then(|end| bytes.get(entry.offset..end))
        .ok_or_else(|| Error::Woff(format!("table {} out of bounds", tag_name(entry.tag))))?;

    if entry.comp_length >= entry.orig_length {
        return Ok(raw.to_vec());
    }

    // The declared size is untrusted: it must be reachable from the stored
    // bytes, and the decoder never reads past it.
    if entry.orig_length > entry.comp_length.saturating_mul(MAX_EXPANSION) {
        return Err(Error::Woff(format!(
            "table {} claims {} bytes from {} compressed",
            tag_name(entry.tag),
            entry.orig_length,
            entry.comp_length
        )));
    }

    let limit = u64::try_from(entry.orig_length).unwrap_or(u64::MAX).saturating_add(1);
    let mut data = Vec::with_capacity(entry.orig_length);
    ZlibDecoder::new(raw)
        .take(limit)
        .read_to_end(&mut data)
        .map_err(|e| Error::Woff(format!("table {}: {e}", tag_name(entry.tag))))?;

    if data.len() != entry.orig_length {
        return Err(Error::Woff(format!(
            "table {} decompressed to {} bytes, expected {}",
            tag_name(entry.tag),
            data.len(),
            entry.orig_length
        )));
    }
    Ok(data)
}

fn search_params(num_tables: usize) -> (u16, u16, u16) {
    let mut entry_selector = 0u16;
    while (1usize << (entry_selector + 1)) <= num_tables {
        entry_selector += 1;
    }
    let search_range = (1usize << entry_selector) * 16;
    let range_shift = (num_tables * 16).saturating_sub(search_range);
    (
        u16::try_from(search_range).unwrap_or(u16::MAX),
        entry_selector,
        u16::try_from(range_shift).unwrap_or(u16::MAX),
    )
}

fn tag_name(tag: [u8; 4]) -> String {
    String::from_utf8_lossy(&tag).into_owned()
}

fn to_u32(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::Woff("font too large".to_string()))
}

fn read_u16(bytes: &[u8], at: usize) -> Result<u16> {
    bytes
        .get(at..at + 2)
        .map(|b| u16::from_be_bytes([b[0], b[1]]))
        .ok_or_else(|| Error::Woff("unexpected end of data".to_string()))
}

fn read_u32(bytes: &[u8], at: usize) -> Result<u32> {
    bytes
        .get(at..at + 4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| Error::Woff("unexpected end of data".to_string()))
}
