//! Binary encode/decode for the field format.
//!
//! Every value is a little-endian `f32`. Records are written back to back
//! in grid record order; no alignment padding, no compression.

use std::io::{self, Read, Write};

use advect_core::{FieldError, Grid, Vector3, CELL_COUNT, FILE_SIZE, RECORD_SIZE};

// ── Primitives ──────────────────────────────────────────────────

/// Write a little-endian f32.
pub fn write_f32_le(w: &mut dyn Write, v: f32) -> Result<(), FieldError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Read a little-endian f32.
pub fn read_f32_le(r: &mut dyn Read) -> Result<f32, FieldError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}

/// Serialize one vector into a 12-byte record.
fn encode_record(v: Vector3) -> [u8; RECORD_SIZE] {
    let mut out = [0u8; RECORD_SIZE];
    for (slot, component) in out.chunks_exact_mut(4).zip(v.to_array()) {
        slot.copy_from_slice(&component.to_le_bytes());
    }
    out
}

/// Deserialize one 12-byte record. `record` must be exactly `RECORD_SIZE` long.
fn decode_record(record: &[u8]) -> Vector3 {
    let component = |offset: usize| {
        f32::from_le_bytes([
            record[offset],
            record[offset + 1],
            record[offset + 2],
            record[offset + 3],
        ])
    };
    Vector3::new(component(0), component(4), component(8))
}

// ── Buffers ─────────────────────────────────────────────────────

/// Encode a grid into exactly [`FILE_SIZE`] bytes.
///
/// Infallible: the grid's size is fixed by construction, and NaN or
/// infinite components are packed like any other value.
pub fn encode(grid: &Grid) -> Vec<u8> {
    let mut out = Vec::with_capacity(FILE_SIZE);
    for v in grid {
        out.extend_from_slice(&encode_record(*v));
    }
    debug_assert_eq!(out.len(), FILE_SIZE);
    out
}

/// Decode a grid from the first [`FILE_SIZE`] bytes of `bytes`.
///
/// Anything past `FILE_SIZE` is ignored.
///
/// # Errors
///
/// [`FieldError::Format`] if `bytes` is shorter than `FILE_SIZE`.
pub fn decode(bytes: &[u8]) -> Result<Grid, FieldError> {
    if bytes.len() < FILE_SIZE {
        return Err(FieldError::Format {
            required: FILE_SIZE,
            found: bytes.len(),
        });
    }
    let mut vectors = Vec::with_capacity(CELL_COUNT);
    vectors.extend(bytes[..FILE_SIZE].chunks_exact(RECORD_SIZE).map(decode_record));
    Grid::from_vectors(vectors)
}

// ── Streams ─────────────────────────────────────────────────────

/// Write the encoded grid to `w`.
pub fn write_grid(w: &mut dyn Write, grid: &Grid) -> Result<(), FieldError> {
    for v in grid {
        w.write_all(&encode_record(*v))?;
    }
    Ok(())
}

/// Read one encoded grid from `r`.
///
/// Consumes exactly [`FILE_SIZE`] bytes; whatever follows in the stream
/// is left unread.
///
/// # Errors
///
/// [`FieldError::Format`] if the stream ends early, reporting how many
/// bytes were obtained. Other read failures are [`FieldError::Io`].
pub fn read_grid(r: &mut dyn Read) -> Result<Grid, FieldError> {
    let mut buf = vec![0u8; FILE_SIZE];
    let mut filled = 0;
    while filled < FILE_SIZE {
        match r.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(FieldError::Format {
                    required: FILE_SIZE,
                    found: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    decode(&buf)
}
