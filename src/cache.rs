//! On-disk cache for a computed [`DpTable`].
//!
//! A single file: a magic header, a format version, the board/piece
//! dimensions the arrays were computed for, then the raw `dst` (`f32`,
//! little-endian) and `act` (`u8`) arrays back to back. This is a
//! length-prefixed, self-describing layout rather than the original
//! solver's compressed `.npz` archive (spec §6: the source's container
//! choice is not required for interchange) so it stays readable without
//! pulling in a compression or serialization crate this crate otherwise
//! has no use for.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::board::{piece::NUM_PIECES, NUM_BOARDS};
use crate::dp::DpTable;
use crate::error::SolverError;

const MAGIC: &[u8; 4] = b"TSR1";
const FORMAT_VERSION: u32 = 1;

/// Default cache file name, resolved relative to the current directory.
pub const DEFAULT_CACHE_FILE: &str = "tessera_solver.cache";

pub fn save(path: &Path, table: &DpTable) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    out.write_all(MAGIC)?;
    out.write_all(&FORMAT_VERSION.to_le_bytes())?;
    out.write_all(&(NUM_BOARDS as u32).to_le_bytes())?;
    out.write_all(&(NUM_PIECES as u32).to_le_bytes())?;

    for value in table.dst_snapshot() {
        out.write_all(&value.to_le_bytes())?;
    }
    out.write_all(&table.act_snapshot())?;

    out.flush()
}

/// Loads a previously-saved table. A missing file is reported as `Ok(None)`
/// (spec's `CacheMiss`, transparent to the caller). A present-but-malformed
/// file is reported as [`SolverError::CacheCorrupt`]; callers should delete
/// it and fall back to [`crate::dp::compute`].
pub fn load(path: &Path) -> Result<Option<DpTable>, SolverError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let mut input = BufReader::new(file);

    let corrupt = |reason: &str| SolverError::CacheCorrupt {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    let mut magic = [0u8; 4];
    input.read_exact(&mut magic).map_err(|_| corrupt("truncated header"))?;
    if &magic != MAGIC {
        return Err(corrupt("bad magic"));
    }

    let version = read_u32(&mut input).map_err(|_| corrupt("truncated version"))?;
    if version != FORMAT_VERSION {
        return Err(corrupt(&format!("unsupported version {version}")));
    }

    let num_boards = read_u32(&mut input).map_err(|_| corrupt("truncated board count"))? as usize;
    let num_pieces = read_u32(&mut input).map_err(|_| corrupt("truncated piece count"))? as usize;
    if num_boards != NUM_BOARDS || num_pieces != NUM_PIECES {
        return Err(corrupt("dimensions do not match this build's board/piece catalogue"));
    }

    let rows = num_boards * num_pieces;
    let mut dst = Vec::with_capacity(rows);
    let mut buf4 = [0u8; 4];
    for _ in 0..rows {
        input.read_exact(&mut buf4).map_err(|_| corrupt("truncated dst array"))?;
        dst.push(f32::from_le_bytes(buf4));
    }

    let mut act = vec![0u8; rows];
    input.read_exact(&mut act).map_err(|_| corrupt("truncated act array"))?;

    Ok(Some(DpTable::from_arrays(dst, act)))
}

fn read_u32(input: &mut impl Read) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}
