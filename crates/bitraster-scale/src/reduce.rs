//! 2x binary reduction, plain and rank-thresholded
//!
//! A destination row is computed from one source row (plain subsampling)
//! or from a pair of source rows combined word-wise (rank reduction), with
//! every group of 8 destination pixels produced by table lookups instead
//! of per-pixel comparisons. Cascading up to four 2x rank stages gives
//! 4x, 8x and 16x pyramid reduction.

use bitraster_core::{BitImage, BitImageMut, get_data_byte, set_data_byte};

use crate::error::{ScaleError, ScaleResult};
use crate::tables::{RankLevel, RankTable, make_subsample_table};

/// Reduce a binary image 2x by plain subsampling.
///
/// The destination pixel (x, y) is the source pixel (2x, 2y); a final odd
/// source row or column is dropped. The destination is
/// `floor(ws/2) x floor(hs/2)` with half the source resolution.
///
/// A caller-built subsample table (from
/// [`make_subsample_table`](crate::tables::make_subsample_table)) avoids
/// rebuilding it across repeated calls; pass `None` to build one
/// internally.
///
/// # Errors
///
/// Returns [`ScaleError::HeightTooSmall`] if the source has fewer than
/// 2 rows. A source narrower than 2 pixels surfaces as the core
/// invalid-dimension error: a reduction never produces a zero-sized image.
pub fn reduce_binary_2(src: &BitImage, table: Option<&[u8; 256]>) -> ScaleResult<BitImage> {
    if src.height() < 2 {
        return Err(ScaleError::HeightTooSmall(src.height()));
    }
    let built;
    let tab = match table {
        Some(t) => t,
        None => {
            built = make_subsample_table();
            &built
        }
    };

    let mut dst = make_half_size_template(src)?;
    let hd = dst.height();
    let src_bytes = 4 * src.wpl();
    let dst_bytes = 4 * dst.wpl();

    for yd in 0..hd {
        let srow = src.row_data(2 * yd);
        let drow = dst.row_data_mut(yd);
        for k in 0..dst_bytes {
            let b0 = src_byte(srow, 2 * k, src_bytes);
            let b1 = src_byte(srow, 2 * k + 1, src_bytes);
            let byte = (tab[b0 as usize] << 4) | tab[b1 as usize];
            set_data_byte(drow, k, byte as u32);
        }
    }

    dst.clear_pad_bits();
    Ok(dst.into())
}

/// Reduce a binary image 2x with a rank threshold.
///
/// The destination pixel is ON when at least `level` of the four pixels in
/// the corresponding 2x2 source block are ON. Dimensions and resolution
/// behave as in [`reduce_binary_2`].
///
/// A caller-built [`RankTable`] avoids rebuilding across repeated calls;
/// its level must agree with `level`.
///
/// # Errors
///
/// Returns [`ScaleError::RankTableMismatch`] if a supplied table was built
/// for a different level, and [`ScaleError::HeightTooSmall`] if the source
/// has fewer than 2 rows.
pub fn reduce_rank_binary_2(
    src: &BitImage,
    level: RankLevel,
    table: Option<&RankTable>,
) -> ScaleResult<BitImage> {
    if let Some(t) = table {
        if t.level() != level {
            return Err(ScaleError::RankTableMismatch {
                table: t.level().count(),
                requested: level.count(),
            });
        }
    }
    if src.height() < 2 {
        return Err(ScaleError::HeightTooSmall(src.height()));
    }
    let built;
    let tab = match table {
        Some(t) => t,
        None => {
            built = RankTable::new(level);
            &built
        }
    };

    let mut dst = make_half_size_template(src)?;
    let hd = dst.height();
    let src_bytes = 4 * src.wpl();
    let dst_bytes = 4 * dst.wpl();

    for yd in 0..hd {
        let top = src.row_data(2 * yd);
        let bot = src.row_data(2 * yd + 1);
        let drow = dst.row_data_mut(yd);
        for k in 0..dst_bytes {
            let t0 = src_byte(top, 2 * k, src_bytes);
            let b0 = src_byte(bot, 2 * k, src_bytes);
            let t1 = src_byte(top, 2 * k + 1, src_bytes);
            let b1 = src_byte(bot, 2 * k + 1, src_bytes);
            let nib0 = tab.lookup(t0 | b0, t0 & b0);
            let nib1 = tab.lookup(t1 | b1, t1 & b1);
            set_data_byte(drow, k, (nib0 << 4) | nib1);
        }
    }

    dst.clear_pad_bits();
    Ok(dst.into())
}

/// Chain up to four 2x rank reductions for 2x, 4x, 8x or 16x reduction.
///
/// Each `level_i` in 1..=4 runs one stage; the first `level_i <= 0`
/// truncates the cascade and the result of the previous stage is
/// returned. A truncation before the first stage is reported with a
/// warning and yields a full-resolution **deep copy** of the input, so
/// the caller always owns a fresh image and never gets back the handle it
/// passed in.
///
/// Rank tables are built at most once per level and reused across stages.
///
/// # Errors
///
/// Any `level_i > 4` is [`ScaleError::InvalidRankLevel`], checked before
/// any stage runs. Stage errors (for instance a source that becomes too
/// short to halve) propagate unchanged.
pub fn reduce_rank_binary_cascade(
    src: &BitImage,
    level1: i32,
    level2: i32,
    level3: i32,
    level4: i32,
) -> ScaleResult<BitImage> {
    let levels = [level1, level2, level3, level4];
    for &l in &levels {
        if l > 4 {
            return Err(ScaleError::InvalidRankLevel(l));
        }
    }
    if level1 <= 0 {
        tracing::warn!(level1, "reduction cascade truncated before the first stage; returning a full-resolution copy");
        return Ok(src.deep_clone());
    }

    let mut tables: [Option<RankTable>; 4] = [None, None, None, None];
    let mut out: Option<BitImage> = None;
    for &l in &levels {
        if l <= 0 {
            break;
        }
        let level = RankLevel::from_count(l)?;
        let tab = tables[(l - 1) as usize].get_or_insert_with(|| RankTable::new(level));
        let reduced = match &out {
            Some(prev) => reduce_rank_binary_2(prev, level, Some(tab))?,
            None => reduce_rank_binary_2(src, level, Some(tab))?,
        };
        out = Some(reduced);
    }
    // level1 > 0, so at least one stage ran
    Ok(out.unwrap())
}

/// Create the cleared destination for a 2x reduction of `src`, with the
/// resolution halved.
fn make_half_size_template(src: &BitImage) -> ScaleResult<BitImageMut> {
    let mut dst = BitImage::new(src.width() / 2, src.height() / 2)?
        .try_into_mut()
        .unwrap();
    dst.copy_resolution_from(src);
    dst.scale_resolution(0.5, 0.5);
    Ok(dst)
}

/// Read byte `k` of a source row, treating bytes past the row storage as 0.
///
/// The destination row can cover up to one byte more than the source row
/// stores when the source width is just under a word boundary.
#[inline]
fn src_byte(row: &[u32], k: u32, src_bytes: u32) -> u32 {
    if k < src_bytes { get_data_byte(row, k) } else { 0 }
}
