//! Power-of-2 binary expansion
//!
//! The algebraic inverse of the 2x reducers: each source pixel becomes a
//! square block of identical destination pixels. Horizontal expansion is
//! table-driven (one lookup per source byte, nibble or dibit produces a
//! whole destination word or halfword); vertical expansion replicates the
//! finished row with block memory copies instead of recomputing it.

use bitraster_core::{
    BitImage, BitImageMut, Error, get_data_bit, get_data_byte, get_data_dibit, get_data_qbit,
    set_data_bit, set_data_two_bytes,
};

use crate::error::{ScaleError, ScaleResult};
use crate::tables::{
    make_expand_table_2x, make_expand_table_4x, make_expand_table_8x, make_expand_table_16x,
};

/// Expand a binary image by a power-of-2 factor.
///
/// Every source pixel becomes a `factor x factor` block of identical
/// destination pixels. The destination resolution is `factor` times the
/// source's.
///
/// # Errors
///
/// Returns [`ScaleError::UnsupportedFactor`] unless `factor` is exactly
/// 2, 4, 8 or 16.
pub fn expand_binary_power2(src: &BitImage, factor: u32) -> ScaleResult<BitImage> {
    if !matches!(factor, 2 | 4 | 8 | 16) {
        return Err(ScaleError::UnsupportedFactor(factor));
    }
    let mut dst = make_expanded_template(src, factor, factor)?;

    let wpld = dst.wpl() as usize;
    let hs = src.height();

    match factor {
        2 => {
            let tab = make_expand_table_2x();
            for y in 0..hs {
                let srow = src.row_data(y);
                let drow = dst.row_data_mut(factor * y);
                for j in 0..(2 * wpld) as u32 {
                    let halfword = tab[get_data_byte(srow, j) as usize];
                    set_data_two_bytes(drow, j, halfword as u32);
                }
            }
        }
        4 => {
            let tab = make_expand_table_4x();
            for y in 0..hs {
                let srow = src.row_data(y);
                let drow = dst.row_data_mut(factor * y);
                for (j, word) in drow.iter_mut().enumerate() {
                    *word = tab[get_data_byte(srow, j as u32) as usize];
                }
            }
        }
        8 => {
            let tab = make_expand_table_8x();
            for y in 0..hs {
                let srow = src.row_data(y);
                let drow = dst.row_data_mut(factor * y);
                for (j, word) in drow.iter_mut().enumerate() {
                    *word = tab[get_data_qbit(srow, j as u32) as usize];
                }
            }
        }
        16 => {
            let tab = make_expand_table_16x();
            for y in 0..hs {
                let srow = src.row_data(y);
                let drow = dst.row_data_mut(factor * y);
                for (j, word) in drow.iter_mut().enumerate() {
                    *word = tab[get_data_dibit(srow, j as u32) as usize];
                }
            }
        }
        _ => unreachable!(),
    }

    replicate_rows(dst.data_mut(), wpld, hs, factor);
    Ok(dst.into())
}

/// Expand a binary image by arbitrary integer replication factors.
///
/// Each source pixel becomes an `xfact x yfact` block. Equal power-of-2
/// factors take the table-driven fast path of [`expand_binary_power2`];
/// `1 x 1` is a plain copy.
///
/// # Errors
///
/// Returns [`ScaleError::UnsupportedFactor`] if either factor is 0.
pub fn expand_binary_replicate(src: &BitImage, xfact: u32, yfact: u32) -> ScaleResult<BitImage> {
    if xfact == 0 || yfact == 0 {
        return Err(ScaleError::UnsupportedFactor(0));
    }
    if xfact == yfact && matches!(xfact, 2 | 4 | 8 | 16) {
        return expand_binary_power2(src, xfact);
    }
    if xfact == 1 && yfact == 1 {
        return Ok(src.deep_clone());
    }

    let mut dst = make_expanded_template(src, xfact, yfact)?;
    let wpld = dst.wpl() as usize;
    let hs = src.height();
    let ws = src.width();

    for y in 0..hs {
        let srow = src.row_data(y);
        let drow = dst.row_data_mut(yfact * y);
        for x in 0..ws {
            if get_data_bit(srow, x) != 0 {
                for dx in 0..xfact {
                    set_data_bit(drow, xfact * x + dx, 1);
                }
            }
        }
    }

    replicate_rows(dst.data_mut(), wpld, hs, yfact);
    Ok(dst.into())
}

/// Create the cleared destination for an expansion of `src`, with the
/// resolution scaled up to match.
fn make_expanded_template(src: &BitImage, xfact: u32, yfact: u32) -> ScaleResult<BitImageMut> {
    let wd = src
        .width()
        .checked_mul(xfact)
        .ok_or(Error::InvalidDimension {
            width: src.width(),
            height: src.height(),
        })?;
    let hd = src
        .height()
        .checked_mul(yfact)
        .ok_or(Error::InvalidDimension {
            width: src.width(),
            height: src.height(),
        })?;
    let mut dst = BitImage::new(wd, hd)?.try_into_mut().unwrap();
    dst.copy_resolution_from(src);
    dst.scale_resolution(xfact as f32, yfact as f32);
    Ok(dst)
}

/// Fill each vertical block by copying its first (already expanded) row
/// `yfact - 1` times.
fn replicate_rows(data: &mut [u32], wpld: usize, hs: u32, yfact: u32) {
    for y in 0..hs as usize {
        let block_start = y * yfact as usize * wpld;
        for k in 1..yfact as usize {
            data.copy_within(block_start..block_start + wpld, block_start + k * wpld);
        }
    }
}
