//! Word-level hit-miss transform over the compiled catalogue
//!
//! Each catalogue entry is applied by its own specialized loop that
//! computes whole destination words from shifted source words
//! (destination word accumulation). The loops read one word to either
//! side and one row above and below the word being produced, so they
//! require the source to carry an adequate border; the public entry
//! point [`hmt_dwa`] adds a [`BORDER`]-pixel background border, runs the
//! raw dispatcher and strips the border again, so callers never see the
//! padding contract.

use bitraster_core::{BitImage, BitImageMut};

use crate::error::{MorphError, MorphResult};
use crate::hmt_sels::HmtSel;

/// Border width, in pixels, added by [`hmt_dwa`] before dispatch.
///
/// One full word on either side keeps every word access of the
/// specialized loops in bounds.
pub const BORDER: u32 = 32;

/// Apply a compiled hit-miss transform selected by catalogue name.
///
/// The result has the same dimensions and resolution as the source; a
/// destination pixel is ON where the source matches the element's hit
/// and miss pattern, with everything outside the image treated as
/// background.
///
/// # Errors
///
/// Returns [`MorphError::UnknownSel`] if `sel_name` is not in the
/// catalogue.
pub fn hmt_dwa(pix: &BitImage, sel_name: &str) -> MorphResult<BitImage> {
    let sel = HmtSel::from_name(sel_name)
        .ok_or_else(|| MorphError::UnknownSel(sel_name.to_string()))?;
    hmt_dwa_sel(pix, sel)
}

/// Apply a compiled hit-miss transform selected by catalogue entry.
pub fn hmt_dwa_sel(pix: &BitImage, sel: HmtSel) -> MorphResult<BitImage> {
    let bordered = pix.add_border(BORDER, 0)?;
    let raw = fhmt_gen(&bordered, sel);
    Ok(raw.remove_border(BORDER)?)
}

/// Apply a compiled hit-miss transform in place.
///
/// The specialized loops read neighboring words of the row being
/// written, so the source is always snapshotted internally before the
/// destination buffer is overwritten; the caller's buffer never aliases
/// the data being read.
pub fn hmt_dwa_inplace(pix: &mut BitImageMut, sel: HmtSel) -> MorphResult<()> {
    let snapshot = pix.snapshot();
    let result = hmt_dwa_sel(&snapshot, sel)?;
    pix.data_mut().copy_from_slice(result.data());
    Ok(())
}

/// Raw dispatcher: run the specialized loop for `sel` over an
/// already-bordered source.
///
/// The source must carry at least one word of background border on the
/// left and right and one row on the top and bottom; [`hmt_dwa`]
/// guarantees this. Border words of the result are left clear.
pub fn fhmt_gen(pix: &BitImage, sel: HmtSel) -> BitImage {
    let mut dst = pix.create_template().try_into_mut().unwrap();
    let wpl = pix.wpl() as usize;
    let h = pix.height() as usize;
    FHMT_LOW[sel as usize](dst.data_mut(), pix.data(), wpl, h);
    dst.into()
}

type FhmtLow = fn(&mut [u32], &[u32], usize, usize);

/// Specialized loops in [`HmtSel`] discriminant order.
const FHMT_LOW: [FhmtLow; 5] = [
    fhmt_isolated_3,
    fhmt_up_edge_3,
    fhmt_down_edge_3,
    fhmt_left_edge_3,
    fhmt_right_edge_3,
];

/// Word holding each pixel's west neighbor (x - 1), MSB-first.
#[inline]
fn west(word: u32, left: u32) -> u32 {
    (word >> 1) | (left << 31)
}

/// Word holding each pixel's east neighbor (x + 1), MSB-first.
#[inline]
fn east(word: u32, right: u32) -> u32 {
    (word << 1) | (right >> 31)
}

// sel_3hm: center hit, all 8 neighbors miss
fn fhmt_isolated_3(dst: &mut [u32], src: &[u32], wpl: usize, h: usize) {
    for i in 1..h.saturating_sub(1) {
        let u = (i - 1) * wpl;
        let c = i * wpl;
        let d = (i + 1) * wpl;
        for j in 1..wpl - 1 {
            let neighbors = west(src[u + j], src[u + j - 1])
                | src[u + j]
                | east(src[u + j], src[u + j + 1])
                | west(src[c + j], src[c + j - 1])
                | east(src[c + j], src[c + j + 1])
                | west(src[d + j], src[d + j - 1])
                | src[d + j]
                | east(src[d + j], src[d + j + 1]);
            dst[c + j] = src[c + j] & !neighbors;
        }
    }
}

// sel_3ue: center hit, three misses in the row above
fn fhmt_up_edge_3(dst: &mut [u32], src: &[u32], wpl: usize, h: usize) {
    for i in 1..h.saturating_sub(1) {
        let u = (i - 1) * wpl;
        let c = i * wpl;
        for j in 1..wpl - 1 {
            let above =
                west(src[u + j], src[u + j - 1]) | src[u + j] | east(src[u + j], src[u + j + 1]);
            dst[c + j] = src[c + j] & !above;
        }
    }
}

// sel_3de: center hit, three misses in the row below
fn fhmt_down_edge_3(dst: &mut [u32], src: &[u32], wpl: usize, h: usize) {
    for i in 1..h.saturating_sub(1) {
        let c = i * wpl;
        let d = (i + 1) * wpl;
        for j in 1..wpl - 1 {
            let below =
                west(src[d + j], src[d + j - 1]) | src[d + j] | east(src[d + j], src[d + j + 1]);
            dst[c + j] = src[c + j] & !below;
        }
    }
}

// sel_3le: center hit, three misses in the column to the left
fn fhmt_left_edge_3(dst: &mut [u32], src: &[u32], wpl: usize, h: usize) {
    for i in 1..h.saturating_sub(1) {
        let u = (i - 1) * wpl;
        let c = i * wpl;
        let d = (i + 1) * wpl;
        for j in 1..wpl - 1 {
            let left_col = west(src[u + j], src[u + j - 1])
                | west(src[c + j], src[c + j - 1])
                | west(src[d + j], src[d + j - 1]);
            dst[c + j] = src[c + j] & !left_col;
        }
    }
}

// sel_3re: center hit, three misses in the column to the right
fn fhmt_right_edge_3(dst: &mut [u32], src: &[u32], wpl: usize, h: usize) {
    for i in 1..h.saturating_sub(1) {
        let u = (i - 1) * wpl;
        let c = i * wpl;
        let d = (i + 1) * wpl;
        for j in 1..wpl - 1 {
            let right_col = east(src[u + j], src[u + j + 1])
                | east(src[c + j], src[c + j + 1])
                | east(src[d + j], src[d + j + 1]);
            dst[c + j] = src[c + j] & !right_col;
        }
    }
}
