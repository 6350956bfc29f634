//! Border operations
//!
//! Adding and removing borders (padding) around a binary image, either
//! uniform or with a different size per side. Word-aligned borders take
//! a fast path that copies whole words per row; the general case falls
//! back to per-pixel copying.

use super::{BitImage, get_data_bit, set_data_bit};
use crate::error::{Error, Result};

impl BitImage {
    /// Add a uniform border of `npix` pixels on all sides.
    ///
    /// The border is filled with `val` (0 or 1; any nonzero value sets
    /// the border pixels). Resolution is copied to the result.
    pub fn add_border(&self, npix: u32, val: u32) -> Result<BitImage> {
        self.add_border_general(npix, npix, npix, npix, val)
    }

    /// Add a border with a different size per side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the new dimensions would
    /// overflow.
    pub fn add_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
        val: u32,
    ) -> Result<BitImage> {
        let new_w = self
            .width()
            .checked_add(left)
            .and_then(|w| w.checked_add(right))
            .ok_or(Error::InvalidDimension {
                width: u32::MAX,
                height: self.height(),
            })?;
        let new_h = self
            .height()
            .checked_add(top)
            .and_then(|h| h.checked_add(bot))
            .ok_or(Error::InvalidDimension {
                width: self.width(),
                height: u32::MAX,
            })?;

        let mut out = BitImage::new(new_w, new_h)?.try_into_mut().unwrap();
        out.copy_resolution_from(self);
        if val & 1 != 0 {
            out.set_all();
        }

        // Whole-word copy requires the interior to start and end on word
        // boundaries when the border value is 1; a 0 border only needs an
        // aligned start, since the source pad bits are already clear.
        if left % 32 == 0 && (val & 1 == 0 || self.width() % 32 == 0) {
            let left_words = (left / 32) as usize;
            let src_wpl = self.wpl() as usize;
            for y in 0..self.height() {
                let src_row = self.row_data(y);
                let dst_row = out.row_data_mut(y + top);
                dst_row[left_words..left_words + src_wpl].copy_from_slice(src_row);
            }
        } else {
            for y in 0..self.height() {
                let src_row = self.row_data(y);
                let dst_row = out.row_data_mut(y + top);
                for x in 0..self.width() {
                    set_data_bit(dst_row, x + left, get_data_bit(src_row, x));
                }
            }
        }

        out.clear_pad_bits();
        Ok(out.into())
    }

    /// Remove a uniform border of `npix` pixels from all sides.
    pub fn remove_border(&self, npix: u32) -> Result<BitImage> {
        self.remove_border_general(npix, npix, npix, npix)
    }

    /// Remove a border with a different size per side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BorderTooLarge`] if the border meets or exceeds
    /// the image extent in either direction.
    pub fn remove_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
    ) -> Result<BitImage> {
        let w = self.width();
        let h = self.height();
        if left as u64 + right as u64 >= w as u64 || top as u64 + bot as u64 >= h as u64 {
            return Err(Error::BorderTooLarge {
                left,
                right,
                top,
                bot,
                width: w,
                height: h,
            });
        }
        let new_w = w - left - right;
        let new_h = h - top - bot;

        let mut out = BitImage::new(new_w, new_h)?.try_into_mut().unwrap();
        out.copy_resolution_from(self);

        if left % 32 == 0 {
            let left_words = (left / 32) as usize;
            let dst_wpl = out.wpl() as usize;
            for y in 0..new_h {
                let src_row = self.row_data(y + top);
                let dst_row = out.row_data_mut(y);
                dst_row.copy_from_slice(&src_row[left_words..left_words + dst_wpl]);
            }
        } else {
            for y in 0..new_h {
                let src_row = self.row_data(y + top);
                let dst_row = out.row_data_mut(y);
                for x in 0..new_w {
                    set_data_bit(dst_row, x, get_data_bit(src_row, x + left));
                }
            }
        }

        // The copied words can carry right-border pixels into the pad region
        out.clear_pad_bits();
        Ok(out.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(w: u32, h: u32) -> BitImage {
        let img = BitImage::new(w, h).unwrap();
        let mut m = img.try_into_mut().unwrap();
        for y in 0..h {
            for x in 0..w {
                if (x * 7 + y * 13) % 5 == 0 {
                    m.set_pixel_unchecked(x, y, 1);
                }
            }
        }
        m.into()
    }

    #[test]
    fn test_add_border_dimensions() {
        let img = pattern(50, 37);
        let bordered = img.add_border(32, 0).unwrap();
        assert_eq!(bordered.width(), 50 + 64);
        assert_eq!(bordered.height(), 37 + 64);
        assert_eq!(bordered.count_pixels(), img.count_pixels());
    }

    #[test]
    fn test_add_remove_roundtrip_aligned() {
        let img = pattern(50, 37);
        let restored = img.add_border(32, 0).unwrap().remove_border(32).unwrap();
        assert!(restored.equals(&img));
    }

    #[test]
    fn test_add_remove_roundtrip_unaligned() {
        let img = pattern(45, 21);
        let restored = img
            .add_border_general(3, 7, 2, 5, 0)
            .unwrap()
            .remove_border_general(3, 7, 2, 5)
            .unwrap();
        assert!(restored.equals(&img));
    }

    #[test]
    fn test_add_border_ones() {
        let img = BitImage::new(10, 10).unwrap();
        let bordered = img.add_border(2, 1).unwrap();
        assert_eq!(bordered.width(), 14);
        // 14*14 total minus the 10x10 interior of zeros
        assert_eq!(bordered.count_pixels(), 14 * 14 - 100);
        assert_eq!(bordered.get_pixel(0, 0), Some(1));
        assert_eq!(bordered.get_pixel(5, 5), Some(0));
    }

    #[test]
    fn test_remove_border_too_large() {
        let img = BitImage::new(10, 10).unwrap();
        assert!(img.remove_border(5).is_err());
        assert!(img.remove_border_general(4, 4, 0, 0).is_ok());
        assert!(img.remove_border_general(5, 5, 0, 0).is_err());
    }

    #[test]
    fn test_border_propagates_resolution() {
        let img = BitImage::new(20, 20).unwrap();
        let mut m = img.try_into_mut().unwrap();
        m.set_resolution(300, 300);
        let img: BitImage = m.into();
        let bordered = img.add_border(8, 0).unwrap();
        assert_eq!(bordered.xres(), 300);
        let stripped = bordered.remove_border(8).unwrap();
        assert_eq!(stripped.yres(), 300);
    }
}
