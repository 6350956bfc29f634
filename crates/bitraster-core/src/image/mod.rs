//! BitImage - the packed binary image container
//!
//! A `BitImage` is a 1-bit-per-pixel raster stored as rows of 32-bit words.
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words
//! - Every row starts on a 32-bit boundary and occupies `wpl` words
//! - Pixels are packed MSB to LSB within each word: pixel `x` lives at bit
//!   `31 - x % 32` of word `x / 32`
//! - Unused pad bits past the image width in the last word of a row are
//!   kept clear by every operation in this workspace
//!
//! # Ownership model
//!
//! `BitImage` uses `Arc` for efficient cloning (shared immutable view).
//! To modify pixel data, convert to `BitImageMut` via
//! [`BitImage::try_into_mut`] or [`BitImage::to_mut`], then convert back
//! with `Into<BitImage>`.

mod access;
mod border;

pub use access::{
    clear_data_bit, get_data_bit, get_data_byte, get_data_dibit, get_data_qbit,
    get_data_two_bytes, set_data_bit, set_data_byte, set_data_dibit, set_data_qbit,
    set_data_two_bytes,
};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal image data
#[derive(Debug)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// 32-bit words per line
    wpl: u32,
    /// X resolution (ppi), 0 if unknown
    xres: i32,
    /// Y resolution (ppi), 0 if unknown
    yres: i32,
    /// The image data (packed 32-bit words, `wpl * height` of them)
    data: Vec<u32>,
}

impl ImageData {
    fn alloc(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let wpl = width.div_ceil(32);
        let data = vec![0u32; (wpl as usize) * (height as usize)];
        Ok(ImageData {
            width,
            height,
            wpl,
            xres: 0,
            yres: 0,
            data,
        })
    }
}

/// BitImage - packed binary raster
///
/// The fundamental image type of this workspace. It uses reference
/// counting via `Arc` for efficient cloning; `clone()` produces a shared
/// immutable view with its own handle.
///
/// # Examples
///
/// ```
/// use bitraster_core::BitImage;
///
/// let img = BitImage::new(640, 480).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.wpl(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct BitImage {
    inner: Arc<ImageData>,
}

impl BitImage {
    /// Create a new image with the given dimensions, all pixels clear.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(BitImage {
            inner: Arc::new(ImageData::alloc(width, height)?),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the words per line, `ceil(width / 32)`.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get the X resolution (ppi).
    #[inline]
    pub fn xres(&self) -> i32 {
        self.inner.xres
    }

    /// Get the Y resolution (ppi).
    #[inline]
    pub fn yres(&self) -> i32 {
        self.inner.yres
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this image.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the words of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &self.inner.data[start..end]
    }

    /// Create a new cleared image with the same dimensions and resolution.
    pub fn create_template(&self) -> Self {
        let inner = ImageData {
            width: self.inner.width,
            height: self.inner.height,
            wpl: self.inner.wpl,
            xres: self.inner.xres,
            yres: self.inner.yres,
            data: vec![0u32; self.inner.data.len()],
        };
        BitImage {
            inner: Arc::new(inner),
        }
    }

    /// Create a deep copy of this image.
    ///
    /// Unlike `clone()` which shares data via `Arc`, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        let inner = ImageData {
            width: self.inner.width,
            height: self.inner.height,
            wpl: self.inner.wpl,
            xres: self.inner.xres,
            yres: self.inner.yres,
            data: self.inner.data.clone(),
        };
        BitImage {
            inner: Arc::new(inner),
        }
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &BitImage) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Compare two images for exact pixel equality.
    ///
    /// Pad bits past the image width are ignored.
    pub fn equals(&self, other: &BitImage) -> bool {
        if !self.sizes_equal(other) {
            return false;
        }
        let wpl = self.inner.wpl as usize;
        let mask = row_end_mask(self.inner.width);
        for y in 0..self.inner.height as usize {
            let a = &self.inner.data[y * wpl..(y + 1) * wpl];
            let b = &other.inner.data[y * wpl..(y + 1) * wpl];
            if a[..wpl - 1] != b[..wpl - 1] {
                return false;
            }
            if (a[wpl - 1] ^ b[wpl - 1]) & mask != 0 {
                return false;
            }
        }
        true
    }

    /// Count the set (foreground) pixels.
    ///
    /// Pad bits past the image width are ignored.
    pub fn count_pixels(&self) -> u64 {
        let wpl = self.inner.wpl as usize;
        let mask = row_end_mask(self.inner.width);
        let mut count = 0u64;
        for y in 0..self.inner.height as usize {
            let row = &self.inner.data[y * wpl..(y + 1) * wpl];
            for &word in &row[..wpl - 1] {
                count += word.count_ones() as u64;
            }
            count += (row[wpl - 1] & mask).count_ones() as u64;
        }
        count
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<BitImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(BitImageMut { inner: data }),
            Err(arc) => Err(BitImage { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> BitImageMut {
        BitImageMut {
            inner: ImageData {
                width: self.inner.width,
                height: self.inner.height,
                wpl: self.inner.wpl,
                xres: self.inner.xres,
                yres: self.inner.yres,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable BitImage
///
/// Allows modification of image data. Convert back to an immutable
/// [`BitImage`] using `Into<BitImage>`. Exclusive access is enforced at
/// compile time instead of by reference counting at run time.
#[derive(Debug)]
pub struct BitImageMut {
    inner: ImageData,
}

impl BitImageMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get the X resolution (ppi).
    #[inline]
    pub fn xres(&self) -> i32 {
        self.inner.xres
    }

    /// Get the Y resolution (ppi).
    #[inline]
    pub fn yres(&self) -> i32 {
        self.inner.yres
    }

    /// Set the X resolution.
    pub fn set_xres(&mut self, xres: i32) {
        self.inner.xres = xres;
    }

    /// Set the Y resolution.
    pub fn set_yres(&mut self, yres: i32) {
        self.inner.yres = yres;
    }

    /// Set both resolutions.
    pub fn set_resolution(&mut self, xres: i32, yres: i32) {
        self.inner.xres = xres;
        self.inner.yres = yres;
    }

    /// Copy resolution (xres, yres) from another image.
    pub fn copy_resolution_from(&mut self, src: &BitImage) {
        self.inner.xres = src.inner.xres;
        self.inner.yres = src.inner.yres;
    }

    /// Scale the resolution by the given factors.
    pub fn scale_resolution(&mut self, xscale: f32, yscale: f32) {
        self.inner.xres = (self.inner.xres as f32 * xscale) as i32;
        self.inner.yres = (self.inner.yres as f32 * yscale) as i32;
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get the words of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &self.inner.data[start..end]
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &mut self.inner.data[start..end]
    }

    /// Create an independent immutable snapshot of the current contents.
    ///
    /// Used by in-place transforms that must read the original pixels
    /// while overwriting the destination.
    pub fn snapshot(&self) -> BitImage {
        BitImage {
            inner: Arc::new(ImageData {
                width: self.inner.width,
                height: self.inner.height,
                wpl: self.inner.wpl,
                xres: self.inner.xres,
                yres: self.inner.yres,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Clear all pixels to zero.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }

    /// Set all pixels to one.
    ///
    /// Pad bits past the image width are left clear.
    pub fn set_all(&mut self) {
        self.inner.data.fill(0xFFFF_FFFF);
        self.clear_pad_bits();
    }

    /// Clear the unused bits past the image width in the last word of
    /// each row.
    ///
    /// Word-level operations can set these bits; they must be cleared
    /// before the data is handed to a consumer that reads whole words.
    pub fn clear_pad_bits(&mut self) {
        let extra = self.inner.width % 32;
        if extra == 0 {
            return;
        }
        let mask = !0u32 << (32 - extra);
        let wpl = self.inner.wpl as usize;
        for y in 0..self.inner.height as usize {
            self.inner.data[y * wpl + wpl - 1] &= mask;
        }
    }
}

impl From<BitImageMut> for BitImage {
    fn from(img: BitImageMut) -> Self {
        BitImage {
            inner: Arc::new(img.inner),
        }
    }
}

/// Mask with ones at the valid bit positions of the last word in a row.
#[inline]
pub(crate) fn row_end_mask(width: u32) -> u32 {
    let extra = width % 32;
    if extra == 0 { !0u32 } else { !0u32 << (32 - extra) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let img = BitImage::new(100, 200).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 200);
        // 100 bits = 4 words per line
        assert_eq!(img.wpl(), 4);
        assert_eq!(img.data().len(), 4 * 200);
    }

    #[test]
    fn test_creation_invalid() {
        assert!(BitImage::new(0, 100).is_err());
        assert!(BitImage::new(100, 0).is_err());
    }

    #[test]
    fn test_wpl_calculation() {
        assert_eq!(BitImage::new(32, 1).unwrap().wpl(), 1);
        assert_eq!(BitImage::new(33, 1).unwrap().wpl(), 2);
        assert_eq!(BitImage::new(64, 1).unwrap().wpl(), 2);
        assert_eq!(BitImage::new(65, 1).unwrap().wpl(), 3);
    }

    #[test]
    fn test_clone_shares_data() {
        let img1 = BitImage::new(100, 100).unwrap();
        let img2 = img1.clone();
        assert_eq!(img1.ref_count(), 2);
        assert_eq!(img2.ref_count(), 2);
        assert_eq!(img1.data().as_ptr(), img2.data().as_ptr());
    }

    #[test]
    fn test_deep_clone() {
        let img1 = BitImage::new(100, 100).unwrap();
        let img2 = img1.deep_clone();
        assert_eq!(img1.ref_count(), 1);
        assert_eq!(img2.ref_count(), 1);
        assert_ne!(img1.data().as_ptr(), img2.data().as_ptr());
        assert!(img1.equals(&img2));
    }

    #[test]
    fn test_try_into_mut() {
        let img = BitImage::new(50, 50).unwrap();
        let mut m = img.try_into_mut().unwrap();
        m.set_resolution(300, 300);
        let img: BitImage = m.into();
        assert_eq!(img.xres(), 300);
        assert_eq!(img.yres(), 300);

        // Shared images cannot be unwrapped
        let shared = img.clone();
        assert!(img.try_into_mut().is_err());
        drop(shared);
    }

    #[test]
    fn test_set_all_leaves_pad_clear() {
        // width 10: 22 pad bits in the single word per row
        let img = BitImage::new(10, 2).unwrap();
        let mut m = img.try_into_mut().unwrap();
        m.set_all();
        assert_eq!(m.data()[0], 0xFFC0_0000);
        assert_eq!(m.data()[1], 0xFFC0_0000);
        let img: BitImage = m.into();
        assert_eq!(img.count_pixels(), 20);
    }

    #[test]
    fn test_equals_ignores_pad_bits() {
        let a = BitImage::new(10, 1).unwrap();
        let mut bm = BitImage::new(10, 1).unwrap().try_into_mut().unwrap();
        // Garbage in the pad region only
        bm.data_mut()[0] = 0x000F_FFFF & !(!0u32 << 22);
        let b: BitImage = bm.into();
        assert!(a.equals(&b));
    }

    #[test]
    fn test_count_pixels() {
        let img = BitImage::new(64, 64).unwrap();
        assert_eq!(img.count_pixels(), 0);
        let mut m = img.try_into_mut().unwrap();
        m.set_all();
        let img: BitImage = m.into();
        assert_eq!(img.count_pixels(), 64 * 64);
    }

    #[test]
    fn test_create_template() {
        let img = BitImage::new(40, 30).unwrap();
        let mut m = img.try_into_mut().unwrap();
        m.set_resolution(300, 150);
        m.set_pixel(5, 5, 1).unwrap();
        let img: BitImage = m.into();

        let tmpl = img.create_template();
        assert_eq!(tmpl.width(), 40);
        assert_eq!(tmpl.height(), 30);
        assert_eq!(tmpl.xres(), 300);
        assert_eq!(tmpl.yres(), 150);
        assert_eq!(tmpl.count_pixels(), 0);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let img = BitImage::new(40, 30).unwrap();
        let mut m = img.try_into_mut().unwrap();
        m.set_pixel(3, 3, 1).unwrap();
        let snap = m.snapshot();
        m.clear();
        assert_eq!(snap.count_pixels(), 1);
        assert_eq!(m.data().iter().map(|w| w.count_ones()).sum::<u32>(), 0);
    }
}
