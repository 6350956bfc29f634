//! Hit-miss transform regression test
//!
//! Verifies every specialized word-level loop against a per-pixel
//! reference built from the catalogue's published hit and miss offsets,
//! on random images whose widths straddle word boundaries.
//!
//! Run with:
//! ```
//! cargo test -p bitraster-morph --test hmtdwa_reg
//! ```

use bitraster_core::BitImage;
use bitraster_morph::{HmtSel, hmt_dwa, hmt_dwa_inplace, hmt_dwa_sel};
use bitraster_test::RegParams;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn random_image(w: u32, h: u32, seed: u64) -> BitImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let img = BitImage::new(w, h).unwrap();
    let mut m = img.try_into_mut().unwrap();
    for word in m.data_mut() {
        *word = rng.random();
    }
    m.clear_pad_bits();
    m.into()
}

/// Per-pixel hit-miss reference. Probes outside the image are background:
/// they fail a hit and satisfy a miss.
fn hmt_reference(src: &BitImage, sel: HmtSel) -> BitImage {
    let w = src.width();
    let h = src.height();
    let probe = |x: i32, y: i32| -> u32 {
        if x >= 0 && x < w as i32 && y >= 0 && y < h as i32 {
            src.get_pixel_unchecked(x as u32, y as u32)
        } else {
            0
        }
    };

    let dst = BitImage::new(w, h).unwrap();
    let mut m = dst.try_into_mut().unwrap();
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let hits = sel
                .hit_offsets()
                .iter()
                .all(|&(dx, dy)| probe(x + dx, y + dy) != 0);
            let misses = sel
                .miss_offsets()
                .iter()
                .all(|&(dx, dy)| probe(x + dx, y + dy) == 0);
            if hits && misses {
                m.set_pixel_unchecked(x as u32, y as u32, 1);
            }
        }
    }
    m.into()
}

#[test]
fn hmtdwa_reg() {
    let mut rp = RegParams::new("hmtdwa");

    let images = [
        random_image(98, 67, 0x7001),
        random_image(64, 64, 0x7002),
        random_image(31, 45, 0x7003),
        random_image(130, 22, 0x7004),
    ];

    for pixs in &images {
        for sel in HmtSel::ALL {
            // Specialized loop against the offset-driven reference
            let fast = hmt_dwa_sel(pixs, sel).expect("hit-miss transform failed");
            rp.compare_images(&fast, &hmt_reference(pixs, sel));

            // Name-based dispatch reaches the same code
            let by_name = hmt_dwa(pixs, sel.name()).expect("name dispatch failed");
            rp.compare_images(&fast, &by_name);

            // In-place form agrees with the allocating form
            let mut inplace = pixs.to_mut();
            hmt_dwa_inplace(&mut inplace, sel).expect("in-place transform failed");
            rp.compare_images(&fast, &BitImage::from(inplace));
        }
    }

    // Dimensions are preserved through the border round trip
    let out = hmt_dwa_sel(&images[0], HmtSel::Isolated3).unwrap();
    rp.compare_values(98.0, out.width() as f64, 0.0);
    rp.compare_values(67.0, out.height() as f64, 0.0);

    // Unknown names are hard errors
    let unknown_errs = hmt_dwa(&images[0], "sel_3xx").is_err();
    rp.compare_values(1.0, if unknown_errs { 1.0 } else { 0.0 }, 0.0);

    // On an all-ones image only true edges survive: nothing is isolated,
    // and each edge detector keeps exactly one border line
    let ones = {
        let mut m = BitImage::new(70, 40).unwrap().try_into_mut().unwrap();
        m.set_all();
        BitImage::from(m)
    };
    rp.compare_values(
        0.0,
        hmt_dwa_sel(&ones, HmtSel::Isolated3).unwrap().count_pixels() as f64,
        0.0,
    );
    rp.compare_values(
        70.0,
        hmt_dwa_sel(&ones, HmtSel::UpEdge3).unwrap().count_pixels() as f64,
        0.0,
    );
    rp.compare_values(
        40.0,
        hmt_dwa_sel(&ones, HmtSel::RightEdge3).unwrap().count_pixels() as f64,
        0.0,
    );

    assert!(rp.cleanup(), "hmtdwa regression test failed");
}
