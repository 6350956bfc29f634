//! The compiled hit-miss structuring element catalogue
//!
//! A small, closed set of 3x3 structuring elements, each paired with a
//! specialized word-level loop in [`dwa`](crate::dwa). There is no
//! general SEL compiler here: names resolve by a linear scan of the
//! catalogue, and an unknown name is a hard error at the public entry
//! point.
//!
//! Patterns use the usual notation: `C` is the origin (a hit), `o` is a
//! miss, and `.` is don't-care.

// sel_3hm: isolated foreground pixel
// ooo
// oCo
// ooo

// sel_3ue: foreground pixel on a top edge
// ooo
//  C
//  .

// sel_3de: foreground pixel on a bottom edge
//  .
//  C
// ooo

// sel_3le: foreground pixel on a left edge
// o.
// oC
// o.

// sel_3re: foreground pixel on a right edge
// .o
// Co
// .o

/// A compiled 3x3 hit-miss structuring element
///
/// The catalogue is closed: each variant is paired with generated-style
/// word-level code in [`dwa`](crate::dwa), selected by discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HmtSel {
    /// `sel_3hm` - isolated foreground pixel (8 misses around a hit)
    Isolated3 = 0,
    /// `sel_3ue` - foreground pixel with background along the row above
    UpEdge3 = 1,
    /// `sel_3de` - foreground pixel with background along the row below
    DownEdge3 = 2,
    /// `sel_3le` - foreground pixel with background along the column left
    LeftEdge3 = 3,
    /// `sel_3re` - foreground pixel with background along the column right
    RightEdge3 = 4,
}

impl HmtSel {
    /// Every catalogue entry, in dispatch order.
    pub const ALL: [HmtSel; 5] = [
        HmtSel::Isolated3,
        HmtSel::UpEdge3,
        HmtSel::DownEdge3,
        HmtSel::LeftEdge3,
        HmtSel::RightEdge3,
    ];

    /// Get the catalogue name of this structuring element.
    pub fn name(self) -> &'static str {
        match self {
            HmtSel::Isolated3 => "sel_3hm",
            HmtSel::UpEdge3 => "sel_3ue",
            HmtSel::DownEdge3 => "sel_3de",
            HmtSel::LeftEdge3 => "sel_3le",
            HmtSel::RightEdge3 => "sel_3re",
        }
    }

    /// Look a structuring element up by catalogue name.
    ///
    /// Returns `None` when the name is not in the catalogue.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sel| sel.name() == name)
    }

    /// Hit positions relative to the origin, as (dx, dy) offsets.
    pub fn hit_offsets(self) -> &'static [(i32, i32)] {
        // Every catalogue entry hits only at its origin
        &[(0, 0)]
    }

    /// Miss positions relative to the origin, as (dx, dy) offsets.
    pub fn miss_offsets(self) -> &'static [(i32, i32)] {
        match self {
            HmtSel::Isolated3 => &[
                (-1, -1),
                (0, -1),
                (1, -1),
                (-1, 0),
                (1, 0),
                (-1, 1),
                (0, 1),
                (1, 1),
            ],
            HmtSel::UpEdge3 => &[(-1, -1), (0, -1), (1, -1)],
            HmtSel::DownEdge3 => &[(-1, 1), (0, 1), (1, 1)],
            HmtSel::LeftEdge3 => &[(-1, -1), (-1, 0), (-1, 1)],
            HmtSel::RightEdge3 => &[(1, -1), (1, 0), (1, 1)],
        }
    }
}
