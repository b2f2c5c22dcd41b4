//! Interval matching between a restaurant's price range and a budget range

use shared::PriceRange;

/// Whether two closed intervals intersect.
///
/// Open upper bounds extend to `u32::MAX`. Single-point touching counts as
/// overlap. Pure and total; symmetric in its arguments.
pub fn overlaps(a: &PriceRange, b: &PriceRange) -> bool {
    let overlap_low = a.min.max(b.min);
    let overlap_high = a.upper().min(b.upper());
    overlap_low <= overlap_high
}
