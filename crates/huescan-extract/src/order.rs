//! Swatch ordering: visually similar colors end up next to each other.
//!
//! Hex-keyed colors are sorted by hue once to pick a starting point, then
//! chained greedily: each step appends whichever remaining color is closest
//! in the RGB unit cube. Colors without a hex key (OKLCH-origin) follow in
//! their original order.
//!
//! The walk is O(n²). Swatch sets are small.

use huescan_space::Srgb;

use crate::extract::ExtractedColor;

/// Reorder `colors` for a swatch grid.
///
/// Every input color appears exactly once in the result.
#[must_use]
pub fn order_for_layout(colors: &[ExtractedColor]) -> Vec<ExtractedColor> {
    let mut pool: Vec<(Srgb, &ExtractedColor)> = Vec::with_capacity(colors.len());
    let mut rest: Vec<&ExtractedColor> = Vec::new();
    for color in colors {
        match color.rgb() {
            Some(rgb) => pool.push((rgb.to_srgb(), color)),
            None => rest.push(color),
        }
    }

    // Stable: equal hues keep their input order.
    pool.sort_by(|(a, _), (b, _)| a.hue().total_cmp(&b.hue()));

    let mut ordered = Vec::with_capacity(colors.len());
    if !pool.is_empty() {
        let (mut current, first) = pool.remove(0);
        ordered.push(first.clone());

        while !pool.is_empty() {
            let next = nearest(&pool, current);
            let (srgb, color) = pool.remove(next);
            log::trace!(
                "walk: {} -> {}",
                ordered.last().map_or("", ExtractedColor::canonical_key),
                color.canonical_key()
            );
            ordered.push(color.clone());
            current = srgb;
        }
    }

    ordered.extend(rest.into_iter().cloned());
    ordered
}

/// Index of the pool entry closest to `from`. Ties go to the earliest.
fn nearest(pool: &[(Srgb, &ExtractedColor)], from: Srgb) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, (srgb, _)) in pool.iter().enumerate() {
        let distance = from.distance_sq(*srgb);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}
