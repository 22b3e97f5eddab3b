//! Circle packing for the bubble chart.
//!
//! Circles are placed largest first against a front chain: the ring of
//! circles on the outside of the layout. Each new circle is placed tangent
//! to the chain pair closest to the origin; if it would intersect another
//! chain circle, the chain is cut back to that circle and placement retried.
//! Only chain circles are checked, so each placement costs the chain length
//! rather than the whole layout. The result is then scaled into the target box.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackedCircle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

const EPSILON: f64 = 1e-6;

fn intersects(a: &PackedCircle, b: &PackedCircle) -> bool {
    let dr = a.r + b.r - EPSILON;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr > 0.0 && dr * dr > dx * dx + dy * dy
}

/// Center for a circle of radius `r` tangent to both `a` and `b`,
/// on the outer side when walking the chain from `a` to `b`
fn place(a: &PackedCircle, b: &PackedCircle, r: f64) -> (f64, f64) {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let d2 = dx * dx + dy * dy;
    if d2 <= 0.0 {
        return (b.x + r, b.y);
    }
    let ra = (a.r + r).powi(2);
    let rb = (b.r + r).powi(2);
    if rb > ra {
        let x = (d2 + ra - rb) / (2.0 * d2);
        let y = (ra / d2 - x * x).max(0.0).sqrt();
        (a.x - x * dx - y * dy, a.y - x * dy + y * dx)
    } else {
        let x = (d2 + rb - ra) / (2.0 * d2);
        let y = (rb / d2 - x * x).max(0.0).sqrt();
        (b.x + x * dx - y * dy, b.y + x * dy + y * dx)
    }
}

/// Squared distance to the origin of the weighted midpoint of `a` and `b`
fn chain_score(a: &PackedCircle, b: &PackedCircle) -> f64 {
    let ab = a.r + b.r;
    if ab <= 0.0 {
        return a.x * a.x + a.y * a.y;
    }
    let x = (a.x * b.r + b.x * a.r) / ab;
    let y = (a.y * b.r + b.y * a.r) / ab;
    x * x + y * y
}

/// Place `circles` in slice order around the origin, mutually tangent or apart.
fn pack_front_chain(circles: &mut [PackedCircle]) {
    let n = circles.len();
    if n == 0 {
        return;
    }
    circles[0].x = 0.0;
    circles[0].y = 0.0;
    if n == 1 {
        return;
    }
    circles[0].x = -circles[1].r;
    circles[1].x = circles[0].r;
    circles[1].y = 0.0;
    if n == 2 {
        return;
    }
    let (x, y) = place(&circles[1], &circles[0], circles[2].r);
    circles[2].x = x;
    circles[2].y = y;

    // Chain links by circle index: a -> b -> c -> a
    let mut next = vec![0usize; n];
    let mut prev = vec![0usize; n];
    next[0] = 1;
    next[1] = 2;
    next[2] = 0;
    prev[0] = 2;
    prev[1] = 0;
    prev[2] = 1;
    let (mut a, mut b) = (0usize, 1usize);

    let mut c = 3;
    'placing: while c < n {
        let (x, y) = place(&circles[a], &circles[b], circles[c].r);
        circles[c].x = x;
        circles[c].y = y;

        // Walk the chain outward from a and b, nearest side first
        let mut j = next[b];
        let mut k = prev[a];
        let mut sj = circles[b].r;
        let mut sk = circles[a].r;
        loop {
            if sj <= sk {
                if intersects(&circles[j], &circles[c]) {
                    b = j;
                    next[a] = b;
                    prev[b] = a;
                    continue 'placing;
                }
                sj += circles[j].r;
                j = next[j];
            } else {
                if intersects(&circles[k], &circles[c]) {
                    a = k;
                    next[a] = b;
                    prev[b] = a;
                    continue 'placing;
                }
                sk += circles[k].r;
                k = prev[k];
            }
            if j == next[k] {
                break;
            }
        }

        // Splice c between a and b, then move to the chain pair nearest the origin
        prev[c] = a;
        next[c] = b;
        next[a] = c;
        prev[b] = c;

        let mut best = chain_score(&circles[a], &circles[next[a]]);
        let mut node = next[c];
        while node != c {
            let score = chain_score(&circles[node], &circles[next[node]]);
            if score < best {
                a = node;
                best = score;
            }
            node = next[node];
        }
        b = next[a];
        c += 1;
    }
}

/// Pack circles of the given radii around the origin, `gap` apart.
/// Output is in input order.
pub fn pack(radii: &[f64], gap: f64) -> Vec<PackedCircle> {
    let half_gap = gap.max(0.0) / 2.0;
    let mut order: Vec<usize> = (0..radii.len()).collect();
    order.sort_by(|&a, &b| radii[b].total_cmp(&radii[a]));

    let mut placed: Vec<PackedCircle> = order
        .iter()
        .map(|&index| PackedCircle {
            x: 0.0,
            y: 0.0,
            r: radii[index].max(0.0) + half_gap,
        })
        .collect();
    pack_front_chain(&mut placed);

    let mut slots = vec![PackedCircle { x: 0.0, y: 0.0, r: 0.0 }; radii.len()];
    for (circle, &index) in placed.iter().zip(&order) {
        slots[index] = PackedCircle {
            r: radii[index].max(0.0),
            ..*circle
        };
    }
    slots
}

/// Scale and translate packed circles to fit inside the box at `(left, top)`
/// of the given size, centered. Radii scale with the positions.
pub fn fit(circles: &[PackedCircle], left: f64, top: f64, width: f64, height: f64) -> Vec<PackedCircle> {
    if circles.is_empty() {
        return Vec::new();
    }
    let min_x = circles.iter().map(|c| c.x - c.r).fold(f64::INFINITY, f64::min);
    let max_x = circles.iter().map(|c| c.x + c.r).fold(f64::NEG_INFINITY, f64::max);
    let min_y = circles.iter().map(|c| c.y - c.r).fold(f64::INFINITY, f64::min);
    let max_y = circles.iter().map(|c| c.y + c.r).fold(f64::NEG_INFINITY, f64::max);

    let span_x = (max_x - min_x).max(EPSILON);
    let span_y = (max_y - min_y).max(EPSILON);
    let scale = (width / span_x).min(height / span_y);

    let offset_x = left + (width - span_x * scale) / 2.0;
    let offset_y = top + (height - span_y * scale) / 2.0;

    circles
        .iter()
        .map(|c| PackedCircle {
            x: offset_x + (c.x - min_x) * scale,
            y: offset_y + (c.y - min_y) * scale,
            r: c.r * scale,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn assert_apart(circles: &[PackedCircle], gap: f64) {
        for (i, a) in circles.iter().enumerate() {
            for b in &circles[i + 1..] {
                let d = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                assert!(d + 1e-3 >= a.r + b.r + gap, "{:?} overlaps {:?}", a, b);
            }
        }
    }

    fn assert_no_overlap(circles: &[PackedCircle]) {
        assert_apart(circles, 0.0);
    }

    #[test]
    fn test_pack_keeps_input_order_and_radii() {
        let radii = [3.0, 9.0, 5.0];
        let circles = pack(&radii, 1.0);
        assert_eq!(circles.len(), 3);
        for (c, r) in circles.iter().zip(radii) {
            assert_eq!(c.r, r);
        }
        // The two largest circles sit side by side on the x axis, one gap apart
        assert_eq!(circles[1].y, 0.0);
        assert_eq!(circles[2].y, 0.0);
        assert!((circles[2].x - circles[1].x - 15.0).abs() < 1e-9);
        assert_apart(&circles, 1.0);
    }

    #[test]
    fn test_pack_has_no_overlaps() {
        let radii: Vec<f64> = (0..40).map(|i| 4.0 + (i % 7) as f64 * 1.5).collect();
        let circles = pack(&radii, 2.0);
        assert_apart(&circles, 2.0);
    }

    #[test]
    fn test_pack_is_compact() {
        // Equal circles should form a roughly round cluster, not a line
        let circles = pack(&[1.0; 100], 0.0);
        let extent = circles
            .iter()
            .map(|c| (c.x * c.x + c.y * c.y).sqrt() + c.r)
            .fold(0.0, f64::max);
        assert!(extent < 20.0, "extent {}", extent);
    }

    #[test]
    fn test_pack_thousands_of_circles_quickly() {
        let radii: Vec<f64> = (0..1500).map(|i| (50.0 + (i * 37 % 50) as f64).sqrt()).collect();
        let started = Instant::now();
        let circles = pack(&radii, 1.0);
        let elapsed = started.elapsed();

        assert!(elapsed < Duration::from_secs(2), "packing took {:?}", elapsed);
        assert_eq!(circles.len(), radii.len());
        assert_apart(&circles, 1.0);
    }

    #[test]
    fn test_fit_stays_inside_box() {
        let radii: Vec<f64> = (1..=25).map(|i| (i as f64).sqrt()).collect();
        let circles = fit(&pack(&radii, 0.5), 0.0, 30.0, 1200.0, 1170.0);
        assert_no_overlap(&circles);
        for c in &circles {
            assert!(c.x - c.r >= -1e-6 && c.x + c.r <= 1200.0 + 1e-6);
            assert!(c.y - c.r >= 30.0 - 1e-6 && c.y + c.r <= 1200.0 + 1e-6);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(pack(&[], 1.0).is_empty());
        assert!(fit(&[], 0.0, 0.0, 100.0, 100.0).is_empty());
    }
}
