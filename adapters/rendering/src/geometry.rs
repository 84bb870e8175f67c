//! Path helpers shared by the attack drawers and by raster backends.

use glam::Vec2;

/// Unit vector perpendicular to the segment `from -> to`.
///
/// Returns [`Vec2::ZERO`] when the segment has no length or is not finite, which
/// turns every perpendicular displacement into a no-op.
#[must_use]
pub fn perpendicular(from: Vec2, to: Vec2) -> Vec2 {
    let direction = to - from;
    Vec2::new(-direction.y, direction.x).normalize_or_zero()
}

/// Builds a polyline from `from` to `to` with `segments` displaced interior points.
///
/// Interior point `index` sits at fraction `t = (index + 1) / (segments + 1)` of
/// the straight line and is pushed sideways along the unit perpendicular by
/// `displacement(index, t)`. The result always holds `segments + 2` points.
pub fn build_displaced_polyline<F>(
    from: Vec2,
    to: Vec2,
    segments: usize,
    mut displacement: F,
) -> Vec<Vec2>
where
    F: FnMut(usize, f32) -> f32,
{
    let normal = perpendicular(from, to);
    let mut points = Vec::with_capacity(segments + 2);
    points.push(from);

    let divisions = (segments + 1) as f32;
    for index in 0..segments {
        let t = (index + 1) as f32 / divisions;
        let base = from.lerp(to, t);
        // Consume the displacement even when it is discarded so jitter streams stay aligned.
        let offset = displacement(index, t);
        if normal == Vec2::ZERO || !offset.is_finite() {
            points.push(base);
        } else {
            points.push(base + normal * offset);
        }
    }

    points.push(to);
    points
}

/// Returns `points` shifted sideways by `offset` along the perpendicular of `from -> to`.
#[must_use]
pub fn offset_parallel(from: Vec2, to: Vec2, offset: f32) -> (Vec2, Vec2) {
    let shift = perpendicular(from, to) * offset;
    (from + shift, to + shift)
}

/// Samples `count` points on a circle, closing the loop by repeating the first point.
#[must_use]
pub fn circle_points(center: Vec2, radius: f32, count: usize) -> Vec<Vec2> {
    arc_points(center, radius, 0.0, std::f32::consts::TAU, count)
}

/// Samples `count + 1` evenly spaced points on an arc from `start_angle` to `end_angle`.
#[must_use]
pub fn arc_points(
    center: Vec2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    count: usize,
) -> Vec<Vec2> {
    let count = count.max(1);
    let sweep = end_angle - start_angle;
    (0..=count)
        .map(|step| {
            let angle = start_angle + sweep * step as f32 / count as f32;
            center + Vec2::from_angle(angle) * radius
        })
        .collect()
}

/// Dash entries shorter than this turn the whole pattern solid.
const MIN_DASH_LENGTH: f32 = 1e-3;

/// Segments needing more dash pieces than this are drawn solid.
const MAX_DASH_PIECES: f32 = 4_096.0;

/// Splits a polyline into the visible segments of a dash pattern.
///
/// The pattern alternates visible and hidden lengths starting with a visible
/// dash; an odd-length pattern is repeated to make it even. Empty patterns,
/// patterns with negative, non-finite or all-zero entries, and patterns whose
/// shortest positive entry is below 0.001 draw solid lines. A segment that
/// would split into more than 4096 pieces is drawn solid without advancing
/// the pattern.
#[must_use]
pub fn dash_segments(points: &[Vec2], pattern: &[f32]) -> Vec<(Vec2, Vec2)> {
    let shortest = pattern
        .iter()
        .copied()
        .filter(|len| *len > 0.0)
        .fold(f32::INFINITY, f32::min);
    let solid = pattern.iter().any(|len| !len.is_finite() || *len < 0.0)
        || !shortest.is_finite()
        || shortest < MIN_DASH_LENGTH;
    if solid {
        return points.windows(2).map(|pair| (pair[0], pair[1])).collect();
    }

    let cycle: Vec<f32> = if pattern.len() % 2 == 1 {
        pattern.iter().chain(pattern.iter()).copied().collect()
    } else {
        pattern.to_vec()
    };

    let mut segments = Vec::new();
    let mut dash_index = 0;
    let mut remaining = cycle[0];

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let length = start.distance(end);
        if !length.is_finite() || length <= f32::EPSILON {
            continue;
        }
        if length / shortest > MAX_DASH_PIECES {
            segments.push((start, end));
            continue;
        }
        let direction = (end - start) / length;

        let mut travelled = 0.0;
        loop {
            let left = length - travelled;
            let visible = dash_index % 2 == 0;
            if remaining >= left {
                if visible {
                    segments.push((start + direction * travelled, end));
                }
                remaining -= left;
                break;
            }
            if visible && remaining > 0.0 {
                let from = start + direction * travelled;
                segments.push((from, from + direction * remaining));
            }
            travelled += remaining;
            dash_index = (dash_index + 1) % cycle.len();
            remaining = cycle[dash_index];
        }
    }

    segments
}
