use super::cents::OCTAVE_CENTS;
/// A labelled position on the value axis.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    pub position: f64,
    pub label: String,
}
/// Scale degrees of one octave as (name, cents above the tonic).
///
/// Both ends are the tonic; the 1200 entry is the upper Sa.
pub const SWARA_DEGREES: [(&str, f64); 11] = [
    ("S", 0.0),
    ("R", 200.0),
    ("g", 300.0),
    ("G", 400.0),
    ("m", 500.0),
    ("P", 700.0),
    ("d", 800.0),
    ("D", 900.0),
    ("n", 1000.0),
    ("N", 1100.0),
    ("S", 1200.0),
];
/// Extra range, in cents, searched for candidates beyond each bound.
const SWARA_MARGIN_CENTS: f64 = 50.0;
/// Axes spanning more octaves than this get no swara ticks.
const MAX_SWARA_OCTAVES: f64 = 64.0;
/// Furthest octave from the tonic that still gets swara ticks. Any real
/// `f64` frequency ratio stays well inside it.
const MAX_SWARA_OCTAVE_INDEX: f64 = 4096.0;
/// `count + 1` evenly spaced values from `min` to `max` inclusive.
///
/// A degenerate domain (`min == max`), a non-finite bound, or `count == 0`
/// gives nothing; widen the domain first (see `ValueRange::padded`).
pub fn numeric_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || min == max || count == 0 {
        return Vec::new();
    }
    let step = (max - min) / count as f64;
    (0..=count)
        .map(|i| if i == count { max } else { min + step * i as f64 })
        .collect()
}
/// Formats numeric tick values with a fixed number of decimals.
pub fn numeric_labels(values: &[f64], decimals: usize) -> Vec<TickLabel> {
    values
        .iter()
        .map(|&position| TickLabel {
            position,
            label: format!("{position:.decimals$}"),
        })
        .collect()
}
/// Named swara ticks for a cents axis drawn `pixel_height` pixels tall.
///
/// Candidates come from [`SWARA_DEGREES`] repeated every octave across
/// `[min_cents - 50, max_cents + 50]`. They are then thinned so that kept
/// labels sit at least `min_pixel_spacing` pixels apart, always keeping the
/// lowest one.
pub fn swara_ticks(
    min_cents: f64,
    max_cents: f64,
    min_pixel_spacing: f64,
    pixel_height: f64,
) -> Vec<TickLabel> {
    if !min_cents.is_finite() || !max_cents.is_finite() || min_cents > max_cents {
        return Vec::new();
    }
    let lo = min_cents - SWARA_MARGIN_CENTS;
    let hi = max_cents + SWARA_MARGIN_CENTS;
    if (hi - lo) / OCTAVE_CENTS > MAX_SWARA_OCTAVES {
        log::debug!("cents axis {min_cents}..{max_cents} too wide for swara ticks");
        return Vec::new();
    }
    if lo.abs().max(hi.abs()) / OCTAVE_CENTS > MAX_SWARA_OCTAVE_INDEX {
        log::debug!("cents axis {min_cents}..{max_cents} too far from the tonic for swara ticks");
        return Vec::new();
    }
    let candidates = swara_candidates(lo, hi);
    let span = max_cents - min_cents;
    // A flat axis puts every candidate on the bottom row.
    let to_pixel = |cents: f64| {
        let ratio = if span == 0.0 { 0.0 } else { (cents - min_cents) / span };
        pixel_height - ratio * pixel_height
    };
    let mut kept: Vec<TickLabel> = Vec::with_capacity(candidates.len());
    let mut last_y: Option<f64> = None;
    for tick in candidates {
        let y = to_pixel(tick.position);
        let keep = match last_y {
            None => true,
            Some(prev) => (y - prev).abs() >= min_pixel_spacing,
        };
        if keep {
            last_y = Some(y);
            kept.push(tick);
        }
    }
    kept
}
fn swara_candidates(lo: f64, hi: f64) -> Vec<TickLabel> {
    let first_octave = (lo / OCTAVE_CENTS).floor() as i64 - 1;
    let last_octave = (hi / OCTAVE_CENTS).ceil() as i64;
    let mut out: Vec<TickLabel> = Vec::new();
    for k in first_octave..=last_octave {
        for (name, offset) in SWARA_DEGREES {
            let cents = k as f64 * OCTAVE_CENTS + offset;
            if cents < lo || cents > hi {
                continue;
            }
            // upper Sa of octave k is the lower Sa of octave k + 1
            if out.last().is_some_and(|prev| prev.position == cents) {
                continue;
            }
            let octave = k + (offset / OCTAVE_CENTS).floor() as i64;
            out.push(TickLabel {
                position: cents,
                label: swara_label(name, octave),
            });
        }
    }
    out
}
fn swara_label(name: &str, octave: i64) -> String {
    let marker = if octave >= 0 { "'" } else { "." };
    let mut label = String::from(name);
    for _ in 0..octave.unsigned_abs() {
        label.push_str(marker);
    }
    label
}
#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    fn labels(ticks: &[TickLabel]) -> Vec<&str> {
        ticks.iter().map(|t| t.label.as_str()).collect()
    }
    #[test]
    fn numeric_ticks_are_evenly_spaced() {
        assert_eq!(
            numeric_ticks(0.0, 100.0, 5),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );
        assert_eq!(numeric_ticks(10.0, -10.0, 2), vec![10.0, 0.0, -10.0]);
    }
    #[test]
    fn numeric_ticks_reject_degenerate_domains() {
        assert!(numeric_ticks(5.0, 5.0, 5).is_empty());
        assert!(numeric_ticks(0.0, f64::NAN, 5).is_empty());
        assert!(numeric_ticks(0.0, 1.0, 0).is_empty());
    }
    #[test]
    fn numeric_labels_use_fixed_precision() {
        let ticks = numeric_labels(&[0.0, 12.345], 1);
        assert_eq!(labels(&ticks), vec!["0.0", "12.3"]);
        assert_eq!(ticks[1].position, 12.345);
    }
    #[test]
    fn one_octave_without_thinning() {
        let ticks = swara_ticks(0.0, 1200.0, 0.0, 1200.0);
        assert_eq!(
            labels(&ticks),
            vec!["S", "R", "g", "G", "m", "P", "d", "D", "n", "N", "S'"]
        );
        let positions: Vec<f64> = ticks.iter().map(|t| t.position).collect();
        assert_eq!(positions[5], 700.0);
        assert_eq!(*positions.last().unwrap(), 1200.0);
    }
    #[test]
    fn octave_markers_above_and_below() {
        let ticks = swara_ticks(-1250.0, 2450.0, 0.0, 1000.0);
        let names = labels(&ticks);
        assert!(names.contains(&"N.."));
        assert!(names.contains(&"S."));
        assert!(names.contains(&"P'"));
        assert!(names.contains(&"S''"));
        // no duplicated Sa at octave boundaries
        let sa_count = names.iter().filter(|n| n.starts_with('S')).count();
        assert_eq!(sa_count, 4);
    }
    #[test]
    fn candidates_include_the_margin() {
        let ticks = swara_ticks(240.0, 460.0, 0.0, 100.0);
        // 200 lies within the 50 cent margin below, 500 within the one above
        assert_eq!(labels(&ticks), vec!["R", "g", "G", "m"]);
    }
    #[test]
    fn thinning_drops_crowded_labels() {
        // 1200 cents over 120 px: 100 cents = 10 px
        let ticks = swara_ticks(0.0, 1200.0, 15.0, 120.0);
        assert_eq!(labels(&ticks), vec!["S", "R", "G", "P", "D", "N"]);
    }
    #[test]
    fn flat_axis_keeps_only_the_first_candidate() {
        let ticks = swara_ticks(450.0, 450.0, 1.0, 200.0);
        assert_eq!(labels(&ticks), vec!["G"]);
        let ticks = swara_ticks(450.0, 450.0, 0.0, 200.0);
        assert_eq!(labels(&ticks), vec!["G", "m"]);
    }
    #[test]
    fn axes_far_from_the_tonic_get_no_swara_ticks() {
        assert!(swara_ticks(1e15, 1e15, 18.0, 260.0).is_empty());
        assert!(swara_ticks(-1e15, -1e15 + 1200.0, 18.0, 260.0).is_empty());
        let edge = MAX_SWARA_OCTAVE_INDEX * OCTAVE_CENTS - 2400.0;
        let ticks = swara_ticks(edge, edge + 1200.0, 0.0, 260.0);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| t.label.len() <= 1 + MAX_SWARA_OCTAVE_INDEX as usize));
    }
    #[test]
    fn kept_ticks_respect_min_spacing() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let min = rng.gen_range(-3000.0..3000.0);
            let max = min + rng.gen_range(200.0..5000.0);
            let spacing = rng.gen_range(0.0..40.0);
            let height = rng.gen_range(50.0..800.0);
            let ticks = swara_ticks(min, max, spacing, height);
            assert!(!ticks.is_empty());
            for pair in ticks.windows(2) {
                assert!(pair[0].position < pair[1].position);
                let dy = (pair[1].position - pair[0].position) / (max - min) * height;
                assert!(dy + 1e-9 >= spacing);
            }
        }
    }
}
