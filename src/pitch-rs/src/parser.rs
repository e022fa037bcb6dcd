use super::series::{Sample, Series};
/// Row counts from a parse pass. Blank lines are counted in neither field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub accepted: usize,
    pub dropped: usize,
}
/// Parses `time value` rows into a time-ordered series.
///
/// Rows are split on runs of spaces, commas and tabs. Only the first two
/// tokens are read; a row with fewer tokens, or whose first two tokens are
/// not finite numbers, is skipped. No valid rows yields an empty series.
pub fn parse(text: &str) -> Series {
    parse_with_stats(text).0
}
/// Same as [`parse`], also reporting how many rows were kept and dropped.
pub fn parse_with_stats(text: &str) -> (Series, ParseStats) {
    let mut stats = ParseStats::default();
    let mut samples = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(line) {
            Some(sample) => {
                stats.accepted += 1;
                samples.push(sample);
            }
            None => stats.dropped += 1,
        }
    }
    if stats.dropped > 0 {
        log::debug!(
            "parsed {} rows, dropped {} malformed rows",
            stats.accepted,
            stats.dropped
        );
    }
    (Series::from_samples(samples), stats)
}
fn parse_row(line: &str) -> Option<Sample> {
    let mut tokens = line
        .split(|c: char| c == ' ' || c == ',' || c == '\t')
        .filter(|token| !token.is_empty());
    let time = parse_finite(tokens.next()?)?;
    let value = parse_finite(tokens.next()?)?;
    Some(Sample { time, value })
}
fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    #[test]
    fn malformed_lines_are_dropped() {
        let (series, stats) = parse_with_stats("abc def\n0.1 200\n\n0.2\n0.3 210");
        assert_eq!(
            series.samples(),
            &[Sample::new(0.1, 200.0), Sample::new(0.3, 210.0)]
        );
        assert_eq!(stats, ParseStats { accepted: 2, dropped: 2 });
    }
    #[test]
    fn accepts_crlf_commas_tabs_and_extra_tokens() {
        let text = "0.0,100\r\n  \r\n0.1\t\t110  extra 9\r\n0.2 , 120,\r\n";
        let series = parse(text);
        let values: Vec<f64> = series.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![100.0, 110.0, 120.0]);
    }
    #[test]
    fn keeps_duplicates_negative_times_and_non_positive_values() {
        let series = parse("0.5 0\n-1 -20\n0.5 300");
        assert_eq!(
            series.samples(),
            &[
                Sample::new(-1.0, -20.0),
                Sample::new(0.5, 0.0),
                Sample::new(0.5, 300.0),
            ]
        );
    }
    #[test]
    fn rejects_non_finite_tokens() {
        let series = parse("NaN 100\n0.1 inf\n0.2 -infinity\n0.3 150");
        assert_eq!(series.samples(), &[Sample::new(0.3, 150.0)]);
    }
    #[test]
    fn zero_and_negative_zero_times_tie() {
        let values: Vec<f64> = parse("0 200\n-0 100").iter().map(|s| s.value).collect();
        assert_eq!(values, vec![200.0, 100.0]);
    }
    #[test]
    fn no_valid_rows_gives_empty_series() {
        assert!(parse("").is_empty());
        assert!(parse("time pitch\n\n   \n").is_empty());
    }
    #[test]
    fn output_is_sorted_and_parse_is_idempotent() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let mut text = String::new();
            for _ in 0..rng.gen_range(0..200) {
                let t: f64 = rng.gen_range(-10.0..10.0);
                let v: f64 = rng.gen_range(-50.0..900.0);
                let sep = [" ", ",", "\t", " ,\t"][rng.gen_range(0..4)];
                text.push_str(&format!("{t}{sep}{v}\n"));
                if rng.gen_bool(0.1) {
                    text.push_str("garbage\n");
                }
            }
            let first = parse(&text);
            for pair in first.windows(2) {
                assert!(pair[0].time <= pair[1].time);
            }
            assert_eq!(first, parse(&text));
        }
    }
}
