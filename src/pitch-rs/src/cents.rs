/// Cents in one octave.
pub const OCTAVE_CENTS: f64 = 1200.0;
/// Interval from `tonic_hz` to `hz` in cents.
///
/// Cents are a logarithmic unit of pitch where:
/// - 100 cents = 1 semitone
/// - 1200 cents = 1 octave
/// - positive values lie above the tonic, negative values below it
///
/// # Returns
/// * `None` when either frequency is `<= 0`, NaN or infinite, since the
///   logarithm is undefined there
pub fn to_cents(hz: f64, tonic_hz: f64) -> Option<f64> {
    if !hz.is_finite() || !tonic_hz.is_finite() || hz <= 0.0 || tonic_hz <= 0.0 {
        return None;
    }
    let cents = OCTAVE_CENTS * (hz / tonic_hz).log2();
    cents.is_finite().then_some(cents)
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn unison_and_octave() {
        assert_eq!(to_cents(440.0, 440.0), Some(0.0));
        let octave = to_cents(880.0, 440.0).unwrap();
        assert!((octave - 1200.0).abs() < 1e-9);
        let below = to_cents(220.0, 440.0).unwrap();
        assert!((below + 1200.0).abs() < 1e-9);
    }
    #[test]
    fn zero_only_at_the_tonic() {
        for hz in [100.0, 261.63, 439.99, 440.01, 1000.0] {
            let cents = to_cents(hz, 440.0).unwrap();
            assert_eq!(cents == 0.0, hz == 440.0);
        }
    }
    #[test]
    fn fifths() {
        let just = to_cents(261.63 * 1.5, 261.63).unwrap();
        assert!((just - 701.96).abs() < 0.01);
        // equal-tempered G4 over C4
        let tempered = to_cents(392.0, 261.63).unwrap();
        assert!((tempered - 699.99).abs() < 0.01);
    }
    #[test]
    fn undefined_inputs_give_none() {
        assert_eq!(to_cents(0.0, 440.0), None);
        assert_eq!(to_cents(-5.0, 440.0), None);
        assert_eq!(to_cents(440.0, 0.0), None);
        assert_eq!(to_cents(440.0, -1.0), None);
        assert_eq!(to_cents(f64::NAN, 440.0), None);
        assert_eq!(to_cents(440.0, f64::INFINITY), None);
    }
}
