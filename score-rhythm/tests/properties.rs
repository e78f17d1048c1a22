//! Invariants of the rhythm arithmetic, checked on random values.

use proptest::prelude::*;

use score_rhythm::{
    lilypond_render::render_as_notated_token,
    primitives::{
        gcd, DottedDuration, DurationKind, ExactFraction, Moment, PositionInMeasure,
        WholeNotes,
    },
    InputLocation,
};

fn exact_fraction() -> impl Strategy<Value = ExactFraction> {
    (-10_000_i64..10_000, 1_i64..10_000).prop_map(|(num, den)| ExactFraction::new(num, den))
}

fn non_zero_fraction() -> impl Strategy<Value = ExactFraction> {
    exact_fraction().prop_filter("non zero", |f| !f.is_zero())
}

fn moment() -> impl Strategy<Value = Moment> {
    (exact_fraction(), exact_fraction()).prop_map(|(position, offset)| {
        Moment::new(PositionInMeasure::from(position), WholeNotes::from(offset))
    })
}

proptest! {
    #[test]
    fn always_normalized(num in -1_000_000_i64..1_000_000, den in 1_i64..1_000_000) {
        let f = ExactFraction::new(num, den);
        prop_assert!(f.denominator() > 0);
        prop_assert_eq!(gcd(f.numerator(), f.denominator()), 1);
        if num == 0 {
            prop_assert_eq!(f.denominator(), 1);
        }
        prop_assert_eq!(
            f.numerator() as i128 * den as i128,
            num as i128 * f.denominator() as i128
        );
    }

    #[test]
    fn exactly_one_ordering(a in exact_fraction(), b in exact_fraction()) {
        let outcomes = [a < b, a == b, a > b];
        prop_assert_eq!(outcomes.iter().filter(|x| **x).count(), 1);
        prop_assert_eq!(a >= b, !(a < b));
        prop_assert_eq!(a <= b, !(a > b));
    }

    #[test]
    fn string_round_trip(a in exact_fraction()) {
        let parsed: ExactFraction = a.to_string().parse().unwrap();
        prop_assert_eq!(parsed, a);
        prop_assert_eq!(parsed.as_fraction_string(), a.to_string());
    }

    #[test]
    fn add_then_subtract(a in exact_fraction(), b in exact_fraction()) {
        prop_assert_eq!(a + b - b, a);
        prop_assert_eq!(a - b, -(b - a));
    }

    #[test]
    fn multiply_then_divide(a in exact_fraction(), b in non_zero_fraction()) {
        prop_assert_eq!(a * b / b, a);
        prop_assert_eq!(b * b.inverse(), ExactFraction::ONE);
    }

    #[test]
    fn rounds_half_up(a in exact_fraction()) {
        let rounded = a.to_int() as f64;
        let value = a.to_f64();
        prop_assert!(rounded - 0.5 <= value && value < rounded + 0.5);
    }

    #[test]
    fn moments_are_totally_ordered(a in moment(), b in moment()) {
        let outcomes = [a < b, a == b, a > b];
        prop_assert_eq!(outcomes.iter().filter(|x| **x).count(), 1);
        prop_assert_eq!(a >= b, !(a < b));
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn positions_and_durations(start in exact_fraction(), length in exact_fraction()) {
        let start = PositionInMeasure::from(start);
        let length = WholeNotes::from(length);
        prop_assert_eq!((start + length) - start, length);
        prop_assert_eq!(start + length - length, start);
    }

    #[test]
    fn positive_durations_render(num in 1_i64..4096, den in 1_i64..4096) {
        let rendered =
            render_as_notated_token(&WholeNotes::new(num, den), &InputLocation::unknown());
        prop_assert!(rendered.is_ok());
        let rendered = rendered.unwrap();
        prop_assert_eq!(rendered.token.matches('.').count() as u32, rendered.dots);
    }

    #[test]
    fn dotted_durations_stay_below_double(index in 0_usize..14, dots in 0_u32..10) {
        let kind = DurationKind::ALL[index];
        let duration = DottedDuration::new(kind, dots);
        let expanded = duration.whole_notes();
        prop_assert!(expanded >= kind.whole_notes());
        prop_assert!(expanded < kind.whole_notes() * 2);
    }
}
