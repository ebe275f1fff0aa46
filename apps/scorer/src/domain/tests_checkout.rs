use crate::domain::checkout::{
    catalogue, finish_multiplier, suggest_checkouts, Dart, Multiplier, CATALOGUE_SIZE,
};
use crate::domain::state::CheckoutMode;

fn first_darts(remaining: u16, mode: CheckoutMode) -> Vec<String> {
    suggest_checkouts(remaining, mode, 1)
        .first()
        .map(|c| c.darts().map(|d| d.to_string()).collect())
        .unwrap_or_default()
}

#[test]
fn catalogue_runs_bull_first_then_descending_segments() {
    let darts = catalogue();
    assert_eq!(darts.len(), CATALOGUE_SIZE);
    assert_eq!(darts[0], Dart::new(Multiplier::Double, 25));
    assert_eq!(darts[1], Dart::new(Multiplier::Single, 25));
    assert_eq!(darts[2], Dart::new(Multiplier::Triple, 20));
    assert_eq!(darts[3], Dart::new(Multiplier::Double, 20));
    assert_eq!(darts[4], Dart::new(Multiplier::Single, 20));
    assert_eq!(darts[61], Dart::new(Multiplier::Single, 1));
}

#[test]
fn darts_render_like_board_calls() {
    assert_eq!(Dart::new(Multiplier::Triple, 20).to_string(), "T20");
    assert_eq!(Dart::new(Multiplier::Single, 25).to_string(), "S25");
    let combos = suggest_checkouts(167, CheckoutMode::Double, 1);
    assert_eq!(combos[0].to_string(), "T20 T19 D25");
}

#[test]
fn mode_fixes_the_final_dart() {
    assert_eq!(finish_multiplier(CheckoutMode::Simple), Multiplier::Single);
    assert_eq!(finish_multiplier(CheckoutMode::Double), Multiplier::Double);
    assert_eq!(finish_multiplier(CheckoutMode::Triple), Multiplier::Triple);
}

#[test]
fn single_dart_finishes_lead_the_list() {
    assert_eq!(first_darts(40, CheckoutMode::Double), ["D20"]);
    assert_eq!(first_darts(50, CheckoutMode::Double), ["D25"]);
    assert_eq!(first_darts(60, CheckoutMode::Triple), ["T20"]);
    assert_eq!(first_darts(3, CheckoutMode::Simple), ["S3"]);
}

#[test]
fn big_fish_is_treble_treble_bull() {
    assert_eq!(first_darts(167, CheckoutMode::Double), ["T20", "T19", "D25"]);
}

#[test]
fn odd_remainder_starts_with_the_single_bull() {
    // 41 has no one-dart double; the catalogue finds S25 D8 first.
    assert_eq!(first_darts(41, CheckoutMode::Double), ["S25", "D8"]);
}

#[test]
fn shorter_suggestions_come_first() {
    let combos = suggest_checkouts(40, CheckoutMode::Double, 6);
    assert!(combos.len() > 1);
    assert_eq!(combos[0].dart_count(), 1);
    for pair in combos.windows(2) {
        assert!(pair[0].dart_count() <= pair[1].dart_count());
    }
}

#[test]
fn every_suggestion_sums_to_the_remainder() {
    for remaining in [2u16, 32, 41, 100, 158, 167] {
        for combo in suggest_checkouts(remaining, CheckoutMode::Double, 8) {
            assert_eq!(combo.total(), remaining, "combo {combo} for {remaining}");
            assert_eq!(combo.finisher.multiplier, Multiplier::Double);
        }
    }
}

#[test]
fn limit_caps_the_list() {
    assert_eq!(suggest_checkouts(100, CheckoutMode::Double, 5).len(), 5);
    assert!(suggest_checkouts(100, CheckoutMode::Double, 0).is_empty());
}

#[test]
fn remainders_outside_the_window_get_nothing() {
    assert!(suggest_checkouts(0, CheckoutMode::Double, 3).is_empty());
    assert!(suggest_checkouts(170, CheckoutMode::Double, 3).is_empty());
    assert!(suggest_checkouts(501, CheckoutMode::Double, 3).is_empty());
    for bogey in [169u16, 168, 166, 165, 163, 162, 159] {
        assert!(
            suggest_checkouts(bogey, CheckoutMode::Double, 3).is_empty(),
            "{bogey} has no double finish"
        );
    }
}

#[test]
fn one_point_double_out_is_impossible() {
    assert!(suggest_checkouts(1, CheckoutMode::Double, 3).is_empty());
    assert_eq!(first_darts(1, CheckoutMode::Simple), ["S1"]);
}

#[test]
fn triple_mode_ends_on_a_treble() {
    let combos = suggest_checkouts(6, CheckoutMode::Triple, 4);
    assert!(!combos.is_empty());
    for combo in &combos {
        assert_eq!(combo.finisher.multiplier, Multiplier::Triple);
    }
    assert_eq!(first_darts(6, CheckoutMode::Triple), ["T2"]);
}
