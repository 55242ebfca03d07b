//! Тесты сравнения рук.
//!
//! Здесь проверяем "кто сильнее":
//! - порядок категорий;
//! - кикеры внутри категории;
//! - wheel как слабейший стрит;
//! - рефлексивность / антисимметричность / транзитивность.

use poker_hand_strength::domain::card::Rank;
use poker_hand_strength::domain::{Deck, Hand};
use poker_hand_strength::eval::{
    classify, compare, compare_hands, Classification, HandCategory, Verdict,
};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn class(s: &str) -> Classification {
    let h: Hand = s.parse().expect("valid hand string");
    classify(&h)
}

#[test]
fn three_of_a_kind_beats_two_pair() {
    let two_pair = class("Ah Ad Kc Ks 9h");
    let trips = class("Ah Ad Ac Ks Qh");

    assert_eq!(two_pair.category(), HandCategory::TwoPair);
    assert_eq!(two_pair.kickers(), &[Rank::Ace, Rank::King, Rank::Nine]);
    assert_eq!(trips.category(), HandCategory::ThreeOfAKind);
    assert_eq!(trips.kickers(), &[Rank::Ace, Rank::King, Rank::Queen]);

    assert_eq!(compare(&two_pair, &trips), Verdict::SecondWins);
    assert_eq!(compare(&trips, &two_pair), Verdict::FirstWins);
}

#[test]
fn king_high_straight_flush_beats_wheel_straight_flush() {
    let king_high = class("9h Th Jh Qh Kh");
    let wheel = class("As 2s 3s 4s 5s");

    assert_eq!(king_high.category(), HandCategory::StraightFlush);
    assert_eq!(wheel.category(), HandCategory::StraightFlush);
    assert_eq!(compare(&king_high, &wheel), Verdict::FirstWins);
}

#[test]
fn wheel_is_the_weakest_straight() {
    let wheel = class("Ah 2d 3c 4s 5h");
    let six_high = class("2c 3d 4h 5s 6c");
    let broadway = class("Th Jd Qh Kc As");

    assert_eq!(compare(&six_high, &wheel), Verdict::FirstWins);
    assert_eq!(compare(&wheel, &broadway), Verdict::SecondWins);
    assert_eq!(compare(&six_high, &broadway), Verdict::SecondWins);
}

#[test]
fn wheel_straight_still_beats_trips() {
    assert_eq!(
        compare(&class("Ah 2d 3c 4s 5h"), &class("Ac Ad As Ks Qh")),
        Verdict::FirstWins
    );
}

#[test]
fn category_order_dominates_kickers() {
    // Слабейшее каре против сильнейшего фулл-хауса.
    let quads = class("2h 2d 2c 2s 3h");
    let full_house = class("Ah Ad Ac Ks Kh");
    assert_eq!(compare(&quads, &full_house), Verdict::FirstWins);

    // Флеш сильнее стрита, даже с младшими картами.
    let flush = class("2h 4h 6h 8h 9h");
    let straight = class("Th Jd Qh Kc As");
    assert_eq!(compare(&flush, &straight), Verdict::FirstWins);
}

#[test]
fn full_house_compares_trips_before_pair() {
    // 333-22 сильнее 222-KK, хотя у второго старшая карта король.
    let threes = class("3h 3d 3c 2s 2h");
    let twos = class("2c 2d 2h Ks Kh");
    assert_eq!(compare(&threes, &twos), Verdict::FirstWins);

    // При одинаковом сете решает пара.
    let queens_full_of_fives = class("Qh Qd Qc 5s 5h");
    let queens_full_of_fours = class("Qh Qs Qc 4s 4h");
    assert_eq!(
        compare(&queens_full_of_fives, &queens_full_of_fours),
        Verdict::FirstWins
    );
}

#[test]
fn pair_kicker_decides() {
    let a = class("Ah Ad Kc 7s 3h");
    let b = class("As Ac Qc Js Th");
    assert_eq!(compare(&a, &b), Verdict::FirstWins);

    // Старшая пара важнее кикеров.
    let kings = class("Kh Kd Ac Qs Jh");
    assert_eq!(compare(&kings, &b), Verdict::SecondWins);
}

#[test]
fn two_pair_compares_high_then_low_then_kicker() {
    let aces_and_twos = class("Ah Ad 2c 2s 3h");
    let kings_and_queens = class("Kh Kd Qc Qs Ah");
    assert_eq!(compare(&aces_and_twos, &kings_and_queens), Verdict::FirstWins);

    let kicker_nine = class("Ah Ad Kc Ks 9h");
    let kicker_eight = class("As Ac Kd Kh 8h");
    assert_eq!(compare(&kicker_nine, &kicker_eight), Verdict::FirstWins);
}

#[test]
fn flush_compares_down_to_fifth_card() {
    let a = class("Ah Jh 9h 6h 4h");
    let b = class("As Js 9s 6s 3s");
    assert_eq!(a.category(), HandCategory::Flush);
    assert_eq!(b.category(), HandCategory::Flush);
    assert_eq!(compare(&a, &b), Verdict::FirstWins);
    assert_eq!(compare(&b, &a), Verdict::SecondWins);
}

#[test]
fn three_of_a_kind_compares_trips_then_kickers() {
    // Сет решает раньше кикеров.
    let nines = class("9h 9d 9c 3s 2h");
    let eights = class("8h 8d 8c As Kh");
    assert_eq!(compare(&nines, &eights), Verdict::FirstWins);

    // При одинаковом сете — кикеры по убыванию.
    let queen_kicker = class("7h 7d 7c Qs 2h");
    let jack_kicker = class("7h 7s 7c Js Th");
    assert_eq!(compare(&queen_kicker, &jack_kicker), Verdict::FirstWins);

    let second_kicker = class("7h 7d 7c Qs 5h");
    assert_eq!(compare(&queen_kicker, &second_kicker), Verdict::SecondWins);
}

#[test]
fn four_of_a_kind_compares_quads_then_kicker() {
    let fives = class("5h 5d 5c 5s 2h");
    let fours = class("4h 4d 4c 4s Ah");
    assert_eq!(compare(&fives, &fours), Verdict::FirstWins);

    let ace_kicker = class("Jh Jd Jc Js Ah");
    let king_kicker = class("Jh Jd Jc Js Kh");
    assert_eq!(ace_kicker.kickers(), &[Rank::Jack, Rank::Ace]);
    assert_eq!(compare(&ace_kicker, &king_kicker), Verdict::FirstWins);
}

#[test]
fn suits_do_not_matter() {
    assert_eq!(
        compare(&class("Ah Kd Qc Js 9h"), &class("As Kc Qd Jh 9s")),
        Verdict::Equal
    );
    assert_eq!(
        compare(&class("Th Jh Qh Kh Ah"), &class("Ts Js Qs Ks As")),
        Verdict::Equal
    );
}

#[test]
fn compare_hands_classifies_both() {
    let a: Hand = "Ah Ad Kc Ks 9h".parse().unwrap();
    let b: Hand = "Ah Ad Ac Ks Qh".parse().unwrap();
    assert_eq!(compare_hands(&a, &b), Verdict::SecondWins);
    assert_eq!(compare_hands(&b, &a), Verdict::FirstWins);
}

#[test]
fn ord_matches_compare() {
    let mut hands = vec![
        class("Ah 2d 3c 4s 5h"),
        class("Th Jh Qh Kh Ah"),
        class("2h 3d 5c 7s 9h"),
        class("2h 2d 2c 2s 3h"),
        class("2c 3d 4h 5s 6c"),
    ];
    hands.sort();
    let categories: Vec<_> = hands.iter().map(|c| c.category()).collect();
    assert_eq!(
        categories,
        vec![
            HandCategory::HighCard,
            HandCategory::Straight,
            HandCategory::Straight,
            HandCategory::FourOfAKind,
            HandCategory::RoyalFlush,
        ]
    );
    // Wheel раньше six-high.
    assert_eq!(hands[1].kickers()[0], Rank::Ace);
    assert_eq!(hands[2].kickers()[0], Rank::Six);
}

#[test]
fn comparator_is_a_total_preorder() {
    let mut rng = StdRng::seed_from_u64(2024);
    let classes: Vec<Classification> = (0..60)
        .map(|_| {
            let mut deck = Deck::standard_52();
            deck.shuffle_with(&mut rng);
            classify(&deck.deal_hand())
        })
        .collect();

    for a in &classes {
        assert_eq!(compare(a, a), Verdict::Equal);
        for b in &classes {
            let ab = compare(a, b);
            assert_eq!(compare(b, a), ab.reversed(), "{a} vs {b}");
            for c in &classes {
                if ab != Verdict::SecondWins && compare(b, c) != Verdict::SecondWins {
                    assert_ne!(compare(a, c), Verdict::SecondWins, "{a} >= {b} >= {c}");
                }
            }
        }
    }
}
