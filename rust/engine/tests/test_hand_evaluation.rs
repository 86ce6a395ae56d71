use rangelab_engine::cards::{full_deck, Card, Rank as R, Suit as S};
use rangelab_engine::errors::EngineError;
use rangelab_engine::hand::{compare_hands, evaluate, find_winners, Category};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn detects_royal_flush_as_its_own_category() {
    let cards = [
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
    ];
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::RoyalFlush);
}

#[test]
fn royal_flush_outscores_king_high_straight_flush() {
    let royal = [
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
    ];
    let king_high = [
        c(S::Hearts, R::Nine),
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
    ];
    let a = evaluate(&royal).unwrap();
    let b = evaluate(&king_high).unwrap();
    assert_eq!(b.category, Category::StraightFlush);
    assert!(a.score > b.score);
}

#[test]
fn wheel_is_a_five_high_straight() {
    let cards = [
        c(S::Hearts, R::Ace),
        c(S::Diamonds, R::Two),
        c(S::Clubs, R::Three),
        c(S::Spades, R::Four),
        c(S::Hearts, R::Five),
        c(S::Clubs, R::Nine),
        c(S::Diamonds, R::Jack),
    ];
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::Straight);
    assert_eq!(hs.kickers, vec![R::Five]);

    // A six-high straight must beat the wheel
    let six_high = [
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Four),
        c(S::Spades, R::Five),
        c(S::Hearts, R::Six),
    ];
    let b = evaluate(&six_high).unwrap();
    assert!(b.score > hs.score);
}

#[test]
fn category_ordering_is_correct() {
    // Four of a kind vs full house
    let quads = [
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Clubs, R::King),
    ];
    let full_house = [
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
    ];
    let a = evaluate(&quads).unwrap();
    let b = evaluate(&full_house).unwrap();
    assert_eq!(a.category, Category::FourOfAKind);
    assert_eq!(b.category, Category::FullHouse);
    assert!(compare_hands(&a, &b).is_gt());
}

#[test]
fn flush_beats_trips_regardless_of_kickers() {
    let low_flush = [
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Three),
        c(S::Hearts, R::Five),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Nine),
    ];
    let ace_trips = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Spades, R::King),
        c(S::Clubs, R::Queen),
    ];
    let a = evaluate(&low_flush).unwrap();
    let b = evaluate(&ace_trips).unwrap();
    assert_eq!(a.category, Category::Flush);
    assert_eq!(b.category, Category::ThreeOfAKind);
    assert!(compare_hands(&a, &b).is_gt());
}

#[test]
fn full_house_breaks_ties_on_the_pair() {
    let sevens_full = [
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::King),
        c(S::Spades, R::Seven),
        c(S::Clubs, R::Seven),
    ];
    let eights_full = [
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::King),
        c(S::Spades, R::Eight),
        c(S::Clubs, R::Eight),
    ];
    let a = evaluate(&sevens_full).unwrap();
    let b = evaluate(&eights_full).unwrap();
    assert_eq!(a.category, Category::FullHouse);
    assert_eq!(b.category, Category::FullHouse);
    assert!(b.score > a.score);
    assert_eq!(b.kickers, vec![R::King, R::Eight]);
}

#[test]
fn best_of_seven_picks_the_flush_over_a_made_straight() {
    // Both a straight (2-6, two suits borrowed) and a ten-high heart
    // flush are present; the flush is the stronger category.
    let cards = [
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Four),
        c(S::Hearts, R::Six),
        c(S::Hearts, R::Nine),
        c(S::Hearts, R::Ten),
        c(S::Clubs, R::Three),
        c(S::Diamonds, R::Five),
    ];
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::Flush);
    assert_eq!(hs.kickers, vec![R::Ten, R::Nine, R::Six, R::Four, R::Two]);
}

#[test]
fn best_of_seven_picks_the_flush_over_made_trips() {
    let cards = [
        c(S::Clubs, R::Nine),
        c(S::Clubs, R::Seven),
        c(S::Clubs, R::Five),
        c(S::Clubs, R::Four),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Nine),
    ];
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::Flush);
}

#[test]
fn best_of_seven_finds_the_full_house() {
    let cards = [
        c(S::Clubs, R::Nine),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Clubs, R::King),
        c(S::Spades, R::King),
        c(S::Clubs, R::Four),
        c(S::Clubs, R::Two),
    ];
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::FullHouse);
    assert_eq!(hs.kickers, vec![R::Nine, R::King]);
}

#[test]
fn rejects_wrong_card_counts() {
    let four = [
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Ace),
    ];
    assert_eq!(
        evaluate(&four),
        Err(EngineError::InvalidCardCount { count: 4 })
    );

    let eight: Vec<Card> = full_deck().into_iter().take(8).collect();
    assert_eq!(
        evaluate(&eight),
        Err(EngineError::InvalidCardCount { count: 8 })
    );
}

#[test]
fn identical_kickers_are_an_exact_tie() {
    // Same five ranks, different suits: a genuine split pot
    let first = [
        c(S::Hearts, R::Ace),
        c(S::Diamonds, R::King),
        c(S::Clubs, R::Nine),
        c(S::Spades, R::Seven),
        c(S::Hearts, R::Five),
    ];
    let second = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::King),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Seven),
        c(S::Spades, R::Five),
    ];
    let a = evaluate(&first).unwrap();
    let b = evaluate(&second).unwrap();
    assert!(compare_hands(&a, &b).is_eq());
    assert_eq!(find_winners(&[a, b]), vec![0, 1]);
}

#[test]
fn one_pair_kickers_run_high_to_low() {
    let cards = [
        c(S::Clubs, R::Eight),
        c(S::Diamonds, R::Eight),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Jack),
        c(S::Clubs, R::Four),
    ];
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::OnePair);
    assert_eq!(hs.kickers, vec![R::Eight, R::Ace, R::Jack, R::Four]);
}

#[test]
fn two_pair_kickers_are_high_pair_low_pair_then_side_card() {
    let cards = [
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Three),
        c(S::Spades, R::Three),
        c(S::Clubs, R::Ten),
    ];
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::TwoPair);
    assert_eq!(hs.kickers, vec![R::Queen, R::Three, R::Ten]);
}

#[test]
fn quads_use_the_highest_side_card_from_seven() {
    let cards = [
        c(S::Clubs, R::Nine),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Spades, R::Nine),
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Five),
        c(S::Diamonds, R::Two),
    ];
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::FourOfAKind);
    assert_eq!(hs.kickers, vec![R::Nine, R::Ace]);
}

#[test]
fn find_winners_returns_single_best_index() {
    let quads = [
        c(S::Clubs, R::Nine),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Spades, R::Nine),
        c(S::Clubs, R::Two),
    ];
    let pair = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Four),
    ];
    let a = evaluate(&pair).unwrap();
    let b = evaluate(&quads).unwrap();
    assert_eq!(find_winners(&[a, b]), vec![1]);
}
