//! Round winner and scoring tests.

use brisca::{Card, DEFAULT_POINTS, Deck, Player, PointsTable, Suit, Trick, UnmatchedSuitRule};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn winner(cards: &[Card], trump: Suit, turn: usize, leader: usize) -> usize {
    Trick {
        cards,
        trump: Some(trump),
        turn,
        leader,
    }
    .winner(&PointsTable::default(), UnmatchedSuitRule::Positional)
}

#[test]
fn single_trump_wins_regardless_of_points() {
    let cards = [card(Suit::Cups, 1), card(Suit::Coins, 2)];
    assert_eq!(winner(&cards, Suit::Coins, 0, 0), 1);
}

#[test]
fn lowest_seat_trump_wins_among_several() {
    let cards = [
        card(Suit::Cups, 1),
        card(Suit::Coins, 2),
        card(Suit::Coins, 1),
    ];
    assert_eq!(winner(&cards, Suit::Coins, 0, 0), 1);
}

#[test]
fn all_trump_round_is_ranked_by_points() {
    let cards = [card(Suit::Coins, 12), card(Suit::Coins, 3)];
    assert_eq!(winner(&cards, Suit::Coins, 0, 0), 1);

    let cards = [card(Suit::Coins, 7), card(Suit::Coins, 2)];
    assert_eq!(winner(&cards, Suit::Coins, 0, 0), 0);
}

#[test]
fn mixed_suits_follow_the_turn_pointer() {
    let cards = [card(Suit::Cups, 2), card(Suit::Swords, 1)];
    assert_eq!(winner(&cards, Suit::Coins, 0, 0), 0);
    assert_eq!(winner(&cards, Suit::Coins, 1, 1), 1);
}

#[test]
fn lead_suit_rule_ranks_cards_of_the_suit_led() {
    let cards = [
        card(Suit::Cups, 4),
        card(Suit::Swords, 1),
        card(Suit::Cups, 7),
    ];
    let trick = Trick {
        cards: &cards,
        trump: Some(Suit::Coins),
        turn: 0,
        leader: 0,
    };
    let points = PointsTable::default();

    assert_eq!(trick.winner(&points, UnmatchedSuitRule::Positional), 0);
    assert_eq!(trick.winner(&points, UnmatchedSuitRule::LeadSuit), 2);

    let led_by_swords = Trick { leader: 1, turn: 1, ..trick };
    assert_eq!(led_by_swords.winner(&points, UnmatchedSuitRule::LeadSuit), 1);
}

#[test]
fn zero_point_round_uses_raw_rank() {
    let cards = [card(Suit::Clubs, 7), card(Suit::Clubs, 4)];
    assert_eq!(winner(&cards, Suit::Coins, 0, 0), 0);

    let cards = [card(Suit::Clubs, 2), card(Suit::Clubs, 6)];
    assert_eq!(winner(&cards, Suit::Coins, 0, 0), 1);
}

#[test]
fn point_card_beats_higher_raw_rank() {
    let cards = [card(Suit::Clubs, 7), card(Suit::Clubs, 10)];
    assert_eq!(winner(&cards, Suit::Coins, 0, 0), 1);
}

#[test]
fn ties_go_to_the_lowest_seat() {
    let points = PointsTable::empty().with(4, 5).with(6, 5);
    let cards = [card(Suit::Cups, 4), card(Suit::Cups, 6)];
    let trick = Trick {
        cards: &cards,
        trump: Some(Suit::Coins),
        turn: 1,
        leader: 1,
    };
    assert_eq!(trick.winner(&points, UnmatchedSuitRule::Positional), 0);
}

#[test]
fn no_trump_skips_the_trump_rule() {
    let cards = [card(Suit::Coins, 2), card(Suit::Coins, 3)];
    let trick = Trick {
        cards: &cards,
        trump: None,
        turn: 0,
        leader: 0,
    };
    assert_eq!(
        trick.winner(&PointsTable::default(), UnmatchedSuitRule::Positional),
        1
    );
}

#[test]
fn default_points_total_120() {
    let points = PointsTable::default();
    assert_eq!(points.total(&Deck::standard().cards()), 120);
    assert_eq!(points.value(&card(Suit::Cups, 1)), 11);
    assert_eq!(points.value(&card(Suit::Cups, 3)), 10);
    assert_eq!(points.value(&card(Suit::Cups, 7)), 0);
    assert_eq!(DEFAULT_POINTS.len(), 5);
}

#[test]
fn setting_zero_points_removes_entry() {
    let mut points = PointsTable::default();
    points.set(1, 0);
    assert_eq!(points.rank_value(1), 0);
    assert_eq!(points, PointsTable::empty().with(3, 10).with(12, 4).with(11, 3).with(10, 2));
}

#[test]
fn card_validation() {
    assert!(Card::try_new(Suit::Swords, 12).is_ok());
    assert_eq!(
        Card::try_new(Suit::Swords, 8).unwrap_err(),
        brisca::CardError::InvalidRank(8)
    );
    assert!(!card(Suit::Swords, 0).is_valid());
    assert_eq!(card(Suit::Swords, 11).to_string(), "11 of swords");
}

#[test]
fn standard_deck_is_complete_and_seeded_shuffle_is_stable() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), brisca::DECK_SIZE);
    assert_eq!(deck.cards()[0], card(Suit::Coins, 1));

    assert_eq!(Deck::shuffled(3), Deck::shuffled(3));
    assert_ne!(Deck::shuffled(3).cards(), deck.cards());
}

#[test]
fn player_keeps_hand_and_won_pile_apart() {
    let mut player = Player::new();
    player.add_card(card(Suit::Cups, 1));
    player.add_card(card(Suit::Cups, 3));
    assert_eq!(player.len(), 2);

    assert!(player.remove_card(&card(Suit::Cups, 1)));
    assert!(!player.remove_card(&card(Suit::Cups, 1)));
    player.add_won_card(card(Suit::Cups, 1));

    assert_eq!(player.len(), 1);
    assert!(player.has_card(&card(Suit::Cups, 3)));
    assert!(!player.has_card(&card(Suit::Cups, 1)));
    assert_eq!(player.won_cards(), &[card(Suit::Cups, 1)]);
}
