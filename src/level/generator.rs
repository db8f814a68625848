//! Level-to-state generation.
//!
//! `generate` is a pure function: the same descriptor always yields the
//! same registry and zones, and a descriptor with any out-of-range entry
//! yields an error without building anything.

use tracing::info;

use super::descriptor::{CardPlacement, LevelDescriptor};
use super::error::{GenerationError, LevelSection};
use crate::cards::{CardRegistry, Rank, Suit};
use crate::core::config::{Coordinate, TableConfig};
use crate::core::entity::CardId;
use crate::core::state::GameState;
use crate::zones::ZoneSet;

/// Deal a level into a fresh registry and zone set.
///
/// - Playfield entries go to the Playfield, in input order.
/// - The last Stack entry becomes the only Base card.
/// - All earlier Stack entries go to the Reserve, in input order.
/// - An empty Stack leaves both Base and Reserve empty.
///
/// Card ids follow descriptor order: Playfield first, then Stack.
/// Any rank/suit combination is legal, including duplicates.
pub fn generate(level: &LevelDescriptor) -> Result<(CardRegistry, ZoneSet), GenerationError> {
    let playfield = decode(&level.playfield, LevelSection::Playfield)?;
    let stack = decode(&level.stack, LevelSection::Stack)?;

    let mut registry = CardRegistry::new();
    let mut zones = ZoneSet::new();

    for &(rank, suit, position) in &playfield {
        let id = deal(&mut registry, rank, suit, position);
        zones.playfield_add(id);
    }

    if let Some((&(rank, suit, position), reserve)) = stack.split_last() {
        for &(rank, suit, position) in reserve {
            let id = deal(&mut registry, rank, suit, position);
            zones.reserve_append(id);
        }
        let base = deal(&mut registry, rank, suit, position);
        zones.base_push(base);
    }

    Ok((registry, zones))
}

type Decoded = (Rank, Suit, Coordinate);

fn decode(entries: &[CardPlacement], section: LevelSection) -> Result<Vec<Decoded>, GenerationError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let rank = entry.rank().ok_or(GenerationError::InvalidRank {
                section,
                index,
                face: entry.face,
            })?;
            let suit = entry.suit().ok_or(GenerationError::InvalidSuit {
                section,
                index,
                suit: entry.suit,
            })?;
            Ok((rank, suit, entry.position))
        })
        .collect()
}

fn deal(registry: &mut CardRegistry, rank: Rank, suit: Suit, position: Coordinate) -> CardId {
    let id = registry.create(rank, suit);
    registry.set_coordinate(id, position);
    registry.set_flipped(id, true);
    id
}

impl GameState {
    /// Start a session from a level.
    pub fn from_level(level: &LevelDescriptor, config: TableConfig) -> Result<Self, GenerationError> {
        let (registry, zones) = generate(level)?;
        let state = Self::from_parts(registry, zones, config)?;
        info!(
            playfield = state.zones.playfield_len(),
            reserve = state.zones.reserve().len(),
            base_top = ?state.zones.base_top(),
            "level generated"
        );
        Ok(state)
    }

    /// Start a session from level JSON.
    pub fn from_level_json(json: &str, config: TableConfig) -> Result<Self, GenerationError> {
        Self::from_level(&LevelDescriptor::from_json(json)?, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::Zone;

    fn place(rank: Rank, suit: Suit, x: f32) -> CardPlacement {
        CardPlacement::new(rank, suit, Coordinate::new(x, 0.0))
    }

    #[test]
    fn test_stack_split() {
        let level = LevelDescriptor::new(
            vec![],
            vec![
                place(Rank::Two, Suit::Spades, 0.0),
                place(Rank::Seven, Suit::Diamonds, 1.0),
                place(Rank::Three, Suit::Clubs, 2.0),
            ],
        );

        let (registry, zones) = generate(&level).unwrap();

        let top = zones.base_top().unwrap();
        let top_card = registry.get(top).unwrap();
        assert_eq!((top_card.rank(), top_card.suit()), (Rank::Three, Suit::Clubs));

        let reserve: Vec<_> = zones
            .reserve()
            .iter()
            .map(|&id| registry.get(id).map(|c| (c.rank(), c.suit())))
            .collect();
        assert_eq!(
            reserve,
            vec![Some((Rank::Two, Suit::Spades)), Some((Rank::Seven, Suit::Diamonds))]
        );
        assert_eq!(zones.base().len(), 1);
    }

    #[test]
    fn test_playfield_dealt_in_order_with_positions() {
        let level = LevelDescriptor::new(
            vec![place(Rank::King, Suit::Clubs, 250.0), place(Rank::Three, Suit::Clubs, 300.0)],
            vec![place(Rank::Ace, Suit::Hearts, 0.0)],
        );

        let (registry, zones) = generate(&level).unwrap();

        assert_eq!(zones.playfield(), vec![CardId(1), CardId(2)]);
        assert_eq!(registry.get(CardId(1)).unwrap().coordinate, Coordinate::new(250.0, 0.0));
        assert_eq!(registry.get(CardId(2)).unwrap().rank(), Rank::Three);
        assert!(registry.iter().all(|c| c.face_up));
        assert_eq!(zones.zone_of(CardId(3)), Some(Zone::Base));
    }

    #[test]
    fn test_empty_stack() {
        let level = LevelDescriptor::new(vec![place(Rank::Five, Suit::Hearts, 0.0)], vec![]);

        let (registry, zones) = generate(&level).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(zones.base_top(), None);
        assert!(zones.reserve().is_empty());
    }

    #[test]
    fn test_single_stack_card_is_base() {
        let level = LevelDescriptor::new(vec![], vec![place(Rank::Nine, Suit::Spades, 0.0)]);

        let (_, zones) = generate(&level).unwrap();

        assert_eq!(zones.base(), &[CardId(1)]);
        assert!(zones.reserve().is_empty());
    }

    #[test]
    fn test_duplicates_allowed() {
        let card = place(Rank::Four, Suit::Diamonds, 0.0);
        let level = LevelDescriptor::new(vec![card, card], vec![card, card]);

        let (registry, zones) = generate(&level).unwrap();

        assert_eq!(registry.len(), 4);
        assert_eq!(zones.total_cards(), 4);
    }

    #[test]
    fn test_invalid_face_rejected() {
        let mut bad = place(Rank::Ace, Suit::Clubs, 0.0);
        bad.face = 13;
        let level = LevelDescriptor::new(vec![], vec![place(Rank::Two, Suit::Clubs, 0.0), bad]);

        let err = generate(&level).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::InvalidRank {
                section: LevelSection::Stack,
                index: 1,
                face: 13
            }
        ));
    }

    #[test]
    fn test_invalid_suit_rejected() {
        let mut bad = place(Rank::Ace, Suit::Clubs, 0.0);
        bad.suit = 7;
        let level = LevelDescriptor::new(vec![bad], vec![]);

        assert!(matches!(
            generate(&level),
            Err(GenerationError::InvalidSuit {
                section: LevelSection::Playfield,
                index: 0,
                suit: 7
            })
        ));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let level = LevelDescriptor::new(
            vec![place(Rank::Jack, Suit::Hearts, 5.0), place(Rank::Two, Suit::Clubs, 6.0)],
            vec![place(Rank::Six, Suit::Spades, 7.0), place(Rank::Ten, Suit::Diamonds, 8.0)],
        );

        let (reg_a, zones_a) = generate(&level).unwrap();
        let (reg_b, zones_b) = generate(&level).unwrap();

        assert_eq!(zones_a, zones_b);
        for id in reg_a.ids() {
            assert_eq!(reg_a.get(id), reg_b.get(id));
        }
    }

    #[test]
    fn test_from_level_json() {
        let json = r#"{"Playfield":[{"CardFace":12,"CardSuit":0}],"Stack":[{"CardFace":0,"CardSuit":2}]}"#;

        let state = GameState::from_level_json(json, TableConfig::default()).unwrap();

        assert_eq!(state.playfield(), vec![CardId(1)]);
        assert_eq!(state.base_top(), Some(CardId(2)));
        assert!(!state.can_undo());
    }

    #[test]
    fn test_from_level_json_malformed() {
        let result = GameState::from_level_json("[1, 2", TableConfig::default());
        assert!(matches!(result, Err(GenerationError::Parse(_))));
    }
}
