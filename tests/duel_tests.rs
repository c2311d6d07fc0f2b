//! Duel rules tests.
//!
//! These tests drive `DuelRules` directly through `apply_action`:
//! - Resource and capacity rejections
//! - Combat, death removal and tank priority
//! - Abilities and hero abilities
//! - Round progression and the hero kill

use ccg_duel::cards::{CardCatalog, CardDefinition, Creature};
use ccg_duel::core::{Action, ActionError, Coordinates, DuelState, PlayerId, PlayerMap, PlayerState, RowId};
use ccg_duel::rules::{DuelRules, GameResult, RulesEngine};
use ccg_duel::zones::CardPile;

fn card(name: &str, mana: u32, attack: i32, health: i32) -> CardDefinition {
    CardDefinition::new(name, mana, attack, health)
}

/// Start a duel where both players hold the same unshuffled deck.
fn start(deck: &[CardDefinition], heroes: [&str; 2], starting: PlayerId) -> (DuelRules, DuelState) {
    let catalog = CardCatalog::standard();
    let rules = DuelRules::default();
    let players = PlayerMap::new(|p| {
        let pile: CardPile = deck.iter().cloned().map(|def| catalog.creature(def)).collect();
        let hero = catalog
            .hero(card(heroes[p.index()], 2, 0, 0), 30)
            .expect("known hero");
        PlayerState::new(pile, hero)
    });
    let duel = rules.new_duel(players, starting);
    (rules, duel)
}

fn spawn(catalog: &CardCatalog, def: CardDefinition) -> Creature {
    catalog.creature(def)
}

fn at(x: i64, y: i64) -> Coordinates {
    Coordinates::new(x, y)
}

/// Test that a card costing more than the pool is rejected without side effects.
#[test]
fn test_place_card_not_enough_mana() {
    let (rules, mut duel) = start(&[card("Goliath", 2, 1, 3)], ["Lord Royce", "Lord Royce"], PlayerId::ONE);
    assert_eq!(duel.players[PlayerId::ONE].mana, 1);
    let before = duel.clone();

    let result = rules.apply_action(&mut duel, &Action::PlaceCard { hand_idx: 0 });

    assert_eq!(result, Err(ActionError::NotEnoughManaToPlace));
    assert_eq!(duel.players[PlayerId::ONE].mana, 1);
    assert_eq!(duel, before);
}

/// Test that placing debits exactly the card cost and routes to the mandatory row.
#[test]
fn test_place_card_routes_by_affinity() {
    let deck = [card("Goliath", 1, 1, 3), card("Berserker", 1, 4, 2)];
    let (rules, mut duel) = start(&deck, ["Lord Royce", "Lord Royce"], PlayerId::TWO);
    duel.players[PlayerId::TWO].mana = 5;
    duel.players[PlayerId::TWO].hand.push_back(spawn(&CardCatalog::standard(), deck[1].clone()));

    rules.apply_action(&mut duel, &Action::PlaceCard { hand_idx: 0 }).unwrap();
    rules.apply_action(&mut duel, &Action::PlaceCard { hand_idx: 0 }).unwrap();

    // Player two: front row 1, back row 0.
    assert_eq!(duel.board.creature_at(1, 0).map(|c| c.name()), Some("Goliath"));
    assert_eq!(duel.board.creature_at(0, 0).map(|c| c.name()), Some("Berserker"));
    assert_eq!(duel.players[PlayerId::TWO].mana, 3);
    assert!(duel.players[PlayerId::TWO].hand.is_empty());
}

/// Test that a sixth creature cannot join a full row.
#[test]
fn test_place_card_row_full() {
    let (rules, mut duel) = start(&[card("Sentinel", 1, 1, 1)], ["Lord Royce", "Lord Royce"], PlayerId::ONE);
    let catalog = CardCatalog::standard();
    for _ in 0..5 {
        duel.board
            .place(RowId::new(3), spawn(&catalog, card("Sentinel", 1, 1, 1)))
            .unwrap();
    }

    let result = rules.apply_action(&mut duel, &Action::PlaceCard { hand_idx: 0 });

    assert_eq!(result, Err(ActionError::RowFull));
    assert_eq!(duel.players[PlayerId::ONE].hand.len(), 1);
    assert_eq!(duel.players[PlayerId::ONE].mana, 1);
}

/// Test that lethal damage removes the target and marks the attacker.
#[test]
fn test_attack_kills_target() {
    let (rules, mut duel) = start(&[], ["Lord Royce", "Lord Royce"], PlayerId::ONE);
    let catalog = CardCatalog::standard();
    duel.board.place(RowId::new(3), spawn(&catalog, card("Berserker", 1, 3, 2))).unwrap();
    duel.board.place(RowId::new(0), spawn(&catalog, card("Sentinel", 1, 1, 2))).unwrap();

    let result = rules.apply_action(
        &mut duel,
        &Action::CardUsesAttack {
            attacker: at(3, 0),
            attacked: at(0, 0),
        },
    );

    assert_eq!(result, Ok(None));
    assert!(duel.board.creature_at(0, 0).is_none());
    assert!(duel.board.creature_at(3, 0).unwrap().has_attacked);

    let again = rules.apply_action(&mut duel, &Action::UseAttackHero { attacker: at(3, 0) });
    assert_eq!(again, Err(ActionError::AlreadyAttacked));
}

/// Test that a frozen creature can never act.
#[test]
fn test_frozen_creature_cannot_act() {
    let (rules, mut duel) = start(&[], ["Lord Royce", "Lord Royce"], PlayerId::ONE);
    let catalog = CardCatalog::standard();
    duel.board.place(RowId::new(2), spawn(&catalog, card("The Ripper", 1, 1, 2))).unwrap();
    duel.board.place(RowId::new(1), spawn(&catalog, card("Sentinel", 1, 1, 2))).unwrap();
    duel.board.creature_at_mut(2, 0).unwrap().frozen = true;

    let actions = [
        Action::CardUsesAttack {
            attacker: at(2, 0),
            attacked: at(1, 0),
        },
        Action::CardUsesAbility {
            attacker: at(2, 0),
            attacked: at(1, 0),
        },
        Action::UseAttackHero { attacker: at(2, 0) },
    ];
    for action in &actions {
        assert_eq!(rules.apply_action(&mut duel, action), Err(ActionError::Frozen), "{action:?}");
    }
}

/// Test tank priority for attacks, abilities and hero attacks.
#[test]
fn test_tank_must_be_attacked_first() {
    let (rules, mut duel) = start(&[], ["Lord Royce", "Lord Royce"], PlayerId::ONE);
    let catalog = CardCatalog::standard();
    duel.board.place(RowId::new(3), spawn(&catalog, card("Berserker", 1, 5, 2))).unwrap();
    duel.board.place(RowId::new(3), spawn(&catalog, card("The Cursed One", 1, 0, 2))).unwrap();
    duel.board.place(RowId::new(0), spawn(&catalog, card("Sentinel", 1, 1, 2))).unwrap();
    duel.board.place(RowId::new(1), spawn(&catalog, card("Warden", 1, 0, 4))).unwrap();

    let hit_sentinel = Action::CardUsesAttack {
        attacker: at(3, 0),
        attacked: at(0, 0),
    };
    let curse_sentinel = Action::CardUsesAbility {
        attacker: at(3, 1),
        attacked: at(0, 0),
    };
    assert_eq!(rules.apply_action(&mut duel, &hit_sentinel), Err(ActionError::NotTank));
    assert_eq!(rules.apply_action(&mut duel, &curse_sentinel), Err(ActionError::NotTank));
    assert_eq!(
        rules.apply_action(&mut duel, &Action::UseAttackHero { attacker: at(3, 0) }),
        Err(ActionError::NotTank)
    );

    // Killing the tank opens the way.
    let hit_warden = Action::CardUsesAttack {
        attacker: at(3, 0),
        attacked: at(1, 0),
    };
    assert_eq!(rules.apply_action(&mut duel, &hit_warden), Ok(None));
    assert!(duel.board.row_at(1).unwrap().is_empty());
    assert_eq!(rules.apply_action(&mut duel, &curse_sentinel), Ok(None));
}

/// Test the ability asymmetry: stat swap touches only the target, health
/// swap exchanges with the caster.
#[test]
fn test_swap_abilities() {
    let (rules, mut duel) = start(&[], ["Lord Royce", "Lord Royce"], PlayerId::ONE);
    let catalog = CardCatalog::standard();
    duel.board.place(RowId::new(3), spawn(&catalog, card("The Cursed One", 1, 0, 3))).unwrap();
    duel.board.place(RowId::new(2), spawn(&catalog, card("Miraj", 1, 4, 6))).unwrap();
    duel.board.place(RowId::new(0), spawn(&catalog, card("Berserker", 1, 5, 2))).unwrap();
    duel.board.place(RowId::new(0), spawn(&catalog, card("Sentinel", 1, 1, 9))).unwrap();

    rules
        .apply_action(
            &mut duel,
            &Action::CardUsesAbility {
                attacker: at(3, 0),
                attacked: at(0, 0),
            },
        )
        .unwrap();
    let berserker = duel.board.creature_at(0, 0).unwrap();
    assert_eq!((berserker.attack, berserker.health), (2, 5));
    assert_eq!(duel.board.creature_at(3, 0).unwrap().health, 3);

    rules
        .apply_action(
            &mut duel,
            &Action::CardUsesAbility {
                attacker: at(2, 0),
                attacked: at(0, 1),
            },
        )
        .unwrap();
    assert_eq!(duel.board.creature_at(2, 0).unwrap().health, 9);
    assert_eq!(duel.board.creature_at(0, 1).unwrap().health, 6);
}

/// Test that the healer targets its own side only.
#[test]
fn test_disciple_heals_allies() {
    let (rules, mut duel) = start(&[], ["Lord Royce", "Lord Royce"], PlayerId::ONE);
    let catalog = CardCatalog::standard();
    duel.board.place(RowId::new(3), spawn(&catalog, card("Disciple", 1, 0, 1))).unwrap();
    duel.board.place(RowId::new(2), spawn(&catalog, card("Goliath", 1, 1, 3))).unwrap();
    duel.board.place(RowId::new(0), spawn(&catalog, card("Sentinel", 1, 1, 2))).unwrap();

    let heal_enemy = Action::CardUsesAbility {
        attacker: at(3, 0),
        attacked: at(0, 0),
    };
    assert_eq!(rules.apply_action(&mut duel, &heal_enemy), Err(ActionError::TargetNotOwn));

    let heal_ally = Action::CardUsesAbility {
        attacker: at(3, 0),
        attacked: at(2, 0),
    };
    assert_eq!(rules.apply_action(&mut duel, &heal_ally), Ok(None));
    assert_eq!(duel.board.creature_at(2, 0).unwrap().health, 5);

    // Using the ability spends the creature's action.
    assert_eq!(rules.apply_action(&mut duel, &heal_ally), Err(ActionError::AlreadyAttacked));
}

/// Test that freezing an enemy row lasts until that player's turn ends.
#[test]
fn test_lord_royce_freeze_cycle() {
    let (rules, mut duel) = start(&[], ["Lord Royce", "King Mudface"], PlayerId::ONE);
    let catalog = CardCatalog::standard();
    duel.players[PlayerId::ONE].mana = 2;
    duel.board.place(RowId::new(1), spawn(&catalog, card("Goliath", 1, 1, 3))).unwrap();

    assert_eq!(
        rules.apply_action(&mut duel, &Action::UseHeroAbility { affected_row: 2 }),
        Err(ActionError::RowNotEnemy)
    );
    rules.apply_action(&mut duel, &Action::UseHeroAbility { affected_row: 1 }).unwrap();
    assert_eq!(duel.players[PlayerId::ONE].mana, 0);
    assert!(duel.board.creature_at(1, 0).unwrap().frozen);

    // Player one's turn end only thaws player one's rows.
    rules.apply_action(&mut duel, &Action::EndPlayerTurn).unwrap();
    assert!(duel.board.creature_at(1, 0).unwrap().frozen);
    assert_eq!(
        rules.apply_action(&mut duel, &Action::UseAttackHero { attacker: at(1, 0) }),
        Err(ActionError::Frozen)
    );

    rules.apply_action(&mut duel, &Action::EndPlayerTurn).unwrap();
    assert!(!duel.board.creature_at(1, 0).unwrap().frozen);
}

/// Test that Empress Thorina destroys the first of the healthiest creatures.
#[test]
fn test_empress_thorina_destroys_highest_health() {
    let (rules, mut duel) = start(&[], ["Empress Thorina", "Lord Royce"], PlayerId::ONE);
    let catalog = CardCatalog::standard();
    duel.players[PlayerId::ONE].mana = 2;
    duel.board.place(RowId::new(0), spawn(&catalog, card("Sentinel", 1, 1, 4))).unwrap();
    duel.board.place(RowId::new(0), spawn(&catalog, card("Berserker", 1, 2, 6))).unwrap();
    duel.board.place(RowId::new(0), spawn(&catalog, card("Sentinel", 1, 3, 6))).unwrap();

    rules.apply_action(&mut duel, &Action::UseHeroAbility { affected_row: 0 }).unwrap();

    let names: Vec<_> = duel.board.row_at(0).unwrap().iter().map(|c| c.attack).collect();
    assert_eq!(names, vec![1, 3]);
    assert_eq!(
        rules.apply_action(&mut duel, &Action::UseHeroAbility { affected_row: 1 }),
        Err(ActionError::NotEnoughManaForHero)
    );
}

/// Test that buff heroes refuse enemy rows and are limited to one use per round.
#[test]
fn test_buff_hero_once_per_round() {
    let (rules, mut duel) = start(&[], ["General Kocioraw", "Lord Royce"], PlayerId::ONE);
    let catalog = CardCatalog::standard();
    duel.players[PlayerId::ONE].mana = 10;
    duel.board.place(RowId::new(3), spawn(&catalog, card("Sentinel", 1, 1, 4))).unwrap();

    assert_eq!(
        rules.apply_action(&mut duel, &Action::UseHeroAbility { affected_row: 0 }),
        Err(ActionError::RowNotOwn)
    );
    rules.apply_action(&mut duel, &Action::UseHeroAbility { affected_row: 3 }).unwrap();
    assert_eq!(duel.board.creature_at(3, 0).unwrap().attack, 2);
    assert_eq!(
        rules.apply_action(&mut duel, &Action::UseHeroAbility { affected_row: 3 }),
        Err(ActionError::HeroAlreadyAttacked)
    );
    assert_eq!(duel.players[PlayerId::ONE].mana, 8);
}

/// Test the hero kill: result reported once, later actions are no-ops.
#[test]
fn test_hero_kill_ends_duel() {
    let (rules, mut duel) = start(&[], ["Lord Royce", "Lord Royce"], PlayerId::TWO);
    let catalog = CardCatalog::standard();
    duel.board.place(RowId::new(0), spawn(&catalog, card("Berserker", 1, 5, 2))).unwrap();
    duel.players[PlayerId::ONE].hero.health = 1;

    let result = rules.apply_action(&mut duel, &Action::UseAttackHero { attacker: at(0, 0) });

    assert_eq!(result, Ok(Some(GameResult::Winner(PlayerId::TWO))));
    assert!(duel.players[PlayerId::ONE].hero.is_dead());
    assert_eq!(rules.is_terminal(&duel), Some(GameResult::Winner(PlayerId::TWO)));

    let before = duel.clone();
    assert_eq!(rules.apply_action(&mut duel, &Action::EndPlayerTurn), Ok(None));
    assert_eq!(rules.apply_action(&mut duel, &Action::UseAttackHero { attacker: at(0, 0) }), Ok(None));
    assert_eq!(duel, before);
}

/// Test round 3 -> 4: both draw, both gain 4 mana, flags cleared.
#[test]
fn test_round_three_to_four() {
    let deck: Vec<_> = (0..6).map(|i| card(&format!("Sentinel{i}"), 1, 1, 1)).collect();
    let (rules, mut duel) = start(&deck, ["Lord Royce", "Lord Royce"], PlayerId::ONE);

    for _ in 0..5 {
        rules.apply_action(&mut duel, &Action::EndPlayerTurn).unwrap();
    }
    assert_eq!(duel.turn.round, 3);
    assert_eq!(duel.current_player(), PlayerId::TWO);

    let catalog = CardCatalog::standard();
    let mut tired = spawn(&catalog, card("Sentinel", 1, 1, 1));
    tired.has_attacked = true;
    duel.board.place(RowId::new(0), tired).unwrap();
    duel.players[PlayerId::ONE].hero.has_attacked = true;
    let hands = duel.players.iter().map(|(_, p)| p.hand.len()).collect::<Vec<_>>();
    let mana = duel.players.iter().map(|(_, p)| p.mana).collect::<Vec<_>>();

    rules.apply_action(&mut duel, &Action::EndPlayerTurn).unwrap();

    assert_eq!(duel.turn.round, 4);
    assert_eq!(duel.current_player(), PlayerId::ONE);
    for (player, owner) in duel.players.iter() {
        assert_eq!(owner.hand.len(), hands[player.index()] + 1);
        assert_eq!(owner.mana, mana[player.index()] + 4);
        assert!(!owner.hero.has_attacked);
    }
    assert!(!duel.board.creature_at(0, 0).unwrap().has_attacked);
}

/// Test that mana gained per round stops growing at the cap.
#[test]
fn test_mana_cap() {
    let (rules, mut duel) = start(&[], ["Lord Royce", "Lord Royce"], PlayerId::ONE);

    // Rounds 1..=12: 1+2+...+10 + 10 + 10.
    for _ in 0..22 {
        rules.apply_action(&mut duel, &Action::EndPlayerTurn).unwrap();
    }

    assert_eq!(duel.turn.round, 12);
    assert_eq!(duel.players[PlayerId::ONE].mana, 75);
    assert_eq!(duel.players[PlayerId::TWO].mana, 75);
}

/// Test that malformed coordinates are rejected, never panic.
#[test]
fn test_missing_positions_are_rejected() {
    let (rules, mut duel) = start(&[], ["Lord Royce", "Lord Royce"], PlayerId::ONE);

    assert_eq!(
        rules.apply_action(&mut duel, &Action::UseAttackHero { attacker: at(9, 9) }),
        Err(ActionError::NoCardAtPosition)
    );
    assert_eq!(
        rules.apply_action(&mut duel, &Action::PlaceCard { hand_idx: 42 }),
        Err(ActionError::NoCardInHand)
    );
    assert_eq!(
        rules.apply_action(&mut duel, &Action::UseHeroAbility { affected_row: 9 }),
        Err(ActionError::NotEnoughManaForHero)
    );
    assert_eq!(
        rules.apply_action(&mut duel, &Action::UseAttackHero { attacker: at(-1, 0) }),
        Err(ActionError::NoCardAtPosition)
    );
    assert_eq!(
        rules.apply_action(&mut duel, &Action::PlaceCard { hand_idx: -1 }),
        Err(ActionError::NoCardInHand)
    );
}
