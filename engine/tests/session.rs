mod common;

use std::io::Cursor;

use common::LoadedDice;
use engine::{Army, Ending, Game, Mission, Session, Territory, World};

fn play(world: World, mission: Mission, rolls: &[u8], input: &str, pause: bool) -> (Ending, String, World) {
    let game = Game::with_parts(world, mission, LoadedDice::new(rolls));
    let mut session =
        Session::new(game, Cursor::new(input.as_bytes().to_vec()), Vec::new()).with_pause(pause);
    let ending = session.run().expect("in-memory io");
    let world = session.game().world().clone();
    let out = String::from_utf8(session.into_output()).unwrap();
    (ending, out, world)
}

fn three_almost_blue() -> World {
    World::from_territories([
        Territory::new("America", Army::Green, 5),
        Territory::new("Europe", Army::Blue, 3),
        Territory::new("Asia", Army::Red, 2),
        Territory::new("Africa", Army::Blue, 4),
        Territory::new("Oceania", Army::White, 1),
    ])
}

#[test]
fn quit_ends_immediately() {
    let (ending, out, world) = play(World::standard(), Mission::EliminateRed, &[], "0\n", true);
    assert_eq!(ending, Ending::Quit);
    assert_eq!(world, World::standard());
    assert!(out.contains("=============== WORLD MAP ==============="));
    assert!(out.contains("--- YOUR MISSION (Blue Army) ---\nEliminate the Red army.\n"));
    assert!(out.contains("1 - Attack\n2 - Check Mission\n0 - Quit\nChoose your action: "));
    assert!(out.ends_with("Leaving the game...\n\nEnding the game.\n"));
}

#[test]
fn attacking_own_territory_is_reported_and_world_unchanged() {
    let (ending, out, world) = play(
        World::standard(),
        Mission::EliminateGreen,
        &[],
        "1\n2\n2\n0\n",
        false,
    );
    assert_eq!(ending, Ending::Quit);
    assert!(out.contains("!! ERROR: You cannot attack a territory that is already yours."));
    assert_eq!(world, World::standard());
}

#[test]
fn each_refusal_has_its_own_reason() {
    let input = "1\n9 1\n1\n1 2\n1\n2 1\n0\n";
    let mut world = World::standard();
    world.get_mut(1).unwrap().troops = 1;
    let (_, out, _) = play(world, Mission::EliminateGreen, &[], input, false);
    assert!(out.contains("!! ERROR: Invalid territory number."));
    assert!(out.contains("!! ERROR: You can only attack from your own territories (Blue)."));
    assert!(out.contains("!! ERROR: You need at least 2 troops to attack."));
}

#[test]
fn conquest_completes_conquer_three_mission() {
    // Europe and Africa are Blue already; taking Oceania makes three.
    let (ending, out, world) = play(
        three_almost_blue(),
        Mission::ConquerThree,
        &[6, 1],
        "1\n2\n5\n",
        true,
    );
    assert_eq!(ending, Ending::Victory);
    assert_eq!(world.get(4).unwrap().army, Army::Blue);
    assert_eq!(world.get(1).unwrap().troops, 2);
    assert!(out.contains("Attack (Europe): 6 | Defense (Oceania): 1"));
    assert!(out.contains("VICTORY FOR THE Blue ARMY!"));
    assert!(out.contains("Mission accomplished: Conquer 3 territories in total."));
    // No pause once the game is won.
    assert!(!out.contains("Press Enter to continue..."));
    assert!(out.ends_with("=========================================\n\nEnding the game.\n"));
}

#[test]
fn both_indices_may_share_one_line() {
    let (_, out, world) = play(
        World::standard(),
        Mission::EliminateRed,
        &[2, 5],
        "1\n2 3\n0\n",
        false,
    );
    assert!(out.contains("DEFENSE WINS! The attacker lost 1 troop."));
    assert_eq!(world.get(1).unwrap().troops, 2);
    assert_eq!(world.get(2).unwrap().troops, 2);
}

#[test]
fn mission_check_reports_progress_then_victory() {
    let (ending, out, _) = play(World::standard(), Mission::EliminateGreen, &[], "2\n\n0\n", true);
    assert_eq!(ending, Ending::Quit);
    assert!(out.contains("Your mission is not complete yet. Keep fighting!"));
    assert!(out.contains("Press Enter to continue..."));

    let mut world = three_almost_blue();
    world.get_mut(4).unwrap().army = Army::Blue;
    let (ending, out, _) = play(world, Mission::ConquerThree, &[], "2\n\n", true);
    assert_eq!(ending, Ending::Victory);
    assert!(out.contains("*** CONGRATULATIONS! You have completed your mission! ***"));
}

#[test]
fn unknown_choices_loop_back_to_menu() {
    let (ending, out, _) = play(World::standard(), Mission::EliminateRed, &[], "7\nabc\n0\n", false);
    assert_eq!(ending, Ending::Quit);
    assert_eq!(out.matches("Invalid option! Try again.").count(), 2);
    assert_eq!(out.matches("Choose your action: ").count(), 3);
}

#[test]
fn closed_input_ends_the_game() {
    let (ending, out, _) = play(World::standard(), Mission::EliminateRed, &[], "", true);
    assert_eq!(ending, Ending::InputClosed);
    assert!(out.ends_with("Leaving the game...\n\nEnding the game.\n"));

    let (ending, _, _) = play(World::standard(), Mission::EliminateRed, &[], "1\n2\n", true);
    assert_eq!(ending, Ending::InputClosed);
}
