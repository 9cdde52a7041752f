// tests/detail_format.rs
//
// The detail block's field order is a contract surface; numeric fields
// get thousands separators.
//
use parkview::fmt::{comma_separate, detail_block};
use parkview::model::{League, Roof, Stadium, Surface, Team, Typology};

fn sample() -> (Team, Stadium) {
    let team = Team { id: 24, name: "San Francisco Giants".into(), league: League::National };
    let stadium = Stadium {
        id: 124,
        team_id: 24,
        name: "Oracle Park".into(),
        location: "San Francisco, California".into(),
        year_opened: 2000,
        seating_capacity: 41_915,
        typology: Typology::RetroClassic,
        roof: Roof::Open,
        surface: Surface::Grass,
        center_field_dist: 399,
    };
    (team, stadium)
}

#[test]
fn fields_appear_in_fixed_order() {
    let (team, stadium) = sample();
    let block = detail_block(&team, &stadium);
    let lines: Vec<&str> = block.lines().collect();

    let expected_labels = [
        "Team Name:",
        "League:",
        "Stadium Name:",
        "Location:",
        "Year Opened:",
        "Seating Capacity:",
        "Typology:",
        "Roof Type:",
        "Playing Surface:",
        "Center field Distance:",
    ];

    assert!(lines[0].contains("Team Information"));
    assert_eq!(lines.len(), expected_labels.len() + 1);
    for (line, label) in lines[1..].iter().zip(expected_labels) {
        assert!(line.starts_with(label), "expected {:?} at start of {:?}", label, line);
    }
}

#[test]
fn numeric_fields_are_comma_separated() {
    let (team, stadium) = sample();
    let block = detail_block(&team, &stadium);
    assert!(block.contains("41,915"));
    assert!(block.contains("399")); // below 1000: no separator
    assert!(!block.contains("41915"));
}

#[test]
fn comma_separate_groups_digits() {
    assert_eq!(comma_separate(0), "0");
    assert_eq!(comma_separate(999), "999");
    assert_eq!(comma_separate(1_000), "1,000");
    assert_eq!(comma_separate(41_915), "41,915");
    assert_eq!(comma_separate(1_234_567), "1,234,567");
}
