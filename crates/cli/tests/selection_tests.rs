//! Selection behavior through the public console API.

use std::io::Cursor;

use console_helpers::prompting::{
    Console, ConsoleSettings, DefaultChoice, SelectOptions, SelectedIndex, SelectedValue,
};

type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn scripted(lines: &[&str]) -> ScriptedConsole {
    let mut input = lines.join("\n");
    input.push('\n');

    let settings = ConsoleSettings {
        redraw_echo: false,
        ..ConsoleSettings::default()
    };
    Console::new(Cursor::new(input.into_bytes()), Vec::new(), settings)
}

fn written(console: ScriptedConsole) -> String {
    String::from_utf8(console.into_parts().1).unwrap()
}

#[test]
fn test_in_range_numbers_are_returned_as_is() {
    let choices = ["a", "b", "c", "d"];
    for n in 0..choices.len() as i32 {
        let answer = n.to_string();
        let mut console = scripted(&[answer.as_str()]);
        let selection = console
            .select_from_choices("Pick", &choices, None, SelectOptions::default())
            .unwrap();
        assert_eq!(selection, Some(SelectedIndex::Value(n)));
        assert_eq!(written(console).matches("Enter a number").count(), 1);
    }
}

#[test]
fn test_cancel_regardless_of_choice_count() {
    let many: Vec<String> = (0..20).map(|i| format!("choice {i}")).collect();
    let cases: [&[String]; 3] = [&[], &many[..1], &many];

    for choices in cases {
        let mut console = scripted(&["-1"]);
        let selection = console
            .select_from_choices("Pick", choices, None, SelectOptions::default())
            .unwrap();
        assert_eq!(selection, Some(SelectedIndex::Cancelled));
    }
}

#[test]
fn test_cancel_disallowed_never_returns_cancel_index() {
    let mut console = scripted(&["-1", "-1", "3"]);
    let options = SelectOptions::default().allow_cancel(false);
    let selection = console
        .select_from_choices("Pick", &["x"], None, options)
        .unwrap();
    assert_eq!(selection, Some(SelectedIndex::Value(3)));
}

#[test]
fn test_empty_answer_with_null_allowed_reads_and_selects_none() {
    let mut console = scripted(&[""]);
    assert_eq!(console.read_line("Name", None).unwrap(), None);

    let mut console = scripted(&[""]);
    let options = SelectOptions::default().allow_null(true);
    let selection = console
        .select_from_choices("Pick", &["x"], None, options)
        .unwrap();
    assert_eq!(selection, None);
}

#[test]
fn test_default_two_is_read_and_parsed() {
    let mut console = scripted(&[""]);
    assert_eq!(
        console.read_line("Number", Some("2")).unwrap(),
        Some("2".to_string())
    );

    let mut console = scripted(&[""]);
    let selection = console
        .select_from_choices("Pick", &["x", "y", "z"], Some(2), SelectOptions::default())
        .unwrap();
    assert_eq!(selection, Some(SelectedIndex::Value(2)));
}

#[test]
fn test_out_of_bounds_mapped_index_is_asked_again() {
    let choices = ["a", "b", "c"];
    let mut console = scripted(&["5", "1"]);
    let selection = console
        .select_from_mapped_choices(
            "Letter",
            &choices,
            |c| c.to_string(),
            None,
            SelectOptions::default(),
        )
        .unwrap();

    assert_eq!(selection, Some(SelectedValue::Value(&"b")));
    assert!(written(console).contains("\tInvalid selection."));
}

#[test]
fn test_empty_answer_picks_default_choice() {
    let choices = ["red", "green", "blue"];
    let mut console = scripted(&[""]);
    let selection = console
        .select_from_displayed_choices(
            "Color",
            &choices,
            Some(DefaultChoice::Index(1)),
            SelectOptions::default(),
        )
        .unwrap();

    assert_eq!(selection.and_then(SelectedValue::value), Some(&"green"));
}

#[test]
fn test_owned_values_are_returned_by_reference() {
    #[derive(PartialEq, Debug)]
    struct Server {
        host: String,
        port: u16,
    }

    let servers = vec![
        Server {
            host: "alpha".to_string(),
            port: 22,
        },
        Server {
            host: "beta".to_string(),
            port: 2222,
        },
    ];

    let mut console = scripted(&[""]);
    let selection = console
        .select_from_mapped_choices(
            "Server",
            &servers,
            |s| format!("{}:{}", s.host, s.port),
            Some(DefaultChoice::Value(&servers[1])),
            SelectOptions::default(),
        )
        .unwrap();

    assert_eq!(selection, Some(SelectedValue::Value(&servers[1])));
    assert!(written(console).contains("1 -- beta:2222"));
}
