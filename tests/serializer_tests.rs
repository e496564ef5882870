mod common;
use common::{naive_date, naive_time};

use weektracker::core::serializer::{parse_document, parse_line, write_document, write_line};
use weektracker::errors::AppError;
use weektracker::models::day::Day;
use weektracker::models::document::Document;
use weektracker::models::line::Line;

fn example_document() -> Document {
    Document::new(
        vec![Line::comment("Preamble"), Line::Blank],
        vec![
            Day::new(
                naive_date(2020, 7, 13),
                vec![
                    Line::special_day("Vacation"),
                    Line::comment("Came back from Jämtland"),
                    Line::Blank,
                ],
            ),
            Day::new(
                naive_date(2020, 7, 14),
                vec![
                    Line::ClosedShift {
                        start_time: naive_time(8, 32),
                        stop_time: naive_time(12, 2),
                    },
                    Line::ClosedShift {
                        start_time: naive_time(12, 30),
                        stop_time: naive_time(13, 1),
                    },
                    Line::Blank,
                ],
            ),
            Day::new(
                naive_date(2020, 7, 16),
                vec![
                    Line::ClosedShift {
                        start_time: naive_time(8, 0),
                        stop_time: naive_time(12, 0),
                    },
                    Line::SpecialShift {
                        text: "VAB".to_string(),
                        start_time: naive_time(13, 0),
                        stop_time: naive_time(17, 0),
                    },
                    Line::Blank,
                ],
            ),
            Day::new(
                naive_date(2020, 7, 17),
                vec![Line::OpenShift {
                    start_time: naive_time(8, 12),
                }],
            ),
        ],
    )
}

const EXAMPLE_TEXT: &str = "# Preamble

[monday 2020-07-13]
* Vacation
# Came back from Jämtland

[tuesday 2020-07-14]
* 08:32-12:02
* 12:30-13:01

[thursday 2020-07-16]
* 08:00-12:00
* VAB 13:00-17:00

[friday 2020-07-17]
* 08:12-
";

#[test]
fn test_parse_example_document() {
    assert_eq!(parse_document(EXAMPLE_TEXT).unwrap(), example_document());
}

#[test]
fn test_write_example_document() {
    assert_eq!(write_document(&example_document()), EXAMPLE_TEXT);
}

#[test]
fn test_round_trip_and_idempotent_write() {
    let document = example_document();
    let text = write_document(&document);
    let reparsed = parse_document(&text).unwrap();

    assert_eq!(reparsed, document);
    assert_eq!(write_document(&reparsed), text);
}

#[test]
fn test_parse_each_line_kind() {
    assert_eq!(parse_line("# hello"), Some(Line::comment("hello")));
    assert_eq!(
        parse_line("[monday 2021-09-13]"),
        Some(Line::DayHeader {
            date: naive_date(2021, 9, 13)
        })
    );
    assert_eq!(
        parse_line("* 08:12-"),
        Some(Line::OpenShift {
            start_time: naive_time(8, 12)
        })
    );
    assert_eq!(
        parse_line("* 08:24-09:12"),
        Some(Line::ClosedShift {
            start_time: naive_time(8, 24),
            stop_time: naive_time(9, 12)
        })
    );
    assert_eq!(parse_line("* hello"), Some(Line::special_day("hello")));
    assert_eq!(
        parse_line("* VAB 13:05-20:02"),
        Some(Line::SpecialShift {
            text: "VAB".to_string(),
            start_time: naive_time(13, 5),
            stop_time: naive_time(20, 2)
        })
    );
    assert_eq!(parse_line(""), Some(Line::Blank));
    assert_eq!(parse_line("   \t"), Some(Line::Blank));
}

#[test]
fn test_comment_wins_over_everything_else() {
    assert_eq!(
        parse_line("# * 08:00-"),
        Some(Line::comment("* 08:00-"))
    );
}

#[test]
fn test_special_text_is_a_single_alphabetic_token() {
    assert_eq!(parse_line("* sick leave"), None);
    assert_eq!(parse_line("* vab2"), None);
    assert_eq!(parse_line("* sick leave 08:00-12:00"), None);
}

#[test]
fn test_out_of_range_values_do_not_parse() {
    assert_eq!(parse_line("* 25:00-"), None);
    assert_eq!(parse_line("* 08:00-08:61"), None);
    assert_eq!(parse_line("[sunday 2020-02-30]"), None);
}

#[test]
fn test_weekday_in_header_is_not_preserved() {
    let document = parse_document("[friday 2020-07-06]\n* 08:00-09:00\n").unwrap();

    assert_eq!(document.days[0].date, naive_date(2020, 7, 6));
    assert_eq!(
        write_document(&document),
        "[monday 2020-07-06]\n* 08:00-09:00\n"
    );
}

#[test]
fn test_weekday_in_header_must_be_lowercase() {
    assert_eq!(parse_line("[Monday 2020-07-06]"), None);
    assert_eq!(parse_line("[MONDAY 2020-07-06]"), None);
    assert_eq!(
        parse_line("[monday 2020-07-06]"),
        Some(Line::DayHeader {
            date: naive_date(2020, 7, 6)
        })
    );

    match parse_document("[Monday 2020-07-06]\n* 08:00-09:00\n") {
        Err(AppError::Parse { line_number, .. }) => assert_eq!(line_number, 1),
        other => panic!("expected a parse failure, got {:?}", other),
    }
}

#[test]
fn test_parse_failure_reports_line_number_and_text() {
    let text = "[monday 2020-07-06]\n* 08:00-09:00\nworked a lot\n* 10:00-\n";

    match parse_document(text) {
        Err(AppError::Parse { line_number, text }) => {
            assert_eq!(line_number, 3);
            assert_eq!(text, "worked a lot");
        }
        other => panic!("expected a parse failure, got {:?}", other),
    }
}

#[test]
fn test_lines_before_first_header_form_the_preamble() {
    let document = parse_document("# notes\n* vacation\n\n[tuesday 2020-07-07]\n").unwrap();

    assert_eq!(
        document.preamble,
        vec![Line::comment("notes"), Line::special_day("vacation"), Line::Blank]
    );
    assert_eq!(
        document.days,
        vec![Day::new(naive_date(2020, 7, 7), vec![])]
    );
}

#[test]
fn test_empty_text_is_an_empty_document() {
    assert_eq!(parse_document("").unwrap(), Document::empty());
    assert_eq!(write_document(&Document::empty()), "");
}

#[test]
fn test_write_drops_seconds() {
    let line = Line::ClosedShift {
        start_time: chrono::NaiveTime::from_hms_opt(8, 5, 59).unwrap(),
        stop_time: chrono::NaiveTime::from_hms_milli_opt(9, 7, 1, 500).unwrap(),
    };
    assert_eq!(write_line(&line), "* 08:05-09:07");
}

#[test]
fn test_write_header_uses_weekday_of_date() {
    assert_eq!(
        write_line(&Line::DayHeader {
            date: naive_date(2020, 7, 12)
        }),
        "[sunday 2020-07-12]"
    );
}
