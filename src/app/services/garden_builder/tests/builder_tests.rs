//! Tests for garden record construction and diagnostics

use crate::app::models::{Coordinates, TerminTyp};
use crate::app::services::garden_builder::build_gardens;
use crate::app::services::sheet_parser::{Sheet, parse_sheet};

const GAERTEN_HEADER: &str = "GARTEN_ID,NAME,WEBSITE_SLUG,LAT,LNG,ADRESSE";
const DATEN_HEADER: &str = "GARTEN_ID,TAG,VON,BIS,NOTIZ,STATUS";

fn sheet(name: &str, text: &str) -> Sheet {
    parse_sheet(name, text).unwrap().sheet
}

fn gaerten(rows: &[&str]) -> Sheet {
    let text = format!("{GAERTEN_HEADER}\n{}\n", rows.join("\n"));
    sheet("GAERTEN", &text)
}

fn daten(rows: &[&str]) -> Sheet {
    let text = format!("{DATEN_HEADER}\n{}\n", rows.join("\n"));
    sheet("DATEN", &text)
}

#[test]
fn test_end_to_end_scenario_with_one_invalid_date_row() {
    let gaerten = gaerten(&["7,Mein Garten,mein-garten,52.5,13.4,Musterstraße 1"]);
    let daten = daten(&[
        "7,15.5.2025,10:00,18:00,,Regeltermin",
        "7,31.13.2025,,,,",
    ]);

    let result = build_gardens(&gaerten, &daten);
    assert_eq!(result.gardens.len(), 1);

    let garden = &result.gardens[0];
    assert_eq!(garden.id, "7");
    assert_eq!(garden.website_slug, "mein-garten");
    assert_eq!(garden.coordinates, Coordinates { lat: 52.5, lng: 13.4 });

    // Exactly one valid entry; the out-of-range row is dropped, not emitted
    assert_eq!(garden.dates.len(), 1);
    let date = &garden.dates[0];
    assert_eq!((date.day, date.month, date.year), (15, 5, Some(2025)));
    assert_eq!(date.start_time.as_deref(), Some("10:00"));
    assert_eq!(date.end_time.as_deref(), Some("18:00"));
    assert_eq!(date.termin_typ, TerminTyp::Regeltermin);

    let errors = garden.errors.as_ref().unwrap();
    assert!(errors.contains(&"1 invalid date entries found".to_string()));
    assert!(
        errors
            .iter()
            .any(|e| e.contains("TAG values out of range") && e.contains("31.13.2025"))
    );
    assert_eq!(result.stats.invalid_date_rows, 1);
}

#[test]
fn test_empty_coordinates_fall_back_to_berlin_with_distinct_message() {
    let gaerten = gaerten(&["7,Mein Garten,mein-garten,,,Musterstraße 1"]);
    let daten = daten(&["7,15.5.2025,,,,"]);

    let result = build_gardens(&gaerten, &daten);
    let garden = &result.gardens[0];

    assert_eq!(garden.coordinates, Coordinates::BERLIN_CENTER);
    let errors = garden.errors.as_ref().unwrap();
    assert!(errors.contains(&"lat, lng fields are empty".to_string()));
}

#[test]
fn test_unparseable_coordinates_get_the_format_message() {
    let gaerten = gaerten(&["7,Mein Garten,mein-garten,abc,13.4,Musterstraße 1"]);
    let daten = daten(&["7,15.5.2025,,,,"]);

    let garden = &build_gardens(&gaerten, &daten).gardens[0];
    assert_eq!(garden.coordinates, Coordinates::BERLIN_CENTER);
    let errors = garden.errors.as_ref().unwrap();
    assert!(
        errors.contains(
            &"lat, lng format invalid (expected decimal format like 53.4105003, 13.5593833)"
                .to_string()
        )
    );
}

#[test]
fn test_out_of_range_coordinates_get_the_conversion_message() {
    // Valid decimals, but Vienna is outside the buffered Germany box
    let gaerten = gaerten(&["7,Mein Garten,mein-garten,48.2082,16.3738,Musterstraße 1"]);
    let daten = daten(&["7,15.5.2025,,,,"]);

    let garden = &build_gardens(&gaerten, &daten).gardens[0];
    assert_eq!(garden.coordinates, Coordinates::BERLIN_CENTER);
    let errors = garden.errors.as_ref().unwrap();
    assert!(
        errors
            .contains(&"lat, lng conversion failed or out of range, falling back to berlin".to_string())
    );
}

#[test]
fn test_zero_date_rows_is_a_warning_not_a_rejection() {
    let gaerten = gaerten(&["7,Mein Garten,mein-garten,52.5,13.4,Musterstraße 1"]);
    let daten = daten(&["8,15.5.2025,,,,"]);

    let result = build_gardens(&gaerten, &daten);
    assert_eq!(result.gardens.len(), 1);

    let garden = &result.gardens[0];
    assert!(garden.dates.is_empty());
    let errors = garden.errors.as_ref().unwrap();
    assert!(errors.contains(&"no dates found in DATEN sheet".to_string()));
}

#[test]
fn test_clean_record_has_no_errors() {
    let gaerten = gaerten(&["7,Mein Garten,mein-garten,52.5,13.4,Musterstraße 1"]);
    let daten = daten(&["7,15.5.2025,10:00,18:00,Bei Regen geschlossen,Zusatztermin"]);

    let result = build_gardens(&gaerten, &daten);
    let garden = &result.gardens[0];

    assert!(garden.errors.is_none());
    assert_eq!(garden.dates[0].note.as_deref(), Some("Bei Regen geschlossen"));
    assert_eq!(garden.dates[0].termin_typ, TerminTyp::Zusatztermin);
    assert_eq!(result.stats.gardens_with_errors, 0);
}

#[test]
fn test_empty_text_fields_fail_the_schema_gate() {
    let gaerten = gaerten(&["7,,,52.5,13.4,"]);
    let daten = daten(&["7,15.5.2025,,,,"]);

    let result = build_gardens(&gaerten, &daten);
    // Empty slug/name/address each got a diagnostic, then the gate dropped the record
    assert!(result.gardens.is_empty());
    assert_eq!(result.stats.gardens_dropped, 1);
}

#[test]
fn test_empty_id_drops_the_record_at_the_schema_gate() {
    let gaerten = gaerten(&[
        ",Mein Garten,mein-garten,52.5,13.4,Musterstraße 1",
        "8,Anderer Garten,anderer-garten,52.5,13.4,Musterstraße 2",
    ]);
    let daten = daten(&["8,15.5.2025,,,,"]);

    let result = build_gardens(&gaerten, &daten);
    assert_eq!(result.gardens.len(), 1);
    assert_eq!(result.gardens[0].id, "8");
    assert_eq!(result.stats.gardens_dropped, 1);
    assert_eq!(result.stats.gardens_built, 1);
}

#[test]
fn test_join_preserves_source_order() {
    let gaerten = gaerten(&[
        "2,Garten Zwei,garten-zwei,52.5,13.4,Musterstraße 2",
        "1,Garten Eins,garten-eins,52.5,13.4,Musterstraße 1",
    ]);
    // Dates interleaved across gardens and deliberately not chronological
    let daten = daten(&[
        "1,20.6.2025,,,,",
        "2,15.5.2025,,,,",
        "1,1.3.2025,,,,",
    ]);

    let result = build_gardens(&gaerten, &daten);
    assert_eq!(result.gardens[0].id, "2");
    assert_eq!(result.gardens[1].id, "1");

    let first = &result.gardens[1].dates;
    assert_eq!((first[0].day, first[0].month), (20, 6));
    assert_eq!((first[1].day, first[1].month), (1, 3));
}

#[test]
fn test_join_completeness() {
    // Every date row matching an emitted garden appears iff it validates
    let gaerten = gaerten(&["7,Mein Garten,mein-garten,52.5,13.4,Musterstraße 1"]);
    let daten = daten(&[
        "7,15.5.2025,,,,",
        "7,16.5.2025,,,,",
        "7,kein Datum,,,,",
        "9,17.5.2025,,,,",
    ]);

    let result = build_gardens(&gaerten, &daten);
    let garden = &result.gardens[0];
    assert_eq!(garden.dates.len(), 2);
    assert_eq!(result.stats.date_entries, 2);
    assert_eq!(result.stats.invalid_date_rows, 1);
}

#[test]
fn test_malformed_time_drops_the_row_with_detail() {
    let gaerten = gaerten(&["7,Mein Garten,mein-garten,52.5,13.4,Musterstraße 1"]);
    let daten = daten(&[
        "7,15.5.2025,25:00,18:00,,",
        "7,16.5.2025,10:00,18:75,,",
    ]);

    let result = build_gardens(&gaerten, &daten);
    let garden = &result.gardens[0];

    assert!(garden.dates.is_empty());
    let errors = garden.errors.as_ref().unwrap();
    assert!(errors.contains(&"2 invalid date entries found".to_string()));
    assert!(
        errors
            .iter()
            .any(|e| e.contains("VON format invalid") && e.contains("25:00"))
    );
    assert!(
        errors
            .iter()
            .any(|e| e.contains("BIS format invalid") && e.contains("18:75"))
    );
}

#[test]
fn test_empty_times_stay_absent_without_diagnostics() {
    let gaerten = gaerten(&["7,Mein Garten,mein-garten,52.5,13.4,Musterstraße 1"]);
    let daten = daten(&["7,15.5.2025,,,,"]);

    let garden = &build_gardens(&gaerten, &daten).gardens[0];
    let date = &garden.dates[0];
    assert!(date.start_time.is_none());
    assert!(date.end_time.is_none());
    assert!(garden.errors.is_none());
}

#[test]
fn test_unrecognized_status_defaults_silently() {
    let gaerten = gaerten(&["7,Mein Garten,mein-garten,52.5,13.4,Musterstraße 1"]);
    let daten = daten(&["7,15.5.2025,,,,vielleicht"]);

    let garden = &build_gardens(&gaerten, &daten).gardens[0];
    assert_eq!(garden.dates[0].termin_typ, TerminTyp::Regeltermin);
    // Lenient fallback is the one silent default: no diagnostic
    assert!(garden.errors.is_none());
}

#[test]
fn test_short_rows_are_skipped_and_counted() {
    let gaerten_text = format!("{GAERTEN_HEADER}\n7,Mein Garten,mein-garten,52.5,13.4,Musterstraße 1\nnur-eine-zelle\n");
    let daten_text = format!("{DATEN_HEADER}\n7,15.5.2025,,,,\nkurz\n");

    let result = build_gardens(
        &sheet("GAERTEN", &gaerten_text),
        &sheet("DATEN", &daten_text),
    );

    assert_eq!(result.gardens.len(), 1);
    assert_eq!(result.stats.garden_rows_skipped, 1);
    assert_eq!(result.stats.date_rows_skipped, 1);
}

#[test]
fn test_reordered_columns_resolve_by_name() {
    let gaerten_text =
        "ADRESSE,LNG,LAT,WEBSITE_SLUG,NAME,GARTEN_ID\nMusterstraße 1,13.4,52.5,mein-garten,Mein Garten,7\n";
    let daten_text = "STATUS,NOTIZ,BIS,VON,TAG,GARTEN_ID\nAbgesagt,,18:00,10:00,15.5.2025,7\n";

    let result = build_gardens(
        &sheet("GAERTEN", gaerten_text),
        &sheet("DATEN", daten_text),
    );

    let garden = &result.gardens[0];
    assert_eq!(garden.id, "7");
    assert_eq!(garden.name, "Mein Garten");
    assert_eq!(garden.coordinates, Coordinates { lat: 52.5, lng: 13.4 });
    assert_eq!(garden.dates[0].termin_typ, TerminTyp::Abgesagt);
    assert!(garden.errors.is_none());
}

#[test]
fn test_diagnostic_coverage_iff_a_problem_occurred() {
    let gaerten = gaerten(&[
        "1,Sauber,sauber,52.5,13.4,Musterstraße 1",
        "2,Ohne Termine,ohne-termine,52.5,13.4,Musterstraße 2",
        "3,Kaputte Koordinaten,kaputt,x,y,Musterstraße 3",
    ]);
    let daten = daten(&["1,15.5.2025,,,,", "3,15.5.2025,,,,"]);

    let result = build_gardens(&gaerten, &daten);
    assert_eq!(result.gardens.len(), 3);
    assert!(!result.gardens[0].has_errors());
    assert!(result.gardens[1].has_errors());
    assert!(result.gardens[2].has_errors());
    assert_eq!(result.stats.gardens_with_errors, 2);
}
