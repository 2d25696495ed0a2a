// File: crates/gantt-core/tests/palette.rs
// Purpose: Color parsing and palette overrides validated at load time.

use gantt_core::{Category, GanttError, HexColor, Palette};

#[test]
fn default_table() {
    let p = Palette::default();
    assert_eq!(p.color(Category::Phase).to_string(), "#00cd95");
    assert_eq!(p.color(Category::Task).to_string(), "#636efb");
    assert_eq!(p.color(Category::Deadline).to_string(), "#ef553b");

    let order: Vec<_> = p.entries().iter().map(|(c, _)| *c).collect();
    assert_eq!(order, [Category::Phase, Category::Task, Category::Deadline]);
}

#[test]
fn parses_hex_with_or_without_hash() {
    assert_eq!("#00CD95".parse::<HexColor>().unwrap(), HexColor::new(0x00, 0xcd, 0x95));
    assert_eq!("636efb".parse::<HexColor>().unwrap(), HexColor::new(0x63, 0x6e, 0xfb));
    assert_eq!(HexColor::new(0xab, 0x01, 0xff).to_string(), "#ab01ff");

    for bad in ["#00cd9", "#gggggg", "", "#00cd955", "notacolor", "transparent", "rgba(0, 0, 0, 0.5)"] {
        assert!(matches!(bad.parse::<HexColor>(), Err(GanttError::InvalidColor(_))), "{bad}");
    }
}

#[test]
fn parses_css_names_and_functions() {
    assert_eq!("blue".parse::<HexColor>().unwrap(), HexColor::new(0, 0, 0xff));
    assert_eq!("#fff".parse::<HexColor>().unwrap(), HexColor::new(0xff, 0xff, 0xff));
    assert_eq!("rgb(99, 110, 251)".parse::<HexColor>().unwrap(), HexColor::new(0x63, 0x6e, 0xfb));
}

#[test]
fn overrides_replace_only_named_categories() {
    let p = Palette::with_overrides(["Phase=#112233"]).unwrap();
    assert_eq!(p.phase.to_string(), "#112233");
    assert_eq!(p.task, Palette::default().task);
    assert_eq!(p.deadline, Palette::default().deadline);
}

#[test]
fn overrides_reject_unknown_categories_and_bad_entries() {
    let err = Palette::with_overrides(["Milestone=#112233"]).unwrap_err();
    assert!(matches!(err, GanttError::UnknownCategory { ref value, .. } if value == "Milestone"));

    let err = Palette::with_overrides(["Phase"]).unwrap_err();
    assert!(matches!(err, GanttError::InvalidColor(_)));

    let err = Palette::with_overrides(["Task=bleu"]).unwrap_err();
    assert!(matches!(err, GanttError::InvalidColor(_)));

    let p = Palette::with_overrides(["Task=blue"]).unwrap();
    assert_eq!(p.task.to_string(), "#0000ff");
}

#[test]
fn category_parsing_is_exact() {
    assert_eq!(" Deadline ".parse::<Category>(), Ok(Category::Deadline));
    assert_eq!("phase".parse::<Category>(), Err("phase".to_string()));
}
