use parasketch::data::hotkeys::*;

#[test]
fn tooltip_with_no_hotkey_returns_description_only() {
    assert_eq!(format_button_tooltip("Reset", None), "Reset");
}

#[test]
fn tooltip_with_ctrl_hotkey() {
    let hk = Hotkey::new(Modifier::Ctrl, 'S');
    assert_eq!(format_button_tooltip("Save PNG", Some(&hk)), "Save PNG [Ctrl+S]");
}

#[test]
fn defaults() {
    let hk = Hotkeys::default();
    assert_eq!(hk.get(HotkeyName::Reset), &Hotkey::new(Modifier::None, 'R'));
    assert_eq!(hk.get(HotkeyName::SavePng), &Hotkey::new(Modifier::None, 'S'));
}

#[test]
fn parse_plain_and_modified() {
    assert_eq!("r".parse::<Hotkey>().unwrap(), Hotkey::new(Modifier::None, 'R'));
    assert_eq!(
        "Ctrl+S".parse::<Hotkey>().unwrap(),
        Hotkey::new(Modifier::Ctrl, 'S')
    );
    assert_eq!(
        "shift + alt + x".parse::<Hotkey>().unwrap(),
        Hotkey::new(Modifier::AltShift, 'X')
    );
    assert_eq!(
        "Control+Alt+Shift+1".parse::<Hotkey>().unwrap(),
        Hotkey::new(Modifier::CtrlAltShift, '1')
    );
}

#[test]
fn parse_errors() {
    assert!("".parse::<Hotkey>().is_err());
    assert!("Hyper+R".parse::<Hotkey>().is_err());
    assert!("Ctrl+Enter".parse::<Hotkey>().is_err());
}

#[test]
fn display_round_trips_through_parse() {
    let hk = Hotkey::new(Modifier::CtrlShift, 'R');
    assert_eq!(hk.to_string(), "Ctrl+Shift+R");
    assert_eq!(hk.to_string().parse::<Hotkey>().unwrap(), hk);
}

#[test]
fn yaml_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("hotkeys.yaml");
    let mut hk = Hotkeys::default();
    hk.reset = Hotkey::new(Modifier::Ctrl, 'X');
    hk.save_to_path(&path).unwrap();
    assert_eq!(Hotkeys::load_from_path(&path).unwrap(), hk);

    hk.reset_defaults();
    assert_eq!(hk, Hotkeys::default());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Hotkeys::load_from_path(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.contains("Failed to read"));
}
