//! Sample-based regression tests for class name classification.
//!
//! Real class names as published by organizers, with manually verified
//! series. They guard the stage order and the extractor patterns together.

use crate::series::normalize_class_name;

fn series_names(name: &str) -> Vec<String> {
    normalize_class_name(name)
        .series
        .into_iter()
        .map(|s| s.name)
        .collect()
}

#[test]
fn sample_001() {
    let result = series_names("Herrer DPF50");
    assert_eq!(result, vec!["Herrer DPF50"], "Sample 1: {:?}", result);
}

#[test]
fn sample_002() {
    let result = series_names("Damer DPF25");
    assert_eq!(result, vec!["Damer DPF25"], "Sample 2: {:?}", result);
}

#[test]
fn sample_003() {
    let result = series_names("Mix DPF35");
    assert_eq!(result, vec!["Mix DPF35"], "Sample 3: {:?}", result);
}

#[test]
fn sample_004() {
    let result = series_names("Herrer DPF50 (først til mølle)");
    assert_eq!(result, vec!["Herrer DPF50"], "Sample 4: {:?}", result);
}

#[test]
fn sample_005() {
    let result = series_names("Dame DPF35 FTM tilmelding");
    assert_eq!(result, vec!["Damer DPF35"], "Sample 5: {:?}", result);
}

#[test]
fn sample_006() {
    let result = series_names("FØRST TIL MØLLE HERRE DPF 25");
    assert_eq!(result, vec!["Herrer DPF25"], "Sample 6: {:?}", result);
}

#[test]
fn sample_007() {
    let result = series_names("Kvinder DPF50");
    assert_eq!(result, vec!["Damer DPF50"], "Sample 7: {:?}", result);
}

#[test]
fn sample_008() {
    let result = series_names("DPF 100 Kvinder");
    assert_eq!(result, vec!["Damer DPF100"], "Sample 8: {:?}", result);
}

#[test]
fn sample_009() {
    let result = series_names("DPF 50 Herrer");
    assert_eq!(result, vec!["Herrer DPF50"], "Sample 9: {:?}", result);
}

#[test]
fn sample_010() {
    let result = series_names("HERRER DPF100");
    assert_eq!(result, vec!["Herrer DPF100"], "Sample 10: {:?}", result);
}

#[test]
fn sample_011() {
    let result = series_names("dame dpf35");
    assert_eq!(result, vec!["Damer DPF35"], "Sample 11: {:?}", result);
}

#[test]
fn sample_012() {
    let result = series_names("MIX DPF 25 Først-til-mølle - Lørdag");
    assert_eq!(result, vec!["Mix DPF25"], "Sample 12: {:?}", result);
}

#[test]
fn sample_013() {
    let result = series_names("DPF50 HERRER-BLÅ (FTM - max 750 point)");
    assert_eq!(result, vec!["Herrer DPF50"], "Sample 13: {:?}", result);
}

#[test]
fn sample_014() {
    let result = series_names("Mix DPF100 (ranglistestyret)");
    assert_eq!(result, vec!["Mix DPF100"], "Sample 14: {:?}", result);
}

#[test]
fn sample_015() {
    let result = series_names("Drenge U12 DPF500");
    assert_eq!(result, vec!["Drenge U12 DPF500"], "Sample 15: {:?}", result);
}

#[test]
fn sample_016() {
    let result = series_names("Piger U14 DPF200");
    assert_eq!(result, vec!["Piger U14 DPF200"], "Sample 16: {:?}", result);
}

#[test]
fn sample_017() {
    let result = series_names("U16 drenge DPF500 - Lørdag");
    assert_eq!(result, vec!["Drenge U16 DPF500"], "Sample 17: {:?}", result);
}

#[test]
fn sample_018() {
    let result = series_names("U18 piger DPF500");
    assert_eq!(result, vec!["Piger U18 DPF500"], "Sample 18: {:?}", result);
}

#[test]
fn sample_019() {
    let result = series_names("Drenge U14 DPF200 (ranglistestyret tilmelding)");
    assert_eq!(result, vec!["Drenge U14 DPF200"], "Sample 19: {:?}", result);
}

#[test]
fn sample_020() {
    let result = series_names("HERRE 100");
    assert_eq!(result, vec!["Herrer DPF100"], "Sample 20: {:?}", result);
}

#[test]
fn sample_021() {
    let result = series_names("HERRE 60");
    assert_eq!(result, vec!["Herrer DPF60"], "Sample 21: {:?}", result);
}

#[test]
fn sample_022() {
    let result = series_names("DAME 100");
    assert_eq!(result, vec!["Damer DPF100"], "Sample 22: {:?}", result);
}

#[test]
fn sample_023() {
    let result = series_names("Herre50 FTM");
    assert_eq!(result, vec!["Herrer DPF50"], "Sample 23: {:?}", result);
}

#[test]
fn sample_024() {
    let result = series_names("Dame35 FTM");
    assert_eq!(result, vec!["Damer DPF35"], "Sample 24: {:?}", result);
}

#[test]
fn sample_025() {
    let result = series_names("Herrer60");
    assert_eq!(result, vec!["Herrer DPF60"], "Sample 25: {:?}", result);
}

#[test]
fn sample_026() {
    let result = series_names("Tilmelding, herrer (200-100)");
    assert_eq!(result, vec!["Herrer DPF200", "Herrer DPF100"], "Sample 26: {:?}", result);
}

#[test]
fn sample_027() {
    let result = series_names("herrer (100-60)");
    assert_eq!(result, vec!["Herrer DPF100", "Herrer DPF60"], "Sample 27: {:?}", result);
}

#[test]
fn sample_028() {
    let result = series_names("DPF 50 Først-til-mølle - Fredag");
    assert_eq!(result, vec!["Herrer DPF50"], "Sample 28: {:?}", result);
}

#[test]
fn sample_029() {
    let result = series_names("DPF25A");
    assert_eq!(result, vec!["Herrer DPF25"], "Sample 29: {:?}", result);
}

#[test]
fn sample_030() {
    let result = series_names("Herrer DPF100/60");
    assert_eq!(result, vec!["Herrer DPF100", "Herrer DPF60"], "Sample 30: {:?}", result);
}

#[test]
fn sample_031() {
    let result = series_names("Mix DPF35/25 (først til mølle)");
    assert_eq!(result, vec!["Mix DPF35", "Mix DPF25"], "Sample 31: {:?}", result);
}

#[test]
fn sample_032() {
    let result = series_names("TILMELDING HERRE DPF 100/60");
    assert_eq!(result, vec!["Herrer DPF100", "Herrer DPF60"], "Sample 32: {:?}", result);
}

#[test]
fn sample_033() {
    let result = series_names("DPF 100/60/35/25 Herrer");
    assert_eq!(result, vec!["Herrer DPF100", "Herrer DPF60", "Herrer DPF35", "Herrer DPF25"], "Sample 33: {:?}", result);
}

#[test]
fn sample_034() {
    let result = series_names("Herrer DPF100-60");
    assert_eq!(result, vec!["Herrer DPF100", "Herrer DPF60"], "Sample 34: {:?}", result);
}

#[test]
fn sample_035() {
    let result = series_names("DPF 50/35 Først-til-mølle");
    assert_eq!(result, vec!["Herrer DPF50", "Herrer DPF35"], "Sample 35: {:?}", result);
}

#[test]
fn sample_036() {
    let result = series_names("Piger U16");
    assert_eq!(result, vec!["Piger U16"], "Sample 36: {:?}", result);
}

#[test]
fn sample_037() {
    let result = series_names("Damespeed DPF10");
    assert_eq!(result, vec!["Damer DPF10"], "Sample 37: {:?}", result);
}

#[test]
fn sample_038() {
    let result = series_names("Finals");
    assert_eq!(result, Vec::<&str>::new(), "Sample 38: {:?}", result);
}

#[test]
fn sample_039() {
    let result = series_names("Speed tournament");
    assert_eq!(result, Vec::<&str>::new(), "Sample 39: {:?}", result);
}

#[test]
fn sample_040() {
    let result = series_names("Herrer");
    assert_eq!(result, Vec::<&str>::new(), "Sample 40: {:?}", result);
}

#[test]
fn sample_041() {
    let result = series_names("HERRE 100 60");
    assert_eq!(result, Vec::<&str>::new(), "Sample 41: {:?}", result);
}

#[test]
fn sample_042() {
    let result = series_names("Dame 35år");
    assert_eq!(result, vec!["Damer DPF35"], "Sample 42: {:?}", result);
}

#[test]
fn sample_043() {
    let result = series_names("Mixæ DPF50");
    assert_eq!(result, vec!["Mix DPF50"], "Sample 43: {:?}", result);
}

#[test]
fn sample_044() {
    let result = series_names("Herre50år");
    assert_eq!(result, vec!["Herrer DPF50"], "Sample 44: {:?}", result);
}

#[test]
fn sample_045() {
    let result = series_names("U14år Piger");
    assert_eq!(result, vec!["Piger U14"], "Sample 45: {:?}", result);
}
