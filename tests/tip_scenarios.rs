use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tippy::prelude::*;

#[test]
fn test_tip_matches_rounded_formula() {
    let bills = [dec!(0.01), dec!(1), dec!(9.99), dec!(42.42), dec!(100), dec!(1234.56)];
    for bill in bills {
        for pct in 0..=100u32 {
            let result = compute_tip(bill, pct);
            let expected_tip = bill * Decimal::from(pct) / dec!(100);
            assert_eq!(result.tip_text(), format_amount(expected_tip));
            assert_eq!(result.total_text(), format_amount(bill + expected_tip));
        }
    }
}

#[test]
fn test_zero_bill_is_zero_everywhere() {
    for pct in [0, 15, 100] {
        let amounts = compute_tip(Decimal::ZERO, pct);
        assert_eq!((amounts.tip_text(), amounts.total_text()), ("0.00".to_string(), "0.00".to_string()));

        for party in ["", "1", "4", "abc", "-1"] {
            assert_eq!(compute_per_person_bill(Decimal::ZERO, pct, party).per_person_text(), "0.00");
        }
    }
}

#[test]
fn test_dinner_for_four() {
    let split = compute_per_person_bill(dec!(100), 15, "4");
    assert_eq!(split.amounts.tip_text(), "15.00");
    assert_eq!(split.amounts.total_text(), "115.00");
    assert_eq!(split.per_person_text(), "28.75");
}

#[test]
fn test_party_of_zero() {
    let split = compute_per_person_bill(dec!(100), 15, "0");
    assert_eq!(split.per_person_text(), "0.00");
}

#[test]
fn test_garbage_party_size_keeps_tip_and_total() {
    let split = compute_per_person_bill(dec!(100), 15, "abc");
    assert_eq!(split.per_person_text(), "0.00");
    assert_eq!(split.amounts.tip_text(), "15.00");
    assert_eq!(split.amounts.total_text(), "115.00");
}

#[test]
fn test_label_boundaries() {
    let cases = [
        (0, TipLabel::Poor),
        (9, TipLabel::Poor),
        (10, TipLabel::Acceptable),
        (14, TipLabel::Acceptable),
        (15, TipLabel::Good),
        (19, TipLabel::Good),
        (20, TipLabel::Great),
        (24, TipLabel::Great),
        (25, TipLabel::Amazing),
        (100, TipLabel::Amazing),
    ];
    for (pct, label) in cases {
        assert_eq!(classify_tip(pct, 100).label, label, "percent {}", pct);
    }
}

#[test]
fn test_label_color_follows_slider() {
    let config = TipConfig::default().with_colors(Rgba::rgb(0xE5, 0x39, 0x35), Rgba::rgb(0x43, 0xA0, 0x47));
    let low = classify_tip(0, config.slider_max).color(&config);
    let high = classify_tip(config.slider_max, config.slider_max).color(&config);
    assert_eq!(low, config.worst_tip_color);
    assert_eq!(high, config.best_tip_color);

    let mut prev = low;
    for pct in 1..=config.slider_max {
        let c = classify_tip(pct, config.slider_max).color(&config);
        assert!(c.r <= prev.r && c.g >= prev.g && c.b >= prev.b);
        prev = c;
    }
}

#[test]
fn test_unfriendly_text_never_panics() {
    let config = TipConfig::default();
    let texts = ["", " ", "-", "-5", "1e400", "NaN", "99999999999999999999999999999", "12,50", "٣"];
    for bill in texts {
        for party in texts {
            let result = calculate(&TipInputs::new(bill, 15, party), &config);
            assert!(result.tip_amount >= Decimal::ZERO);
            assert!(result.bill_per_person >= Decimal::ZERO);
        }
    }
}
