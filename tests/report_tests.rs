mod common;

use common::*;
use gpu_price_watch::models::{Alert, Catalog, Severity};
use gpu_price_watch::services::report::{lowest_prices, ReportFormatter};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn alert(model: &str, retailer: &str, old: Decimal, new: Decimal, pct: Decimal, severity: Severity) -> Alert {
    Alert {
        timestamp: fixed_now(),
        model: model.to_string(),
        retailer: retailer.to_string(),
        old_price: old,
        new_price: new,
        drop_percent: pct,
        url: format!("https://shop.example.com/{}?ref=watch&id=1", model.replace(' ', "-")),
        severity,
    }
}

#[test]
fn empty_alerts_produce_no_message() {
    let formatter = ReportFormatter::new().unwrap();

    assert_eq!(formatter.format_message(&[], fixed_now()).unwrap(), None);
}

#[test]
fn message_contains_each_alert_once() {
    let formatter = ReportFormatter::new().unwrap();
    let alerts = vec![
        alert("RTX 4090", "Best Buy", dec!(1899.99), dec!(1799.99), dec!(5.3), Severity::Normal),
        alert("RTX 4080", "Newegg", dec!(1199.99), dec!(1059.99), dec!(11.7), Severity::High),
    ];

    let message = formatter.format_message(&alerts, fixed_now()).unwrap().unwrap();

    for a in &alerts {
        assert_eq!(message.matches(a.url.as_str()).count(), 1, "url of {}", a.model);
        assert_eq!(message.matches(a.model.as_str()).count(), 1, "model {}", a.model);
        assert_eq!(message.matches(a.retailer.as_str()).count(), 1, "retailer {}", a.retailer);
        assert_eq!(message.matches(&format!("${}", a.old_price)).count(), 1);
        assert_eq!(message.matches(&format!("${}", a.new_price)).count(), 1);
    }

    assert!(message.contains("$1899.99 → $1799.99 (-5.3%)"));
    assert!(message.contains("$1199.99 → $1059.99 (-11.7%)"));
    assert!(message.contains("⚡ NORMAL RTX 4090"));
    assert!(message.contains("🔥 HIGH RTX 4080"));
}

#[test]
fn message_keeps_alert_order_and_urls_unescaped() {
    let formatter = ReportFormatter::new().unwrap();
    let alerts = vec![
        alert("RTX 4070 Ti Super", "Amazon", dec!(849.99), dec!(789.99), dec!(7.1), Severity::Normal),
        alert("RTX 4090", "Newegg", dec!(1999.99), dec!(1759.99), dec!(12.0), Severity::High),
    ];

    let message = formatter.format_message(&alerts, fixed_now()).unwrap().unwrap();

    let first = message.find("RTX 4070 Ti Super").unwrap();
    let second = message.find("RTX 4090").unwrap();
    assert!(first < second);
    assert!(message.contains("?ref=watch&id=1"));
    assert!(!message.contains("&amp;"));
}

#[test]
fn message_has_header_and_timestamp_footer() {
    let formatter = ReportFormatter::new().unwrap();
    let alerts = vec![alert("RTX 4090", "Best Buy", dec!(100), dec!(90), dec!(10.0), Severity::High)];

    let message = formatter.format_message(&alerts, fixed_now()).unwrap().unwrap();

    assert!(message.lines().next().unwrap().contains("Price Drop Alert"));
    assert!(message.contains("⏰ 2024-"));
}

#[test]
fn lowest_price_per_model_keeps_first_on_tie() {
    let snap = snapshot(vec![
        ("RTX 4090", vec![obs("Best Buy", dec!(1799.99)), obs("Newegg", dec!(1759.99)), obs("Amazon", dec!(1759.99))]),
        ("RTX 4080", vec![obs("Amazon", dec!(1129.99))]),
        ("RTX 5090", vec![]),
    ]);

    let lowest = lowest_prices(&snap);

    assert_eq!(lowest.len(), 2);
    assert_eq!(lowest[0].model, "RTX 4090");
    assert_eq!(lowest[0].observation.retailer, "Newegg");
    assert_eq!(lowest[0].observation.price, dec!(1759.99));
    assert_eq!(lowest[1].model, "RTX 4080");
    assert_eq!(lowest[1].observation.retailer, "Amazon");
}

#[test]
fn summary_lists_lowest_prices_with_target_comparison() {
    let formatter = ReportFormatter::new().unwrap();
    let snap = snapshot(vec![
        ("RTX 4090", vec![obs("Best Buy", dec!(1799.99)), obs("Newegg", dec!(1759.99))]),
        ("RTX 4070 Ti Super", vec![obs("Newegg", dec!(769.99))]),
        ("Arc B580", vec![obs("Amazon", dec!(249.99))]),
    ]);

    let summary = formatter
        .format_summary(&lowest_prices(&snap), &Catalog::gpus())
        .unwrap();

    assert!(summary.contains("  RTX 4090: $1759.99 @ Newegg (10% above target $1599)"));
    assert!(summary.contains("  RTX 4070 Ti Super: $769.99 @ Newegg (4% below target $799)"));
    assert!(summary.contains("  Arc B580: $249.99 @ Amazon"));
    assert!(!summary.contains("Arc B580: $249.99 @ Amazon ("));
}
