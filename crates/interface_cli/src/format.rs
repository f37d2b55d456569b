//! Display formatting for quote output
//!
//! Renders ZMW amounts with thousands grouping ("K25,000.00") and lays out
//! the price breakdown as the summary screen shows it.

use core_kernel::Money;
use domain_rating::PriceBreakdown;

/// Formats a money amount with the currency symbol and thousands grouping
pub fn format_zmw(money: Money) -> String {
    let rounded = money.round_to_currency().amount();
    let negative = rounded.is_sign_negative();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{:0<2}", f)),
        None => (text, "00".to_string()),
    };

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        money.currency().symbol(),
        grouped,
        frac_part
    )
}

/// Renders the breakdown as the multi-line quote summary
pub fn format_breakdown(breakdown: &PriceBreakdown) -> String {
    let months = breakdown.cover_period.months();
    let mut out = String::new();
    out.push_str(&format!(
        "Base Premium:        {}\n",
        format_zmw(breakdown.base_price)
    ));
    out.push_str(&format!(
        "Additional Charges: +{}\n",
        format_zmw(breakdown.additional_charges)
    ));
    out.push_str(&format!(
        "Excess Discount:    -{}\n",
        format_zmw(breakdown.discount)
    ));
    out.push_str(&format!(
        "Total for {} month{}: {}\n",
        months,
        if months > 1 { "s" } else { "" },
        format_zmw(breakdown.total_price)
    ));
    out.push_str(&format!(
        "Monthly Payment:     {}\n",
        format_zmw(breakdown.monthly_price)
    ));
    out
}
