//! Report formatting.
//!
//! Turns metrics and records into display strings. Missing optional values
//! render as fallbacks: `-` for an unassigned technician, the estimate for a
//! repair without an actual cost.

use crate::{
    core::metrics::{self, Activity, DashboardStats},
    entities::{Product, Repair, Sale},
    store::AppState,
};
use std::fmt::Write as _;

/// Formats a dollar amount with thousands separators, e.g. `$1,299.97` or `-$25.50`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    // Amounts that round to zero print unsigned
    let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// One line per low-stock product, e.g. `Battery (BAT-001): 3 left, minimum 10`.
#[must_use]
pub fn format_low_stock_alert(product: &Product) -> String {
    format!(
        "{} ({}): {} left, minimum {}",
        product.name, product.sku, product.stock, product.min_stock
    )
}

/// `INV-2024-001 | Alice Johnson | $299.99 | paid`
#[must_use]
pub fn format_sale_summary(sale: &Sale) -> String {
    format!(
        "{} | {} | {} | {}",
        sale.invoice_number,
        sale.customer_name,
        format_currency(sale.total),
        sale.payment_status
    )
}

/// `#2 Samsung Galaxy S23 | in-progress | tech: Sarah Employee | $89.99`
#[must_use]
pub fn format_repair_summary(repair: &Repair) -> String {
    format!(
        "#{} {} | {} | tech: {} | {}",
        repair.id,
        repair.device,
        repair.status,
        repair.technician_name.as_deref().unwrap_or("-"),
        format_currency(repair.billed_cost())
    )
}

/// One line of a customer's history, dated, e.g.
/// `2024-02-15 sale INV-2024-001 | Alice Johnson | $299.99 | paid`.
#[must_use]
pub fn format_activity(activity: &Activity<'_>) -> String {
    let date = activity.timestamp().format("%Y-%m-%d");
    match activity {
        Activity::Sale(sale) => format!("{date} sale {}", format_sale_summary(sale)),
        Activity::Repair(repair) => format!("{date} repair {}", format_repair_summary(repair)),
    }
}

/// Headline figures as a short multi-line block.
#[must_use]
pub fn format_stats(stats: &DashboardStats) -> String {
    format!(
        "Revenue: {}\nSales: {}\nCustomers: {}\nActive repairs: {} ({} completed)\nLow stock items: {}",
        format_currency(stats.total_revenue),
        stats.total_sales,
        stats.total_customers,
        stats.active_repairs,
        stats.completed_repairs,
        stats.low_stock_items
    )
}

/// The full dashboard: headline figures, recent sales, recent repairs and
/// low-stock alerts. Empty sections are left out.
#[must_use]
pub fn format_dashboard(state: &AppState, shop_name: &str, recent_limit: usize) -> String {
    let mut out = String::new();
    let greeting = state
        .user
        .as_ref()
        .map_or_else(String::new, |u| format!(" ({} as {})", u.name, u.role));
    let _ = writeln!(out, "== {shop_name}{greeting} ==");
    let _ = writeln!(out, "{}", format_stats(&metrics::dashboard_stats(state)));

    let recent = metrics::recent_sales(&state.sales, recent_limit);
    if !recent.is_empty() {
        let _ = writeln!(out, "-- Recent sales --");
        for sale in recent {
            let _ = writeln!(out, "{}", format_sale_summary(sale));
        }
    }

    let repairs = metrics::recent_repairs(&state.repairs, recent_limit);
    if !repairs.is_empty() {
        let _ = writeln!(out, "-- Recent repairs --");
        for repair in repairs {
            let _ = writeln!(out, "{}", format_repair_summary(repair));
        }
    }

    let low = metrics::low_stock(&state.products);
    if !low.is_empty() {
        let _ = writeln!(out, "-- Low stock alerts --");
        for product in low {
            let _ = writeln!(out, "{}", format_low_stock_alert(product));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::RepairStatus;
    use crate::seed::mock_state;
    use crate::test_utils::repair_with_status;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(89.99), "$89.99");
        assert_eq!(format_currency(1299.97), "$1,299.97");
        assert_eq!(format_currency(1_234_567.5), "$1,234,567.50");
        assert_eq!(format_currency(-25.5), "-$25.50");
        assert_eq!(format_currency(389.98), "$389.98");
    }

    #[test]
    fn test_format_currency_rounds_before_sign() {
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(-0.004_9), "$0.00");
        assert_eq!(format_currency(-0.005_1), "-$0.01");
        assert_eq!(format_currency(-1000.0), "-$1,000.00");
    }

    #[test]
    fn test_format_low_stock_alert() {
        let state = mock_state();
        assert_eq!(
            format_low_stock_alert(state.product("2").unwrap()),
            "Samsung Galaxy S23 Battery (SGS23-BAT-001): 3 left, minimum 10"
        );
    }

    #[test]
    fn test_format_sale_summary() {
        let state = mock_state();
        assert_eq!(
            format_sale_summary(&state.sales[0]),
            "INV-2024-001 | Alice Johnson | $299.99 | paid"
        );
    }

    #[test]
    fn test_format_repair_summary_fallbacks() {
        let mut repair = repair_with_status("5", RepairStatus::Pending);
        repair.device = "Pixel 8".to_string();
        repair.estimated_cost = 120.0;
        repair.technician_name = None;
        assert_eq!(
            format_repair_summary(&repair),
            "#5 Pixel 8 | pending | tech: - | $120.00"
        );
    }

    #[test]
    fn test_format_dashboard() {
        let out = format_dashboard(&mock_state(), "ManageMate", 5);
        assert!(out.starts_with("== ManageMate (John Admin as admin) =="));
        assert!(out.contains("Revenue: $389.98"));
        assert!(out.contains("Active repairs: 1 (1 completed)"));
        assert!(out.contains("INV-2024-002 | Bob Smith | $89.99 | pending"));
        assert!(out.contains("Samsung Galaxy S23 Battery (SGS23-BAT-001)"));
    }

    #[test]
    fn test_format_dashboard_recent_repairs() {
        let out = format_dashboard(&mock_state(), "ManageMate", 5);
        let section = out.find("-- Recent repairs --").unwrap();
        let newest = out.find("#2 Samsung Galaxy S23").unwrap();
        let oldest = out.find("#1 iPhone 14").unwrap();
        assert!(section < newest && newest < oldest);
        assert!(section < out.find("-- Low stock alerts --").unwrap());

        let out = format_dashboard(&mock_state(), "ManageMate", 1);
        assert!(out.contains("#2 Samsung Galaxy S23"));
        assert!(!out.contains("#1 iPhone 14"));
    }

    #[test]
    fn test_format_activity() {
        let state = mock_state();
        let activity = metrics::customer_activity(&state, "1", 10);
        assert_eq!(
            format_activity(&activity[0]),
            "2024-02-15 sale INV-2024-001 | Alice Johnson | $299.99 | paid"
        );
        assert!(format_activity(&activity[1]).starts_with("2024-02-10 repair #1 "));
    }

    #[test]
    fn test_format_dashboard_empty_state() {
        let out = format_dashboard(&AppState::default(), "Shop", 5);
        assert!(out.starts_with("== Shop =="));
        assert!(out.contains("Low stock items: 0"));
        assert!(!out.contains("-- Recent sales --"));
        assert!(!out.contains("-- Recent repairs --"));
        assert!(!out.contains("-- Low stock alerts --"));
    }
}
