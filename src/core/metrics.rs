//! Derived metrics - dashboard figures folded from a snapshot.
//!
//! Every function here is pure and recomputes from scratch on each call.
//! Collections are UI-sized, so nothing is cached.

use crate::{
    entities::{Customer, CustomerTier, PaymentStatus, Product, Repair, RepairStatus, Sale, Supplier},
    store::AppState,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Headline figures for the dashboard page.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of recorded sales
    pub total_sales: usize,
    /// Sum of all sale totals
    pub total_revenue: f64,
    /// Number of registered customers
    pub total_customers: usize,
    /// Repairs neither completed nor cancelled
    pub active_repairs: usize,
    /// Repairs marked completed
    pub completed_repairs: usize,
    /// Products at or below minimum stock
    pub low_stock_items: usize,
}

/// Repair counts by status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairStats {
    /// All repairs
    pub total: usize,
    /// Repairs not yet started
    pub pending: usize,
    /// Repairs being worked on
    pub in_progress: usize,
    /// Repairs marked completed
    pub completed: usize,
    /// Repairs closed without work
    pub cancelled: usize,
}

impl RepairStats {
    /// Count for a single status.
    #[must_use]
    pub const fn count(&self, status: RepairStatus) -> usize {
        match status {
            RepairStatus::Pending => self.pending,
            RepairStatus::InProgress => self.in_progress,
            RepairStatus::Completed => self.completed,
            RepairStatus::Cancelled => self.cancelled,
        }
    }
}

/// Sale counts by payment status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PaymentStats {
    /// Settled sales
    pub paid: usize,
    /// Sales awaiting payment
    pub pending: usize,
    /// Sales past their payment date
    pub overdue: usize,
}

/// Sum of all sale totals.
#[must_use]
pub fn total_revenue(sales: &[Sale]) -> f64 {
    sales.iter().map(|s| s.total).sum()
}

/// Products whose stock is at or below their minimum.
#[must_use]
pub fn low_stock(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_low_stock()).collect()
}

/// Repairs that are neither completed nor cancelled.
#[must_use]
pub fn active_repairs(repairs: &[Repair]) -> Vec<&Repair> {
    repairs.iter().filter(|r| r.is_active()).collect()
}

/// Tier for a cumulative spend: ≥1000 VIP, ≥500 Gold, ≥100 Silver, else Bronze.
#[must_use]
pub fn customer_tier(total_spent: f64) -> CustomerTier {
    CustomerTier::from_spend(total_spent)
}

/// Sum of every customer's `total_spent`.
#[must_use]
pub fn customer_spending_total(customers: &[Customer]) -> f64 {
    customers.iter().map(|c| c.total_spent).sum()
}

/// Mean spend per customer; 0 when there are no customers.
#[must_use]
pub fn average_spending(customers: &[Customer]) -> f64 {
    if customers.is_empty() {
        return 0.0;
    }
    // Cast safety: customer counts are UI-sized.
    #[allow(clippy::cast_precision_loss)]
    let count = customers.len() as f64;
    customer_spending_total(customers) / count
}

/// Customers who have spent anything.
#[must_use]
pub fn active_customers(customers: &[Customer]) -> usize {
    customers.iter().filter(|c| c.is_active()).count()
}

/// A customer's spend divided by their number of sales; 0 with no sales.
#[must_use]
pub fn average_sale_value(customer: &Customer, sales: &[Sale]) -> f64 {
    let count = sales.iter().filter(|s| s.customer_id == customer.id).count();
    if count == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = count as f64;
    customer.total_spent / count
}

/// Retail value of all stock on hand.
#[must_use]
pub fn inventory_value(products: &[Product]) -> f64 {
    products.iter().map(Product::stock_value).sum()
}

/// Repair counts per status.
#[must_use]
pub fn repair_stats(repairs: &[Repair]) -> RepairStats {
    repairs.iter().fold(
        RepairStats {
            total: repairs.len(),
            ..RepairStats::default()
        },
        |mut stats, repair| {
            match repair.status {
                RepairStatus::Pending => stats.pending += 1,
                RepairStatus::InProgress => stats.in_progress += 1,
                RepairStatus::Completed => stats.completed += 1,
                RepairStatus::Cancelled => stats.cancelled += 1,
            }
            stats
        },
    )
}

/// Sale counts per payment status.
#[must_use]
pub fn sales_by_status(sales: &[Sale]) -> PaymentStats {
    sales
        .iter()
        .fold(PaymentStats::default(), |mut stats, sale| {
            match sale.payment_status {
                PaymentStatus::Paid => stats.paid += 1,
                PaymentStatus::Pending => stats.pending += 1,
                PaymentStatus::Overdue => stats.overdue += 1,
            }
            stats
        })
}

/// Number of product names listed across all suppliers.
#[must_use]
pub fn supplier_product_total(suppliers: &[Supplier]) -> usize {
    suppliers.iter().map(|s| s.products.len()).sum()
}

/// Product names per supplier, rounded to the nearest whole number; 0 with no suppliers.
#[must_use]
pub fn average_products_per_supplier(suppliers: &[Supplier]) -> usize {
    if suppliers.is_empty() {
        return 0;
    }
    let total = supplier_product_total(suppliers);
    // Round half up in integer arithmetic
    (2 * total + suppliers.len()) / (2 * suppliers.len())
}

/// The last `limit` sales, newest first.
#[must_use]
pub fn recent_sales(sales: &[Sale], limit: usize) -> Vec<&Sale> {
    sales.iter().rev().take(limit).collect()
}

/// The last `limit` repair tickets, newest first.
#[must_use]
pub fn recent_repairs(repairs: &[Repair], limit: usize) -> Vec<&Repair> {
    repairs.iter().rev().take(limit).collect()
}

/// One entry in a customer's history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Activity<'a> {
    /// A purchase, dated by its sale date
    Sale(&'a Sale),
    /// A repair ticket, dated by when it was booked
    Repair(&'a Repair),
}

impl Activity<'_> {
    /// When this entry happened.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Sale(sale) => sale.date,
            Self::Repair(repair) => repair.created_at,
        }
    }
}

/// A customer's sales and repairs merged into one history, newest first,
/// truncated to `limit` entries.
///
/// Entries with the same timestamp keep sales before repairs, each in
/// collection order.
#[must_use]
pub fn customer_activity<'a>(
    state: &'a AppState,
    customer_id: &str,
    limit: usize,
) -> Vec<Activity<'a>> {
    let mut activity: Vec<Activity<'a>> = state
        .sales
        .iter()
        .filter(|s| s.customer_id == customer_id)
        .map(Activity::Sale)
        .chain(
            state
                .repairs
                .iter()
                .filter(|r| r.customer_id == customer_id)
                .map(Activity::Repair),
        )
        .collect();
    activity.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    activity.truncate(limit);
    activity
}

/// Headline figures for the whole snapshot.
#[must_use]
pub fn dashboard_stats(state: &AppState) -> DashboardStats {
    let repairs = repair_stats(&state.repairs);
    DashboardStats {
        total_sales: state.sales.len(),
        total_revenue: total_revenue(&state.sales),
        total_customers: state.customers.len(),
        active_repairs: repairs.pending + repairs.in_progress,
        completed_repairs: repairs.completed,
        low_stock_items: low_stock(&state.products).len(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::seed::mock_state;
    use crate::test_utils::*;
    use chrono::TimeZone;

    #[test]
    fn test_total_revenue_of_seed() {
        let state = mock_state();
        assert_close(total_revenue(&state.sales), 389.98);
    }

    #[test]
    fn test_total_revenue_empty() {
        assert_eq!(total_revenue(&[]), 0.0);
    }

    #[test]
    fn test_low_stock_set_is_exact() {
        let products = vec![
            product_with_stock("a", 3, 10),
            product_with_stock("b", 15, 5),
            product_with_stock("c", 5, 5),
        ];
        let ids: Vec<&str> = low_stock(&products).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_low_stock_of_seed() {
        let state = mock_state();
        let low = low_stock(&state.products);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Samsung Galaxy S23 Battery");
    }

    #[test]
    fn test_active_repairs_excludes_closed() {
        let repairs: Vec<Repair> = RepairStatus::ALL
            .iter()
            .enumerate()
            .map(|(i, status)| repair_with_status(&i.to_string(), *status))
            .collect();
        let active = active_repairs(&repairs);
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|r| r.status.is_active()));
    }

    #[test]
    fn test_customer_tier_thresholds() {
        assert_eq!(customer_tier(1000.0), CustomerTier::Vip);
        assert_eq!(customer_tier(500.0), CustomerTier::Gold);
        assert_eq!(customer_tier(100.0), CustomerTier::Silver);
        assert_eq!(customer_tier(0.0), CustomerTier::Bronze);
    }

    #[test]
    fn test_average_spending() {
        assert_eq!(average_spending(&[]), 0.0);
        let customers = vec![customer_with_spend("1", 100.0), customer_with_spend("2", 300.0)];
        assert_eq!(average_spending(&customers), 200.0);
        assert_eq!(customer_spending_total(&customers), 400.0);
    }

    #[test]
    fn test_active_customers_and_sale_average() {
        let state = mock_state();
        let mut customers = state.customers.clone();
        customers.push(customer_with_spend("3", 0.0));
        assert_eq!(active_customers(&customers), 2);

        let alice = state.customer("1").unwrap();
        assert_close(average_sale_value(alice, &state.sales), 1299.97);
        assert_eq!(average_sale_value(&customers[2], &state.sales), 0.0);
    }

    #[test]
    fn test_inventory_value() {
        let state = mock_state();
        // 299.99*15 + 89.99*3 + 199.99*8
        assert_close(inventory_value(&state.products), 6369.74);
    }

    #[test]
    fn test_repair_stats() {
        let state = mock_state();
        let stats = repair_stats(&state.repairs);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.count(RepairStatus::Pending), 0);
    }

    #[test]
    fn test_sales_by_status() {
        let stats = sales_by_status(&mock_state().sales);
        assert_eq!(
            stats,
            PaymentStats {
                paid: 1,
                pending: 1,
                overdue: 0
            }
        );
    }

    #[test]
    fn test_supplier_product_counts() {
        let state = mock_state();
        assert_eq!(supplier_product_total(&state.suppliers), 4);
        assert_eq!(average_products_per_supplier(&state.suppliers), 2);
        assert_eq!(average_products_per_supplier(&[]), 0);

        let mut odd = state.suppliers;
        odd[0].products.push("iPhone 12 Screen".to_string());
        // 5 / 2 = 2.5 rounds to 3
        assert_eq!(average_products_per_supplier(&odd), 3);
    }

    #[test]
    fn test_recent_sales_newest_first() {
        let state = mock_state();
        let recent = recent_sales(&state.sales, 5);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].invoice_number, "INV-2024-002");
        assert_eq!(recent_sales(&state.sales, 1).len(), 1);
    }

    #[test]
    fn test_recent_repairs_newest_first() {
        let state = mock_state();
        let recent = recent_repairs(&state.repairs, 5);
        let ids: Vec<&str> = recent.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(recent_repairs(&state.repairs, 1)[0].id, "2");
        assert!(recent_repairs(&state.repairs, 0).is_empty());
    }

    #[test]
    fn test_customer_activity_interleaves_sales_and_repairs() {
        let mut state = mock_state();
        let mut later = repair_with_status("3", RepairStatus::Pending);
        later.created_at = Utc.with_ymd_and_hms(2024, 2, 20, 0, 0, 0).unwrap();
        state.repairs.push(later);

        let activity = customer_activity(&state, "1", 10);
        let kinds: Vec<(&str, &str)> = activity
            .iter()
            .map(|a| match a {
                Activity::Sale(s) => ("sale", s.id.as_str()),
                Activity::Repair(r) => ("repair", r.id.as_str()),
            })
            .collect();
        // Repair 3 (Feb 20), sale 1 (Feb 15), repair 1 (Feb 10)
        assert_eq!(kinds, vec![("repair", "3"), ("sale", "1"), ("repair", "1")]);
        assert!(activity.windows(2).all(|w| w[0].timestamp() >= w[1].timestamp()));

        assert_eq!(customer_activity(&state, "1", 2).len(), 2);
        assert!(customer_activity(&state, "missing", 10).is_empty());
    }

    #[test]
    fn test_dashboard_stats() {
        let stats = dashboard_stats(&mock_state());
        assert_eq!(stats.total_sales, 2);
        assert_close(stats.total_revenue, 389.98);
        assert_eq!(stats.total_customers, 2);
        assert_eq!(stats.active_repairs, 1);
        assert_eq!(stats.completed_repairs, 1);
        assert_eq!(stats.low_stock_items, 1);
    }

    #[test]
    fn test_dashboard_stats_empty_state() {
        assert_eq!(dashboard_stats(&AppState::default()), DashboardStats::default());
    }
}
