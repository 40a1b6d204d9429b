use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Shipped,
    Resolved,
    InProcess,
    OnHold,
    Disputed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shipped => "Shipped",
            Self::Resolved => "Resolved",
            Self::InProcess => "In Process",
            Self::OnHold => "On Hold",
            Self::Disputed => "Disputed",
            Self::Cancelled => "Cancelled",
        }
    }
}

// ─── Entities ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub code: String,
    pub name: String,
    pub line: String,
    pub quantity_in_stock: i64,
    pub buy_price: f64,
    pub msrp: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub number: i64,
    pub name: String,
    pub country: String,
    pub credit_limit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub number: i64,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    pub customer_number: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub order_number: i64,
    pub product_code: String,
    pub quantity_ordered: i64,
    pub price_each: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub customer_number: i64,
    pub amount: f64,
}

// ─── Query rows ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineProfitability {
    pub product_line: String,
    pub revenue: f64,
    pub cost_of_goods_sold: f64,
    pub gross_profit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTurnoverRow {
    pub product_code: String,
    pub product_name: String,
    pub product_line: String,
    pub quantity_in_stock: i64,
    pub buy_price: f64,
    pub inventory_value: f64,
    pub total_units_sold: i64,
    /// `None` when the product has no stock to turn over.
    pub turnover_ratio: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBalanceRow {
    pub customer_number: i64,
    pub customer_name: String,
    pub credit_limit: f64,
    pub total_purchased: f64,
    pub total_paid: f64,
    pub outstanding_balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRevenueRow {
    pub customer_number: i64,
    pub customer_name: String,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetCounts {
    pub products: i64,
    pub customers: i64,
    pub orders: i64,
    pub order_lines: i64,
    pub payments: i64,
}

// ─── Report views ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLineMargin {
    pub product_line: String,
    pub revenue: f64,
    pub cost_of_goods_sold: f64,
    pub gross_profit: f64,
    pub margin_pct: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_revenue: f64,
    pub total_gross_profit: f64,
    pub overall_margin_pct: Option<f64>,
    pub lines: Vec<ProductLineMargin>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditUtilization {
    pub customer_number: i64,
    pub customer_name: String,
    pub credit_limit: f64,
    pub outstanding_balance: f64,
    pub utilization_pct: Option<f64>,
    pub high_risk: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRiskReport {
    pub customers: Vec<CreditUtilization>,
    /// High-risk subset, sorted descending by utilization.
    pub high_risk: Vec<CreditUtilization>,
    pub high_risk_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParetoRow {
    pub rank: usize,
    pub customer_number: i64,
    pub customer_name: String,
    pub total_revenue: f64,
    pub cumulative_revenue: f64,
    pub cumulative_pct: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParetoReport {
    pub rows: Vec<ParetoRow>,
    pub total_revenue: f64,
    pub top_quintile_count: usize,
    pub top_quintile_share_pct: f64,
}
