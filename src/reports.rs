use crate::db::Database;
use crate::errors::AppResult;
use crate::models::{
    CreditRiskReport, CreditUtilization, CustomerBalanceRow, CustomerRevenueRow, FinancialSummary,
    InventoryTurnoverRow, LineProfitability, ParetoReport, ParetoRow, ProductLineMargin,
};
use std::cmp::Ordering;
use std::sync::Arc;

/// Customers above this share of their credit limit are flagged.
pub const HIGH_RISK_UTILIZATION_PCT: f64 = 50.0;

/// Pairs each analytical query with its derived-metric post-processing.
/// One method per report consumed by the presentation layer.
pub struct ReportCore {
    db: Arc<Database>,
}

impl ReportCore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn financial_summary(&self) -> AppResult<FinancialSummary> {
        let rows = self.db.profitability_by_product_line()?;
        Ok(summarize_profitability(rows))
    }

    pub fn inventory_turnover(&self) -> AppResult<Vec<InventoryTurnoverRow>> {
        self.db.inventory_turnover()
    }

    pub fn credit_risk(&self) -> AppResult<CreditRiskReport> {
        let rows = self.db.customer_balances()?;
        Ok(assess_credit_risk(rows))
    }

    pub fn revenue_concentration(&self) -> AppResult<ParetoReport> {
        let rows = self.db.revenue_by_customer()?;
        Ok(build_pareto(rows))
    }
}

/// Ratio as a percentage. `None` when the denominator is zero: undefined
/// metrics propagate explicitly instead of clamping or raising.
pub fn pct_of(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        None
    } else {
        Some(part / whole * 100.0)
    }
}

pub fn summarize_profitability(rows: Vec<LineProfitability>) -> FinancialSummary {
    let total_revenue: f64 = rows.iter().map(|row| row.revenue).sum();
    let total_gross_profit: f64 = rows.iter().map(|row| row.gross_profit).sum();
    let lines = rows
        .into_iter()
        .map(|row| ProductLineMargin {
            margin_pct: pct_of(row.gross_profit, row.revenue),
            product_line: row.product_line,
            revenue: row.revenue,
            cost_of_goods_sold: row.cost_of_goods_sold,
            gross_profit: row.gross_profit,
        })
        .collect();

    FinancialSummary {
        total_revenue,
        total_gross_profit,
        overall_margin_pct: pct_of(total_gross_profit, total_revenue),
        lines,
    }
}

pub fn assess_credit_risk(rows: Vec<CustomerBalanceRow>) -> CreditRiskReport {
    let customers: Vec<CreditUtilization> = rows
        .into_iter()
        .map(|row| {
            let utilization_pct = pct_of(row.outstanding_balance, row.credit_limit);
            CreditUtilization {
                high_risk: utilization_pct
                    .map(|pct| pct > HIGH_RISK_UTILIZATION_PCT)
                    .unwrap_or(false),
                customer_number: row.customer_number,
                customer_name: row.customer_name,
                credit_limit: row.credit_limit,
                outstanding_balance: row.outstanding_balance,
                utilization_pct,
            }
        })
        .collect();

    let mut high_risk: Vec<CreditUtilization> = customers
        .iter()
        .filter(|customer| customer.high_risk)
        .cloned()
        .collect();
    high_risk.sort_by(|a, b| {
        b.utilization_pct
            .partial_cmp(&a.utilization_pct)
            .unwrap_or(Ordering::Equal)
    });

    CreditRiskReport {
        high_risk_count: high_risk.len(),
        customers,
        high_risk,
    }
}

pub fn build_pareto(rows: Vec<CustomerRevenueRow>) -> ParetoReport {
    let total_revenue: f64 = rows.iter().map(|row| row.total_revenue).sum();
    let mut cumulative = 0.0;
    let rows: Vec<ParetoRow> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            cumulative += row.total_revenue;
            ParetoRow {
                rank: index + 1,
                customer_number: row.customer_number,
                customer_name: row.customer_name,
                total_revenue: row.total_revenue,
                cumulative_revenue: cumulative,
                cumulative_pct: pct_of(cumulative, total_revenue),
            }
        })
        .collect();

    // floor(n * 0.2): the top fifth of the ranked customers.
    let top_quintile_count = rows.len() / 5;
    let top_quintile_share_pct = if top_quintile_count == 0 {
        0.0
    } else {
        rows[top_quintile_count - 1].cumulative_pct.unwrap_or(0.0)
    };

    ParetoReport {
        total_revenue,
        top_quintile_count,
        top_quintile_share_pct,
        rows,
    }
}
