use crate::errors::{AppError, AppResult};
use crate::models::{
    Customer, CustomerBalanceRow, CustomerRevenueRow, DatasetCounts, InventoryTurnoverRow,
    LineProfitability, Order, OrderLine, OrderStatus, Payment, Product,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const SCHEMA_SQL: &str = include_str!("schema.sql");

static SAMPLE_PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    [
        ("S10_1678", "1969 Harley Davidson Ultimate Chopper", "Motorcycles", 7933, 48.81, 95.70),
        ("S10_1949", "1952 Alpine Renault 1300", "Classic Cars", 7305, 98.58, 214.30),
        ("S10_4962", "1962 Lancia Delta 16V", "Classic Cars", 6791, 103.42, 147.74),
        ("S12_1666", "1958 Setra Bus", "Trucks and Buses", 1579, 77.90, 136.67),
        ("S18_2238", "1998 Chrysler Plymouth Prowler", "Classic Cars", 4724, 101.51, 163.73),
        ("S18_1749", "1917 Grand Touring Sedan", "Vintage Cars", 2724, 86.70, 170.00),
        ("S18_2581", "P-51-D Mustang", "Planes", 992, 49.00, 84.48),
        ("S24_2011", "18th century schooner", "Ships", 1898, 82.34, 122.89),
        ("S18_3232", "1992 Ferrari 360 Spider red", "Classic Cars", 8347, 77.90, 169.34),
        ("S24_2840", "1958 Chevy Corvette Limited Edition", "Classic Cars", 2542, 15.91, 35.36),
    ]
    .into_iter()
    .map(|(code, name, line, stock, buy, msrp)| Product {
        code: code.to_string(),
        name: name.to_string(),
        line: line.to_string(),
        quantity_in_stock: stock,
        buy_price: buy,
        msrp,
    })
    .collect()
});

static SAMPLE_CUSTOMERS: Lazy<Vec<Customer>> = Lazy::new(|| {
    [
        (103, "Atelier graphique", "France", 21000.00),
        (112, "Signal Gift Stores", "USA", 71800.00),
        (114, "Australian Collectors, Co.", "Australia", 117300.00),
        (124, "Mini Gifts Distributors Ltd.", "USA", 210500.00),
        (128, "Blauer See Auto, Co.", "Germany", 59700.00),
        (141, "Euro+ Shopping Channel", "Spain", 227600.00),
        (148, "Dragon Souveniers, Ltd.", "Singapore", 103800.00),
        (321, "Corporate Gift Ideas Co.", "USA", 105000.00),
        (450, "The Sharp Gifts Warehouse", "USA", 77600.00),
        (496, "Kelly's Gift Shop", "New Zealand", 110000.00),
    ]
    .into_iter()
    .map(|(number, name, country, credit_limit)| Customer {
        number,
        name: name.to_string(),
        country: country.to_string(),
        credit_limit,
    })
    .collect()
});

static SAMPLE_ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    [
        (10100, "2003-01-06", OrderStatus::Shipped, 103),
        (10101, "2003-01-09", OrderStatus::Shipped, 112),
        (10103, "2003-01-29", OrderStatus::Shipped, 124),
        (10104, "2003-01-31", OrderStatus::Shipped, 141),
        (10105, "2003-02-11", OrderStatus::Shipped, 141),
        (10106, "2003-02-17", OrderStatus::Shipped, 124),
        (10107, "2003-02-24", OrderStatus::Shipped, 148),
        (10108, "2003-03-03", OrderStatus::Shipped, 124),
        (10109, "2003-03-10", OrderStatus::Shipped, 148),
        (10110, "2003-03-18", OrderStatus::Cancelled, 112),
        (10111, "2003-03-25", OrderStatus::InProcess, 103),
        (10200, "2003-12-01", OrderStatus::Shipped, 124),
    ]
    .into_iter()
    .map(|(number, date, status, customer_number)| Order {
        number,
        order_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid seed date"),
        status,
        customer_number,
    })
    .collect()
});

static SAMPLE_ORDER_LINES: Lazy<Vec<OrderLine>> = Lazy::new(|| {
    [
        (10100, "S18_1749", 30, 136.00),
        (10100, "S18_2238", 50, 150.00),
        (10101, "S10_1949", 25, 200.00),
        (10101, "S18_2581", 45, 80.00),
        (10103, "S10_4962", 26, 140.00),
        (10103, "S12_1666", 42, 130.00),
        (10104, "S12_1666", 27, 125.00),
        (10104, "S18_2238", 35, 155.00),
        (10104, "S24_2840", 20, 34.00),
        (10105, "S10_1678", 50, 90.00),
        (10105, "S18_3232", 40, 160.00),
        (10106, "S10_1949", 65, 214.30),
        (10106, "S18_3232", 70, 165.24),
        (10106, "S12_1666", 45, 133.00),
        (10107, "S10_1949", 60, 210.50),
        (10107, "S18_2238", 55, 160.00),
        (10107, "S18_3232", 62, 162.00),
        (10107, "S24_2011", 50, 120.00),
        (10108, "S18_2238", 60, 158.80),
        (10108, "S10_4962", 55, 144.50),
        (10108, "S18_1749", 50, 170.00),
        (10108, "S24_2840", 55, 34.50),
        (10109, "S10_4962", 58, 145.00),
        (10109, "S18_1749", 60, 168.00),
        (10109, "S10_1678", 55, 92.00),
        (10109, "S18_2581", 65, 84.00),
        (10109, "S24_2840", 60, 35.00),
        (10110, "S18_2581", 60, 83.00),
        (10111, "S24_2011", 25, 119.00),
        (10200, "S24_2011", 35, 120.00),
        (10200, "S18_2238", 15, 163.00),
    ]
    .into_iter()
    .map(|(order_number, product_code, quantity_ordered, price_each)| OrderLine {
        order_number,
        product_code: product_code.to_string(),
        quantity_ordered,
        price_each,
    })
    .collect()
});

static SAMPLE_PAYMENTS: Lazy<Vec<Payment>> = Lazy::new(|| {
    [
        (103, 6066.78),
        (112, 32641.98),
        (124, 111654.40),
        (141, 40206.20),
        (141, 50000.00),
        (148, 10000.00),
    ]
    .into_iter()
    .map(|(customer_number, amount)| Payment {
        customer_number,
        amount,
    })
    .collect()
});

#[derive(Debug)]
pub struct Database {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl Database {
    /// Opens an existing database file without touching its contents.
    pub fn open(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::NotFound(format!(
                "No database file at {}",
                path.display()
            )));
        }
        let conn = open_connection(path).map_err(|err| AppError::StorageInit(err.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
            db_path: path.to_path_buf(),
        })
    }

    /// Opens the database at `path`, seeding the sample dataset first if the
    /// file does not exist yet.
    pub fn bootstrap(path: &Path) -> AppResult<Self> {
        if path.exists() {
            return Self::open(path);
        }
        tracing::info!(path = %path.display(), "database missing, seeding sample dataset");
        Self::rebuild(path)
    }

    /// Drops any existing database at `path` and recreates it with the fixed
    /// sample dataset. The new file is assembled in a process-unique staging
    /// file and renamed into place, so concurrent callers and readers never
    /// observe a half-seeded store.
    pub fn rebuild(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| AppError::StorageInit(err.to_string()))?;
            }
        }

        let staging = staging_path(path);
        if staging.exists() {
            fs::remove_file(&staging).map_err(|err| AppError::StorageInit(err.to_string()))?;
        }

        let build = || -> rusqlite::Result<()> {
            let conn = open_connection(&staging)?;
            conn.execute_batch(SCHEMA_SQL)?;
            seed_sample_data(&conn)?;
            Ok(())
        };
        if let Err(err) = build() {
            let _ = fs::remove_file(&staging);
            return Err(AppError::StorageInit(err.to_string()));
        }

        fs::rename(&staging, path).map_err(|err| AppError::StorageInit(err.to_string()))?;
        tracing::info!(path = %path.display(), "sample dataset seeded");
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    pub fn dataset_counts(&self) -> AppResult<DatasetCounts> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| AppError::Internal("database mutex poisoned".to_string()))?;
        let count = |table: &str| -> AppResult<i64> {
            let query = format!("SELECT COUNT(1) FROM {}", table);
            conn.query_row(&query, [], |row| row.get(0))
                .map_err(AppError::from)
        };
        Ok(DatasetCounts {
            products: count("products")?,
            customers: count("customers")?,
            orders: count("orders")?,
            order_lines: count("orderdetails")?,
            payments: count("payments")?,
        })
    }

    /// Revenue, cost of goods sold, and gross profit per product line over
    /// shipped orders. No defined row order.
    pub fn profitability_by_product_line(&self) -> AppResult<Vec<LineProfitability>> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| AppError::Internal("database mutex poisoned".to_string()))?;
        let mut stmt = conn.prepare(
            "SELECT p.productLine,
                    SUM(od.quantityOrdered * od.priceEach) AS revenue,
                    SUM(od.quantityOrdered * p.buyPrice) AS costOfGoodsSold,
                    SUM(od.quantityOrdered * (od.priceEach - p.buyPrice)) AS grossProfit
             FROM products p
             JOIN orderdetails od ON od.productCode = p.productCode
             JOIN orders o ON o.orderNumber = od.orderNumber
             WHERE o.status = ?1
             GROUP BY p.productLine",
        )?;
        let rows = stmt.query_map([OrderStatus::Shipped.as_str()], parse_line_profitability_row)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// Units sold versus stock for every product, including never-ordered
    /// ones. Ordered by capital tied up in inventory, descending. The
    /// turnover ratio is NULL for zero-stock products.
    pub fn inventory_turnover(&self) -> AppResult<Vec<InventoryTurnoverRow>> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| AppError::Internal("database mutex poisoned".to_string()))?;
        let mut stmt = conn.prepare(
            "WITH sales AS (
                 SELECT productCode, SUM(quantityOrdered) AS totalSold
                 FROM orderdetails
                 GROUP BY productCode
             )
             SELECT p.productCode,
                    p.productName,
                    p.productLine,
                    p.quantityInStock,
                    p.buyPrice,
                    p.quantityInStock * p.buyPrice AS inventoryValue,
                    COALESCE(s.totalSold, 0) AS totalUnitsSold,
                    CAST(COALESCE(s.totalSold, 0) AS REAL) / NULLIF(p.quantityInStock, 0)
                        AS turnoverRatio
             FROM products p
             LEFT JOIN sales s ON s.productCode = p.productCode
             ORDER BY inventoryValue DESC",
        )?;
        let rows = stmt.query_map([], parse_inventory_turnover_row)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// Purchases (orders not cancelled), payments, and the resulting
    /// outstanding balance for every customer with a positive credit limit.
    /// No defined row order.
    pub fn customer_balances(&self) -> AppResult<Vec<CustomerBalanceRow>> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| AppError::Internal("database mutex poisoned".to_string()))?;
        let mut stmt = conn.prepare(
            "WITH customer_sales AS (
                 SELECT o.customerNumber AS customerNumber,
                        SUM(od.quantityOrdered * od.priceEach) AS totalPurchased
                 FROM orders o
                 JOIN orderdetails od ON od.orderNumber = o.orderNumber
                 WHERE o.status != ?1
                 GROUP BY o.customerNumber
             ),
             customer_payments AS (
                 SELECT customerNumber, SUM(amount) AS totalPaid
                 FROM payments
                 GROUP BY customerNumber
             )
             SELECT c.customerNumber,
                    c.customerName,
                    c.creditLimit,
                    COALESCE(cs.totalPurchased, 0) AS totalPurchased,
                    COALESCE(cp.totalPaid, 0) AS totalPaid,
                    COALESCE(cs.totalPurchased, 0) - COALESCE(cp.totalPaid, 0)
                        AS outstandingBalance
             FROM customers c
             LEFT JOIN customer_sales cs ON cs.customerNumber = c.customerNumber
             LEFT JOIN customer_payments cp ON cp.customerNumber = c.customerNumber
             WHERE c.creditLimit > 0",
        )?;
        let rows = stmt.query_map([OrderStatus::Cancelled.as_str()], parse_customer_balance_row)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// Total revenue per customer over shipped orders, highest first.
    pub fn revenue_by_customer(&self) -> AppResult<Vec<CustomerRevenueRow>> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| AppError::Internal("database mutex poisoned".to_string()))?;
        let mut stmt = conn.prepare(
            "SELECT c.customerNumber,
                    c.customerName,
                    SUM(od.quantityOrdered * od.priceEach) AS totalRevenue
             FROM customers c
             JOIN orders o ON o.customerNumber = c.customerNumber
             JOIN orderdetails od ON od.orderNumber = o.orderNumber
             WHERE o.status = ?1
             GROUP BY c.customerNumber, c.customerName
             ORDER BY totalRevenue DESC",
        )?;
        let rows = stmt.query_map([OrderStatus::Shipped.as_str()], parse_customer_revenue_row)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }
}

fn open_connection(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "foreign_keys", true)?;
    Ok(conn)
}

fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "database".to_string());
    path.with_file_name(format!("{}.seed-{}", file_name, std::process::id()))
}

fn seed_sample_data(conn: &Connection) -> rusqlite::Result<()> {
    for product in SAMPLE_PRODUCTS.iter() {
        conn.execute(
            "INSERT INTO products (productCode, productName, productLine, quantityInStock, buyPrice, MSRP)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                product.code,
                product.name,
                product.line,
                product.quantity_in_stock,
                product.buy_price,
                product.msrp,
            ],
        )?;
    }

    for customer in SAMPLE_CUSTOMERS.iter() {
        conn.execute(
            "INSERT INTO customers (customerNumber, customerName, country, creditLimit)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                customer.number,
                customer.name,
                customer.country,
                customer.credit_limit,
            ],
        )?;
    }

    for order in SAMPLE_ORDERS.iter() {
        conn.execute(
            "INSERT INTO orders (orderNumber, orderDate, status, customerNumber)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                order.number,
                order.order_date,
                order.status.as_str(),
                order.customer_number,
            ],
        )?;
    }

    for line in SAMPLE_ORDER_LINES.iter() {
        conn.execute(
            "INSERT INTO orderdetails (orderNumber, productCode, quantityOrdered, priceEach)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                line.order_number,
                line.product_code,
                line.quantity_ordered,
                line.price_each,
            ],
        )?;
    }

    for payment in SAMPLE_PAYMENTS.iter() {
        conn.execute(
            "INSERT INTO payments (customerNumber, amount) VALUES (?1, ?2)",
            params![payment.customer_number, payment.amount],
        )?;
    }

    Ok(())
}

fn parse_line_profitability_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<LineProfitability> {
    Ok(LineProfitability {
        product_line: row.get(0)?,
        revenue: row.get(1)?,
        cost_of_goods_sold: row.get(2)?,
        gross_profit: row.get(3)?,
    })
}

fn parse_inventory_turnover_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<InventoryTurnoverRow> {
    Ok(InventoryTurnoverRow {
        product_code: row.get(0)?,
        product_name: row.get(1)?,
        product_line: row.get(2)?,
        quantity_in_stock: row.get(3)?,
        buy_price: row.get(4)?,
        inventory_value: row.get(5)?,
        total_units_sold: row.get(6)?,
        turnover_ratio: row.get(7)?,
    })
}

fn parse_customer_balance_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CustomerBalanceRow> {
    Ok(CustomerBalanceRow {
        customer_number: row.get(0)?,
        customer_name: row.get(1)?,
        credit_limit: row.get(2)?,
        total_purchased: row.get(3)?,
        total_paid: row.get(4)?,
        outstanding_balance: row.get(5)?,
    })
}

fn parse_customer_revenue_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CustomerRevenueRow> {
    Ok(CustomerRevenueRow {
        customer_number: row.get(0)?,
        customer_name: row.get(1)?,
        total_revenue: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::Database;

    #[test]
    fn rebuild_seeds_expected_row_counts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("finance.db");
        let db = Database::rebuild(&db_path).expect("rebuild");

        let counts = db.dataset_counts().expect("counts");
        assert_eq!(counts.products, 10);
        assert_eq!(counts.customers, 10);
        assert_eq!(counts.orders, 12);
        assert_eq!(counts.order_lines, 31);
        assert_eq!(counts.payments, 6);
    }

    #[test]
    fn rebuild_twice_yields_equivalent_dataset() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("finance.db");

        let first = Database::rebuild(&db_path).expect("first rebuild");
        let first_counts = first.dataset_counts().expect("first counts");
        let first_revenue = first.revenue_by_customer().expect("first revenue");
        drop(first);

        let second = Database::rebuild(&db_path).expect("second rebuild");
        let second_counts = second.dataset_counts().expect("second counts");
        let second_revenue = second.revenue_by_customer().expect("second revenue");

        assert_eq!(first_counts, second_counts);
        assert_eq!(first_revenue.len(), second_revenue.len());
        for (a, b) in first_revenue.iter().zip(second_revenue.iter()) {
            assert_eq!(a.customer_number, b.customer_number);
            assert!((a.total_revenue - b.total_revenue).abs() < 1e-9);
        }
    }

    #[test]
    fn open_reports_not_found_for_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.db");
        let err = Database::open(&missing).expect_err("should not open");
        assert!(err.to_string().starts_with("NOT_FOUND"));
    }

    #[test]
    fn bootstrap_reuses_an_existing_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("finance.db");
        let db = Database::rebuild(&db_path).expect("rebuild");

        {
            let conn = db.conn.lock().expect("db lock");
            conn.execute("DELETE FROM payments", []).expect("delete payments");
        }
        drop(db);

        let reopened = Database::bootstrap(&db_path).expect("bootstrap");
        let counts = reopened.dataset_counts().expect("counts");
        assert_eq!(counts.payments, 0, "bootstrap must not reseed an existing file");
        assert_eq!(counts.orders, 12);
    }

    #[test]
    fn profitability_counts_only_shipped_orders() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("finance.db");
        let db = Database::rebuild(&db_path).expect("rebuild");

        let rows = db.profitability_by_product_line().expect("profitability");
        let planes = rows
            .iter()
            .find(|row| row.product_line == "Planes")
            .expect("planes line");

        // Order 10110 (cancelled) holds 60 units of S18_2581 at 83.00; only
        // the shipped lines 45 @ 80.00 and 65 @ 84.00 may count.
        assert!((planes.revenue - 9060.0).abs() < 1e-6);
        assert!((planes.cost_of_goods_sold - 110.0 * 49.0).abs() < 1e-6);
        assert!((planes.gross_profit - (planes.revenue - planes.cost_of_goods_sold)).abs() < 1e-6);
    }

    #[test]
    fn turnover_ratio_is_null_for_zero_stock_products() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("finance.db");
        let db = Database::rebuild(&db_path).expect("rebuild");

        {
            let conn = db.conn.lock().expect("db lock");
            conn.execute(
                "INSERT INTO products (productCode, productName, productLine, quantityInStock, buyPrice, MSRP)
                 VALUES ('S99_0001', 'Sold-out prototype', 'Classic Cars', 0, 10.00, 20.00)",
                [],
            )
            .expect("insert product");
        }

        let rows = db.inventory_turnover().expect("turnover");
        let sold_out = rows
            .iter()
            .find(|row| row.product_code == "S99_0001")
            .expect("sold-out product present");
        assert_eq!(sold_out.total_units_sold, 0);
        assert!(sold_out.turnover_ratio.is_none());
        assert_eq!(sold_out.inventory_value, 0.0);
    }

    #[test]
    fn turnover_is_ordered_by_inventory_value_descending() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("finance.db");
        let db = Database::rebuild(&db_path).expect("rebuild");

        let rows = db.inventory_turnover().expect("turnover");
        assert_eq!(rows.len(), 10);
        for pair in rows.windows(2) {
            assert!(pair[0].inventory_value >= pair[1].inventory_value);
        }
    }

    #[test]
    fn balances_are_zero_for_customers_with_no_activity() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("finance.db");
        let db = Database::rebuild(&db_path).expect("rebuild");

        let rows = db.customer_balances().expect("balances");
        let idle = rows
            .iter()
            .find(|row| row.customer_number == 450)
            .expect("customer 450 present");
        assert_eq!(idle.total_purchased, 0.0);
        assert_eq!(idle.total_paid, 0.0);
        assert_eq!(idle.outstanding_balance, 0.0);
    }

    #[test]
    fn balances_exclude_cancelled_but_include_in_process_orders() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("finance.db");
        let db = Database::rebuild(&db_path).expect("rebuild");

        let rows = db.customer_balances().expect("balances");

        // Customer 112's only other order (10110) is cancelled.
        let signal = rows
            .iter()
            .find(|row| row.customer_number == 112)
            .expect("customer 112 present");
        assert!((signal.total_purchased - 8600.0).abs() < 1e-6);

        // Customer 103 has a shipped order (11580.00) plus an in-process
        // order worth 25 * 119.00.
        let atelier = rows
            .iter()
            .find(|row| row.customer_number == 103)
            .expect("customer 103 present");
        assert!((atelier.total_purchased - (11580.0 + 2975.0)).abs() < 1e-6);
    }

    #[test]
    fn revenue_by_customer_is_ordered_descending() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("finance.db");
        let db = Database::rebuild(&db_path).expect("rebuild");

        let rows = db.revenue_by_customer().expect("revenue");
        assert!(!rows.is_empty());
        for pair in rows.windows(2) {
            assert!(pair[0].total_revenue >= pair[1].total_revenue);
        }
        assert_eq!(rows[0].customer_number, 124);
    }

    #[test]
    fn queries_return_empty_results_on_empty_tables() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("finance.db");
        let db = Database::rebuild(&db_path).expect("rebuild");

        {
            let conn = db.conn.lock().expect("db lock");
            conn.execute("DELETE FROM orderdetails", []).expect("clear lines");
            conn.execute("DELETE FROM payments", []).expect("clear payments");
            conn.execute("DELETE FROM orders", []).expect("clear orders");
            conn.execute("DELETE FROM customers", []).expect("clear customers");
            conn.execute("DELETE FROM products", []).expect("clear products");
        }

        assert!(db.profitability_by_product_line().expect("profitability").is_empty());
        assert!(db.inventory_turnover().expect("turnover").is_empty());
        assert!(db.customer_balances().expect("balances").is_empty());
        assert!(db.revenue_by_customer().expect("revenue").is_empty());
    }
}
