//! The built-in query sets.
//!
//! Literal SQL for both catalog variants. The text is sent to MySQL untouched,
//! so vendor functions (`YEAR`, `MONTH`, `LAG ... OVER`) stay as written.

use super::QueryEntry;

/// Ten single-table aggregations over the flattened `ro_table`.
pub(super) const CORE: &[QueryEntry] = &[
    QueryEntry {
        label: "1. Top 10 highest revenue-generating products",
        sql: "SELECT product_id, SUM(total_revenue) AS total_revenue FROM ro_table \
              GROUP BY product_id ORDER BY total_revenue DESC LIMIT 10;",
    },
    QueryEntry {
        label: "2. Top 5 cities with highest profit margins",
        sql: "SELECT city, (SUM(profit) / SUM(total_revenue)) * 100 AS profit_margin FROM ro_table \
              GROUP BY city ORDER BY profit_margin DESC LIMIT 5;",
    },
    QueryEntry {
        label: "3. Total discount given for each category",
        sql: "SELECT category, SUM(discount_amount) AS total_discount FROM ro_table \
              GROUP BY category;",
    },
    QueryEntry {
        label: "4. Average sale price per product category",
        sql: "SELECT category, AVG(sale_price) AS avg_sale_price FROM ro_table \
              GROUP BY category;",
    },
    QueryEntry {
        label: "5. Region with the highest average sale price",
        sql: "SELECT region, AVG(sale_price) AS avg_sale_price FROM ro_table \
              GROUP BY region ORDER BY avg_sale_price DESC LIMIT 1;",
    },
    QueryEntry {
        label: "6. Total profit per category",
        sql: "SELECT category, SUM(profit) AS total_profit FROM ro_table GROUP BY category;",
    },
    QueryEntry {
        label: "7. Top 3 segments with highest quantity of orders",
        sql: "SELECT segment, SUM(quantity) AS total_quantity FROM ro_table \
              GROUP BY segment ORDER BY total_quantity DESC LIMIT 3;",
    },
    QueryEntry {
        label: "8. Average discount percentage given per region",
        sql: "SELECT region, AVG(discount_percent) AS avg_discount FROM ro_table GROUP BY region;",
    },
    QueryEntry {
        label: "9. Product category with highest total profit",
        sql: "SELECT category, SUM(profit) AS total_profit FROM ro_table \
              GROUP BY category ORDER BY total_profit DESC LIMIT 1;",
    },
    QueryEntry {
        label: "10. Total revenue generated per year",
        sql: "SELECT YEAR(order_date) AS year, SUM(total_revenue) AS total_revenue FROM ro_table \
              GROUP BY YEAR(order_date) ORDER BY year;",
    },
];

/// Twenty questions over the normalized `orders` / `products` pair.
pub(super) const EXTENDED: &[QueryEntry] = &[
    QueryEntry {
        label: "1. Top 10 highest revenue-generating products",
        sql: "SELECT p.product_id, SUM(p.total_revenue) AS total_revenue \
              FROM products p JOIN orders o ON p.product_id = o.product_id \
              GROUP BY p.product_id ORDER BY total_revenue DESC LIMIT 10;",
    },
    QueryEntry {
        label: "2. Top 5 cities with highest profit margins",
        sql: "SELECT o.city, (SUM(p.profit) / SUM(p.total_revenue)) * 100 AS profit_margin \
              FROM orders o JOIN products p ON o.product_id = p.product_id \
              GROUP BY o.city ORDER BY profit_margin DESC LIMIT 5;",
    },
    QueryEntry {
        label: "3. Total discount given for each category",
        sql: "SELECT p.category, SUM(p.discount_amount) AS total_discount \
              FROM products p GROUP BY p.category;",
    },
    QueryEntry {
        label: "4. Average sale price per product category",
        sql: "SELECT p.category, AVG(p.sale_price) AS avg_sale_price \
              FROM products p GROUP BY p.category;",
    },
    QueryEntry {
        label: "5. Region with the highest average sale price",
        sql: "SELECT o.region, AVG(p.sale_price) AS avg_sale_price \
              FROM orders o JOIN products p ON o.product_id = p.product_id \
              GROUP BY o.region ORDER BY avg_sale_price DESC LIMIT 1;",
    },
    QueryEntry {
        label: "6. Total profit per category",
        sql: "SELECT p.category, SUM(p.profit) AS total_profit \
              FROM products p GROUP BY p.category;",
    },
    QueryEntry {
        label: "7. Top 3 segments with highest quantity of orders",
        sql: "SELECT o.segment, SUM(o.quantity) AS total_quantity \
              FROM orders o GROUP BY o.segment ORDER BY total_quantity DESC LIMIT 3;",
    },
    QueryEntry {
        label: "8. Average discount percentage given per region",
        sql: "SELECT o.region, AVG(p.discount_percent) AS avg_discount \
              FROM orders o JOIN products p ON o.product_id = p.product_id \
              GROUP BY o.region;",
    },
    QueryEntry {
        label: "9. Product category with highest total profit",
        sql: "SELECT p.category, SUM(p.profit) AS total_profit \
              FROM products p GROUP BY p.category ORDER BY total_profit DESC LIMIT 1;",
    },
    QueryEntry {
        label: "10. Total revenue generated per year",
        sql: "SELECT YEAR(o.order_date) AS year, SUM(p.total_revenue) AS total_revenue \
              FROM orders o JOIN products p ON o.product_id = p.product_id \
              GROUP BY YEAR(o.order_date) ORDER BY year;",
    },
    QueryEntry {
        label: "11. Top 5 products with highest discount percentage",
        sql: "SELECT p.product_id, p.category, p.sub_category, \
              (p.discount_amount / p.list_price) * 100 AS discount_ratio \
              FROM products p ORDER BY discount_ratio DESC LIMIT 5;",
    },
    QueryEntry {
        label: "12. Month with highest total revenue and top category",
        sql: "SELECT MONTH(o.order_date) AS month, p.category, SUM(p.total_revenue) AS total_revenue \
              FROM orders o JOIN products p ON o.product_id = p.product_id \
              GROUP BY month, p.category ORDER BY total_revenue DESC LIMIT 1;",
    },
    QueryEntry {
        label: "13. City with highest average profit per order",
        sql: "SELECT o.city, AVG(p.profit) AS avg_profit_per_order \
              FROM orders o JOIN products p ON o.product_id = p.product_id \
              GROUP BY o.city ORDER BY avg_profit_per_order DESC LIMIT 1;",
    },
    QueryEntry {
        label: "14. Top 3 states with highest revenue growth",
        sql: "SELECT o.state, YEAR(o.order_date) AS year, SUM(p.total_revenue) AS total_revenue, \
              LAG(SUM(p.total_revenue)) OVER (PARTITION BY o.state ORDER BY YEAR(o.order_date)) AS prev_year_revenue, \
              (SUM(p.total_revenue) - LAG(SUM(p.total_revenue)) OVER (PARTITION BY o.state ORDER BY YEAR(o.order_date))) AS revenue_growth \
              FROM orders o JOIN products p ON o.product_id = p.product_id \
              GROUP BY o.state, year ORDER BY revenue_growth DESC LIMIT 3;",
    },
    QueryEntry {
        label: "15. Segment with most expensive average order",
        sql: "SELECT o.segment, AVG(p.sale_price * o.quantity) AS avg_order_value \
              FROM orders o JOIN products p ON o.product_id = p.product_id \
              GROUP BY o.segment ORDER BY avg_order_value DESC LIMIT 1;",
    },
    QueryEntry {
        label: "16. Top 5 most frequently ordered product categories",
        sql: "SELECT p.category, COUNT(o.order_id) AS order_count \
              FROM orders o JOIN products p ON o.product_id = p.product_id \
              GROUP BY p.category ORDER BY order_count DESC LIMIT 5;",
    },
    QueryEntry {
        label: "17. Top 3 states where profit margin is below 5%",
        sql: "SELECT o.state, (SUM(p.profit) / SUM(p.total_revenue)) * 100 AS profit_margin \
              FROM orders o JOIN products p ON o.product_id = p.product_id \
              GROUP BY o.state HAVING profit_margin < 5 ORDER BY profit_margin ASC LIMIT 3;",
    },
    QueryEntry {
        label: "18. Top 5 cities with highest product variety",
        sql: "SELECT o.city, COUNT(DISTINCT o.product_id) AS unique_products_ordered \
              FROM orders o GROUP BY o.city ORDER BY unique_products_ordered DESC LIMIT 5;",
    },
    QueryEntry {
        label: "19. Most discounted product category per region",
        sql: "SELECT o.region, p.category, AVG(p.discount_percent) AS avg_discount \
              FROM orders o JOIN products p ON o.product_id = p.product_id \
              GROUP BY o.region, p.category ORDER BY avg_discount DESC LIMIT 1;",
    },
    QueryEntry {
        label: "20. Top 3 cities with highest cost-to-revenue ratio",
        sql: "SELECT o.city, (SUM(p.total_cost) / SUM(p.total_revenue)) * 100 AS cost_to_revenue_ratio \
              FROM orders o JOIN products p ON o.product_id = p.product_id \
              GROUP BY o.city ORDER BY cost_to_revenue_ratio DESC LIMIT 3;",
    },
];
