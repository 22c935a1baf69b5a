//! Demo fixture data: two clients, a three-category catalog of 25 products,
//! and three orders (one paid, one delivered, one awaiting payment).
//!
//! Used by `--seed` in dev mode and by the integration test fixtures.

use chrono::{TimeZone, Utc};
use rusqlite::{params, Connection};

use crate::auth::password::hash_password;
use crate::error::Result;

const IMG_BASE: &str =
    "https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img";

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua.";

fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("valid fixture timestamp")
        .timestamp()
}

/// (id, name, price) for the demo catalog. Categories: 1 and 5 are books,
/// 2 spans electronics and computers, the rest are computers.
const PRODUCTS: &[(i64, &str, &str)] = &[
    (1, "The Lord of the Rings", "90.5"),
    (2, "Smart TV", "2190.0"),
    (3, "Macbook Pro", "1250.0"),
    (4, "PC Gamer", "1200.0"),
    (5, "Rails for Dummies", "100.99"),
    (6, "PC Gamer Ex", "1350.0"),
    (7, "PC Gamer X", "1350.0"),
    (8, "PC Gamer Alfa", "1850.0"),
    (9, "PC Gamer Tera", "1950.0"),
    (10, "PC Gamer Y", "1700.0"),
    (11, "PC Gamer Nitro", "1450.0"),
    (12, "PC Gamer Card", "1850.0"),
    (13, "PC Gamer Plus", "1350.0"),
    (14, "PC Gamer Hera", "2250.0"),
    (15, "PC Gamer Weed", "2200.0"),
    (16, "PC Gamer Max", "2340.0"),
    (17, "PC Gamer Turbo", "1280.0"),
    (18, "PC Gamer Hot", "1450.0"),
    (19, "PC Gamer Ez", "1750.0"),
    (20, "PC Gamer Tr", "1650.0"),
    (21, "PC Gamer Tx", "1680.0"),
    (22, "PC Gamer Er", "1850.0"),
    (23, "PC Gamer Min", "2250.0"),
    (24, "PC Gamer Boo", "2350.0"),
    (25, "PC Gamer Foo", "4170.0"),
];

/// Seed the demo dataset. Idempotent: does nothing when users already exist.
pub fn seed_demo_data(conn: &Connection) -> Result<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    if count > 0 {
        tracing::info!("Database already has data, skipping seed");
        return Ok(());
    }

    let password = hash_password("123456");

    conn.execute(
        "INSERT INTO users (id, name, email, phone, birth_date, password_hash)
         VALUES (1, 'Maria Brown', 'maria@gmail.com', '988888888', '2001-07-25', ?1),
                (2, 'Alex Green', 'alex@gmail.com', '977777777', '1987-12-13', ?1)",
        [&password],
    )?;
    conn.execute_batch(
        "INSERT INTO user_roles (user_id, authority) VALUES
            (1, 'ROLE_CLIENT'),
            (2, 'ROLE_CLIENT'),
            (2, 'ROLE_ADMIN');
         INSERT INTO categories (id, name) VALUES
            (1, 'Livros'),
            (2, 'Eletrônicos'),
            (3, 'Computadores');",
    )?;

    {
        let mut stmt = conn.prepare(
            "INSERT INTO products (id, name, description, price, img_url) VALUES (?, ?, ?, ?, ?)",
        )?;
        for (id, name, price) in PRODUCTS {
            let img_url = format!("{}/{}-big.jpg", IMG_BASE, id);
            stmt.execute(params![id, name, LOREM, price, img_url])?;
        }
    }

    {
        let mut stmt = conn
            .prepare("INSERT INTO product_categories (product_id, category_id) VALUES (?, ?)")?;
        stmt.execute([1, 1])?;
        stmt.execute([2, 2])?;
        stmt.execute([2, 3])?;
        stmt.execute([5, 1])?;
        for (id, _, _) in PRODUCTS.iter().filter(|(id, _, _)| ![1, 2, 5].contains(id)) {
            stmt.execute([*id, 3])?;
        }
    }

    conn.execute(
        "INSERT INTO orders (id, moment, status, client_id) VALUES
            (1, ?1, 'PAID', 1),
            (2, ?2, 'DELIVERED', 2),
            (3, ?3, 'WAITING_PAYMENT', 1)",
        params![
            ts(2022, 7, 25, 13, 0),
            ts(2022, 7, 29, 15, 50),
            ts(2022, 8, 3, 14, 20)
        ],
    )?;
    conn.execute(
        "INSERT INTO payments (id, moment, order_id) VALUES (1, ?, 1)",
        [ts(2022, 7, 25, 15, 0)],
    )?;
    conn.execute_batch(
        "INSERT INTO order_items (order_id, product_id, quantity, price) VALUES
            (1, 1, 2, '90.5'),
            (1, 3, 1, '1250.0'),
            (2, 3, 1, '1250.0'),
            (3, 1, 1, '90.5');",
    )?;

    tracing::info!("Seeded demo data: 2 users, 25 products, 3 orders");
    Ok(())
}
