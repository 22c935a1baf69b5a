use rusqlite::Connection;

/// Initialize the database schema.
///
/// Prices are stored as TEXT and parsed to `Decimal` at the row boundary;
/// moments are UNIX seconds UTC.
pub fn init_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        -- Clients (email is the login identity and the basis for order ownership)
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            phone TEXT,
            birth_date TEXT,
            password_hash TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_users_email ON users(email);

        CREATE TABLE IF NOT EXISTS user_roles (
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            authority TEXT NOT NULL CHECK (authority IN ('ROLE_CLIENT', 'ROLE_ADMIN')),
            PRIMARY KEY (user_id, authority)
        );

        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            price TEXT NOT NULL,
            img_url TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_products_name ON products(name);

        CREATE TABLE IF NOT EXISTS product_categories (
            product_id INTEGER NOT NULL REFERENCES products(id) ON DELETE CASCADE,
            category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            PRIMARY KEY (product_id, category_id)
        );

        CREATE TABLE IF NOT EXISTS orders (
            id INTEGER PRIMARY KEY,
            moment INTEGER NOT NULL,
            status TEXT NOT NULL CHECK (status IN
                ('WAITING_PAYMENT', 'PAID', 'SHIPPED', 'DELIVERED', 'CANCELED')),
            client_id INTEGER NOT NULL REFERENCES users(id)
        );
        CREATE INDEX IF NOT EXISTS idx_orders_client ON orders(client_id);

        -- At most one payment per order; presence signals payment completion
        CREATE TABLE IF NOT EXISTS payments (
            id INTEGER PRIMARY KEY,
            moment INTEGER NOT NULL,
            order_id INTEGER NOT NULL UNIQUE REFERENCES orders(id) ON DELETE CASCADE
        );

        -- price is the unit price captured at purchase time
        CREATE TABLE IF NOT EXISTS order_items (
            order_id INTEGER NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
            product_id INTEGER NOT NULL,
            quantity INTEGER NOT NULL,
            price TEXT NOT NULL,
            PRIMARY KEY (order_id, product_id)
        );
        CREATE INDEX IF NOT EXISTS idx_order_items_order ON order_items(order_id);
        "#,
    )
}
