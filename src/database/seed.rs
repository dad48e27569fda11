use rust_decimal::Decimal;

use crate::{
    error::{AppError, Result},
    models::{NewProduct, NewUser, UserRole},
    store::{ProductStore, UserStore},
};

struct DemoUser {
    name: &'static str,
    email: &'static str,
    password: &'static str,
    role: UserRole,
}

const DEMO_USERS: [DemoUser; 2] = [
    DemoUser {
        name: "Admin User",
        email: "admin@example.com",
        password: "123456",
        role: UserRole::Admin,
    },
    DemoUser {
        name: "John Doe",
        email: "john@doe.com",
        password: "123123",
        role: UserRole::User,
    },
];

// (name, brand, category, price in cents, stock)
const DEMO_PRODUCTS: [(&str, &str, &str, i64, i32); 4] = [
    ("Airpods Wireless Bluetooth Headphones", "Apple", "Electronics", 8999, 10),
    ("Cannon EOS 80D DSLR Camera", "Cannon", "Electronics", 92999, 5),
    ("Logitech G-Series Gaming Mouse", "Logitech", "Electronics", 4999, 7),
    ("Classic Cotton Shirt", "Basics", "Clothing", 1999, 0),
];

/// Inserts the demo accounts that are missing and, on an empty catalog, a
/// handful of products owned by the admin.
pub async fn seed_demo_data(
    products: &dyn ProductStore,
    users: &dyn UserStore,
    hash_cost: u32,
) -> Result<()> {
    let mut admin_id = None;

    for demo in &DEMO_USERS {
        let user = match users.find_by_email(demo.email).await? {
            Some(existing) => existing,
            None => {
                let password_hash = bcrypt::hash(demo.password, hash_cost).map_err(|e| {
                    AppError::InternalError(format!("Password hashing failed: {}", e))
                })?;
                let created = users
                    .insert(NewUser {
                        name: demo.name.to_string(),
                        email: demo.email.to_string(),
                        password_hash,
                        role: demo.role,
                    })
                    .await?;
                tracing::info!("Seeded demo user {}", created.email);
                created
            }
        };

        if user.is_admin() && admin_id.is_none() {
            admin_id = Some(user.id);
        }
    }

    let Some(owner) = admin_id else {
        return Ok(());
    };

    if products.count(&Default::default()).await? > 0 {
        return Ok(());
    }

    for (name, brand, category, cents, stock) in DEMO_PRODUCTS {
        products
            .insert(NewProduct {
                user_id: owner,
                name: name.to_string(),
                image: format!("/images/{}.jpg", brand.to_lowercase()),
                brand: brand.to_string(),
                category: category.to_string(),
                description: format!("{} by {}", name, brand),
                price: Decimal::new(cents, 2),
                count_in_stock: stock,
            })
            .await?;
    }

    tracing::info!("Seeded {} demo products", DEMO_PRODUCTS.len());

    Ok(())
}
