//! Demo dataset
//!
//! Seed data for the mock backend: the menu, a handful of historical orders,
//! the store settings and the two fixed staff accounts. Order totals follow
//! the same rule as checkout (line totals + delivery fee at creation time).

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::models::{
    AppSettings, CartItem, Category, Dish, Order, OrderStatus, Role, User, items_subtotal,
};

use super::MemoryStore;

fn users() -> Vec<User> {
    vec![
        User {
            id: "admin-user-id".into(),
            email: "admin@gourmetgo.com".into(),
            role: Role::Admin,
            name: Some("Admin User".into()),
        },
        User {
            id: "attendant-user-id".into(),
            email: "attendant@gourmetgo.com".into(),
            role: Role::Attendant,
            name: Some("Attendant User".into()),
        },
    ]
}

fn categories() -> Vec<Category> {
    vec![
        Category { id: "cat1".into(), name: "Entradas".into() },
        Category { id: "cat2".into(), name: "Pratos Principais".into() },
        Category { id: "cat3".into(), name: "Sobremesas".into() },
        Category { id: "cat4".into(), name: "Bebidas".into() },
    ]
}

fn dish(
    id: &str,
    name: &str,
    description: &str,
    price_cents: i64,
    category_id: &str,
    category_name: &str,
) -> Dish {
    Dish {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price: Decimal::new(price_cents, 2),
        image_url: format!("https://picsum.photos/seed/{}/400/300", id),
        available: true,
        category_id: category_id.into(),
        category_name: Some(category_name.into()),
    }
}

fn dishes() -> Vec<Dish> {
    vec![
        dish(
            "dish1",
            "Bruschetta Clássica",
            "Pão italiano tostado com tomates frescos, alho, manjericão e azeite extra virgem.",
            2500,
            "cat1",
            "Entradas",
        ),
        dish(
            "dish2",
            "Salada Caprese",
            "Fatias de tomate fresco, mussarela de búfala e manjericão, regados com azeite balsâmico.",
            3000,
            "cat1",
            "Entradas",
        ),
        dish(
            "dish3",
            "Filé Mignon ao Molho Madeira",
            "Medalhões de filé mignon grelhados, cobertos com molho madeira e acompanhados de risoto de parmesão.",
            7500,
            "cat2",
            "Pratos Principais",
        ),
        dish(
            "dish4",
            "Salmão Grelhado com Legumes",
            "Posta de salmão fresco grelhado na perfeição, servido com uma seleção de legumes da estação.",
            6800,
            "cat2",
            "Pratos Principais",
        ),
        dish(
            "dish5",
            "Risoto de Camarão",
            "Arroz arbóreo cremoso com camarões frescos, tomate cereja e um toque de limão siciliano.",
            7200,
            "cat2",
            "Pratos Principais",
        ),
        dish(
            "dish6",
            "Tiramisù Italiano",
            "Sobremesa italiana clássica com camadas de biscoitos champagne embebidos em café, creme de mascarpone e cacau em pó.",
            3500,
            "cat3",
            "Sobremesas",
        ),
        dish(
            "dish7",
            "Petit Gateau com Sorvete",
            "Bolo de chocolate com interior cremoso, servido quente com uma bola de sorvete de creme.",
            3200,
            "cat3",
            "Sobremesas",
        ),
        dish(
            "dish8",
            "Água Mineral (500ml)",
            "Água mineral natural sem gás.",
            500,
            "cat4",
            "Bebidas",
        ),
        dish(
            "dish9",
            "Refrigerante Lata (350ml)",
            "Coca-Cola, Guaraná Antarctica ou Fanta Laranja.",
            700,
            "cat4",
            "Bebidas",
        ),
        dish(
            "dish10",
            "Suco Natural (300ml)",
            "Laranja, Limão, Abacaxi com Hortelã.",
            1000,
            "cat4",
            "Bebidas",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    customer_name: &str,
    customer_phone: &str,
    customer_address: &str,
    items: Vec<CartItem>,
    status: OrderStatus,
    notes: Option<&str>,
    delivery_fee: Decimal,
    created_at: DateTime<Utc>,
) -> Order {
    let total_amount = items_subtotal(&items) + delivery_fee;
    Order {
        id: id.into(),
        customer_name: customer_name.into(),
        customer_phone: customer_phone.into(),
        customer_address: customer_address.into(),
        items,
        status,
        total_amount,
        notes: notes.map(Into::into),
        created_at,
        user_id: None,
    }
}

fn orders(dishes: &[Dish], settings: &AppSettings) -> Vec<Order> {
    let now = Utc::now();
    let fee = settings.delivery_fee_fixed;
    let item = |idx: usize, quantity: u32| CartItem { dish: dishes[idx].clone(), quantity };

    // Newest first, matching the head-insert convention of the order table
    vec![
        order(
            "order4",
            "Ana Costa",
            "51966665555",
            "Rua dos Andradas, 101, Porto Alegre",
            vec![item(1, 1)],
            OrderStatus::New,
            Some("Sem cebola, por favor."),
            fee,
            now,
        ),
        order(
            "order3",
            "Carlos Pereira",
            "31977776666",
            "Praça da Liberdade, 789, Belo Horizonte",
            vec![item(0, 1), item(4, 1), item(8, 2)],
            OrderStatus::Preparing,
            None,
            fee,
            now - Duration::hours(2),
        ),
        order(
            "order2",
            "Maria Oliveira",
            "21988887777",
            "Avenida Copacabana, 456, Rio de Janeiro",
            vec![item(3, 2)],
            OrderStatus::Sent,
            None,
            fee,
            now - Duration::days(1),
        ),
        order(
            "order1",
            "João Silva",
            "11999998888",
            "Rua das Flores, 123, São Paulo",
            vec![item(2, 1), item(6, 1)],
            OrderStatus::Delivered,
            Some("Entregar na portaria."),
            fee,
            now - Duration::days(2),
        ),
    ]
}

/// Build a store populated with the demo dataset
pub fn seeded_store() -> MemoryStore {
    let settings = AppSettings::default();
    let dishes = dishes();
    let orders = orders(&dishes, &settings);

    MemoryStore {
        categories: RwLock::new(categories()),
        dishes: RwLock::new(dishes),
        orders: RwLock::new(orders),
        settings: RwLock::new(settings),
        users: RwLock::new(users()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_totals_include_delivery_fee() {
        let store = seeded_store();
        let fee = store.settings.read().delivery_fee_fixed;
        for order in store.orders.read().iter() {
            assert_eq!(order.total_amount, items_subtotal(&order.items) + fee);
            assert!(!order.items.is_empty());
        }
    }

    #[test]
    fn seed_dishes_reference_seed_categories() {
        let store = seeded_store();
        let categories = store.categories.read();
        for dish in store.dishes.read().iter() {
            assert!(categories.iter().any(|c| c.id == dish.category_id));
        }
    }
}
