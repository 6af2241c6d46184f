//! Built-in order dataset used when no external source is configured.

use crate::order::{Order, OrderStatus};

fn order(
    id: &str,
    customer_name: &str,
    pizza_type: &str,
    quantity: u32,
    order_date: &str,
    status: OrderStatus,
    total: f64,
) -> Order {
    Order {
        id: id.to_string(),
        customer_name: customer_name.to_string(),
        pizza_type: pizza_type.to_string(),
        quantity,
        order_date: order_date.to_string(),
        status,
        total: Some(total),
    }
}

/// Eight orders (`PZA001`..`PZA008`) spread over two days, covering all
/// five statuses.
pub fn sample_orders() -> Vec<Order> {
    use OrderStatus::*;

    vec![
        order("PZA001", "John Doe", "Margherita", 2, "2024-01-20 14:30", Delivered, 24.99),
        order("PZA002", "Jane Smith", "Pepperoni", 1, "2024-01-20 15:45", Preparing, 18.5),
        order("PZA003", "Mike Johnson", "Veggie Supreme", 3, "2024-01-20 16:20", OutForDelivery, 45.99),
        order("PZA004", "Sarah Wilson", "BBQ Chicken", 1, "2024-01-20 17:15", Pending, 22.75),
        order("PZA005", "Tom Brown", "Hawaiian", 2, "2024-01-20 18:00", Delivered, 36.5),
        order("PZA006", "Lisa Davis", "Meat Lovers", 1, "2024-01-20 19:30", Cancelled, 28.99),
        order("PZA007", "Chris Lee", "Margherita", 4, "2024-01-21 12:15", Preparing, 49.96),
        order("PZA008", "Amy Taylor", "Veggie Supreme", 1, "2024-01-21 13:45", OutForDelivery, 19.99),
    ]
}
