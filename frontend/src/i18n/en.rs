pub mod common {
    pub const APP_NAME: &str = "Pizzafy";
    pub const LOADING: &str = "Loading...";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "Loading";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod sidebar {
    pub const NAV_ARIA: &str = "Dashboard navigation";
    pub const DASHBOARD: &str = "Dashboard";
    pub const ORDERS: &str = "Pizza Orders";
    pub const SIGN_OUT: &str = "Sign out";
}

pub mod login_page {
    pub const TITLE: &str = "Welcome to Pizzafy";
    pub const SUBTITLE: &str = "Sign in to manage your pizza orders.";
    pub const SIGN_IN: &str = "Sign in";
}

pub mod dashboard_page {
    pub const GREETING_TEMPLATE: &str = "Hello, {}!";
    pub const SUBTITLE: &str = "Here is what is happening with your orders today.";
    pub const TOTAL_ORDERS: &str = "Total Orders";
    pub const REVENUE: &str = "Revenue";
    pub const CUSTOMERS: &str = "Customers";
    pub const AVG_ORDER_VALUE: &str = "Avg Order Value";
    pub const PIZZAS_SOLD: &str = "Pizzas Sold";
    pub const ACTIVE_ORDERS: &str = "Active Orders";
    pub const RECENT_ORDERS: &str = "Recent Orders";
    pub const VIEW_ALL: &str = "View all";
    pub const NO_ORDERS: &str = "No orders yet.";
}

pub mod orders_page {
    pub const TITLE: &str = "Pizza Orders";
    pub const SEARCH_PLACEHOLDER: &str = "Search by order ID, customer or pizza...";
    pub const SEARCH_ARIA: &str = "Search orders";
    pub const STATUS_ARIA: &str = "Filter by status";
    pub const ALL_STATUSES: &str = "All Statuses";
    pub const STATUS_ERROR_TEMPLATE: &str = "Unknown status filter: {}";
    pub const TOTAL_TEMPLATE: &str = "Total Orders: {}";
    pub const EMPTY: &str = "No orders found matching your criteria.";
    pub const COL_ID: &str = "Order ID";
    pub const COL_CUSTOMER: &str = "Customer";
    pub const COL_PIZZA: &str = "Pizza Type";
    pub const COL_QUANTITY: &str = "Quantity";
    pub const COL_DATE: &str = "Order Date";
    pub const COL_TOTAL: &str = "Total";
    pub const COL_STATUS: &str = "Status";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page not found";
    pub const BODY: &str = "Sorry, the page you are looking for does not exist.";
    pub const BACK: &str = "Back to dashboard";
}
