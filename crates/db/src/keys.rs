//! Storage key names shared with the browser build of the app.

pub const TOKEN: &str = "token";
pub const USER_EMAIL: &str = "userEmail";
pub const AUTH_USER: &str = "auth:user";
pub const MEAL_PLANS: &str = "mealPlans";
pub const LAST_SELECTED_PLAN_ID: &str = "lastSelectedPlanId";
pub const REMEMBERED_EMAIL: &str = "rememberedEmail";
pub const THEME: &str = "theme";
pub const SHOPPING_ITEMS: &str = "shoppingItems";

pub fn plan_items(plan_id: i64) -> String {
    format!("plan:{plan_id}:items")
}
