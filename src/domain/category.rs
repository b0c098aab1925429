use serde::{Deserialize, Serialize};

/// Categorises expenses for aggregation, trends, and recommendations.
///
/// `id` is opaque and stable; expenses reference it rather than the
/// category itself, so a record may outlive its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }
}

/// Placeholder shown when an expense references a category id that no
/// longer exists in the active set. Resolution must never fail.
pub fn unknown_category() -> Category {
    Category::new("unknown", "Desconhecida", "#6B7280", "Wallet")
}

/// Looks up a category by id, degrading to the unknown placeholder for
/// dangling references.
pub fn resolve_category(categories: &[Category], id: &str) -> Category {
    categories
        .iter()
        .find(|category| category.id == id)
        .cloned()
        .unwrap_or_else(unknown_category)
}

/// The stock category set new trackers start from. Ids line up with the
/// interpreter's keyword hint table.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("1", "Mercado", "#10B981", "ShoppingBag"),
        Category::new("2", "Alimentação", "#F97316", "Utensils"),
        Category::new("3", "Transporte", "#3B82F6", "Bus"),
        Category::new("4", "Moradia", "#8B5CF6", "Home"),
        Category::new("5", "Trabalho", "#6B7280", "Briefcase"),
        Category::new("6", "Saúde", "#EF4444", "Heart"),
        Category::new("7", "Lazer", "#EC4899", "Tv"),
        Category::new("8", "Viagem", "#F59E0B", "Plane"),
        Category::new("9", "Finanças", "#059669", "Landmark"),
        Category::new("10", "Outros", "#6B7280", "Wallet"),
        Category::new("11", "Presentes", "#D946EF", "Gift"),
    ]
}
