// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the views, the flows and the backend REST API.
// Everything here is plain serde data, so it compiles without Leptos.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};

/// Upload path the backend assigns when a seller did not provide a picture
pub const DEFAULT_PRODUCT_IMAGE: &str = "/uploads/default-product.png";

/// Shown on a card when the listing carries no seller name
pub const UNKNOWN_SELLER: &str = "unknown";

/// Identifier as sent by the backend (numeric or string keys are both accepted)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Login form contents, also the body of `POST /api/login`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub remember: bool,
}

/// Registration form contents (the confirmation never leaves the browser)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl RegistrationForm {
    /// Whether the confirmation field repeats the password exactly
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm
    }

    /// Request body for `POST /api/register`
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Body of `POST /api/register`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// User record returned by the login endpoint
///
/// The backend owns this shape; the well-known fields are typed and
/// everything else is kept in `extra` so it survives a storage round trip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Authenticated identity: bearer token plus the user it belongs to
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// How long a committed session should outlive the current tab
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persistence {
    /// Dropped when the tab closes
    #[default]
    Tab,
    /// Kept across browser restarts ("Keep my session active")
    Durable,
}

impl Persistence {
    pub fn from_remember(remember: bool) -> Self {
        if remember {
            Persistence::Durable
        } else {
            Persistence::Tab
        }
    }
}

/// Response of `POST /api/login`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `POST /api/register`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error envelope the backend uses on non-2xx responses
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Marketplace listing (read-only on the client)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Accepts `19.99` as well as `"19.99"`
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub seller: Option<String>,
}

// A `null` listing field must not sink the whole product list
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Price with exactly two decimals, rounding half away from zero
    pub fn price_display(&self) -> String {
        let rounded = self
            .price
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }

    /// Picture to render, `None` when missing, empty or the upload placeholder
    pub fn display_image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .filter(|src| !src.is_empty() && *src != DEFAULT_PRODUCT_IMAGE)
    }

    pub fn seller_display(&self) -> &str {
        match self.seller.as_deref() {
            Some(seller) if !seller.is_empty() => seller,
            _ => UNKNOWN_SELLER,
        }
    }

    /// Glyph drawn in place of a missing picture
    pub fn category_icon(&self) -> &'static str {
        category_icon(&self.category)
    }
}

/// Glyph for a category name, `◆` when the category has none
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Electronics" => "⬡",
        "Collectibles" => "◈",
        "Accessories" => "◉",
        "Software" => "⬢",
        _ => "◆",
    }
}

/// Category filter applied to the fetched product list
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Tabs offered on the marketplace page, in display order
    pub fn tabs() -> Vec<CategoryFilter> {
        vec![
            CategoryFilter::All,
            CategoryFilter::Category("Electronics".to_string()),
            CategoryFilter::Category("Collectibles".to_string()),
        ]
    }

    /// Exact-match predicate on the product category
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => product.category == *name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Category(name) => name,
        }
    }

    /// Tab caption, e.g. `[ELECTRONICS]`
    pub fn tab_caption(&self) -> String {
        format!("[{}]", self.label().to_uppercase())
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == "All" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }
}
