//! Category listing for the browse page.

use serde::{Deserialize, Serialize};

/// Category name meaning "show a random sample".
pub const SURPRISE_ME: &str = "SORPRENDEME";

/// Category name meaning "no category filter".
pub const EVERYTHING: &str = "TODO";

/// Categories offered when the API cannot list them.
pub const KNOWN_CATEGORIES: [&str; 13] = [
    "ELECTRÓNICA",
    "ROPA",
    "CALZADO",
    "HOGAR",
    "DEPORTES",
    "BELLEZA",
    "JUGUETES",
    "LIBROS",
    "ALIMENTOS",
    "OFICINA",
    "AUTOMOTRIZ",
    "MASCOTAS",
    "GENERAL",
];

const SURPRISE_ME_IMAGE: &str = "/api/images/categories/Aleatorio.svg";
const EVERYTHING_IMAGE: &str = "/api/images/categories/Todo.svg";

/// A product category with its item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
    #[serde(rename = "totalProductos", default)]
    pub total_items: u64,
}

impl Category {
    /// Create a category entry.
    pub fn new(name: impl Into<String>, image: Option<String>, total_items: u64) -> Self {
        Self {
            name: name.into(),
            image,
            total_items,
        }
    }

    /// Whether this is one of the two synthetic entries.
    pub fn is_featured(&self) -> bool {
        matches!(
            CategoryChoice::from_name(&self.name),
            CategoryChoice::SurpriseMe | CategoryChoice::Everything
        )
    }

    /// Build the browse list from the server categories.
    ///
    /// Prepends the "surprise me" and "everything" entries, each counting the
    /// sum of all category totals, and turns relative image paths into
    /// absolute URLs under `api_url`.
    pub fn with_specials(server: Vec<Category>, api_url: &str) -> Vec<Category> {
        let total: u64 = server.iter().map(|c| c.total_items).sum();

        let mut list = Vec::with_capacity(server.len() + 2);
        list.extend(special_entries(api_url, total));
        list.extend(server.into_iter().map(|mut c| {
            c.image = c.image.map(|img| absolute_url(api_url, &img));
            c
        }));
        list
    }

    /// Static list used when the category endpoint fails.
    pub fn fallback(api_url: &str) -> Vec<Category> {
        special_entries(api_url, 0)
            .into_iter()
            .chain(KNOWN_CATEGORIES.iter().map(|name| Category::new(*name, None, 0)))
            .collect()
    }
}

fn special_entries(api_url: &str, total: u64) -> [Category; 2] {
    [
        Category::new(
            SURPRISE_ME,
            Some(absolute_url(api_url, SURPRISE_ME_IMAGE)),
            total,
        ),
        Category::new(
            EVERYTHING,
            Some(absolute_url(api_url, EVERYTHING_IMAGE)),
            total,
        ),
    ]
}

fn absolute_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

/// What selecting a category name means for the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    /// Fetch a random sample instead of a filtered page.
    SurpriseMe,
    /// Drop the category facet.
    Everything,
    /// Filter by this category.
    Named(String),
}

impl CategoryChoice {
    /// Interpret a category name.
    pub fn from_name(name: &str) -> Self {
        match name {
            SURPRISE_ME => CategoryChoice::SurpriseMe,
            EVERYTHING => CategoryChoice::Everything,
            other => CategoryChoice::Named(other.to_string()),
        }
    }

    /// The facet value to store, if any.
    pub fn into_facet(self) -> Option<String> {
        match self {
            CategoryChoice::SurpriseMe => Some(SURPRISE_ME.to_string()),
            CategoryChoice::Everything => None,
            CategoryChoice::Named(name) if name.trim().is_empty() => None,
            CategoryChoice::Named(name) => Some(name),
        }
    }
}
