// web_app/paths.rs - Route and endpoint paths
//
// Every path the views navigate to or call lives here so the router, the
// flows and the proxy agree on them.

/// Default post-login landing route (the marketplace)
pub const LANDING: &str = "/";
pub const MARKETPLACE: &str = "/marketplace";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";

/// Query parameter read by the login page to pick the post-login destination
pub const REDIRECT_PARAM: &str = "redirect";

/// Backend endpoints, relative to the API base URL
pub mod api {
    pub const LOGIN: &str = "/api/login";
    pub const REGISTER: &str = "/api/register";
    pub const PRODUCTS: &str = "/api/products";
}

/// Detail route a product card links to
pub fn product(id: impl std::fmt::Display) -> String {
    format!("/product/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_path() {
        assert_eq!(product(7), "/product/7");
        assert_eq!(product("a1b2"), "/product/a1b2");
    }

    #[test]
    fn test_api_paths_share_prefix() {
        for path in [api::LOGIN, api::REGISTER, api::PRODUCTS] {
            assert!(path.starts_with("/api/"), "{}", path);
        }
    }
}
