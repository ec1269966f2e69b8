//! the storefront http server
pub mod preview;
pub mod query;
pub mod routes;

use {
    crate::{
        catalog::Catalog,
        error::Result,
        getopt,
        serve::routes::{
            AppState, StorefrontSettings, categories_handler, css_handler, featured_handler,
            index_handler, js_handler, list_themes_handler, stats_handler, tag_groups_handler,
            tags_handler, theme_detail_handler, theme_page_handler,
        },
    },
    rocket::{Build, Rocket, routes},
    std::{net::IpAddr, sync::Arc},
    tracing::info,
};

/// the storefront server
pub struct StorefrontServer {
    /// the address to bind to
    address: IpAddr,
    /// the port to listen on
    port: u16,
    /// the number of rocket workers
    workers: usize,
    /// the catalog being served
    catalog: Arc<Catalog>,
    /// presentation settings
    settings: StorefrontSettings,
}

impl StorefrontServer {
    /// make a server for a catalog
    pub fn new(catalog: Arc<Catalog>, settings: StorefrontSettings) -> Self {
        Self {
            address: IpAddr::from([127, 0, 0, 1]),
            port: 23795,
            workers: 4,
            catalog,
            settings,
        }
    }

    /// make a server using the `server` and `storefront` config sections
    pub fn from_config(catalog: Arc<Catalog>) -> Result<Self> {
        let address: IpAddr = getopt!(server.address).parse()?;

        Ok(Self::new(catalog, StorefrontSettings::from_config())
            .bind(address, getopt!(server.port))
            .workers(getopt!(server.workers)))
    }

    /// set the address and port
    pub fn bind(mut self, address: IpAddr, port: u16) -> Self {
        self.address = address;
        self.port = port;
        self
    }

    /// set the number of workers
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// build the rocket instance without launching it
    pub fn build(&self) -> Rocket<Build> {
        let figment = rocket::Config::figment()
            .merge(("address", self.address))
            .merge(("port", self.port))
            .merge(("workers", self.workers))
            .merge(("log_level", "off"))
            .merge(("cli_colors", false));

        rocket::custom(figment)
            .manage(AppState::new(self.catalog.clone(), self.settings.clone()))
            .mount(
                "/",
                routes![
                    index_handler,
                    theme_page_handler,
                    css_handler,
                    js_handler,
                    list_themes_handler,
                    theme_detail_handler,
                    categories_handler,
                    tags_handler,
                    tag_groups_handler,
                    featured_handler,
                    stats_handler,
                ],
            )
    }

    /// serve until shut down
    pub async fn serve(self) -> Result<()> {
        info!("spectrum running at http://{}:{}", self.address, self.port);
        info!("Serving {} themes", self.catalog.len());

        self.build().launch().await?;

        info!("Server shut down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        rocket::{http::Status, local::blocking::Client},
        serde_json::Value,
    };

    fn client() -> Client {
        let catalog = Arc::new(Catalog::embedded().expect("embedded catalog should parse"));
        let server = StorefrontServer::new(catalog, StorefrontSettings::default());

        Client::tracked(server.build()).expect("valid rocket instance")
    }

    fn get_json(client: &Client, uri: &str) -> Value {
        let response = client.get(uri).dispatch();
        assert_eq!(response.status(), Status::Ok, "GET {}", uri);
        response.into_json().expect("json body")
    }

    fn slugs(listing: &Value) -> Vec<String> {
        listing["themes"]
            .as_array()
            .expect("themes array")
            .iter()
            .map(|card| card["theme"]["slug"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_pages() {
        let client = client();

        let index = client.get("/").dispatch();
        assert_eq!(index.status(), Status::Ok);
        let body = index.into_string().unwrap_or_default();
        assert!(body.contains("hello@spectrumthemes.dev"));

        let detail = client.get("/themes/aurora-saas").dispatch();
        assert_eq!(detail.status(), Status::Ok);
        assert!(detail.into_string().unwrap_or_default().contains("aurora-saas"));

        assert_eq!(client.get("/themes/nope").dispatch().status(), Status::NotFound);
        assert_eq!(client.get("/styles.css").dispatch().status(), Status::Ok);
        assert_eq!(client.get("/script.js").dispatch().status(), Status::Ok);
    }

    #[test]
    fn test_unfiltered_listing() {
        let client = client();
        let listing = get_json(&client, "/api/themes");

        assert_eq!(slugs(&listing).len(), 8);
        assert_eq!(listing["summary"]["headline"], "8 themes.");
        assert_eq!(listing["summary"]["search_active"], false);

        let blank = get_json(&client, "/api/themes?search=&category=&layout=&tag=");
        assert_eq!(slugs(&blank).len(), 8);
    }

    #[test]
    fn test_filtered_listing() {
        let client = client();

        let listing = get_json(&client, "/api/themes?search=dark");
        assert_eq!(
            slugs(&listing),
            vec!["aurora-saas", "nocturne-agency", "helix-devtools"]
        );

        let listing = get_json(&client, "/api/themes?category=SaaS&layout=dark");
        assert_eq!(slugs(&listing), vec!["aurora-saas", "helix-devtools"]);
        assert_eq!(listing["summary"]["headline"], "2 themes in SaaS.");

        let listing = get_json(&client, "/api/themes?tag=marketing-landing");
        assert_eq!(
            slugs(&listing),
            vec!["aurora-saas", "vector-commerce", "orbit-startup"]
        );
    }

    #[test]
    fn test_out_of_domain_values_match_nothing() {
        let client = client();

        for layout in ["sepia", "DARK", "Dark", "ALL"] {
            let listing = get_json(&client, &format!("/api/themes?layout={}", layout));
            assert!(slugs(&listing).is_empty(), "layout={}", layout);
            assert_eq!(listing["summary"]["layout"], "unknown");
        }

        let listing = get_json(&client, "/api/themes?category=Blog");
        assert!(slugs(&listing).is_empty());
        assert_eq!(listing["summary"]["headline"], "0 themes in Blog.");
    }

    #[test]
    fn test_theme_detail() {
        let client = client();
        let detail = get_json(&client, "/api/themes/aurora-saas");

        assert_eq!(detail["theme"]["slug"], "aurora-saas");
        assert_eq!(detail["preview"]["mode_label"], "Dark UI");

        let related: Vec<&str> = detail["related"]
            .as_array()
            .expect("related array")
            .iter()
            .filter_map(|card| card["theme"]["slug"].as_str())
            .collect();
        assert_eq!(related, vec!["pulse-analytics", "helix-devtools"]);

        assert_eq!(
            client.get("/api/themes/nope").dispatch().status(),
            Status::NotFound
        );
    }

    #[test]
    fn test_catalog_endpoints() {
        let client = client();

        let categories = get_json(&client, "/api/categories");
        assert_eq!(
            categories,
            serde_json::json!(["Agency", "Ecommerce", "Portfolio", "SaaS", "Startup"])
        );

        let tags = get_json(&client, "/api/tags");
        assert_eq!(tags.as_array().map(Vec::len), Some(17));

        let groups = get_json(&client, "/api/tags/groups");
        assert!(!groups.as_array().expect("groups array").is_empty());

        let featured = get_json(&client, "/api/featured");
        assert_eq!(featured.as_array().map(Vec::len), Some(3));
        assert_eq!(featured[0]["theme"]["slug"], "aurora-saas");

        let stats = get_json(&client, "/api/stats");
        assert_eq!(stats["total_themes"], 8);
        assert_eq!(stats["total_installs"], 8650);
    }
}
