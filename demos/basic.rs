use urlbuild::{Settings, UrlBuilder};

fn main() {
    // Parse a URL and overwrite one of its arguments
    let mut url = UrlBuilder::new("http://example.com/foo?bar=Bar", Settings::default())
        .expect("Failed to parse URL");
    url.add_query_argument("bar", "Baz")
        .expect("Failed to add argument");

    println!("URL: {url}"); // http://example.com/foo?bar=Baz
    println!("Path: {}", url.path()); // http://example.com/foo
    println!("bar: {:?}", url.get("bar")); // Some("Baz")
}
