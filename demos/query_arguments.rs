/// Merging and sorting query arguments
use urlbuild::{Settings, SettingsPatch, SortFlags, UrlBuilder};

fn main() {
    let mut url =
        UrlBuilder::new("/list?page=1", Settings::default()).expect("Failed to parse URL");

    // Merge several arguments at once
    url.add_query_arguments([("z", "z"), ("b", "B"), ("a", "A")])
        .expect("Failed to add arguments");
    println!("Insertion order: {url}"); // /list?page=1&z=z&b=B&a=A

    // Sort keys before rendering
    url.update_settings(SettingsPatch::new().with_sort(true));
    println!("Sorted: {url}"); // /list?a=A&b=B&page=1&z=z

    // Natural ordering for numbered keys
    url.add_query_argument("item10", "x")
        .expect("Failed to add argument")
        .add_query_argument("item2", "y")
        .expect("Failed to add argument");
    url.update_settings(SettingsPatch::new().with_sort_flags(SortFlags::Natural));
    println!("Natural: {url}"); // /list?a=A&b=B&item2=y&item10=x&page=1&z=z

    println!("All arguments:");
    for (key, value) in url.arguments().iter() {
        println!("  {key} = {value}");
    }
}
