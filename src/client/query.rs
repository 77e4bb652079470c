//! Resource paths, filters and query strings
//!
//! Catalog queries put their filters in the path:
//! `products(manufacturer=canon&salePrice<250)`. Paging, sorting and the
//! API key travel in the query string.

use url::Url;

pub const PATH_PRODUCTS: &str = "products";
pub const PATH_STORES: &str = "stores";

/// Separator between filters inside parentheses
pub const FILTER_DELIMITER: &str = "&";

/// Query parameter carrying the API key
pub const API_KEY_PARAM: &str = "apiKey";

/// Join filters with `&` inside parentheses; empty when there are none
pub fn filter_string<S: AsRef<str>>(filters: &[S]) -> String {
    if filters.is_empty() {
        return String::new();
    }
    let joined: Vec<&str> = filters.iter().map(AsRef::as_ref).collect();
    format!("({})", joined.join(FILTER_DELIMITER))
}

pub fn product_path(sku: &str) -> String {
    format!("{}/{}.xml", PATH_PRODUCTS, sku)
}

pub fn store_path(store_id: &str) -> String {
    format!("{}/{}.xml", PATH_STORES, store_id)
}

pub fn products_path<S: AsRef<str>>(filters: &[S]) -> String {
    format!("{}{}", PATH_PRODUCTS, filter_string(filters))
}

pub fn stores_path<S: AsRef<str>>(filters: &[S]) -> String {
    format!("{}{}", PATH_STORES, filter_string(filters))
}

/// `stores(...)+products(...)`: stores carrying products that match both filter sets
pub fn availability_path<S: AsRef<str>, P: AsRef<str>>(store_filters: &[S], product_filters: &[P]) -> String {
    format!("{}+{}", stores_path(store_filters), products_path(product_filters))
}

/// Resolve `path` against the entry point and append the query string
///
/// The API key always comes first. Parameters without a value are skipped,
/// as is any caller-supplied `apiKey`.
pub fn build_url(
    entry_point: &Url,
    path: &str,
    api_key: &str,
    params: &[(&str, Option<&str>)],
) -> Result<Url, url::ParseError> {
    let mut url = entry_point.join(path)?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair(API_KEY_PARAM, api_key);
        for (name, value) in params {
            if *name == API_KEY_PARAM {
                continue;
            }
            if let Some(value) = value {
                query.append_pair(name, value);
            }
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = "http://api.remix.bestbuy.com/v1/";

    #[test]
    fn test_filter_string() {
        assert_eq!(filter_string::<&str>(&[]), "");
        assert_eq!(filter_string(&["sku=1"]), "(sku=1)");
        assert_eq!(
            filter_string(&["manufacturer=canon", "salePrice<250"]),
            "(manufacturer=canon&salePrice<250)"
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(product_path("8880044"), "products/8880044.xml");
        assert_eq!(store_path("281"), "stores/281.xml");
        assert_eq!(products_path::<&str>(&[]), "products");
        assert_eq!(
            availability_path(&["area(10001,10)"], &["sku=8880044"]),
            "stores(area(10001,10))+products(sku=8880044)"
        );
    }

    #[test]
    fn test_build_url() {
        let entry = Url::parse(ENTRY).unwrap();
        let url = build_url(
            &entry,
            &products_path(&["sku=1"]),
            "KEY",
            &[("page", Some("2")), ("sort", None), ("apiKey", Some("other"))],
        )
        .unwrap();
        assert_eq!(url.path(), "/v1/products(sku=1)");
        assert_eq!(url.query(), Some("apiKey=KEY&page=2"));
    }

    #[test]
    fn test_build_url_without_params() {
        let entry = Url::parse(ENTRY).unwrap();
        let url = build_url(&entry, &store_path("281"), "KEY", &[]).unwrap();
        assert_eq!(url.as_str(), "http://api.remix.bestbuy.com/v1/stores/281.xml?apiKey=KEY");
    }
}
