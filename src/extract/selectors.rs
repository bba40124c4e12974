//! CSS selectors for product page extraction.
//!
//! This file contains all selectors used to locate product fields on
//! supported retail sites. Update this file when a site changes its HTML
//! structure.
//!
//! **Update process**: When extraction fails, capture an HTML sample,
//! update selectors, and add a test fixture.
//!
//! Catalogs are plain string lists rather than pre-parsed `Selector`s:
//! entries are ordered most-reliable first and may use syntax a parser
//! backend rejects, so each one is parsed (and, on failure, skipped) at
//! match time.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for Amazon product pages (as of 2025).
pub mod amazon {
    /// Product title, most stable id first.
    pub static TITLE: &[&str] = &["#productTitle", "#title", "h1.product-title"];

    /// Price locations, current layout first, legacy priceblock ids after.
    pub static PRICE: &[&str] = &[
        ".a-price .a-offscreen",
        "#corePriceDisplay_desktop_feature_div .a-offscreen",
        "#priceblock_ourprice",
        "#priceblock_dealprice",
        ".a-price-whole",
        "span.a-color-price",
        "#price_inside_buybox",
        ".apexPriceToPay .a-offscreen",
    ];

    /// Feature bullet containers, falling through to the plain description.
    pub static DESCRIPTION: &[&str] = &[
        "#feature-bullets",
        "#featurebullets_feature_div",
        ".a-unordered-list.a-vertical",
        "#productDescription",
    ];
}

/// Selectors for Flipkart product pages.
///
/// Flipkart ships hashed class names that rotate with front-end builds;
/// substring matches cover the known generations.
pub mod flipkart {
    pub static TITLE: &[&str] = &["span.VU-ZEz", "h1.yhB1nd", ".B_NuCI", "h1 span"];

    pub static PRICE: &[&str] = &[
        "div[class*=\"Nx9bqj\"]",
        "div[class*=\"_30jeq3\"]",
        "div[class*=\"_3I9_wc\"]",
        "._30jeq3._16Jk6d",
        "div._16Jk6d",
    ];

    pub static DESCRIPTION: &[&str] =
        &["div._1mXcCf", "div._1AN87F", "ul._1xgFaf", "div[class*=\"mXcCf\"]"];
}

/// Generic catalogs for unrecognized sites: class/id substring heuristics.
pub mod generic {
    pub static PRICE: &[&str] = &[".price", ".cost", "[class*=\"price\"]", "[id*=\"price\"]"];

    pub static DESCRIPTION: &[&str] =
        &[".description", ".product-description", "[class*=\"description\"]"];
}

/// Known-valid structural selectors, parsed once at first use.
pub(crate) static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").unwrap());

pub(crate) static LIST_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").unwrap());

pub(crate) static UNORDERED_LIST: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul").unwrap());

pub(crate) static FEATURE_LISTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul, ol").unwrap());

pub(crate) static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[name=\"description\"]").unwrap());

pub(crate) static PAGE_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").unwrap());

pub(crate) static AMAZON_PRODUCT_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div#productDescription").unwrap());
