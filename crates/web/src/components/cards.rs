//! Cards, badges and ratings

use herbarium::{
    dates,
    products::Product,
    publications::{ContentItem, Publication},
    site::Site,
};
use maud::{Markup, html};

/// Five-star rating, rounded to the nearest half star.
pub(crate) fn star_rating(rating: f64, review_count: u32) -> Markup {
    let halves = (rating.clamp(0.0, 5.0) * 2.0).round();

    html! {
        div.rating aria-label=(format!("Rated {rating:.1} out of 5")) {
            @for star in 1..=5_u8 {
                @let full = f64::from(star) * 2.0;
                @if halves >= full {
                    span.star.full { "★" }
                } @else if halves + 1.0 >= full {
                    span.star.half { "★" }
                } @else {
                    span.star.empty { "☆" }
                }
            }
            span.rating-value { (format!("{rating:.1}")) }
            @if review_count > 0 {
                span.review-count { "(" (review_count) ")" }
            }
        }
    }
}

/// New / bestseller / discount / stock badges.
pub(crate) fn product_badges(product: &Product) -> Markup {
    html! {
        div.badges {
            @if product.is_new {
                span.badge.badge-new { "New" }
            }
            @if product.is_bestseller {
                span.badge.badge-bestseller { "Bestseller" }
            }
            @if let Some(discount) = product.discount_percentage() {
                span.badge.badge-discount { (discount) "% OFF" }
            }
            @if !product.in_stock {
                span.badge.badge-out-of-stock { "Out of Stock" }
            }
        }
    }
}

/// Current price, with the original struck through when discounted.
pub(crate) fn price(site: &Site, product: &Product) -> Markup {
    html! {
        div.price {
            span.current { (site.format_price(product.price)) }
            @if let Some(original) = product.original_price.filter(|original| *original > product.price) {
                del.original { (site.format_price(original)) }
            }
        }
    }
}

pub(crate) fn product_card(site: &Site, product: &Product) -> Markup {
    let href = product.path();

    html! {
        article.card.product-card {
            a href=(href) {
                img src=(product.image) alt=(product.name) loading="lazy";
            }
            (product_badges(product))
            div.card-body {
                p.category { (product.category) }
                h3 { a href=(href) { (product.name) } }
                (star_rating(product.rating, product.review_count))
                (price(site, product))
            }
        }
    }
}

/// Byline: author, publish date and reading time.
pub(crate) fn byline<T: Publication>(item: &T) -> Markup {
    html! {
        p.byline {
            @if !item.author().is_empty() {
                span.author { (item.author()) }
            }
            @if let Some(published) = item.published_at() {
                time datetime=(dates::format_ymd(published)) { (dates::format_long(published)) }
            }
            @if item.read_time() > 0 {
                span.read-time { (item.read_time()) " min read" }
            }
        }
    }
}

/// Card for a blog post or article.
pub(crate) fn publication_card<T: Publication>(item: &T) -> Markup {
    let href = item.path();

    html! {
        article.card.publication-card {
            @if !item.image().is_empty() {
                a href=(href) {
                    img src=(item.image()) alt=(item.title()) loading="lazy";
                }
            }
            div.card-body {
                p.category { (item.category()) }
                h3 { a href=(href) { (item.title()) } }
                p.excerpt { (item.excerpt()) }
                (byline(item))
            }
        }
    }
}

/// Search hit, labelled with its kind.
pub(crate) fn content_card(item: &ContentItem) -> Markup {
    html! {
        div.content-hit {
            span.badge.badge-kind { (item.kind()) }
            (publication_card(item))
        }
    }
}

#[cfg(test)]
mod tests {
    use herbarium::ids::ProductId;
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::test_helpers::{make_post, make_product};

    use super::*;

    #[test]
    fn half_stars_round_to_nearest_half() {
        let html = star_rating(4.3, 12).into_string();

        assert_eq!(html.matches("star full").count(), 4);
        assert_eq!(html.matches("star half").count(), 1);
        assert!(html.contains("(12)"), "{html}");
    }

    #[test]
    fn discounted_product_shows_badge_and_original_price() {
        let site = Site::default();
        let mut product = make_product(ProductId::new("1"), "Wellness");
        product.price = 89_900;
        product.original_price = Some(119_900);

        let html = product_card(&site, &product).into_string();

        assert!(html.contains("25% OFF"), "{html}");
        assert!(html.contains("<del class=\"original\">"), "{html}");
        assert!(html.contains(r#"href="/products/1""#), "{html}");
    }

    #[test]
    fn card_link_encodes_the_id() {
        let product = make_product(ProductId::new("oil 100ml"), "Hair Care");

        let html = product_card(&Site::default(), &product).into_string();

        assert!(html.contains(r#"href="/products/oil%20100ml""#), "{html}");
    }

    #[test]
    fn out_of_stock_is_flagged() {
        let mut product = make_product(ProductId::new("1"), "Wellness");
        product.in_stock = false;

        assert!(product_badges(&product).into_string().contains("Out of Stock"));
    }

    #[test]
    fn byline_formats_publish_date() -> TestResult {
        let mut post = make_post("calm", "Herbs");
        post.published_at = Some("2024-01-15T00:00:00Z".parse::<Timestamp>()?);

        let html = byline(&post).into_string();

        assert!(html.contains("January 15, 2024"), "{html}");
        assert!(html.contains(r#"datetime="2024-01-15""#), "{html}");

        Ok(())
    }
}
