//! Page chrome

use herbarium::{site::Site, structured_data};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde_json::Value;

const NAV: [(&str, &str); 6] = [
    ("/", "Home"),
    ("/products", "Products"),
    ("/articles", "Articles"),
    ("/blog", "Blog"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

const FOOTER_SHOP: [(&str, &str); 4] = [
    ("/products?category=Wellness", "Wellness"),
    ("/products?category=Hair%20Care", "Hair Care"),
    ("/products?category=Skincare", "Skincare"),
    ("/products?category=Supplements", "Supplements"),
];

const FOOTER_LEARN: [(&str, &str); 3] = [
    ("/articles", "Articles"),
    ("/blog", "Blog"),
    ("/about", "Our Heritage"),
];

/// Per-page `<head>` values.
#[derive(Debug, Default)]
pub(crate) struct Head<'a> {
    /// Page title; the bare site name is used when absent.
    pub(crate) title: Option<&'a str>,
    /// Meta description; the site description is used when absent.
    pub(crate) description: Option<&'a str>,
    /// Site-relative canonical path.
    pub(crate) path: &'a str,
    pub(crate) keywords: &'a [String],
    /// Extra JSON-LD blocks for this page.
    pub(crate) structured_data: Vec<Value>,
}

fn full_title(site: &Site, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("{title} | {}", site.name),
        None => site.name.clone(),
    }
}

fn json_ld(value: &Value) -> Markup {
    html! {
        script type="application/ld+json" { (PreEscaped(structured_data::to_script(value))) }
    }
}

fn is_current(path: &str, href: &str) -> bool {
    if href == "/" {
        path == "/"
    } else {
        path == href || path.starts_with(&format!("{href}/"))
    }
}

fn header(site: &Site, path: &str) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { (site.name) }
            nav.site-nav aria-label="Main" {
                ul {
                    @for (href, label) in NAV {
                        li {
                            a href=(href) aria-current=[is_current(path, href).then_some("page")] {
                                (label)
                            }
                        }
                    }
                }
            }
            form.site-search action="/products" method="get" role="search" {
                input type="search" name="search" placeholder="Search products" aria-label="Search products";
            }
        }
    }
}

fn link_list(heading: &str, links: &[(&str, &str)]) -> Markup {
    html! {
        div.footer-links {
            h3 { (heading) }
            ul {
                @for (href, label) in links {
                    li { a href=(href) { (label) } }
                }
            }
        }
    }
}

fn footer(site: &Site) -> Markup {
    html! {
        footer.site-footer {
            div.footer-brand {
                p.brand { (site.name) }
                p { (site.description) }
                ul.contact-details {
                    li { "+91 98765 43210" }
                    li { a href="mailto:info@cornerayurveda.com" { "info@cornerayurveda.com" } }
                }
            }
            (link_list("Shop", &FOOTER_SHOP))
            (link_list("Learn", &FOOTER_LEARN))
            (link_list("Company", &[("/about", "About Us"), ("/contact", "Contact")]))
            p.copyright { "© " (site.name) ". All rights reserved." }
        }
    }
}

/// Full HTML document around `content`.
pub(crate) fn document(site: &Site, head: &Head<'_>, content: Markup) -> Markup {
    let title = full_title(site, head.title);
    let description = head.description.unwrap_or(&site.description);
    let canonical = site.url(head.path);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(description);
                @if !head.keywords.is_empty() {
                    meta name="keywords" content=(head.keywords.join(", "));
                }
                meta name="theme-color" content=(site.theme_color);
                link rel="canonical" href=(canonical);
                link rel="manifest" href="/manifest.webmanifest";
                link rel="apple-touch-icon" href="/apple-touch-icon.png";
                link rel="stylesheet" href="/static/site.css";
                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                meta property="og:url" content=(canonical);
                meta property="og:site_name" content=(site.name);
                (json_ld(&structured_data::organization(site)))
                (json_ld(&structured_data::website(site)))
                @for value in &head.structured_data {
                    (json_ld(value))
                }
            }
            body {
                (header(site, head.path))
                main { (content) }
                (footer(site))
            }
        }
    }
}
