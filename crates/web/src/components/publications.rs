//! Blog and article page bodies

use herbarium::publications::Publication;
use maud::{Markup, html};

use crate::components::{
    cards::{byline, publication_card},
    markdown,
};

/// A top-level reading section: `/blog` or `/articles`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Section {
    pub(crate) name: &'static str,
    pub(crate) path: &'static str,
}

/// Listing body: category chips, featured block, then the most recent.
pub(crate) fn listing<T: Publication>(
    section: Section,
    categories: &[String],
    active_category: Option<&str>,
    featured: &[&T],
    recent: &[T],
) -> Markup {
    html! {
        nav.category-chips aria-label="Categories" {
            a.chip.active[active_category.is_none()] href=(section.path) { "All" }
            @for category in categories {
                a.chip.active[active_category.is_some_and(|active| active.eq_ignore_ascii_case(category))]
                    href=(format!("{}?category={}", section.path, urlencoding::encode(category))) {
                    (category)
                }
            }
        }
        @if !featured.is_empty() {
            section.featured {
                h2 { "Featured" }
                div.grid {
                    @for item in featured {
                        (publication_card(*item))
                    }
                }
            }
        }
        section.recent {
            h2 { "Latest" }
            @if recent.is_empty() {
                p.empty { "Nothing published here yet." }
            } @else {
                div.grid {
                    @for item in recent {
                        (publication_card(item))
                    }
                }
            }
        }
    }
}

/// Detail body: header, rendered markdown, tags and `aside` (related items).
pub(crate) fn detail<T: Publication>(section: Section, item: &T, aside: Markup) -> Markup {
    html! {
        nav.breadcrumb aria-label="Breadcrumb" {
            a href="/" { "Home" } " / "
            a href=(section.path) { (section.name) } " / "
            span { (item.title()) }
        }
        article.publication {
            header {
                p.category {
                    a href=(format!("{}?category={}", section.path, urlencoding::encode(item.category()))) {
                        (item.category())
                    }
                }
                @if item.is_featured() {
                    span.badge.badge-featured { "Featured" }
                }
                h1 { (item.title()) }
                p.excerpt { (item.excerpt()) }
                (byline(item))
                @if !item.image().is_empty() {
                    img.cover src=(item.image()) alt=(item.title());
                }
            }
            div.body { (markdown::render(item.content())) }
            @if !item.tags().is_empty() {
                ul.tags {
                    @for tag in item.tags() {
                        li { (tag) }
                    }
                }
            }
        }
        (aside)
    }
}

/// Related publications block; empty when there are none.
pub(crate) fn related<T: Publication>(heading: &str, items: &[&T]) -> Markup {
    html! {
        @if !items.is_empty() {
            section.related {
                h2 { (heading) }
                div.grid {
                    @for item in items {
                        (publication_card(*item))
                    }
                }
            }
        }
    }
}
